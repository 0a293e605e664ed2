// Built-in catalog used when no JOB_CATALOG_PATH is configured.

use chrono::NaiveDate;

use crate::catalog::{SkillCategory, SkillInfo};
use crate::models::job::{JobPosting, SalaryRange, WorkType};

struct SeedJob {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    work_type: WorkType,
    salary: (i64, i64),
    description: &'static str,
    required: &'static [&'static str],
    nice_to_have: &'static [&'static str],
    posted: (i32, u32, u32),
}

const SEED_JOBS: &[SeedJob] = &[
    SeedJob {
        id: "1",
        title: "Senior Frontend Developer",
        company: "Tech Innovators Inc.",
        location: "San Francisco, CA",
        work_type: WorkType::Hybrid,
        salary: (140_000, 180_000),
        description: "Build scalable web applications with React and TypeScript.",
        required: &["react", "typescript", "tailwind"],
        nice_to_have: &["nextjs", "graphql"],
        posted: (2024, 1, 5),
    },
    SeedJob {
        id: "2",
        title: "Backend Developer (Laravel)",
        company: "CloudBase Systems",
        location: "Remote",
        work_type: WorkType::Remote,
        salary: (110_000, 150_000),
        description: "Scale our high-throughput PHP messaging infrastructure.",
        required: &["php", "laravel", "sql"],
        nice_to_have: &["docker", "aws"],
        posted: (2024, 1, 3),
    },
    SeedJob {
        id: "3",
        title: "Python Django Engineer",
        company: "DataFlow Analytics",
        location: "Austin, TX",
        work_type: WorkType::Remote,
        salary: (130_000, 160_000),
        description: "Build robust APIs for millions of users using Django.",
        required: &["python", "django", "postgresql"],
        nice_to_have: &["redis", "celery"],
        posted: (2024, 1, 4),
    },
    SeedJob {
        id: "4",
        title: "Cloud Infrastructure Engineer",
        company: "CloudOps Pro",
        location: "Seattle, WA",
        work_type: WorkType::Hybrid,
        salary: (130_000, 170_000),
        description: "Manage our global Google Cloud fleet and Kubernetes clusters.",
        required: &["gcp", "kubernetes", "docker"],
        nice_to_have: &["terraform", "go"],
        posted: (2024, 1, 2),
    },
    SeedJob {
        id: "5",
        title: "Full Stack Developer",
        company: "StartUp Rocket",
        location: "Boston, MA",
        work_type: WorkType::Onsite,
        salary: (115_000, 155_000),
        description: "Wear many hats in a fast-paced environment. Node & React.",
        required: &["nodejs", "react", "mongodb"],
        nice_to_have: &["aws"],
        posted: (2024, 1, 1),
    },
    SeedJob {
        id: "6",
        title: "Machine Learning Engineer",
        company: "AI Ventures",
        location: "Mountain View, CA",
        work_type: WorkType::Hybrid,
        salary: (150_000, 200_000),
        description: "Develop ML models using TensorFlow and PyTorch.",
        required: &["python", "tensorflow", "pytorch"],
        nice_to_have: &["nlp", "cv"],
        posted: (2024, 1, 4),
    },
    SeedJob {
        id: "7",
        title: "QA Automation Engineer",
        company: "Quality First Labs",
        location: "Chicago, IL",
        work_type: WorkType::Remote,
        salary: (90_000, 130_000),
        description: "Create automation tests and frameworks.",
        required: &["testing", "javascript", "python"],
        nice_to_have: &["ci-cd"],
        posted: (2024, 1, 3),
    },
];

const SEED_SKILLS: &[(&str, &str, SkillCategory)] = &[
    ("react", "React", SkillCategory::Frontend),
    ("vue", "Vue.js", SkillCategory::Frontend),
    ("angular", "Angular", SkillCategory::Frontend),
    ("typescript", "TypeScript", SkillCategory::Frontend),
    ("tailwind", "Tailwind CSS", SkillCategory::Frontend),
    ("nextjs", "Next.js", SkillCategory::Frontend),
    ("nodejs", "Node.js", SkillCategory::Backend),
    ("python", "Python", SkillCategory::Backend),
    ("java", "Java", SkillCategory::Backend),
    ("golang", "Go", SkillCategory::Backend),
    ("dotnet", ".NET", SkillCategory::Backend),
    ("php", "PHP", SkillCategory::Backend),
    ("laravel", "Laravel", SkillCategory::Backend),
    ("javascript", "JavaScript", SkillCategory::Fullstack),
    ("express", "Express.js", SkillCategory::Fullstack),
    ("fastapi", "FastAPI", SkillCategory::Fullstack),
    ("django", "Django", SkillCategory::Fullstack),
    ("docker", "Docker", SkillCategory::Devops),
    ("kubernetes", "Kubernetes", SkillCategory::Devops),
    ("aws", "AWS", SkillCategory::Devops),
    ("gcp", "Google Cloud", SkillCategory::Devops),
    ("azure", "Azure", SkillCategory::Devops),
    ("ci-cd", "CI/CD", SkillCategory::Devops),
    ("sql", "SQL", SkillCategory::Data),
    ("postgresql", "PostgreSQL", SkillCategory::Data),
    ("mongodb", "MongoDB", SkillCategory::Data),
    ("spark", "Apache Spark", SkillCategory::Data),
    ("airflow", "Apache Airflow", SkillCategory::Data),
    ("snowflake", "Snowflake", SkillCategory::Data),
    ("tensorflow", "TensorFlow", SkillCategory::Ai),
    ("pytorch", "PyTorch", SkillCategory::Ai),
    ("scikit", "Scikit-learn", SkillCategory::Ai),
    ("nlp", "NLP", SkillCategory::Ai),
    ("cv", "Computer Vision", SkillCategory::Ai),
    ("figma", "Figma", SkillCategory::Design),
    ("ux", "UX Design", SkillCategory::Design),
    ("ui", "UI Design", SkillCategory::Design),
    ("git", "Git/GitHub", SkillCategory::Other),
    ("graphql", "GraphQL", SkillCategory::Other),
    ("rest", "REST APIs", SkillCategory::Other),
    ("testing", "Testing", SkillCategory::Other),
];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_jobs() -> Vec<JobPosting> {
    SEED_JOBS
        .iter()
        .map(|s| {
            let (y, m, d) = s.posted;
            JobPosting {
                id: s.id.to_string(),
                title: s.title.to_string(),
                company: s.company.to_string(),
                location: s.location.to_string(),
                description: s.description.to_string(),
                work_type: s.work_type,
                salary_range: SalaryRange {
                    min: s.salary.0,
                    max: s.salary.1,
                },
                required_skills: to_strings(s.required),
                nice_to_have_skills: to_strings(s.nice_to_have),
                posted_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            }
        })
        .collect()
}

pub fn seed_skills() -> Vec<SkillInfo> {
    SEED_SKILLS
        .iter()
        .map(|(id, name, category)| SkillInfo {
            id: id.to_string(),
            name: name.to_string(),
            category: *category,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_are_valid() {
        let epoch = NaiveDate::default();
        assert!(seed_jobs().iter().all(|j| j.posted_date != epoch));
    }

    #[test]
    fn test_seed_skill_ids_unique() {
        let skills = seed_skills();
        let mut ids: Vec<_> = skills.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), skills.len());
    }
}
