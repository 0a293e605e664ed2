//! Job catalog and skill taxonomy.
//!
//! Both are plain data handed to `JobCatalog` at startup, either loaded from a
//! JSON file or taken from the built-in seed set. Nothing here is global; the
//! match engine only ever sees the slice of postings it is given.

pub mod handlers;
pub mod search;
pub mod seed;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::job::JobPosting;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Fullstack,
    Devops,
    Data,
    Ai,
    Design,
    Other,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Fullstack => "Full Stack",
            SkillCategory::Devops => "DevOps",
            SkillCategory::Data => "Data",
            SkillCategory::Ai => "AI/ML",
            SkillCategory::Design => "Design",
            SkillCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillInfo {
    /// Lower-case identifier, the form stored in `required_skills`.
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
}

/// Skills a candidate can pick during onboarding.
#[derive(Debug, Clone, Default)]
pub struct SkillTaxonomy {
    skills: Vec<SkillInfo>,
}

impl SkillTaxonomy {
    pub fn new(skills: Vec<SkillInfo>) -> Self {
        Self { skills }
    }

    pub fn all(&self) -> &[SkillInfo] {
        &self.skills
    }

    pub fn lookup(&self, id: &str) -> Option<&SkillInfo> {
        self.skills.iter().find(|s| s.id.eq_ignore_ascii_case(id.trim()))
    }

    pub fn by_category(&self) -> BTreeMap<SkillCategory, Vec<&SkillInfo>> {
        let mut grouped: BTreeMap<SkillCategory, Vec<&SkillInfo>> = BTreeMap::new();
        for skill in &self.skills {
            grouped.entry(skill.category).or_default().push(skill);
        }
        grouped
    }
}

/// The postings the swipe deck is drawn from, plus the skill taxonomy.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<JobPosting>,
    skills: SkillTaxonomy,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobPosting>, skills: SkillTaxonomy) -> Self {
        Self { jobs, skills }
    }

    /// Built-in postings and taxonomy.
    pub fn seeded() -> Self {
        Self::new(seed::seed_jobs(), SkillTaxonomy::new(seed::seed_skills()))
    }

    /// Loads postings from a JSON array on disk; the taxonomy stays built-in.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job catalog at {}", path.display()))?;
        let jobs: Vec<JobPosting> = serde_json::from_str(&raw)
            .with_context(|| format!("Job catalog at {} is not valid JSON", path.display()))?;

        let catalog = Self::new(jobs, SkillTaxonomy::new(seed::seed_skills()));
        catalog.log_suspect_entries();
        Ok(catalog)
    }

    /// Loads from `path` if given, otherwise the seed catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(p) => Self::from_path(p)?,
            None => Self::seeded(),
        };
        info!(
            "Job catalog loaded: {} postings, {} skills",
            catalog.jobs.len(),
            catalog.skills.all().len()
        );
        Ok(catalog)
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn skills(&self) -> &SkillTaxonomy {
        &self.skills
    }

    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|j| j.id == id)
    }

    // Entries are kept as-is; the warning is for whoever maintains the file.
    fn log_suspect_entries(&self) {
        let mut seen = HashSet::new();
        for job in &self.jobs {
            if !seen.insert(job.id.as_str()) {
                warn!(job_id = %job.id, "duplicate job id in catalog");
            }
            if job.required_skills.is_empty() {
                warn!(job_id = %job.id, "posting has no required skills and will never match");
            }
            if job.salary_range.min > job.salary_range.max {
                warn!(job_id = %job.id, "posting salary range is inverted");
            }
        }
    }
}
