use serde::Deserialize;

use crate::models::job::{JobPosting, WorkType};

const DEFAULT_MAX_SALARY: i64 = 300_000;

/// Free-text and facet filter over the catalog. Deserializes straight from
/// query parameters; every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JobSearchFilter {
    pub query: String,
    pub min_salary: i64,
    pub max_salary: i64,
    pub work_type: Option<WorkType>,
}

impl Default for JobSearchFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_salary: 0,
            max_salary: DEFAULT_MAX_SALARY,
            work_type: None,
        }
    }
}

impl JobSearchFilter {
    /// Query hits title, company or description (case-insensitive); the
    /// posting's whole salary band must sit inside [min_salary, max_salary].
    pub fn matches(&self, job: &JobPosting) -> bool {
        let needle = self.query.trim().to_lowercase();
        let matches_query = needle.is_empty()
            || [&job.title, &job.company, &job.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));

        let matches_salary =
            job.salary_range.min >= self.min_salary && job.salary_range.max <= self.max_salary;

        let matches_work_type = self.work_type.map_or(true, |wt| job.work_type == wt);

        matches_query && matches_salary && matches_work_type
    }

    pub fn apply<'a>(&self, jobs: &'a [JobPosting]) -> Vec<&'a JobPosting> {
        jobs.iter().filter(|j| self.matches(j)).collect()
    }
}
