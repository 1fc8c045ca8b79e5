//! Job catalog: the profiles candidates are matched against, plus the target-role
//! skill list used for the missing-skills report.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    /// Descriptive only; never part of matching.
    pub company: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCatalog {
    pub jobs: Vec<JobProfile>,
    pub target_role_skills: Vec<String>,
}

impl Default for JobCatalog {
    fn default() -> Self {
        fn job(title: &str, company: &str, skills: &[&str]) -> JobProfile {
            JobProfile {
                title: title.to_string(),
                company: company.to_string(),
                required_skills: skills.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self {
            jobs: vec![
                job("Data Analyst", "Insight Labs", &["SQL", "Data Analysis", "Excel"]),
                job(
                    "Machine Learning Engineer",
                    "Neural Works",
                    &["Python", "Machine Learning", "Deep Learning", "TensorFlow"],
                ),
                job(
                    "Backend Developer",
                    "Cloudline Systems",
                    &["Python", "SQL", "REST APIs", "Docker"],
                ),
                job(
                    "Business Analyst",
                    "Brightpath Consulting",
                    &["Communication", "Excel", "Data Analysis", "Stakeholder Management"],
                ),
            ],
            target_role_skills: ["Python", "SQL", "Machine Learning", "Communication", "Data Analysis"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl JobCatalog {
    /// Loads a catalog from a JSON file of the form `{ "jobs": [...], "target_role_skills": [...] }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job catalog {}", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("Invalid job catalog {}", path.display()))?;
        info!(
            "Loaded {} job profiles from {}",
            catalog.jobs.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let catalog: JobCatalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every profile must name at least one non-blank required skill.
    pub fn validate(&self) -> Result<()> {
        for job in &self.jobs {
            if job.required_skills.iter().all(|s| s.trim().is_empty()) {
                bail!("Job '{}' has no required skills", job.title);
            }
        }
        Ok(())
    }
}
