//! Full screening report for one résumé: statistics, extracted skills, job matches
//! and missing target-role skills.
//!
//! Skill extraction failures do not fail the report. They are returned as
//! warnings next to the statistics, which never depend on the extractor.

use serde::Serialize;
use tracing::warn;

use crate::screening::catalog::JobCatalog;
use crate::screening::extraction::SkillExtractor;
use crate::screening::matching::{match_jobs, missing_skills_with_resources, MatchResult, MissingSkill};
use crate::screening::skills::{split_skill_list, SkillSet};
use crate::screening::stats::{compute_statistics, ResumeStatistics};

#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    pub statistics: ResumeStatistics,
    pub skills: Vec<String>,
    pub matches: Vec<MatchResult>,
    pub missing_skills: Vec<MissingSkill>,
    pub warnings: Vec<String>,
}

/// Builds the report for an already-extracted skill set.
pub fn report_for_skills(text: &str, skills: &SkillSet, catalog: &JobCatalog) -> GapReport {
    GapReport {
        statistics: compute_statistics(text),
        skills: skills.display_names(),
        matches: match_jobs(skills, &catalog.jobs),
        missing_skills: missing_skills_with_resources(skills, &catalog.target_role_skills),
        warnings: vec![],
    }
}

/// Runs the extractor over `text` and builds the report.
pub async fn build_gap_report(
    text: &str,
    extractor: &dyn SkillExtractor,
    catalog: &JobCatalog,
) -> GapReport {
    match extractor.extract(text).await {
        Ok(raw) => {
            let skills = SkillSet::normalize(split_skill_list(&raw));
            let mut report = report_for_skills(text, &skills, catalog);
            if skills.is_empty() {
                report
                    .warnings
                    .push("No skills were found in the resume".to_string());
            }
            report
        }
        Err(e) => {
            warn!("Skill extraction failed, returning partial report: {e}");
            GapReport {
                statistics: compute_statistics(text),
                skills: vec![],
                matches: vec![],
                missing_skills: vec![],
                warnings: vec![e.to_string()],
            }
        }
    }
}
