//! Gap matching: per-job match percentages and the target-role missing-skill list.
//!
//! Rules:
//! - Required skills are compared by normalized token.
//! - `match_percent = floor(100 * matched / required)`, so 1 of 3 is 33 and 2 of 3 is 66.
//! - Jobs with zero matched skills are left out of the results entirely.
//! - Results keep catalog order; nothing is ranked.

use serde::{Deserialize, Serialize};

use crate::screening::catalog::JobProfile;
use crate::screening::skills::SkillSet;

const LEARNING_RESOURCE_BASE: &str = "https://roadmap.sh/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub title: String,
    pub company: String,
    pub match_percent: u32,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill: String,
    pub learning_url: String,
}

/// Scores each job against the candidate's skills.
pub fn match_jobs(candidate: &SkillSet, catalog: &[JobProfile]) -> Vec<MatchResult> {
    catalog
        .iter()
        .filter_map(|job| {
            let total = job.required_skills.len();
            let matched = job
                .required_skills
                .iter()
                .filter(|skill| candidate.contains(skill))
                .count();
            if matched == 0 {
                return None;
            }
            Some(MatchResult {
                title: job.title.clone(),
                company: job.company.clone(),
                match_percent: match_percent(matched, total),
                required_skills: job.required_skills.clone(),
            })
        })
        .collect()
}

/// Floor of `100 * matched / total`, clamped to 100.
pub fn match_percent(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched * 100) / total).min(100) as u32
}

/// Target-role skills the candidate lacks, in target order. Duplicates in the
/// target list are kept as given, original casing and padding included. Blank
/// entries name no skill and are skipped.
pub fn missing_skills(candidate: &SkillSet, target_role_skills: &[String]) -> Vec<String> {
    target_role_skills
        .iter()
        .filter(|skill| !skill.trim().is_empty() && !candidate.contains(skill))
        .cloned()
        .collect()
}

/// `missing_skills` with a learning link attached to each entry.
pub fn missing_skills_with_resources(
    candidate: &SkillSet,
    target_role_skills: &[String],
) -> Vec<MissingSkill> {
    missing_skills(candidate, target_role_skills)
        .into_iter()
        .map(|skill| MissingSkill {
            learning_url: learning_resource_url(&skill),
            skill,
        })
        .collect()
}

/// `https://roadmap.sh/<skill>` with spaces replaced by hyphens.
pub fn learning_resource_url(skill: &str) -> String {
    format!("{LEARNING_RESOURCE_BASE}{}", skill.trim().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::catalog::JobCatalog;

    fn job(title: &str, skills: &[&str]) -> JobProfile {
        JobProfile {
            title: title.to_string(),
            company: "Acme".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_full_match() {
        let candidate = SkillSet::normalize(["python"]);
        let results = match_jobs(&candidate, &[job("Dev", &["Python"])]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_percent, 100);
    }

    #[test]
    fn test_data_analyst_scenario() {
        let candidate = SkillSet::normalize(["sql", "communication"]);
        let catalog = [job("Data Analyst", &["SQL", "Data Analysis", "Excel"])];

        let results = match_jobs(&candidate, &catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Data Analyst");
        assert_eq!(results[0].match_percent, 33);
        assert_eq!(results[0].required_skills, strings(&["SQL", "Data Analysis", "Excel"]));

        let missing = missing_skills(
            &candidate,
            &strings(&["Python", "SQL", "Machine Learning", "Communication", "Data Analysis"]),
        );
        assert_eq!(missing, strings(&["Python", "Machine Learning", "Data Analysis"]));
    }

    #[test]
    fn test_zero_match_jobs_are_omitted() {
        let candidate = SkillSet::normalize(["rust"]);
        let catalog = [job("Analyst", &["Excel", "SQL"]), job("Systems", &["Rust", "C"])];

        let results = match_jobs(&candidate, &catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Systems");
        assert_eq!(results[0].match_percent, 50);
    }

    #[test]
    fn test_results_follow_catalog_order() {
        let candidate = SkillSet::normalize(["a", "b", "c"]);
        let catalog = [job("Low", &["a", "x", "y"]), job("High", &["a", "b", "c"])];

        let titles: Vec<String> = match_jobs(&candidate, &catalog)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, strings(&["Low", "High"]));
    }

    #[test]
    fn test_empty_candidate_matches_nothing() {
        let results = match_jobs(&SkillSet::default(), &JobCatalog::default().jobs);
        assert!(results.is_empty());
    }

    #[test]
    fn test_percent_rounds_down() {
        assert_eq!(match_percent(1, 3), 33);
        assert_eq!(match_percent(2, 3), 66);
        assert_eq!(match_percent(1, 6), 16);
        assert_eq!(match_percent(3, 3), 100);
        assert_eq!(match_percent(0, 0), 0);
    }

    #[test]
    fn test_required_skills_are_normalized_before_comparison() {
        let candidate = SkillSet::normalize(["data analysis"]);
        let results = match_jobs(&candidate, &[job("Analyst", &["  Data Analysis ", "Excel"])]);
        assert_eq!(results[0].match_percent, 50);
    }

    #[test]
    fn test_missing_keeps_target_duplicates() {
        let candidate = SkillSet::normalize(["sql"]);
        let missing = missing_skills(&candidate, &strings(&["Python", "SQL", "Python"]));
        assert_eq!(missing, strings(&["Python", "Python"]));
    }

    #[test]
    fn test_missing_skips_blank_targets_and_keeps_the_rest_verbatim() {
        let candidate = SkillSet::normalize(["sql"]);
        let missing = missing_skills(&candidate, &strings(&["", " Python ", "  ", "SQL", "Go"]));
        assert_eq!(missing, strings(&[" Python ", "Go"]));
    }

    #[test]
    fn test_missing_everything_for_empty_candidate() {
        let target = strings(&["Python", "SQL"]);
        assert_eq!(missing_skills(&SkillSet::default(), &target), target);
    }

    #[test]
    fn test_learning_url_replaces_spaces() {
        assert_eq!(
            learning_resource_url("Machine Learning"),
            "https://roadmap.sh/Machine-Learning"
        );
        assert_eq!(learning_resource_url("SQL"), "https://roadmap.sh/SQL");
    }

    #[test]
    fn test_missing_with_resources_pairs_links() {
        let candidate = SkillSet::normalize(["python"]);
        let missing =
            missing_skills_with_resources(&candidate, &strings(&["Python", "Data Analysis"]));
        assert_eq!(
            missing,
            vec![MissingSkill {
                skill: "Data Analysis".to_string(),
                learning_url: "https://roadmap.sh/Data-Analysis".to_string(),
            }]
        );
    }
}
