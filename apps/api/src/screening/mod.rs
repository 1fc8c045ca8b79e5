// Resume screening: statistics, skill normalization, job catalog, gap matching.
// Model calls go through llm_client via the SkillExtractor seam.

pub mod catalog;
pub mod extraction;
pub mod handlers;
pub mod matching;
pub mod prompts;
pub mod report;
pub mod skills;
pub mod stats;
