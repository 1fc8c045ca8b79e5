// Prompt constants for skill extraction.

use crate::llm_client::prompts::NO_COMMENTARY;

/// Longest résumé excerpt sent to the model, in characters.
pub const MAX_RESUME_CHARS: usize = 12_000;

pub const SKILL_EXTRACT_SYSTEM: &str = "You are an expert technical recruiter. \
    You read resumes and list the concrete skills they demonstrate.";

/// Skill extraction prompt. Replace `{resume_text}` before sending.
pub const SKILL_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the professional skills from the resume below.

Rules:
- Return ONLY a single line of skills separated by commas.
- Use the common name of each skill (e.g. "Python", "SQL", "Machine Learning").
- Include technical tools, languages, frameworks and soft skills.
- Do not repeat a skill.

Resume:
{resume_text}
"#;

/// Builds the full system prompt for skill extraction.
pub fn skill_extract_system() -> String {
    format!("{SKILL_EXTRACT_SYSTEM} {NO_COMMENTARY}")
}

/// Fills the prompt template, truncating very long résumés.
pub fn skill_extract_prompt(resume_text: &str) -> String {
    let excerpt: String = resume_text.chars().take(MAX_RESUME_CHARS).collect();
    SKILL_EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", &excerpt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = skill_extract_prompt("Built ETL pipelines in Python");
        assert!(prompt.contains("Built ETL pipelines in Python"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_prompt_truncates_long_resume() {
        let long = "x".repeat(MAX_RESUME_CHARS + 500);
        let prompt = skill_extract_prompt(&long);
        assert!(prompt.len() < SKILL_EXTRACT_PROMPT_TEMPLATE.len() + MAX_RESUME_CHARS + 1);
    }

    #[test]
    fn test_system_prompt_forbids_fences() {
        assert!(skill_extract_system().contains("code fences"));
    }
}
