//! Collaborator seams: document text extraction and AI skill extraction.
//!
//! `AppState` carries both as trait objects so handlers never depend on a
//! concrete PDF library or model provider.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::screening::prompts::{skill_extract_prompt, skill_extract_system};

/// Turns résumé text into a raw, delimited skill string.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<String, AppError>;
}

/// Extracts plain text from an uploaded document.
pub trait DocumentExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Skill extractors
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSkillExtractor(pub LlmClient);

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, resume_text: &str) -> Result<String, AppError> {
        if resume_text.trim().is_empty() {
            return Err(AppError::ExtractionFailed(
                "Resume text is empty; nothing to extract skills from".to_string(),
            ));
        }

        let reply = self
            .0
            .call_text(&skill_extract_prompt(resume_text), &skill_extract_system())
            .await
            .map_err(|e| AppError::ExtractionFailed(format!("Skill extraction failed: {e}")))?;

        debug!("Skill extractor replied with {} chars", reply.len());
        Ok(reply)
    }
}

/// Used when no API key is configured.
pub struct DisabledSkillExtractor;

#[async_trait]
impl SkillExtractor for DisabledSkillExtractor {
    async fn extract(&self, _resume_text: &str) -> Result<String, AppError> {
        Err(AppError::ExtractionFailed(
            "Skill extraction is not configured (ANTHROPIC_API_KEY unset)".to_string(),
        ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document extractors
// ────────────────────────────────────────────────────────────────────────────

/// PDF text extractor using the pdf-extract crate. Pages without a text layer
/// contribute nothing; a document with no text at all yields an empty string.
pub struct PdfTextExtractor;

impl DocumentExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, AppError> {
        // pdf-extract can panic on malformed PDFs
        let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

        let text = match result {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                return Err(AppError::ExtractionFailed(format!("Could not read PDF: {e}")))
            }
            Err(_) => {
                return Err(AppError::ExtractionFailed(
                    "PDF extraction panicked (malformed file)".to_string(),
                ))
            }
        };

        let text = tidy_extracted_text(&text);
        if text.is_empty() {
            warn!("PDF contained no extractable text");
        }
        Ok(text)
    }
}

/// Drops blank lines left behind by empty pages and trims the ends.
fn tidy_extracted_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
