use serde::{Deserialize, Serialize};

pub const MIN_GOOD_WORDS: usize = 300;
pub const MAX_GOOD_WORDS: usize = 1000;
pub const PREVIEW_CHARS: usize = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthVerdict {
    TooShort,
    Good,
    TooLong,
}

impl LengthVerdict {
    /// 300 to 1000 words inclusive is `Good`.
    pub fn for_word_count(words: usize) -> Self {
        if words < MIN_GOOD_WORDS {
            LengthVerdict::TooShort
        } else if words <= MAX_GOOD_WORDS {
            LengthVerdict::Good
        } else {
            LengthVerdict::TooLong
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            LengthVerdict::TooShort => {
                "Resume is too short. Add more details about skills, projects and experience."
            }
            LengthVerdict::Good => "Resume length looks good and professional.",
            LengthVerdict::TooLong => "Resume is too long. Try to make it more concise.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeStatistics {
    pub char_count: usize,
    pub word_count: usize,
    pub length_verdict: LengthVerdict,
    pub advice: String,
}

/// Characters are Unicode scalar values; words are whitespace-separated runs.
pub fn compute_statistics(text: &str) -> ResumeStatistics {
    let word_count = text.split_whitespace().count();
    let length_verdict = LengthVerdict::for_word_count(word_count);
    ResumeStatistics {
        char_count: text.chars().count(),
        word_count,
        length_verdict,
        advice: length_verdict.advice().to_string(),
    }
}

/// First `PREVIEW_CHARS` characters, with `...` appended when cut short.
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_counts_chars_and_words() {
        let stats = compute_statistics("Senior  engineer\nRust, SQL");
        assert_eq!(stats.char_count, 26);
        assert_eq!(stats.word_count, 4);
    }

    #[test]
    fn test_char_count_uses_scalar_values() {
        assert_eq!(compute_statistics("résumé").char_count, 6);
    }

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(LengthVerdict::for_word_count(299), LengthVerdict::TooShort);
        assert_eq!(LengthVerdict::for_word_count(300), LengthVerdict::Good);
        assert_eq!(LengthVerdict::for_word_count(1000), LengthVerdict::Good);
        assert_eq!(LengthVerdict::for_word_count(1001), LengthVerdict::TooLong);
    }

    #[test]
    fn test_statistics_on_generated_text() {
        assert_eq!(compute_statistics(&words(300)).length_verdict, LengthVerdict::Good);
        assert_eq!(compute_statistics(&words(1000)).length_verdict, LengthVerdict::Good);
        assert_eq!(compute_statistics(&words(1001)).length_verdict, LengthVerdict::TooLong);
    }

    #[test]
    fn test_empty_text_is_too_short() {
        let stats = compute_statistics("");
        assert_eq!(stats.char_count, 0);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.length_verdict, LengthVerdict::TooShort);
        assert!(stats.advice.contains("too short"));
    }

    #[test]
    fn test_verdict_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&LengthVerdict::TooLong).unwrap(),
            "\"too_long\""
        );
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let text = "é".repeat(PREVIEW_CHARS + 10);
        let p = preview(&text);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_preview_keeps_short_text() {
        assert_eq!(preview("short"), "short");
        let exact = "a".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&exact), exact);
    }
}
