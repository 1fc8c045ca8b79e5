//! Skill normalization: turns an extracted skill list into an ordered, de-duplicated
//! set. Matching compares normalized tokens; display keeps the first-seen casing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Normalized unit of comparison: trimmed and case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillToken(String);

impl SkillToken {
    /// Returns `None` for strings that are blank after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A skill as the extractor wrote it, paired with its token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub display: String,
    pub token: SkillToken,
}

/// Ordered set of distinct skills, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: Vec<Skill>,
    tokens: HashSet<SkillToken>,
}

impl SkillSet {
    /// Builds a set from candidate skill strings (already split by the caller).
    /// Blank entries are dropped; later duplicates of a token are ignored.
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for candidate in raw {
            let candidate = candidate.as_ref();
            let Some(token) = SkillToken::parse(candidate) else {
                continue;
            };
            if set.tokens.insert(token.clone()) {
                set.skills.push(Skill {
                    display: candidate.trim().to_string(),
                    token,
                });
            }
        }
        set
    }

    /// True if `skill` (in any casing or padding) is in the set.
    pub fn contains(&self, skill: &str) -> bool {
        SkillToken::parse(skill).is_some_and(|t| self.tokens.contains(&t))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &SkillToken> {
        self.skills.iter().map(|s| &s.token)
    }

    /// Display-cased names in set order.
    pub fn display_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.display.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

const BULLET_PREFIXES: &[&str] = &["- ", "* ", "• "];

/// Splits a free-form extractor reply into candidate skill strings.
///
/// Accepts commas and newlines as separators and strips list bullets. Anything
/// smarter belongs in a structured-output extractor, not here.
pub fn split_skill_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(|piece| {
            let mut piece = piece.trim();
            for bullet in BULLET_PREFIXES {
                if let Some(rest) = piece.strip_prefix(bullet) {
                    piece = rest.trim_start();
                    break;
                }
            }
            piece.to_string()
        })
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Parses a raw extractor reply into display-cased, de-duplicated skills.
pub fn extract_skills(raw: &str) -> Vec<String> {
    SkillSet::normalize(split_skill_list(raw)).display_names()
}
