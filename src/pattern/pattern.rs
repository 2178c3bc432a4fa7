// Mon Oct 19 2026 - Alex

use crate::pattern::error::PatternError;
use std::fmt;

pub const WILDCARD_ANY: char = '*';
pub const WILDCARD_ONE: char = '?';

/// A user supplied search string. Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    pub fn new(text: &str) -> Result<Self, PatternError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// Splits pasted text into patterns, one per line. Blank lines are skipped
    /// and duplicates are kept.
    pub fn parse_list(input: &str) -> Vec<Pattern> {
        input.lines()
            .filter_map(|line| Pattern::new(line).ok())
            .collect()
    }

    pub fn from_strings<S: AsRef<str>>(items: &[S]) -> Result<Vec<Pattern>, PatternError> {
        let patterns: Vec<Pattern> = items.iter()
            .filter_map(|s| Pattern::new(s.as_ref()).ok())
            .collect();

        if patterns.is_empty() {
            return Err(PatternError::EmptyPatternList);
        }

        Ok(patterns)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_wildcard(&self) -> bool {
        has_wildcards(&self.text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn has_wildcards(text: &str) -> bool {
    text.contains(WILDCARD_ANY) || text.contains(WILDCARD_ONE)
}
