// Mon Oct 19 2026 - Alex

use serde::Serialize;

/// One located occurrence of a pattern. `offset + length` never exceeds the
/// scanned buffer's length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    offset: usize,
    length: usize,
    matched_text: String,
    source_pattern: String,
}

impl Match {
    pub fn new(offset: usize, length: usize, matched_text: String) -> Self {
        Self {
            offset,
            length,
            matched_text,
            source_pattern: String::new(),
        }
    }

    pub fn with_source(mut self, pattern: &str) -> Self {
        self.source_pattern = pattern.to_string();
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn matched_text(&self) -> &str {
        &self.matched_text
    }

    pub fn source_pattern(&self) -> &str {
        &self.source_pattern
    }
}
