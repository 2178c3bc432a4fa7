// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("No patterns supplied: at least one non-empty pattern is required")]
    EmptyPatternList,
    #[error("Pattern is empty after trimming")]
    EmptyPattern,
    #[error("Invalid wildcard pattern: {0}")]
    InvalidWildcard(String),
}
