// Mon Oct 19 2026 - Alex

use crate::patch::{apply, plan, PatchMode, PatchResult};
use crate::pattern::{scan_for_pattern, Match, Pattern, PatternError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLACEHOLDER: &str = "REMOVED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOptions {
    pub mode: PatchMode,
    pub placeholder: String,
    pub case_insensitive: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            mode: PatchMode::NullBytes,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            case_insensitive: false,
        }
    }
}

impl PatchOptions {
    pub fn new(mode: PatchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }
}

/// Stateless patcher bound to one set of options. Every call copies its
/// input, so a single engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PatchEngine {
    options: PatchOptions,
}

impl PatchEngine {
    pub fn new(options: PatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PatchOptions {
        &self.options
    }

    pub fn scan(&self, buffer: &[u8], pattern: &Pattern) -> Result<Vec<Match>, PatternError> {
        scan_for_pattern(buffer, pattern, self.options.case_insensitive)
    }

    pub fn patch(&self, buffer: &[u8], patterns: &[Pattern]) -> Result<PatchResult, PatternError> {
        let planned = plan(buffer, patterns, self.options.case_insensitive)?;
        let result = apply(buffer, planned, self.options.mode, &self.options.placeholder);

        log::debug!(
            "patched {} match(es) in {} byte buffer ({} mode)",
            result.match_count(),
            buffer.len(),
            self.options.mode
        );
        Ok(result)
    }
}

/// Finds `pattern` in `buffer`. Wildcard patterns are matched against whole
/// printable string runs; anything else is a raw byte search.
pub fn scan(buffer: &[u8], pattern: &str, case_insensitive: bool) -> Result<Vec<Match>, PatternError> {
    let pattern = Pattern::new(pattern)?;
    scan_for_pattern(buffer, &pattern, case_insensitive)
}

/// Overwrites every match of every pattern in a copy of `buffer`. Patterns
/// are trimmed and blank ones dropped; if none remain this fails with
/// `EmptyPatternList`. Finding nothing is not an error.
pub fn patch<S: AsRef<str>>(
    buffer: &[u8],
    patterns: &[S],
    mode: PatchMode,
    placeholder: &str,
    case_insensitive: bool,
) -> Result<PatchResult, PatternError> {
    let patterns = Pattern::from_strings(patterns)?;
    let options = PatchOptions::new(mode)
        .with_placeholder(placeholder)
        .with_case_insensitive(case_insensitive);

    PatchEngine::new(options).patch(buffer, &patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_null_bytes() {
        let buffer = b"helloXXXworld";
        let result = patch(buffer, &["XXX"], PatchMode::NullBytes, "", false).unwrap();

        assert_eq!(result.patched_buffer(), b"hello\x00\x00\x00world");
        assert_eq!(result.match_count(), 1);
        assert_eq!(result.applied_matches()[0].offset(), 5);
        assert_eq!(result.applied_matches()[0].length(), 3);
        assert_eq!(result.applied_matches()[0].source_pattern(), "XXX");
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let buffer = b"\x00some clip data\x01";
        let result = patch(buffer, &["zzz-not-present"], PatchMode::NullBytes, "", false).unwrap();
        assert_eq!(result.match_count(), 0);
        assert_eq!(result.patched_buffer(), buffer);
    }

    #[test]
    fn test_empty_pattern_list_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(patch(b"abc", &none, PatchMode::NullBytes, "", false).unwrap_err(), PatternError::EmptyPatternList);
        assert_eq!(patch(b"abc", &["  ", ""], PatchMode::NullBytes, "", false).unwrap_err(), PatternError::EmptyPatternList);
    }

    #[test]
    fn test_length_preserved() {
        let buffer = b"\x00dpemotes\x00asea\x00dpemotes_v2\x00";
        for mode in [PatchMode::NullBytes, PatchMode::Placeholder] {
            let result = patch(buffer, &["dpemotes*", "asea", "emo"], mode, "REMOVED", false).unwrap();
            assert_eq!(result.patched_buffer().len(), buffer.len());
        }
    }

    #[test]
    fn test_placeholder_mode() {
        let result = patch(b"..HELLO..", &["HELLO"], PatchMode::Placeholder, "AB", false).unwrap();
        assert_eq!(result.patched_buffer(), b"..ABABA..");
    }

    #[test]
    fn test_applied_in_descending_order() {
        let result = patch(b"a-b-a", &["a", "b"], PatchMode::NullBytes, "", false).unwrap();
        let offsets: Vec<usize> = result.applied_matches().iter().map(|m| m.offset()).collect();
        assert_eq!(offsets, vec![4, 2, 0]);
    }

    #[test]
    fn test_overlapping_patterns_lowest_offset_wins() {
        let result = patch(b"abcdefgh", &["abcde", "defgh"], PatchMode::Placeholder, "XY", false).unwrap();

        let offsets: Vec<usize> = result.applied_matches().iter().map(|m| m.offset()).collect();
        assert_eq!(offsets, vec![3, 0]);
        // "defgh" is written first, then "abcde" overwrites the shared bytes 3..5.
        assert_eq!(result.patched_buffer(), b"XYXYXXYX");
        assert_eq!(result.patched_buffer()[3], b'Y');
        assert_eq!(result.patched_buffer()[4], b'X');
    }

    #[test]
    fn test_scan_dispatch() {
        let buffer = b"\x00abcdef\x00xabc\x00";
        let exact = scan(buffer, "abc", false).unwrap();
        assert_eq!(exact.len(), 2);

        let wild = scan(buffer, "abc*", false).unwrap();
        assert_eq!(wild.len(), 1);
        assert_eq!(wild[0].matched_text(), "abcdef");
        assert_eq!(wild[0].length(), 6);
    }

    #[test]
    fn test_scan_blank_pattern() {
        assert_eq!(scan(b"abc", "  ", false).unwrap_err(), PatternError::EmptyPattern);
    }
}
