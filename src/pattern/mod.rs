// Mon Oct 19 2026 - Alex

pub mod error;
pub mod match_result;
pub mod pattern;
pub mod scanner;
pub mod wildcard;

pub use error::PatternError;
pub use match_result::Match;
pub use pattern::Pattern;
pub use scanner::find_all_exact;
pub use wildcard::{find_all_wildcard, WildcardMatcher};

/// Finds `pattern` in `buffer`, using string-run wildcard matching when the
/// pattern contains `*` or `?` and a raw byte search otherwise. Every returned
/// match is tagged with `pattern`.
pub fn scan_for_pattern(buffer: &[u8], pattern: &Pattern, case_insensitive: bool) -> Result<Vec<Match>, PatternError> {
    let matches = if pattern.is_wildcard() {
        find_all_wildcard(buffer, pattern.as_str(), case_insensitive)?
    } else {
        find_all_exact(buffer, pattern.as_str(), case_insensitive)
    };

    Ok(matches.into_iter()
        .map(|m| m.with_source(pattern.as_str()))
        .collect())
}
