// Mon Oct 19 2026 - Alex

use crate::pattern::{scan_for_pattern, Match, Pattern, PatternError};
use itertools::Itertools;
use std::cmp::Reverse;

/// Collects matches for every pattern in caller order. Duplicate patterns are
/// searched independently.
pub fn collect_matches(buffer: &[u8], patterns: &[Pattern], case_insensitive: bool) -> Result<Vec<Match>, PatternError> {
    let mut all = Vec::new();

    for pattern in patterns {
        let matches = scan_for_pattern(buffer, pattern, case_insensitive)?;
        log::debug!(
            "pattern '{}' ({}) matched {} time(s)",
            pattern,
            if pattern.is_wildcard() { "wildcard" } else { "exact" },
            matches.len()
        );
        all.extend(matches);
    }

    Ok(all)
}

/// Orders matches for application: highest offset first. The sort is stable,
/// so matches sharing an offset keep their discovery order. Applying in this
/// order means the lowest-offset match wins any overlapping bytes.
pub fn order_for_application(matches: Vec<Match>) -> Vec<Match> {
    matches.into_iter()
        .sorted_by_key(|m| Reverse(m.offset()))
        .collect()
}

pub fn plan(buffer: &[u8], patterns: &[Pattern], case_insensitive: bool) -> Result<Vec<Match>, PatternError> {
    if patterns.is_empty() {
        return Err(PatternError::EmptyPatternList);
    }

    let matches = collect_matches(buffer, patterns, case_insensitive)?;
    Ok(order_for_application(matches))
}
