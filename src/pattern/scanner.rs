// Mon Oct 19 2026 - Alex

use crate::pattern::Match;

/// Every start position of `pattern` in `buffer`, including positions that
/// overlap an earlier hit. Scanning resumes one byte after each hit.
pub fn find_all_exact(buffer: &[u8], pattern: &str, case_insensitive: bool) -> Vec<Match> {
    let mut matches = Vec::new();

    for needle in needles_for(pattern, case_insensitive) {
        let mut pos = 0;
        while pos < buffer.len() {
            let index = match find_bytes(buffer, &needle, pos) {
                Some(index) => index,
                None => break,
            };

            let end = index + needle.len();
            let text = String::from_utf8_lossy(&buffer[index..end]).into_owned();
            matches.push(Match::new(index, needle.len(), text));
            pos = index + 1;
        }
    }

    log::trace!("exact scan for '{}' found {} match(es)", pattern, matches.len());
    matches
}

/// Byte encodings searched for `pattern`. Case-insensitive search tries the
/// original, lowercase and uppercase spellings as independent needles, so a
/// pattern that is already lowercase reports each hit once per identical
/// spelling. Mixed case such as `fOo` is not found.
pub fn needles_for(pattern: &str, case_insensitive: bool) -> Vec<Vec<u8>> {
    let mut needles = vec![pattern.as_bytes().to_vec()];

    if case_insensitive {
        needles.push(pattern.to_lowercase().into_bytes());
        needles.push(pattern.to_uppercase().into_bytes());
    }

    needles
}

/// First position at or after `start` where `needle` occurs.
pub fn find_bytes(haystack: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    if needle.is_empty() || start >= haystack.len() || needle.len() > haystack.len() - start {
        return None;
    }

    haystack[start..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + start)
}
