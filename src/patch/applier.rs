// Mon Oct 19 2026 - Alex

use crate::patch::mode::PatchMode;
use crate::patch::result::PatchResult;
use crate::pattern::Match;

/// Bytes written over a match of `length` bytes. An empty placeholder falls
/// back to zero bytes.
pub fn replacement_for(mode: PatchMode, placeholder: &[u8], length: usize) -> Vec<u8> {
    match mode {
        PatchMode::Placeholder if !placeholder.is_empty() => {
            placeholder.iter().copied().cycle().take(length).collect()
        }
        _ => vec![0u8; length],
    }
}

/// Copies `buffer` and writes a replacement over each match in the given
/// order. Later writes overwrite earlier ones where ranges overlap. Matches
/// that do not fit inside the buffer are skipped and left out of the result.
pub fn apply(buffer: &[u8], matches: Vec<Match>, mode: PatchMode, placeholder: &str) -> PatchResult {
    let mut patched = buffer.to_vec();
    let placeholder_bytes = placeholder.as_bytes();
    let mut applied = Vec::with_capacity(matches.len());

    for m in matches {
        let in_range = m.offset().checked_add(m.length())
            .map(|end| end <= patched.len())
            .unwrap_or(false);
        if !in_range {
            log::warn!(
                "skipping match '{}' at offset {} (+{}): outside {} byte buffer",
                m.matched_text(),
                m.offset(),
                m.length(),
                patched.len()
            );
            continue;
        }

        let replacement = replacement_for(mode, placeholder_bytes, m.length());
        patched[m.offset()..m.end()].copy_from_slice(&replacement);
        applied.push(m);
    }

    PatchResult::new(patched, applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_cycles() {
        assert_eq!(replacement_for(PatchMode::Placeholder, b"AB", 5), b"ABABA".to_vec());
        assert_eq!(replacement_for(PatchMode::Placeholder, b"REMOVED", 3), b"REM".to_vec());
    }

    #[test]
    fn test_empty_placeholder_is_zeroes() {
        assert_eq!(replacement_for(PatchMode::Placeholder, b"", 4), vec![0u8; 4]);
    }

    #[test]
    fn test_null_mode_ignores_placeholder() {
        assert_eq!(replacement_for(PatchMode::NullBytes, b"AB", 3), vec![0u8; 3]);
    }

    #[test]
    fn test_overlap_lowest_offset_wins() {
        let buffer = b"0123456789";
        let matches = vec![
            Match::new(3, 5, "34567".to_string()),
            Match::new(0, 5, "01234".to_string()),
        ];

        let result = apply(buffer, matches, PatchMode::Placeholder, "AB");
        // [3,8) is written first, then [0,5) overwrites bytes 0..5.
        assert_eq!(result.patched_buffer(), b"ABABAABA89");
        assert_eq!(result.patched_buffer()[3], b'B');
        assert_eq!(result.patched_buffer().len(), buffer.len());
    }

    #[test]
    fn test_out_of_range_match_is_skipped() {
        let buffer = b"abcdef";
        let matches = vec![
            Match::new(4, 5, "ef???".to_string()),
            Match::new(usize::MAX, 2, "xx".to_string()),
            Match::new(0, 2, "ab".to_string()),
        ];

        let result = apply(buffer, matches, PatchMode::NullBytes, "");
        assert_eq!(result.patched_buffer(), b"\0\0cdef");
        assert_eq!(result.match_count(), 1);
        assert_eq!(result.applied_matches()[0].offset(), 0);
    }

    #[test]
    fn test_input_is_untouched() {
        let buffer = b"keep me".to_vec();
        let result = apply(&buffer, vec![Match::new(0, 4, "keep".to_string())], PatchMode::NullBytes, "");
        assert_eq!(buffer, b"keep me".to_vec());
        assert_eq!(result.patched_buffer(), b"\0\0\0\0 me");
    }
}
