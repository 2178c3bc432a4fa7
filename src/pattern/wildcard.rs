// Mon Oct 19 2026 - Alex

use crate::analysis::string::extract_strings;
use crate::pattern::error::PatternError;
use crate::pattern::pattern::{WILDCARD_ANY, WILDCARD_ONE};
use crate::pattern::Match;
use regex::{Regex, RegexBuilder};

/// Glob matcher over whole strings. `*` is any run (possibly empty), `?` is
/// exactly one character, everything else is literal.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    pattern: String,
    regex: Regex,
}

impl WildcardMatcher {
    pub fn compile(pattern: &str, case_insensitive: bool) -> Result<Self, PatternError> {
        let source = to_regex_source(pattern);
        let regex = RegexBuilder::new(&source)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| PatternError::InvalidWildcard(format!("{}: {}", pattern, e)))?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn test(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

fn to_regex_source(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() * 2 + 2);
    source.push('^');

    for c in pattern.chars() {
        match c {
            WILDCARD_ANY => source.push_str(".*"),
            WILDCARD_ONE => source.push('.'),
            _ => {
                let mut buf = [0u8; 4];
                let literal = regex::escape(c.encode_utf8(&mut buf));
                // Only ASCII letters fold. Unicode folding would let the
                // Kelvin sign match `k` or long s match `s`.
                if c.is_ascii() {
                    source.push_str(&literal);
                } else {
                    source.push_str("(?-i:");
                    source.push_str(&literal);
                    source.push(')');
                }
            }
        }
    }

    source.push('$');
    source
}

/// Tests every printable string run in `buffer` against `pattern`. A hit
/// covers the entire run, not only the part the literal characters matched.
pub fn find_all_wildcard(buffer: &[u8], pattern: &str, case_insensitive: bool) -> Result<Vec<Match>, PatternError> {
    let matcher = WildcardMatcher::compile(pattern, case_insensitive)?;

    let matches: Vec<Match> = extract_strings(buffer)
        .filter(|run| matcher.test(&run.text))
        .map(|run| {
            let length = run.text.len();
            Match::new(run.offset, length, run.text)
        })
        .collect();

    log::trace!("wildcard scan for '{}' found {} match(es)", pattern, matches.len());
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_is_anchored() {
        let matcher = WildcardMatcher::compile("abc*", false).unwrap();
        assert!(matcher.test("abcdef"));
        assert!(matcher.test("abc"));
        assert!(!matcher.test("xabc"));
        assert!(!matcher.test("xabcdef"));
    }

    #[test]
    fn test_question_mark_is_single_char() {
        let matcher = WildcardMatcher::compile("a?c", false).unwrap();
        assert!(matcher.test("abc"));
        assert!(!matcher.test("ac"));
        assert!(!matcher.test("abbc"));
    }

    #[test]
    fn test_regex_meta_characters_are_literal() {
        let matcher = WildcardMatcher::compile("a.b+(c)*", false).unwrap();
        assert!(matcher.test("a.b+(c)tail"));
        assert!(!matcher.test("axb+(c)tail"));
        assert!(!matcher.test("a.bb(c)"));

        let brackets = WildcardMatcher::compile("[x]|^y$?", false).unwrap();
        assert!(brackets.test("[x]|^y$!"));
    }

    #[test]
    fn test_case_insensitive_wildcard() {
        let matcher = WildcardMatcher::compile("DPE*", true).unwrap();
        assert!(matcher.test("dpemotes"));
        assert!(!WildcardMatcher::compile("DPE*", false).unwrap().test("dpemotes"));
    }

    #[test]
    fn test_non_ascii_literals_do_not_fold_to_ascii() {
        let kelvin = WildcardMatcher::compile("\u{212A}elvin*", true).unwrap();
        assert!(!kelvin.test("kelvin"));
        assert!(!kelvin.test("Kelvin"));
        assert!(kelvin.test("\u{212A}elvin scale"));

        let long_s = WildcardMatcher::compile("\u{17F}ea?", true).unwrap();
        assert!(!long_s.test("sea1"));
        assert!(!long_s.test("SEA1"));

        assert!(find_all_wildcard(b"\x00kelvin\x00", "\u{212A}*", true).unwrap().is_empty());
        assert_eq!(find_all_wildcard(b"\x00kelvin\x00", "K*", true).unwrap().len(), 1);
    }

    #[test]
    fn test_match_covers_whole_run() {
        let buffer = b"\x00\x00abcdef\x01xabc\x02";
        let matches = find_all_wildcard(buffer, "abc*", false).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].offset(), 2);
        assert_eq!(matches[0].length(), 6);
        assert_eq!(matches[0].matched_text(), "abcdef");
    }

    #[test]
    fn test_no_runs_no_matches() {
        assert!(find_all_wildcard(&[0u8, 1, 2, 255], "*", false).unwrap().is_empty());
    }
}
