// Mon Oct 19 2026 - Alex

use serde::Serialize;

/// A maximal run of printable ASCII bytes (0x20..=0x7E).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringRun {
    pub offset: usize,
    pub text: String,
}

impl StringRun {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

#[inline]
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// Lazily walks `data` and yields its string runs in offset order. Calling it
/// again on the same buffer yields the same sequence.
pub fn extract_strings(data: &[u8]) -> StringRuns<'_> {
    StringRuns { data, pos: 0 }
}

pub struct StringRuns<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for StringRuns<'a> {
    type Item = StringRun;

    fn next(&mut self) -> Option<StringRun> {
        let rest = &self.data[self.pos..];
        let start = self.pos + rest.iter().position(|&b| is_printable(b))?;

        let len = self.data[start..]
            .iter()
            .position(|&b| !is_printable(b))
            .unwrap_or(self.data.len() - start);

        self.pos = start + len;

        // Printable ASCII is always valid UTF-8.
        let text = self.data[start..start + len].iter().map(|&b| b as char).collect();
        Some(StringRun { offset: start, text })
    }
}
