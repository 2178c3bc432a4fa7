// Mon Oct 19 2026 - Alex

use crate::pattern::Match;

/// Output of one patch run. `applied_matches` is in application order, which
/// is descending by offset.
#[derive(Debug, Clone)]
pub struct PatchResult {
    patched_buffer: Vec<u8>,
    applied_matches: Vec<Match>,
}

impl PatchResult {
    pub fn new(patched_buffer: Vec<u8>, applied_matches: Vec<Match>) -> Self {
        Self {
            patched_buffer,
            applied_matches,
        }
    }

    pub fn patched_buffer(&self) -> &[u8] {
        &self.patched_buffer
    }

    pub fn into_buffer(self) -> Vec<u8> {
        self.patched_buffer
    }

    pub fn match_count(&self) -> usize {
        self.applied_matches.len()
    }

    pub fn applied_matches(&self) -> &[Match] {
        &self.applied_matches
    }

    pub fn is_modified(&self) -> bool {
        !self.applied_matches.is_empty()
    }
}
