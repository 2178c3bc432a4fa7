// Mon Oct 19 2026 - Alex

pub mod string;

pub use string::{extract_strings, StringRun, StringRuns};
