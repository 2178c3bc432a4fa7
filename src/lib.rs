// Mon Oct 19 2026 - Alex

pub mod analysis;
pub mod config;
pub mod engine;
pub mod io;
pub mod patch;
pub mod pattern;
pub mod ui;

pub use analysis::{extract_strings, StringRun};
pub use config::PatcherConfig;
pub use engine::{patch, scan, BatchRunner, PatchEngine, PatchOptions, ProgressObserver};
pub use patch::{PatchMode, PatchResult};
pub use pattern::{Match, Pattern, PatternError};
