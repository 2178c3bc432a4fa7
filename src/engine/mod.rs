// Mon Oct 19 2026 - Alex

pub mod batch;
pub mod core;
pub mod error;

pub use self::core::{patch, scan, PatchEngine, PatchOptions, DEFAULT_PLACEHOLDER};
pub use batch::{BatchRunner, BatchSummary, FileOutcome, FileReport, NoopObserver, ProgressObserver};
pub use error::EngineError;
