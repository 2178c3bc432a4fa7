// Mon Oct 19 2026 - Alex

pub mod error;
pub mod sink;
pub mod source;

pub use error::IoError;
pub use sink::{FileSink, MemorySink, PatchSink};
pub use source::{collect_inputs, ClipInput, FileBytes};
