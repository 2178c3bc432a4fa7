// Mon Oct 19 2026 - Alex

use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("No input files")]
    NoFiles,
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
