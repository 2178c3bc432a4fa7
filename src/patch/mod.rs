// Mon Oct 19 2026 - Alex

pub mod applier;
pub mod mode;
pub mod planner;
pub mod result;

pub use applier::{apply, replacement_for};
pub use mode::PatchMode;
pub use planner::plan;
pub use result::PatchResult;
