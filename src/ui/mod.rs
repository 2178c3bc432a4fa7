// Mon Oct 19 2026 - Alex

pub mod banner;
pub mod cli;
pub mod display;
pub mod locale;
pub mod progress;
pub mod report;

pub use banner::Banner;
pub use cli::{Args, Command, CommandHandler};
pub use locale::Locale;
pub use progress::ConsoleObserver;
pub use report::{LogKind, LogLine, Reporter};
