// Mon Oct 19 2026 - Alex

use crate::engine::batch::progress_percent;
use crate::engine::{BatchSummary, FileReport, ProgressObserver};
use crate::patch::PatchMode;
use crate::pattern::Pattern;
use crate::ui::report::{LogLine, Reporter};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str = "{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}";

/// Terminal observer: a percentage bar plus the run log printed above it.
pub struct ConsoleObserver {
    bar: ProgressBar,
    reporter: Reporter,
    quiet: bool,
}

impl ConsoleObserver {
    pub fn new(reporter: Reporter) -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░ ")
        );

        Self {
            bar,
            reporter,
            quiet: false,
        }
    }

    pub fn with_progress(self, enabled: bool) -> Self {
        if !enabled {
            self.bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        self
    }

    /// Quiet mode keeps the bar but only prints failures and the summary.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn emit(&self, lines: &[LogLine]) {
        for line in lines {
            if self.bar.is_hidden() {
                println!("{}", line);
            } else {
                self.bar.println(line.to_string());
            }
        }
    }
}

impl ProgressObserver for ConsoleObserver {
    fn on_batch_start(&self, total: usize, patterns: &[Pattern], mode: PatchMode) {
        self.bar.set_position(0);
        self.bar.enable_steady_tick(Duration::from_millis(100));
        if !self.quiet {
            self.emit(&self.reporter.batch_header(total, patterns, mode));
        }
    }

    fn on_file_start(&self, _index: usize, _total: usize, name: &str) {
        self.bar.set_message(name.to_string());
    }

    fn on_file_done(&self, index: usize, total: usize, report: &FileReport) {
        if !self.quiet || report.is_failed() {
            self.emit(&self.reporter.file_lines(report));
        }
        let percent = progress_percent(index, total) as u64;
        if percent > self.bar.position() {
            self.bar.set_position(percent);
        }
    }

    fn on_batch_done(&self, summary: &BatchSummary) {
        self.bar.set_position(100);
        self.emit(&self.reporter.summary(summary));
        self.bar.finish_and_clear();
    }
}
