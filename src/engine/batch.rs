// Mon Oct 19 2026 - Alex

use crate::engine::core::PatchEngine;
use crate::engine::error::EngineError;
use crate::io::{ClipInput, PatchSink};
use crate::patch::PatchMode;
use crate::pattern::{Match, Pattern, PatternError};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Patched {
        matches: Vec<Match>,
        output: Option<String>,
    },
    NoMatches,
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub name: String,
    pub size: usize,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn match_count(&self) -> usize {
        match &self.outcome {
            FileOutcome::Patched { matches, .. } => matches.len(),
            _ => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub files_total: usize,
    pub files_patched: usize,
    pub patterns_patched: usize,
    pub failures: usize,
    pub cancelled: bool,
}

impl BatchSummary {
    fn record(&mut self, report: &FileReport) {
        match &report.outcome {
            FileOutcome::Patched { matches, .. } => {
                self.files_patched += 1;
                self.patterns_patched += matches.len();
            }
            FileOutcome::NoMatches => {}
            FileOutcome::Failed { .. } => self.failures += 1,
        }
    }
}

/// Receives batch progress. Every hook defaults to doing nothing. In parallel
/// runs the per-file hooks fire from worker threads in completion order.
pub trait ProgressObserver: Sync {
    fn on_batch_start(&self, _total: usize, _patterns: &[Pattern], _mode: PatchMode) {}

    fn on_file_start(&self, _index: usize, _total: usize, _name: &str) {}

    fn on_file_done(&self, _index: usize, _total: usize, _report: &FileReport) {}

    fn on_batch_done(&self, _summary: &BatchSummary) {}
}

pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

pub fn progress_percent(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    ((index + 1) as f64 / total as f64) * 100.0
}

/// Runs one engine over many files. Each file is an independent invocation;
/// cancellation is checked only between files.
pub struct BatchRunner {
    engine: PatchEngine,
    patterns: Vec<Pattern>,
    parallel: bool,
    threads: usize,
    dry_run: bool,
    cancel: Arc<AtomicBool>,
}

impl BatchRunner {
    pub fn new(engine: PatchEngine, patterns: Vec<Pattern>) -> Result<Self, PatternError> {
        if patterns.is_empty() {
            return Err(PatternError::EmptyPatternList);
        }

        Ok(Self {
            engine,
            patterns,
            parallel: false,
            threads: num_cpus::get(),
            dry_run: false,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn run(
        &self,
        inputs: &[ClipInput],
        sink: &dyn PatchSink,
        observer: &dyn ProgressObserver,
    ) -> Result<(BatchSummary, Vec<FileReport>), EngineError> {
        if inputs.is_empty() {
            return Err(EngineError::NoFiles);
        }

        let total = inputs.len();
        observer.on_batch_start(total, &self.patterns, self.engine.options().mode);

        let reports: Vec<FileReport> = if self.parallel {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build()
                .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

            pool.install(|| {
                inputs.par_iter()
                    .enumerate()
                    .filter_map(|(index, input)| self.run_one(index, total, input, sink, observer))
                    .collect()
            })
        } else {
            inputs.iter()
                .enumerate()
                .map_while(|(index, input)| self.run_one(index, total, input, sink, observer))
                .collect()
        };

        let mut summary = BatchSummary {
            files_total: total,
            cancelled: self.cancel.load(Ordering::SeqCst) && reports.len() < total,
            ..BatchSummary::default()
        };
        for report in &reports {
            summary.record(report);
        }

        log::info!(
            "batch done: {}/{} file(s) patched, {} match(es), {} failure(s)",
            summary.files_patched,
            summary.files_total,
            summary.patterns_patched,
            summary.failures
        );
        observer.on_batch_done(&summary);

        Ok((summary, reports))
    }

    fn run_one(
        &self,
        index: usize,
        total: usize,
        input: &ClipInput,
        sink: &dyn PatchSink,
        observer: &dyn ProgressObserver,
    ) -> Option<FileReport> {
        if self.cancel.load(Ordering::SeqCst) {
            log::debug!("skipping {}: batch cancelled", input.name());
            return None;
        }

        observer.on_file_start(index, total, input.name());
        let report = self.process(input, sink);
        observer.on_file_done(index, total, &report);
        Some(report)
    }

    /// Patches a single input. Failures are captured in the report so the
    /// rest of the batch keeps going.
    pub fn process(&self, input: &ClipInput, sink: &dyn PatchSink) -> FileReport {
        let data = match input.load() {
            Ok(data) => data,
            Err(e) => return failed(input.name(), 0, e.to_string()),
        };

        let result = match self.engine.patch(&data, &self.patterns) {
            Ok(result) => result,
            Err(e) => return failed(input.name(), data.len(), e.to_string()),
        };

        if !result.is_modified() {
            return FileReport {
                name: input.name().to_string(),
                size: data.len(),
                outcome: FileOutcome::NoMatches,
            };
        }

        let output = if self.dry_run {
            None
        } else {
            match sink.write(input, result.patched_buffer()) {
                Ok(dest) => Some(dest),
                Err(e) => return failed(input.name(), data.len(), e.to_string()),
            }
        };

        FileReport {
            name: input.name().to_string(),
            size: data.len(),
            outcome: FileOutcome::Patched {
                matches: result.applied_matches().to_vec(),
                output,
            },
        }
    }
}

fn failed(name: &str, size: usize, error: String) -> FileReport {
    log::warn!("{}: {}", name, error);
    FileReport {
        name: name.to_string(),
        size,
        outcome: FileOutcome::Failed { error },
    }
}
