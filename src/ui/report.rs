// Mon Oct 19 2026 - Alex

use crate::engine::{BatchSummary, FileOutcome, FileReport};
use crate::patch::PatchMode;
use crate::pattern::Pattern;
use crate::ui::display::{clock_timestamp, separator};
use crate::ui::locale::Locale;
use colored::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LogKind,
    pub time: String,
    pub text: String,
}

impl LogLine {
    pub fn new(kind: LogKind, text: String) -> Self {
        Self {
            kind,
            time: clock_timestamp(),
            text,
        }
    }

    fn info(text: String) -> Self {
        Self::new(LogKind::Info, text)
    }

    fn success(text: String) -> Self {
        Self::new(LogKind::Success, text)
    }

    fn error(text: String) -> Self {
        Self::new(LogKind::Error, text)
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!("[{}] {}", self.time, self.text);
        match self.kind {
            LogKind::Info => write!(f, "{}", line),
            LogKind::Success => write!(f, "{}", line.green()),
            LogKind::Error => write!(f, "{}", line.red()),
        }
    }
}

/// Renders batch events as the human readable run log.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    locale: Locale,
}

impl Reporter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn batch_header(&self, total: usize, patterns: &[Pattern], mode: PatchMode) -> Vec<LogLine> {
        let t = &self.locale;
        let names: Vec<&str> = patterns.iter().map(|p| p.as_str()).collect();

        vec![
            LogLine::info(format!("{} {} {}", t.get("found"), total, t.get("clipFiles"))),
            LogLine::info(format!("{} {}", t.get("patterns"), names.join(", "))),
            LogLine::info(format!("{} {}", t.get("mode"), mode)),
            LogLine::info(separator()),
        ]
    }

    pub fn file_lines(&self, report: &FileReport) -> Vec<LogLine> {
        let t = &self.locale;

        match &report.outcome {
            FileOutcome::Patched { matches, .. } => {
                let mut lines = Vec::with_capacity(matches.len() + 1);
                lines.push(LogLine::success(format!(
                    "✓ {}: {} {}",
                    report.name,
                    matches.len(),
                    t.get("patternsPatched")
                )));
                for m in matches {
                    lines.push(LogLine::info(format!(
                        "  → '{}' {} {} {}",
                        m.matched_text(),
                        t.get("at"),
                        t.get("offset"),
                        m.offset()
                    )));
                }
                lines
            }
            FileOutcome::NoMatches => {
                vec![LogLine::info(format!("○ {}: {}", report.name, t.get("noMatches")))]
            }
            FileOutcome::Failed { error } => {
                vec![LogLine::error(format!("❌ {}: {}", report.name, error))]
            }
        }
    }

    pub fn summary(&self, summary: &BatchSummary) -> Vec<LogLine> {
        let t = &self.locale;
        let mut lines = vec![LogLine::info(separator())];

        if summary.cancelled {
            lines.push(LogLine::error(t.get("cancelled").to_string()));
        }

        lines.push(LogLine::success(format!(
            "{} {}/{}",
            t.get("done"),
            summary.files_patched,
            summary.files_total
        )));
        lines.push(LogLine::success(format!("{} {}", t.get("totalPatterns"), summary.patterns_patched)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Match;

    fn texts(lines: &[LogLine]) -> Vec<String> {
        lines.iter().map(|l| l.text.clone()).collect()
    }

    #[test]
    fn test_patched_file_lines() {
        let report = FileReport {
            name: "rec.clip".to_string(),
            size: 100,
            outcome: FileOutcome::Patched {
                matches: vec![Match::new(42, 4, "asea".to_string())],
                output: None,
            },
        };

        let lines = Reporter::default().file_lines(&report);
        assert_eq!(texts(&lines), vec![
            "✓ rec.clip: 1 pattern(s) patched".to_string(),
            "  → 'asea' at offset 42".to_string(),
        ]);
        assert_eq!(lines[0].kind, LogKind::Success);
    }

    #[test]
    fn test_other_outcomes() {
        let reporter = Reporter::default();
        let none = FileReport { name: "a.clip".to_string(), size: 0, outcome: FileOutcome::NoMatches };
        let failed = FileReport {
            name: "b.clip".to_string(),
            size: 0,
            outcome: FileOutcome::Failed { error: "boom".to_string() },
        };

        assert_eq!(texts(&reporter.file_lines(&none)), vec!["○ a.clip: no matches".to_string()]);
        assert_eq!(reporter.file_lines(&failed)[0].kind, LogKind::Error);
        assert_eq!(reporter.file_lines(&failed)[0].text, "❌ b.clip: boom");
    }

    #[test]
    fn test_lines_carry_timestamp() {
        let line = LogLine {
            kind: LogKind::Info,
            time: "14:03:09".to_string(),
            text: "○ a.clip: no matches".to_string(),
        };
        assert_eq!(line.to_string(), "[14:03:09] ○ a.clip: no matches");

        let stamped = LogLine::new(LogKind::Info, "x".to_string());
        assert_eq!(stamped.time.len(), 8);
        assert_eq!(stamped.time.matches(':').count(), 2);
    }

    #[test]
    fn test_header_and_summary() {
        let reporter = Reporter::default();
        let patterns = Pattern::from_strings(&["dpemotes", "asea"]).unwrap();
        let header = texts(&reporter.batch_header(2, &patterns, PatchMode::NullBytes));
        assert_eq!(header[0], "Found 2 clip file(s)");
        assert_eq!(header[1], "Patterns: dpemotes, asea");
        assert_eq!(header[2], "Mode: null");

        let summary = BatchSummary {
            files_total: 2,
            files_patched: 1,
            patterns_patched: 3,
            failures: 0,
            cancelled: false,
        };
        let lines = texts(&reporter.summary(&summary));
        assert_eq!(lines[1], "✅ Done! Files patched: 1/2");
        assert_eq!(lines[2], "   Total patterns patched: 3");
    }
}
