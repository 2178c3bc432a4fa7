// Mon Oct 19 2026 - Alex

use super::args::{Args, Command, InitConfigArgs, PatchArgs, ScanArgs, StringsArgs};
use crate::analysis::extract_strings;
use crate::config::PatcherConfig;
use crate::engine::{BatchRunner, PatchEngine, PatchOptions};
use crate::io::{collect_inputs, ClipInput, FileSink};
use crate::pattern::{Match, Pattern};
use crate::ui::banner::Banner;
use crate::ui::display::{format_offset, format_size};
use crate::ui::locale::Locale;
use crate::ui::progress::ConsoleObserver;
use crate::ui::report::Reporter;
use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        self.setup_logging(&args)?;

        if args.no_color {
            colored::control::set_override(false);
        }

        match args.command {
            Command::Patch(patch_args) => self.handle_patch(patch_args),
            Command::Scan(scan_args) => self.handle_scan(scan_args),
            Command::Strings(strings_args) => self.handle_strings(strings_args),
            Command::InitConfig(init_args) => self.handle_init_config(init_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            other => anyhow::bail!("Unknown log level: {}", other),
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .context("Failed to initialise logger")?;

        Ok(())
    }

    fn handle_patch(&self, args: PatchArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = self.resolve_config(&args)?;
        let locale = match &args.locale {
            Some(path) => Locale::load(path)
                .with_context(|| format!("Failed to load locale {:?}", path))?,
            None => Locale::english(),
        };

        if !self.quiet && !args.json {
            Banner::print(&locale);
        }

        let mut raw_patterns = config.patterns.clone();
        raw_patterns.extend(read_patterns(&args.patterns, &args.patterns_file)?);
        let patterns = Pattern::from_strings(raw_patterns.as_slice())
            .map_err(|_| anyhow::anyhow!("{}", locale.get("noPatternsError")))?;

        let inputs = collect_inputs(args.files.as_slice(), &config.extension)?;
        if inputs.is_empty() {
            anyhow::bail!("{}", locale.get("noFilesError"));
        }

        if !self.quiet && !args.json {
            for input in &inputs {
                let size = input.size().map(format_size).unwrap_or_else(|_| "?".to_string());
                println!("  {} ({})", input.name(), size.dimmed());
            }
        }

        let engine = PatchEngine::new(config.patch_options());
        let runner = BatchRunner::new(engine, patterns)?
            .with_parallel(config.parallel)
            .with_threads(config.threads)
            .with_dry_run(args.dry_run);

        let sink = FileSink::new()
            .with_output_dir(config.output_dir.clone())
            .with_prefix(&config.output_prefix);

        let observer = ConsoleObserver::new(Reporter::new(locale))
            .with_progress(!args.no_progress && !args.json)
            .with_quiet(self.quiet || args.json);

        let (summary, reports) = runner.run(&inputs, &sink, &observer)?;

        if args.json {
            let out = serde_json::json!({ "summary": summary, "files": reports });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }

        Ok(())
    }

    /// Config file values with command line flags layered on top.
    fn resolve_config(&self, args: &PatchArgs) -> anyhow::Result<PatcherConfig> {
        let mut config = match &args.config {
            Some(path) => PatcherConfig::load(path)?,
            None => PatcherConfig::default(),
        };

        if let Some(mode) = args.mode {
            config.mode = mode;
        }
        if let Some(placeholder) = &args.placeholder {
            config.placeholder = placeholder.clone();
        }
        if args.case_insensitive {
            config.case_insensitive = true;
        }
        if let Some(dir) = &args.output_dir {
            config.output_dir = Some(dir.clone());
        }
        if let Some(prefix) = &args.prefix {
            config.output_prefix = prefix.clone();
        }
        if args.parallel {
            config.parallel = true;
        }
        if let Some(threads) = args.threads {
            config.threads = threads;
        }

        config.validate()?;
        log::debug!("effective config: {:?}", config);
        Ok(config)
    }

    fn handle_scan(&self, args: ScanArgs) -> anyhow::Result<()> {
        let raw_patterns = read_patterns(&args.patterns, &args.patterns_file)?;
        let patterns = Pattern::from_strings(raw_patterns.as_slice())?;

        let input = ClipInput::from_path(&args.file)?;
        let data = input.load()?;
        let engine = PatchEngine::new(PatchOptions::default().with_case_insensitive(args.case_insensitive));

        let mut matches: Vec<Match> = Vec::new();
        for pattern in &patterns {
            matches.extend(engine.scan(&data, pattern)?);
        }
        matches.sort_by_key(|m| m.offset());

        if args.json {
            println!("{}", serde_json::to_string_pretty(&matches)?);
            return Ok(());
        }

        for m in &matches {
            println!(
                "{}  {:>6}  {}  {}",
                format_offset(m.offset()).yellow(),
                m.length(),
                m.source_pattern().dimmed(),
                m.matched_text()
            );
        }

        if !self.quiet {
            println!("{}", format!("{} match(es) in {}", matches.len(), input.name()).cyan());
        }

        Ok(())
    }

    fn handle_strings(&self, args: StringsArgs) -> anyhow::Result<()> {
        let input = ClipInput::from_path(&args.file)?;
        let data = input.load()?;
        let min_len = args.min_len.max(1);
        let runs = extract_strings(&data).filter(|run| run.len() >= min_len);

        if args.json {
            let runs: Vec<_> = runs.collect();
            println!("{}", serde_json::to_string_pretty(&runs)?);
            return Ok(());
        }

        for run in runs {
            println!("{}  {}", format_offset(run.offset).yellow(), run.text);
        }

        Ok(())
    }

    fn handle_init_config(&self, args: InitConfigArgs) -> anyhow::Result<()> {
        if args.path.exists() {
            anyhow::bail!("Refusing to overwrite existing file: {:?}", args.path);
        }

        PatcherConfig::default().save(&args.path)?;
        println!("{}", format!("Config written to: {:?}", args.path).green());
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn read_patterns(inline: &[String], file: &Option<PathBuf>) -> anyhow::Result<Vec<String>> {
    let mut patterns = inline.to_vec();

    if let Some(path) = file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read patterns file {:?}", path))?;
        patterns.extend(Pattern::parse_list(&contents).into_iter().map(|p| p.as_str().to_string()));
    }

    Ok(patterns)
}
