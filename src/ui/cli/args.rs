// Mon Oct 19 2026 - Alex

use crate::patch::PatchMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clip-patcher")]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Removes embedded resource names from editor clip files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Patch clip files and write patched copies
    Patch(PatchArgs),
    /// List matches in one file without patching
    Scan(ScanArgs),
    /// Dump printable string runs, useful for writing wildcard patterns
    Strings(StringsArgs),
    /// Write a default config file
    InitConfig(InitConfigArgs),
}

#[derive(Parser, Debug)]
pub struct PatchArgs {
    /// Clip files or directories containing them
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Pattern to remove; `*` and `?` are wildcards. May be repeated
    #[arg(short, long = "pattern")]
    pub patterns: Vec<String>,

    /// File with one pattern per line
    #[arg(long)]
    pub patterns_file: Option<PathBuf>,

    #[arg(short, long)]
    pub mode: Option<PatchMode>,

    #[arg(long)]
    pub placeholder: Option<String>,

    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    #[arg(long)]
    pub prefix: Option<String>,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON object overriding message strings
    #[arg(long)]
    pub locale: Option<PathBuf>,

    #[arg(long)]
    pub parallel: bool,

    #[arg(long)]
    pub threads: Option<usize>,

    #[arg(long)]
    pub no_progress: bool,

    /// Scan and report without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the batch reports as JSON instead of the run log
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    pub file: PathBuf,

    #[arg(short, long = "pattern")]
    pub patterns: Vec<String>,

    #[arg(long)]
    pub patterns_file: Option<PathBuf>,

    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct StringsArgs {
    pub file: PathBuf,

    #[arg(long, default_value = "4")]
    pub min_len: usize,

    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct InitConfigArgs {
    #[arg(default_value = "clip-patcher.json")]
    pub path: PathBuf,
}

impl PatchArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("--threads must be greater than 0".to_string());
        }
        if self.prefix.as_deref() == Some("") && self.output_dir.is_none() {
            return Err("An empty --prefix requires --output-dir".to_string());
        }
        Ok(())
    }
}
