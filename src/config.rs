// Mon Oct 19 2026 - Alex

use crate::engine::{PatchOptions, DEFAULT_PLACEHOLDER};
use crate::io::sink::DEFAULT_PREFIX;
use crate::patch::PatchMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatcherConfig {
    pub mode: PatchMode,
    pub placeholder: String,
    pub case_insensitive: bool,
    pub patterns: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub output_prefix: String,
    pub extension: String,
    pub parallel: bool,
    pub threads: usize,
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            mode: PatchMode::NullBytes,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            case_insensitive: false,
            patterns: Vec::new(),
            output_dir: None,
            output_prefix: DEFAULT_PREFIX.to_string(),
            extension: "clip".to_string(),
            parallel: false,
            threads: num_cpus::get(),
        }
    }
}

impl PatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match ext.to_lowercase().as_str() {
            "json" => {
                let contents = fs::read_to_string(path)
                    .map_err(|e| ConfigError::Io(e.to_string()))?;
                serde_json::from_str(&contents)
                    .map_err(|e| ConfigError::Parse(e.to_string()))
            }
            _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        fs::write(path, contents)
            .map_err(|e| ConfigError::Io(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::Validation("threads must be > 0".to_string()));
        }

        if self.output_prefix.is_empty() && self.output_dir.is_none() {
            return Err(ConfigError::Validation(
                "output_prefix may only be empty when output_dir is set".to_string()
            ));
        }

        if self.extension.trim_start_matches('.').is_empty() {
            return Err(ConfigError::Validation("extension must not be empty".to_string()));
        }

        Ok(())
    }

    /// A blank placeholder means "use the default", matching what users see
    /// when they leave the field empty.
    pub fn effective_placeholder(&self) -> &str {
        if self.placeholder.is_empty() {
            DEFAULT_PLACEHOLDER
        } else {
            &self.placeholder
        }
    }

    pub fn patch_options(&self) -> PatchOptions {
        PatchOptions::new(self.mode)
            .with_placeholder(self.effective_placeholder())
            .with_case_insensitive(self.case_insensitive)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialize error: {0}")]
    Serialize(String),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PatcherConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, PatchMode::NullBytes);
        assert_eq!(config.placeholder, "REMOVED");
        assert_eq!(config.output_prefix, "patched_");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PatcherConfig = serde_json::from_str(
            r#"{ "mode": "placeholder", "placeholder": "", "patterns": ["dpemotes"] }"#
        ).unwrap();

        assert_eq!(config.mode, PatchMode::Placeholder);
        assert_eq!(config.effective_placeholder(), "REMOVED");
        assert_eq!(config.patterns, vec!["dpemotes".to_string()]);
        assert_eq!(config.extension, "clip");
    }

    #[test]
    fn test_validation() {
        let mut config = PatcherConfig::default();
        config.threads = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = PatcherConfig::default();
        config.output_prefix.clear();
        assert!(config.validate().is_err());
        config.output_dir = Some(PathBuf::from("out"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("clip-patcher-config-{}", std::process::id()));
        let path = dir.join("config.json");

        let mut config = PatcherConfig::default();
        config.case_insensitive = true;
        config.patterns = vec!["asea".to_string()];
        config.save(&path).unwrap();

        let loaded = PatcherConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        assert!(matches!(PatcherConfig::load(dir.join("missing.json")), Err(ConfigError::NotFound(_))));
        fs::remove_dir_all(&dir).ok();
    }
}
