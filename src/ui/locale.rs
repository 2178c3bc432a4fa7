// Mon Oct 19 2026 - Alex

use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

const ENGLISH: &[(&str, &str)] = &[
    ("title", "Clip Patcher"),
    ("subtitle", "Pattern patcher for editor clip files"),
    ("ready", "✓ Ready to patch clips!"),
    ("found", "Found"),
    ("clipFiles", "clip file(s)"),
    ("patterns", "Patterns:"),
    ("mode", "Mode:"),
    ("noMatches", "no matches"),
    ("patternsPatched", "pattern(s) patched"),
    ("at", "at"),
    ("offset", "offset"),
    ("done", "✅ Done! Files patched:"),
    ("totalPatterns", "   Total patterns patched:"),
    ("cancelled", "Batch cancelled before all files were processed"),
    ("noFilesError", "Please select at least one .clip file."),
    ("noPatternsError", "Please enter at least one pattern."),
];

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid locale file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User facing strings, keyed like the translation files. Unknown keys
/// render as the key itself.
#[derive(Debug, Clone)]
pub struct Locale {
    strings: IndexMap<String, String>,
}

impl Locale {
    pub fn english() -> Self {
        Self {
            strings: ENGLISH.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// English strings overridden by the entries of a flat JSON object.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LocaleError> {
        let contents = fs::read_to_string(path)?;
        Self::english().merged_json(&contents)
    }

    pub fn merged_json(mut self, json: &str) -> Result<Self, LocaleError> {
        let overrides: IndexMap<String, String> = serde_json::from_str(json)?;
        self.strings.extend(overrides);
        Ok(self)
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}
