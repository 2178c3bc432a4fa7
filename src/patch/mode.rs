// Mon Oct 19 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchMode {
    /// Overwrite matches with zero bytes.
    #[default]
    #[serde(rename = "null")]
    NullBytes,
    /// Overwrite matches with the placeholder string, repeated and cut to fit.
    Placeholder,
}

impl PatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NullBytes => "null",
            Self::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for PatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "null" | "nullbytes" | "null-bytes" | "zero" => Ok(Self::NullBytes),
            "placeholder" => Ok(Self::Placeholder),
            other => Err(format!("unknown patch mode '{}' (expected 'null' or 'placeholder')", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("null".parse::<PatchMode>(), Ok(PatchMode::NullBytes));
        assert_eq!(" Placeholder ".parse::<PatchMode>(), Ok(PatchMode::Placeholder));
        assert!("erase".parse::<PatchMode>().is_err());
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(serde_json::to_string(&PatchMode::NullBytes).unwrap(), "\"null\"");
        assert_eq!(serde_json::to_string(&PatchMode::Placeholder).unwrap(), "\"placeholder\"");
        let mode: PatchMode = serde_json::from_str("\"null\"").unwrap();
        assert_eq!(mode, PatchMode::NullBytes);
    }
}
