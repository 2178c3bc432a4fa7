// Mon Oct 19 2026 - Alex

use crate::io::error::IoError;
use crate::io::source::ClipInput;
use parking_lot::Mutex;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_PREFIX: &str = "patched_";

/// Receives patched buffers. Returns a description of where the data went.
pub trait PatchSink: Sync {
    fn write(&self, input: &ClipInput, data: &[u8]) -> Result<String, IoError>;
}

/// Writes `<dir>/<prefix><name>`, where `dir` is the output directory if set
/// and the input's own directory otherwise.
pub struct FileSink {
    output_dir: Option<PathBuf>,
    prefix: String,
}

impl FileSink {
    pub fn new() -> Self {
        Self {
            output_dir: None,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn destination(&self, input: &ClipInput) -> PathBuf {
        let file_name = format!("{}{}", self.prefix, input.name());

        let dir = match (&self.output_dir, input.path()) {
            (Some(dir), _) => dir.clone(),
            (None, Some(path)) => path.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_default(),
            (None, None) => PathBuf::new(),
        };

        dir.join(file_name)
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchSink for FileSink {
    fn write(&self, input: &ClipInput, data: &[u8]) -> Result<String, IoError> {
        let dest = self.destination(input);

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&dest, data)?;
        log::debug!("wrote {} bytes to {}", data.len(), dest.display());
        Ok(dest.display().to_string())
    }
}

/// Keeps patched buffers in memory, keyed by output name.
pub struct MemorySink {
    prefix: String,
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            files: Mutex::new(Vec::new()),
        }
    }

    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files.lock().clone()
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data.clone())
    }

    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().is_empty()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchSink for MemorySink {
    fn write(&self, input: &ClipInput, data: &[u8]) -> Result<String, IoError> {
        let name = format!("{}{}", self.prefix, input.name());
        self.files.lock().push((name.clone(), data.to_vec()));
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_next_to_input() {
        let input = ClipInput::from_path("/clips/rec.clip").unwrap();
        let sink = FileSink::new();
        assert_eq!(sink.destination(&input), PathBuf::from("/clips/patched_rec.clip"));
    }

    #[test]
    fn test_destination_in_output_dir() {
        let input = ClipInput::from_path("/clips/rec.clip").unwrap();
        let sink = FileSink::new()
            .with_output_dir(Some(PathBuf::from("/out")))
            .with_prefix("fixed_");
        assert_eq!(sink.destination(&input), PathBuf::from("/out/fixed_rec.clip"));
    }

    #[test]
    fn test_memory_sink_collects() {
        let sink = MemorySink::new();
        let input = ClipInput::from_bytes("a.clip", Vec::new());
        assert_eq!(sink.write(&input, b"xyz").unwrap(), "patched_a.clip");
        assert_eq!(sink.get("patched_a.clip"), Some(b"xyz".to_vec()));
        assert_eq!(sink.len(), 1);
    }
}
