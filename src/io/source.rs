// Mon Oct 19 2026 - Alex

use crate::io::error::IoError;
use memmap2::Mmap;
use std::fs::{self, File};
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Contents of one input file. Files on disk are memory mapped read-only.
pub enum FileBytes {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for FileBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => mmap.as_ref(),
            Self::Owned(data) => data.as_slice(),
        }
    }
}

#[derive(Debug, Clone)]
enum Origin {
    Path(PathBuf),
    Memory(Vec<u8>),
}

#[derive(Debug, Clone)]
pub struct ClipInput {
    name: String,
    origin: Origin,
}

impl ClipInput {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, IoError> {
        let path = path.as_ref();
        let name = path.file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| IoError::InvalidFileName(path.to_path_buf()))?
            .to_string();

        Ok(Self {
            name,
            origin: Origin::Path(path.to_path_buf()),
        })
    }

    pub fn from_bytes(name: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            origin: Origin::Memory(data),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.origin {
            Origin::Path(path) => Some(path),
            Origin::Memory(_) => None,
        }
    }

    pub fn size(&self) -> Result<u64, IoError> {
        match &self.origin {
            Origin::Path(path) => Ok(fs::metadata(path)?.len()),
            Origin::Memory(data) => Ok(data.len() as u64),
        }
    }

    pub fn load(&self) -> Result<FileBytes, IoError> {
        match &self.origin {
            Origin::Memory(data) => Ok(FileBytes::Owned(data.clone())),
            Origin::Path(path) => {
                let file = File::open(path)?;
                // Zero length maps fail on some platforms.
                if file.metadata()?.len() == 0 {
                    return Ok(FileBytes::Owned(Vec::new()));
                }
                let mmap = unsafe { Mmap::map(&file) }?;
                Ok(FileBytes::Mapped(mmap))
            }
        }
    }
}

/// Resolves command line paths into inputs. Files are taken as given;
/// directories contribute their direct children whose extension matches
/// `extension` (case-insensitive), sorted by name.
pub fn collect_inputs<P: AsRef<Path>>(paths: &[P], extension: &str) -> Result<Vec<ClipInput>, IoError> {
    let mut inputs = Vec::new();

    for path in paths {
        let path = path.as_ref();

        if !path.exists() {
            return Err(IoError::NotFound(path.to_path_buf()));
        }

        if path.is_dir() {
            let mut children: Vec<PathBuf> = fs::read_dir(path)?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|p| p.is_file() && has_extension(p, extension))
                .collect();
            children.sort();

            log::debug!("{}: {} matching file(s)", path.display(), children.len());
            for child in children {
                inputs.push(ClipInput::from_path(child)?);
            }
        } else if path.is_file() {
            inputs.push(ClipInput::from_path(path)?);
        } else {
            return Err(IoError::NotAFile(path.to_path_buf()));
        }
    }

    Ok(inputs)
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}
