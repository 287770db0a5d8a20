// SPDX-License-Identifier: MPL-2.0
//! File selection guard.
//!
//! A selection is checked as a whole against an optional size ceiling: one
//! oversized file rejects the entire batch, otherwise the batch is forwarded
//! unchanged.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const KIB: u64 = 1024;
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// The single rejection kind of the guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("File(s) exceed maximum size of {}", size_label(.max_size))]
    SizeExceeded { max_size: u64 },
}

fn size_label(bytes: &u64) -> String {
    format_file_size(*bytes)
}

/// A file offered for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub path: Option<PathBuf>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            path: None,
        }
    }

    /// Reads name and size from the filesystem.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self {
            name,
            size: metadata.len(),
            path: Some(path.to_path_buf()),
        })
    }
}

/// What the guard forwards to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Single-file mode: the first candidate, or `None` for an empty pick.
    Single(Option<FileCandidate>),
    /// Multi-file mode: every candidate, in order.
    Multiple(Vec<FileCandidate>),
}

impl Selection {
    /// Accepted files, in order.
    #[must_use]
    pub fn files(&self) -> &[FileCandidate] {
        match self {
            Selection::Single(file) => file.as_slice(),
            Selection::Multiple(files) => files,
        }
    }
}

/// All-or-nothing size validation for file selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeGuard {
    max_size: Option<u64>,
    multiple: bool,
}

impl SizeGuard {
    /// A ceiling of zero is treated as no ceiling.
    #[must_use]
    pub fn new(max_size: Option<u64>, multiple: bool) -> Self {
        Self {
            max_size: max_size.filter(|&bytes| bytes > 0),
            multiple,
        }
    }

    #[must_use]
    pub fn max_size(&self) -> Option<u64> {
        self.max_size
    }

    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Validates a batch.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::SizeExceeded`] if any candidate is larger than
    /// the ceiling. No candidate is accepted in that case.
    pub fn check(
        &self,
        candidates: Vec<FileCandidate>,
    ) -> std::result::Result<Selection, UploadError> {
        if let Some(max_size) = self.max_size {
            if let Some(oversized) = candidates.iter().find(|file| file.size > max_size) {
                log::info!(
                    "rejecting {} file(s): {} is {} bytes, limit {max_size}",
                    candidates.len(),
                    oversized.name,
                    oversized.size
                );
                return Err(UploadError::SizeExceeded { max_size });
            }
        }

        Ok(if self.multiple {
            Selection::Multiple(candidates)
        } else {
            Selection::Single(candidates.into_iter().next())
        })
    }
}

/// Formats a byte count with base-1024 units and at most two decimals.
///
/// Trailing zeros are dropped, so 1024 bytes is `"1 KB"` and 1536 bytes is
/// `"1.5 KB"`. Sizes beyond the gigabyte range stay in GB.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit < SIZE_UNITS.len() - 1 && bytes >= scale * KIB {
        scale *= KIB;
        unit += 1;
    }

    let value = bytes as f64 / scale as f64;
    // Half-up to two decimals; `f64`'s shortest form drops trailing zeros.
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}
