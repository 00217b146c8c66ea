//! Source discovery and file conversion.
//!
//! Walks a path for source files, lowers them, and optionally writes the
//! result back in place. Each file gets its own pipeline run, so batches are
//! converted in parallel.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::traits::JsxLowering;

/// Outcome of converting one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    /// Source file path
    pub path: PathBuf,

    /// Number of `return` statements rewritten
    pub statements: usize,

    /// Whether the converted text differs from the file contents
    pub changed: bool,

    /// Whether the converted text was written back
    pub written: bool,
}

/// Errors that can occur when reading or writing sources.
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// Collect source files under `root`.
///
/// A file is returned as-is regardless of extension. A directory is walked,
/// keeping files with one of `extensions` and skipping `node_modules` and
/// hidden directories. Results are sorted.
pub fn discover_sources(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, FilesError> {
    if !root.exists() {
        return Err(FilesError::NotFound(root.display().to_string()));
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut sources: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let ext = e.path().extension().and_then(|e| e.to_str()).unwrap_or("");
            extensions.iter().any(|allowed| allowed == ext)
        })
        .map(DirEntry::into_path)
        .collect();

    sources.sort();
    tracing::debug!("Discovered {} sources under {}", sources.len(), root.display());

    Ok(sources)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_str().unwrap_or("");
    name == "node_modules" || name.starts_with('.')
}

/// Lower one file, writing it back when `write` is set and the text changed.
pub fn convert_file<L>(path: &Path, lowering: &L, write: bool) -> Result<FileReport, FilesError>
where
    L: JsxLowering + ?Sized,
{
    let source = fs::read_to_string(path).map_err(|e| FilesError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let lowered = lowering.lower(&source);

    let written = write && lowered.changed;
    if written {
        fs::write(path, &lowered.output).map_err(|e| FilesError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::info!("Converted JSX in {}", path.display());
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        statements: lowered.statements,
        changed: lowered.changed,
        written,
    })
}

/// Lower many files in parallel. Results keep the order of `paths`.
pub fn convert_all<L>(
    paths: &[PathBuf],
    lowering: &L,
    write: bool,
) -> Vec<Result<FileReport, FilesError>>
where
    L: JsxLowering + ?Sized,
{
    paths
        .par_iter()
        .map(|path| convert_file(path, lowering, write))
        .collect()
}
