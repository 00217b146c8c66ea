pub mod check;
pub mod convert;
pub mod init;

use std::path::PathBuf;

use anyhow::Result;
use unjsx_core::discover_sources;

/// Expand command-line paths into the source files they name.
fn collect_sources(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for path in paths {
        for source in discover_sources(path, extensions)? {
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
    }
    Ok(sources)
}
