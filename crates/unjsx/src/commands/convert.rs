//! Convert command.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use unjsx_core::{convert_all, CreateElementLowering, JsxLowering};

use super::collect_sources;
use crate::config::ConfigFile;

/// Run the convert command.
pub async fn run(
    paths: Vec<PathBuf>,
    to_stdout: bool,
    namespace: Option<String>,
    config: &ConfigFile,
) -> Result<()> {
    let lowering = CreateElementLowering::new(config.options(namespace));

    if let [path] = paths.as_slice() {
        if path == Path::new("-") {
            let mut source = String::new();
            tokio::io::stdin()
                .read_to_string(&mut source)
                .await
                .context("Failed to read stdin")?;
            print!("{}", lowering.lower(&source).output);
            return Ok(());
        }
    }

    if to_stdout {
        let [path] = paths.as_slice() else {
            anyhow::bail!("--stdout takes exactly one file, got {}", paths.len());
        };
        let source = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let lowered = lowering.lower(&source);
        tracing::debug!(
            "Converted {} statements in {}",
            lowered.statements,
            path.display()
        );
        print!("{}", lowered.output);
        return Ok(());
    }

    let start = Instant::now();
    let sources = collect_sources(&paths, &config.convert.extensions)?;
    tracing::info!("Converting {} files...", sources.len());

    let mut converted = 0;
    let mut statements = 0;
    let mut failed = 0;

    for result in convert_all(&sources, &lowering, true) {
        match result {
            Ok(report) => {
                statements += report.statements;
                if report.written {
                    converted += 1;
                }
            }
            Err(e) => {
                tracing::warn!("{}", e);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "Converted {} return statements in {} of {} files in {}ms",
        statements,
        converted,
        sources.len(),
        start.elapsed().as_millis()
    );

    if failed > 0 {
        anyhow::bail!("{} files could not be converted", failed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn converts_directory_in_place() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("badge.jsx");
        fs::write(&file, "function Badge({ n }) {\n  return <span count={n} />;\n}\n").unwrap();

        run(
            vec![temp.path().to_path_buf()],
            false,
            Some("h".to_string()),
            &ConfigFile::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "function Badge({ n }) {\n  return h.createElement('span', { count: n });\n}\n"
        );
    }

    #[tokio::test]
    async fn stdout_rejects_several_files() {
        let temp = tempdir().unwrap();
        let result = run(
            vec![temp.path().join("a.tsx"), temp.path().join("b.tsx")],
            true,
            None,
            &ConfigFile::default(),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_path_is_an_error() {
        let temp = tempdir().unwrap();
        let result = run(
            vec![temp.path().join("missing")],
            false,
            None,
            &ConfigFile::default(),
        )
        .await;

        assert!(result.is_err());
    }
}
