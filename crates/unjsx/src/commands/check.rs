//! Check command: report files that still contain convertible JSX.

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use unjsx_core::{convert_all, CreateElementLowering, FileReport};

use super::collect_sources;
use crate::config::ConfigFile;

/// How pending files are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run the check command. Returns `true` when nothing would change.
pub async fn run(
    paths: Vec<PathBuf>,
    format: OutputFormat,
    namespace: Option<String>,
    config: &ConfigFile,
) -> Result<bool> {
    let lowering = CreateElementLowering::new(config.options(namespace));
    let sources = collect_sources(&paths, &config.convert.extensions)?;

    let mut pending: Vec<FileReport> = Vec::new();
    for result in convert_all(&sources, &lowering, false) {
        let report = result?;
        if report.changed {
            pending.push(report);
        }
    }

    match format {
        OutputFormat::Text => {
            for report in &pending {
                println!(
                    "{}: {} convertible return statements",
                    report.path.display(),
                    report.statements
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&pending)?);
        }
    }

    tracing::info!(
        "{} of {} files need conversion",
        pending.len(),
        sources.len()
    );

    Ok(pending.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn reports_pending_files_without_writing() {
        let temp = tempdir().unwrap();
        let source = "const Row = ({ id }) => {\n  return <tr key={id}></tr>;\n};\n";
        let file = temp.path().join("row.tsx");
        fs::write(&file, source).unwrap();

        let clean = run(
            vec![temp.path().to_path_buf()],
            OutputFormat::Json,
            None,
            &ConfigFile::default(),
        )
        .await
        .unwrap();

        assert!(!clean);
        assert_eq!(fs::read_to_string(&file).unwrap(), source);
    }

    #[tokio::test]
    async fn converted_tree_is_clean() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("row.tsx"),
            "const Row = ({ id }) => {\n  return React.createElement('tr', { key: id });\n};\n",
        )
        .unwrap();

        let clean = run(
            vec![temp.path().to_path_buf()],
            OutputFormat::Text,
            None,
            &ConfigFile::default(),
        )
        .await
        .unwrap();

        assert!(clean);
    }
}
