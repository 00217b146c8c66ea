//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# unjsx configuration

[convert]
# Object whose createElement is called
namespace = "React"

# One indentation level in generated calls
indent = "  "

# Extensions picked up when walking directories
extensions = ["tsx", "jsx"]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, ConfigFile};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_default_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("unjsx.toml");

        run(&path, false).await.unwrap();

        assert_eq!(load_config(&path).unwrap(), ConfigFile::default());
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("unjsx.toml");
        fs::write(&path, "[convert]\nnamespace = \"h\"\n").unwrap();

        run(&path, false).await.unwrap();
        assert_eq!(load_config(&path).unwrap().convert.namespace, "h");

        run(&path, true).await.unwrap();
        assert_eq!(load_config(&path).unwrap().convert.namespace, "React");
    }
}
