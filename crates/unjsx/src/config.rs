//! Configuration file loading (unjsx.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use unjsx_core::ConvertOptions;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub convert: ConvertSection,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ConvertSection {
    /// Object whose createElement is called
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// One indentation level in generated calls
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Extensions picked up when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ConvertSection {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            indent: default_indent(),
            extensions: default_extensions(),
        }
    }
}

fn default_namespace() -> String {
    "React".to_string()
}
fn default_indent() -> String {
    "  ".to_string()
}
fn default_extensions() -> Vec<String> {
    vec!["tsx".to_string(), "jsx".to_string()]
}

impl ConfigFile {
    /// Conversion options, with a command-line namespace taking precedence.
    pub fn options(&self, namespace: Option<String>) -> ConvertOptions {
        ConvertOptions {
            namespace: namespace.unwrap_or_else(|| self.convert.namespace.clone()),
            indent_unit: self.convert.indent.clone(),
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
