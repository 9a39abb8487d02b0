use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{OutputError, OutputResult};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "unshatterable-config.json";

/// Where documents are written and how they are rendered.
///
/// Field names follow the config file keys `outputPath`, `minimizeJSON`,
/// and `JSONIndent`. Missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for generated documents.
    #[serde(rename = "outputPath", skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    /// Write compact JSON instead of indented JSON.
    #[serde(rename = "minimizeJSON")]
    pub minimize_json: bool,
    /// Indentation token used for pretty output.
    #[serde(rename = "JSONIndent")]
    pub json_indent: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            minimize_json: false,
            json_indent: "  ".into(),
        }
    }
}

impl OutputConfig {
    /// A pretty-printing configuration rooted at `path`.
    pub fn with_output_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Load a config file. `.toml` files are parsed as TOML, anything else
    /// as JSON.
    pub fn load(path: &Path) -> OutputResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_toml = path.extension().is_some_and(|ext| ext == "toml");
        let parsed = if is_toml {
            toml::from_str(&text).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&text).map_err(|e| e.to_string())
        };
        parsed.map_err(|reason| OutputError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Like [`OutputConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> OutputResult<Self> {
        match Self::load(path) {
            Err(OutputError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found; using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Render `document` as compact or indented JSON.
    pub fn render(&self, document: &Value) -> OutputResult<Vec<u8>> {
        if self.minimize_json {
            return serde_json::to_vec(document)
                .map_err(|e| OutputError::Serialization(e.to_string()));
        }
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(self.json_indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document
            .serialize(&mut ser)
            .map_err(|e| OutputError::Serialization(e.to_string()))?;
        Ok(buf)
    }
}
