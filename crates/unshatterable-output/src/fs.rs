//! File-system document writer.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::OutputConfig;
use crate::error::{OutputError, OutputResult};
use crate::traits::{document_path, DocumentWriter};

/// Writes documents below the configured output path, creating directories
/// as needed and rendering according to the config's formatting options.
#[derive(Clone, Debug)]
pub struct FsDocumentWriter {
    config: OutputConfig,
}

impl FsDocumentWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }
}

impl DocumentWriter for FsDocumentWriter {
    fn output_root(&self) -> Option<&Path> {
        self.config.output_path.as_deref()
    }

    fn write_document(
        &self,
        subfolder: &str,
        file_stem: &str,
        document: &Value,
        extension: &str,
    ) -> OutputResult<PathBuf> {
        let root = self.output_root().ok_or(OutputError::MissingOutputPath)?;
        let path = document_path(root, subfolder, file_stem, extension)?;
        let bytes = self.config.render(document)?;

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&path, &bytes)?;

        debug!(path = %path.display(), bytes = bytes.len(), "document written");
        Ok(path)
    }
}
