use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{OutputError, OutputResult};
use crate::traits::{document_path, DocumentWriter};

/// A document captured by [`InMemoryDocumentWriter`].
#[derive(Clone, Debug, PartialEq)]
pub struct WrittenDocument {
    pub subfolder: String,
    pub file_stem: String,
    pub extension: String,
    pub path: PathBuf,
    pub document: Value,
}

/// In-memory document writer.
///
/// Intended for tests and embedding. Every write is recorded in order behind
/// a `RwLock`; nothing touches the file system.
pub struct InMemoryDocumentWriter {
    root: Option<PathBuf>,
    written: RwLock<Vec<WrittenDocument>>,
}

impl InMemoryDocumentWriter {
    /// Create a writer with the given virtual output root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            written: RwLock::new(Vec::new()),
        }
    }

    /// Create a writer with no output root; every write fails.
    pub fn unconfigured() -> Self {
        Self {
            root: None,
            written: RwLock::new(Vec::new()),
        }
    }

    /// Number of documents written so far.
    pub fn len(&self) -> usize {
        self.written.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.written.read().expect("lock poisoned").is_empty()
    }

    /// All written documents in write order.
    pub fn documents(&self) -> Vec<WrittenDocument> {
        self.written.read().expect("lock poisoned").clone()
    }

    /// The most recent document written to `subfolder/file_stem`.
    pub fn get(&self, subfolder: &str, file_stem: &str) -> Option<WrittenDocument> {
        self.written
            .read()
            .expect("lock poisoned")
            .iter()
            .rev()
            .find(|d| d.subfolder == subfolder && d.file_stem == file_stem)
            .cloned()
    }
}

impl Default for InMemoryDocumentWriter {
    fn default() -> Self {
        Self::new("out")
    }
}

impl DocumentWriter for InMemoryDocumentWriter {
    fn output_root(&self) -> Option<&Path> {
        self.root.as_deref()
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
        self.written
            .write()
            .expect("lock poisoned")
            .push(WrittenDocument {
                subfolder: subfolder.to_string(),
                file_stem: file_stem.to_string(),
                extension: extension.to_string(),
                path: path.clone(),
                document: document.clone(),
            });
        Ok(path)
    }
}

impl std::fmt::Debug for InMemoryDocumentWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentWriter")
            .field("root", &self.root)
            .field("document_count", &self.len())
            .finish()
    }
}
