use std::path::{Component, Path, PathBuf};

use serde_json::Value;

use crate::error::{OutputError, OutputResult};

/// Default extension for written documents.
pub const JSON_EXTENSION: &str = ".json";

/// Destination for generated documents.
///
/// Implementations must satisfy these invariants:
/// - A writer without an output root refuses every write.
/// - One `write_document` call produces at most one document.
/// - The writer never inspects document contents beyond rendering them.
pub trait DocumentWriter: Send + Sync {
    /// Root directory documents are written under, if configured.
    fn output_root(&self) -> Option<&Path>;

    /// Write `document` as `<root>/<subfolder>/<file_stem><extension>` and
    /// return the path written.
    fn write_document(
        &self,
        subfolder: &str,
        file_stem: &str,
        document: &Value,
        extension: &str,
    ) -> OutputResult<PathBuf>;

    /// Write with the default `.json` extension.
    fn write_json(&self, subfolder: &str, file_stem: &str, document: &Value) -> OutputResult<PathBuf> {
        self.write_document(subfolder, file_stem, document, JSON_EXTENSION)
    }
}

/// Path of a document below the output root.
///
/// `subfolder` and the file name may only contain plain path segments, so the
/// result always stays under `root`.
pub fn document_path(
    root: &Path,
    subfolder: &str,
    file_stem: &str,
    extension: &str,
) -> OutputResult<PathBuf> {
    let relative = Path::new(subfolder).join(format!("{file_stem}{extension}"));
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(OutputError::OutsideRoot { path: relative });
    }
    Ok(root.join(relative))
}
