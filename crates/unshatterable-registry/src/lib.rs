//! Block registry for Unshatterable.
//!
//! The registry is the one place blocks leave memory: it enforces identifier
//! uniqueness, flattens each block into its document, and hands the document
//! to a [`DocumentWriter`](unshatterable_output::DocumentWriter).

pub mod error;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;

// Re-export key types
pub use unshatterable_output::{
    DocumentWriter, FsDocumentWriter, InMemoryDocumentWriter, OutputConfig,
};
pub use unshatterable_types::{Block, BlockDocument, Category, Permutation};
