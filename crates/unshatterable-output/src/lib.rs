//! Output configuration and document writers for Unshatterable.
//!
//! The block model only assembles documents in memory; this crate decides
//! where they go and how they are rendered.
//!
//! # Writers
//!
//! All writers implement the [`DocumentWriter`] trait:
//!
//! - [`FsDocumentWriter`] -- writes below the configured output path
//! - [`InMemoryDocumentWriter`] -- records writes for tests and embedding
//!
//! # Design Rules
//!
//! 1. A writer without an output root refuses to write.
//! 2. Directories are created on demand; existing ones are reused.
//! 3. Rendering (compact or indented) is driven by [`OutputConfig`] only.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod config;
pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{OutputConfig, DEFAULT_CONFIG_FILE};
pub use error::{OutputError, OutputResult};
pub use fs::FsDocumentWriter;
pub use memory::{InMemoryDocumentWriter, WrittenDocument};
pub use traits::{DocumentWriter, JSON_EXTENSION};
