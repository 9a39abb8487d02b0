use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};
use unshatterable_output::{DocumentWriter, OutputError};
use unshatterable_types::{serialize, Block, BlockDocument, Identifier, BLOCK_SUBFOLDER};

use crate::error::{RegistryError, RegistryResult};

/// Catalog of registered blocks.
///
/// Each registry is an independent instance; identifiers are unique within
/// one registry. A successful [`Registry::register`] performs exactly one
/// catalog insertion and exactly one write. A failed one performs neither.
pub struct Registry<W: DocumentWriter> {
    blocks: IndexMap<String, Block>,
    writer: W,
}

impl<W: DocumentWriter> Registry<W> {
    /// Create an empty registry writing through `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            blocks: IndexMap::new(),
            writer,
        }
    }

    /// Register `block` under `identifier` and write its document.
    ///
    /// Returns the path of the written document.
    pub fn register(&mut self, identifier: &str, block: Block) -> RegistryResult<PathBuf> {
        if self.blocks.contains_key(identifier) {
            return Err(RegistryError::DuplicateIdentifier {
                identifier: identifier.to_string(),
            });
        }
        if self.writer.output_root().is_none() {
            return Err(RegistryError::MissingOutputConfiguration);
        }
        let id = Identifier::parse(identifier)?;

        let document = serde_json::to_value(serialize(&block, id.as_str()))
            .map_err(|e| OutputError::Serialization(e.to_string()))?;
        debug!(
            identifier = %id,
            properties = block.properties().count(),
            permutations = block.permutation_count(),
            "block document assembled"
        );

        let path = self
            .writer
            .write_json(BLOCK_SUBFOLDER, id.name(), &document)
            .map_err(|e| match e {
                OutputError::MissingOutputPath => RegistryError::MissingOutputConfiguration,
                other => RegistryError::Output(other),
            })?;

        self.blocks.insert(identifier.to_string(), block);
        info!(identifier = %id, path = %path.display(), "block registered");
        Ok(path)
    }

    pub fn get(&self, identifier: &str) -> Option<&Block> {
        self.blocks.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.blocks.contains_key(identifier)
    }

    /// Number of registered blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Registered identifiers in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    /// Rebuild the document of a registered block.
    pub fn document(&self, identifier: &str) -> Option<BlockDocument> {
        self.blocks
            .get(identifier)
            .map(|block| serialize(block, identifier))
    }

    /// Rebuild the document of a registered block as a JSON value.
    pub fn document_value(&self, identifier: &str) -> RegistryResult<Option<Value>> {
        let Some(document) = self.document(identifier) else {
            return Ok(None);
        };
        let value = serde_json::to_value(document)
            .map_err(|e| OutputError::Serialization(e.to_string()))?;
        Ok(Some(value))
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: DocumentWriter + std::fmt::Debug> std::fmt::Debug for Registry<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("block_count", &self.blocks.len())
            .field("writer", &self.writer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use unshatterable_output::{FsDocumentWriter, InMemoryDocumentWriter, OutputConfig};
    use unshatterable_types::{synthesize, Category, Permutation, TypeError};

    fn example_block() -> Block {
        Block::new(Category::Nature)
            .register_property("example:property", [0, 1, 2, 3, 4])
            .unwrap()
            .register_permutation(
                Permutation::new().light_absorption(1).break_on_push(true),
                "example:property",
                4,
            )
            .unwrap()
            .with_init(Permutation::new().light_absorption(15))
    }

    #[test]
    fn register_writes_one_document() {
        let mut registry = Registry::new(InMemoryDocumentWriter::new("out"));
        let path = registry.register("example:block", example_block()).unwrap();

        assert_eq!(path, PathBuf::from("out/blocks/block.json"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.writer().len(), 1);

        let written = registry.writer().get("blocks", "block").unwrap();
        let definition = &written.document["minecraft:block"];
        assert_eq!(definition["description"]["identifier"], json!("example:block"));
        assert_eq!(definition["description"]["category"], json!("Nature"));
        assert_eq!(
            definition["description"]["properties"]["example:property"],
            json!([0, 1, 2, 3, 4])
        );
        assert_eq!(
            definition["components"]["minecraft:block_light_absorption"],
            json!(15)
        );
        let permutations = definition["permutations"].as_array().unwrap();
        assert_eq!(permutations.len(), 1);
        assert_eq!(
            permutations[0]["condition"],
            json!(synthesize("example:property", 4).unwrap())
        );
    }

    #[test]
    fn duplicate_identifier_fails_without_side_effects() {
        let mut registry = Registry::new(InMemoryDocumentWriter::new("out"));
        registry.register("example:block", example_block()).unwrap();

        let err = registry
            .register("example:block", Block::new(Category::None))
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateIdentifier { ref identifier } if identifier == "example:block"
        ));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.writer().len(), 1);
        assert_eq!(
            registry.get("example:block").unwrap().category(),
            Category::Nature
        );
    }

    #[test]
    fn missing_output_configuration_fails_before_writing() {
        let mut registry = Registry::new(InMemoryDocumentWriter::unconfigured());
        let err = registry
            .register("example:block", example_block())
            .unwrap_err();
        assert!(matches!(err, RegistryError::MissingOutputConfiguration));
        assert!(registry.is_empty());
        assert!(registry.writer().is_empty());
    }

    #[test]
    fn failed_registration_can_be_retried_after_fix() {
        let mut registry = Registry::new(InMemoryDocumentWriter::new("out"));
        assert!(registry.register("bad", Block::default()).is_err());
        assert!(!registry.contains("bad"));
        registry.register("good:block", Block::default()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn invalid_identifier_is_rejected() {
        let mut registry = Registry::new(InMemoryDocumentWriter::new("out"));
        let err = registry.register("no_namespace", Block::default()).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Type(TypeError::InvalidIdentifier { .. })
        ));
        assert!(registry.is_empty());
        assert!(registry.writer().is_empty());
    }

    #[test]
    fn identifiers_cannot_escape_the_output_root() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let root = dir.path().join("BP");
        let mut registry = Registry::new(FsDocumentWriter::new(OutputConfig::with_output_path(&root)));

        let absolute = format!("ns:{}", elsewhere.path().join("evil").display());
        for identifier in [absolute.as_str(), "ns:../../escaped"] {
            let err = registry.register(identifier, Block::default()).unwrap_err();
            assert!(matches!(
                err,
                RegistryError::Type(TypeError::InvalidIdentifier { .. })
            ));
        }
        assert!(registry.is_empty());
        assert!(!elsewhere.path().join("evil.json").exists());
        assert!(!dir.path().join("escaped.json").exists());
        assert!(!root.exists());
    }

    #[test]
    fn failed_write_leaves_catalog_untouched_and_can_be_retried() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("BP");
        std::fs::write(&root, "not a directory").unwrap();
        let mut registry = Registry::new(FsDocumentWriter::new(OutputConfig::with_output_path(&root)));

        let err = registry.register("example:block", example_block()).unwrap_err();
        assert!(matches!(err, RegistryError::Output(OutputError::Io(_))));
        assert!(registry.is_empty());
        assert!(!registry.contains("example:block"));

        std::fs::remove_file(&root).unwrap();
        let path = registry.register("example:block", example_block()).unwrap();
        assert_eq!(path, root.join("blocks").join("block.json"));
        assert!(path.exists());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn identifiers_keep_registration_order() {
        let mut registry = Registry::new(InMemoryDocumentWriter::new("out"));
        registry.register("example:zeta", Block::default()).unwrap();
        registry.register("example:alpha", Block::default()).unwrap();
        let ids: Vec<&str> = registry.identifiers().collect();
        assert_eq!(ids, vec!["example:zeta", "example:alpha"]);
    }

    #[test]
    fn registries_are_independent() {
        let mut a = Registry::new(InMemoryDocumentWriter::new("a"));
        let mut b = Registry::new(InMemoryDocumentWriter::new("b"));
        a.register("example:block", Block::default()).unwrap();
        b.register("example:block", Block::default()).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn document_is_reproducible() {
        let mut registry = Registry::new(InMemoryDocumentWriter::new("out"));
        registry.register("example:block", example_block()).unwrap();
        let written = registry.writer().get("blocks", "block").unwrap().document;
        assert_eq!(
            registry.document_value("example:block").unwrap(),
            Some(written)
        );
        assert!(registry.document("example:missing").is_none());
    }

    #[test]
    fn writes_to_file_system() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig::with_output_path(dir.path());
        let mut registry = Registry::new(FsDocumentWriter::new(config));

        let path = registry.register("example:empty_block", Block::default()).unwrap();
        assert_eq!(path, dir.path().join("blocks").join("empty_block.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["minecraft:block"]["description"]["category"], json!("None"));
        assert_eq!(parsed["minecraft:block"]["permutations"], json!([]));
    }

    #[test]
    fn file_system_registration_is_byte_identical_across_registries() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let mut a = Registry::new(FsDocumentWriter::new(OutputConfig::with_output_path(dir_a.path())));
        let mut b = Registry::new(FsDocumentWriter::new(OutputConfig::with_output_path(dir_b.path())));

        let path_a = a.register("example:block", example_block()).unwrap();
        let path_b = b.register("example:block", example_block()).unwrap();
        assert_eq!(
            std::fs::read(path_a).unwrap(),
            std::fs::read(path_b).unwrap()
        );
    }
}
