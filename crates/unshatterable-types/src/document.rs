//! Flattening a [`Block`] into the block definition document.
//!
//! The document layout is fixed by the content loader:
//!
//! ```text
//! {
//!   "format_version": "1.16.100",
//!   "minecraft:block": {
//!     "description": { "identifier", "category", "properties" },
//!     "components": { ... },
//!     "permutations": [ { "condition", "components" }, ... ],
//!     "events": {}
//!   }
//! }
//! ```
//!
//! Every map is emitted in the builder's insertion order, and the
//! permutations array follows permutation registration order.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::block::Block;
use crate::category::Category;
use crate::component::{Component, ComponentStore};
use crate::property::Property;

/// Format version written into every block document.
pub const FORMAT_VERSION: &str = "1.16.100";

/// Key holding the block definition.
pub const BLOCK_KIND: &str = "minecraft:block";

/// Output subfolder for block documents.
pub const BLOCK_SUBFOLDER: &str = "blocks";

/// A complete block definition document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:block")]
    pub block: BlockDefinition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockDefinition {
    pub description: Description,
    pub components: Map<String, Value>,
    pub permutations: Vec<PermutationEntry>,
    pub events: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Description {
    pub identifier: String,
    pub category: Category,
    pub properties: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PermutationEntry {
    pub condition: String,
    pub components: Map<String, Value>,
}

/// Map each `(key, record)` pair to `key -> field(record)`, keeping order.
pub fn flatten<'a, T: 'a, I, F>(entries: I, field: F) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'a str, &'a T)>,
    F: Fn(&T) -> Value,
{
    entries
        .into_iter()
        .map(|(key, record)| (key.to_string(), field(record)))
        .collect()
}

fn flatten_components(store: &ComponentStore) -> Map<String, Value> {
    flatten(
        store.iter().map(|c| (c.identifier.as_str(), c)),
        |c: &Component| c.data.clone(),
    )
}

/// Build the document for `block` registered under `identifier`.
pub fn serialize(block: &Block, identifier: &str) -> BlockDocument {
    let properties = flatten(
        block.properties().map(|p| (p.identifier(), p)),
        |p: &Property| p.domain().to_value(),
    );
    let permutations = block
        .permutations()
        .map(|(condition, permutation)| PermutationEntry {
            condition: condition.to_string(),
            components: flatten_components(permutation.components()),
        })
        .collect();

    BlockDocument {
        format_version: FORMAT_VERSION.to_string(),
        block: BlockDefinition {
            description: Description {
                identifier: identifier.to_string(),
                category: block.category(),
                properties,
            },
            components: flatten_components(block.init().components()),
            permutations,
            events: Map::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::synthesize;
    use crate::permutation::Permutation;
    use serde_json::json;

    fn document_value(block: &Block, identifier: &str) -> Value {
        serde_json::to_value(serialize(block, identifier)).unwrap()
    }

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
    fn example_block_document() {
        let doc = document_value(&example_block(), "example:block");
        let definition = &doc[BLOCK_KIND];

        assert_eq!(doc["format_version"], json!("1.16.100"));
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
        assert_eq!(
            permutations[0]["components"],
            json!({ "minecraft:block_light_absorption": 1, "minecraft:breakonpush": true })
        );
        assert_eq!(definition["events"], json!({}));
    }

    #[test]
    fn empty_block_document() {
        let doc = document_value(&Block::new(Category::None), "example:empty_block");
        assert_eq!(
            doc,
            json!({
                "format_version": "1.16.100",
                "minecraft:block": {
                    "description": {
                        "identifier": "example:empty_block",
                        "category": "None",
                        "properties": {},
                    },
                    "components": {},
                    "permutations": [],
                    "events": {},
                }
            })
        );
    }

    #[test]
    fn serialization_is_deterministic() {
        let block = example_block();
        let a = serde_json::to_vec(&serialize(&block, "example:block")).unwrap();
        let b = serde_json::to_vec(&serialize(&block, "example:block")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn top_level_key_order_matches_schema() {
        let text = serde_json::to_string(&serialize(&example_block(), "example:block")).unwrap();
        let positions: Vec<usize> = [
            "\"format_version\"",
            "\"minecraft:block\"",
            "\"description\"",
            "\"components\"",
            "\"permutations\"",
            "\"events\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn components_keep_first_insertion_order() {
        let block = Block::new(Category::None).with_init(
            Permutation::new()
                .friction(0.5)
                .unit_cube()
                .map_color("95eb34")
                .friction(1.0),
        );
        let doc = document_value(&block, "a:b");
        let keys: Vec<&String> = doc[BLOCK_KIND]["components"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(
            keys,
            vec!["minecraft:friction", "minecraft:unit_cube", "minecraft:map_color"]
        );
        assert_eq!(doc[BLOCK_KIND]["components"]["minecraft:friction"], json!(1));
    }

    #[test]
    fn permutations_follow_registration_order() {
        let block = Block::new(Category::None)
            .register_permutation(Permutation::new(), "p", "b")
            .unwrap()
            .register_permutation(Permutation::new(), "p", "a")
            .unwrap()
            .register_permutation_raw(Permutation::new(), "true");
        let doc = document_value(&block, "a:b");
        let conditions: Vec<&str> = doc[BLOCK_KIND]["permutations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["condition"].as_str().unwrap())
            .collect();
        assert_eq!(
            conditions,
            vec!["q.block_property('p') == 'b'", "q.block_property('p') == 'a'", "true"]
        );
    }

    #[test]
    fn colliding_permutations_emit_only_the_last() {
        let block = Block::new(Category::None)
            .register_permutation(Permutation::new().friction(0.1), "p", 1)
            .unwrap()
            .register_permutation(Permutation::new().immovable(true), "p", 1)
            .unwrap();
        let doc = document_value(&block, "a:b");
        let permutations = doc[BLOCK_KIND]["permutations"].as_array().unwrap();
        assert_eq!(permutations.len(), 1);
        assert_eq!(
            permutations[0]["components"],
            json!({ "minecraft:immovable": true })
        );
    }

    #[test]
    fn descriptor_domain_is_emitted_verbatim() {
        let descriptor = json!({ "min": 0, "max": 3 });
        let block = Block::new(Category::Items)
            .register_property("p", descriptor.clone())
            .unwrap();
        let doc = document_value(&block, "a:b");
        assert_eq!(doc[BLOCK_KIND]["description"]["properties"]["p"], descriptor);
    }
}
