//! Block object model for Unshatterable.
//!
//! Authors describe a block through fluent builders and this crate flattens
//! the description into the block definition document read by the content
//! loader. Every other Unshatterable crate depends on `unshatterable-types`.
//!
//! # Key Types
//!
//! - [`ComponentStore`] -- insertion-ordered, last-write-wins component map
//! - [`Permutation`] -- a cluster of component overrides with typed setters
//! - [`Property`] -- an identifier plus its legal value domain
//! - [`Block`] -- category, properties, keyed permutations, and the init state
//! - [`BlockDocument`] -- the serialized document produced by [`serialize`]
//!
//! # Example
//!
//! ```
//! use unshatterable_types::{serialize, Block, Category, Permutation};
//!
//! let block = Block::new(Category::Nature)
//!     .register_property("example:property", [0, 1, 2, 3, 4])?
//!     .register_permutation(Permutation::new().light_absorption(1), "example:property", 4)?
//!     .with_init(Permutation::new().light_absorption(15));
//!
//! let doc = serde_json::to_value(serialize(&block, "example:block"))?;
//! assert_eq!(doc["minecraft:block"]["components"]["minecraft:block_light_absorption"], 15);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod block;
pub mod category;
pub mod component;
pub mod condition;
pub mod document;
pub mod error;
pub mod fields;
pub mod identifier;
pub mod permutation;
pub mod property;

pub use block::Block;
pub use category::Category;
pub use component::{Component, ComponentStore};
pub use condition::{synthesize, synthesize_json, PROPERTY_ACCESSOR};
pub use document::{
    serialize, BlockDefinition, BlockDocument, Description, PermutationEntry, BLOCK_KIND,
    BLOCK_SUBFOLDER, FORMAT_VERSION,
};
pub use error::{TypeError, TypeResult};
pub use fields::{
    Breathability, Collision, EventTarget, Flammable, MaterialInstance, OnTick, RandomTicking,
    RenderMethod, Ticking,
};
pub use identifier::Identifier;
pub use permutation::Permutation;
pub use property::{Property, PropertyDomain, PropertyValue};
