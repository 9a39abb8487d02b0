//! Named component payloads and the insertion-ordered store that holds them.
//!
//! A [`ComponentStore`] is an upsert-only mapping from component identifier to
//! [`Component`]. Re-inserting an identifier replaces its data but keeps the
//! entry at the position of its first insertion, so the serialized document
//! lists components in the order the author first touched them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named field/value pair contributing to a permutation's state.
///
/// `data` is any JSON value (scalar, array, or object) and is never
/// interpreted by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub identifier: String,
    pub data: Value,
}

impl Component {
    pub fn new(identifier: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            identifier: identifier.into(),
            data: data.into(),
        }
    }
}

/// Insertion-ordered component mapping with last-write-wins overwrites.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentStore {
    components: IndexMap<String, Component>,
}

impl ComponentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the component at `identifier`.
    ///
    /// An overwrite keeps the entry's original position.
    pub fn upsert(&mut self, identifier: impl Into<String>, data: impl Into<Value>) -> &mut Self {
        let component = Component::new(identifier, data);
        self.components
            .insert(component.identifier.clone(), component);
        self
    }

    pub fn get(&self, identifier: &str) -> Option<&Component> {
        self.components.get(identifier)
    }

    /// The data stored at `identifier`, if any.
    pub fn data(&self, identifier: &str) -> Option<&Value> {
        self.get(identifier).map(|c| &c.data)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.components.contains_key(identifier)
    }

    /// Number of distinct component identifiers.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over components in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Identifiers in first-insertion order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ComponentStore {
    type Item = &'a Component;
    type IntoIter = indexmap::map::Values<'a, String, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.values()
    }
}
