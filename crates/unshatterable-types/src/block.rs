//! The block aggregate: category, properties, and permutations.
//!
//! Property identifiers are unique per block and re-registering one fails.
//! Permutations are keyed by their condition expression and a colliding key
//! silently replaces the earlier permutation while keeping its position.
//! Neither [`Block::register_permutation`] nor its raw variant checks the
//! condition against declared properties; [`Block::register_permutation_checked`]
//! is the opt-in strict path.

use indexmap::IndexMap;

use crate::category::Category;
use crate::condition::synthesize;
use crate::error::{TypeError, TypeResult};
use crate::permutation::Permutation;
use crate::property::{Property, PropertyDomain, PropertyValue};

/// One authored block definition, built in memory and handed to a registry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    category: Category,
    properties: IndexMap<String, Property>,
    permutations: IndexMap<String, Permutation>,
    init: Permutation,
}

impl Block {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Declare a property and its domain.
    ///
    /// Fails with [`TypeError::DuplicateProperty`] if `identifier` is already
    /// declared, whatever the domains.
    pub fn register_property(
        mut self,
        identifier: impl Into<String>,
        domain: impl Into<PropertyDomain>,
    ) -> TypeResult<Self> {
        let identifier = identifier.into();
        if self.properties.contains_key(&identifier) {
            return Err(TypeError::DuplicateProperty { identifier });
        }
        let property = Property::new(identifier.clone(), domain);
        self.properties.insert(identifier, property);
        Ok(self)
    }

    /// Attach `permutation` under a pre-built condition expression.
    pub fn register_permutation_raw(
        mut self,
        permutation: Permutation,
        condition: impl Into<String>,
    ) -> Self {
        self.permutations.insert(condition.into(), permutation);
        self
    }

    /// Attach `permutation` under the condition `property == value`.
    ///
    /// The property is not required to be declared and the value is not
    /// checked against its domain.
    pub fn register_permutation(
        self,
        permutation: Permutation,
        property: &str,
        value: impl Into<PropertyValue>,
    ) -> TypeResult<Self> {
        let condition = synthesize(property, value)?;
        Ok(self.register_permutation_raw(permutation, condition))
    }

    /// Like [`Block::register_permutation`], but the property must be declared
    /// and the value must lie in its domain.
    pub fn register_permutation_checked(
        self,
        permutation: Permutation,
        property: &str,
        value: impl Into<PropertyValue>,
    ) -> TypeResult<Self> {
        let value = value.into();
        let declared = self
            .properties
            .get(property)
            .ok_or_else(|| TypeError::UnknownProperty {
                identifier: property.to_string(),
            })?;
        if !declared.domain().admits(&value) {
            return Err(TypeError::ValueOutsideDomain {
                property: property.to_string(),
                value: value.to_string(),
            });
        }
        self.register_permutation(permutation, property, value)
    }

    /// Replace the unconditional permutation.
    pub fn with_init(mut self, init: Permutation) -> Self {
        self.init = init;
        self
    }

    pub fn set_init(&mut self, init: Permutation) {
        self.init = init;
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn init(&self) -> &Permutation {
        &self.init
    }

    pub fn property(&self, identifier: &str) -> Option<&Property> {
        self.properties.get(identifier)
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Permutation for an exact condition expression.
    pub fn permutation(&self, condition: &str) -> Option<&Permutation> {
        self.permutations.get(condition)
    }

    /// `(condition, permutation)` pairs in first-registration order.
    pub fn permutations(&self) -> impl Iterator<Item = (&str, &Permutation)> {
        self.permutations.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn permutation_count(&self) -> usize {
        self.permutations.len()
    }
}
