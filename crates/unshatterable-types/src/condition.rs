//! Condition expressions selecting among a block's permutations.
//!
//! A condition compares a property's runtime value to a literal:
//!
//! ```
//! use unshatterable_types::condition::synthesize;
//!
//! assert_eq!(
//!     synthesize("example:property", 4).unwrap(),
//!     "q.block_property('example:property') == 4"
//! );
//! assert_eq!(
//!     synthesize("example:color", "red").unwrap(),
//!     "q.block_property('example:color') == 'red'"
//! );
//! ```

use serde_json::Value;

use crate::error::{TypeError, TypeResult};
use crate::property::{json_kind, PropertyValue};

/// Query function reading a block property at load time.
pub const PROPERTY_ACCESSOR: &str = "q.block_property";

/// Render `value` as a literal of the expression language.
///
/// Strings are single-quoted verbatim, booleans and numbers are bare.
/// Integral floats drop their fractional part. Non-finite floats have no
/// literal form.
pub fn literal(property: &str, value: &PropertyValue) -> TypeResult<String> {
    match value {
        PropertyValue::String(s) => Ok(format!("'{s}'")),
        PropertyValue::Bool(b) => Ok(b.to_string()),
        PropertyValue::Int(i) => Ok(i.to_string()),
        PropertyValue::Float(f) if f.is_finite() => Ok(f.to_string()),
        PropertyValue::Float(f) => Err(TypeError::UnsupportedLiteral {
            property: property.to_string(),
            found: f.to_string(),
        }),
    }
}

/// Build the canonical condition `q.block_property('<property>') == <literal>`.
pub fn synthesize(property: &str, value: impl Into<PropertyValue>) -> TypeResult<String> {
    let literal = literal(property, &value.into())?;
    Ok(format!("{PROPERTY_ACCESSOR}('{property}') == {literal}"))
}

/// Untyped variant of [`synthesize`] accepting any JSON value.
///
/// Null, arrays, and objects have no literal form and are rejected.
pub fn synthesize_json(property: &str, value: &Value) -> TypeResult<String> {
    let scalar = PropertyValue::try_from(value).map_err(|_| TypeError::UnsupportedLiteral {
        property: property.to_string(),
        found: json_kind(value).to_string(),
    })?;
    synthesize(property, scalar)
}
