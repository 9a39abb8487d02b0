use thiserror::Error;

/// Errors produced while building or describing a block.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A property with this identifier is already registered on the block.
    #[error("block already has property \"{identifier}\"")]
    DuplicateProperty { identifier: String },

    /// The value cannot be rendered as a condition literal.
    #[error("unsupported condition literal for property \"{property}\": {found}")]
    UnsupportedLiteral { property: String, found: String },

    /// A checked permutation referenced a property the block never declared.
    #[error("unknown property \"{identifier}\"")]
    UnknownProperty { identifier: String },

    /// A checked permutation used a value outside the property's domain.
    #[error("value {value} is outside the domain of property \"{property}\"")]
    ValueOutsideDomain { property: String, value: String },

    #[error("unknown block category: {0}")]
    UnknownCategory(String),

    /// Identifiers must have the form `namespace:name`.
    #[error("invalid identifier \"{identifier}\": {reason}")]
    InvalidIdentifier { identifier: String, reason: String },
}

/// Result alias for type operations.
pub type TypeResult<T> = Result<T, TypeError>;
