use std::fmt;

use crate::error::{TypeError, TypeResult};

/// Separator between an identifier's namespace and its local name.
pub const NAMESPACE_SEPARATOR: char = ':';

/// A namespaced identifier such as `example:block`.
///
/// Exactly one `:` separates the namespace from the local name, and both
/// parts must be non-empty. The local name becomes a file name, so it may not
/// contain `/` or `\`, and may not be `.` or `..`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    full: String,
    split: usize,
}

impl Identifier {
    pub fn parse(s: &str) -> TypeResult<Self> {
        let split = s
            .find(NAMESPACE_SEPARATOR)
            .ok_or_else(|| TypeError::InvalidIdentifier {
                identifier: s.to_string(),
                reason: "missing namespace separator ':'".into(),
            })?;
        if split == 0 {
            return Err(TypeError::InvalidIdentifier {
                identifier: s.to_string(),
                reason: "namespace must not be empty".into(),
            });
        }
        if split + 1 == s.len() {
            return Err(TypeError::InvalidIdentifier {
                identifier: s.to_string(),
                reason: "name must not be empty".into(),
            });
        }
        if s[split + 1..].contains(NAMESPACE_SEPARATOR) {
            return Err(TypeError::InvalidIdentifier {
                identifier: s.to_string(),
                reason: "more than one namespace separator".into(),
            });
        }
        let name = &s[split + 1..];
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(TypeError::InvalidIdentifier {
                identifier: s.to_string(),
                reason: "name must be a single path segment".into(),
            });
        }
        Ok(Self {
            full: s.to_string(),
            split,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.full[..self.split]
    }

    /// The local name, used as the output file stem.
    pub fn name(&self) -> &str {
        &self.full[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.full
    }
}
