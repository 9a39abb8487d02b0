use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Creative-inventory category a block is listed under.
///
/// The set is fixed by the document format; the serialized form is the
/// variant name verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    None,
    Commands,
    Construction,
    Nature,
    Items,
    Equipment,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 6] = [
        Category::None,
        Category::Commands,
        Category::Construction,
        Category::Nature,
        Category::Items,
        Category::Equipment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::None => "None",
            Category::Commands => "Commands",
            Category::Construction => "Construction",
            Category::Nature => "Nature",
            Category::Items => "Items",
            Category::Equipment => "Equipment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TypeError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(Category::default(), Category::None);
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&Category::Nature).unwrap();
        assert_eq!(json, "\"Nature\"");
    }

    #[test]
    fn parse_known_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "nature".parse::<Category>().unwrap_err();
        assert_eq!(err, TypeError::UnknownCategory("nature".into()));
    }
}
