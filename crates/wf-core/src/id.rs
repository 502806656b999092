use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Key of a location in `locations.json`.
    LocationId
);

string_id!(
    /// Key of an item in `items.json`.
    ItemId
);

string_id!(
    /// Key of a special action in the story's `special_actions` table.
    ActionId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn display_is_raw_id() {
        assert_eq!(LocationId::new("tool_shed").to_string(), "tool_shed");
    }

    #[test]
    fn borrowed_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ItemId::from("lantern"), 1);
        assert_eq!(map.get("lantern"), Some(&1));
    }

    #[test]
    fn serializes_transparently() {
        let id: ActionId = serde_json::from_str("\"read_book\"").unwrap();
        assert_eq!(id.as_str(), "read_book");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"read_book\"");
    }
}
