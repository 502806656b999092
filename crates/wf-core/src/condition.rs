//! Conditions for describe rules and revelations.

use serde::{Deserialize, Serialize};

use crate::id::{ItemId, LocationId};

/// Session facts a condition can be evaluated against.
///
/// The engine implements this over its player and session state so the data
/// crate does not need to know about either.
pub trait Facts {
    /// Whether the player carries the item.
    fn has_item(&self, item: &ItemId) -> bool;
    /// Whether the story flag is set.
    fn has_flag(&self, flag: &str) -> bool;
    /// The player's current location.
    fn location(&self) -> &LocationId;
    /// Whether every quest item has been found.
    fn quest_complete(&self) -> bool;
}

/// A predicate over session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// The player carries an item.
    HasItem {
        /// Item to check.
        item: ItemId,
    },
    /// The player carries every listed item.
    HasAllItems {
        /// Items to check.
        items: Vec<ItemId>,
    },
    /// A story flag is set.
    HasFlag {
        /// Flag to check.
        flag: String,
    },
    /// The player is at a location.
    PlayerAt {
        /// Location to check.
        location: LocationId,
    },
    /// Every quest item has been found.
    QuestComplete,
    /// Logical NOT.
    Not {
        /// Negated condition.
        condition: Box<Condition>,
    },
    /// Logical AND.
    All {
        /// Conditions that must all hold.
        conditions: Vec<Condition>,
    },
    /// Logical OR.
    Any {
        /// Conditions of which one must hold.
        conditions: Vec<Condition>,
    },
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Evaluate the condition against the current facts.
    pub fn evaluate(&self, facts: &impl Facts) -> bool {
        match self {
            Condition::HasItem { item } => facts.has_item(item),
            Condition::HasAllItems { items } => items.iter().all(|i| facts.has_item(i)),
            Condition::HasFlag { flag } => facts.has_flag(flag),
            Condition::PlayerAt { location } => facts.location() == location,
            Condition::QuestComplete => facts.quest_complete(),
            Condition::Not { condition } => !condition.evaluate(facts),
            Condition::All { conditions } => conditions.iter().all(|c| c.evaluate(facts)),
            Condition::Any { conditions } => conditions.iter().any(|c| c.evaluate(facts)),
            Condition::Always => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct TestFacts {
        items: Vec<ItemId>,
        flags: HashSet<String>,
        location: LocationId,
        complete: bool,
    }

    impl TestFacts {
        fn at(location: &str) -> Self {
            Self {
                items: Vec::new(),
                flags: HashSet::new(),
                location: LocationId::new(location),
                complete: false,
            }
        }
    }

    impl Facts for TestFacts {
        fn has_item(&self, item: &ItemId) -> bool {
            self.items.contains(item)
        }
        fn has_flag(&self, flag: &str) -> bool {
            self.flags.contains(flag)
        }
        fn location(&self) -> &LocationId {
            &self.location
        }
        fn quest_complete(&self) -> bool {
            self.complete
        }
    }

    #[test]
    fn player_at_location() {
        let facts = TestFacts::at("tavern");
        let cond = Condition::PlayerAt {
            location: LocationId::new("tavern"),
        };
        assert!(cond.evaluate(&facts));

        let cond = Condition::PlayerAt {
            location: LocationId::new("street"),
        };
        assert!(!cond.evaluate(&facts));
    }

    #[test]
    fn has_all_items() {
        let mut facts = TestFacts::at("tavern");
        facts.items = vec![ItemId::new("a"), ItemId::new("b")];

        let cond = Condition::HasAllItems {
            items: vec![ItemId::new("a"), ItemId::new("b")],
        };
        assert!(cond.evaluate(&facts));

        let cond = Condition::HasAllItems {
            items: vec![ItemId::new("a"), ItemId::new("c")],
        };
        assert!(!cond.evaluate(&facts));
    }

    #[test]
    fn logical_combinators() {
        let mut facts = TestFacts::at("tavern");
        facts.flags.insert("a".to_string());

        let flag = |f: &str| Condition::HasFlag {
            flag: f.to_string(),
        };

        assert!(
            Condition::Any {
                conditions: vec![flag("a"), flag("b")]
            }
            .evaluate(&facts)
        );
        assert!(
            !Condition::All {
                conditions: vec![flag("a"), flag("b")]
            }
            .evaluate(&facts)
        );
        assert!(
            Condition::Not {
                condition: Box::new(flag("b"))
            }
            .evaluate(&facts)
        );
        assert!(Condition::Always.evaluate(&facts));
    }

    #[test]
    fn quest_complete_delegates() {
        let mut facts = TestFacts::at("tavern");
        assert!(!Condition::QuestComplete.evaluate(&facts));
        facts.complete = true;
        assert!(Condition::QuestComplete.evaluate(&facts));
    }

    #[test]
    fn parses_nested_json() {
        let cond: Condition = serde_json::from_str(
            r#"{"type": "all", "conditions": [
                {"type": "quest_complete"},
                {"type": "not", "condition": {"type": "has_flag", "flag": "done"}}
            ]}"#,
        )
        .unwrap();
        assert!(matches!(cond, Condition::All { ref conditions } if conditions.len() == 2));
    }
}
