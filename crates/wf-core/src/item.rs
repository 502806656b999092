use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// What happens when an item is used, beyond printing its use message.
///
/// In JSON, unit variants are plain strings (`"quest_item"`) and the others
/// are single-key objects (`{"heal": 20}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEffect {
    /// Counts toward the quest; using it is flavor only.
    QuestItem,
    /// Flavor text about feeling wiser.
    Wisdom,
    /// Draw from the random-effect table.
    RandomEffect,
    /// Restore health by the given amount.
    Heal(i32),
    /// Set a named story flag.
    Trigger(String),
}

/// An item the player can receive, carry, and use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, filled in from the map key when loading.
    #[serde(skip)]
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Description shown in the inventory listing.
    #[serde(default)]
    pub description: String,
    /// Message shown when the item is received.
    #[serde(default)]
    pub pickup_message: Option<String>,
    /// Message shown when the item is used.
    #[serde(default)]
    pub use_message: Option<String>,
    /// Effect applied on use.
    #[serde(default)]
    pub special_effect: Option<ItemEffect>,
    /// Whether using the item removes it from the inventory.
    #[serde(default)]
    pub consumable: bool,
}

impl Item {
    /// Create an item with the given id and display name.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            pickup_message: None,
            use_message: None,
            special_effect: None,
            consumable: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the pickup message.
    pub fn with_pickup_message(mut self, message: impl Into<String>) -> Self {
        self.pickup_message = Some(message.into());
        self
    }

    /// Set the use message.
    pub fn with_use_message(mut self, message: impl Into<String>) -> Self {
        self.use_message = Some(message.into());
        self
    }

    /// Set the special effect.
    pub fn with_effect(mut self, effect: ItemEffect) -> Self {
        self.special_effect = Some(effect);
        self
    }

    /// Mark the item as consumed on use.
    pub fn consumable(mut self) -> Self {
        self.consumable = true;
        self
    }

    /// Whether this item counts toward the quest.
    pub fn is_quest_item(&self) -> bool {
        self.special_effect == Some(ItemEffect::QuestItem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_and_object_effects() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[
                {"name": "Helmet", "special_effect": "quest_item"},
                {"name": "Tonic", "special_effect": {"heal": 20}, "consumable": true},
                {"name": "Bell", "special_effect": {"trigger": "bell_rung"}},
                {"name": "Pebble"}
            ]"#,
        )
        .unwrap();

        assert!(items[0].is_quest_item());
        assert_eq!(items[1].special_effect, Some(ItemEffect::Heal(20)));
        assert!(items[1].consumable);
        assert_eq!(
            items[2].special_effect,
            Some(ItemEffect::Trigger("bell_rung".to_string()))
        );
        assert_eq!(items[3].special_effect, None);
        assert!(!items[3].consumable);
    }

    #[test]
    fn unknown_effect_is_rejected() {
        let result: Result<Item, _> =
            serde_json::from_str(r#"{"name": "Orb", "special_effect": "explode"}"#);
        assert!(result.is_err());
    }
}
