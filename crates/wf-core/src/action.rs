use serde::{Deserialize, Serialize};

use crate::id::{ActionId, ItemId, LocationId};

/// A precondition checked before an action runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    /// The player must carry the item.
    HasItem {
        /// Required item.
        item: ItemId,
        /// Message shown when the item is missing.
        #[serde(default)]
        message: Option<String>,
    },
    /// A story flag must be set.
    HasFlag {
        /// Required flag.
        flag: String,
        /// Message shown when the flag is not set.
        #[serde(default)]
        message: Option<String>,
    },
}

/// An atomic state change applied while resolving an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Add an item to the inventory.
    GiveItem {
        /// Item to give.
        item: ItemId,
    },
    /// Restore health, capped at the maximum.
    Heal {
        /// Amount to restore.
        amount: i32,
    },
    /// Add an exit to the player's current location.
    RevealExit {
        /// Command for the new exit; defaults to `secret`.
        #[serde(default)]
        direction: Option<String>,
        /// Destination of the new exit.
        target: LocationId,
    },
    /// Set a named story flag.
    TriggerFlag {
        /// Flag to set.
        flag: String,
        /// Flag that must already be set for this one to take.
        #[serde(default)]
        requires: Option<String>,
        /// Message shown when `requires` is not yet set.
        #[serde(default)]
        message: Option<String>,
    },
    /// Mark the game as won.
    WinGame,
    /// Draw from the random-effect table.
    RandomEffect,
}

/// A scripted, id-keyed event triggered by a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialAction {
    /// Identifier, filled in from the map key when loading.
    #[serde(skip)]
    pub id: ActionId,
    /// Text shown when the action succeeds.
    #[serde(default)]
    pub description: Option<String>,
    /// Preconditions, checked in order.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    /// Effects, applied in order.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Whether the action can run more than once.
    #[serde(default)]
    pub repeatable: bool,
    /// Text shown when a completed one-shot action is invoked again.
    #[serde(default)]
    pub repeat_message: Option<String>,
}

impl SpecialAction {
    /// Create a one-shot action with the given id and description.
    pub fn new(id: impl Into<ActionId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: Some(description.into()),
            requirements: Vec::new(),
            effects: Vec::new(),
            repeatable: false,
            repeat_message: None,
        }
    }

    /// Add a requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Allow the action to run repeatedly.
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Set the repeat message.
    pub fn with_repeat_message(mut self, message: impl Into<String>) -> Self {
        self.repeat_message = Some(message.into());
        self
    }
}
