use serde::{Deserialize, Serialize};

use crate::id::{ActionId, ItemId, LocationId};
use crate::ordered::CommandMap;

/// What a location-scoped command resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Move the player to another location.
    Move(LocationId),
    /// Invoke a special action.
    Invoke(ActionId),
}

/// A place the player can be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Identifier, filled in from the map key when loading.
    #[serde(skip)]
    pub id: LocationId,
    /// Display name. Derived from the id when left empty.
    #[serde(default)]
    pub name: String,
    /// Description shown on every visit after the first.
    #[serde(default)]
    pub description: String,
    /// Description shown on the first visit, if any.
    #[serde(default)]
    pub first_visit_description: Option<String>,
    /// Whether the location has been described to the player.
    #[serde(default)]
    pub visited: bool,
    /// Movement commands and their destinations.
    #[serde(default)]
    pub exits: CommandMap<LocationId>,
    /// Action commands and the special actions they trigger.
    #[serde(default)]
    pub actions: CommandMap<ActionId>,
    /// Item the player must hold to enter (dark areas and the like).
    #[serde(default)]
    pub requires_item: Option<ItemId>,
    /// Message shown when entry is refused for lack of `requires_item`.
    #[serde(default)]
    pub blocked_message: Option<String>,
}

impl Location {
    /// Create a location with the given id and display name.
    pub fn new(id: impl Into<LocationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            first_visit_description: None,
            visited: false,
            exits: CommandMap::new(),
            actions: CommandMap::new(),
            requires_item: None,
            blocked_message: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the first-visit description.
    pub fn with_first_visit(mut self, text: impl Into<String>) -> Self {
        self.first_visit_description = Some(text.into());
        self
    }

    /// Add an exit.
    pub fn with_exit(mut self, command: impl Into<String>, target: impl Into<LocationId>) -> Self {
        self.exits.insert(command, target.into());
        self
    }

    /// Add an action.
    pub fn with_action(mut self, command: impl Into<String>, action: impl Into<ActionId>) -> Self {
        self.actions.insert(command, action.into());
        self
    }

    /// Require an item to enter.
    pub fn requiring(mut self, item: impl Into<ItemId>, message: Option<String>) -> Self {
        self.requires_item = Some(item.into());
        self.blocked_message = message;
        self
    }

    /// The text to show when describing: first-visit text if the location
    /// has not been visited yet and has one, otherwise the description.
    pub fn current_description(&self) -> &str {
        match &self.first_visit_description {
            Some(text) if !self.visited => text,
            _ => &self.description,
        }
    }

    /// Resolve a normalized command against this location's exits and
    /// actions. An exit matches by key or by its destination id.
    pub fn target(&self, command: &str) -> Option<Target> {
        if let Some(dest) = self.exit_for(command) {
            return Some(Target::Move(dest.clone()));
        }
        self.actions
            .get(command)
            .map(|action| Target::Invoke(action.clone()))
    }

    /// Find the exit destination for a command, matching the exit key first
    /// and then the destination id itself.
    pub fn exit_for(&self, command: &str) -> Option<&LocationId> {
        self.exits
            .get(command)
            .or_else(|| self.exits.values().find(|dest| dest.as_str() == command))
    }

    /// Add an exit unless the command is already taken. Returns whether the
    /// exit was inserted.
    pub fn add_exit(&mut self, command: impl Into<String>, target: LocationId) -> bool {
        self.exits.insert(command, target)
    }

    /// Add an action unless the command is already taken. Returns whether
    /// the action was inserted.
    pub fn add_action(&mut self, command: impl Into<String>, action: ActionId) -> bool {
        self.actions.insert(command, action)
    }
}

/// Canonical form of a command: trimmed, lowercased, inner whitespace
/// collapsed to single spaces.
pub fn normalize_command(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turn an id like `tool_shed` into a display name like `Tool Shed`.
pub fn display_name_from_id(id: &str) -> String {
    id.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
