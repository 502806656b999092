use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::action::SpecialAction;
use crate::error::{WfError, WfResult};
use crate::id::{ActionId, ItemId, LocationId};
use crate::item::Item;
use crate::location::{Location, display_name_from_id, normalize_command};
use crate::ordered::CommandMap;
use crate::story::{PrefixVerb, Story};

/// File holding the location table.
pub const LOCATIONS_FILE: &str = "locations.json";
/// File holding the item table.
pub const ITEMS_FILE: &str = "items.json";
/// File holding the story configuration and special actions.
pub const STORY_FILE: &str = "story.json";

/// The central world model. Owns locations, items, special actions and the
/// story configuration.
///
/// Everything is fixed after load except location `exits`, `actions` and
/// `visited`, which the engine mutates through [`World::location_mut`].
#[derive(Debug, Clone)]
pub struct World {
    /// Story configuration.
    pub story: Story,
    locations: HashMap<LocationId, Location>,
    items: HashMap<ItemId, Item>,
    actions: HashMap<ActionId, SpecialAction>,

    // Document order, for listings
    location_order: Vec<LocationId>,
    item_order: Vec<ItemId>,
}

impl World {
    /// Create an empty world for the given story.
    pub fn new(story: Story) -> Self {
        Self {
            story,
            locations: HashMap::new(),
            items: HashMap::new(),
            actions: HashMap::new(),
            location_order: Vec::new(),
            item_order: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Load a world from a directory containing `locations.json`,
    /// `items.json` and `story.json`.
    pub fn load_dir(dir: &Path) -> WfResult<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| WfError::Io {
                file: path.display().to_string(),
                source,
            })
        };
        let locations = read(LOCATIONS_FILE)?;
        let items = read(ITEMS_FILE)?;
        let story = read(STORY_FILE)?;
        Self::from_json(&locations, &items, &story)
    }

    /// Build a world from the contents of the three world files.
    pub fn from_json(locations: &str, items: &str, story: &str) -> WfResult<Self> {
        let locations: CommandMap<Location> = parse(LOCATIONS_FILE, locations)?;
        let items: CommandMap<Item> = parse(ITEMS_FILE, items)?;

        let mut story_value: serde_json::Value = parse(STORY_FILE, story)?;
        let actions: CommandMap<SpecialAction> = match story_value
            .as_object_mut()
            .and_then(|map| map.remove("special_actions"))
        {
            Some(value) => from_value(STORY_FILE, value)?,
            None => CommandMap::new(),
        };
        let story: Story = from_value(STORY_FILE, story_value)?;

        let mut world = World::new(story);
        for (id, mut item) in items {
            item.id = ItemId::new(id);
            world.add_item(item)?;
        }
        for (id, mut action) in actions {
            action.id = ActionId::new(id);
            world.add_action(action)?;
        }
        for (id, mut location) in locations {
            location.id = LocationId::new(id);
            world.add_location(location)?;
        }
        world.finish()?;

        tracing::info!(
            title = %world.story.info.title,
            locations = world.locations.len(),
            items = world.items.len(),
            actions = world.actions.len(),
            "world_loaded"
        );
        Ok(world)
    }

    /// Normalize story commands and legacy location entries, then check that
    /// the starting location exists.
    ///
    /// Called by the loaders; call it yourself after assembling a world by
    /// hand if the data may contain unnormalized keys.
    pub fn finish(&mut self) -> WfResult<()> {
        self.story.commands = normalize_keys(std::mem::take(&mut self.story.commands));
        let verbs: CommandMap<PrefixVerb> = std::mem::take(&mut self.story.verbs)
            .into_iter()
            .map(|(verb, mut prefix)| {
                prefix.targets = normalize_keys(prefix.targets);
                (normalize_command(&verb), prefix)
            })
            .collect();
        self.story.verbs = verbs;

        self.promote_legacy_exits();

        let start = &self.story.settings.starting_location;
        if !self.locations.contains_key(start) {
            return Err(WfError::InvalidReference {
                kind: "starting location",
                id: start.to_string(),
            });
        }
        Ok(())
    }

    /// Older worlds put movement into `actions` with a location id as the
    /// value. Entries that name a location and no action become exits.
    fn promote_legacy_exits(&mut self) {
        let known_locations: Vec<LocationId> = self.location_order.clone();
        for location in self.locations.values_mut() {
            let legacy: Vec<(String, LocationId)> = location
                .actions
                .iter()
                .filter(|(_, target)| {
                    !self.actions.contains_key(*target)
                        && known_locations.iter().any(|l| l.as_str() == target.as_str())
                })
                .map(|(cmd, target)| (cmd.to_string(), LocationId::new(target.as_str())))
                .collect();
            for (cmd, target) in legacy {
                location.actions.remove(&cmd);
                tracing::debug!(location = %location.id, command = %cmd, "legacy_exit_promoted");
                location.exits.insert(cmd, target);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Definitions
    // -----------------------------------------------------------------------

    /// Add a location. Command keys are normalized and an empty name is
    /// derived from the id.
    pub fn add_location(&mut self, mut location: Location) -> WfResult<()> {
        if self.locations.contains_key(&location.id) {
            return Err(WfError::DuplicateId {
                kind: "location",
                id: location.id.to_string(),
            });
        }
        if location.name.trim().is_empty() {
            location.name = display_name_from_id(location.id.as_str());
        }
        location.exits = normalize_keys(location.exits);
        location.actions = normalize_keys(location.actions);

        self.location_order.push(location.id.clone());
        self.locations.insert(location.id.clone(), location);
        Ok(())
    }

    /// Add an item.
    pub fn add_item(&mut self, item: Item) -> WfResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(WfError::DuplicateId {
                kind: "item",
                id: item.id.to_string(),
            });
        }
        self.item_order.push(item.id.clone());
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Add a special action.
    pub fn add_action(&mut self, action: SpecialAction) -> WfResult<()> {
        if self.actions.contains_key(&action.id) {
            return Err(WfError::DuplicateId {
                kind: "action",
                id: action.id.to_string(),
            });
        }
        self.actions.insert(action.id.clone(), action);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a location by id.
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Get a mutable location by id.
    pub fn location_mut(&mut self, id: &LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id)
    }

    /// Get an item by id.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Get a special action by id.
    pub fn action(&self, id: &ActionId) -> Option<&SpecialAction> {
        self.actions.get(id)
    }

    /// All locations in document order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.location_order
            .iter()
            .filter_map(|id| self.locations.get(id))
    }

    /// All items in document order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.item_order.iter().filter_map(|id| self.items.get(id))
    }

    /// All special actions, in no particular order.
    pub fn actions(&self) -> impl Iterator<Item = &SpecialAction> {
        self.actions.values()
    }

    /// Where the player starts.
    pub fn starting_location(&self) -> &LocationId {
        &self.story.settings.starting_location
    }

    /// Display name of a location, or its id if it is unknown.
    pub fn location_name(&self, id: &LocationId) -> String {
        self.locations
            .get(id)
            .map(|l| l.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Display name of an item, or its id if it is unknown.
    pub fn item_name(&self, id: &ItemId) -> String {
        self.items
            .get(id)
            .map(|i| i.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Number of quest items needed to complete the quest: the story's
    /// explicit total, or the number of quest-flagged items.
    pub fn quest_total(&self) -> u32 {
        self.story.quest.total.unwrap_or_else(|| {
            u32::try_from(self.items.values().filter(|i| i.is_quest_item()).count())
                .unwrap_or(u32::MAX)
        })
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of special actions.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

fn parse<T: serde::de::DeserializeOwned>(file: &str, text: &str) -> WfResult<T> {
    serde_json::from_str(text).map_err(|source| WfError::Parse {
        file: file.to_string(),
        source,
    })
}

fn from_value<T: serde::de::DeserializeOwned>(file: &str, value: serde_json::Value) -> WfResult<T> {
    serde_json::from_value(value).map_err(|source| WfError::Parse {
        file: file.to_string(),
        source,
    })
}

fn normalize_keys<V>(map: CommandMap<V>) -> CommandMap<V> {
    map.into_iter()
        .map(|(k, v)| (normalize_command(&k), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATIONS: &str = r#"{
        "start": {"name": "Start", "description": "The start.", "exits": {"North": "hall"}},
        "hall": {
            "description": "A hall.",
            "exits": {"south": "start"},
            "actions": {"Read  Book": "read_book", "garden": "garden"}
        },
        "garden": {"name": "Garden", "description": "Green."}
    }"#;

    const ITEMS: &str = r#"{
        "key": {"name": "Brass Key", "special_effect": "quest_item"},
        "bread": {"name": "Bread", "consumable": true}
    }"#;

    const STORY: &str = r#"{
        "info": {"title": "Test"},
        "settings": {"starting_location": "start"},
        "commands": {"Examine All Items": "examine"},
        "special_actions": {
            "read_book": {"description": "You read."},
            "examine": {"description": "You look over your things.", "repeatable": true}
        }
    }"#;

    #[test]
    fn loads_and_normalizes() {
        let world = World::from_json(LOCATIONS, ITEMS, STORY).unwrap();
        assert_eq!(world.location_count(), 3);
        assert_eq!(world.item_count(), 2);
        assert_eq!(world.action_count(), 2);

        let start = world.location(&LocationId::new("start")).unwrap();
        assert_eq!(start.exits.get("north"), Some(&LocationId::new("hall")));

        let hall = world.location(&LocationId::new("hall")).unwrap();
        assert_eq!(hall.name, "Hall");
        assert_eq!(
            hall.actions.get("read book"),
            Some(&ActionId::new("read_book"))
        );
        assert!(world.story.commands.contains_key("examine all items"));
    }

    #[test]
    fn legacy_location_actions_become_exits() {
        let world = World::from_json(LOCATIONS, ITEMS, STORY).unwrap();
        let hall = world.location(&LocationId::new("hall")).unwrap();
        assert!(!hall.actions.contains_key("garden"));
        assert_eq!(hall.exits.get("garden"), Some(&LocationId::new("garden")));
    }

    #[test]
    fn locations_keep_document_order() {
        let world = World::from_json(LOCATIONS, ITEMS, STORY).unwrap();
        let ids: Vec<&str> = world.locations().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["start", "hall", "garden"]);
    }

    #[test]
    fn quest_total_counts_quest_items() {
        let world = World::from_json(LOCATIONS, ITEMS, STORY).unwrap();
        assert_eq!(world.quest_total(), 1);
    }

    #[test]
    fn malformed_file_is_named() {
        let err = World::from_json("{not json", ITEMS, STORY).unwrap_err();
        assert!(err.to_string().contains("locations.json"));

        let err = World::from_json(LOCATIONS, ITEMS, r#"{"info": {}}"#).unwrap_err();
        assert!(err.to_string().contains("story.json"));
    }

    #[test]
    fn unknown_effect_kind_fails_load() {
        let story = r#"{
            "settings": {"starting_location": "start"},
            "special_actions": {"zap": {"effects": [{"type": "teleport_everyone"}]}}
        }"#;
        let err = World::from_json(LOCATIONS, ITEMS, story).unwrap_err();
        assert!(matches!(err, WfError::Parse { .. }));
    }

    #[test]
    fn missing_starting_location_is_fatal() {
        let story = r#"{"settings": {"starting_location": "nowhere"}}"#;
        let err = World::from_json(LOCATIONS, ITEMS, story).unwrap_err();
        assert!(matches!(err, WfError::InvalidReference { .. }));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut world = World::new(Story::starting_at("a"));
        world.add_item(Item::new("gem", "Gem")).unwrap();
        let err = world.add_item(Item::new("gem", "Other Gem")).unwrap_err();
        assert!(matches!(err, WfError::DuplicateId { kind: "item", .. }));
    }

    #[test]
    fn load_dir_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LOCATIONS_FILE), LOCATIONS).unwrap();
        let err = World::load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("items.json"));
    }

    #[test]
    fn load_dir_reads_all_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LOCATIONS_FILE), LOCATIONS).unwrap();
        std::fs::write(dir.path().join(ITEMS_FILE), ITEMS).unwrap();
        std::fs::write(dir.path().join(STORY_FILE), STORY).unwrap();
        let world = World::load_dir(dir.path()).unwrap();
        assert_eq!(world.story.info.title, "Test");
    }
}
