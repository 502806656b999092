//! Player state management.

use std::collections::HashSet;

use wf_core::{ActionId, ItemId, LocationId, QuestCounting};

use crate::config::HealthConfig;

/// Current and maximum health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    /// Current health.
    pub current: i32,
    /// Maximum health.
    pub max: i32,
}

impl Health {
    /// Restore up to `amount`, capped at the maximum. Returns the amount
    /// actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount.max(0)).min(self.max);
        self.current - before
    }

    /// Lose `amount`, never dropping below `floor`. Returns the amount
    /// actually lost.
    pub fn damage(&mut self, amount: i32, floor: i32) -> i32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount.max(0)).max(floor.min(before));
        before - self.current
    }
}

/// The player's state for one session.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// The player's name.
    pub name: String,
    /// Health, in worlds that have it.
    pub health: Option<Health>,
    /// Carried items in the order they were received. A twice-granted item
    /// appears twice.
    pub inventory: Vec<ItemId>,
    /// Current location.
    pub location: LocationId,
    /// Locations visited so far, in discovery order.
    pub discovered: Vec<LocationId>,
    /// One-shot actions that have run.
    pub completed: HashSet<ActionId>,
    /// Quest items counted toward progress.
    pub quest_items_found: u32,
    counted: HashSet<ItemId>,
}

impl PlayerState {
    /// Create a player at the given location, which counts as discovered.
    pub fn new(name: impl Into<String>, location: LocationId) -> Self {
        Self {
            name: name.into(),
            health: None,
            inventory: Vec::new(),
            discovered: vec![location.clone()],
            location,
            completed: HashSet::new(),
            quest_items_found: 0,
            counted: HashSet::new(),
        }
    }

    /// Give the player a health pool.
    pub fn with_health(mut self, health: HealthConfig) -> Self {
        self.health = Some(Health {
            current: health.starting,
            max: health.max,
        });
        self
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Add an item to the inventory.
    pub fn add_item(&mut self, item: ItemId) {
        self.inventory.push(item);
    }

    /// Remove one inventory slot by position.
    pub fn remove_slot(&mut self, index: usize) -> Option<ItemId> {
        (index < self.inventory.len()).then(|| self.inventory.remove(index))
    }

    /// Record a quest item grant. Returns whether it counted toward
    /// progress under the given policy.
    pub fn count_quest_item(&mut self, item: &ItemId, policy: QuestCounting) -> bool {
        let counts = match policy {
            QuestCounting::Distinct => self.counted.insert(item.clone()),
            QuestCounting::EveryGrant => {
                self.counted.insert(item.clone());
                true
            }
        };
        if counts {
            self.quest_items_found = self.quest_items_found.saturating_add(1);
        }
        counts
    }

    /// Take back a quest item's count after one copy left the inventory.
    /// Under [`QuestCounting::Distinct`] the count only drops once no copy
    /// is carried any more. Returns whether the count changed.
    pub fn uncount_quest_item(&mut self, item: &ItemId, policy: QuestCounting) -> bool {
        let gone = !self.has_item(item);
        let drops = match policy {
            QuestCounting::Distinct => gone && self.counted.remove(item),
            QuestCounting::EveryGrant => {
                if gone {
                    self.counted.remove(item);
                }
                true
            }
        };
        if drops {
            self.quest_items_found = self.quest_items_found.saturating_sub(1);
        }
        drops
    }

    /// Move to a location and remember it. Returns whether this is the
    /// first time the player has been there.
    pub fn enter(&mut self, location: LocationId) -> bool {
        let new = !self.discovered.contains(&location);
        if new {
            self.discovered.push(location.clone());
        }
        self.location = location;
        new
    }

    /// Whether a one-shot action has already run.
    pub fn has_completed(&self, action: &ActionId) -> bool {
        self.completed.contains(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> PlayerState {
        PlayerState::new("Mira", LocationId::new("start"))
    }

    #[test]
    fn starting_location_is_discovered() {
        let p = player();
        assert_eq!(p.discovered, vec![LocationId::new("start")]);
    }

    #[test]
    fn enter_records_discovery_once() {
        let mut p = player();
        assert!(p.enter(LocationId::new("hall")));
        assert!(!p.enter(LocationId::new("start")));
        assert!(!p.enter(LocationId::new("hall")));
        assert_eq!(p.discovered.len(), 2);
        assert_eq!(p.location, LocationId::new("hall"));
    }

    #[test]
    fn inventory_keeps_duplicates() {
        let mut p = player();
        p.add_item(ItemId::new("apple"));
        p.add_item(ItemId::new("apple"));
        assert_eq!(p.inventory.len(), 2);
        assert_eq!(p.remove_slot(0), Some(ItemId::new("apple")));
        assert!(p.has_item(&ItemId::new("apple")));
        assert_eq!(p.remove_slot(5), None);
    }

    #[test]
    fn heal_caps_at_max() {
        let mut h = Health {
            current: 90,
            max: 100,
        };
        assert_eq!(h.heal(15), 10);
        assert_eq!(h.heal(15), 0);
        assert_eq!(h.current, 100);
    }

    #[test]
    fn damage_respects_floor() {
        let mut h = Health {
            current: 3,
            max: 100,
        };
        assert_eq!(h.damage(5, 1), 2);
        assert_eq!(h.current, 1);
        assert_eq!(h.damage(5, 1), 0);
    }

    #[test]
    fn every_grant_counts_duplicates() {
        let mut p = player();
        let gem = ItemId::new("gem");
        assert!(p.count_quest_item(&gem, QuestCounting::EveryGrant));
        assert!(p.count_quest_item(&gem, QuestCounting::EveryGrant));
        assert_eq!(p.quest_items_found, 2);
    }

    #[test]
    fn distinct_uncount_waits_for_last_copy() {
        let mut p = player();
        let gem = ItemId::new("gem");
        p.add_item(gem.clone());
        p.count_quest_item(&gem, QuestCounting::Distinct);
        p.add_item(gem.clone());
        p.count_quest_item(&gem, QuestCounting::Distinct);
        assert_eq!(p.quest_items_found, 1);

        p.remove_slot(0);
        assert!(!p.uncount_quest_item(&gem, QuestCounting::Distinct));
        assert_eq!(p.quest_items_found, 1);

        p.remove_slot(0);
        assert!(p.uncount_quest_item(&gem, QuestCounting::Distinct));
        assert_eq!(p.quest_items_found, 0);

        // A fresh grant counts again.
        p.add_item(gem.clone());
        assert!(p.count_quest_item(&gem, QuestCounting::Distinct));
        assert_eq!(p.quest_items_found, 1);
    }

    #[test]
    fn every_grant_uncount_drops_per_copy() {
        let mut p = player();
        let gem = ItemId::new("gem");
        for _ in 0..2 {
            p.add_item(gem.clone());
            p.count_quest_item(&gem, QuestCounting::EveryGrant);
        }
        p.remove_slot(0);
        assert!(p.uncount_quest_item(&gem, QuestCounting::EveryGrant));
        assert_eq!(p.quest_items_found, 1);
    }

    proptest! {
        #[test]
        fn distinct_counting_matches_distinct_quest_items(
            grants in prop::collection::vec(0usize..5, 0..40)
        ) {
            // Items 0..3 are quest items, the rest are not.
            let mut p = player();
            for g in &grants {
                let item = ItemId::new(format!("item{g}"));
                p.add_item(item.clone());
                if *g < 3 {
                    p.count_quest_item(&item, QuestCounting::Distinct);
                }
            }
            let distinct: HashSet<&ItemId> = p
                .inventory
                .iter()
                .filter(|i| ["item0", "item1", "item2"].contains(&i.as_str()))
                .collect();
            prop_assert_eq!(p.quest_items_found as usize, distinct.len());
        }

        #[test]
        fn health_stays_in_bounds(ops in prop::collection::vec((any::<bool>(), 0i32..40), 0..30)) {
            let mut h = Health { current: 50, max: 100 };
            for (heal, amount) in ops {
                if heal {
                    h.heal(amount);
                } else {
                    h.damage(amount, 1);
                }
                prop_assert!(h.current >= 1 && h.current <= h.max);
            }
        }
    }
}
