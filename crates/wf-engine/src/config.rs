//! Configuration for an interpreter session.

use wf_core::{QuestCounting, Story};

/// Health settings for worlds with a health system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthConfig {
    /// Maximum health.
    pub max: i32,
    /// Health at the start of the session.
    pub starting: i32,
}

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible random effects.
    pub seed: u64,
    /// Whether winning stops the command loop at once, or leaves it running
    /// until the player quits.
    pub win_ends_session: bool,
    /// Health system; `None` disables health entirely.
    pub health: Option<HealthConfig>,
    /// Lowest health random damage can leave the player at. `None` lets it
    /// reach zero.
    pub damage_floor: Option<i32>,
    /// How duplicate quest item grants count.
    pub quest_counting: QuestCounting,
    /// Command used for revealed exits that do not name one.
    pub reveal_direction: String,
    /// Print a short location reminder after successful actions.
    pub show_reminders: bool,
    /// Health restored by the random-effect heal.
    pub random_heal: i32,
    /// Health lost to the random-effect damage.
    pub random_damage: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            win_ends_session: true,
            health: None,
            damage_floor: Some(1),
            quest_counting: QuestCounting::Distinct,
            reveal_direction: "secret".to_string(),
            show_reminders: true,
            random_heal: 15,
            random_damage: 5,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by whatever the story's settings specify.
    pub fn from_story(story: &Story) -> Self {
        let settings = &story.settings;
        let mut config = Self::default();
        if let Some(ends) = settings.win_ends_session {
            config.win_ends_session = ends;
        }
        if let Some(max) = settings.max_health {
            config = config.with_health(max, settings.starting_health.unwrap_or(max));
        }
        if let Some(floor) = settings.damage_floor {
            config.damage_floor = Some(floor);
        }
        if let Some(reminders) = settings.show_reminders {
            config.show_reminders = reminders;
        }
        if let Some(counting) = settings.quest_counting {
            config.quest_counting = counting;
        }
        config
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Choose whether winning ends the session.
    pub fn with_win_ends_session(mut self, ends: bool) -> Self {
        self.win_ends_session = ends;
        self
    }

    /// Enable the health system. Starting health is clamped to `1..=max`.
    pub fn with_health(mut self, max: i32, starting: i32) -> Self {
        let max = max.max(1);
        self.health = Some(HealthConfig {
            max,
            starting: starting.clamp(1, max),
        });
        self
    }

    /// Set the damage floor.
    pub fn with_damage_floor(mut self, floor: Option<i32>) -> Self {
        self.damage_floor = floor;
        self
    }

    /// Set the quest counting policy.
    pub fn with_quest_counting(mut self, counting: QuestCounting) -> Self {
        self.quest_counting = counting;
        self
    }

    /// Set the default command for revealed exits.
    pub fn with_reveal_direction(mut self, direction: impl Into<String>) -> Self {
        self.reveal_direction = direction.into();
        self
    }

    /// Turn location reminders on or off.
    pub fn with_reminders(mut self, show: bool) -> Self {
        self.show_reminders = show;
        self
    }

    /// Set the random-effect heal and damage amounts.
    pub fn with_random_amounts(mut self, heal: i32, damage: i32) -> Self {
        self.random_heal = heal;
        self.random_damage = damage;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert!(cfg.win_ends_session);
        assert!(cfg.health.is_none());
        assert_eq!(cfg.damage_floor, Some(1));
        assert_eq!(cfg.quest_counting, QuestCounting::Distinct);
        assert_eq!(cfg.reveal_direction, "secret");
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(7)
            .with_win_ends_session(false)
            .with_health(100, 80)
            .with_reminders(false);
        assert_eq!(cfg.seed, 7);
        assert!(!cfg.win_ends_session);
        assert_eq!(
            cfg.health,
            Some(HealthConfig {
                max: 100,
                starting: 80
            })
        );
        assert!(!cfg.show_reminders);
    }

    #[test]
    fn starting_health_clamped() {
        let cfg = EngineConfig::default().with_health(50, 500);
        assert_eq!(cfg.health.map(|h| h.starting), Some(50));
    }

    #[test]
    fn story_settings_override_defaults() {
        let story: Story = serde_json::from_str(
            r#"{"settings": {
                "starting_location": "start",
                "win_ends_session": false,
                "max_health": 100,
                "quest_counting": "every_grant"
            }}"#,
        )
        .unwrap();
        let cfg = EngineConfig::from_story(&story);
        assert!(!cfg.win_ends_session);
        assert_eq!(cfg.health.map(|h| h.starting), Some(100));
        assert_eq!(cfg.quest_counting, QuestCounting::EveryGrant);
        assert_eq!(cfg.damage_floor, Some(1));
    }
}
