use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::id::{ActionId, LocationId};
use crate::ordered::CommandMap;

/// Metadata about the game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameInfo {
    /// Game title.
    pub title: String,
    /// Content version string.
    pub version: String,
    /// Author credit.
    pub author: String,
    /// Short blurb.
    pub description: String,
}

/// How repeated grants of the same quest item count toward progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestCounting {
    /// Each distinct quest item counts once.
    #[default]
    Distinct,
    /// Every grant counts, including duplicates.
    EveryGrant,
}

/// Story-level settings that shape the engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Where the player starts.
    pub starting_location: LocationId,
    /// Whether winning ends the session immediately.
    #[serde(default)]
    pub win_ends_session: Option<bool>,
    /// Maximum health. Leave unset for worlds without a health system.
    #[serde(default)]
    pub max_health: Option<i32>,
    /// Starting health; defaults to `max_health`.
    #[serde(default)]
    pub starting_health: Option<i32>,
    /// Lowest health random damage can leave the player at.
    #[serde(default)]
    pub damage_floor: Option<i32>,
    /// Whether to print a short location reminder after actions.
    #[serde(default)]
    pub show_reminders: Option<bool>,
    /// Quest item counting policy.
    #[serde(default)]
    pub quest_counting: Option<QuestCounting>,
    /// Whether the frontend should prompt for the player's name.
    #[serde(default)]
    pub ask_name: bool,
    /// Name used when none is given.
    #[serde(default)]
    pub default_player_name: Option<String>,
}

impl Settings {
    /// Settings with the given starting location and everything else unset.
    pub fn starting_at(location: impl Into<LocationId>) -> Self {
        Self {
            starting_location: location.into(),
            win_ends_session: None,
            max_health: None,
            starting_health: None,
            damage_floor: None,
            show_reminders: None,
            quest_counting: None,
            ask_name: false,
            default_player_name: None,
        }
    }
}

/// Text shown before the first turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Intro {
    /// Banner line.
    pub welcome_message: String,
    /// Premise of the game.
    pub game_description: String,
    /// How to play.
    pub instruction_text: String,
    /// Prompt shown when asking for the player's name.
    pub name_prompt: String,
}

/// Data-driven wording for engine messages.
///
/// Templates use `{name}` placeholders filled in with [`render`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Lines printed by `help`.
    pub help_text: Vec<String>,
    /// Shown when a command is not understood.
    pub invalid_command: String,
    /// Shown on quit. `{player}`.
    pub exit_message: String,
    /// Default repeat message for one-shot actions.
    pub repeat_default: String,
    /// Default action description.
    pub action_default: String,
    /// Default requirement failure. `{item}`.
    pub missing_item: String,
    /// Default flag requirement failure. `{flag}`.
    pub missing_flag: String,
    /// Default pickup message. `{item}`.
    pub pickup_default: String,
    /// Default use message. `{item}`.
    pub use_default: String,
    /// Quest progress line. `{found}`, `{total}`.
    pub quest_progress: String,
    /// Printed when moving. `{location}`.
    pub move_message: String,
    /// Default refusal for gated locations. `{item}`, `{location}`.
    pub blocked_default: String,
    /// Default message when a flag's prerequisite is missing.
    pub flag_pending: String,
    /// Shown when `use` finds nothing. `{item}`.
    pub no_such_item: String,
    /// Shown for an empty inventory. `{player}`.
    pub empty_inventory: String,
    /// Shown when a `win_game` effect fires. `{player}`.
    pub win_message: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            help_text: Vec::new(),
            invalid_command: "I don't understand that command. Type 'help' for available commands."
                .to_string(),
            exit_message: "Thanks for playing, {player}! See you next time!".to_string(),
            repeat_default: "You've already done that.".to_string(),
            action_default: "Something happens...".to_string(),
            missing_item: "You need {item} to do that.".to_string(),
            missing_flag: "You're not ready to do that yet.".to_string(),
            pickup_default: "You found: {item}.".to_string(),
            use_default: "You use the {item}.".to_string(),
            quest_progress: "Progress: {found}/{total} special items found!".to_string(),
            move_message: "You move to the {location}...".to_string(),
            blocked_default: "You can't go to the {location} without {item}.".to_string(),
            flag_pending: "You sense something is missing before this can happen.".to_string(),
            no_such_item: "You don't have anything called '{item}'.".to_string(),
            empty_inventory: "{player} isn't carrying anything right now.".to_string(),
            win_message: "Congratulations, {player}! You have completed the adventure!"
                .to_string(),
        }
    }
}

/// Quest progress configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestConfig {
    /// Number of quest items; derived from the item table when unset.
    pub total: Option<u32>,
    /// Extra lines keyed by the new quest count.
    pub progress_messages: BTreeMap<u32, String>,
}

/// A prefix verb such as `unlock <target>` mapped to actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixVerb {
    /// Target text to action.
    pub targets: CommandMap<ActionId>,
    /// Shown when the target is not recognized.
    pub fallback: Option<String>,
}

/// A command to inject into a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injection<T> {
    /// Command text.
    pub command: String,
    /// What the command resolves to.
    pub target: T,
}

/// A rule evaluated every time a location is described.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeRule {
    /// Restrict the rule to one location.
    pub location: Option<LocationId>,
    /// When the rule applies.
    pub when: Condition,
    /// Extra text shown each time the rule applies.
    pub message: Option<String>,
    /// Action added to the location the first time the rule applies. It
    /// stays once added.
    pub add_action: Option<Injection<ActionId>>,
    /// Exit added to the location the first time the rule applies. It stays
    /// once added.
    pub add_exit: Option<Injection<LocationId>>,
}

/// A one-shot sequence fired the first time its condition holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revelation {
    /// Identifier used to remember that it fired.
    pub id: String,
    /// Trigger condition.
    pub when: Condition,
    /// Lines printed when it fires.
    #[serde(default)]
    pub lines: Vec<String>,
    /// Flag set when it fires.
    #[serde(default)]
    pub set_flag: Option<String>,
    /// Whether firing wins the game.
    #[serde(default = "default_true")]
    pub wins_game: bool,
}

fn default_true() -> bool {
    true
}

/// Story configuration loaded from `story.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Game metadata.
    #[serde(default, alias = "game_info")]
    pub info: GameInfo,
    /// Engine-shaping settings.
    #[serde(alias = "game_settings")]
    pub settings: Settings,
    /// Intro text.
    #[serde(default, alias = "intro_text")]
    pub intro: Intro,
    /// Message wording.
    #[serde(default)]
    pub messages: Messages,
    /// Quest progress.
    #[serde(default)]
    pub quest: QuestConfig,
    /// Commands available everywhere, mapped to actions.
    #[serde(default)]
    pub commands: CommandMap<ActionId>,
    /// Prefix verbs.
    #[serde(default)]
    pub verbs: CommandMap<PrefixVerb>,
    /// Describe rules.
    #[serde(default)]
    pub rules: Vec<DescribeRule>,
    /// Revelations checked at the start of every turn.
    #[serde(default)]
    pub revelations: Vec<Revelation>,
}

impl Story {
    /// A story with default wording that starts at the given location.
    pub fn starting_at(location: impl Into<LocationId>) -> Self {
        Self {
            info: GameInfo::default(),
            settings: Settings::starting_at(location),
            intro: Intro::default(),
            messages: Messages::default(),
            quest: QuestConfig::default(),
            commands: CommandMap::new(),
            verbs: CommandMap::new(),
            rules: Vec::new(),
            revelations: Vec::new(),
        }
    }
}

/// Fill `{key}` placeholders in a message template.
///
/// Unknown placeholders are left as they are.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_known_placeholders() {
        assert_eq!(
            render(
                "Progress: {found}/{total} {unknown}",
                &[("found", "2"), ("total", "3")]
            ),
            "Progress: 2/3 {unknown}"
        );
    }

    #[test]
    fn minimal_story_uses_defaults() {
        let story: Story =
            serde_json::from_str(r#"{"settings": {"starting_location": "start"}}"#).unwrap();
        assert_eq!(story.settings.starting_location, LocationId::new("start"));
        assert!(story.messages.repeat_default.contains("already"));
        assert!(story.revelations.is_empty());
        assert!(!story.settings.ask_name);
    }

    #[test]
    fn accepts_legacy_section_names() {
        let story: Story = serde_json::from_str(
            r#"{
                "game_info": {"title": "Quest"},
                "game_settings": {"starting_location": "living_room"},
                "intro_text": {"welcome_message": "Hi"}
            }"#,
        )
        .unwrap();
        assert_eq!(story.info.title, "Quest");
        assert_eq!(story.intro.welcome_message, "Hi");
    }

    #[test]
    fn progress_messages_keyed_by_count() {
        let story: Story = serde_json::from_str(
            r#"{
                "settings": {"starting_location": "a"},
                "quest": {"progress_messages": {"1": "One down.", "3": "All found."}}
            }"#,
        )
        .unwrap();
        assert_eq!(
            story.quest.progress_messages.get(&1).map(String::as_str),
            Some("One down.")
        );
        assert_eq!(story.quest.total, None);
    }

    #[test]
    fn revelation_wins_by_default() {
        let rev: Revelation =
            serde_json::from_str(r#"{"id": "end", "when": {"type": "quest_complete"}}"#).unwrap();
        assert!(rev.wins_game);
        assert!(rev.lines.is_empty());
    }
}
