use rand::rngs::StdRng;
use wf_core::condition::Facts;
use wf_core::{ItemId, Location, LocationId, World, render};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult, ErrorKind};
use crate::output::{Output, OutputStyle};
use crate::player::PlayerState;
use crate::state::SessionState;

/// Mutable context passed to every handler while a command resolves.
pub struct TurnContext<'a> {
    /// The world, including its mutable exits and actions.
    pub world: &'a mut World,
    /// The player.
    pub player: &'a mut PlayerState,
    /// Session flags.
    pub state: &'a mut SessionState,
    /// Session configuration.
    pub config: &'a EngineConfig,
    /// Random source for random effects.
    pub rng: &'a mut StdRng,
    /// Where output goes.
    pub out: &'a mut dyn Output,
}

impl TurnContext<'_> {
    /// Write a styled line.
    pub fn say(&mut self, style: OutputStyle, text: impl AsRef<str>) {
        self.out.emit(style, text.as_ref());
    }

    /// Write a narrative line.
    pub fn text(&mut self, text: impl AsRef<str>) {
        self.say(OutputStyle::Text, text);
    }

    /// Write a notice line.
    pub fn notice(&mut self, text: impl AsRef<str>) {
        self.say(OutputStyle::Notice, text);
    }

    /// Write a system line.
    pub fn system(&mut self, text: impl AsRef<str>) {
        self.say(OutputStyle::System, text);
    }

    /// Report an error to the player. Data-consistency errors are logged too.
    pub fn report(&mut self, err: &EngineError) {
        match err.kind() {
            ErrorKind::DataConsistency => {
                tracing::warn!(location = %self.player.location, error = %err, "data_consistency");
                self.say(
                    OutputStyle::Error,
                    format!("Something is wrong with this world: {err}."),
                );
            }
            ErrorKind::User => self.say(OutputStyle::Error, err.to_string()),
        }
    }

    /// Fill a message template, with `{player}` always available.
    pub fn render(&self, template: &str, vars: &[(&str, &str)]) -> String {
        let text = render(template, vars);
        render(&text, &[("player", &self.player.name)])
    }

    /// The player's current location.
    pub fn current_location(&self) -> EngineResult<&Location> {
        self.world
            .location(&self.player.location)
            .ok_or_else(|| EngineError::LocationNotFound(self.player.location.to_string()))
    }

    /// The player's current location, mutably.
    pub fn current_location_mut(&mut self) -> EngineResult<&mut Location> {
        let id = self.player.location.clone();
        self.world
            .location_mut(&id)
            .ok_or_else(|| EngineError::LocationNotFound(id.to_string()))
    }
}

impl Facts for TurnContext<'_> {
    fn has_item(&self, item: &ItemId) -> bool {
        self.player.has_item(item)
    }

    fn has_flag(&self, flag: &str) -> bool {
        self.state.has_flag(flag)
    }

    fn location(&self) -> &LocationId {
        &self.player.location
    }

    fn quest_complete(&self) -> bool {
        let total = self.world.quest_total();
        total > 0 && self.player.quest_items_found >= total
    }
}
