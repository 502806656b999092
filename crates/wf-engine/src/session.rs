//! Interpreter session management.

use std::io::{self, BufRead};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use wf_core::{ActionId, Target, World};

use crate::action::{self, ActionOutcome};
use crate::command::{self, Command};
use crate::config::EngineConfig;
use crate::context::TurnContext;
use crate::describe;
use crate::error::{EngineError, EngineResult};
use crate::hint;
use crate::item;
use crate::movement;
use crate::output::{Output, OutputStyle};
use crate::player::PlayerState;
use crate::state::{DispatchResult, SessionState};
use crate::status;
use crate::win;

/// Name used when the story gives none and the player is not asked.
const DEFAULT_PLAYER_NAME: &str = "Adventurer";

/// One play-through of a world.
///
/// The session owns its world, player, flags and RNG; nothing is shared
/// between sessions.
pub struct Session {
    world: World,
    player: PlayerState,
    state: SessionState,
    config: EngineConfig,
    rng: StdRng,
}

impl Session {
    /// Create a session with the player at the story's starting location.
    pub fn new(world: World, config: EngineConfig) -> EngineResult<Self> {
        let start = world.starting_location().clone();
        if world.location(&start).is_none() {
            return Err(EngineError::LocationNotFound(start.to_string()));
        }
        let name = world
            .story
            .settings
            .default_player_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
        let mut player = PlayerState::new(name, start);
        if let Some(health) = config.health {
            player = player.with_health(health);
        }
        let rng = StdRng::seed_from_u64(config.seed);

        Ok(Self {
            world,
            player,
            state: SessionState::default(),
            config,
            rng,
        })
    }

    /// Set the player's name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.set_player_name(name);
        self
    }

    /// Set the player's name. Blank names are ignored.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        let name = name.trim();
        if !name.is_empty() {
            self.player.name = name.to_string();
        }
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get the session flags.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Get the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the command loop should keep going.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Whether the game has been won.
    pub fn has_won(&self) -> bool {
        self.state.won
    }

    fn context<'a>(&'a mut self, out: &'a mut dyn Output) -> TurnContext<'a> {
        TurnContext {
            world: &mut self.world,
            player: &mut self.player,
            state: &mut self.state,
            config: &self.config,
            rng: &mut self.rng,
            out,
        }
    }

    /// Print the story's intro text.
    pub fn intro(&self, out: &mut dyn Output) {
        let story = &self.world.story;
        if !story.info.title.is_empty() {
            out.emit(OutputStyle::Title, &story.info.title);
        }
        for text in [&story.intro.welcome_message, &story.intro.game_description] {
            if !text.is_empty() {
                out.emit(OutputStyle::Text, text);
            }
        }
        if !story.intro.instruction_text.is_empty() {
            out.emit(OutputStyle::System, &story.intro.instruction_text);
        }
    }

    /// Greet the player and describe the starting location.
    pub fn start(&mut self, out: &mut dyn Output) {
        let mut ctx = self.context(out);
        let greeting = format!("Welcome, {}!", ctx.player.name);
        ctx.notice(greeting);
        if let Err(err) = describe::describe_location(&mut ctx) {
            ctx.report(&err);
        }
    }

    /// Run the checks that happen before each command is read. Returns
    /// whether the loop should keep going.
    pub fn begin_turn(&mut self, out: &mut dyn Output) -> bool {
        let mut ctx = self.context(out);
        win::check_revelations(&mut ctx);
        self.state.running
    }

    /// Handle one line of input.
    ///
    /// Returns [`DispatchResult::Quit`] once the session has stopped, whether
    /// through `quit` or a win that ends the session.
    pub fn dispatch(&mut self, input: &str, out: &mut dyn Output) -> DispatchResult {
        let command = command::normalize(input);
        let mut ctx = self.context(out);
        ctx.state.pending_fallback = None;
        if let Err(err) = route(&mut ctx, &command) {
            ctx.report(&err);
        }
        if self.state.running {
            DispatchResult::Continue
        } else {
            DispatchResult::Quit
        }
    }

    /// Drive the command loop until the player quits, the game ends, or the
    /// input runs out.
    pub fn run<R: BufRead>(&mut self, reader: R, out: &mut dyn Output) -> io::Result<()> {
        let mut lines = reader.lines();
        loop {
            if !self.begin_turn(out) {
                break;
            }
            out.prompt();
            let Some(line) = lines.next() else {
                self.dispatch("quit", out);
                break;
            };
            if self.dispatch(&line?, out) == DispatchResult::Quit {
                break;
            }
        }
        Ok(())
    }
}

/// Route a normalized command through the dispatch precedence.
fn route(ctx: &mut TurnContext<'_>, command: &str) -> EngineResult<()> {
    let parsed = command::parse_command(command);
    match &parsed {
        Command::Empty => return Ok(()),
        Command::Quit => {
            quit(ctx);
            return Ok(());
        }
        Command::Help => {
            status::show_help(ctx);
            return Ok(());
        }
        Command::Inventory => {
            status::show_inventory(ctx);
            return Ok(());
        }
        Command::Stats => {
            status::show_stats(ctx);
            return Ok(());
        }
        Command::Look => return describe::describe_location(ctx),
        Command::Use { .. } | Command::Other(_) => {}
    }

    if let Some(action) = ctx.world.story.commands.get(command).cloned() {
        debug!(command, %action, "story_command");
        return run_action(ctx, &action);
    }

    if let Command::Use { item } = &parsed {
        return item::use_item(ctx, item);
    }

    if let Some(action) = match_verb(ctx, command) {
        debug!(command, %action, "verb");
        return run_action(ctx, &action);
    }

    match movement::resolve(ctx.world, &ctx.player.location, command)? {
        Some(Target::Move(dest)) => {
            debug!(command, %dest, "movement");
            return movement::move_to(ctx, &dest);
        }
        Some(Target::Invoke(action)) => {
            debug!(command, %action, "location_action");
            return run_action(ctx, &action);
        }
        None => {}
    }

    debug!(command, "not_understood");
    match ctx.state.pending_fallback.take() {
        Some(fallback) => ctx.say(OutputStyle::Error, fallback),
        None => hint::not_understood(ctx, command),
    }
    Ok(())
}

/// Look for a story verb prefix. An unknown target leaves the verb's
/// fallback pending and lets the command fall through.
fn match_verb(ctx: &mut TurnContext<'_>, command: &str) -> Option<ActionId> {
    for (verb, prefix) in ctx.world.story.verbs.iter() {
        let Some(rest) = command::strip_verb(command, verb) else {
            continue;
        };
        if let Some(action) = prefix.targets.get(rest) {
            return Some(action.clone());
        }
        let fallback = prefix
            .fallback
            .clone()
            .unwrap_or_else(|| format!("You can't {verb} that."));
        ctx.state.pending_fallback = Some(fallback);
        return None;
    }
    None
}

fn run_action(ctx: &mut TurnContext<'_>, id: &ActionId) -> EngineResult<()> {
    let outcome = action::resolve(ctx, id)?;
    if outcome == ActionOutcome::Completed && ctx.config.show_reminders && ctx.state.running {
        describe::reminder(ctx)?;
    }
    Ok(())
}

fn quit(ctx: &mut TurnContext<'_>) {
    let farewell = ctx.render(&ctx.world.story.messages.exit_message, &[]);
    ctx.say(OutputStyle::System, farewell);
    ctx.state.running = false;
}
