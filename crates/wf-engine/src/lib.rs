//! Interpreter core for Wegfinder.
//!
//! A [`Session`] owns a loaded [`wf_core::World`] together with the player
//! and session state, and turns one line of input at a time into styled
//! output lines written to an [`Output`] sink.
//!
//! Dispatch order for a command: built-in commands (`quit`, `help`,
//! `inventory`, `stats`, `look`), then the story's global commands, then
//! prefix commands (`use <item>` and story verbs such as `unlock <thing>`),
//! then movement, then the current location's actions.

/// Special action resolution.
pub mod action;
/// Input normalization and built-in commands.
pub mod command;
/// Session configuration.
pub mod config;
/// The per-turn handler context.
pub mod context;
/// Location descriptions and describe rules.
pub mod describe;
/// The effect engine.
pub mod effect;
/// Engine error types.
pub mod error;
/// Responses to commands that are not understood.
pub mod hint;
/// The `use` command.
pub mod item;
/// Moving between locations.
pub mod movement;
/// The output sink.
pub mod output;
/// Player state.
pub mod player;
/// The random-effect table.
pub mod random;
/// The interpreter session and command loop.
pub mod session;
/// Session flags.
pub mod state;
/// Inventory, stats and help.
pub mod status;
/// Revelation checks.
pub mod win;

#[cfg(test)]
mod testing;

pub use config::{EngineConfig, HealthConfig};
pub use context::TurnContext;
pub use error::{EngineError, EngineResult, ErrorKind};
pub use output::{Output, OutputLine, OutputStyle, Transcript};
pub use player::{Health, PlayerState};
pub use session::Session;
pub use state::{DispatchResult, SessionState};
