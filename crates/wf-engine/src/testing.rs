//! Shared fixtures for unit tests.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wf_core::{Story, World};

use crate::config::EngineConfig;
use crate::context::TurnContext;
use crate::error::EngineResult;
use crate::output::Transcript;
use crate::player::PlayerState;
use crate::state::SessionState;

/// Owns everything a [`TurnContext`] borrows, so handlers can be tested
/// without a full session.
pub(crate) struct Harness {
    pub world: World,
    pub player: PlayerState,
    pub state: SessionState,
    pub config: EngineConfig,
    pub rng: StdRng,
    pub out: Transcript,
}

impl Harness {
    /// A world starting at `start`, filled in by `build`.
    pub fn new(build: impl FnOnce(&mut World)) -> Self {
        let mut world = World::new(Story::starting_at("start"));
        build(&mut world);
        let player = PlayerState::new("Tester", world.starting_location().clone());
        Self {
            world,
            player,
            state: SessionState::default(),
            config: EngineConfig::default().with_reminders(false),
            rng: StdRng::seed_from_u64(42),
            out: Transcript::new(),
        }
    }

    /// Run a handler against the harness state.
    pub fn with_ctx<T>(
        &mut self,
        f: impl FnOnce(&mut TurnContext<'_>) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let mut ctx = TurnContext {
            world: &mut self.world,
            player: &mut self.player,
            state: &mut self.state,
            config: &self.config,
            rng: &mut self.rng,
            out: &mut self.out,
        };
        f(&mut ctx)
    }
}
