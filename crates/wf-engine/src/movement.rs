//! Moving between locations.

use tracing::debug;
use wf_core::{LocationId, Target, World};

use crate::context::TurnContext;
use crate::describe;
use crate::error::{EngineError, EngineResult};

/// Resolve a command against a location: an exit key, an exit's destination
/// id or display name, and then the location's actions.
pub fn resolve(world: &World, here: &LocationId, command: &str) -> EngineResult<Option<Target>> {
    let location = world
        .location(here)
        .ok_or_else(|| EngineError::LocationNotFound(here.to_string()))?;
    let by_name = || {
        location.exits.values().find(|dest| {
            world
                .location(dest)
                .is_some_and(|l| l.name.to_lowercase() == command)
        })
    };
    if let Some(dest) = location.exit_for(command).or_else(by_name) {
        return Ok(Some(Target::Move(dest.clone())));
    }
    Ok(location.target(command))
}

/// Move the player to a location, honoring its item gate.
///
/// An unknown target or a refused entry leaves the player where they are.
pub fn move_to(ctx: &mut TurnContext<'_>, target: &LocationId) -> EngineResult<()> {
    let location = ctx
        .world
        .location(target)
        .ok_or_else(|| EngineError::LocationNotFound(target.to_string()))?;

    if let Some(required) = &location.requires_item {
        if !ctx.player.has_item(required) {
            let item = ctx.world.item_name(required);
            let template = location
                .blocked_message
                .as_deref()
                .unwrap_or(&ctx.world.story.messages.blocked_default);
            let message = ctx.render(template, &[("item", &item), ("location", &location.name)]);
            debug!(%target, %required, "entry_refused");
            return Err(EngineError::Blocked(message));
        }
    }

    let line = ctx.render(
        &ctx.world.story.messages.move_message,
        &[("location", &location.name)],
    );
    ctx.text(line);
    arrive(ctx, target)
}

/// Put the player at a location and describe it, without any gate.
pub fn arrive(ctx: &mut TurnContext<'_>, target: &LocationId) -> EngineResult<()> {
    if ctx.world.location(target).is_none() {
        return Err(EngineError::LocationNotFound(target.to_string()));
    }
    let first = ctx.player.enter(target.clone());
    debug!(to = %target, first, "moved");
    describe::describe_location(ctx)
}
