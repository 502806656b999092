//! The random-effect table.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;
use wf_core::LocationId;

use crate::context::TurnContext;
use crate::error::EngineResult;
use crate::movement;

/// One entry of the random-effect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RandomOutcome {
    /// Restore some health.
    Heal,
    /// Lose some health, down to the configured floor.
    Damage,
    /// Jump to another discovered location.
    Teleport,
    /// Nothing but a line of atmosphere.
    Flavor,
}

const OUTCOMES: [RandomOutcome; 4] = [
    RandomOutcome::Heal,
    RandomOutcome::Damage,
    RandomOutcome::Teleport,
    RandomOutcome::Flavor,
];

const FLAVOR: &[&str] = &[
    "A warm breeze passes through, carrying the smell of rain.",
    "Somewhere far off, a bell rings once and falls silent.",
    "For a moment everything glitters, then the light settles.",
    "You get the odd feeling you've been here before.",
];

/// Draw uniformly from the table.
pub fn draw(rng: &mut StdRng) -> RandomOutcome {
    OUTCOMES[rng.random_range(0..OUTCOMES.len())]
}

/// Draw an outcome and apply it. Outcomes that cannot apply (no health
/// system, nowhere else to go) fall back to flavor text.
pub fn apply_random(ctx: &mut TurnContext<'_>) -> EngineResult<()> {
    let outcome = draw(ctx.rng);
    debug!(?outcome, "random_effect");
    let applied = match outcome {
        RandomOutcome::Heal => random_heal(ctx),
        RandomOutcome::Damage => random_damage(ctx),
        RandomOutcome::Teleport => teleport(ctx)?,
        RandomOutcome::Flavor => false,
    };
    if !applied {
        flavor(ctx);
    }
    Ok(())
}

fn random_heal(ctx: &mut TurnContext<'_>) -> bool {
    let amount = ctx.config.random_heal;
    let Some(health) = ctx.player.health.as_mut() else {
        return false;
    };
    let restored = health.heal(amount);
    let (current, max) = (health.current, health.max);
    ctx.notice(format!(
        "A soothing warmth washes over you. +{restored} health ({current}/{max})."
    ));
    true
}

fn random_damage(ctx: &mut TurnContext<'_>) -> bool {
    let amount = ctx.config.random_damage;
    let floor = ctx.config.damage_floor.unwrap_or(0);
    let Some(health) = ctx.player.health.as_mut() else {
        return false;
    };
    let lost = health.damage(amount, floor);
    let (current, max) = (health.current, health.max);
    ctx.notice(format!(
        "You stumble and scrape your knee. -{lost} health ({current}/{max})."
    ));
    true
}

fn teleport(ctx: &mut TurnContext<'_>) -> EngineResult<bool> {
    let candidates: Vec<LocationId> = ctx
        .player
        .discovered
        .iter()
        .filter(|id| **id != ctx.player.location)
        .filter(|id| {
            ctx.world.location(id).is_some_and(|l| {
                l.requires_item
                    .as_ref()
                    .is_none_or(|item| ctx.player.has_item(item))
            })
        })
        .cloned()
        .collect();
    if candidates.is_empty() {
        return Ok(false);
    }
    let target = candidates[ctx.rng.random_range(0..candidates.len())].clone();
    let name = ctx.world.location_name(&target);
    ctx.notice(format!("The world spins around you... you land in the {name}!"));
    movement::arrive(ctx, &target)?;
    Ok(true)
}

fn flavor(ctx: &mut TurnContext<'_>) {
    let line = FLAVOR[ctx.rng.random_range(0..FLAVOR.len())];
    ctx.text(line);
}
