//! Applies the closed effect vocabulary to session state.

use tracing::{debug, info, warn};
use wf_core::{Effect, ItemId, LocationId, normalize_command};

use crate::context::TurnContext;
use crate::error::{EngineError, EngineResult};
use crate::random;

/// Apply one effect.
pub fn apply(ctx: &mut TurnContext<'_>, effect: &Effect) -> EngineResult<()> {
    debug!(?effect, "apply_effect");
    match effect {
        Effect::GiveItem { item } => give_item(ctx, item),
        Effect::Heal { amount } => {
            heal(ctx, *amount);
            Ok(())
        }
        Effect::RevealExit { direction, target } => {
            reveal_exit(ctx, direction.as_deref(), target)
        }
        Effect::TriggerFlag {
            flag,
            requires,
            message,
        } => {
            trigger_flag(ctx, flag, requires.as_deref(), message.as_deref());
            Ok(())
        }
        Effect::WinGame => {
            win_game(ctx);
            Ok(())
        }
        Effect::RandomEffect => random::apply_random(ctx),
    }
}

/// Put an item in the inventory and count it toward the quest.
pub fn give_item(ctx: &mut TurnContext<'_>, item_id: &ItemId) -> EngineResult<()> {
    let item = ctx
        .world
        .item(item_id)
        .ok_or_else(|| EngineError::ItemNotFound(item_id.to_string()))?;
    let name = item.name.clone();
    let quest = item.is_quest_item();
    let template = item
        .pickup_message
        .as_deref()
        .unwrap_or(&ctx.world.story.messages.pickup_default);
    let pickup = ctx.render(template, &[("item", &name)]);

    ctx.player.add_item(item_id.clone());
    ctx.notice(pickup);

    if quest && ctx.player.count_quest_item(item_id, ctx.config.quest_counting) {
        let found = ctx.player.quest_items_found;
        let total = ctx.world.quest_total();
        let template = ctx
            .world
            .story
            .quest
            .progress_messages
            .get(&found)
            .unwrap_or(&ctx.world.story.messages.quest_progress);
        let progress = ctx.render(
            template,
            &[("found", &found.to_string()), ("total", &total.to_string())],
        );
        ctx.notice(progress);
    }
    Ok(())
}

/// Restore health, capped at the maximum.
pub fn heal(ctx: &mut TurnContext<'_>, amount: i32) {
    let outcome = ctx
        .player
        .health
        .as_mut()
        .map(|h| (h.heal(amount), h.current, h.max));
    match outcome {
        None => ctx.text("You feel refreshed, though nothing really changes."),
        Some((0, current, max)) => {
            ctx.text(format!("You're already at full health ({current}/{max})."))
        }
        Some((restored, current, max)) => {
            ctx.notice(format!("You recover {restored} health ({current}/{max})."))
        }
    }
}

/// Add an exit from the current location. An exit already bound to the
/// command is left alone.
pub fn reveal_exit(
    ctx: &mut TurnContext<'_>,
    direction: Option<&str>,
    target: &LocationId,
) -> EngineResult<()> {
    let name = ctx
        .world
        .location(target)
        .map(|l| l.name.clone())
        .ok_or_else(|| EngineError::LocationNotFound(target.to_string()))?;
    let direction = normalize_command(direction.unwrap_or(&ctx.config.reveal_direction));

    if ctx
        .current_location_mut()?
        .add_exit(direction.clone(), target.clone())
    {
        debug!(%direction, %target, "exit_revealed");
        ctx.notice(format!("A new path opens: '{direction}' leads to the {name}."));
        return Ok(());
    }
    let location = ctx.current_location()?;
    if let Some(existing) = location.exits.get(&direction).filter(|e| *e != target) {
        warn!(
            location = %location.id,
            %direction,
            %existing,
            %target,
            "reveal_exit_conflict"
        );
    }
    Ok(())
}

/// Set a story flag, unless it depends on a flag that is not set yet.
pub fn trigger_flag(
    ctx: &mut TurnContext<'_>,
    flag: &str,
    requires: Option<&str>,
    message: Option<&str>,
) {
    if let Some(required) = requires {
        if !ctx.state.has_flag(required) {
            let template = message.unwrap_or(&ctx.world.story.messages.flag_pending);
            let text = ctx.render(template, &[("flag", flag)]);
            ctx.text(text);
            return;
        }
    }
    debug!(flag, "flag_set");
    ctx.state.set_flag(flag);
}

/// Mark the game won, stopping the loop if so configured.
pub fn win_game(ctx: &mut TurnContext<'_>) {
    ctx.state.won = true;
    if ctx.config.win_ends_session {
        ctx.state.running = false;
    }
    info!(player = %ctx.player.name, "game_won");
    let text = ctx.render(&ctx.world.story.messages.win_message, &[]);
    ctx.notice(text);
}
