//! Resolving special actions.

use tracing::debug;
use wf_core::{ActionId, Requirement};

use crate::context::TurnContext;
use crate::effect;
use crate::error::{EngineError, EngineResult};

/// What happened when an action was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The description was shown and the effects ran.
    Completed,
    /// A finished one-shot action was invoked again; only its repeat
    /// message was shown.
    Repeated,
}

/// Run a special action by id.
///
/// A finished one-shot action only prints its repeat message. Otherwise the
/// requirements are checked in order and the first failure aborts the whole
/// action. Effects are not transactional: one that fails is reported and the
/// rest still run.
pub fn resolve(ctx: &mut TurnContext<'_>, id: &ActionId) -> EngineResult<ActionOutcome> {
    let action = ctx
        .world
        .action(id)
        .cloned()
        .ok_or_else(|| EngineError::ActionNotFound(id.to_string()))?;

    if !action.repeatable && ctx.player.has_completed(id) {
        let template = action
            .repeat_message
            .as_deref()
            .unwrap_or(&ctx.world.story.messages.repeat_default);
        let text = ctx.render(template, &[]);
        ctx.text(text);
        return Ok(ActionOutcome::Repeated);
    }

    for requirement in &action.requirements {
        check(ctx, requirement)?;
    }

    let template = action
        .description
        .as_deref()
        .unwrap_or(&ctx.world.story.messages.action_default);
    let text = ctx.render(template, &[]);
    ctx.text(text);

    for effect in &action.effects {
        if let Err(err) = effect::apply(ctx, effect) {
            ctx.report(&err);
        }
    }

    if !action.repeatable {
        ctx.player.completed.insert(id.clone());
    }
    debug!(action = %id, "action_completed");
    Ok(ActionOutcome::Completed)
}

fn check(ctx: &TurnContext<'_>, requirement: &Requirement) -> EngineResult<()> {
    let messages = &ctx.world.story.messages;
    match requirement {
        Requirement::HasItem { item, message } => {
            if ctx.player.has_item(item) {
                return Ok(());
            }
            let name = ctx.world.item_name(item);
            let template = message.as_deref().unwrap_or(&messages.missing_item);
            Err(EngineError::RequirementNotMet(
                ctx.render(template, &[("item", &name)]),
            ))
        }
        Requirement::HasFlag { flag, message } => {
            if ctx.state.has_flag(flag) {
                return Ok(());
            }
            let template = message.as_deref().unwrap_or(&messages.missing_flag);
            Err(EngineError::RequirementNotMet(
                ctx.render(template, &[("flag", flag)]),
            ))
        }
    }
}
