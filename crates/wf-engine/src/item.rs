//! The `use` command.

use tracing::debug;
use wf_core::{Item, ItemEffect};

use crate::context::TurnContext;
use crate::effect;
use crate::error::{EngineError, EngineResult};
use crate::random;

/// Find the first carried item whose name contains the text, ignoring case.
/// Returns its inventory slot and definition.
pub fn find_carried(ctx: &TurnContext<'_>, query: &str) -> Option<(usize, Item)> {
    let query = query.to_lowercase();
    ctx.player
        .inventory
        .iter()
        .enumerate()
        .find_map(|(slot, id)| {
            ctx.world
                .item(id)
                .filter(|item| item.name.to_lowercase().contains(&query))
                .map(|item| (slot, item.clone()))
        })
}

/// Use a carried item: print its use message, apply its special effect,
/// and drop it from the inventory if it is consumable.
pub fn use_item(ctx: &mut TurnContext<'_>, query: &str) -> EngineResult<()> {
    if query.is_empty() {
        return Err(EngineError::Incomplete("Use what?".to_string()));
    }
    let Some((slot, item)) = find_carried(ctx, query) else {
        let message = ctx.render(&ctx.world.story.messages.no_such_item, &[("item", query)]);
        return Err(EngineError::ItemNotInInventory(message));
    };

    let template = item
        .use_message
        .as_deref()
        .unwrap_or(&ctx.world.story.messages.use_default);
    let text = ctx.render(template, &[("item", &item.name)]);
    ctx.text(text);

    debug!(item = %item.id, effect = ?item.special_effect, "item_used");
    let result = match &item.special_effect {
        None => Ok(()),
        Some(ItemEffect::QuestItem) => {
            ctx.text("It feels important. Better hold on to it.");
            Ok(())
        }
        Some(ItemEffect::Wisdom) => {
            ctx.notice("You feel wiser.");
            Ok(())
        }
        Some(ItemEffect::Heal(amount)) => {
            effect::heal(ctx, *amount);
            Ok(())
        }
        Some(ItemEffect::RandomEffect) => random::apply_random(ctx),
        Some(ItemEffect::Trigger(flag)) => {
            effect::trigger_flag(ctx, flag, None, None);
            Ok(())
        }
    };

    if item.consumable {
        ctx.player.remove_slot(slot);
        if item.is_quest_item() {
            ctx.player.uncount_quest_item(&item.id, ctx.config.quest_counting);
        }
        ctx.text(format!("The {} is used up.", item.name));
    }
    result
}
