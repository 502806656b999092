//! Inventory, stats and help output.

use crate::command::GLOBAL_COMMANDS;
use crate::context::TurnContext;
use crate::output::OutputStyle;

const DEFAULT_HELP: &[&str] = &[
    "look (l)        - describe where you are",
    "inventory (i)   - list what you carry",
    "stats           - show your progress",
    "use <item>      - use something you carry",
    "n, s, e, w, u, d - move in a direction",
    "help            - show this help",
    "quit (exit)     - leave the game",
];

/// List the inventory in the order items were received.
pub fn show_inventory(ctx: &mut TurnContext<'_>) {
    if ctx.player.inventory.is_empty() {
        let text = ctx.render(&ctx.world.story.messages.empty_inventory, &[]);
        ctx.text(text);
        return;
    }
    let lines: Vec<String> = ctx
        .player
        .inventory
        .iter()
        .map(|id| match ctx.world.item(id) {
            Some(item) if !item.description.is_empty() => {
                format!("- {}: {}", item.name, item.description)
            }
            Some(item) => format!("- {}", item.name),
            None => format!("- {id}"),
        })
        .collect();
    let title = format!("{}'s inventory:", ctx.player.name);
    ctx.say(OutputStyle::Title, title);
    for line in lines {
        ctx.say(OutputStyle::Listing, line);
    }
}

/// Show health, quest progress, exploration and flags.
pub fn show_stats(ctx: &mut TurnContext<'_>) {
    let mut lines = Vec::new();
    if let Some(health) = ctx.player.health {
        lines.push(format!("Health: {}/{}", health.current, health.max));
    }
    let total = ctx.world.quest_total();
    if total > 0 {
        lines.push(format!(
            "Quest items: {}/{}",
            ctx.player.quest_items_found, total
        ));
    }
    lines.push(format!(
        "Location: {}",
        ctx.world.location_name(&ctx.player.location)
    ));
    lines.push(format!(
        "Areas explored: {}/{}",
        ctx.player.discovered.len(),
        ctx.world.location_count()
    ));
    lines.push(format!("Items carried: {}", ctx.player.inventory.len()));
    lines.push(format!("Actions completed: {}", ctx.player.completed.len()));
    let flags = ctx.state.active_flags();
    if !flags.is_empty() {
        lines.push(format!("Discoveries: {}", flags.join(", ")));
    }
    if ctx.state.won {
        lines.push("Status: victorious".to_string());
    }

    let title = format!("{}'s stats", ctx.player.name);
    ctx.say(OutputStyle::Title, title);
    for line in lines {
        ctx.say(OutputStyle::Listing, line);
    }
}

/// Print the story's help text, or the built-in command list.
pub fn show_help(ctx: &mut TurnContext<'_>) {
    let mut lines: Vec<String> = if ctx.world.story.messages.help_text.is_empty() {
        DEFAULT_HELP.iter().map(|l| l.to_string()).collect()
    } else {
        ctx.world
            .story
            .messages
            .help_text
            .iter()
            .map(|l| ctx.render(l, &[]))
            .collect()
    };
    let verbs: Vec<&str> = ctx.world.story.verbs.keys().collect();
    if !verbs.is_empty() {
        lines.push(format!("Also try: {}", verbs.join(", ")));
    }
    let commands: Vec<&str> = ctx.world.story.commands.keys().collect();
    if !commands.is_empty() {
        lines.push(format!("Anywhere: {}", commands.join(", ")));
    }

    ctx.say(OutputStyle::Title, "Commands");
    for line in lines {
        ctx.system(line);
    }
}

/// The commands available everywhere, for hints.
pub fn global_hint() -> String {
    format!("Always available: {}", GLOBAL_COMMANDS.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Health;
    use crate::testing::Harness;
    use wf_core::{Item, ItemEffect, ItemId, Location};

    fn harness() -> Harness {
        Harness::new(|world| {
            world.add_location(Location::new("start", "Start")).unwrap();
            world.add_location(Location::new("hall", "Hall")).unwrap();
            world
                .add_item(
                    Item::new("orb", "Glass Orb")
                        .with_description("Cloudy and cold.")
                        .with_effect(ItemEffect::QuestItem),
                )
                .unwrap();
        })
    }

    #[test]
    fn empty_inventory_message() {
        let mut h = harness();
        h.with_ctx(|ctx| {
            show_inventory(ctx);
            Ok(())
        })
        .unwrap();
        assert!(h.out.contains("Tester isn't carrying anything right now."));
    }

    #[test]
    fn inventory_lists_duplicates() {
        let mut h = harness();
        h.player.add_item(ItemId::new("orb"));
        h.player.add_item(ItemId::new("orb"));
        h.with_ctx(|ctx| {
            show_inventory(ctx);
            Ok(())
        })
        .unwrap();
        assert_eq!(h.out.count("- Glass Orb: Cloudy and cold."), 2);
    }

    #[test]
    fn stats_show_progress_and_flags() {
        let mut h = harness();
        h.player.health = Some(Health { current: 80, max: 100 });
        h.state.set_flag("met_owl");
        h.with_ctx(|ctx| {
            show_stats(ctx);
            Ok(())
        })
        .unwrap();
        assert!(h.out.contains("Health: 80/100"));
        assert!(h.out.contains("Quest items: 0/1"));
        assert!(h.out.contains("Areas explored: 1/2"));
        assert!(h.out.contains("Discoveries: met_owl"));
    }

    #[test]
    fn help_falls_back_to_builtin_list() {
        let mut h = harness();
        h.with_ctx(|ctx| {
            show_help(ctx);
            Ok(())
        })
        .unwrap();
        assert!(h.out.contains("use <item>"));

        let mut h = harness();
        h.world.story.messages.help_text = vec!["Just explore, {player}.".into()];
        h.with_ctx(|ctx| {
            show_help(ctx);
            Ok(())
        })
        .unwrap();
        assert!(h.out.contains("Just explore, Tester."));
        assert!(!h.out.contains("use <item>"));
    }
}
