//! The "not understood" response, with contextual hints and suggestions.

use strsim::jaro_winkler;

use crate::command::GLOBAL_COMMANDS;
use crate::context::TurnContext;
use crate::output::OutputStyle;
use crate::status;

/// Minimum similarity for a "did you mean" suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.85;

/// Find the valid command most similar to the input, if any is close enough.
pub fn suggest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    if input.is_empty() {
        return None;
    }
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        if *candidate == input {
            continue;
        }
        let score = jaro_winkler(input, candidate);
        if score >= SUGGEST_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((*candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Tell the player the command was not understood, list what they can do
/// here, and suggest a near match.
pub fn not_understood(ctx: &mut TurnContext<'_>, input: &str) {
    let invalid = ctx.render(&ctx.world.story.messages.invalid_command, &[]);

    let (actions, exits) = match ctx.world.location(&ctx.player.location) {
        Some(location) => (
            location.actions.keys().map(str::to_string).collect::<Vec<_>>(),
            location.exits.keys().map(str::to_string).collect::<Vec<_>>(),
        ),
        None => (Vec::new(), Vec::new()),
    };
    let story_commands: Vec<String> = ctx.world.story.commands.keys().map(str::to_string).collect();

    let candidates: Vec<&str> = actions
        .iter()
        .chain(&exits)
        .chain(&story_commands)
        .map(String::as_str)
        .chain(GLOBAL_COMMANDS.iter().copied())
        .collect();
    let suggestion = suggest(input, &candidates).map(str::to_string);

    ctx.say(OutputStyle::Error, invalid);
    if let Some(suggestion) = suggestion {
        ctx.system(format!("Did you mean '{suggestion}'?"));
    }
    if !actions.is_empty() {
        ctx.system(format!("Here you can: {}", actions.join(", ")));
    }
    if !exits.is_empty() {
        ctx.system(format!("Exits: {}", exits.join(", ")));
    }
    ctx.system(status::global_hint());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use wf_core::Location;

    #[test]
    fn suggests_close_matches_only() {
        let candidates = ["read book", "north", "inventory"];
        assert_eq!(suggest("read bok", &candidates), Some("read book"));
        assert_eq!(suggest("inventroy", &candidates), Some("inventory"));
        assert_eq!(suggest("dance wildly", &candidates), None);
        assert_eq!(suggest("", &candidates), None);
    }

    #[test]
    fn hint_lists_location_commands() {
        let mut h = Harness::new(|world| {
            world
                .add_location(
                    Location::new("start", "Start")
                        .with_exit("north", "hall")
                        .with_action("read book", "read_book"),
                )
                .unwrap();
        });
        h.with_ctx(|ctx| {
            not_understood(ctx, "raed book");
            Ok(())
        })
        .unwrap();
        assert!(h.out.contains("I don't understand that command."));
        assert!(h.out.contains("Did you mean 'read book'?"));
        assert!(h.out.contains("Here you can: read book"));
        assert!(h.out.contains("Exits: north"));
        assert!(h.out.contains("Always available: help"));
    }
}
