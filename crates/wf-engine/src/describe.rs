//! Location descriptions, describe rules and quick reminders.

use wf_core::normalize_command;
use wf_core::story::DescribeRule;

use crate::context::TurnContext;
use crate::error::EngineResult;
use crate::output::OutputStyle;

/// How many actions the quick reminder lists before "and more".
const REMINDER_ACTIONS: usize = 3;

/// Describe the current location and mark it visited.
///
/// Describe rules run first so anything they inject shows up in the
/// listings. Running this twice in a row lists the same actions and exits.
pub fn describe_location(ctx: &mut TurnContext<'_>) -> EngineResult<()> {
    let rule_messages = apply_rules(ctx)?;

    let location = ctx.current_location()?;
    let title = location.name.clone();
    let body = location.current_description().to_string();
    let actions = location.actions.keys().collect::<Vec<_>>().join(", ");
    let exits = location
        .exits
        .iter()
        .map(|(cmd, dest)| format!("{cmd} ({})", ctx.world.location_name(dest)))
        .collect::<Vec<_>>()
        .join(", ");

    ctx.say(OutputStyle::Title, title);
    if !body.is_empty() {
        ctx.text(body);
    }
    for message in rule_messages {
        ctx.notice(message);
    }
    if !actions.is_empty() {
        ctx.say(OutputStyle::Listing, format!("Actions: {actions}"));
    }
    if !exits.is_empty() {
        ctx.say(OutputStyle::Listing, format!("Exits: {exits}"));
    }

    ctx.current_location_mut()?.visited = true;
    Ok(())
}

/// Evaluate the story's describe rules for the current location, injecting
/// their actions and exits. Returns the messages of the rules that apply.
pub fn apply_rules(ctx: &mut TurnContext<'_>) -> EngineResult<Vec<String>> {
    let here = ctx.player.location.clone();
    let applicable: Vec<DescribeRule> = ctx
        .world
        .story
        .rules
        .iter()
        .filter(|rule| rule.location.as_ref().is_none_or(|l| *l == here))
        .filter(|rule| rule.when.evaluate(&*ctx))
        .cloned()
        .collect();

    let mut messages = Vec::new();
    for rule in applicable {
        if let Some(message) = &rule.message {
            messages.push(ctx.render(message, &[]));
        }
        let location = ctx.current_location_mut()?;
        if let Some(injection) = rule.add_action {
            location.add_action(normalize_command(&injection.command), injection.target);
        }
        if let Some(injection) = rule.add_exit {
            location.add_exit(normalize_command(&injection.command), injection.target);
        }
    }
    Ok(messages)
}

/// A one-line reminder of where the player is, what they can do and
/// where they can go.
pub fn reminder(ctx: &mut TurnContext<'_>) -> EngineResult<()> {
    let location = ctx.current_location()?;
    let mut line = format!("You're in the {}.", location.name);
    if !location.actions.is_empty() {
        let shown: Vec<&str> = location.actions.keys().take(REMINDER_ACTIONS).collect();
        line.push_str(" You can: ");
        line.push_str(&shown.join(", "));
        if location.actions.len() > REMINDER_ACTIONS {
            line.push_str(" and more");
        }
        line.push('.');
    }
    if !location.exits.is_empty() {
        let exits: Vec<&str> = location.exits.keys().collect();
        line.push_str(" Can go to: ");
        line.push_str(&exits.join(", "));
        line.push('.');
    }
    ctx.system(line);
    Ok(())
}
