//! Revelations: one-shot sequences checked before every turn.

use tracing::info;
use wf_core::story::Revelation;

use crate::context::TurnContext;

/// Fire every revelation whose condition holds for the first time.
/// Returns how many fired.
pub fn check_revelations(ctx: &mut TurnContext<'_>) -> usize {
    let due: Vec<Revelation> = ctx
        .world
        .story
        .revelations
        .iter()
        .filter(|r| !ctx.state.fired.contains(&r.id))
        .filter(|r| r.when.evaluate(&*ctx))
        .cloned()
        .collect();

    for revelation in &due {
        ctx.state.fired.insert(revelation.id.clone());
        info!(revelation = %revelation.id, wins = revelation.wins_game, "revelation_fired");
        for line in &revelation.lines {
            let text = ctx.render(line, &[]);
            ctx.notice(text);
        }
        if let Some(flag) = &revelation.set_flag {
            ctx.state.set_flag(flag.clone());
        }
        if revelation.wins_game {
            ctx.state.won = true;
            if ctx.config.win_ends_session {
                ctx.state.running = false;
            }
        }
    }
    due.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use wf_core::{Condition, ItemId, Location};

    fn harness(wins_game: bool) -> Harness {
        Harness::new(|world| {
            world.add_location(Location::new("start", "Start")).unwrap();
            world.story.revelations.push(Revelation {
                id: "dawn".into(),
                when: Condition::HasItem {
                    item: ItemId::new("sun"),
                },
                lines: vec!["The sun rises, {player}.".into()],
                set_flag: Some("daylight".into()),
                wins_game,
            });
        })
    }

    #[test]
    fn fires_once_when_condition_holds() {
        let mut h = harness(true);
        assert_eq!(h.with_ctx(|ctx| Ok(check_revelations(ctx))).unwrap(), 0);

        h.player.add_item(ItemId::new("sun"));
        assert_eq!(h.with_ctx(|ctx| Ok(check_revelations(ctx))).unwrap(), 1);
        assert_eq!(h.with_ctx(|ctx| Ok(check_revelations(ctx))).unwrap(), 0);
        assert_eq!(h.out.count("The sun rises, Tester."), 1);
        assert!(h.state.has_flag("daylight"));
        assert!(h.state.won);
        assert!(!h.state.running);
    }

    #[test]
    fn non_winning_revelation_keeps_running() {
        let mut h = harness(false);
        h.player.add_item(ItemId::new("sun"));
        h.with_ctx(|ctx| Ok(check_revelations(ctx))).unwrap();
        assert!(!h.state.won);
        assert!(h.state.running);
    }
}
