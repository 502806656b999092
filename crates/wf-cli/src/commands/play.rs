use std::io::{self, BufRead};
use std::path::Path;

use tracing::info;
use wf_engine::{EngineConfig, Session};

use crate::console::Console;

pub fn run(
    dir: &Path,
    seed: Option<u64>,
    name: Option<&str>,
    win_continues: bool,
) -> Result<(), String> {
    let world = super::load_world(dir)?;

    let mut config = EngineConfig::from_story(&world.story);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if win_continues {
        config = config.with_win_ends_session(false);
    }
    let ask_name = world.story.settings.ask_name && name.is_none();
    let name_prompt = world.story.intro.name_prompt.clone();

    let mut session =
        Session::new(world, config).map_err(|e| format!("failed to start session: {e}"))?;
    if let Some(name) = name {
        session.set_player_name(name);
    }

    let mut console = Console;
    session.intro(&mut console);

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    if ask_name {
        console.ask(&name_prompt);
        let mut line = String::new();
        reader.read_line(&mut line).map_err(|e| e.to_string())?;
        session.set_player_name(line.trim());
    }

    info!(player = %session.player().name, "session_started");
    session.start(&mut console);
    session
        .run(&mut reader, &mut console)
        .map_err(|e| format!("failed to read input: {e}"))?;
    info!(won = session.has_won(), "session_ended");

    Ok(())
}
