pub mod check;
pub mod play;

use std::path::Path;

use wf_core::World;

/// Load a world directory, turning load errors into a printable message.
fn load_world(dir: &Path) -> Result<World, String> {
    World::load_dir(dir).map_err(|e| e.to_string())
}
