use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(dir: &Path) -> Result<(), String> {
    let world = super::load_world(dir)?;
    let warnings = world.validate();
    let reachable = world.reachable_locations().len();

    let title = if world.story.info.title.is_empty() {
        dir.display().to_string()
    } else {
        world.story.info.title.clone()
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Count"]);
    table.add_row(vec!["Locations".to_string(), world.location_count().to_string()]);
    table.add_row(vec!["Reachable".to_string(), reachable.to_string()]);
    table.add_row(vec!["Items".to_string(), world.item_count().to_string()]);
    table.add_row(vec!["Quest items".to_string(), world.quest_total().to_string()]);
    table.add_row(vec!["Special actions".to_string(), world.action_count().to_string()]);
    table.add_row(vec![
        "Revelations".to_string(),
        world.story.revelations.len().to_string(),
    ]);

    println!("  {} '{title}'", "Checked".bold());
    println!("{table}");

    if warnings.is_empty() {
        println!("  All references resolve.");
    } else {
        for warning in &warnings {
            println!("  {} {warning}", "warning:".yellow().bold());
        }
        println!(
            "  {} warning{}",
            warnings.len(),
            if warnings.len() == 1 { "" } else { "s" },
        );
    }

    Ok(())
}
