//! Command normalization and the built-in commands.

use wf_core::normalize_command;

/// Commands handled the same way in every world.
pub const GLOBAL_COMMANDS: &[&str] = &["help", "look", "inventory", "stats", "quit"];

const DIRECTION_ALIASES: &[(&str, &str)] = &[
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("u", "up"),
    ("d", "down"),
];

/// A normalized line of input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input.
    Empty,
    /// Leave the game.
    Quit,
    /// Show help.
    Help,
    /// List the inventory.
    Inventory,
    /// Show stats.
    Stats,
    /// Describe the current location.
    Look,
    /// Use a carried item.
    Use {
        /// Text to match against item names; empty for a bare `use`.
        item: String,
    },
    /// Anything else: story commands, verbs, movement, location actions.
    Other(String),
}

/// Normalize raw input: trim, lowercase, collapse whitespace, and expand a
/// whole-command direction alias.
pub fn normalize(raw: &str) -> String {
    let command = normalize_command(raw);
    DIRECTION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == command)
        .map(|(_, full)| (*full).to_string())
        .unwrap_or(command)
}

/// Classify a normalized command.
pub fn parse_command(command: &str) -> Command {
    match command {
        "" => Command::Empty,
        "quit" | "exit" => Command::Quit,
        "help" => Command::Help,
        "inventory" | "i" => Command::Inventory,
        "stats" => Command::Stats,
        "look" | "l" => Command::Look,
        "use" => Command::Use {
            item: String::new(),
        },
        _ => match command.strip_prefix("use ") {
            Some(rest) => Command::Use {
                item: rest.to_string(),
            },
            None => Command::Other(command.to_string()),
        },
    }
}

/// Split `<verb> <rest>` off a command. A bare verb yields an empty rest.
pub fn strip_verb<'a>(command: &'a str, verb: &str) -> Option<&'a str> {
    if command == verb {
        return Some("");
    }
    command.strip_prefix(verb)?.strip_prefix(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize("  Read   the BOOK "), "read the book");
    }

    #[test]
    fn expands_whole_command_aliases_only() {
        assert_eq!(normalize("N"), "north");
        assert_eq!(normalize(" d "), "down");
        assert_eq!(normalize("n n"), "n n");
        assert_eq!(normalize("dig"), "dig");
    }

    #[test]
    fn global_commands() {
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("i"), Command::Inventory);
        assert_eq!(parse_command("l"), Command::Look);
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(
            parse_command("read book"),
            Command::Other("read book".into())
        );
    }

    #[test]
    fn use_prefix() {
        assert_eq!(
            parse_command("use brass key"),
            Command::Use {
                item: "brass key".into()
            }
        );
        assert_eq!(parse_command("use"), Command::Use { item: String::new() });
        assert_eq!(parse_command("user"), Command::Other("user".into()));
    }

    #[test]
    fn verb_split() {
        assert_eq!(strip_verb("unlock shed", "unlock"), Some("shed"));
        assert_eq!(strip_verb("unlock", "unlock"), Some(""));
        assert_eq!(strip_verb("unlocked", "unlock"), None);
        assert_eq!(strip_verb("dig", "unlock"), None);
    }
}
