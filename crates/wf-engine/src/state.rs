//! Session-wide flags owned by the dispatcher.

use std::collections::{BTreeMap, HashSet};

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// Read the next command.
    Continue,
    /// The session is over.
    Quit,
}

/// Mutable session flags.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Whether the command loop keeps going.
    pub running: bool,
    /// Whether the game has been won.
    pub won: bool,
    /// Story flags set by effects and revelations.
    pub flags: BTreeMap<String, bool>,
    /// Revelations that have already fired.
    pub fired: HashSet<String>,
    /// Fallback message of a prefix verb whose target was not recognized,
    /// shown if nothing else handles the command.
    pub pending_fallback: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            running: true,
            won: false,
            flags: BTreeMap::new(),
            fired: HashSet::new(),
            pending_fallback: None,
        }
    }
}

impl SessionState {
    /// Whether a flag is set.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }

    /// Set a flag.
    pub fn set_flag(&mut self, flag: impl Into<String>) {
        self.flags.insert(flag.into(), true);
    }

    /// Names of all set flags, sorted.
    pub fn active_flags(&self) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
