use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::action::{Effect, Requirement};
use crate::id::{ActionId, ItemId, LocationId};
use crate::world::World;

/// A problem found in otherwise loadable world data.
///
/// These do not stop a session from starting; the engine reports them as
/// data-consistency errors when they are hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataWarning {
    /// What the warning is about, e.g. `location "hall"`.
    pub subject: String,
    /// What is wrong with it.
    pub message: String,
}

impl DataWarning {
    fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

impl World {
    /// Check every cross-reference in the world and report the ones that do
    /// not resolve, plus locations the player can never reach.
    pub fn validate(&self) -> Vec<DataWarning> {
        let mut warnings = Vec::new();

        for location in self.locations() {
            let subject = format!("location \"{}\"", location.id);
            for (cmd, target) in location.exits.iter() {
                if self.location(target).is_none() {
                    warnings.push(DataWarning::new(
                        &subject,
                        format!("exit \"{cmd}\" leads to unknown location \"{target}\""),
                    ));
                }
            }
            for (cmd, action) in location.actions.iter() {
                self.check_action(&subject, cmd, action, &mut warnings);
            }
            if let Some(item) = &location.requires_item {
                self.check_item(&subject, item, &mut warnings);
            }
        }

        for action in self.actions() {
            let subject = format!("action \"{}\"", action.id);
            for requirement in &action.requirements {
                if let Requirement::HasItem { item, .. } = requirement {
                    self.check_item(&subject, item, &mut warnings);
                }
            }
            for effect in &action.effects {
                match effect {
                    Effect::GiveItem { item } => self.check_item(&subject, item, &mut warnings),
                    Effect::RevealExit { target, .. } => {
                        self.check_location(&subject, target, &mut warnings)
                    }
                    _ => {}
                }
            }
        }

        for (cmd, action) in self.story.commands.iter() {
            self.check_action("story commands", cmd, action, &mut warnings);
        }
        for (verb, prefix) in self.story.verbs.iter() {
            let subject = format!("verb \"{verb}\"");
            for (target, action) in prefix.targets.iter() {
                self.check_action(&subject, target, action, &mut warnings);
            }
        }
        for (i, rule) in self.story.rules.iter().enumerate() {
            let subject = format!("rule #{}", i + 1);
            if let Some(location) = &rule.location {
                self.check_location(&subject, location, &mut warnings);
            }
            if let Some(injection) = &rule.add_action {
                self.check_action(&subject, &injection.command, &injection.target, &mut warnings);
            }
            if let Some(injection) = &rule.add_exit {
                self.check_location(&subject, &injection.target, &mut warnings);
            }
        }

        let reachable = self.reachable_locations();
        for location in self.locations() {
            if !reachable.contains(&location.id) {
                warnings.push(DataWarning::new(
                    format!("location \"{}\"", location.id),
                    "unreachable from the starting location",
                ));
            }
        }

        for warning in &warnings {
            tracing::warn!(subject = %warning.subject, "{}", warning.message);
        }
        warnings
    }

    /// Every location reachable from the start through static exits,
    /// revealed exits and rule-injected exits.
    pub fn reachable_locations(&self) -> HashSet<LocationId> {
        let mut dynamic: Vec<LocationId> = self
            .actions()
            .flat_map(|a| a.effects.iter())
            .filter_map(|e| match e {
                Effect::RevealExit { target, .. } => Some(target.clone()),
                _ => None,
            })
            .collect();
        dynamic.extend(
            self.story
                .rules
                .iter()
                .filter_map(|r| r.add_exit.as_ref().map(|inj| inj.target.clone())),
        );

        let start = self.starting_location().clone();
        let mut seen: HashSet<LocationId> = HashSet::new();
        let mut queue: VecDeque<LocationId> = VecDeque::new();
        seen.insert(start.clone());
        queue.push_back(start);
        for target in dynamic {
            if seen.insert(target.clone()) {
                queue.push_back(target);
            }
        }

        while let Some(id) = queue.pop_front() {
            let Some(location) = self.location(&id) else {
                continue;
            };
            for target in location.exits.values() {
                if seen.insert(target.clone()) {
                    queue.push_back(target.clone());
                }
            }
        }
        seen
    }

    fn check_action(
        &self,
        subject: &str,
        cmd: &str,
        action: &ActionId,
        warnings: &mut Vec<DataWarning>,
    ) {
        if self.action(action).is_none() {
            warnings.push(DataWarning::new(
                subject,
                format!("command \"{cmd}\" triggers unknown action \"{action}\""),
            ));
        }
    }

    fn check_item(&self, subject: &str, item: &ItemId, warnings: &mut Vec<DataWarning>) {
        if self.item(item).is_none() {
            warnings.push(DataWarning::new(
                subject,
                format!("references unknown item \"{item}\""),
            ));
        }
    }

    fn check_location(&self, subject: &str, location: &LocationId, warnings: &mut Vec<DataWarning>) {
        if self.location(location).is_none() {
            warnings.push(DataWarning::new(
                subject,
                format!("references unknown location \"{location}\""),
            ));
        }
    }
}
