//! World data model for Wegfinder: locations, items, special actions, and
//! story configuration.
//!
//! This crate defines the data the interpreter runs on. It is independent of
//! the engine: you can construct a [`World`] programmatically or load one
//! from a directory of JSON files with [`World::load_dir`].

/// Scripted special actions, their requirements and effects.
pub mod action;
/// Conditions evaluated against session state by the engine.
pub mod condition;
/// Error types used throughout the crate.
pub mod error;
/// String identifiers for locations, items, and actions.
pub mod id;
/// Items the player can carry and use.
pub mod item;
/// Locations and their exits/actions.
pub mod location;
/// Insertion-ordered command maps.
pub mod ordered;
/// Story configuration: settings, intro, messages, rules, and revelations.
pub mod story;
/// Reference checks over a loaded world.
pub mod validate;
/// The central world model that owns locations, items, and actions.
pub mod world;

/// Re-export action types.
pub use action::{Effect, Requirement, SpecialAction};
/// Re-export condition type.
pub use condition::Condition;
/// Re-export error types.
pub use error::{WfError, WfResult};
/// Re-export identifier types.
pub use id::{ActionId, ItemId, LocationId};
/// Re-export item types.
pub use item::{Item, ItemEffect};
/// Re-export location types.
pub use location::{Location, Target, normalize_command};
/// Re-export ordered map.
pub use ordered::CommandMap;
/// Re-export story types.
pub use story::{Messages, QuestCounting, Story, render};
/// Re-export validation types.
pub use validate::DataWarning;
/// Re-export world model.
pub use world::World;
