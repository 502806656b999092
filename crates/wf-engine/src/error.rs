//! Error types for the engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Which side of the table an error falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The world data references something that does not exist.
    DataConsistency,
    /// The player asked for something that cannot happen right now.
    User,
}

/// Errors raised while resolving a command.
///
/// None of these end the session: the dispatcher reports them and the loop
/// carries on. User errors display as the guiding message itself.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A location id does not resolve.
    #[error("unknown location \"{0}\"")]
    LocationNotFound(String),

    /// A special action id does not resolve.
    #[error("unknown action \"{0}\"")]
    ActionNotFound(String),

    /// An item id does not resolve.
    #[error("unknown item \"{0}\"")]
    ItemNotFound(String),

    /// Nothing in the inventory matches what the player tried to use.
    #[error("{0}")]
    ItemNotInInventory(String),

    /// A requirement of the action is not met.
    #[error("{0}")]
    RequirementNotMet(String),

    /// Entry to a location was refused.
    #[error("{0}")]
    Blocked(String),

    /// The command is missing its object, like a bare `use`.
    #[error("{0}")]
    Incomplete(String),
}

impl EngineError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LocationNotFound(_) | Self::ActionNotFound(_) | Self::ItemNotFound(_) => {
                ErrorKind::DataConsistency
            }
            Self::ItemNotInInventory(_)
            | Self::RequirementNotMet(_)
            | Self::Blocked(_)
            | Self::Incomplete(_) => ErrorKind::User,
        }
    }
}
