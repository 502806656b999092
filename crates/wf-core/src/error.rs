/// Alias for `Result<T, WfError>`.
pub type WfResult<T> = Result<T, WfError>;

/// Errors that can occur when loading or assembling a world.
#[derive(Debug, thiserror::Error)]
pub enum WfError {
    /// A world data file could not be read.
    #[error("failed to read {file}: {source}")]
    Io {
        /// The file that could not be read.
        file: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A world data file is not valid JSON or does not match the schema.
    #[error("failed to parse {file}: {source}")]
    Parse {
        /// The offending file name.
        file: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Two definitions share the same identifier.
    #[error("duplicate {kind} id: \"{id}\"")]
    DuplicateId {
        /// What kind of definition was duplicated.
        kind: &'static str,
        /// The duplicated identifier.
        id: String,
    },

    /// A reference that must resolve at load time does not.
    #[error("invalid reference: {kind} \"{id}\" not found")]
    InvalidReference {
        /// What kind of definition was expected.
        kind: &'static str,
        /// The unresolved identifier.
        id: String,
    },
}
