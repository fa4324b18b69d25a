use thiserror::Error;

/// Errors that can arise while assembling a labyrinth session from its startup content.
///
/// Gameplay itself never fails; these only surface while loading room tables
/// and constructing a session.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around IO errors (reading a room table from disk).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The room table was not valid JSON or did not match the expected shape.
    #[error("failed to parse room table {path}: {source}")]
    SeedParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two rooms were registered under the same identifier.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    /// Two exits of one room differ only by letter case.
    #[error("room '{room}' has more than one exit '{direction}'")]
    DuplicateExit { room: String, direction: String },

    /// An exit leads to a room the table does not define.
    #[error("room '{room}' has exit '{direction}' to unknown room '{target}'")]
    UnknownExitTarget {
        room: String,
        direction: String,
        target: String,
    },

    /// The configured start room is not part of the room table.
    #[error("start room '{0}' is not in the room table")]
    UnknownStartRoom(String),
}
