use crate::model::ValidationError;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization or deserialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The phone database could not be read as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A user-supplied value was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// No game with this id is stored.
    #[error("game not found: {0}")]
    GameNotFound(String),

    /// The game exists but has no test with this timestamp.
    #[error("test {millis} not found for game {game_id}")]
    TestNotFound {
        /// The game that was searched.
        game_id: String,
        /// The `updated_at_millis` that was requested.
        millis: i64,
    },

    /// The game already has a test with this timestamp.
    #[error("game {game_id} already has a test at {millis}")]
    DuplicateTest { game_id: String, millis: i64 },

    #[error("comment not found: {0}")]
    CommentNotFound(String),

    #[error("preset not found: {0}")]
    PresetNotFound(String),

    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// Only the signed-in author of a comment may edit it.
    #[error("comment {0} belongs to another author")]
    NotCommentAuthor(String),

    /// The operation needs a signed-in user.
    #[error("no user is signed in")]
    NotSignedIn,
}
