//! Error types for the Gym Coach client

use thiserror::Error;

/// Notification shown when a remote call fails for any transport reason.
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the backend.";

/// Notification shown when the login endpoint refuses the credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";

/// Main error type for Gym Coach operations
#[derive(Error, Debug)]
pub enum CoachError {
    /// Required user input is missing or malformed
    #[error("{0}")]
    InvalidInput(String),

    /// File type refused by an uploader
    #[error("Unsupported media '{name}' ({mime})")]
    UnsupportedMedia { name: String, mime: String },

    /// The login endpoint answered but refused the credentials
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// An endpoint URL has not been configured
    #[error("{0} URL is not configured")]
    NotConfigured(&'static str),

    /// Transport-level failure talking to an endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Http { status: u16, body: String },

    /// Response payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CoachError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return CoachError::Http {
                status: status.as_u16(),
                body: String::new(),
            };
        }
        if err.is_decode() {
            return CoachError::Decode(err.to_string());
        }
        CoachError::Network(err.to_string())
    }
}

impl CoachError {
    /// Text for the single user-facing notification.
    ///
    /// Input problems are shown verbatim; every remote failure collapses to
    /// one generic line since nothing is retried.
    pub fn user_message(&self) -> String {
        match self {
            CoachError::InvalidInput(msg) => msg.clone(),
            CoachError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            CoachError::UnsupportedMedia { .. } | CoachError::NotConfigured(_) => self.to_string(),
            CoachError::Network(_) | CoachError::Http { .. } | CoachError::Decode(_) => {
                UNREACHABLE_MESSAGE.to_string()
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// True for failures caused by the remote side or the connection.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CoachError::Network(_) | CoachError::Http { .. } | CoachError::Decode(_)
        )
    }
}

/// Result type alias using CoachError
pub type CoachResult<T> = Result<T, CoachError>;
