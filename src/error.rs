//! Error taxonomy for gdrivelib.
//!
//! A single [`GDriveError`] enum covers every failure mode raised by the
//! crate, plus `#[from]` transports for the underlying network, JSON, IO, and
//! URL-parsing errors. All errors are surfaced synchronously to the caller;
//! nothing is retried internally.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, GDriveError>;

/// Everything that can go wrong while talking to Google Drive.
#[derive(Debug, Error)]
pub enum GDriveError {
    /// A path segment matched no entries under its parent.
    #[error("no entry named '{name}' under '{parent}'")]
    NotFound {
        /// Display name of the parent that was searched.
        parent: String,
        /// The segment name that could not be resolved.
        name: String,
    },

    /// A path segment matched more than one entry; the resolver refuses to
    /// guess which one was intended.
    #[error("multiple entries named '{name}' under '{parent}'")]
    MultipleFiles {
        /// Display name of the parent that was searched.
        parent: String,
        /// The ambiguous segment name.
        name: String,
    },

    /// A file already exists and the overwrite policy forbade replacing it.
    #[error("{0}")]
    FileExists(String),

    /// A folder already exists and creation was requested without reuse.
    #[error("{0}")]
    FolderExists(String),

    /// Credentials could not be found or parsed.
    #[error("{0}")]
    CredentialsNotFound(String),

    /// A local download destination exists but is not a directory.
    #[error("destination is not a directory: {0}")]
    NotADirectory(String),

    /// The remote API returned a well-formed response that did not contain the
    /// data we required.
    #[error("{0}")]
    InvalidResponse(String),

    /// The remote API returned a non-success HTTP status.
    #[error("drive API returned status {status}: {body}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// An underlying HTTP request failed.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A local filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A URL failed to parse.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
