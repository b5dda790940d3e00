//! Stored-credential bootstrap.
//!
//! The library never runs the interactive OAuth consent flow itself; it
//! loads a token that an external setup step saved to disk. Without a usable
//! token every operation fails fast with `CredentialsNotFound` before any
//! network call is made.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GDriveError, Result};

/// A stored OAuth token for the Drive API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token sent with every request.
    pub access_token: String,
    /// Refresh token, kept for external tooling that re-mints access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl Credentials {
    /// Wrap an access token obtained elsewhere.
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    /// Load credentials from a JSON file saved by the OAuth setup step.
    ///
    /// # Arguments
    /// * `path` - Location of the stored token file
    ///
    /// # Errors
    /// `CredentialsNotFound` if the file is missing, unreadable as a token
    /// record, or carries an empty access token.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GDriveError::CredentialsNotFound(format!(
                "credentials file {} was not found; complete the OAuth setup \
                 and save the token there, or fix the path",
                path.display()
            )));
        }

        let data = std::fs::read_to_string(path)?;
        let credentials: Credentials = serde_json::from_str(&data).map_err(|err| {
            GDriveError::CredentialsNotFound(format!(
                "credentials file {} could not be parsed: {}",
                path.display(),
                err
            ))
        })?;

        if credentials.access_token.is_empty() {
            return Err(GDriveError::CredentialsNotFound(format!(
                "credentials file {} has no access token; re-run the OAuth setup",
                path.display()
            )));
        }

        Ok(credentials)
    }
}
