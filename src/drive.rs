//! The Drive handle owning the API client.

use crate::api::ApiClient;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::fs::node::RemoteNode;

/// Authenticated handle to a Google Drive account.
///
/// All operations (path resolution, listing, transfer) hang off this value;
/// there is no process-global authentication state.
#[derive(Debug, Clone)]
pub struct Drive {
    pub(crate) api: ApiClient,
}

impl Drive {
    /// Create a handle from stored credentials.
    ///
    /// # Example
    /// ```no_run
    /// use gdrivelib::{Credentials, Drive};
    ///
    /// # fn example() -> gdrivelib::Result<()> {
    /// let credentials = Credentials::load("credentials.json")?;
    /// let drive = Drive::new(&credentials)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_token(credentials.access_token.clone())
    }

    /// Create a handle from a raw access token.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(token)?,
        })
    }

    /// Create a handle against explicit API endpoints.
    ///
    /// Integration tests use this to point the client at a mock server.
    pub fn with_base_urls(
        base_url: &str,
        upload_url: &str,
        token: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            api: ApiClient::with_base_urls(base_url, upload_url, token)?,
        })
    }

    /// The sentinel node paths start from when no start node is given.
    pub fn root(&self) -> RemoteNode {
        RemoteNode::root()
    }
}
