//! Drive API client with request pacing.

use std::time::Duration;

use serde_json::json;
use tokio::time::sleep;
use url::Url;

use crate::api::types::{FileList, FileResource, ShortcutMetadata};
use crate::error::{GDriveError, Result};
use crate::fs::node::{FOLDER_MIME_TYPE, RemoteNode};
use crate::http::HttpClient;

/// Base URL for Drive metadata and content requests.
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v2/";

/// Base URL for Drive media uploads.
const DEFAULT_UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v2/";

/// Fixed pause inserted before every network call. Keeps bursts of
/// per-segment queries under informal quota pressure; not a retry scheme.
const PACE_DELAY: Duration = Duration::from_millis(10);

/// Boundary for `multipart/related` upload bodies.
const UPLOAD_BOUNDARY: &str = "gdrivelib_upload_boundary";

/// Drive API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: Url,
    upload_url: Url,
}

impl ApiClient {
    /// Create a client against the public Drive endpoints.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_urls(DEFAULT_BASE_URL, DEFAULT_UPLOAD_URL, token)
    }

    /// Create a client against explicit endpoints (tests point this at a
    /// mock server).
    pub fn with_base_urls(
        base_url: &str,
        upload_url: &str,
        token: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(token),
            base_url: Url::parse(base_url)?,
            upload_url: Url::parse(upload_url)?,
        })
    }

    async fn pace(&self) {
        sleep(PACE_DELAY).await;
    }

    /// List non-trashed files matching a Drive query string.
    pub async fn list(&self, query: &str) -> Result<Vec<RemoteNode>> {
        self.pace().await;
        let mut url = self.base_url.join("files")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("maxResults", "1000");
        let list: FileList = self.http.get_json(url).await?;
        Ok(list.items.into_iter().map(RemoteNode::from).collect())
    }

    /// Fetch the target id a shortcut node points at.
    pub async fn shortcut_target(&self, id: &str) -> Result<String> {
        self.pace().await;
        let mut url = self.base_url.join(&format!("files/{}", id))?;
        url.query_pairs_mut().append_pair("fields", "shortcutDetails");
        let metadata: ShortcutMetadata = self.http.get_json(url).await?;
        metadata
            .shortcut_details
            .map(|details| details.target_id)
            .ok_or_else(|| {
                GDriveError::InvalidResponse(format!(
                    "shortcut metadata for {} is missing shortcutDetails",
                    id
                ))
            })
    }

    /// Create a folder entry under a parent.
    pub async fn create_folder(&self, parent_id: &str, title: &str) -> Result<RemoteNode> {
        self.pace().await;
        let url = self.base_url.join("files")?;
        let body = json!({
            "title": title,
            "parents": [{"id": parent_id}],
            "mimeType": FOLDER_MIME_TYPE,
        });
        let raw: FileResource = self.http.post_json(url, &body).await?;
        Ok(raw.into())
    }

    /// Fetch the full content of a file.
    pub async fn download_content(&self, id: &str) -> Result<Vec<u8>> {
        self.pace().await;
        let mut url = self.base_url.join(&format!("files/{}", id))?;
        url.query_pairs_mut().append_pair("alt", "media");
        self.http.get_bytes(url).await
    }

    /// Create a new file entry under a parent and fill it with content.
    ///
    /// Drive permits several files with the same title under one parent;
    /// this always creates an additional entry and never replaces one.
    pub async fn upload_content(
        &self,
        parent_id: &str,
        title: &str,
        content: &[u8],
    ) -> Result<RemoteNode> {
        self.pace().await;
        let mut url = self.upload_url.join("files")?;
        url.query_pairs_mut().append_pair("uploadType", "multipart");

        let metadata = serde_json::to_vec(&json!({
            "title": title,
            "parents": [{"id": parent_id}],
        }))?;
        let body = multipart_related(&metadata, content);
        let content_type = format!("multipart/related; boundary={}", UPLOAD_BOUNDARY);

        let raw: FileResource = self.http.post_body(url, &content_type, body).await?;
        Ok(raw.into())
    }
}

/// Build a two-part `multipart/related` body: JSON metadata, then content.
fn multipart_related(metadata: &[u8], content: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(metadata.len() + content.len() + 256);
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n",
            UPLOAD_BOUNDARY
        )
        .as_bytes(),
    );
    body.extend_from_slice(metadata);
    body.extend_from_slice(
        format!(
            "\r\n--{}\r\nContent-Type: application/octet-stream\r\n\r\n",
            UPLOAD_BOUNDARY
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", UPLOAD_BOUNDARY).as_bytes());
    body
}

/// Escape a value for embedding in a single-quoted Drive query literal.
pub(crate) fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_query_value() {
        assert_eq!(escape_query_value("plain"), "plain");
        assert_eq!(escape_query_value("it's"), "it\\'s");
        assert_eq!(escape_query_value("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_multipart_body_layout() {
        let body = multipart_related(br#"{"title":"x"}"#, b"payload");
        let text = String::from_utf8_lossy(&body);
        assert!(text.starts_with(&format!("--{}", UPLOAD_BOUNDARY)));
        assert!(text.contains(r#"{"title":"x"}"#));
        assert!(text.contains("payload"));
        assert!(text.ends_with(&format!("--{}--\r\n", UPLOAD_BOUNDARY)));
    }

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new("token");
        assert!(client.is_ok());
    }
}
