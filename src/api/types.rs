//! Serde models for the Drive wire format.

use serde::Deserialize;

use crate::fs::node::RemoteNode;

/// A file resource as the API reports it.
///
/// Sizes come over the wire as decimal strings; conversion to [`RemoteNode`]
/// parses them into numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub md5_checksum: Option<String>,
}

/// Response envelope for file listing queries.
#[derive(Debug, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub items: Vec<FileResource>,
}

/// The `shortcutDetails` block of a shortcut node's metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutDetails {
    pub target_id: String,
}

/// Partial metadata fetched with `fields=shortcutDetails`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutMetadata {
    #[serde(default)]
    pub shortcut_details: Option<ShortcutDetails>,
}

impl From<FileResource> for RemoteNode {
    fn from(raw: FileResource) -> Self {
        RemoteNode {
            id: raw.id,
            title: raw.title,
            mime_type: raw.mime_type,
            file_size: raw.file_size.and_then(|s| s.parse().ok()),
            md5_checksum: raw.md5_checksum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_size_string_parses() {
        let raw: FileResource = serde_json::from_str(
            r#"{"id": "f1", "title": "a.bin", "mimeType": "application/octet-stream",
                "fileSize": "1048576", "md5Checksum": "abc123"}"#,
        )
        .unwrap();
        let node = RemoteNode::from(raw);
        assert_eq!(node.file_size, Some(1_048_576));
        assert_eq!(node.md5_checksum.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let raw: FileResource =
            serde_json::from_str(r#"{"id": "d1", "title": "docs"}"#).unwrap();
        let node = RemoteNode::from(raw);
        assert!(node.mime_type.is_none());
        assert!(node.file_size.is_none());
        assert!(node.md5_checksum.is_none());
    }
}
