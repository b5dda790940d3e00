//! Remote node types.

/// MIME type Drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// MIME type Drive uses for shortcuts (aliases to another node).
pub const SHORTCUT_MIME_TYPE: &str = "application/vnd.google-apps.shortcut";

/// Well-known id of the implicit top-level container.
pub const ROOT_ID: &str = "root";

/// What a remote node is, derived from its MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Regular file
    File,
    /// Folder/directory
    Folder,
    /// Alias pointing at another node's true id
    Shortcut,
}

/// A file or folder handle returned by the Drive API.
///
/// The remote service owns all nodes; values of this type are transient
/// snapshots returned by queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteNode {
    /// Opaque node identifier
    pub id: String,
    /// Display name
    pub title: String,
    /// MIME type; `None` only for the root sentinel
    pub mime_type: Option<String>,
    /// File size in bytes; absent for folders and Docs-format files
    pub file_size: Option<u64>,
    /// Content md5 as reported by the service; absent where size is
    pub md5_checksum: Option<String>,
}

impl RemoteNode {
    /// The sentinel node for the implicit top-level container.
    ///
    /// Has the well-known fixed id and no MIME type; used as the default
    /// starting point for a path when none is supplied.
    pub fn root() -> Self {
        Self {
            id: ROOT_ID.to_string(),
            title: ROOT_ID.to_string(),
            mime_type: None,
            file_size: None,
            md5_checksum: None,
        }
    }

    /// Check if this is the root sentinel.
    pub fn is_root(&self) -> bool {
        self.id == ROOT_ID
    }

    /// Classify this node from its MIME type.
    pub fn kind(&self) -> NodeKind {
        if self.is_root() {
            return NodeKind::Folder;
        }
        match self.mime_type.as_deref() {
            Some(FOLDER_MIME_TYPE) => NodeKind::Folder,
            Some(SHORTCUT_MIME_TYPE) => NodeKind::Shortcut,
            _ => NodeKind::File,
        }
    }

    /// Check if this node is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    /// Check if this node is a folder (the root sentinel counts).
    pub fn is_folder(&self) -> bool {
        self.kind() == NodeKind::Folder
    }

    /// Check if this node is a shortcut whose target id must be resolved.
    pub fn is_shortcut(&self) -> bool {
        self.kind() == NodeKind::Shortcut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(mime_type: Option<&str>) -> RemoteNode {
        RemoteNode {
            id: "id1".to_string(),
            title: "thing".to_string(),
            mime_type: mime_type.map(|m| m.to_string()),
            file_size: None,
            md5_checksum: None,
        }
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(node(Some(FOLDER_MIME_TYPE)).kind(), NodeKind::Folder);
        assert_eq!(node(Some(SHORTCUT_MIME_TYPE)).kind(), NodeKind::Shortcut);
        assert_eq!(node(Some("text/plain")).kind(), NodeKind::File);
        assert_eq!(node(Some("image/png")).kind(), NodeKind::File);
        assert_eq!(node(None).kind(), NodeKind::File);
    }

    #[test]
    fn test_root_sentinel() {
        let root = RemoteNode::root();
        assert_eq!(root.id, ROOT_ID);
        assert!(root.mime_type.is_none());
        assert!(root.is_root());
        assert!(root.is_folder());
        assert!(!root.is_shortcut());
    }

    #[test]
    fn test_helper_methods() {
        let file = node(Some("audio/wav"));
        assert!(file.is_file());
        assert!(!file.is_folder());
        assert!(!file.is_shortcut());

        let folder = node(Some(FOLDER_MIME_TYPE));
        assert!(!folder.is_file());
        assert!(folder.is_folder());
        assert!(!folder.is_root());
    }
}
