//! Path resolution and listing.

use tracing::warn;

use crate::api::client::escape_query_value;
use crate::drive::Drive;
use crate::error::{GDriveError, Result};
use crate::fs::node::RemoteNode;

impl Drive {
    /// The id queries against this node must use as a parent.
    ///
    /// A shortcut's own id has no children; its target id does.
    pub(crate) async fn true_id(&self, node: &RemoteNode) -> Result<String> {
        if node.is_shortcut() {
            self.api.shortcut_target(&node.id).await
        } else {
            Ok(node.id.clone())
        }
    }

    /// Look up a single name among the non-trashed children of a directory.
    ///
    /// Exactly one match is required: zero is `NotFound`, two or more is
    /// `MultipleFiles`. Drive permits duplicate titles and this resolver
    /// refuses to guess between them.
    async fn find_one_level(&self, dir: &RemoteNode, name: &str) -> Result<RemoteNode> {
        let parent_id = self.true_id(dir).await?;
        let query = format!(
            "title = '{}' and '{}' in parents and trashed = false",
            escape_query_value(name),
            parent_id
        );
        let mut matches = self.api.list(&query).await?;

        match matches.len() {
            0 => Err(GDriveError::NotFound {
                parent: dir.title.clone(),
                name: name.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(GDriveError::MultipleFiles {
                parent: dir.title.clone(),
                name: name.to_string(),
            }),
        }
    }

    /// Resolve a path of name segments starting from the root.
    ///
    /// # Arguments
    /// * `path` - Ordered path segments, e.g. `&["recordings", "day1.wav"]`
    ///
    /// # Returns
    /// The node the final segment resolves to; an empty path returns the
    /// root sentinel.
    pub async fn find<S: AsRef<str>>(&self, path: &[S]) -> Result<RemoteNode> {
        self.find_in(&RemoteNode::root(), path).await
    }

    /// Resolve a path of name segments starting from a given directory.
    pub async fn find_in<S: AsRef<str>>(
        &self,
        start: &RemoteNode,
        path: &[S],
    ) -> Result<RemoteNode> {
        let mut current = start.clone();
        for segment in path {
            current = self.find_one_level(&current, segment.as_ref()).await?;
        }
        Ok(current)
    }

    /// List the non-trashed children of the directory a path resolves to.
    pub async fn ls<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<RemoteNode>> {
        self.ls_in(&RemoteNode::root(), path).await
    }

    /// Same as [`ls`](Self::ls) but starting from a given directory.
    pub async fn ls_in<S: AsRef<str>>(
        &self,
        start: &RemoteNode,
        path: &[S],
    ) -> Result<Vec<RemoteNode>> {
        let dir = self.find_in(start, path).await?;
        let parent_id = self.true_id(&dir).await?;
        self.api
            .list(&format!("'{}' in parents and trashed = false", parent_id))
            .await
    }

    /// List the top level of the drive.
    pub async fn ls_root(&self) -> Result<Vec<RemoteNode>> {
        self.ls(&[] as &[&str]).await
    }

    /// Check whether a path resolves, starting from the root.
    ///
    /// `NotFound` becomes `false`; every other failure (including an
    /// ambiguous segment) propagates.
    pub async fn exists<S: AsRef<str>>(&self, path: &[S]) -> Result<bool> {
        self.exists_in(&RemoteNode::root(), path).await
    }

    /// Same as [`exists`](Self::exists) but starting from a given directory.
    pub async fn exists_in<S: AsRef<str>>(&self, start: &RemoteNode, path: &[S]) -> Result<bool> {
        match self.find_in(start, path).await {
            Ok(_) => Ok(true),
            Err(GDriveError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Find a top-level folder by name anywhere in the drive.
    ///
    /// Unlike the per-segment resolver this is a global title search, and it
    /// tolerates ambiguity: with several matches the first is returned and a
    /// warning logged.
    ///
    /// # Arguments
    /// * `folder_name` - Title of the folder to search for
    /// * `shared` - Restrict the search to items shared with this account
    pub async fn get_root(&self, folder_name: &str, shared: bool) -> Result<RemoteNode> {
        let escaped = escape_query_value(folder_name);
        let query = if shared {
            format!("title = '{}' and sharedWithMe", escaped)
        } else {
            format!("title = '{}'", escaped)
        };
        let mut matches = self.api.list(&query).await?;

        if matches.is_empty() {
            let scope = if shared { "Shared with me" } else { "My Drive" };
            return Err(GDriveError::NotFound {
                parent: scope.to_string(),
                name: folder_name.to_string(),
            });
        }
        if matches.len() > 1 {
            warn!(
                count = matches.len(),
                folder = folder_name,
                "located multiple folders by name, selecting the first"
            );
        }
        Ok(matches.remove(0))
    }
}
