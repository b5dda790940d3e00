//! Download operations.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use tracing::debug;

use crate::drive::Drive;
use crate::error::{GDriveError, Result};
use crate::fs::node::RemoteNode;
use crate::fs::operations::overwrite::Overwrite;

impl Drive {
    /// Download a file node to a local path.
    ///
    /// Folder nodes delegate to [`download_folder`](Self::download_folder).
    /// If `download_to` is an existing directory, the node's title is
    /// appended to form the concrete file path. If that path already exists
    /// and the policy says not to overwrite, nothing is transferred.
    ///
    /// # Arguments
    /// * `node` - The node to download
    /// * `download_to` - Local file path, or an existing directory
    /// * `overwrite` - Policy consulted when the target path already exists
    pub async fn download_file(
        &self,
        node: &RemoteNode,
        download_to: impl AsRef<Path>,
        overwrite: Overwrite,
    ) -> Result<()> {
        if node.is_folder() {
            return self.download_folder(node, download_to, overwrite).await;
        }

        let mut target = download_to.as_ref().to_path_buf();
        if target.is_dir() {
            target.push(&node.title);
        }
        if target.exists() && !overwrite.should_overwrite(node, &target).await? {
            debug!(
                target = %target.display(),
                title = %node.title,
                "target exists and policy forbids overwrite, skipping"
            );
            return Ok(());
        }

        let content = self.api.download_content(&node.id).await?;
        tokio::fs::write(&target, content).await?;
        Ok(())
    }

    /// Download a batch of nodes into a directory.
    ///
    /// The directory is created if absent; a destination that exists but is
    /// not a directory is an error. Nodes are transferred strictly in order,
    /// and the first hard failure aborts the batch.
    pub async fn download_files(
        &self,
        nodes: &[RemoteNode],
        download_to: impl AsRef<Path>,
        overwrite: Overwrite,
    ) -> Result<()> {
        let dest = download_to.as_ref();
        if !dest.exists() {
            tokio::fs::create_dir_all(dest).await?;
        }
        if !dest.is_dir() {
            return Err(GDriveError::NotADirectory(dest.display().to_string()));
        }

        for node in nodes {
            self.download_file(node, dest, overwrite).await?;
        }
        Ok(())
    }

    /// Download a folder node, mirroring remote nesting into local
    /// directories.
    ///
    /// A directory named after the folder is created under `download_to`,
    /// then every non-trashed child is downloaded with the same policy.
    /// Subfolders recurse, and each child fully finishes before the next
    /// begins. An empty remote subfolder yields an empty local directory.
    pub async fn download_folder(
        &self,
        folder: &RemoteNode,
        download_to: impl AsRef<Path>,
        overwrite: Overwrite,
    ) -> Result<()> {
        self.download_folder_inner(folder, download_to.as_ref(), overwrite)
            .await
    }

    // Recursion through an async fn needs the boxed indirection.
    fn download_folder_inner<'a>(
        &'a self,
        folder: &'a RemoteNode,
        download_to: &'a Path,
        overwrite: Overwrite,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let target = download_to.join(&folder.title);
            tokio::fs::create_dir_all(&target).await?;

            for child in self.ls_in(folder, &[] as &[&str]).await? {
                if child.is_folder() {
                    self.download_folder_inner(&child, &target, overwrite)
                        .await?;
                } else {
                    self.download_file(&child, &target, overwrite).await?;
                }
            }
            Ok(())
        })
    }
}
