//! Upload operations.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use tracing::{debug, info};

use crate::drive::Drive;
use crate::error::{GDriveError, Result};
use crate::fs::node::RemoteNode;
use crate::fs::operations::overwrite::Overwrite;

impl Drive {
    /// Upload a local file into a remote folder.
    ///
    /// The remote name is `uploaded_name`, or the local basename when
    /// `None`. If a same-named child already exists under `upload_to`, the
    /// policy is consulted against that existing remote file; refusal is a
    /// `FileExists` error.
    ///
    /// Drive permits several files with the same title under one parent, so
    /// an allowed "overwrite" adds an additional copy; the pre-existing
    /// file is never deleted or replaced.
    ///
    /// # Arguments
    /// * `local_path` - The file to upload
    /// * `upload_to` - Remote folder to parent the new file under
    /// * `uploaded_name` - Optional remote name override
    /// * `overwrite` - Policy consulted when a same-named child exists
    pub async fn upload_file(
        &self,
        local_path: impl AsRef<Path>,
        upload_to: &RemoteNode,
        uploaded_name: Option<&str>,
        overwrite: Overwrite,
    ) -> Result<RemoteNode> {
        let local = local_path.as_ref();
        let filename = match uploaded_name {
            Some(name) => name.to_string(),
            None => local_basename(local)?,
        };

        info!(local = %local.display(), folder = %upload_to.title, "uploading file");

        if self.exists_in(upload_to, &[filename.as_str()]).await? {
            let existing = self.find_in(upload_to, &[filename.as_str()]).await?;
            if !overwrite.should_overwrite(&existing, local).await? {
                info!(
                    local = %local.display(),
                    folder = %upload_to.title,
                    "file already exists, refusing to upload"
                );
                return Err(GDriveError::FileExists(format!(
                    "'{}' already exists under '{}', not uploading with overwrite={:?}",
                    filename, upload_to.title, overwrite
                )));
            }
        }

        let content = tokio::fs::read(local).await?;
        let parent_id = self.true_id(upload_to).await?;
        let node = self
            .api
            .upload_content(&parent_id, &filename, &content)
            .await?;

        info!(local = %local.display(), folder = %upload_to.title, "upload finished");
        Ok(node)
    }

    /// Upload a local directory and its contents, preserving structure.
    ///
    /// A remote folder named after the local directory (or `uploaded_name`)
    /// is created under `upload_to`; with `reuse_folder` an existing one is
    /// reused instead, while `false` fails with `FolderExists`. The local
    /// tree is then walked child by child: subdirectories recurse (nested
    /// folders are always reused so the walk continues) and files go
    /// through [`upload_file`](Self::upload_file) with per-file
    /// `FileExists` swallowed so the rest of the folder still uploads.
    pub async fn upload_folder(
        &self,
        local_dir: impl AsRef<Path>,
        upload_to: &RemoteNode,
        uploaded_name: Option<&str>,
        overwrite: Overwrite,
        reuse_folder: bool,
    ) -> Result<RemoteNode> {
        let local = local_dir.as_ref();
        let name = match uploaded_name {
            Some(name) => name.to_string(),
            None => local_basename(local)?,
        };
        self.upload_folder_inner(local, upload_to, name, overwrite, reuse_folder)
            .await
    }

    // Recursion through an async fn needs the boxed indirection.
    fn upload_folder_inner<'a>(
        &'a self,
        local: &'a Path,
        upload_to: &'a RemoteNode,
        name: String,
        overwrite: Overwrite,
        reuse_folder: bool,
    ) -> Pin<Box<dyn Future<Output = Result<RemoteNode>> + Send + 'a>> {
        Box::pin(async move {
            let remote_folder = self.create_folder(upload_to, &name, reuse_folder).await?;

            let mut entries = tokio::fs::read_dir(local).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_dir() {
                    let child_name = local_basename(&path)?;
                    self.upload_folder_inner(&path, &remote_folder, child_name, overwrite, true)
                        .await?;
                } else {
                    match self.upload_file(&path, &remote_folder, None, overwrite).await {
                        Ok(_) => {}
                        Err(GDriveError::FileExists(reason)) => {
                            debug!(%reason, "skipping file during folder upload");
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
            Ok(remote_folder)
        })
    }
}

/// Final component of a local path, as the remote name.
fn local_basename(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            GDriveError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path {} has no file name", path.display()),
            ))
        })
}
