//! Remote folder creation.

use crate::drive::Drive;
use crate::error::{GDriveError, Result};
use crate::fs::node::RemoteNode;

impl Drive {
    /// Create a folder under a remote directory.
    ///
    /// # Arguments
    /// * `create_in` - The folder to create the new folder in (e.g. the
    ///   output of [`find`](Self::find) or a previous `create_folder`)
    /// * `folder_name` - Name of the folder to create
    /// * `return_if_exists` - Return the existing folder if one by that
    ///   name is already there; `false` fails with `FolderExists` instead
    pub async fn create_folder(
        &self,
        create_in: &RemoteNode,
        folder_name: &str,
        return_if_exists: bool,
    ) -> Result<RemoteNode> {
        if self.exists_in(create_in, &[folder_name]).await? {
            if return_if_exists {
                return self.find_in(create_in, &[folder_name]).await;
            }
            return Err(GDriveError::FolderExists(format!(
                "'{}' already exists under '{}'",
                folder_name, create_in.title
            )));
        }

        let parent_id = self.true_id(create_in).await?;
        self.api.create_folder(&parent_id, folder_name).await
    }
}
