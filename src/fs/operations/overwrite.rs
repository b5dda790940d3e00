//! Overwrite policy for transfers.

use std::path::Path;

use crate::error::Result;
use crate::fs::node::RemoteNode;

/// Rule deciding whether a transfer proceeds when a same-named target
/// already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Keep the existing target, skip the transfer.
    Never,
    /// Transfer regardless of the existing target.
    Always,
    /// Transfer only when local byte length and remote-reported size differ.
    OnSizeChange,
    /// Transfer only when local content md5 and remote-reported checksum
    /// differ.
    OnChecksumChange,
}

impl Overwrite {
    /// Decide whether a transfer may replace the existing target.
    ///
    /// `remote` is the remote side of the comparison (the file being
    /// downloaded, or the same-named file already on the drive when
    /// uploading); `local` is the local file. A remote node that reports no
    /// size or checksum counts as changed.
    pub async fn should_overwrite(&self, remote: &RemoteNode, local: &Path) -> Result<bool> {
        match self {
            Overwrite::Never => Ok(false),
            Overwrite::Always => Ok(true),
            Overwrite::OnSizeChange => {
                let local_size = tokio::fs::metadata(local).await?.len();
                Ok(remote.file_size != Some(local_size))
            }
            Overwrite::OnChecksumChange => {
                let local_md5 = file_md5(local).await?;
                Ok(match &remote.md5_checksum {
                    Some(remote_md5) => !remote_md5.eq_ignore_ascii_case(&local_md5),
                    None => true,
                })
            }
        }
    }
}

/// Hex md5 of a local file's content.
async fn file_md5(path: &Path) -> Result<String> {
    let content = tokio::fs::read(path).await?;
    Ok(format!("{:x}", md5::compute(content)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(file_size: Option<u64>, md5_checksum: Option<&str>) -> RemoteNode {
        RemoteNode {
            id: "f1".to_string(),
            title: "a.bin".to_string(),
            mime_type: Some("application/octet-stream".to_string()),
            file_size,
            md5_checksum: md5_checksum.map(|c| c.to_string()),
        }
    }

    fn local_file(content: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.bin");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn never_and_always_ignore_content() {
        let (_dir, path) = local_file(b"hello");
        let node = remote(Some(5), Some("5d41402abc4b2a76b9719d911017c592"));

        assert!(!Overwrite::Never.should_overwrite(&node, &path).await.unwrap());
        assert!(Overwrite::Always.should_overwrite(&node, &path).await.unwrap());
    }

    #[tokio::test]
    async fn size_change_compares_byte_length() {
        let (_dir, path) = local_file(b"hello");

        let same = remote(Some(5), None);
        assert!(!Overwrite::OnSizeChange.should_overwrite(&same, &path).await.unwrap());

        let different = remote(Some(6), None);
        assert!(Overwrite::OnSizeChange.should_overwrite(&different, &path).await.unwrap());

        let unreported = remote(None, None);
        assert!(Overwrite::OnSizeChange.should_overwrite(&unreported, &path).await.unwrap());
    }

    #[tokio::test]
    async fn checksum_change_compares_md5() {
        let (_dir, path) = local_file(b"hello");

        // md5("hello")
        let same = remote(None, Some("5d41402abc4b2a76b9719d911017c592"));
        assert!(!Overwrite::OnChecksumChange.should_overwrite(&same, &path).await.unwrap());

        let same_upper = remote(None, Some("5D41402ABC4B2A76B9719D911017C592"));
        assert!(!Overwrite::OnChecksumChange.should_overwrite(&same_upper, &path).await.unwrap());

        let different = remote(None, Some("00000000000000000000000000000000"));
        assert!(Overwrite::OnChecksumChange.should_overwrite(&different, &path).await.unwrap());

        let unreported = remote(None, None);
        assert!(Overwrite::OnChecksumChange.should_overwrite(&unreported, &path).await.unwrap());
    }
}
