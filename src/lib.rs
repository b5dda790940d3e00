//! # gdrivelib
//!
//! Rust client library for path-based Google Drive access.
//!
//! ## Features
//!
//! - **Path resolution**: walk human-readable paths segment by segment
//!   (`find`, `ls`, `exists`), refusing to guess when a name is missing or
//!   duplicated. Shortcuts are followed to their target ids.
//! - **Transfers with overwrite policies**: download and upload files and
//!   whole folder trees, gated per file by an [`Overwrite`] policy
//!   (never / always / on size change / on checksum change).
//! - **Folder management**: create folders, or reuse existing ones by name.
//! - **Credential bootstrap**: load a stored OAuth token from disk and fail
//!   fast with `CredentialsNotFound` before touching the network.
//!
//! Every remote query is paced by a fixed small delay; operations run
//! strictly sequentially and nothing is retried internally.
//!
//! ## Example
//!
//! ```no_run
//! use gdrivelib::{Credentials, Drive, Overwrite};
//!
//! # async fn example() -> gdrivelib::Result<()> {
//! let drive = Drive::new(&Credentials::load("credentials.json")?)?;
//!
//! // Find the project folder shared into this account
//! let root = drive.get_root("lab-data", true).await?;
//!
//! // List and download
//! for node in drive.ls_in(&root, &["recordings"]).await? {
//!     println!("{} ({:?} bytes)", node.title, node.file_size);
//! }
//! let file = drive.find_in(&root, &["recordings", "day1.wav"]).await?;
//! drive.download_file(&file, "data/", Overwrite::Never).await?;
//!
//! // Upload into a (possibly pre-existing) results folder
//! let results = drive.create_folder(&root, "results", true).await?;
//! drive
//!     .upload_file("out/summary.csv", &results, None, Overwrite::OnChecksumChange)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod credentials;
pub mod drive;
pub mod error;
pub mod fs;
pub mod http;

// Re-export commonly used types
pub use credentials::Credentials;
pub use drive::Drive;
pub use error::{GDriveError, Result};
pub use fs::{NodeKind, Overwrite, RemoteNode};
