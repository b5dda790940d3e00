//! Drive API client and wire types.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{FileList, FileResource, ShortcutDetails};
