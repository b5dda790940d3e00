//! Example: List a Drive folder by path
//!
//! Usage:
//!   cargo run --example ls -- --credentials credentials.json [PATH_SEGMENT ...]

use gdrivelib::{Credentials, Drive};
use std::env;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    let mut credentials_path = "credentials.json".to_string();
    let mut segments = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--credentials" | "-c" => {
                credentials_path = args
                    .get(i + 1)
                    .cloned()
                    .expect("--credentials requires a path");
                i += 2;
            }
            segment => {
                segments.push(segment.to_string());
                i += 1;
            }
        }
    }

    let credentials = Credentials::load(&credentials_path).expect("Failed to load credentials");
    let drive = Drive::new(&credentials).expect("Failed to create client");

    let nodes = drive.ls(&segments).await.expect("Listing failed");
    if nodes.is_empty() {
        println!("<folder empty>");
        return;
    }
    for (i, node) in nodes.iter().enumerate() {
        println!(
            "{}:\t{}\t\t{}\t{}",
            i,
            node.title,
            node.mime_type.as_deref().unwrap_or("-"),
            node.file_size
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
}
