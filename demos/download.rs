//! Example: Download a file or folder by path
//!
//! Usage:
//!   cargo run --example download -- --credentials credentials.json <REMOTE_PATH> <LOCAL_PATH>
//!
//! REMOTE_PATH uses '/' separators, e.g. "recordings/day1.wav".

use gdrivelib::{Credentials, Drive, Overwrite};
use std::env;
use std::process;

const USAGE: &str =
    "Usage: cargo run --example download -- --credentials CREDENTIALS <REMOTE_PATH> <LOCAL_PATH>";

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    let mut credentials_path = "credentials.json".to_string();
    let mut positionals = Vec::new();

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
            arg => {
                positionals.push(arg.to_string());
                i += 1;
            }
        }
    }

    if positionals.len() != 2 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }
    let segments: Vec<&str> = positionals[0].split('/').filter(|s| !s.is_empty()).collect();
    let local_path = &positionals[1];

    let credentials = Credentials::load(&credentials_path).expect("Failed to load credentials");
    let drive = Drive::new(&credentials).expect("Failed to create client");

    let node = drive.find(&segments).await.expect("Path not found");
    println!("Downloading {} to {}...", node.title, local_path);
    drive
        .download_file(&node, local_path, Overwrite::Never)
        .await
        .expect("Download failed");
    println!("Done.");
}
