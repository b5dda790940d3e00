//! Example: Upload a local file into a Drive folder
//!
//! Usage:
//!   cargo run --example upload -- --credentials credentials.json <LOCAL_PATH> <REMOTE_FOLDER_PATH>

use gdrivelib::{Credentials, Drive, Overwrite};
use std::env;
use std::process;

const USAGE: &str =
    "Usage: cargo run --example upload -- --credentials CREDENTIALS <LOCAL_PATH> <REMOTE_FOLDER_PATH>";

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
    let local_path = &positionals[0];
    let segments: Vec<&str> = positionals[1].split('/').filter(|s| !s.is_empty()).collect();

    let credentials = Credentials::load(&credentials_path).expect("Failed to load credentials");
    let drive = Drive::new(&credentials).expect("Failed to create client");

    let folder = drive.find(&segments).await.expect("Folder not found");
    let node = drive
        .upload_file(local_path, &folder, None, Overwrite::OnChecksumChange)
        .await
        .expect("Upload failed");
    println!("Uploaded as {} (id {})", node.title, node.id);
}
