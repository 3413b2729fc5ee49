//! Uploading ISO images and moving VM descriptions through files.

use std::env;
use tracing_subscriber::EnvFilter;
use vtapi::{VtClient, VtResult};

#[tokio::main]
async fn main() -> VtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = VtClient::new("http://192.168.1.182:8080/vt/0123456789abcdef")?;

    // 1. Upload an ISO given on the command line.
    if let Some(iso) = env::args().nth(1) {
        match client.upload_file(&iso, &[("kind", "iso")]).await {
            Some(ack) => println!("Uploaded {}: {}", iso, ack),
            None => println!("Upload of {} failed", iso),
        }
    }

    // 2. Export a VM, download the description, and import it as a copy.
    if client.vtexport("web-1", "web-1.json").await.is_some() {
        if let Some(bytes) = client.download("web-1.json").await {
            println!("web-1.json: {}", String::from_utf8_lossy(&bytes));
        }
        if client.vtimport("web-1-copy", "web-1.json").await.is_some() {
            println!("Imported web-1-copy");
        }
    }

    // 3. Show and clean up stored files.
    if let Some(files) = client.listfiles().await {
        println!("Stored files: {}", files);
    }
    client.rmfile("web-1.json").await;

    Ok(())
}
