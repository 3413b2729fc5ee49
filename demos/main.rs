use tracing_subscriber::EnvFilter;
use vtapi::{VtClient, VtResult};

#[tokio::main]
async fn main() -> VtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = VtClient::builder()
        .base_url("http://192.168.1.182:8080/vt")
        .access_key("0123456789abcdef")
        .build()?;

    match client.list().await {
        Some(state) => {
            println!("VMs: {}", state.vms.len());
            println!("Groups: {}", state.groups.len());
        }
        None => println!("Listing failed; run with RUST_LOG=vtapi=debug for details"),
    }

    Ok(())
}
