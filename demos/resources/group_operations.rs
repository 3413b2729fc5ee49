//! Grouping VMs with the VT client.

use tracing_subscriber::EnvFilter;
use vtapi::{VtClient, VtResult};

#[tokio::main]
async fn main() -> VtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = VtClient::new("http://192.168.1.182:8080/vt/0123456789abcdef")?;

    let Some(state) = client.link(["web-1", "web-2"], "web").await else {
        println!("link failed");
        return Ok(());
    };

    for group in &state.groups {
        println!("{}: {}", group.name, group.members.join(", "));
    }

    // Groups may contain other groups.
    if client.link(["web"], "production").await.is_some() {
        println!("'web' is now part of 'production'");
    }

    if client.unlink(["web-2"], "web").await.is_some() {
        println!("'web-2' left 'web'");
    }

    Ok(())
}
