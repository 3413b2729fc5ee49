//! Virtual machine operations using the VT client.
//!
//! This program lists the VMs known to a VT endpoint, prints their
//! parameters, and demonstrates creation, bulk updates and removal.

use tracing_subscriber::EnvFilter;
use vtapi::{Action, Params, VtClient, VtResult};

#[tokio::main]
async fn main() -> VtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = VtClient::builder()
        .base_url("http://192.168.1.182:8080/vt")
        .access_key("0123456789abcdef")
        .build()?;

    // 1. List all VMs.
    println!("Listing VMs:");
    let Some(state) = client.list().await else {
        println!("  listing failed");
        return Ok(());
    };

    for vm in &state.vms {
        println!(
            "  • {} [{}] RAM: {} KB, HDD: {} KB, CPU: {}% x {} cores, IP: {}",
            vm.name().unwrap_or("?"),
            vm.status(),
            vm.ram().unwrap_or(0),
            vm.hdd().unwrap_or(0),
            vm.cpu().unwrap_or(0),
            vm.cores().unwrap_or(0),
            vm.ip().unwrap_or("-"),
        );
    }

    if state.vms.is_empty() {
        println!("  No VMs found.");
    }

    // 2. Prepare a new VM. Validation happens here, before any request.
    let params = Params::builder()
        .name("demo-vm")
        .ram(2048)
        .hdd(8192)
        .cpu(25)
        .cores(1)
        .ip("10.0.0.42")
        .iso("debian.iso")
        .action(Action::Start)
        .build()?;
    println!("\nPrepared VM '{}'", params.name().unwrap_or_default());

    // An out-of-range value is rejected immediately.
    if let Err(e) = Params::builder().name("tiny").ram(512).build() {
        println!("Rejected: {}", e);
    }

    // Uncomment to execute:
    // let state = client.add(&params).await;
    //
    // Suspend every VM at once, leaving other parameters untouched:
    // let suspend = Params::builder().action(Action::Suspend).build()?;
    // let names: Vec<String> = state.names().map(str::to_string).collect();
    // client.set(&suspend, names).await;
    //
    // client.rm(["demo-vm"]).await;

    Ok(())
}
