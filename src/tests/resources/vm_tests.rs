use super::{create_test_client, key_path};
use crate::{Action, Params};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn sample_state() -> serde_json::Value {
    serde_json::json!({
        "vms": [
            {
                "name": "ubuntu-vm",
                "ram": 4096,
                "hdd": 20480,
                "cpu": 50,
                "cores": 2,
                "ip": "192.168.1.10",
                "iso": "ubuntu.iso",
                "status": "start"
            },
            {
                "name": "windows-vm",
                "ram": 8192,
                "hdd": 40960,
                "cpu": 80,
                "cores": 4,
                "ip": "192.168.1.11",
                "status": "stop"
            }
        ],
        "groups": [
            {"name": "desktops", "members": ["ubuntu-vm", "windows-vm"]}
        ]
    })
}

fn complete_params() -> Params {
    Params::builder()
        .name("vm1")
        .ram(2048)
        .hdd(1024)
        .cpu(50)
        .cores(1)
        .ip("1.2.3.4")
        .iso("debian.iso")
        .action(Action::Start)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_list_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(key_path("/list")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_state()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = client.list().await.unwrap();
    assert_eq!(state.vms.len(), 2);
    assert_eq!(state.groups.len(), 1);

    let vm1 = state.vm("ubuntu-vm").unwrap();
    assert_eq!(vm1.ram(), Some(4096));
    assert_eq!(vm1.hdd(), Some(20480));
    assert_eq!(vm1.cpu(), Some(50));
    assert_eq!(vm1.cores(), Some(2));
    assert_eq!(vm1.ip(), Some("192.168.1.10"));
    assert_eq!(vm1.iso(), Some("ubuntu.iso"));
    assert_eq!(vm1.status(), Action::Start);

    let vm2 = state.vm("windows-vm").unwrap();
    assert_eq!(vm2.iso(), None);
    assert_eq!(vm2.status(), Action::Stop);

    let group = state.group("desktops").unwrap();
    assert_eq!(group.members, vec!["ubuntu-vm", "windows-vm"]);
}

#[tokio::test]
async fn test_list_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(key_path("/list")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "vms": [],
            "groups": []
        })))
        .mount(&mock_server)
        .await;

    let state = client.list().await.unwrap();
    assert!(state.vms.is_empty());
    assert!(state.groups.is_empty());
}

#[tokio::test]
async fn test_list_server_error_returns_none() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(key_path("/list")))
        .respond_with(ResponseTemplate::new(403).set_body_string("bad key"))
        .mount(&mock_server)
        .await;

    assert!(client.list().await.is_none());
}

#[tokio::test]
async fn test_add_sends_params() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(key_path("/add")))
        .and(body_json(serde_json::json!({
            "name": "vm1",
            "ram": 2048,
            "hdd": 1024,
            "cpu": 50,
            "cores": 1,
            "ip": "1.2.3.4",
            "iso": "debian.iso",
            "action": "start",
            "status": "stop"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_state()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = client.add(&complete_params()).await.unwrap();
    assert_eq!(state.vms.len(), 2);
}

#[tokio::test]
async fn test_set_sends_partial_params_and_names() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(key_path("/set")))
        .and(body_json(serde_json::json!({
            "ram": 8192,
            "action": "suspend",
            "status": "stop",
            "names": ["ubuntu-vm", "windows-vm"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_state()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = Params::builder()
        .ram(8192)
        .action("suspend")
        .build()
        .unwrap();
    let state = client.set(&params, ["ubuntu-vm", "windows-vm"]).await;
    assert!(state.is_some());
}

#[tokio::test]
async fn test_rm_sends_removal_request() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(key_path("/rm")))
        .and(body_json(serde_json::json!({
            "name": "toRemove",
            "elements": ["vm1", "vm2"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "vms": [],
            "groups": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = client.rm(["vm1", "vm2"]).await.unwrap();
    assert!(state.vms.is_empty());
}

#[tokio::test]
async fn test_import_and_export() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(key_path("/import")))
        .and(body_json(serde_json::json!({
            "name": "clone",
            "fileName": "ubuntu.json"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_state()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(key_path("/export")))
        .and(body_json(serde_json::json!({
            "name": "ubuntu-vm",
            "fileName": "ubuntu.json"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"file": "ubuntu.json"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let exported = client.vtexport("ubuntu-vm", "ubuntu.json").await.unwrap();
    assert_eq!(exported["file"], "ubuntu.json");

    let state = client.vtimport("clone", "ubuntu.json").await.unwrap();
    assert_eq!(state.vms.len(), 2);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(key_path("/list")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_state()))
        .expect(10)
        .mount(&mock_server)
        .await;

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.list().await })
        })
        .collect();

    for handle in handles {
        let state = handle.await.unwrap().unwrap();
        assert_eq!(state.vms.len(), 2);
    }
}
