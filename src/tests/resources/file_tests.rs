use super::{create_test_client, key_path};
use crate::FileUpload;
use std::io::Write;
use wiremock::{
    Mock, MockServer, Request, ResponseTemplate,
    matchers::{method, path},
};

fn body_contains(needle: &'static str) -> impl Fn(&Request) -> bool + Send + Sync + 'static {
    move |req: &Request| String::from_utf8_lossy(&req.body).contains(needle)
}

#[tokio::test]
async fn test_listfiles_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(key_path("/file")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            "debian.iso",
            "ubuntu.json"
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let files = client.listfiles().await.unwrap();
    assert_eq!(files, serde_json::json!(["debian.iso", "ubuntu.json"]));
}

#[tokio::test]
async fn test_rmfile_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("DELETE"))
        .and(path(key_path("/file/debian.iso")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"removed": true})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let ack = client.rmfile("debian.iso").await.unwrap();
    assert_eq!(ack["removed"], true);
}

#[tokio::test]
async fn test_download_returns_contents() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(key_path("/file/ubuntu.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name":"ubuntu-vm"}"#))
        .mount(&mock_server)
        .await;

    let contents = client.download("ubuntu.json").await.unwrap();
    assert_eq!(contents, br#"{"name":"ubuntu-vm"}"#.to_vec());
}

#[tokio::test]
async fn test_download_missing_file_returns_none() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(key_path("/file/missing.json")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    assert!(client.download("missing.json").await.is_none());
}

#[tokio::test]
async fn test_upload_bytes_sends_multipart() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(key_path("/file/notes.txt")))
        .and(|req: &Request| {
            req.headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with("multipart/form-data"))
        })
        .and(body_contains("name=\"file\"; filename=\"notes.txt\""))
        .and(body_contains("hello vt"))
        .and(body_contains("name=\"kind\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"stored": "notes.txt"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let ack = client
        .upload_bytes("notes.txt", b"hello vt".to_vec(), &[("kind", "text")])
        .await
        .unwrap();
    assert_eq!(ack["stored"], "notes.txt");
}

#[tokio::test]
async fn test_upload_file_from_disk() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("tiny.iso");
    let mut file = std::fs::File::create(&file_path).unwrap();
    file.write_all(b"ISO-CONTENTS").unwrap();
    drop(file);

    Mock::given(method("POST"))
        .and(path(key_path("/file/tiny.iso")))
        .and(body_contains("ISO-CONTENTS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ack = client.upload_file(&file_path, &[]).await.unwrap();
    assert_eq!(ack["ok"], true);
}

#[tokio::test]
async fn test_upload_missing_file_returns_none() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.iso");
    assert!(client.upload_file(&missing, &[]).await.is_none());
    assert!(client.upload_bytes("../escape", Vec::new(), &[]).await.is_none());
}

#[tokio::test]
async fn test_upload_prepared() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(key_path("/file/vm.json")))
        .and(body_contains("name=\"owner\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let upload = FileUpload::new("vm.json", b"{}".to_vec())
        .unwrap()
        .field("owner", "ops");
    assert!(client.upload(upload).await.is_some());
}

#[tokio::test]
async fn test_unsafe_file_names_send_nothing() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(0)
        .mount(&mock_server)
        .await;

    for name in ["../list", "..", "a?b", "a#b", ""] {
        assert!(client.rmfile(name).await.is_none(), "rmfile({:?})", name);
        assert!(client.download(name).await.is_none(), "download({:?})", name);
    }
}
