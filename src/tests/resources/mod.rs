mod file_tests;
mod vm_tests;

use crate::VtClient;
use wiremock::MockServer;

/// Access key segment used by every test client.
pub(super) const TEST_KEY: &str = "test-key";

pub(super) fn create_test_client(mock_server: &MockServer) -> VtClient {
    VtClient::builder()
        .base_url(mock_server.uri())
        .access_key(TEST_KEY)
        .build()
        .unwrap()
}

pub(super) fn key_path(suffix: &str) -> String {
    format!("/{}{}", TEST_KEY, suffix)
}
