pub mod api_client;
pub mod file_upload;
pub mod transport;
