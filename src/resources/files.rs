use crate::{
    FileUpload, VtClient, core::infrastructure::file_upload::validate_file_name,
};
use reqwest::Method;
use serde_json::Value;
use std::path::Path;
use tracing::error;

impl VtClient {
    /// Lists the files stored on the service (uploads and exports).
    ///
    /// `GET {conn}/file`
    pub async fn listfiles(&self) -> Option<Value> {
        self.transport.send(Method::GET, "/file", None).await
    }

    /// Removes a stored file.
    ///
    /// `DELETE {conn}/file/{name}`
    pub async fn rmfile(&self, name: &str) -> Option<Value> {
        let path = file_path("rmfile", name)?;
        self.transport.send(Method::DELETE, &path, None).await
    }

    /// Retrieves the contents of a stored file.
    ///
    /// `GET {conn}/file/{name}`
    pub async fn download(&self, name: &str) -> Option<Vec<u8>> {
        let path = file_path("download", name)?;
        self.transport.fetch(&path).await
    }

    /// Sends a prepared upload.
    ///
    /// `POST {conn}/file/{fileName}` (multipart)
    pub async fn upload(&self, upload: FileUpload) -> Option<Value> {
        self.transport.upload(upload).await
    }

    /// Uploads in-memory contents under `file_name`, with extra text fields.
    pub async fn upload_bytes(
        &self,
        file_name: &str,
        contents: Vec<u8>,
        fields: &[(&str, &str)],
    ) -> Option<Value> {
        let upload = FileUpload::new(file_name, contents)
            .inspect_err(|e| error!(file = file_name, error = %e, "invalid upload"))
            .ok()?;
        let upload = fields
            .iter()
            .fold(upload, |upload, (key, value)| upload.field(*key, *value));
        self.upload(upload).await
    }

    /// Uploads a local file under its own file name, with extra text fields.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        fields: &[(&str, &str)],
    ) -> Option<Value> {
        let path = path.as_ref();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            error!(path = %path.display(), "upload source has no usable file name");
            return None;
        };
        let contents = tokio::fs::read(path)
            .await
            .inspect_err(|e| {
                error!(path = %path.display(), error = %e, "could not read upload source")
            })
            .ok()?;
        self.upload_bytes(file_name, contents, fields).await
    }
}

/// Path of a stored file. Names that would escape `/file/` are rejected.
fn file_path(operation: &str, name: &str) -> Option<String> {
    validate_file_name(name)
        .inspect_err(|e| error!(operation, file = name, error = %e, "invalid file name"))
        .ok()?;
    Some(format!("/file/{}", name))
}
