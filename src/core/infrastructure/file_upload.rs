use crate::core::domain::error::ValidationError;

/// A file to be sent to the service as a multipart form.
///
/// The contents go into the `file` part; every extra field becomes a text part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    file_name: String,
    contents: Vec<u8>,
    fields: Vec<(String, String)>,
}

impl FileUpload {
    /// Creates an upload with no extra fields.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the file name is empty, a dot segment, or
    /// contains a path or URL separator, since it becomes the last element of
    /// the upload URL.
    pub fn new(file_name: impl Into<String>, contents: Vec<u8>) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        validate_file_name(&file_name)?;
        Ok(Self {
            file_name,
            contents,
            fields: Vec::new(),
        })
    }

    /// Adds a text field sent alongside the file.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Path the upload is posted to.
    pub(crate) fn path(&self) -> String {
        format!("/file/{}", self.file_name)
    }

    /// Builds the multipart form.
    pub(crate) fn into_form(self) -> reqwest::multipart::Form {
        let part = reqwest::multipart::Part::bytes(self.contents).file_name(self.file_name);
        self.fields
            .into_iter()
            .fold(reqwest::multipart::Form::new().part("file", part), |form, (key, value)| {
                form.text(key, value)
            })
    }
}

pub(crate) fn validate_file_name(file_name: &str) -> Result<(), ValidationError> {
    if file_name.is_empty() {
        return Err(ValidationError::Field {
            field: "file_name".to_string(),
            message: "File name cannot be empty".to_string(),
        });
    }
    if file_name == "." || file_name == ".." || file_name.contains(['/', '\\', '?', '#']) {
        return Err(ValidationError::Format(format!(
            "File name cannot contain path or URL separators: {}",
            file_name
        )));
    }
    Ok(())
}
