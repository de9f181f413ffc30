use axum::extract::Multipart;
use serde::de::DeserializeOwned;

use super::response::ApiError;
use crate::upload::UploadedFile;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Body of a create or update request that may carry a photo: a `payload`
/// part holding JSON and an optional `file` part.
#[derive(Debug)]
pub struct MultipartForm<T> {
    pub payload: Option<T>,
    pub file: Option<UploadedFile>,
}

impl<T> MultipartForm<T> {
    pub fn require_payload(self) -> Result<(T, Option<UploadedFile>), ApiError> {
        let payload = self
            .payload
            .ok_or_else(|| ApiError::bad_request("Missing payload field"))?;
        Ok((payload, self.file))
    }
}

impl<T: Default> MultipartForm<T> {
    pub fn payload_or_default(self) -> (T, Option<UploadedFile>) {
        (self.payload.unwrap_or_default(), self.file)
    }
}

pub async fn parse_form<T: DeserializeOwned>(
    mut multipart: Multipart,
) -> Result<MultipartForm<T>, ApiError> {
    let mut form = MultipartForm {
        payload: None,
        file: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("payload") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid payload field: {e}")))?;
                let payload = serde_json::from_str(&text)
                    .map_err(|e| ApiError::bad_request(format!("Invalid payload: {e}")))?;
                form.payload = Some(payload);
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid file field: {e}")))?;

                if bytes.len() > MAX_UPLOAD_BYTES {
                    return Err(ApiError::bad_request("File exceeds the 10 MiB limit"));
                }
                // Browsers send an empty, unnamed part when no file was chosen.
                if filename.is_empty() {
                    if !bytes.is_empty() {
                        return Err(ApiError::bad_request("File part has no filename"));
                    }
                    continue;
                }
                form.file = Some(UploadedFile::new(filename, bytes));
            }
            _ => {}
        }
    }

    Ok(form)
}
