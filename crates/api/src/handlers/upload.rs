//! Handler for the image-upload passthrough.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::UploadedImage;
use crate::state::AppState;

/// POST /api/upload
///
/// Accepts a multipart body with a `file` field (and an optional `folder`
/// hint), streams it to the storage provider, and returns the public URL.
/// No content-type or size validation happens here beyond the route's body
/// limit; the provider is the authority on what it accepts.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadedImage>> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut folder: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((filename, data.to_vec()));
            }
            "folder" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                folder = Some(text);
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) = file.ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;

    let url = state.images.upload(data, filename, folder.as_deref()).await?;
    Ok(Json(UploadedImage { url }))
}
