//! Shared response payload types for API handlers.
//!
//! Typed payloads instead of ad-hoc `serde_json::json!` bodies, so the wire
//! format is visible in one place.

use formbuilder_core::types::DbId;
use serde::Serialize;

/// Confirmation body for operations that return only a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body returned after a response submission is persisted.
#[derive(Debug, Serialize)]
pub struct SubmitAccepted {
    pub message: &'static str,
    pub id: DbId,
}

/// Body returned after an image upload.
#[derive(Debug, Serialize)]
pub struct UploadedImage {
    pub url: String,
}
