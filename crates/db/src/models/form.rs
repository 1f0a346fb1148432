//! Form entity model and DTOs.

use formbuilder_core::question::Question;
use formbuilder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A form row from the `forms` table.
///
/// Questions are stored as an ordered JSONB array; their order is the
/// display order.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub header_image: Option<String>,
    pub questions: Json<Vec<Question>>,
    /// Open-ended key/value map, opaque to the server.
    pub meta: Json<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateForm {
    pub title: String,
    pub description: Option<String>,
    pub header_image: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub meta: Option<serde_json::Value>,
}

/// DTO for updating an existing form. All fields are optional; omitted
/// fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub header_image: Option<String>,
    pub questions: Option<Vec<Question>>,
    pub meta: Option<serde_json::Value>,
}
