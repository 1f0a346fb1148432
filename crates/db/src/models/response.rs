//! Response entity model and DTOs.

use formbuilder_core::answer::{Answer, Responder};
use formbuilder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A response row from the `responses` table.
///
/// Responses are immutable after creation and reference their form by id
/// only, so they survive form deletion.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: DbId,
    pub form_id: DbId,
    pub responder: Option<Json<Responder>>,
    pub answers: Json<Vec<Answer>>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub submitted_at: Timestamp,
}

/// DTO for submitting a response against a form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub answers: Vec<Answer>,
    pub responder: Option<Responder>,
}

/// Request context captured alongside a submission.
#[derive(Debug, Clone, Default)]
pub struct SubmissionContext {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}
