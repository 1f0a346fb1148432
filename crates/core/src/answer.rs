//! Submitted answer model.

use serde::{Deserialize, Serialize};

/// One `{questionId, value}` pair within a response.
///
/// The value shape depends on the referenced question's kind (a string for
/// text/cloze, a bool for true/false, an array for multiple choice, an
/// object for categorize), so it stays free-form JSON here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Optional identity attached to a submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Responder {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}
