//! Repository for the `responses` table.

use formbuilder_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::response::{CreateResponse, FormResponse, SubmissionContext};

const COLUMNS: &str = "id, form_id, responder, answers, ip, user_agent, submitted_at";

/// Provides persistence for submitted responses. Responses are write-once:
/// there is no update path.
pub struct ResponseRepo;

impl ResponseRepo {
    /// Insert a new response for a form, returning the created row.
    pub async fn create(
        pool: &PgPool,
        form_id: DbId,
        input: &CreateResponse,
        context: &SubmissionContext,
    ) -> Result<FormResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO responses (form_id, responder, answers, ip, user_agent)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormResponse>(&query)
            .bind(form_id)
            .bind(input.responder.as_ref().map(Json))
            .bind(Json(&input.answers))
            .bind(&context.ip)
            .bind(&context.user_agent)
            .fetch_one(pool)
            .await
    }

    /// List all responses for a form in submission order.
    pub async fn list_by_form(
        pool: &PgPool,
        form_id: DbId,
    ) -> Result<Vec<FormResponse>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM responses WHERE form_id = $1 ORDER BY submitted_at");
        sqlx::query_as::<_, FormResponse>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await
    }
}
