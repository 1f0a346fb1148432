//! Repository for the `forms` table.

use formbuilder_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::form::{CreateForm, Form, UpdateForm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, header_image, questions, meta, created_at, updated_at";

/// Provides CRUD operations for forms.
pub struct FormRepo;

impl FormRepo {
    /// Insert a new form, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateForm) -> Result<Form, sqlx::Error> {
        let query = format!(
            "INSERT INTO forms (title, description, header_image, questions, meta)
             VALUES ($1, $2, $3, $4, COALESCE($5, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.header_image)
            .bind(Json(&input.questions))
            .bind(input.meta.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// Find a form by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE id = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all forms ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms ORDER BY created_at DESC");
        sqlx::query_as::<_, Form>(&query).fetch_all(pool).await
    }

    /// Update a form. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateForm,
    ) -> Result<Option<Form>, sqlx::Error> {
        let query = format!(
            "UPDATE forms SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                header_image = COALESCE($4, header_image),
                questions = COALESCE($5, questions),
                meta = COALESCE($6, meta),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.header_image)
            .bind(input.questions.as_ref().map(Json))
            .bind(input.meta.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a form by id. Returns `true` if a row was removed.
    ///
    /// Responses referencing the form are left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
