//! Handlers for the `/forms` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use formbuilder_core::error::CoreError;
use formbuilder_core::types::DbId;
use formbuilder_core::validation;
use formbuilder_db::models::form::{CreateForm, Form, UpdateForm};
use formbuilder_db::repositories::FormRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/forms
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateForm>,
) -> AppResult<(StatusCode, Json<Form>)> {
    validation::validate_form_title(&input.title)?;
    validation::validate_question_ids(&input.questions)?;

    let form = FormRepo::create(&state.pool, &input).await?;
    tracing::info!(form_id = %form.id, questions = form.questions.0.len(), "Form created");
    Ok((StatusCode::CREATED, Json(form)))
}

/// GET /api/forms
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Form>>> {
    let forms = FormRepo::list(&state.pool).await?;
    Ok(Json(forms))
}

/// GET /api/forms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Form>> {
    let form = FormRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;
    Ok(Json(form))
}

/// PUT /api/forms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateForm>,
) -> AppResult<Json<Form>> {
    if let Some(title) = &input.title {
        validation::validate_form_title(title)?;
    }
    if let Some(questions) = &input.questions {
        validation::validate_question_ids(questions)?;
    }

    let form = FormRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;
    Ok(Json(form))
}

/// DELETE /api/forms/{id}
///
/// Removes the form only; its responses are retained as history.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = FormRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(form_id = %id, "Form deleted");
        Ok(Json(MessageResponse {
            message: "Form deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Form", id }))
    }
}
