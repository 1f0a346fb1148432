//! Handlers for response submission and retrieval.

use std::net::SocketAddr;

use axum::extract::rejection::ExtensionRejection;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use formbuilder_core::error::CoreError;
use formbuilder_core::types::DbId;
use formbuilder_core::validation;
use formbuilder_db::models::response::{CreateResponse, FormResponse, SubmissionContext};
use formbuilder_db::repositories::{FormRepo, ResponseRepo};

use crate::error::{AppError, AppResult};
use crate::response::SubmitAccepted;
use crate::state::AppState;

/// POST /api/forms/{id}/responses
///
/// Validates every submitted answer against the form's current question set
/// before persisting; one unknown question id rejects the whole submission.
pub async fn submit(
    State(state): State<AppState>,
    Path(form_id): Path<DbId>,
    connect_info: Result<ConnectInfo<SocketAddr>, ExtensionRejection>,
    headers: HeaderMap,
    Json(input): Json<CreateResponse>,
) -> AppResult<(StatusCode, Json<SubmitAccepted>)> {
    let form = FormRepo::find_by_id(&state.pool, form_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Form",
            id: form_id,
        }))?;

    validation::validate_answers(&form.questions.0, &input.answers)?;

    let peer = connect_info.ok().map(|ConnectInfo(addr)| addr);
    let context = submission_context(&headers, peer);
    let response = ResponseRepo::create(&state.pool, form_id, &input, &context).await?;
    tracing::info!(
        form_id = %form_id,
        response_id = %response.id,
        answers = response.answers.0.len(),
        "Response saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitAccepted {
            message: "Response saved",
            id: response.id,
        }),
    ))
}

/// GET /api/forms/{id}/responses
///
/// Unfiltered, unpaginated. A form id with no responses (including a deleted
/// form) yields an empty array.
pub async fn list_by_form(
    State(state): State<AppState>,
    Path(form_id): Path<DbId>,
) -> AppResult<Json<Vec<FormResponse>>> {
    let responses = ResponseRepo::list_by_form(&state.pool, form_id).await?;
    Ok(Json(responses))
}

/// Capture requester context. The client IP comes from the first hop of
/// `x-forwarded-for` when a proxy sets it, otherwise from the socket peer
/// address, so direct connections record an address too.
fn submission_context(headers: &HeaderMap, peer: Option<SocketAddr>) -> SubmissionContext {
    let ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| peer.map(|addr| addr.ip().to_string()));

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    SubmissionContext { ip, user_agent }
}
