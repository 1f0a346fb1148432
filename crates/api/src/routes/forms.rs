//! Route definitions for the `/forms` resource, including the nested
//! response submission endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::{form, response};
use crate::state::AppState;

/// Routes mounted at `/forms`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
///
/// POST   /{id}/responses   -> submit
/// GET    /{id}/responses   -> list_by_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(form::list).post(form::create))
        .route(
            "/{id}",
            get(form::get_by_id).put(form::update).delete(form::delete),
        )
        .route(
            "/{id}/responses",
            get(response::list_by_form).post(response::submit),
        )
}
