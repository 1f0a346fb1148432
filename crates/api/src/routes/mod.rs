pub mod forms;
pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Multipart ceiling for the upload route. JSON endpoints keep the global
/// 5 MB default; image files get more headroom.
const UPLOAD_BODY_LIMIT: usize = 25 * 1024 * 1024;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /                        -> health check
///
/// POST   /forms                   -> create
/// GET    /forms                   -> list
/// GET    /forms/{id}              -> get_by_id
/// PUT    /forms/{id}              -> update
/// DELETE /forms/{id}              -> delete
/// POST   /forms/{id}/responses    -> submit
/// GET    /forms/{id}/responses    -> list_by_form
///
/// POST   /upload                  -> image upload (multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/forms", forms::router())
        .route(
            "/upload",
            post(upload::upload_image)
                .layer(axum::extract::DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}
