//! Route definitions for the `/exercises` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::exercises;
use crate::state::AppState;

/// Routes mounted at `/exercises`.
///
/// ```text
/// GET    /                  list (?language=&type=&status=)
/// POST   /                  create
/// POST   /generate          generate for a tandem pair
/// GET    /{id}              get
/// DELETE /{id}              delete
/// PUT    /{id}/status       update status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(exercises::list_exercises).post(exercises::create_exercise),
        )
        .route("/generate", post(exercises::generate_exercises))
        .route(
            "/{id}",
            get(exercises::get_exercise).delete(exercises::delete_exercise),
        )
        .route("/{id}/status", put(exercises::update_status))
}
