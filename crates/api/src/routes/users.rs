//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{exercises, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                  list
/// POST   /                  create
/// GET    /{id}              get
/// PUT    /{id}              replace
/// DELETE /{id}              delete
/// GET    /{id}/exercises    exercises in the user's target language
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/{id}/exercises", get(exercises::list_for_user))
}
