use axum::routing::{get, post};
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/progress`.
///
/// ```text
/// GET    /achievements                                 achievement catalog
/// GET    /{user_id}                                    get or create
/// POST   /{user_id}/update-streak                      count today's activity
/// POST   /{user_id}/complete-exercise/{exercise_id}    credit an exercise
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/achievements", get(progress::list_achievements))
        .route("/{user_id}", get(progress::get_progress))
        .route("/{user_id}/update-streak", post(progress::update_streak))
        .route(
            "/{user_id}/complete-exercise/{exercise_id}",
            post(progress::complete_exercise),
        )
}
