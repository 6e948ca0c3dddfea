//! Route definitions for cultural notes, idioms and fun facts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cultural;
use crate::state::AppState;

/// Routes mounted at `/cultural`.
///
/// ```text
/// GET    /notes/{language}           list notes
/// GET    /notes/detail/{id}          get note
/// DELETE /notes/detail/{id}          delete note
/// GET    /idioms/{language}          list idioms
/// GET    /idioms/detail/{id}         get idiom
/// DELETE /idioms/detail/{id}         delete idiom
/// GET    /fun-facts/{language}       list fun facts
/// GET    /fun-facts/detail/{id}      get fun fact
/// DELETE /fun-facts/detail/{id}      delete fun fact
/// POST   /generate/{language}        generate one of each
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes/{language}", get(cultural::list_notes))
        .route(
            "/notes/detail/{id}",
            get(cultural::get_note).delete(cultural::delete_note),
        )
        .route("/idioms/{language}", get(cultural::list_idioms))
        .route(
            "/idioms/detail/{id}",
            get(cultural::get_idiom).delete(cultural::delete_idiom),
        )
        .route("/fun-facts/{language}", get(cultural::list_fun_facts))
        .route(
            "/fun-facts/detail/{id}",
            get(cultural::get_fun_fact).delete(cultural::delete_fun_fact),
        )
        .route("/generate/{language}", post(cultural::generate))
}
