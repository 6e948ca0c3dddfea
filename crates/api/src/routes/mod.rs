pub mod cultural;
pub mod exercises;
pub mod health;
pub mod progress;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                           list, create
/// /users/{id}                                      get, replace, delete
/// /users/{id}/exercises                            exercises in the user's target language
///
/// /exercises                                       list (?language=&type=&status=), create
/// /exercises/generate                              generate for a tandem pair (POST)
/// /exercises/{id}                                  get, delete
/// /exercises/{id}/status                           update status (PUT)
///
/// /progress/achievements                           achievement catalog
/// /progress/{user_id}                              get (created on first access)
/// /progress/{user_id}/update-streak                count today's activity (POST)
/// /progress/{user_id}/complete-exercise/{ex_id}    credit an exercise (POST)
///
/// /cultural/notes/{language}                       list notes
/// /cultural/notes/detail/{id}                      get, delete
/// /cultural/idioms/{language}                      list idioms
/// /cultural/idioms/detail/{id}                     get, delete
/// /cultural/fun-facts/{language}                   list fun facts
/// /cultural/fun-facts/detail/{id}                  get, delete
/// /cultural/generate/{language}                    generate note, idiom and fun fact (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/exercises", exercises::router())
        .nest("/progress", progress::router())
        .nest("/cultural", cultural::router())
}
