//! Route definitions for characters and their mission queues.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{character, queue};
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /{id}                               -> get_by_id
/// GET    /{id}/missions                      -> list_for_character
/// GET    /{id}/missions/next                 -> next_for_character
/// POST   /{id}/missions/{mission_id}         -> accept_for_character
/// POST   /{id}/start                         -> start_next_for_character
/// POST   /{id}/complete                      -> complete_current_for_character
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list).post(character::create))
        .route("/{id}", get(character::get_by_id))
        .route("/{id}/missions", get(queue::list_for_character))
        .route("/{id}/missions/next", get(queue::next_for_character))
        .route(
            "/{id}/missions/{mission_id}",
            post(queue::accept_for_character),
        )
        .route("/{id}/start", post(queue::start_next_for_character))
        .route("/{id}/complete", post(queue::complete_current_for_character))
}
