//! Route definitions for the mission catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{mission, queue};
use crate::state::AppState;

/// Routes mounted at `/missions`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// POST   /{id}/accept               -> accept_mission   (?character_id=)
/// POST   /{id}/start                -> start_mission    (?character_id=)
/// POST   /{id}/complete             -> complete_mission (?character_id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mission::list).post(mission::create))
        .route("/{id}", get(mission::get_by_id))
        .route("/{id}/accept", post(queue::accept_mission))
        .route("/{id}/start", post(queue::start_mission))
        .route("/{id}/complete", post(queue::complete_mission))
}
