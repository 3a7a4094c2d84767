pub mod character;
pub mod mission;
pub mod service;

use axum::Router;

use crate::state::AppState;

/// Mount point of the versioned API.
pub const API_PREFIX: &str = "/api/v1";

/// Build the route tree mounted at [`API_PREFIX`].
///
/// Route hierarchy:
///
/// ```text
/// /characters                                      list, create
/// /characters/{id}                                 detail with queue counters
/// /characters/{id}/missions                        queue view (all slots)
/// /characters/{id}/missions/next                   current head (GET)
/// /characters/{id}/missions/{mission_id}           accept (POST)
/// /characters/{id}/start                           start next pending (POST)
/// /characters/{id}/complete                        complete head + award XP (POST)
///
/// /missions                                        list, create
/// /missions/{id}                                   get
/// /missions/{id}/accept?character_id=              accept (POST)
/// /missions/{id}/start?character_id=               start head by name (POST)
/// /missions/{id}/complete?character_id=            complete by name + award XP (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Characters and their queues.
        .nest("/characters", character::router())
        // Mission catalog and mission-scoped queue actions.
        .nest("/missions", mission::router())
}
