pub mod dna_artist;
pub mod dna_profile;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dna-artists                          list, create
/// /dna-artists/{id}                     get
///
/// /dna-profiles                         create
/// /dna-profiles/{id}                    get, update, delete
///
/// /users/{user_id}/dna-profiles         list profiles owned by a user
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dna-artists", dna_artist::router())
        .nest("/dna-profiles", dna_profile::router())
        .nest("/users", dna_profile::user_router())
}
