//! Route definitions for the `/dna-artists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dna_artist;
use crate::state::AppState;

/// Routes mounted at `/dna-artists`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dna_artist::list).post(dna_artist::create))
        .route("/{id}", get(dna_artist::get_by_id))
}
