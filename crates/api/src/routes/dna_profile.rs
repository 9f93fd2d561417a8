//! Route definitions for DNA profiles.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dna_profile;
use crate::state::AppState;

/// Routes mounted at `/dna-profiles`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(dna_profile::create))
        .route(
            "/{id}",
            get(dna_profile::get_by_id)
                .put(dna_profile::update)
                .delete(dna_profile::delete),
        )
}

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /{user_id}/dna-profiles    -> list_by_user
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new().route("/{user_id}/dna-profiles", get(dna_profile::list_by_user))
}
