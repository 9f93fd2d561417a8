//! Handlers for the `/dna-artists` resource.
//!
//! The artist catalog is append-only over HTTP: list, lookup and create.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use soundverse_core::dna::ENTITY_DNA_ARTIST;
use soundverse_core::error::CoreError;
use soundverse_core::types::DbId;
use soundverse_db::models::dna_artist::CreateDnaArtist;
use soundverse_db::repositories::DnaArtistRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dna-artists?offset=&limit=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (offset, limit) = params.resolve();
    let artists = DnaArtistRepo::list(&state.pool, offset, limit).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /api/v1/dna-artists
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDnaArtist>,
) -> AppResult<impl IntoResponse> {
    let artist = DnaArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "DNA artist created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: artist })))
}

/// GET /api/v1/dna-artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = DnaArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_DNA_ARTIST,
            id,
        }))?;
    Ok(Json(DataResponse { data: artist }))
}
