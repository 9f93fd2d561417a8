//! Handlers for the `/dna-profiles` resource and the per-user listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use soundverse_core::dna::ENTITY_DNA_PROFILE;
use soundverse_core::error::CoreError;
use soundverse_core::types::DbId;
use soundverse_db::models::dna_profile::{CreateDnaProfile, UpdateDnaProfile};
use soundverse_db::repositories::DnaProfileRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_DNA_PROFILE,
        id,
    })
}

/// GET /api/v1/users/{user_id}/dna-profiles?offset=&limit=
pub async fn list_by_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (offset, limit) = params.resolve();
    let profiles = DnaProfileRepo::list_by_user(&state.pool, &user_id, offset, limit).await?;
    Ok(Json(DataResponse { data: profiles }))
}

/// POST /api/v1/dna-profiles
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDnaProfile>,
) -> AppResult<impl IntoResponse> {
    let profile = DnaProfileRepo::create(&state.pool, &input).await?;
    tracing::info!(
        profile_id = profile.id,
        user_id = %profile.user_id,
        "DNA profile created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: profile })))
}

/// GET /api/v1/dna-profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = DnaProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/dna-profiles/{id}
///
/// Full replace of `profile_name`, `dna_sequence` and `is_active`.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDnaProfile>,
) -> AppResult<impl IntoResponse> {
    let profile = DnaProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: profile }))
}

/// DELETE /api/v1/dna-profiles/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if DnaProfileRepo::delete(&state.pool, id).await? {
        tracing::info!(profile_id = id, "DNA profile deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
