//! Request extractors shared by handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use soundverse_core::error::CoreError;
use soundverse_core::validation::validate_input;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that deserializes and then runs the DTO's
/// `validator` rules before the handler body executes.
///
/// - Missing or mistyped fields → `CoreError::Validation` (400 `VALIDATION_ERROR`).
/// - Malformed JSON or a wrong content type → `AppError::BadRequest` (400).
/// - Rule violations (blank or over-long strings) → `CoreError::Validation`.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateDnaArtist>) -> AppResult<...>
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(map_json_rejection)?;
        validate_input(&value)?;
        Ok(ValidatedJson(value))
    }
}

fn map_json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            AppError::Core(CoreError::Validation(err.body_text()))
        }
        other => AppError::BadRequest(other.body_text()),
    }
}

/// Path extractor whose rejection is an [`AppError::BadRequest`], so a
/// non-numeric id gets the standard JSON error body.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiPath(value))
    }
}

/// Query-string extractor whose rejection is an [`AppError::BadRequest`].
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}
