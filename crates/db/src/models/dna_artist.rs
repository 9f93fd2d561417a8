//! DNA artist entity model and DTOs.

use serde::{Deserialize, Serialize};
use soundverse_core::dna::{validate_required_text, validate_text};
use soundverse_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `dna_artists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DnaArtist {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub dna_sequence: String,
    pub image_url: Option<String>,
    pub genre: Option<String>,
    pub audio_preview: Option<String>,
    pub created_at: Timestamp,
    /// Null until the row is first mutated.
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a new DNA artist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDnaArtist {
    #[validate(
        custom(function = "validate_required_text"),
        length(max = 200, message = "must be at most 200 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = "validate_text"),
        length(max = 2000, message = "must be at most 2000 characters")
    )]
    pub description: Option<String>,
    #[validate(custom(function = "validate_required_text"))]
    pub dna_sequence: String,
    #[validate(
        custom(function = "validate_text"),
        length(max = 2000, message = "must be at most 2000 characters")
    )]
    pub image_url: Option<String>,
    #[validate(
        custom(function = "validate_text"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub genre: Option<String>,
    #[validate(
        custom(function = "validate_text"),
        length(max = 2000, message = "must be at most 2000 characters")
    )]
    pub audio_preview: Option<String>,
}
