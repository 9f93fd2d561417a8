//! DNA profile entity model and DTOs.
//!
//! Profiles are owned by an external user id. `is_active` is caller-managed
//! state; deleting a profile removes the row.

use serde::{Deserialize, Serialize};
use soundverse_core::dna::validate_required_text;
use soundverse_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `dna_profiles` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DnaProfile {
    pub id: DbId,
    pub user_id: String,
    pub profile_name: String,
    pub dna_sequence: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a new DNA profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDnaProfile {
    #[validate(
        custom(function = "validate_required_text"),
        length(max = 128, message = "must be at most 128 characters")
    )]
    pub user_id: String,
    #[validate(
        custom(function = "validate_required_text"),
        length(max = 200, message = "must be at most 200 characters")
    )]
    pub profile_name: String,
    #[validate(custom(function = "validate_required_text"))]
    pub dna_sequence: String,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for replacing the mutable fields of a DNA profile.
///
/// Every field is required: an update overwrites all of them. `user_id` and
/// `created_at` are fixed at creation and cannot be changed here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDnaProfile {
    #[validate(
        custom(function = "validate_required_text"),
        length(max = 200, message = "must be at most 200 characters")
    )]
    pub profile_name: String,
    #[validate(custom(function = "validate_required_text"))]
    pub dna_sequence: String,
    pub is_active: bool,
}
