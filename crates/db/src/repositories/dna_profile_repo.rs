//! Repository for the `dna_profiles` table.

use soundverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::dna_profile::{CreateDnaProfile, DnaProfile, UpdateDnaProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, profile_name, dna_sequence, is_active, created_at, updated_at";

/// Provides CRUD operations for DNA profiles.
pub struct DnaProfileRepo;

impl DnaProfileRepo {
    /// Insert a new profile, returning the created row.
    ///
    /// If `is_active` is `None` in the input, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateDnaProfile) -> Result<DnaProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO dna_profiles (user_id, profile_name, dna_sequence, is_active)
             VALUES ($1, $2, $3, COALESCE($4, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DnaProfile>(&query)
            .bind(&input.user_id)
            .bind(&input.profile_name)
            .bind(&input.dna_sequence)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DnaProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dna_profiles WHERE id = $1");
        sqlx::query_as::<_, DnaProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the profiles owned by `user_id` in insertion order.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<DnaProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dna_profiles
             WHERE user_id = $1
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, DnaProfile>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace the mutable fields of a profile and stamp `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists; nothing is created.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDnaProfile,
    ) -> Result<Option<DnaProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE dna_profiles SET
                profile_name = $2,
                dna_sequence = $3,
                is_active = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DnaProfile>(&query)
            .bind(id)
            .bind(&input.profile_name)
            .bind(&input.dna_sequence)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a profile by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dna_profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
