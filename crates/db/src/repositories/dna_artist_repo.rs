//! Repository for the `dna_artists` table.

use soundverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::dna_artist::{CreateDnaArtist, DnaArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, dna_sequence, image_url, genre, audio_preview, \
                       created_at, updated_at";

/// Provides list, lookup and create operations for DNA artists.
pub struct DnaArtistRepo;

impl DnaArtistRepo {
    /// Insert a new artist, returning the stored row with its generated
    /// `id` and `created_at`.
    pub async fn create(pool: &PgPool, input: &CreateDnaArtist) -> Result<DnaArtist, sqlx::Error> {
        let query = format!(
            "INSERT INTO dna_artists
                (name, description, dna_sequence, image_url, genre, audio_preview)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DnaArtist>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.dna_sequence)
            .bind(&input.image_url)
            .bind(&input.genre)
            .bind(&input.audio_preview)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DnaArtist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dna_artists WHERE id = $1");
        sqlx::query_as::<_, DnaArtist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List artists in insertion order, skipping `offset` rows and returning
    /// at most `limit`. An offset past the end yields an empty vec.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<DnaArtist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dna_artists ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, DnaArtist>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
