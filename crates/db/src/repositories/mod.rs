//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method issues a single
//! statement, so each operation commits atomically.

pub mod dna_artist_repo;
pub mod dna_profile_repo;

pub use dna_artist_repo::DnaArtistRepo;
pub use dna_profile_repo::DnaProfileRepo;
