//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - Where the entity is mutable, a full-replace update DTO

pub mod dna_artist;
pub mod dna_profile;
