//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `soundverse_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod dna_artist;
pub mod dna_profile;
