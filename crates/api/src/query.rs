//! Shared query parameter types for API handlers.

use serde::Deserialize;
use soundverse_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

/// Pagination parameters (`?offset=&limit=`).
///
/// `skip` is accepted as an alias for `offset` so existing clients keep
/// working.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(alias = "skip")]
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Resolve to a clamped `(offset, limit)` pair.
    pub fn resolve(&self) -> (i64, i64) {
        (
            clamp_offset(self.offset),
            clamp_limit(self.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
        )
    }
}
