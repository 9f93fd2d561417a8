//! Offset/limit pagination helpers shared by all list endpoints.

/// Default page size when the caller omits `limit`.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Upper bound on a single page.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Clamp a user-provided limit into `1..=max`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
