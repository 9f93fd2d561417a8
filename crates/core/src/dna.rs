//! Constants and field rules for DNA artists and DNA profiles.

use std::borrow::Cow;

use validator::ValidationError;

/// Entity label used in not-found errors for `dna_artists` rows.
pub const ENTITY_DNA_ARTIST: &str = "DNA artist";

/// Entity label used in not-found errors for `dna_profiles` rows.
pub const ENTITY_DNA_PROFILE: &str = "DNA profile";

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Reject strings containing a NUL character, which Postgres `TEXT` cannot
/// store.
///
/// Used as a `validator` custom rule on optional text fields.
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(rule_error("nul", "must not contain NUL characters"));
    }
    Ok(())
}

/// Reject strings that are empty, whitespace-only or contain NUL.
///
/// Used as a `validator` custom rule on every required text field.
pub fn validate_required_text(value: &str) -> Result<(), ValidationError> {
    validate_text(value)?;
    if value.trim().is_empty() {
        return Err(rule_error("blank", "must not be blank"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
