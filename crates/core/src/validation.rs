//! Bridge from `validator` derive rules to [`CoreError::Validation`].

use validator::Validate;

use crate::error::CoreError;

/// Run the derived validation rules on `input`.
///
/// All field failures are collected into a single message of the form
/// `field: message; field: message`, sorted so the output is stable.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    let errors = match input.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| match &err.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: failed rule '{}'", err.code),
            })
        })
        .collect();
    messages.sort();

    Err(CoreError::Validation(messages.join("; ")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
