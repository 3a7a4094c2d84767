//! Input validation bridge.
//!
//! Create DTOs derive [`validator::Validate`]; handlers call
//! [`validate_input`] to turn any failures into a single
//! [`CoreError::Validation`] with a stable, sorted message.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run `Validate` on an input and map failures to [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten field errors into `"field: message; field: message"`.
///
/// Uses the custom message when one is set, otherwise the validator code
/// (e.g. `range`, `length`).
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {detail}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 1, max = 5))]
        rank: i16,
    }

    #[test]
    fn valid_input_passes() {
        let s = Sample {
            name: "ok".into(),
            rank: 3,
        };
        assert!(validate_input(&s).is_ok());
    }

    #[test]
    fn custom_message_is_used() {
        let s = Sample {
            name: String::new(),
            rank: 3,
        };
        assert_matches!(
            validate_input(&s),
            Err(CoreError::Validation(msg)) if msg == "name: must not be empty"
        );
    }

    #[test]
    fn multiple_failures_are_sorted() {
        let s = Sample {
            name: String::new(),
            rank: 9,
        };
        assert_matches!(
            validate_input(&s),
            Err(CoreError::Validation(msg)) if msg == "name: must not be empty; rank: range"
        );
    }
}
