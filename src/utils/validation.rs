use validator::{Validate, ValidationErrors};
use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(|err| AppError::BadRequest(first_message(&err)))
}

// Field errors live in a map, so pick by field name to keep the reported
// message stable when several fields fail at once.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields
        .into_iter()
        .filter_map(|field| field_errors.get(field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Trims a required text field, rejecting it when missing or blank.
pub fn require_text(value: Option<&str>, message: &str) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Trims an optional text field; blank becomes `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

pub fn require_positive(value: Option<i32>, message: &str) -> Result<i32, AppError> {
    match value {
        Some(n) if n > 0 => Ok(n),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(max = 3, message = "alpha too long"))]
        alpha: String,
        #[validate(length(max = 3, message = "beta too long"))]
        beta: String,
    }

    #[test]
    fn require_text_trims_and_rejects_blank() {
        assert_eq!(require_text(Some("  Run "), "Name is required").unwrap(), "Run");
        assert_eq!(
            require_text(Some("   "), "Name is required"),
            Err(AppError::BadRequest("Name is required".to_string()))
        );
        assert!(require_text(None, "Name is required").is_err());
    }

    #[test]
    fn optional_text_drops_blank_values() {
        assert_eq!(optional_text(Some(" notes ")), Some("notes".to_string()));
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn require_positive_rejects_zero_and_negative() {
        assert_eq!(require_positive(Some(15), "bad").unwrap(), 15);
        assert!(require_positive(Some(0), "bad").is_err());
        assert!(require_positive(Some(-5), "bad").is_err());
        assert!(require_positive(None, "bad").is_err());
    }

    #[test]
    fn validate_payload_reports_first_field_by_name() {
        let sample = Sample { alpha: "abcd".into(), beta: "abcd".into() };
        assert_eq!(
            validate_payload(&sample),
            Err(AppError::BadRequest("alpha too long".to_string()))
        );

        let sample = Sample { alpha: "ok".into(), beta: "ok".into() };
        assert!(validate_payload(&sample).is_ok());
    }
}
