//! Request validation rules applied before a record reaches the store.

use crate::error::AppError;

pub struct RequestValidator;

impl RequestValidator {
    /// `value` must equal one of `allowed` exactly (case-sensitive).
    pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), AppError> {
        if allowed.iter().any(|a| *a == value) {
            return Ok(());
        }
        Err(AppError::Validation(format!(
            "{} must be one of: {}",
            field,
            allowed.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_allowed_values() {
        let err = RequestValidator::one_of("role", "admin", &["Admin", "Reader"]).unwrap_err();
        assert_eq!(err.to_string(), "role must be one of: Admin, Reader");
    }
}
