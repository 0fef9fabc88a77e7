//! Request validation.
//!
//! Validation runs before any service call; the first violated constraint
//! wins and is reported with the offending field name.

use salvo::prelude::StatusError;
use url::Url;

/// A single failed constraint on a request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidationError {
    pub(crate) field: &'static str,
    pub(crate) message: String,
}

impl ValidationError {
    pub(crate) fn into_status_error(self) -> StatusError {
        StatusError::bad_request().brief(format!("{}: {}", self.field, self.message))
    }
}

/// Validated request payload.
pub(crate) trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn min_len(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError {
            field,
            message: format!("must be at least {min} characters"),
        });
    }

    Ok(())
}

pub(crate) fn exact_len(
    field: &'static str,
    value: &str,
    len: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() != len {
        return Err(ValidationError {
            field,
            message: format!("must be exactly {len} characters"),
        });
    }

    Ok(())
}

pub(crate) fn positive(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 1 {
        return Err(ValidationError {
            field,
            message: "must be a positive integer".to_string(),
        });
    }

    Ok(())
}

pub(crate) fn valid_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if Url::parse(value).is_err() {
        return Err(ValidationError {
            field,
            message: "must be a valid URL".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_len_rejects_short_values() {
        let result = min_len("name", "a", 2);

        assert_eq!(
            result,
            Err(ValidationError {
                field: "name",
                message: "must be at least 2 characters".to_string(),
            })
        );
    }

    #[test]
    fn min_len_accepts_exact_boundary() {
        assert!(min_len("name", "ab", 2).is_ok());
    }

    #[test]
    fn min_len_counts_characters_not_bytes() {
        assert!(min_len("name", "héllo", 5).is_ok());
    }

    #[test]
    fn exact_len_enforces_currency_codes() {
        assert!(exact_len("currency", "USD", 3).is_ok());
        assert!(exact_len("currency", "US", 3).is_err());
        assert!(exact_len("currency", "USDT", 3).is_err());
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(positive("qty", 1).is_ok());
        assert!(positive("qty", 0).is_err());
        assert!(positive("qty", -3).is_err());
    }

    #[test]
    fn valid_url_rejects_bare_paths() {
        assert!(valid_url("success_url", "https://shop.example/done").is_ok());
        assert!(valid_url("success_url", "/done").is_err());
        assert!(valid_url("success_url", "not a url").is_err());
    }
}
