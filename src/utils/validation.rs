use crate::utils::error::{AppError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AppError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AppError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("oppslag_url", "https://example.com").is_ok());
        assert!(validate_url("oppslag_url", "http://localhost:8080").is_ok());
        assert!(validate_url("oppslag_url", "").is_err());
        assert!(validate_url("oppslag_url", "invalid-url").is_err());
        assert!(validate_url("oppslag_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("request_timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("request_timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("https://hooks.example.com".to_string());
        assert!(validate_required_field("hook_url", &present).is_ok());

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("hook_url", &missing),
            Err(AppError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("environment", "prod").is_ok());
        assert!(validate_non_empty_string("environment", "   ").is_err());
    }
}
