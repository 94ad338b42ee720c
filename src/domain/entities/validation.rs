use std::borrow::Cow;

use validator::ValidationError;

use crate::entities::option_fields::OptionField;

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_optional_url_field(value: &OptionField<String>) -> Result<(), ValidationError> {
    match value {
        OptionField::SetToValue(url) if !url.trim().is_empty() => validate_url(url.trim()),
        _ => Ok(()),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "Value cannot be blank"));
    }
    Ok(())
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

/// Form inputs send empty strings for untouched optional fields.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
