//! User-related custom validators.

use validator::ValidationError;

use crate::constants::{ERR_EMAIL_REQUIRED, ERR_NAME_REQUIRED};

fn require_text(
    value: &str,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new(code);
        error.message = Some(message.into());
        return Err(error);
    }
    Ok(())
}

/// Custom validator for the name field.
/// Rejects empty or whitespace-only names.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    require_text(name, "name_required", ERR_NAME_REQUIRED)
}

/// Custom validator for the email field.
/// Rejects empty or whitespace-only emails; the format itself is not checked.
pub fn validate_email_present(email: &str) -> Result<(), ValidationError> {
    require_text(email, "email_required", ERR_EMAIL_REQUIRED)
}
