//! Log sanitization utilities for masking personal data.
//!
//! Emails are personal data; handlers log them only through `mask_email`.

/// Mask an email address for safe logging.
///
/// Keeps at most the first 3 characters of the local part, then asterisks and
/// the domain. Works on characters, so multi-byte addresses are never split.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    let (local_part, domain) = match email.find('@') {
        Some(at_pos) => email.split_at(at_pos),
        None => (email, ""),
    };

    let visible: String = local_part.chars().take(3).collect();
    format!("{}***{}", visible, domain)
}
