//! Form-field validation for the sign-in and registration flows.
//!
//! Each validator returns the normalized value on success, or a
//! [`ViolettaError::Validation`] naming the field to highlight.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ViolettaError};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// E.164: optional '+', no leading zero, 8 to 15 digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{7,14}$").expect("valid phone regex"));

/// Minimum number of characters in a verification code.
pub const MIN_CODE_LEN: usize = 4;

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Trims and lowercases an email address, then checks its shape.
pub fn validate_email(raw: &str) -> Result<String> {
    let email = raw.trim().to_lowercase();
    if EMAIL_RE.is_match(&email) {
        Ok(email)
    } else {
        Err(ViolettaError::validation("email", "Enter a valid email address"))
    }
}

/// Removes whitespace from a phone number and checks it is E.164.
pub fn validate_phone(raw: &str) -> Result<String> {
    let phone = strip_whitespace(raw);
    if PHONE_RE.is_match(&phone) {
        Ok(phone)
    } else {
        Err(ViolettaError::validation(
            "phone",
            "Enter a phone number with its international prefix (e.g. +521234567890)",
        ))
    }
}

/// Removes whitespace from a verification code and checks its length.
pub fn validate_code(raw: &str) -> Result<String> {
    let code = strip_whitespace(raw);
    if code.chars().count() >= MIN_CODE_LEN {
        Ok(code)
    } else {
        Err(ViolettaError::validation(
            "code",
            format!("Enter the code we sent you ({}+ digits)", MIN_CODE_LEN),
        ))
    }
}

/// Trims a display name and rejects blanks.
pub fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        Err(ViolettaError::validation("name", "Please enter your name"))
    } else {
        Ok(name.to_string())
    }
}

/// Validates an email that the user may leave empty.
pub fn validate_optional_email(raw: Option<&str>) -> Result<Option<String>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(email) => validate_email(email).map(Some),
        None => Ok(None),
    }
}
