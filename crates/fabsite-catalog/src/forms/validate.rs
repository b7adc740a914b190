//! Field validation for order and subscription forms.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Email pattern shared by every form on the site.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Characters allowed in a phone field.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-+()]+$").expect("Invalid regex"));

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Minimum trimmed length of a name.
pub const MIN_NAME_LEN: usize = 2;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Product,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Product => "product",
        }
    }
}

/// One inline error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// All field errors of one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field.as_str(), e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Allowed characters only, and at least [`MIN_PHONE_DIGITS`] digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    PHONE_RE.is_match(phone) && phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LEN
}

/// Check name, email and phone, collecting every failure.
pub fn validate_contact(name: &str, email: &str, phone: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if !is_valid_name(name) {
        errors.push(Field::Name, "Please enter your name");
    }
    if !is_valid_email(email) {
        errors.push(Field::Email, "Please enter a valid email");
    }
    if !is_valid_phone(phone) {
        errors.push(Field::Phone, "Please enter a valid phone number");
    }
    errors
}

/// Apply the `+7 (XXX) XXX-XX-XX` input mask.
///
/// The first digit is the trunk prefix and is replaced by `+7`. Partial
/// input yields a partial mask; input with no digits yields an empty string.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    let part = |start: usize, end: usize| &digits[start.min(digits.len())..end.min(digits.len())];
    let mut formatted = String::from("+7 ");
    if digits.len() > 1 {
        formatted.push('(');
        formatted.push_str(part(1, 4));
    }
    if digits.len() >= 4 {
        formatted.push_str(") ");
        formatted.push_str(part(4, 7));
    }
    if digits.len() >= 7 {
        formatted.push('-');
        formatted.push_str(part(7, 9));
    }
    if digits.len() >= 9 {
        formatted.push('-');
        formatted.push_str(part(9, 11));
    }
    formatted
}
