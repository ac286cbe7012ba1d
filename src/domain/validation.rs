//! Inline form validation shared by the contact and booking forms.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+$").expect("email pattern compiles"));

/// Field name → message, rendered next to the offending input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless an earlier rule already flagged it.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Trimmed value of a required field, flagging it when blank.
pub fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, message);
    }
    trimmed.to_string()
}

/// Trimmed value of an optional field.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Required email address; blank and malformed values get distinct messages.
pub fn email(errors: &mut FieldErrors, field: &'static str, value: &str, invalid: &str) -> String {
    let value = required(errors, field, value, "Email is required");
    if !value.is_empty() && !is_valid_email(&value) {
        errors.insert(field, invalid);
    }
    value
}
