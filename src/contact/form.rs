//! Contact form fields and validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::error::FormError;

/// Form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }

    /// Next field, wrapping around.
    pub fn next(self) -> Field {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around.
    pub fn prev(self) -> Field {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A validated message, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Editable form state: field values plus focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: [String; 4],
    focus: Option<Field>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.values[field.index()].push(c);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.values[field.index()].pop();
    }

    /// Field holds something other than whitespace.
    pub fn is_filled(&self, field: Field) -> bool {
        !self.value(field).trim().is_empty()
    }

    pub fn focus(&self) -> Option<Field> {
        self.focus
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focus == Some(field)
    }

    pub fn set_focus(&mut self, field: Option<Field>) {
        self.focus = field;
    }

    /// Clear every value and the focus.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check the form. Missing fields are reported before a bad email.
    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        if Field::ALL.iter().any(|&f| !self.is_filled(f)) {
            return Err(FormError::MissingField);
        }
        if !is_valid_email(self.value(Field::Email)) {
            return Err(FormError::InvalidEmail);
        }
        Ok(ContactMessage {
            name: self.value(Field::Name).trim().to_string(),
            email: self.value(Field::Email).to_string(),
            subject: self.value(Field::Subject).trim().to_string(),
            message: self.value(Field::Message).trim().to_string(),
        })
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// `local@domain.tld` with no whitespace anywhere, padding included.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
