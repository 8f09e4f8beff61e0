//! Shared wire DTOs for the contact submission boundary.
//!
//! DESIGN
//! ======
//! The server crate depends on this crate with the `ssr` feature and reuses
//! these types, so request validation runs identically on both sides of the
//! wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const NAME_MAX_CHARS: usize = 200;
pub const EMAIL_MAX_CHARS: usize = 320;
pub const MESSAGE_MAX_CHARS: usize = 5000;

/// The three inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Value of the HTML `name`/`id` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A single inline validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Successful submission acknowledgment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    /// Inquiry identifier (UUID string).
    pub id: String,
    /// Server receive time in Unix milliseconds.
    pub received_at_ms: i64,
}

/// Error body returned with `422` and `429` responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ContactRequest {
    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }

    /// Validate all fields, collecting every failure in field order.
    ///
    /// # Errors
    ///
    /// Returns one `FieldError` per invalid field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new(FormField::Name, "Please enter your name."));
        } else if name.chars().count() > NAME_MAX_CHARS {
            errors.push(FieldError::new(FormField::Name, format!("Name must be at most {NAME_MAX_CHARS} characters.")));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new(FormField::Email, "Please enter your email."));
        } else if email.chars().count() > EMAIL_MAX_CHARS {
            errors.push(FieldError::new(FormField::Email, format!("Email must be at most {EMAIL_MAX_CHARS} characters.")));
        } else if !is_plausible_email(email) {
            errors.push(FieldError::new(FormField::Email, "Please enter a valid email address."));
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::new(FormField::Message, "Please enter a message."));
        } else if message.chars().count() > MESSAGE_MAX_CHARS {
            errors.push(FieldError::new(
                FormField::Message,
                format!("Message must be at most {MESSAGE_MAX_CHARS} characters."),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Same shape check the browser applies to `type="email"` inputs, loosened:
/// one `@`, non-empty local part, dotted domain with no empty labels.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}
