//! Contact form state and the submit lifecycle.
//!
//! `begin_submit` and `finish_submit` bracket one request. The
//! `submitting` flag is the re-entry guard: while it is set, further
//! submits are rejected without touching the form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::api::SubmitError;
use crate::net::types::{ContactReceipt, ContactRequest, FieldError, FormField};

pub const SENT_ACKNOWLEDGMENT: &str = "Thank you for your message! I'll get back to you soon.";

/// Outcome banner shown below the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormNotice {
    /// Submission accepted; the view acknowledges it once and then clears it.
    Sent { id: String },
    /// Submission failed for a reason unrelated to the typed values.
    Failed { message: String, retryable: bool },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
    pub field_errors: Vec<FieldError>,
    pub notice: Option<FormNotice>,
}

impl ContactForm {
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Overwrite one field and drop its inline error.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
        self.field_errors.retain(|e| e.field != field);
    }

    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.field_errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    /// Start a submission.
    ///
    /// Returns the trimmed payload to send, or `None` when a submission is
    /// already in flight or the values fail validation.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.submitting {
            return None;
        }
        let request = ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
        .trimmed();
        self.notice = None;
        if let Err(errors) = request.validate() {
            self.field_errors = errors;
            return None;
        }
        self.field_errors.clear();
        self.submitting = true;
        Some(request)
    }

    /// Record the outcome of the in-flight submission.
    pub fn finish_submit(&mut self, outcome: Result<ContactReceipt, SubmitError>) {
        if !self.submitting {
            return;
        }
        self.submitting = false;
        match outcome {
            Ok(receipt) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.field_errors.clear();
                self.notice = Some(FormNotice::Sent { id: receipt.id });
            }
            Err(SubmitError::Rejected(errors)) => {
                self.field_errors = errors;
            }
            Err(err) => {
                self.notice = Some(FormNotice::Failed { message: err.to_string(), retryable: err.is_retryable() });
            }
        }
    }

    /// Take a pending `Sent` notice so it is acknowledged exactly once.
    pub fn take_sent(&mut self) -> Option<String> {
        match self.notice.take() {
            Some(FormNotice::Sent { id }) => Some(id),
            other => {
                self.notice = other;
                None
            }
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Sending..." } else { "Send Message" }
    }
}
