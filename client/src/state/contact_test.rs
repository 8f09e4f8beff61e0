use super::*;

fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::default();
    form.set_field(FormField::Name, name.to_owned());
    form.set_field(FormField::Email, email.to_owned());
    form.set_field(FormField::Message, message.to_owned());
    form
}

fn receipt() -> ContactReceipt {
    ContactReceipt { id: "inq-1".to_owned(), received_at_ms: 1_700_000_000_000 }
}

// =============================================================
// Field edits
// =============================================================

#[test]
fn set_field_overwrites_single_field() {
    let mut form = filled("Jane", "jane@x.com", "Hello");
    form.set_field(FormField::Name, "Janet".to_owned());
    assert_eq!(form.field(FormField::Name), "Janet");
    assert_eq!(form.field(FormField::Email), "jane@x.com");
    assert_eq!(form.field(FormField::Message), "Hello");
}

#[test]
fn set_field_clears_only_that_fields_error() {
    let mut form = filled("", "", "");
    assert!(form.begin_submit().is_none());
    assert_eq!(form.field_errors.len(), 3);
    form.set_field(FormField::Email, "j@x.com".to_owned());
    assert!(form.error_for(FormField::Email).is_none());
    assert!(form.error_for(FormField::Name).is_some());
    assert!(form.error_for(FormField::Message).is_some());
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn begin_submit_sets_submitting_and_returns_trimmed_payload() {
    let mut form = filled(" Jane ", "jane@x.com", "Hello ");
    let request = form.begin_submit().expect("valid form");
    assert!(form.submitting);
    assert_eq!(request.name, "Jane");
    assert_eq!(request.message, "Hello");
    assert_eq!(form.submit_label(), "Sending...");
}

#[test]
fn begin_submit_while_submitting_is_rejected() {
    let mut form = filled("Jane", "jane@x.com", "Hello");
    assert!(form.begin_submit().is_some());
    let before = form.clone();
    assert!(form.begin_submit().is_none());
    assert_eq!(form, before);
}

#[test]
fn invalid_form_does_not_enter_submitting() {
    let mut form = filled("Jane", "not-an-email", "Hello");
    assert!(form.begin_submit().is_none());
    assert!(!form.submitting);
    assert!(form.error_for(FormField::Email).is_some());
}

#[test]
fn successful_submission_clears_fields() {
    let mut form = filled("Jane", "jane@x.com", "Hello");
    form.begin_submit();
    form.finish_submit(Ok(receipt()));
    assert!(!form.submitting);
    assert_eq!(form.name, "");
    assert_eq!(form.email, "");
    assert_eq!(form.message, "");
    assert_eq!(form.notice, Some(FormNotice::Sent { id: "inq-1".to_owned() }));
    assert_eq!(form.submit_label(), "Send Message");
}

#[test]
fn rejected_submission_keeps_fields_and_shows_inline_errors() {
    let mut form = filled("Jane", "jane@x.com", "Hello");
    form.begin_submit();
    let errors = vec![FieldError::new(FormField::Message, "Message must be at most 5000 characters.")];
    form.finish_submit(Err(SubmitError::Rejected(errors)));
    assert!(!form.submitting);
    assert_eq!(form.name, "Jane");
    assert_eq!(form.error_for(FormField::Message), Some("Message must be at most 5000 characters."));
    assert!(form.notice.is_none());
}

#[test]
fn network_failure_sets_non_blocking_notice() {
    let mut form = filled("Jane", "jane@x.com", "Hello");
    form.begin_submit();
    form.finish_submit(Err(SubmitError::Timeout));
    assert!(!form.submitting);
    assert_eq!(form.message, "Hello");
    assert_eq!(
        form.notice,
        Some(FormNotice::Failed { message: "the server took too long to respond".to_owned(), retryable: true })
    );
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut form = filled("Jane", "jane@x.com", "Hello");
    form.finish_submit(Ok(receipt()));
    assert_eq!(form.name, "Jane");
    assert!(form.notice.is_none());
}

#[test]
fn take_sent_acknowledges_once() {
    let mut form = filled("Jane", "jane@x.com", "Hello");
    form.begin_submit();
    form.finish_submit(Ok(receipt()));
    assert_eq!(form.take_sent(), Some("inq-1".to_owned()));
    assert_eq!(form.take_sent(), None);
}

#[test]
fn take_sent_leaves_failure_notice_in_place() {
    let mut form = filled("Jane", "jane@x.com", "Hello");
    form.begin_submit();
    form.finish_submit(Err(SubmitError::Server(500)));
    assert_eq!(form.take_sent(), None);
    assert!(matches!(form.notice, Some(FormNotice::Failed { .. })));
}

#[test]
fn new_submit_clears_previous_notice() {
    let mut form = filled("Jane", "jane@x.com", "Hello");
    form.begin_submit();
    form.finish_submit(Err(SubmitError::Server(500)));
    form.begin_submit();
    assert!(form.notice.is_none());
    assert!(form.submitting);
}
