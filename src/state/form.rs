//! Contact form: validation and the submit state machine.
//!
//! Flow: `Idle` → validate → `Sending` → `Succeeded` | `Failed`. A
//! validation failure returns to `Idle` with an inline error banner and
//! leaves the inputs untouched. Each banner carries a sequence number so a
//! delayed auto-hide only hides the banner it was scheduled for.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{
    FIELD_EMAIL_ID, FIELD_MESSAGE_ID, FIELD_NAME_ID, FIELD_SUBJECT_ID, MSG_SEND_FAILED, MSG_SENDING, MSG_SENT,
};
use crate::error::{SubmissionError, ValidationError};

/// `local@domain.tld` shape; not an RFC 5322 validator.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Id of the input element holding this field.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Name => FIELD_NAME_ID,
            Self::Email => FIELD_EMAIL_ID,
            Self::Subject => FIELD_SUBJECT_ID,
            Self::Message => FIELD_MESSAGE_ID,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        })
    }
}

/// Raw input values as read at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Trim every field and check the form is submittable.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingField`] for the first blank field in form
    /// order, then [`ValidationError::InvalidEmail`].
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        if let Some(field) = ContactField::ALL.into_iter().find(|f| trim_input(self.get(*f)).is_empty()) {
            return Err(ValidationError::MissingField(field));
        }
        let email = trim_input(&self.email);
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ContactMessage {
            name: trim_input(&self.name).to_owned(),
            email: email.to_owned(),
            subject: trim_input(&self.subject).to_owned(),
            message: trim_input(&self.message).to_owned(),
        })
    }
}

/// Strip whitespace the way form inputs are trimmed in the browser, which
/// also drops the byte-order mark.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// A validated, trimmed contact message ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Sending,
    Success,
    Error,
}

impl BannerKind {
    /// Class set on the response element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Sending => "",
            Self::Success => "exitoso",
            Self::Error => "error",
        }
    }
}

/// Status text shown in the response element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub seq: u64,
    pub kind: BannerKind,
    pub message: &'static str,
    /// Hide after this many milliseconds; `None` stays until replaced.
    pub auto_hide_ms: Option<u32>,
}

/// Result of pressing submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// A submission is already in flight; nothing changes.
    Busy,
    /// Input rejected; show the banner, keep the inputs.
    Invalid { error: ValidationError, banner: Banner },
    /// Input accepted; show the banner and deliver the message.
    Send { message: ContactMessage, banner: Banner },
}

/// Result of a delivery attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub banner: Banner,
    pub reset_form: bool,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    phase: FormPhase,
    next_seq: u64,
    visible: Option<u64>,
    success_hide_ms: u32,
}

impl ContactForm {
    #[must_use]
    pub fn new(success_hide_ms: u32) -> Self {
        Self { phase: FormPhase::Idle, next_seq: 0, visible: None, success_hide_ms }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Sequence number of the banner currently on screen.
    #[must_use]
    pub fn visible_banner(&self) -> Option<u64> {
        self.visible
    }

    pub fn begin_submit(&mut self, fields: &ContactFields) -> SubmitStep {
        if self.phase == FormPhase::Sending {
            return SubmitStep::Busy;
        }
        match fields.validate() {
            Err(error) => {
                self.phase = FormPhase::Idle;
                let banner = self.show(BannerKind::Error, error.user_message(), None);
                SubmitStep::Invalid { error, banner }
            }
            Ok(message) => {
                self.phase = FormPhase::Sending;
                let banner = self.show(BannerKind::Sending, MSG_SENDING, None);
                SubmitStep::Send { message, banner }
            }
        }
    }

    /// Settle the in-flight submission.
    pub fn complete(&mut self, result: &Result<(), SubmissionError>) -> Completion {
        match result {
            Ok(()) => {
                self.phase = FormPhase::Succeeded;
                let banner = self.show(BannerKind::Success, MSG_SENT, Some(self.success_hide_ms));
                Completion { banner, reset_form: true }
            }
            Err(_) => {
                self.phase = FormPhase::Failed;
                let banner = self.show(BannerKind::Error, MSG_SEND_FAILED, None);
                Completion { banner, reset_form: false }
            }
        }
    }

    /// Hide banner `seq` if it is still the one on screen.
    pub fn hide_banner(&mut self, seq: u64) -> bool {
        if self.visible == Some(seq) {
            self.visible = None;
            true
        } else {
            false
        }
    }

    fn show(&mut self, kind: BannerKind, message: &'static str, auto_hide_ms: Option<u32>) -> Banner {
        self.next_seq += 1;
        self.visible = Some(self.next_seq);
        Banner { seq: self.next_seq, kind, message, auto_hide_ms }
    }
}
