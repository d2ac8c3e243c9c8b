//! Crate error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal for the single action that triggered it.
//! Registrars return [`EffectsError`] so boot can log a broken effect and
//! keep wiring the rest; form errors surface as inline banner text.

use crate::state::form::ContactField;

#[derive(Debug, thiserror::Error)]
pub enum EffectsError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(String),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Contact form input rejected before any submission is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(ContactField),
    #[error("invalid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// Inline message shown to the visitor.
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            Self::MissingField(_) => crate::consts::MSG_MISSING_FIELDS,
            Self::InvalidEmail => crate::consts::MSG_INVALID_EMAIL,
        }
    }
}

/// Delivery of a validated contact message failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("contact endpoint rejected message: {status}")]
    Rejected { status: u16 },
    #[error("contact endpoint timed out after {ms}ms")]
    TimedOut { ms: u32 },
    #[error("could not encode message: {0}")]
    Encode(String),
}
