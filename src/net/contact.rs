//! Contact message delivery.
//!
//! Client-side (hydrate): either a fixed simulated delay or a real JSON
//! `POST` via `gloo-net`, raced against a timeout.
//! Host builds: simulated delivery resolves at once; HTTP is unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and timeouts all map to
//! [`SubmissionError`]; the form turns any of them into its persistent
//! error banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::config::EffectsConfig;
use crate::error::SubmissionError;
use crate::state::form::ContactMessage;

/// JSON body accepted by the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload<'a> {
    pub nombre: &'a str,
    pub email: &'a str,
    pub asunto: &'a str,
    pub mensaje: &'a str,
}

impl<'a> From<&'a ContactMessage> for ContactPayload<'a> {
    fn from(msg: &'a ContactMessage) -> Self {
        Self { nombre: &msg.name, email: &msg.email, asunto: &msg.subject, mensaje: &msg.message }
    }
}

/// How a validated message leaves the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactTransport {
    /// Wait `delay_ms`, then report success. No network traffic.
    Simulated { delay_ms: u32 },
    /// `POST` the payload to `endpoint`, failing after `timeout_ms`.
    Http { endpoint: String, timeout_ms: u32 },
}

impl ContactTransport {
    #[must_use]
    pub fn from_config(cfg: &EffectsConfig) -> Self {
        match cfg.contact_endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => {
                Self::Http { endpoint: endpoint.to_owned(), timeout_ms: cfg.submit_timeout_ms }
            }
            _ => Self::Simulated { delay_ms: cfg.submit_delay_ms },
        }
    }
}

/// Map an HTTP status to a delivery outcome.
#[must_use]
pub fn status_outcome(status: u16) -> Result<(), SubmissionError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SubmissionError::Rejected { status }) }
}

/// Serialize a message into its JSON request body.
///
/// # Errors
///
/// Returns [`SubmissionError::Encode`] if serialization fails.
pub fn encode(msg: &ContactMessage) -> Result<String, SubmissionError> {
    serde_json::to_string(&ContactPayload::from(msg)).map_err(|e| SubmissionError::Encode(e.to_string()))
}

/// Deliver a validated message over `transport`.
///
/// # Errors
///
/// Returns a [`SubmissionError`] when the real endpoint fails, rejects the
/// message, or does not answer in time. Simulated delivery never fails.
pub async fn deliver(transport: &ContactTransport, msg: &ContactMessage) -> Result<(), SubmissionError> {
    match transport {
        ContactTransport::Simulated { delay_ms } => {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(*delay_ms))).await;
            log::debug!("simulated contact delivery after {delay_ms}ms from {}", msg.email);
            Ok(())
        }
        ContactTransport::Http { endpoint, timeout_ms } => {
            #[cfg(feature = "hydrate")]
            {
                post_with_timeout(endpoint, msg, *timeout_ms).await
            }
            #[cfg(not(feature = "hydrate"))]
            {
                Err(SubmissionError::Transport(format!(
                    "cannot reach {endpoint} outside the browser (timeout {timeout_ms}ms, sender {})",
                    msg.email
                )))
            }
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_with_timeout(endpoint: &str, msg: &ContactMessage, timeout_ms: u32) -> Result<(), SubmissionError> {
    use futures::future::{Either, select};

    let request = Box::pin(post(endpoint, msg));
    let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(SubmissionError::TimedOut { ms: timeout_ms }),
    }
}

#[cfg(feature = "hydrate")]
async fn post(endpoint: &str, msg: &ContactMessage) -> Result<(), SubmissionError> {
    let body = encode(msg)?;
    let resp = gloo_net::http::Request::post(endpoint)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| SubmissionError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmissionError::Transport(e.to_string()))?;
    status_outcome(resp.status())
}
