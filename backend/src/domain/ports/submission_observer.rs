//! Driven port for diagnostics emitted while a form submission is in flight.
//!
//! The submitter reports the response head through this port instead of
//! writing to a console, so callers can redirect, silence, or assert on it.

use tracing::info;

/// Status metadata read from a response head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseStatus {
    /// `true` for 2xx statuses.
    pub ok: bool,
    /// Numeric HTTP status code.
    pub status: u16,
}

impl ResponseStatus {
    /// Derive the `ok` flag from a numeric status.
    pub fn from_code(status: u16) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
        }
    }
}

/// Receives response metadata from diagnostic submissions.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionObserver: Send + Sync {
    /// Called once per submission, after the response head arrives and before
    /// the body is decoded.
    fn response_received(&self, status: &ResponseStatus);
}

impl<F> SubmissionObserver for F
where
    F: Fn(&ResponseStatus) + Send + Sync,
{
    fn response_received(&self, status: &ResponseStatus) {
        self(status);
    }
}

/// Default observer emitting a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSubmissionObserver;

impl SubmissionObserver for TracingSubmissionObserver {
    fn response_received(&self, status: &ResponseStatus) {
        info!(
            ok = status.ok,
            status = status.status,
            "form submission response received"
        );
    }
}

/// Observer that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSubmissionObserver;

impl SubmissionObserver for NoOpSubmissionObserver {
    fn response_received(&self, _status: &ResponseStatus) {}
}
