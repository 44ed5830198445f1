//! Form submission outbound adapter.
//!
//! This module provides the reqwest-backed client that posts a [`Form`] to its
//! action and decodes the JSON reply.
//!
//! [`Form`]: crate::domain::Form

mod http_submitter;

pub use http_submitter::{HttpFormSubmitter, SubmitError};
