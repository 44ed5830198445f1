//! Outbound adapters that talk to remote services on behalf of the domain.

pub mod form_submitter;
