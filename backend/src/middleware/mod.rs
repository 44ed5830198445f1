//! Request middleware.

pub mod trace;

pub use trace::{RequestTrace, TRACE_ID_HEADER, TraceId};
