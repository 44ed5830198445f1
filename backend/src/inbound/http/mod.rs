//! HTTP inbound adapter exposing the registration endpoint.

pub mod register;
pub mod state;
