//! Payloads exchanged with HTTP clients.

pub mod api;
