//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single boundary every call crosses, `transport` plugs in
//! browser `fetch`, `api` holds typed endpoints, and `types` defines the
//! wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
