//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only process-wide state; it persists through the
//! `cookies` jar abstraction. `listing` is per-view query state.

pub mod cookies;
pub mod listing;
pub mod session;
