//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared site and admin chrome while reading the
//! session store and client config from Leptos context providers.

pub mod admin_layout;
pub mod cards;
pub mod notice;
pub mod pagination;
pub mod require_auth;
pub mod site_layout;
