//! HTTP middleware components.
//!
//! Provides per-request client-scope resolution.

pub mod client_scope;

pub use client_scope::{CLIENT_SCOPE_HEADER, resolve_client_scope};
