//! Networking modules for the remote article feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single startup request and `types` defines the wire
//! schema it decodes.

pub mod api;
pub mod types;
