//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`articles`, `editor`, `session`) and provided to
//! components as `RwSignal` contexts from the root `App`.

pub mod articles;
pub mod editor;
pub mod session;
