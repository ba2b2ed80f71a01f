//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and article surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod article_card;
pub mod article_form;
pub mod nav_bar;
pub mod record_row;
