//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render listing cards and the sandboxed preview surface while
//! reading shared configuration from Leptos context providers.

pub mod component_card;
pub mod live_preview;
