//! Reactive state models shared across pages and components.
//!
//! ARCHITECTURE
//! ============
//! State lives in plain structs wrapped by `RwSignal` at the page level, so
//! transition logic stays testable without a reactive runtime.

pub mod showcase;
