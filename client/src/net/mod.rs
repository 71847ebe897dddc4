//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles listing fetches and `types` defines the listing schema and
//! its conversion into preview content records.

pub mod api;
pub mod types;
