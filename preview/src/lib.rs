//! Live-preview core for submitted UI snippets.
//!
//! This crate owns everything about a preview that can be decided without a
//! browser: normalizing a loosely structured [`ContentRecord`] into an
//! exhaustive [`PreviewSource`], compiling that source into one isolated HTML
//! document, describing the sandboxed frame that hosts it, and the one-way
//! visibility/mount lifecycle. The `client` crate wires these into Leptos
//! components; `cli` uses them for offline inspection.
//!
//! Compilation is pure: equal sources under an equal [`PreviewConfig`]
//! always produce byte-identical documents.

pub mod cache;
pub mod config;
pub mod document;
pub mod kind;
pub mod lifecycle;
pub mod record;
pub mod sandbox;
pub mod source;

pub use cache::DocumentCache;
pub use config::{ConfigError, PreviewConfig};
pub use document::{compile, compile_record};
pub use kind::DeclaredKind;
pub use lifecycle::{PreviewLifecycle, PreviewPhase};
pub use record::{ContentRecord, RecordError, parse_records};
pub use sandbox::{FrameMarkup, SandboxError, SandboxPolicy, ScaleBox};
pub use source::{Branch, LegacySlots, MultiSource, PreviewSource, resolve_branch};
