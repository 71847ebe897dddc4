//! Content records as supplied by listing and submission data sources.
//!
//! DESIGN
//! ======
//! Field names follow the camelCase record shape, with aliases for the
//! snake_case names the listing API emits, so one type can be deserialized
//! from either without an intermediate DTO.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};

use crate::source::PreviewSource;

/// Error returned when parsing records from JSON.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The input was not valid JSON or did not match the record shape.
    #[error("failed to decode content record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One submitted UI snippet with its declared technology and code payloads.
///
/// Every payload is optional. Absent and empty fields are treated the same
/// way by normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Opaque identifier used only for lifecycle keying.
    #[serde(default, alias = "id", alias = "_id")]
    pub identifier: String,
    /// Declared technology (`css`, `tailwind`, `html`, `javascript`, `react`, `multi`).
    #[serde(default, alias = "technology", alias = "declared_kind")]
    pub declared_kind: Option<String>,
    /// Generic code payload; meaning depends on the declared kind.
    #[serde(default, alias = "code", alias = "primary_code")]
    pub primary_code: Option<String>,
    /// HTML half of a split-file submission.
    #[serde(default, alias = "htmlCode", alias = "html_code", alias = "html_fragment")]
    pub html_fragment: Option<String>,
    /// CSS half of a split-file submission.
    #[serde(default, alias = "cssCode", alias = "css_code", alias = "style_fragment")]
    pub style_fragment: Option<String>,
    /// Tailwind markup, used when `primary_code` is absent.
    #[serde(default, alias = "tailwindCode", alias = "tailwind_code", alias = "tailwind_fragment")]
    pub tailwind_fragment: Option<String>,
}

impl ContentRecord {
    /// Create an empty record with only an identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), ..Self::default() }
    }

    /// Parse a single record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Decode`] if `raw` is not a JSON record object.
    pub fn from_json(raw: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Resolve this record into exactly one compilation branch.
    #[must_use]
    pub fn normalize(&self) -> PreviewSource {
        PreviewSource::from_record(self)
    }

    pub(crate) fn primary_code(&self) -> Option<&str> {
        present(self.primary_code.as_ref())
    }

    pub(crate) fn html_fragment(&self) -> Option<&str> {
        present(self.html_fragment.as_ref())
    }

    pub(crate) fn style_fragment(&self) -> Option<&str> {
        present(self.style_fragment.as_ref())
    }

    pub(crate) fn tailwind_fragment(&self) -> Option<&str> {
        present(self.tailwind_fragment.as_ref())
    }
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ContentRecord>),
    One(ContentRecord),
}

/// Parse either one JSON record or a JSON array of records.
///
/// # Errors
///
/// Returns [`RecordError::Decode`] if `raw` matches neither shape.
pub fn parse_records(raw: &str) -> Result<Vec<ContentRecord>, RecordError> {
    match serde_json::from_str::<OneOrMany>(raw) {
        Ok(OneOrMany::Many(records)) => Ok(records),
        Ok(OneOrMany::One(record)) => Ok(vec![record]),
        // Re-decode as a single record so the error names the real problem
        // instead of serde's untagged "did not match any variant".
        Err(_) => Ok(vec![ContentRecord::from_json(raw)?]),
    }
}
