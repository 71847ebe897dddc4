//! Listing DTOs for the component marketplace REST API.
//!
//! DESIGN
//! ======
//! Items arrive in the API's snake_case shape and are converted into
//! `preview::ContentRecord` at this boundary, so components downstream only
//! ever see a normalized `PreviewSource`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use preview::ContentRecord;
use serde::{Deserialize, Serialize};

/// Moderation status of a submitted component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Awaiting admin review.
    #[default]
    Pending,
    /// Published to the showcase.
    Approved,
    /// Rejected by a moderator.
    Rejected,
    /// Any status this client does not know.
    #[serde(other)]
    Unknown,
}

impl ReviewStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }
}

/// A component as returned by listing and detail endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentItem {
    /// Unique component identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Submitting user's display name, if known.
    #[serde(default)]
    pub author: Option<String>,
    /// Declared technology (`css`, `tailwind`, `react`, ...).
    #[serde(default)]
    pub technology: Option<String>,
    /// Generic code payload.
    #[serde(default)]
    pub code: Option<String>,
    /// HTML half of a split submission.
    #[serde(default)]
    pub html_code: Option<String>,
    /// CSS half of a split submission.
    #[serde(default)]
    pub css_code: Option<String>,
    /// Tailwind markup.
    #[serde(default)]
    pub tailwind_code: Option<String>,
    /// Moderation status.
    #[serde(default)]
    pub status: ReviewStatus,
}

impl ComponentItem {
    /// Content record consumed by the preview renderer.
    pub fn content_record(&self) -> ContentRecord {
        ContentRecord {
            identifier: self.id.clone(),
            declared_kind: self.technology.clone(),
            primary_code: self.code.clone(),
            html_fragment: self.html_code.clone(),
            style_fragment: self.css_code.clone(),
            tailwind_fragment: self.tailwind_code.clone(),
        }
    }

    /// Title shown on cards; falls back to the identifier.
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() { &self.id } else { title }
    }
}

/// Listing response: a bare array or an object wrapping one.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ComponentListResponse {
    Bare(Vec<ComponentItem>),
    Wrapped {
        #[serde(alias = "components", alias = "items")]
        data: Vec<ComponentItem>,
    },
}

impl ComponentListResponse {
    pub fn into_items(self) -> Vec<ComponentItem> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}
