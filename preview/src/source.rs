//! Normalized preview sources, one variant per compilation branch.
//!
//! ARCHITECTURE
//! ============
//! Branch selection happens once, here, when a [`ContentRecord`] is
//! normalized. Downstream code (compiler, cache, components) matches on the
//! exhaustive [`PreviewSource`] and never re-inspects optional fields.
//!
//! Priority order, first match wins:
//! 1. tailwind kind with tailwind markup
//! 2. full document passthrough (`<!DOCTYPE html` prefix), any kind
//! 3. react kind
//! 4. multi kind
//! 5. css kind with both split fragments
//! 6. legacy single-field inference (always succeeds)

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use crate::kind::DeclaredKind;
use crate::record::ContentRecord;

const DOCTYPE_PREFIX: &str = "<!doctype html";

/// Fieldless tag identifying which branch a source compiles through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    Tailwind,
    Document,
    React,
    Multi,
    SplitCss,
    Legacy,
}

impl Branch {
    /// Stable lowercase label for logs and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Document => "document",
            Self::React => "react",
            Self::Multi => "multi",
            Self::SplitCss => "css",
            Self::Legacy => "legacy",
        }
    }
}

/// Content of a `multi` record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MultiSource {
    /// A pre-assembled document supplied in the primary code field.
    Assembled { html: String },
    /// Separate html and style fragments to be combined.
    Fragments { html: String, css: String },
}

/// Style/body/script slots of the legacy single-field template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LegacySlots {
    pub style: String,
    pub body: String,
    pub script: String,
}

impl LegacySlots {
    /// True when every slot is empty; compiles to a blank document.
    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.body.is_empty() && self.script.is_empty()
    }
}

/// A record resolved into exactly one compilation branch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PreviewSource {
    Tailwind { markup: String },
    Document { html: String },
    React { code: String },
    Multi(MultiSource),
    SplitCss { html: String, css: String },
    Legacy(LegacySlots),
}

impl PreviewSource {
    /// Resolve a record. Total: every record maps to some variant.
    pub fn from_record(record: &ContentRecord) -> Self {
        let kind = record.declared_kind.as_deref().and_then(DeclaredKind::parse);
        let primary = record.primary_code();

        if kind == Some(DeclaredKind::Tailwind) {
            if let Some(markup) = primary.or_else(|| record.tailwind_fragment()) {
                return Self::Tailwind { markup: markup.to_owned() };
            }
        }

        if let Some(code) = primary.filter(|code| is_full_document(code)) {
            return Self::Document { html: code.to_owned() };
        }

        match kind {
            Some(DeclaredKind::React) => {
                return Self::React { code: primary.unwrap_or_default().to_owned() };
            }
            Some(DeclaredKind::Multi) => {
                let multi = match primary {
                    Some(html) => MultiSource::Assembled { html: html.to_owned() },
                    None => MultiSource::Fragments {
                        html: record.html_fragment().unwrap_or_default().to_owned(),
                        css: record.style_fragment().unwrap_or_default().to_owned(),
                    },
                };
                return Self::Multi(multi);
            }
            Some(DeclaredKind::Css) => {
                if let (Some(html), Some(css)) = (record.html_fragment(), record.style_fragment()) {
                    return Self::SplitCss { html: html.to_owned(), css: css.to_owned() };
                }
            }
            _ => {}
        }

        Self::Legacy(legacy_slots(kind.as_ref(), primary))
    }

    /// Branch this source compiles through.
    pub fn branch(&self) -> Branch {
        match self {
            Self::Tailwind { .. } => Branch::Tailwind,
            Self::Document { .. } => Branch::Document,
            Self::React { .. } => Branch::React,
            Self::Multi(_) => Branch::Multi,
            Self::SplitCss { .. } => Branch::SplitCss,
            Self::Legacy(_) => Branch::Legacy,
        }
    }
}

impl From<&ContentRecord> for PreviewSource {
    fn from(record: &ContentRecord) -> Self {
        Self::from_record(record)
    }
}

/// Branch a record would compile through.
pub fn resolve_branch(record: &ContentRecord) -> Branch {
    PreviewSource::from_record(record).branch()
}

/// True when `code`, trimmed, begins with an HTML document-type declaration.
pub fn is_full_document(code: &str) -> bool {
    code.trim_start()
        .get(..DOCTYPE_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(DOCTYPE_PREFIX))
}

// Slots are filled only when the declared kind names them; an unrecognized
// kind leaves every slot empty.
fn legacy_slots(kind: Option<&DeclaredKind>, primary: Option<&str>) -> LegacySlots {
    let (Some(kind), Some(code)) = (kind, primary) else {
        return LegacySlots::default();
    };
    let fill = |needle: &str| if kind.mentions(needle) { code.to_owned() } else { String::new() };
    LegacySlots { style: fill("css"), body: fill("html"), script: fill("javascript") }
}
