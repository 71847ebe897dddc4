//! Declared technology parsing.

#[cfg(test)]
#[path = "kind_test.rs"]
mod kind_test;

/// Technology a submitter declared for a record.
///
/// Matching is ASCII case-insensitive and ignores surrounding whitespace.
/// Anything unrecognized is kept lowercased in [`DeclaredKind::Other`] so the
/// legacy inference can still inspect it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclaredKind {
    Css,
    /// `tailwind` or `tailwindcss`.
    Tailwind,
    Html,
    Javascript,
    React,
    Multi,
    Other(String),
}

impl DeclaredKind {
    /// Parse a raw declared kind. Blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_ascii_lowercase();
        let kind = match lowered.as_str() {
            "" => return None,
            "css" => Self::Css,
            "tailwind" | "tailwindcss" => Self::Tailwind,
            "html" => Self::Html,
            "javascript" => Self::Javascript,
            "react" => Self::React,
            "multi" => Self::Multi,
            _ => Self::Other(lowered),
        };
        Some(kind)
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Html => "html",
            Self::Javascript => "javascript",
            Self::React => "react",
            Self::Multi => "multi",
            Self::Other(raw) => raw,
        }
    }

    /// Legacy slot inference: true when the kind's name contains `needle`.
    ///
    /// An `Other("html/css")` mentions both `html` and `css`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.as_str().contains(needle)
    }
}
