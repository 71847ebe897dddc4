//! Sandboxed frame description: permission policy, scale-down wrapper, and
//! server-side markup.
//!
//! TRADE-OFFS
//! ==========
//! The policy is a closed type. There is no way to construct a policy that
//! grants top navigation, forms, popups, or modals; parsing a token list that
//! names any of them is an error rather than a silent drop.

#[cfg(test)]
#[path = "sandbox_test.rs"]
mod sandbox_test;

use crate::config::DEFAULT_SCALE;
use crate::document::html_attr_escape;

/// Error returned by [`SandboxPolicy::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SandboxError {
    /// A recognized sandbox token that would widen the frame's permissions.
    #[error("sandbox token `{0}` is not permitted for previews")]
    Forbidden(String),
    /// A token that is not part of the sandbox vocabulary.
    #[error("unknown sandbox token `{0}`")]
    Unknown(String),
}

const ALLOW_SCRIPTS: &str = "allow-scripts";
const ALLOW_SAME_ORIGIN: &str = "allow-same-origin";

const FORBIDDEN_TOKENS: &[&str] = &[
    "allow-downloads",
    "allow-forms",
    "allow-modals",
    "allow-orientation-lock",
    "allow-pointer-lock",
    "allow-popups",
    "allow-popups-to-escape-sandbox",
    "allow-presentation",
    "allow-storage-access-by-user-activation",
    "allow-top-navigation",
    "allow-top-navigation-by-user-activation",
    "allow-top-navigation-to-custom-protocols",
];

/// Permission set for a preview frame: scripts, plus same-origin to itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SandboxPolicy {
    same_origin: bool,
}

impl SandboxPolicy {
    /// The policy every preview frame is mounted with.
    pub const fn isolated() -> Self {
        Self { same_origin: true }
    }

    /// Parse a whitespace-separated token list, rejecting anything beyond
    /// `allow-scripts` and `allow-same-origin`. `allow-scripts` is implied.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Forbidden`] for known widening tokens and
    /// [`SandboxError::Unknown`] for anything else.
    pub fn parse(raw: &str) -> Result<Self, SandboxError> {
        let mut policy = Self { same_origin: false };
        for token in raw.split_ascii_whitespace() {
            let lowered = token.to_ascii_lowercase();
            match lowered.as_str() {
                ALLOW_SCRIPTS => {}
                ALLOW_SAME_ORIGIN => policy.same_origin = true,
                other if FORBIDDEN_TOKENS.contains(&other) => return Err(SandboxError::Forbidden(other.to_owned())),
                other => return Err(SandboxError::Unknown(other.to_owned())),
            }
        }
        Ok(policy)
    }

    /// Value for the frame's `sandbox` attribute.
    pub fn attribute_value(self) -> &'static str {
        if self.same_origin {
            "allow-scripts allow-same-origin"
        } else {
            ALLOW_SCRIPTS
        }
    }
}

/// Fixed scale-down applied to the frame's parent so natural-size markup
/// fits the card footprint. The factor is always in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBox {
    scale: f64,
}

impl ScaleBox {
    /// Values above 1 clamp to 1. Zero, negative, and non-finite values
    /// fall back to [`DEFAULT_SCALE`].
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale.min(1.0) } else { DEFAULT_SCALE };
        Self { scale }
    }

    pub fn scale(self) -> f64 {
        self.scale
    }

    /// Inline style for the scaled wrapper: oversized by `1/scale`, then
    /// scaled back down from the top-left corner.
    pub fn wrapper_style(self) -> String {
        let percent = css_number(100.0 / self.scale);
        let scale = css_number(self.scale);
        format!(
            "width:{percent}%;height:{percent}%;transform:scale({scale});transform-origin:top left;pointer-events:none;"
        )
    }
}

/// Inline style for the frame itself.
pub const FRAME_STYLE: &str = "width:100%;height:100%;border:0;background:transparent;";

/// Format a CSS number with at most four decimals and no trailing zeros.
pub fn css_number(value: f64) -> String {
    let formatted = format!("{value:.4}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" { "0".to_owned() } else { trimmed.to_owned() }
}

/// Full markup of a mounted preview: scaled wrapper plus `srcdoc` frame.
#[derive(Clone, Debug)]
pub struct FrameMarkup<'a> {
    pub title: &'a str,
    pub srcdoc: &'a str,
    pub scale: ScaleBox,
    pub policy: SandboxPolicy,
}

impl<'a> FrameMarkup<'a> {
    pub fn new(title: &'a str, srcdoc: &'a str, scale: f64) -> Self {
        Self { title, srcdoc, scale: ScaleBox::new(scale), policy: SandboxPolicy::isolated() }
    }

    pub fn render(&self) -> String {
        format!(
            "<div class=\"live-preview__scale\" style=\"{wrapper}\">\
<iframe title=\"{title}\" sandbox=\"{sandbox}\" loading=\"lazy\" referrerpolicy=\"no-referrer\" \
style=\"{FRAME_STYLE}\" srcdoc=\"{srcdoc}\"></iframe></div>",
            wrapper = self.scale.wrapper_style(),
            title = html_attr_escape(self.title),
            sandbox = self.policy.attribute_value(),
            srcdoc = html_attr_escape(self.srcdoc),
        )
    }
}
