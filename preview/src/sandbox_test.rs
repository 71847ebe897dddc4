use super::*;

// =============================================================
// Policy
// =============================================================

#[test]
fn isolated_policy_allows_scripts_and_self_origin_only() {
    assert_eq!(SandboxPolicy::isolated().attribute_value(), "allow-scripts allow-same-origin");
}

#[test]
fn parse_accepts_the_isolated_tokens() {
    assert_eq!(SandboxPolicy::parse("allow-scripts allow-same-origin"), Ok(SandboxPolicy::isolated()));
    assert_eq!(SandboxPolicy::parse("  ALLOW-SAME-ORIGIN\tallow-scripts "), Ok(SandboxPolicy::isolated()));
}

#[test]
fn parse_without_same_origin_is_scripts_only() {
    let policy = SandboxPolicy::parse("allow-scripts").unwrap();
    assert_eq!(policy.attribute_value(), "allow-scripts");
}

#[test]
fn parse_rejects_widening_tokens() {
    for token in ["allow-top-navigation", "allow-forms", "allow-popups", "allow-modals"] {
        let raw = format!("allow-scripts {token}");
        assert_eq!(SandboxPolicy::parse(&raw), Err(SandboxError::Forbidden(token.to_owned())));
    }
}

#[test]
fn parse_rejects_unknown_tokens() {
    assert_eq!(SandboxPolicy::parse("allow-everything"), Err(SandboxError::Unknown("allow-everything".to_owned())));
}

// =============================================================
// Scale and markup
// =============================================================

#[test]
fn css_number_trims_trailing_zeros() {
    assert_eq!(css_number(0.55), "0.55");
    assert_eq!(css_number(100.0), "100");
    assert_eq!(css_number(100.0 / 0.5), "200");
    assert_eq!(css_number(100.0 / 0.55), "181.8182");
    assert_eq!(css_number(0.0), "0");
}

#[test]
fn wrapper_style_oversizes_then_scales_down() {
    let style = ScaleBox::new(0.5).wrapper_style();
    assert_eq!(
        style,
        "width:200%;height:200%;transform:scale(0.5);transform-origin:top left;pointer-events:none;"
    );
}

#[test]
fn scale_outside_unit_range_never_yields_infinite_wrapper() {
    assert_eq!(ScaleBox::new(0.0).scale(), crate::config::DEFAULT_SCALE);
    assert_eq!(ScaleBox::new(-2.0).scale(), crate::config::DEFAULT_SCALE);
    assert_eq!(ScaleBox::new(f64::NAN).scale(), crate::config::DEFAULT_SCALE);
    assert_eq!(ScaleBox::new(3.0).scale(), 1.0);
    let style = ScaleBox::new(0.0).wrapper_style();
    assert!(!style.contains("inf"), "{style}");
    assert!(!style.contains("NaN"), "{style}");
    assert!(ScaleBox::new(3.0).wrapper_style().starts_with("width:100%;"));
}

#[test]
fn frame_markup_uses_srcdoc_and_isolated_sandbox() {
    let markup = FrameMarkup::new("Card \"A\"", "<p class=\"x\">&</p>", 0.5).render();
    assert!(markup.contains("sandbox=\"allow-scripts allow-same-origin\""));
    assert!(markup.contains("srcdoc=\"&lt;p class=&quot;x&quot;&gt;&amp;&lt;/p&gt;\""));
    assert!(markup.contains("title=\"Card &quot;A&quot;\""));
    assert!(markup.contains(FRAME_STYLE));
    assert!(!markup.contains(" src=\""));
    assert!(!markup.contains("allow-top-navigation"));
}
