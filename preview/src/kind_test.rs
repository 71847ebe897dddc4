use super::*;

#[test]
fn parse_is_case_insensitive_and_trims() {
    assert_eq!(DeclaredKind::parse("CSS"), Some(DeclaredKind::Css));
    assert_eq!(DeclaredKind::parse("  React "), Some(DeclaredKind::React));
    assert_eq!(DeclaredKind::parse("Multi"), Some(DeclaredKind::Multi));
    assert_eq!(DeclaredKind::parse("JavaScript"), Some(DeclaredKind::Javascript));
    assert_eq!(DeclaredKind::parse("html"), Some(DeclaredKind::Html));
}

#[test]
fn parse_accepts_tailwindcss_alias() {
    assert_eq!(DeclaredKind::parse("tailwind"), Some(DeclaredKind::Tailwind));
    assert_eq!(DeclaredKind::parse("TailwindCSS"), Some(DeclaredKind::Tailwind));
}

#[test]
fn parse_blank_is_none() {
    assert_eq!(DeclaredKind::parse(""), None);
    assert_eq!(DeclaredKind::parse("   "), None);
}

#[test]
fn unknown_kinds_are_kept_lowercased() {
    assert_eq!(DeclaredKind::parse("HTML/CSS"), Some(DeclaredKind::Other("html/css".to_owned())));
}

#[test]
fn mentions_matches_substrings() {
    let mixed = DeclaredKind::Other("html/css".to_owned());
    assert!(mixed.mentions("html"));
    assert!(mixed.mentions("css"));
    assert!(!mixed.mentions("javascript"));
    assert!(DeclaredKind::Javascript.mentions("javascript"));
    assert!(!DeclaredKind::React.mentions("css"));
}
