use super::*;

fn item() -> ComponentItem {
    ComponentItem {
        id: "c-1".to_owned(),
        title: "Glow Button".to_owned(),
        author: None,
        technology: Some("css".to_owned()),
        code: None,
        html_code: Some("<button>Hi</button>".to_owned()),
        css_code: Some("button{color:red}".to_owned()),
        tailwind_code: None,
        status: ReviewStatus::Approved,
    }
}

fn render_card() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <ComponentCard item=item()/> }.to_html())
}

#[test]
fn preview_region_is_not_nested_in_a_link() {
    let html = render_card();
    let preview_at = html.find("class=\"live-preview\"").unwrap();
    let before = &html[..preview_at];
    assert_eq!(before.matches("<a ").count(), before.matches("</a>").count(), "{html}");
}

#[test]
fn overlay_link_is_empty_and_labelled() {
    let html = render_card();
    let overlay_at = html.find("component-card__overlay").unwrap();
    let rest = &html[overlay_at..];
    assert!(rest.contains("aria-label=\"Open Glow Button\""), "{html}");
    let tag_end = rest.find('>').unwrap();
    assert!(rest[tag_end + 1..].starts_with("</a>"), "{html}");
}
