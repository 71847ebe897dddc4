//! Compile a [`PreviewSource`] into one self-contained HTML document.
//!
//! Every generated document shares the same shell: a reset rule, a
//! flex-centered transparent non-scrolling `html`/`body`, then the
//! branch-specific head and body content. Passthrough documents (and
//! assembled `multi` documents) are returned untouched.
//!
//! Output is a pure function of `(source, config)`.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::config::PreviewConfig;
use crate::record::ContentRecord;
use crate::source::{LegacySlots, MultiSource, PreviewSource};

pub(crate) const RESET_RULE: &str = "*{margin:0;padding:0;box-sizing:border-box;}";
pub(crate) const LAYOUT_RULE: &str = "html,body{width:100%;height:100%;display:flex;align-items:center;\
justify-content:center;background:transparent;overflow:hidden;}";

const REACT_ERROR_STYLE: &str = "color:#dc2626;font-family:monospace;font-size:14px;padding:12px;white-space:pre-wrap;";

/// Compile a normalized source.
pub fn compile(source: &PreviewSource, config: &PreviewConfig) -> String {
    match source {
        PreviewSource::Document { html } | PreviewSource::Multi(MultiSource::Assembled { html }) => html.clone(),
        PreviewSource::Tailwind { markup } => tailwind_document(markup, config),
        PreviewSource::React { code } => react_document(code, config),
        PreviewSource::Multi(MultiSource::Fragments { html, css }) | PreviewSource::SplitCss { html, css } => {
            fragments_document(html, css)
        }
        PreviewSource::Legacy(slots) => legacy_document(slots),
    }
}

/// Normalize and compile a record in one step.
pub fn compile_record(record: &ContentRecord, config: &PreviewConfig) -> String {
    compile(&record.normalize(), config)
}

#[derive(Default)]
struct Shell<'a> {
    head: &'a str,
    style: &'a str,
    body: &'a str,
}

impl Shell<'_> {
    fn render(&self) -> String {
        let mut out = String::with_capacity(256 + self.head.len() + self.style.len() + self.body.len());
        out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
        out.push_str(self.head);
        out.push_str("<style>");
        out.push_str(RESET_RULE);
        out.push_str(LAYOUT_RULE);
        out.push_str("</style>");
        if !self.style.is_empty() {
            out.push_str("<style>");
            out.push_str(self.style);
            out.push_str("</style>");
        }
        out.push_str("</head><body>");
        out.push_str(self.body);
        out.push_str("</body></html>");
        out
    }
}

fn tailwind_document(markup: &str, config: &PreviewConfig) -> String {
    let head = script_src(&config.tailwind_cdn);
    Shell { head: &head, body: markup, ..Shell::default() }.render()
}

fn fragments_document(html: &str, css: &str) -> String {
    Shell { style: css, body: html, ..Shell::default() }.render()
}

fn legacy_document(slots: &LegacySlots) -> String {
    let mut body = slots.body.clone();
    if !slots.script.is_empty() {
        body.push_str("<script>");
        body.push_str(&escape_script(&slots.script));
        body.push_str("</script>");
    }
    Shell { style: &slots.style, body: &body, ..Shell::default() }.render()
}

fn react_document(code: &str, config: &PreviewConfig) -> String {
    let head = [&config.react_cdn, &config.react_dom_cdn, &config.babel_cdn]
        .into_iter()
        .map(|src| script_src(src))
        .collect::<String>();
    let body = format!(
        "<div id=\"root\"></div>\
<script>{guard}</script>\
<script type=\"text/babel\">\n\
try {{\n{code}\n{mount}\n}} catch (err) {{\n  __previewFail(err);\n}}\n</script>",
        guard = react_error_guard(),
        code = escape_script(code),
        mount = REACT_MOUNT,
    );
    Shell { head: &head, body: &body, ..Shell::default() }.render()
}

// Renders the first of `Component`/`App` that the submitted code defines,
// inside a boundary so render-time throws are caught too.
const REACT_MOUNT: &str = "\
const __PreviewTarget = typeof Component !== 'undefined' ? Component : (typeof App !== 'undefined' ? App : null);
if (__PreviewTarget) {
  class __PreviewBoundary extends React.Component {
    constructor(props) { super(props); this.state = { error: null }; }
    static getDerivedStateFromError(error) { return { error }; }
    componentDidCatch(error) { __previewFail(error); }
    render() { return this.state.error ? null : this.props.children; }
  }
  ReactDOM.createRoot(document.getElementById('root')).render(
    React.createElement(__PreviewBoundary, null, React.createElement(__PreviewTarget))
  );
}";

// Installed before the babel script so transpile errors land in the frame too.
fn react_error_guard() -> String {
    format!(
        "function __previewFail(err) {{\
var root = document.getElementById('root');\
if (!root) return;\
var box = document.createElement('div');\
box.setAttribute('style', '{REACT_ERROR_STYLE}');\
box.textContent = 'Error: ' + (err && err.message ? err.message : String(err));\
root.replaceChildren(box);\
}}\
window.addEventListener('error', function (ev) {{ __previewFail(ev.error || ev.message); }});"
    )
}

fn script_src(src: &str) -> String {
    format!("<script src=\"{}\"></script>", html_attr_escape(src))
}

/// Neutralize closing script tags so embedded code cannot end its block early.
pub(crate) fn escape_script(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut rest = code;
    while let Some(idx) = find_ascii_ci(rest, "</script") {
        out.push_str(&rest[..idx]);
        out.push_str("<\\/");
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}

fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Escape text for use inside a double-quoted HTML attribute.
pub fn html_attr_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
