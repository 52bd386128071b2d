use dioxus::prelude::*;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const SAFE_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

fn is_safe_link(dest: &str) -> bool {
    let lower = dest.trim().to_ascii_lowercase();
    !lower.contains(':') || SAFE_SCHEMES.iter().any(|s| lower.starts_with(s))
}

/// Renders user supplied markdown to HTML.
///
/// Raw HTML blocks are emitted as text and links or images with a scheme other
/// than http(s)/mailto are neutralised.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(Tag::Link(kind, dest, title)) if !is_safe_link(&dest) => {
            Event::Start(Tag::Link(kind, CowStr::Borrowed("#"), title))
        }
        Event::Start(Tag::Image(kind, dest, title)) if !is_safe_link(&dest) => {
            Event::Start(Tag::Image(kind, CowStr::Borrowed(""), title))
        }
        other => other,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, events);
    output
}

#[component]
pub fn Markdown(source: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();
    let rendered = render_markdown(&source);

    rsx!(div {
        class: "prose max-w-none {class}",
        dangerous_inner_html: "{rendered}"
    })
}
