//! Markdown rendering for coach feedback and chat replies.

use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Render markdown to HTML.
///
/// Raw HTML in the source is shown as text, since replies come from a
/// remote model.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn Markdown(
    content: ReadOnlySignal<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let html_content = use_memo(move || render_markdown(&content()));
    let class = match class {
        Some(extra) => format!("markdown {extra}"),
        None => "markdown".to_string(),
    };

    rsx! {
        div { class: "{class}", dangerous_inner_html: "{html_content()}" }
    }
}
