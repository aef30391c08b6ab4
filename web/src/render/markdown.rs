//! Markdown rendering for project content

use pulldown_cmark::{html, Event, Options, Parser};

/// Render Markdown to HTML. Raw HTML in the source is escaped, not passed through.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut buf = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut buf, parser);
    buf
}
