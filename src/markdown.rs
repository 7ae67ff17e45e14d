//! Markdown preview rendering
//!
//! Raw HTML in the document is escaped rather than passed through, since the
//! preview is injected with `inner_html`.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Parse markdown into HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_lists() {
        let html = parse_markdown("# Notes\n\n- one\n- two\n");
        assert!(html.contains("<h1>Notes</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
