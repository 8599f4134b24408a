//! Markdown processing for doc pages.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Strip a leading frontmatter block (`--- ... ---`) from a document.
///
/// Guide files carry frontmatter that the generated pages do not use; the
/// block is discarded, not parsed. Documents without frontmatter, or with
/// an unclosed block, are returned unchanged.
pub fn strip_frontmatter(source: &str) -> &str {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return source;
    }

    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return source;
    };

    after_open[close_pos + 4..].trim_start()
}

/// Render markdown to an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Extract the text of the first heading, used as a page title fallback.
pub fn first_heading(content: &str) -> Option<String> {
    let parser = Parser::new_ext(content, Options::empty());

    let mut in_heading = false;
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::Text(t) if in_heading => text.push_str(&t),
            Event::Code(t) if in_heading => text.push_str(&t),
            Event::End(TagEnd::Heading(_)) => {
                if text.is_empty() {
                    return None;
                }
                return Some(text);
            }
            _ => {}
        }
    }

    None
}
