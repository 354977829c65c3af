//! # Markdown Rendering
//!
//! Page bodies are written in markdown and converted with `pulldown-cmark`.
//! There is no custom syntax; this is a pass-through with the extensions
//! the page content uses (tables, strikethrough).

use pulldown_cmark::{html, Options, Parser};

/// Render markdown to an HTML string.
///
/// Raw HTML blocks pass through untouched, so rendering already-rendered
/// output again leaves it unchanged.
///
/// # Example
///
/// ```rust
/// use calc_core::markdown::render_markdown;
///
/// let html = render_markdown("**log** of 100 is 2");
/// assert_eq!(html, "<p><strong>log</strong> of 100 is 2</p>\n");
/// ```
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_render() {
        assert_eq!(render_markdown("# Title"), "<h1>Title</h1>\n");
        assert_eq!(render_markdown("plain text"), "<p>plain text</p>\n");
    }

    #[test]
    fn test_idempotent_on_rendered_plain_text() {
        for text in ["plain text", "The GCF of 12 and 18 is 6.", "sin 30 = 0.5"] {
            let once = render_markdown(text);
            let twice = render_markdown(&once);
            assert_eq!(once, twice, "input {:?}", text);
        }
    }

    #[test]
    fn test_html_block_passes_through() {
        let html = "<p>already html</p>\n";
        assert_eq!(render_markdown(html), html);
    }

    #[test]
    fn test_tables_enabled() {
        let md = "| x | log10(x) |\n|---|---|\n| 100 | 2 |\n";
        let html = render_markdown(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>100</td>"));
    }

    #[test]
    fn test_escapes_text() {
        let html = render_markdown("a < b & c");
        assert_eq!(html, "<p>a &lt; b &amp; c</p>\n");
    }
}
