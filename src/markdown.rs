//! Markdown Rendering
//!
//! Wraps pulldown-cmark for the static About and Portfolio pages:
//! - Raw HTML in the source is shown as text, never injected
//! - Links open in a new tab; only http, https, mailto and relative targets survive

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Link schemes allowed through; anything else becomes `#`
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser.map(transform_event));
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn transform_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { dest_url, .. }) => Event::Html(CowStr::from(format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
            safe_href(&dest_url)
        ))),
        Event::End(TagEnd::Link) => Event::Html(CowStr::from("</a>")),
        other => other,
    }
}

/// Browsers drop whitespace and control characters inside URLs, so the scheme
/// is checked on the cleaned string.
fn safe_href(url: &str) -> String {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();

    let allowed = match cleaned.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
        Some(end) if cleaned[end..].starts_with(':') => {
            ALLOWED_SCHEMES.contains(&cleaned[..end].to_ascii_lowercase().as_str())
        }
        // Relative link
        _ => true,
    };

    if allowed {
        escape_html(&cleaned)
    } else {
        "#".to_string()
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Render a single paragraph without its outer <p> tags
    fn parse_markdown_inline(text: &str) -> String {
        let html = parse_markdown(text);

        html.trim()
            .strip_prefix("<p>")
            .and_then(|s| s.strip_suffix("</p>"))
            .map(|s| s.to_string())
            .unwrap_or(html)
    }

    #[test]
    fn test_block_markdown() {
        assert_eq!(parse_markdown("# About"), "<h1>About</h1>\n");
        assert_eq!(
            parse_markdown("- one\n- two"),
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(parse_markdown_inline("**buy** milk"), "<strong>buy</strong> milk");
        assert_eq!(parse_markdown_inline("~~done~~"), "<del>done</del>");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        assert_eq!(parse_markdown_inline("<b>x</b>"), "&lt;b&gt;x&lt;/b&gt;");
    }

    #[test]
    fn test_links_open_in_new_tab() {
        assert_eq!(
            parse_markdown_inline("[site](https://example.com)"),
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">site</a>"#
        );
        assert_eq!(
            parse_markdown_inline("[home](/about)"),
            r#"<a href="/about" target="_blank" rel="noopener noreferrer">home</a>"#
        );
        assert_eq!(
            parse_markdown_inline("[mail](MAILTO:me@example.com)"),
            r#"<a href="MAILTO:me@example.com" target="_blank" rel="noopener noreferrer">mail</a>"#
        );
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let neutralised = r##"<a href="#" target="_blank" rel="noopener noreferrer">x</a>"##;
        for source in [
            "[x](javascript:alert(1))",
            "[x](JavaScript:alert(1))",
            "[x](java&#9;script:alert(1))",
            "[x](java&#10;script:alert(1))",
            "[x](&#1;javascript:alert(1))",
            "[x](vbscript:msgbox)",
            "[x](data:text/html;base64,PHNjcmlwdD4=)",
        ] {
            assert_eq!(parse_markdown_inline(source), neutralised, "{}", source);
        }
    }

    #[test]
    fn test_safe_href_strips_hidden_characters() {
        assert_eq!(safe_href(" https://exa\tmple.com\n"), "https://example.com");
        assert_eq!(safe_href("page?a=1&b=2"), "page?a=1&amp;b=2");
        assert_eq!(safe_href("/path:with-colon"), "/path:with-colon");
    }
}
