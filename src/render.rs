//! Wraps the Markdown-to-HTML conversion capability.

use pulldown_cmark::{html, Parser};

/// Renders raw Markdown bytes to HTML using the default CommonMark rules.
///
/// No extensions are enabled. Invalid UTF-8 sequences are replaced with
/// U+FFFD before parsing, so this never fails.
pub fn markdown_to_html(markdown: &[u8]) -> String {
    let source = String::from_utf8_lossy(markdown);
    let parser = Parser::new(&source);

    let mut html_output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}
