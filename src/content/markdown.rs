// src/content/markdown.rs
// =============================================================================
// This module turns question/answer markdown into HTML.
//
// We use the `pulldown-cmark` crate which:
// - Parses Markdown into events (heading, paragraph, link, etc.)
// - Follows the CommonMark specification
// - Ships an HTML writer that turns those events back into markup
//
// Plain CommonMark only: no extensions, no sanitizing, no link rewriting.
// Raw HTML in an issue body is passed through untouched.
// =============================================================================

use pulldown_cmark::{html, Parser};

// Renders a markdown fragment to an HTML fragment
//
// Example:
//   "What is **X**?"  ->  "<p>What is <strong>X</strong>?</p>\n"
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);

    // HTML is usually a bit longer than its markdown source
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);

    out
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does Parser not return a Result?
//    - Every string is valid CommonMark; bad syntax just renders as text
//    - So render_html cannot fail and returns a plain String
//
// 2. What does push_html do?
//    - It walks the event iterator and appends HTML to the String we pass in
//    - Passing &mut out lets us pre-size the buffer ourselves
// -----------------------------------------------------------------------------
