// src/content/mod.rs
// =============================================================================
// This module turns an issue body into page content.
//
// Submodules:
// - extract: splits the body at the [Question] / [Answer] markers
// - markdown: renders each section to HTML
// =============================================================================

mod extract;
mod markdown;

use extract::extract_sections;
use markdown::render_html;

/// Question and answer of one issue, rendered to HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedContent {
    pub question_html: String,
    pub answer_html: String,
}

/// Extracts both sections of `body` and renders them
pub fn render_issue_body(number: u64, body: &str) -> crate::error::Result<RenderedContent> {
    let sections = extract_sections(number, body)?;

    Ok(RenderedContent {
        question_html: render_html(sections.question),
        answer_html: render_html(sections.answer),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_issue_body() {
        let content = render_issue_body(5, "[Question]What is X?[Answer]X is Y.").unwrap();
        assert_eq!(content.question_html, "<p>What is X?</p>\n");
        assert_eq!(content.answer_html, "<p>X is Y</p>\n");
    }
}
