// src/site/generate.rs
// =============================================================================
// Builds one page per issue, entirely in memory.
//
// For each issue, in fetch order:
// 1. Work out previous / current / next ids from its position
// 2. Extract and render the question and answer
// 3. Fill a copy of the template
//
// Nothing is written here. publish.rs takes the finished pages, so a bad issue
// body stops the run before the output directory is touched.
// =============================================================================

use std::path::{Path, PathBuf};

use tracing::debug;

use super::navigation::Navigation;
use super::template::{PageFields, Template};
use crate::content::render_issue_body;
use crate::error::Result;
use crate::github::Issue;

/// A finished page, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub number: u64,
    /// `<output dir>/<number>.html`
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedPage {
    pub fn file_name(&self) -> String {
        page_file_name(self.number)
    }
}

/// File name of the page for issue `number`
pub fn page_file_name(number: u64) -> String {
    format!("{}.html", number)
}

/// Page title: the upper-cased exam label and the issue number, e.g. `AZ-204#5`
pub fn page_title(label: &str, number: u64) -> String {
    format!("{}#{}", label.to_uppercase(), number)
}

// Builds the pages for all issues
//
// Parameters:
//   issues: issues in fetch order (the order drives navigation)
//   template: the loaded page template
//   label: exam label, used in the title
//   out_dir: directory the pages will live in
//
// Returns: one page per issue, same order, or the first extraction error
pub fn build_pages(
    issues: &[Issue],
    template: &Template,
    label: &str,
    out_dir: &Path,
) -> Result<Vec<GeneratedPage>> {
    let total = issues.len();
    let mut pages = Vec::with_capacity(total);

    for (index, issue) in issues.iter().enumerate() {
        let navigation = Navigation::for_position(issue.number, index, total);
        let content = render_issue_body(issue.number, issue.body())?;
        let title = page_title(label, issue.number);

        let fields = PageFields {
            question_html: &content.question_html,
            answer_html: &content.answer_html,
            navigation,
            github_url: &issue.html_url,
            title: &title,
            total_questions: total,
        };

        debug!(number = issue.number, ?navigation, "built page");

        pages.push(GeneratedPage {
            number: issue.number,
            path: out_dir.join(page_file_name(issue.number)),
            content: template.fill(&fields),
        });
    }

    Ok(pages)
}
