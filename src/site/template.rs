// src/site/template.rs
// =============================================================================
// The page template and its placeholders.
//
// The template is an ordinary HTML file with literal tokens such as
// [QuestionContent] or [NextQuestionId]. Filling it means replacing every
// occurrence of every token, in a fixed order, on a fresh copy of the text.
// =============================================================================

use std::borrow::Cow;
use std::path::Path;

use tracing::debug;

use super::navigation::Navigation;
use crate::error::{ExamError, Result};

/// A token the template may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    QuestionContent,
    AnswerContent,
    PreviousQuestionId,
    CurrentQuestionId,
    NextQuestionId,
    GithubUrl,
    Title,
    TotalQuestionCount,
}

impl Placeholder {
    /// All placeholders, in the order they are substituted
    pub const ALL: [Placeholder; 8] = [
        Placeholder::QuestionContent,
        Placeholder::AnswerContent,
        Placeholder::PreviousQuestionId,
        Placeholder::CurrentQuestionId,
        Placeholder::NextQuestionId,
        Placeholder::GithubUrl,
        Placeholder::Title,
        Placeholder::TotalQuestionCount,
    ];

    /// The literal text of the token in the template
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::QuestionContent => "[QuestionContent]",
            Placeholder::AnswerContent => "[AnswerContent]",
            Placeholder::PreviousQuestionId => "[PreviousQuestionId]",
            Placeholder::CurrentQuestionId => "[CurrentQuestionId]",
            Placeholder::NextQuestionId => "[NextQuestionId]",
            Placeholder::GithubUrl => "[GithubUrl]",
            Placeholder::Title => "[Title]",
            Placeholder::TotalQuestionCount => "[TotalQuestionCount]",
        }
    }
}

/// Everything one page needs to fill the template
#[derive(Debug, Clone)]
pub struct PageFields<'a> {
    pub question_html: &'a str,
    pub answer_html: &'a str,
    pub navigation: Navigation,
    pub github_url: &'a str,
    pub title: &'a str,
    pub total_questions: usize,
}

impl PageFields<'_> {
    fn value(&self, placeholder: Placeholder) -> Cow<'_, str> {
        match placeholder {
            Placeholder::QuestionContent => Cow::Borrowed(self.question_html),
            Placeholder::AnswerContent => Cow::Borrowed(self.answer_html),
            Placeholder::PreviousQuestionId => Cow::Owned(self.navigation.previous.to_string()),
            Placeholder::CurrentQuestionId => Cow::Owned(self.navigation.current.to_string()),
            Placeholder::NextQuestionId => Cow::Owned(self.navigation.next.to_string()),
            Placeholder::GithubUrl => Cow::Borrowed(self.github_url),
            Placeholder::Title => Cow::Borrowed(self.title),
            Placeholder::TotalQuestionCount => Cow::Owned(self.total_questions.to_string()),
        }
    }
}

/// The page template, loaded once per run
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Template { text: text.into() }
    }

    /// Reads the template file (UTF-8)
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(ExamError::io(path))?;

        let missing: Vec<&str> = Placeholder::ALL
            .iter()
            .map(|p| p.token())
            .filter(|token| !text.contains(token))
            .collect();
        if !missing.is_empty() {
            debug!(path = %path.display(), ?missing, "template lacks some placeholders");
        }

        Ok(Template::new(text))
    }

    /// Returns a filled copy of the template; the template itself is unchanged
    pub fn fill(&self, fields: &PageFields<'_>) -> String {
        let mut page = self.text.clone();
        for placeholder in Placeholder::ALL {
            page = page.replace(placeholder.token(), &fields.value(placeholder));
        }
        page
    }
}
