// src/content/extract.rs
// =============================================================================
// This module splits an issue body into its question and its answer.
//
// An exam-question issue is written like this:
//
//   [Question]
//   Which service ... ?
//   [Answer]
//   Azure Functions, because ...
//
// The question is the text between the two markers; the answer is the text
// after [Answer] up to the end of the body, minus the body's final character.
//
// A body without both markers, with either marker twice, or with [Answer]
// before [Question], is reported as an error instead of being sliced at a
// bogus offset.
// =============================================================================

use tracing::debug;

use crate::error::{ExamError, Result};

/// Marker that opens the question section
pub const QUESTION_MARKER: &str = "[Question]";

/// Marker that opens the answer section
pub const ANSWER_MARKER: &str = "[Answer]";

/// The two markdown sections of one issue body, borrowed from the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

// Extracts the question and answer markdown from an issue body
//
// Parameters:
//   number: the issue number, only used in error messages
//   body: the raw issue body
//
// Returns: the two sections, or MissingMarker / DuplicateMarker / MarkerOrder
pub fn extract_sections(number: u64, body: &str) -> Result<Sections<'_>> {
    let question_marker = body.find(QUESTION_MARKER).ok_or(ExamError::MissingMarker {
        number,
        marker: QUESTION_MARKER,
    })?;
    let answer_marker = body.find(ANSWER_MARKER).ok_or(ExamError::MissingMarker {
        number,
        marker: ANSWER_MARKER,
    })?;

    let question_start = question_marker + QUESTION_MARKER.len();
    let answer_start = answer_marker + ANSWER_MARKER.len();

    if body[question_start..].contains(QUESTION_MARKER) {
        return Err(ExamError::DuplicateMarker {
            number,
            marker: QUESTION_MARKER,
        });
    }
    if body[answer_start..].contains(ANSWER_MARKER) {
        return Err(ExamError::DuplicateMarker {
            number,
            marker: ANSWER_MARKER,
        });
    }

    if answer_marker < question_marker {
        return Err(ExamError::MarkerOrder { number });
    }

    // The answer always loses the last character of the body
    let answer_end = last_char_start(body).max(answer_start);

    debug!(
        number,
        question = ?(question_start..answer_marker),
        answer = ?(answer_start..answer_end),
        "extracted sections"
    );

    Ok(Sections {
        question: &body[question_start..answer_marker],
        answer: &body[answer_start..answer_end],
    })
}

// Byte offset of the last character, so slicing up to it stays on a char
// boundary even when the body ends with multi-byte text
fn last_char_start(text: &str) -> usize {
    text.char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_body() {
        let sections = extract_sections(5, "[Question]What is X?[Answer]X is Y.").unwrap();
        assert_eq!(sections.question, "What is X?");
        assert_eq!(sections.answer, "X is Y");
    }

    #[test]
    fn test_sections_are_contiguous_span_of_body() {
        let bodies = [
            "[Question]What is X?[Answer]X is Y.",
            "Intro text\r\n[Question]\r\nPick two:\r\n- A\r\n- B\r\n[Answer]\r\nA and B\r\n",
            "[Question]Line one\n\nLine two\n[Answer]**Bold** answer\n",
        ];

        for body in bodies {
            let sections = extract_sections(1, body).unwrap();
            assert!(!sections.question.is_empty());
            assert!(!sections.answer.is_empty());

            let rebuilt = format!(
                "{}{}{}{}",
                QUESTION_MARKER, sections.question, ANSWER_MARKER, sections.answer
            );
            let start = body.find(QUESTION_MARKER).unwrap();
            assert!(body[start..].starts_with(&rebuilt), "not contiguous: {:?}", body);
        }
    }

    #[test]
    fn test_trailing_multibyte_char() {
        let sections = extract_sections(2, "[Question]Café?[Answer]Oui, café").unwrap();
        assert_eq!(sections.question, "Café?");
        assert_eq!(sections.answer, "Oui, caf");
    }

    #[test]
    fn test_answer_marker_at_end_of_body() {
        let sections = extract_sections(3, "[Question]Anything?[Answer]").unwrap();
        assert_eq!(sections.question, "Anything?");
        assert_eq!(sections.answer, "");
    }

    #[test]
    fn test_missing_question_marker() {
        let err = extract_sections(9, "What is X?[Answer]X").unwrap_err();
        assert!(matches!(
            err,
            ExamError::MissingMarker { number: 9, marker: QUESTION_MARKER }
        ));
    }

    #[test]
    fn test_missing_answer_marker() {
        let err = extract_sections(9, "[Question]What is X?").unwrap_err();
        assert!(matches!(
            err,
            ExamError::MissingMarker { number: 9, marker: ANSWER_MARKER }
        ));
    }

    #[test]
    fn test_empty_body() {
        assert!(extract_sections(4, "").is_err());
    }

    #[test]
    fn test_second_question_marker() {
        let err = extract_sections(8, "[Question]A?[Answer]a\n[Question]B?").unwrap_err();
        assert!(matches!(
            err,
            ExamError::DuplicateMarker { number: 8, marker: QUESTION_MARKER }
        ));
    }

    #[test]
    fn test_second_answer_marker() {
        let err = extract_sections(8, "[Question]A?[Answer]a\n[Answer]b.").unwrap_err();
        assert!(matches!(
            err,
            ExamError::DuplicateMarker { number: 8, marker: ANSWER_MARKER }
        ));
    }

    #[test]
    fn test_markers_out_of_order() {
        let err = extract_sections(6, "[Answer]Y.[Question]X?").unwrap_err();
        assert!(matches!(err, ExamError::MarkerOrder { number: 6 }));
    }
}
