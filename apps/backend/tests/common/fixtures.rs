//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

/// Well-formed quiz text with a generator preamble.
///
/// Question `i` (1-based) has options A-D and answer `answers[i - 1]`.
pub fn sample_quiz(answers: &[char]) -> String {
    let questions = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            format!(
                "{n}. Question {n}?\nA) Option {n}a\nB) Option {n}b\nC) Option {n}c\nD) Option {n}d\nAnswer: {answer}",
                n = i + 1,
                answer = answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Here are {} multiple-choice questions:\n\n{}", answers.len(), questions)
}

/// Messy generator output that only parses cleanly after tidying.
pub fn messy_quiz() -> &'static str {
    "Sure! Based on your notes:\n\
     1. What does the ALU do?\n\
     a- Stores data\n\
     b- Performs arithmetic\n\
     c- Controls the bus\n\
     d- Displays output\n\
     Answer: The correct answer is b"
}

/// Body for POST /api/quiz/parse.
pub fn parse_request(quiz: Value, tidy: bool) -> Value {
    json!({ "quiz": quiz, "tidy": tidy })
}

/// Body for POST /api/quiz/grade.
pub fn grade_request(quiz: &str, selections: Value) -> Value {
    json!({ "quiz": quiz, "selections": selections })
}
