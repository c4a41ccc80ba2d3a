//! Cleanup pass for raw generator output.
//!
//! Rewrites option and answer lines into one canonical shape and strips the
//! chatter a model tends to wrap around a quiz, so the text shown to users
//! and handed to the extractor looks like the requested format.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules;

/// Lowercase line prefixes treated as generator chatter.
const CHATTER_PREFIXES: &[&str] = &[
    "sure",
    "here",
    "okay",
    "alright",
    "generating",
    "based on",
    "mcq",
];

static LOOSE_OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Da-d])[).:\-]\s*(.*)").unwrap());

fn is_chatter(line: &str) -> bool {
    let lower = line.to_lowercase();
    CHATTER_PREFIXES.iter().any(|p| lower.starts_with(p))
}

fn tidy_line(line: &str) -> Option<String> {
    if is_chatter(line) {
        return None;
    }

    if let Some(caps) = LOOSE_OPTION_LINE.captures(line) {
        let label = caps[1].to_uppercase();
        return Some(format!("{}) {}", label, caps[2].trim()));
    }

    // Answer lines keep only the letter; unreadable ones are dropped
    if rules::is_answer_line(line) {
        return rules::answer_label(line).map(|label| format!("Answer: {}", label));
    }

    Some(line.to_string())
}

/// Normalize raw generator output.
///
/// - drops chatter lines (`Sure`, `Here are`, `Okay`, ...)
/// - rewrites options as `X) text`, accepting `)`, `.`, `:` and `-`
/// - rewrites answer lines as `Answer: X`
/// - removes blank lines and separates questions with one blank line
pub fn tidy_generated_quiz(text: &str) -> String {
    let mut output = Vec::new();

    for line in text.split('\n').map(str::trim) {
        let Some(tidied) = tidy_line(line) else {
            continue;
        };
        if tidied.trim().is_empty() {
            continue;
        }

        let ends_question = tidied.starts_with("Answer:");
        output.push(tidied);
        if ends_question {
            output.push(String::new());
        }
    }

    output.join("\n").trim().to_string()
}
