//! Core types for extracted quizzes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// All labels in display order.
    pub const ALL: [OptionLabel; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Create from a letter, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// Parse a single-letter string, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Uppercase letter for this label.
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One labelled answer candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub label: OptionLabel,
    pub text: String,
}

impl QuizOption {
    pub fn new(label: OptionLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// Question extracted from one block of generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Question text with its numbering stripped. May be empty.
    pub question: String,
    /// Options in source line order. Labels may repeat.
    pub options: Vec<QuizOption>,
    /// Correct label, when the block declared one.
    pub answer_label: Option<OptionLabel>,
}

impl QuizQuestion {
    /// Look up an option by label. The last occurrence wins when labels repeat.
    pub fn option(&self, label: OptionLabel) -> Option<&QuizOption> {
        self.options.iter().rev().find(|o| o.label == label)
    }

    /// Whether the question offers an option with this label.
    pub fn has_option(&self, label: OptionLabel) -> bool {
        self.options.iter().any(|o| o.label == label)
    }
}

/// Questions in order of appearance in the source text.
pub type QuizResult = Vec<QuizQuestion>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_from_char_ignores_case() {
        assert_eq!(OptionLabel::from_char('b'), Some(OptionLabel::B));
        assert_eq!(OptionLabel::from_char('D'), Some(OptionLabel::D));
        assert_eq!(OptionLabel::from_char('e'), None);
    }

    #[test]
    fn label_parse_requires_single_letter() {
        assert_eq!(OptionLabel::parse(" c "), Some(OptionLabel::C));
        assert_eq!(OptionLabel::parse("AB"), None);
        assert_eq!(OptionLabel::parse(""), None);
    }

    #[test]
    fn question_serializes_with_camel_case_answer() {
        let q = QuizQuestion {
            question: "What is 2+2?".to_string(),
            options: vec![QuizOption::new(OptionLabel::B, "4")],
            answer_label: Some(OptionLabel::B),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["answerLabel"], "B");
        assert_eq!(json["options"][0]["label"], "B");
        assert_eq!(json["options"][0]["text"], "4");
    }

    #[test]
    fn missing_answer_serializes_as_null() {
        let q = QuizQuestion {
            question: "Open".to_string(),
            options: vec![],
            answer_label: None,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert!(json["answerLabel"].is_null());
    }

    #[test]
    fn repeated_label_lookup_prefers_last() {
        let q = QuizQuestion {
            question: "Dup".to_string(),
            options: vec![
                QuizOption::new(OptionLabel::A, "first"),
                QuizOption::new(OptionLabel::A, "second"),
            ],
            answer_label: None,
        };
        assert_eq!(q.option(OptionLabel::A).unwrap().text, "second");
        assert!(!q.has_option(OptionLabel::C));
    }
}
