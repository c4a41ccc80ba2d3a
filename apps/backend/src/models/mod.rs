//! API request and response types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// Re-export shared types from quiz-core
pub use quiz_core::{OptionLabel, Outcome, QuizOption, QuizQuestion, Scorecard};

/// Raw quiz text as sent by clients. Anything other than a JSON string
/// (missing, null, number, ...) is read as no text at all.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawQuiz(pub Value);

impl RawQuiz {
    pub fn as_text(&self) -> Option<&str> {
        self.0.as_str()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseQuizRequest {
    #[serde(default)]
    pub quiz: RawQuiz,
    /// Run the generator-output cleanup pass before extracting.
    #[serde(default)]
    pub tidy: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseQuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TidyQuizRequest {
    #[serde(default)]
    pub quiz: RawQuiz,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TidyQuizResponse {
    pub quiz: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizPromptRequest {
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizPromptResponse {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GradeQuizRequest {
    #[serde(default)]
    pub quiz: RawQuiz,
    /// Question index to selected label.
    #[serde(default)]
    pub selections: BTreeMap<usize, OptionLabel>,
}
