//! Interactive quiz state: selected answers, answer reveal and grading.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{QuizError, Result};
use crate::types::{OptionLabel, QuizQuestion, QuizResult};

/// How an option should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionState {
    Idle,
    Selected,
    /// Only reported once answers are revealed.
    Correct,
}

/// Grading outcome for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Unanswered,
    Correct,
    Incorrect,
    /// The question has no answer key.
    Ungraded,
}

/// Summary of a graded quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub outcomes: Vec<Outcome>,
}

/// Selections and reveal flag for one extracted quiz.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: QuizResult,
    selections: BTreeMap<usize, OptionLabel>,
    revealed: bool,
}

impl QuizSession {
    pub fn new(questions: QuizResult) -> Self {
        Self {
            questions,
            selections: BTreeMap::new(),
            revealed: false,
        }
    }

    /// Replace the quiz. Selections are cleared and answers hidden again.
    pub fn load(&mut self, questions: QuizResult) {
        self.questions = questions;
        self.selections.clear();
        self.revealed = false;
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flip the reveal flag and return the new value.
    pub fn toggle_reveal(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    /// Record the user's choice for a question, replacing any earlier one.
    pub fn select(&mut self, index: usize, label: OptionLabel) -> Result<()> {
        if self.revealed {
            return Err(QuizError::AnswersRevealed);
        }
        let question = self
            .questions
            .get(index)
            .ok_or(QuizError::UnknownQuestion { index })?;
        if !question.has_option(label) {
            return Err(QuizError::UnknownOption { index, label });
        }

        self.selections.insert(index, label);
        Ok(())
    }

    pub fn selection(&self, index: usize) -> Option<OptionLabel> {
        self.selections.get(&index).copied()
    }

    pub fn selections(&self) -> &BTreeMap<usize, OptionLabel> {
        &self.selections
    }

    /// Display state of one option, matching what a renderer highlights.
    pub fn option_state(&self, index: usize, label: OptionLabel) -> OptionState {
        let is_answer = self
            .questions
            .get(index)
            .is_some_and(|q| q.answer_label == Some(label));

        if self.revealed && is_answer {
            OptionState::Correct
        } else if self.selection(index) == Some(label) {
            OptionState::Selected
        } else {
            OptionState::Idle
        }
    }

    /// Grade current selections. Independent of the reveal flag.
    pub fn grade(&self) -> Scorecard {
        let outcomes: Vec<Outcome> = self
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                match (question.answer_label, self.selection(index)) {
                    (_, None) => Outcome::Unanswered,
                    (None, Some(_)) => Outcome::Ungraded,
                    (Some(answer), Some(chosen)) if answer == chosen => Outcome::Correct,
                    (Some(_), Some(_)) => Outcome::Incorrect,
                }
            })
            .collect();

        Scorecard {
            total: self.questions.len(),
            answered: self.selections.len(),
            correct: outcomes.iter().filter(|o| **o == Outcome::Correct).count(),
            outcomes,
        }
    }
}
