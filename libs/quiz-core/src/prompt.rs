//! Instruction text sent to the quiz generator.

use crate::error::{QuizError, Result};

/// Default number of questions requested per quiz.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

const EXAMPLE_QUESTION: &str = "\
1. What is the main component of a CPU?
A) Control Unit
B) ALU
C) Memory Unit
D) Input Device
Answer: B";

/// Prompt builder for multiple-choice quiz generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizPrompt {
    pub question_count: usize,
}

impl Default for QuizPrompt {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl QuizPrompt {
    pub fn new(question_count: usize) -> Self {
        Self {
            question_count: question_count.max(1),
        }
    }

    /// Render the prompt for the given lecture notes.
    pub fn render(&self, notes: &str) -> Result<String> {
        let notes = notes.trim();
        if notes.is_empty() {
            return Err(QuizError::EmptyNotes);
        }

        Ok(format!(
            "You are a professional MCQ generator that strictly follows instructions.\n\
             \n\
             You are given lecture notes. Using only the information in those notes, \
             write {count} factual multiple-choice questions.\n\
             \n\
             Each question must have:\n\
             - Exactly 4 distinct, realistic options labeled A, B, C, D.\n\
             - Exactly one factually correct option.\n\
             - A correct option chosen at random, not always A.\n\
             - A final line in exactly this format: Answer: X\n\
             \x20 where X is only the letter of the correct option (A-D).\n\
             \n\
             Do not include explanations, reasoning or commentary.\n\
             Do not use emojis or symbols.\n\
             \n\
             Example format (follow exactly):\n\
             {example}\n\
             \n\
             Now write the quiz using only these notes:\n\
             {notes}\n",
            count = self.question_count,
            example = EXAMPLE_QUESTION,
            notes = notes,
        ))
    }
}
