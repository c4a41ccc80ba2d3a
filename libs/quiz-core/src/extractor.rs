//! Extraction of multiple-choice questions from generated quiz text.
//!
//! # Format
//! The generator is asked for text like the following, but numbering,
//! option markers and preambles vary from run to run:
//! ```text
//! Here are 2 multiple-choice questions:
//!
//! 1. What is the main component of a CPU?
//! A) Control Unit
//! B) ALU
//! C) Memory Unit
//! D) Input Device
//! Answer: B
//!
//! 2. ...
//! ```
//!
//! Extraction is best effort and never fails: anything that cannot be read
//! as a question is either dropped or yields a sparser record.

use once_cell::sync::Lazy;

use crate::rules::{self, NoiseFilter};
use crate::types::{QuizQuestion, QuizResult};

static DEFAULT_EXTRACTOR: Lazy<Extractor> = Lazy::new(Extractor::default);

/// Extract questions using the default noise rules.
///
/// `None` is treated like empty text.
pub fn extract<'a>(text: impl Into<Option<&'a str>>) -> QuizResult {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Question extractor with a configurable noise filter.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    noise: NoiseFilter,
}

impl Extractor {
    pub fn new(noise: NoiseFilter) -> Self {
        Self { noise }
    }

    pub fn noise_filter(&self) -> &NoiseFilter {
        &self.noise
    }

    /// Extract questions in order of appearance.
    pub fn extract<'a>(&self, text: impl Into<Option<&'a str>>) -> QuizResult {
        let Some(text) = text.into() else {
            return Vec::new();
        };

        let blocks = rules::segment_blocks(text);
        let questions: QuizResult = blocks
            .iter()
            .filter_map(|block| self.extract_block(block))
            .collect();

        tracing::trace!(
            blocks = blocks.len(),
            questions = questions.len(),
            "extracted quiz"
        );
        questions
    }

    fn extract_block(&self, block: &str) -> Option<QuizQuestion> {
        let lines = rules::block_lines(block);
        let first = lines.first()?;

        let question = rules::strip_numbering(first);
        if self.noise.is_noise(question) {
            tracing::debug!(question, "discarding preamble block");
            return None;
        }

        // Options scan every line, including the question line
        Some(QuizQuestion {
            question: question.to_string(),
            options: rules::collect_options(&lines),
            answer_label: rules::find_answer(&lines),
        })
    }
}
