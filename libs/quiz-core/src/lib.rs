//! Core quiz library shared by the backend and any rendering front end.
//!
//! Provides:
//! - Heuristic extractor turning generated quiz text into question records
//! - Cleanup pass for raw generator output
//! - Prompt rendering for the quiz generator
//! - Quiz session state and grading
//! - Shared types (QuizQuestion, QuizOption, OptionLabel)

pub mod error;
pub mod extractor;
pub mod prompt;
pub mod rules;
pub mod session;
pub mod tidy;
pub mod types;

pub use error::{QuizError, Result};
pub use extractor::{extract, Extractor};
pub use prompt::QuizPrompt;
pub use rules::NoiseFilter;
pub use session::{OptionState, Outcome, QuizSession, Scorecard};
pub use tidy::tidy_generated_quiz;
pub use types::{OptionLabel, QuizOption, QuizQuestion, QuizResult};
