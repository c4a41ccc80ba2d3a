//! Quiz endpoints

use axum::{extract::State, Json};
use quiz_core::{tidy_generated_quiz, QuizSession};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/quiz/parse
pub async fn parse(
    State(state): State<AppState>,
    Json(payload): Json<ParseQuizRequest>,
) -> Json<ParseQuizResponse> {
    let questions = match (payload.quiz.as_text(), payload.tidy) {
        (Some(text), true) => state.extractor.extract(tidy_generated_quiz(text).as_str()),
        (text, _) => state.extractor.extract(text),
    };

    if questions.is_empty() {
        tracing::warn!("No questions could be extracted from quiz text");
    } else {
        tracing::info!("Extracted {} questions", questions.len());
    }

    Json(ParseQuizResponse { questions })
}

/// POST /api/quiz/tidy
pub async fn tidy(Json(payload): Json<TidyQuizRequest>) -> Json<TidyQuizResponse> {
    let quiz = payload
        .quiz
        .as_text()
        .map(tidy_generated_quiz)
        .unwrap_or_default();

    Json(TidyQuizResponse { quiz })
}

/// POST /api/quiz/prompt
pub async fn prompt(
    State(state): State<AppState>,
    Json(payload): Json<QuizPromptRequest>,
) -> Result<Json<QuizPromptResponse>> {
    let prompt = state.prompt.render(&payload.notes)?;
    Ok(Json(QuizPromptResponse { prompt }))
}

/// POST /api/quiz/grade
pub async fn grade(
    State(state): State<AppState>,
    Json(payload): Json<GradeQuizRequest>,
) -> Result<Json<Scorecard>> {
    let mut session = QuizSession::new(state.extractor.extract(payload.quiz.as_text()));
    for (index, label) in payload.selections {
        session.select(index, label)?;
    }

    let scorecard = session.grade();
    tracing::info!(
        "Graded quiz: {}/{} correct",
        scorecard.correct,
        scorecard.total
    );

    Ok(Json(scorecard))
}
