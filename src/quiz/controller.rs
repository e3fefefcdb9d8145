use serde::Serialize;
use tracing::{debug, info, warn};

use super::types::{AnswerSet, Question};
use crate::catalog::Catalog;
use crate::error::{QuizError, QuizResult, RecommendationResult};
use crate::recommend::{DiagnosisResult, Recommender};

/// Where the quiz currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizPhase {
    /// Waiting for the answer to question `index`.
    Asking { index: usize },
    /// All answers collected, recommendation not requested yet.
    Completing,
    /// Recommendation in flight.
    Loading,
    /// Result available.
    Done,
    /// Recommendation failed; only restart is possible.
    Failed,
}

/// Permission to run exactly one recommendation for one answer set.
#[derive(Debug, Clone)]
pub struct RecommendationTicket {
    /// Generation the ticket was issued in.
    pub generation: u64,
    pub answers: AnswerSet,
}

/// Observable state for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView<'a> {
    #[serde(flatten)]
    pub phase: QuizPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<&'a Question>,
    pub answered: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a DiagnosisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

/// Walks the user through the question set and owns the answers.
///
/// Every restart bumps a generation counter; a recommendation outcome is only
/// applied when it carries the current generation.
#[derive(Debug, Clone)]
pub struct QuizController {
    questions: Vec<Question>,
    current_index: usize,
    answers: AnswerSet,
    result: Option<DiagnosisResult>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl QuizController {
    /// Start a quiz at the first question.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            answers: AnswerSet::new(),
            result: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        if self.loading {
            QuizPhase::Loading
        } else if self.result.is_some() {
            QuizPhase::Done
        } else if self.error.is_some() {
            QuizPhase::Failed
        } else if self.current_index < self.questions.len() {
            QuizPhase::Asking {
                index: self.current_index,
            }
        } else {
            QuizPhase::Completing
        }
    }

    /// Question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase() {
            QuizPhase::Asking { index } => self.questions.get(index),
            _ => None,
        }
    }

    /// Record the answer to the current question.
    ///
    /// The stored label is the matched option's own label; a differing
    /// `label` from the caller is logged and ignored.
    pub fn select_answer(&mut self, question_id: &str, value: &str, label: &str) -> QuizResult<()> {
        let question = self.current_question().ok_or(QuizError::NotAsking)?;

        if question.id != question_id {
            return Err(QuizError::UnexpectedQuestion {
                expected: question.id.clone(),
                got: question_id.to_string(),
            });
        }

        let Some(option) = question.option(value) else {
            return Err(QuizError::UnknownOption {
                question_id: question_id.to_string(),
                value: value.to_string(),
            });
        };

        if option.label != label {
            warn!(
                question = %question_id,
                given = %label,
                expected = %option.label,
                "Answer label does not match option, using option label"
            );
        }

        let answer = super::types::Answer::new(&question.id, &question.prompt, value, &option.label);
        debug!(question = %question_id, value = %value, "Answer recorded");

        self.answers.push(answer);
        self.current_index += 1;
        Ok(())
    }

    /// Issue the one ticket for the completed answer set.
    ///
    /// Returns `None` unless the quiz is complete, has no result and is not
    /// already loading, so a repeated call cannot start a second request.
    pub fn begin_recommendation(&mut self) -> Option<RecommendationTicket> {
        if self.phase() != QuizPhase::Completing {
            return None;
        }
        if self.answers.is_empty() || self.answers.len() != self.questions.len() {
            return None;
        }

        self.loading = true;
        self.error = None;

        info!(
            generation = self.generation,
            answers = self.answers.len(),
            "Quiz complete, requesting recommendation"
        );

        Some(RecommendationTicket {
            generation: self.generation,
            answers: self.answers.clone(),
        })
    }

    /// Apply a recommendation outcome. Returns `false` when it was stale.
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: RecommendationResult<DiagnosisResult>,
    ) -> bool {
        if generation != self.generation || !self.loading {
            warn!(
                ticket_generation = generation,
                current_generation = self.generation,
                "Discarding stale recommendation outcome"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                info!(tool = %result.recommended_tool.name, "Recommendation received");
                self.result = Some(result);
            }
            Err(e) => {
                warn!(error = %e, "Recommendation failed");
                self.error = Some(e.user_message());
            }
        }
        true
    }

    /// Request, await and apply a recommendation in one step.
    ///
    /// Does nothing unless [`Self::begin_recommendation`] issues a ticket.
    pub async fn complete_with(&mut self, recommender: &dyn Recommender, catalog: &Catalog) -> bool {
        let Some(ticket) = self.begin_recommendation() else {
            return false;
        };
        let outcome = recommender.recommend(&ticket.answers, catalog).await;
        self.resolve(ticket.generation, outcome)
    }

    /// Reset to the first question, abandoning any pending request.
    pub fn restart(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.current_index = 0;
        self.answers = AnswerSet::new();
        self.result = None;
        self.loading = false;
        self.error = None;
        debug!(generation = self.generation, "Quiz restarted");
    }

    pub fn view(&self) -> QuizView<'_> {
        QuizView {
            phase: self.phase(),
            current_question: self.current_question(),
            answered: self.answers.len(),
            total: self.questions.len(),
            result: self.result.as_ref(),
            error: self.error.as_deref(),
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn result(&self) -> Option<&DiagnosisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
