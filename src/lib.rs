//! # AI Plan Diagnosis
//!
//! A ten-question quiz that recommends one AI assistant product and plan,
//! with alternatives, from a fixed catalog.
//!
//! ## Features
//!
//! - **Quiz flow**: ordered questions, one answer each, restart at any time
//! - **Generative diagnosis**: prompt rendering, Gemini call, JSON extraction
//! - **Rule-based diagnosis**: deterministic baseline plus a free-tier rule
//! - **Result repair**: catalog URLs filled in, explorer always listed
//!
//! ## Architecture
//!
//! ```text
//! Terminal ← QuizController → Recommender ─┬─ GenerativeRecommender → Gemini (HTTP)
//!                                          └─ RuleBasedRecommender
//!                     ↓
//!                 Catalog (static)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ai_plan_diagnosis::{build_recommender, Catalog, Config, QuizController};
//! use ai_plan_diagnosis::quiz::builtin_questions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let recommender = build_recommender(&config)?;
//!     let catalog = Catalog::builtin();
//!     let mut quiz = QuizController::new(builtin_questions());
//!     // ... answer every question ...
//!     quiz.complete_with(recommender.as_ref(), &catalog).await;
//!     Ok(())
//! }
//! ```

/// Product catalog: principal products, plans and the explorer entry.
pub mod catalog;
/// Configuration management.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// Gemini API client and wire types.
pub mod gemini;
/// Terminal rendering and the interactive loop.
pub mod presentation;
/// Prompt rendering for the generative recommender.
pub mod prompts;
/// Questions, answers and the quiz state machine.
pub mod quiz;
/// Recommendation strategies, parsing and repair.
pub mod recommend;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use quiz::QuizController;
pub use recommend::{build_recommender, DiagnosisResult, Recommender};
