//! Quiz question set and flow controller.
//!
//! - [`builtin_questions`]: the reference question set
//! - [`QuizController`]: the `Asking → Completing → Loading → Done | Failed`
//!   state machine that collects an [`AnswerSet`]

mod controller;
mod questions;
mod types;

pub use controller::*;
pub use questions::*;
pub use types::*;
