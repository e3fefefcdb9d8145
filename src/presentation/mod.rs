//! Text rendering of quiz state.
//!
//! Rendering is a pure function of [`QuizView`]; the interactive loop lives
//! in [`TerminalQuiz`].

mod terminal;

pub use terminal::*;

use std::fmt::Write;

use crate::quiz::{Question, QuizOption, QuizPhase, QuizView};
use crate::recommend::DiagnosisResult;

pub const APP_TITLE: &str = "AIツールプラン診断";
pub const LOADING_MESSAGE: &str = "あなたに最適なプランを診断中です...";
pub const RESTART_HINT: &str = "[r] もう一度診断する  [q] 終了";

/// Title banner.
pub fn render_header() -> String {
    format!("==== {} ====\n", APP_TITLE)
}

/// Question with progress line and numbered options.
pub fn render_question(question: &Question, index: usize, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "質問 {} / {}", index + 1, total);
    let _ = writeln!(out, "{}", progress_bar(index + 1, total, 20));
    let _ = writeln!(out, "{}", question.prompt);
    for (i, option) in question.options.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, option.label);
    }
    out
}

fn progress_bar(done: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 { 0 } else { done * width / total };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled.min(width)))
}

/// Result card followed by the alternatives.
pub fn render_result(result: &DiagnosisResult) -> String {
    let tool = &result.recommended_tool;
    let mut out = String::new();
    let _ = writeln!(out, "診断結果");
    let _ = writeln!(out, "あなたに最適なAIツールプランはこちらです！\n");
    let _ = writeln!(out, "{} - {}  [{}]", tool.name, tool.plan, tool.level);
    let _ = writeln!(out, "{}", tool.reasoning);
    let _ = writeln!(out, "公式サイトへ: {}", tool.url);

    if !result.alternative_tools.is_empty() {
        let _ = writeln!(out, "\nその他の推奨ツール");
        for alt in &result.alternative_tools {
            let _ = writeln!(out, "- {}: {}", alt.name, alt.description);
            let _ = writeln!(out, "  詳細を見る: {}", alt.url);
        }
    }
    out
}

/// Error panel.
pub fn render_error(message: &str) -> String {
    format!("エラーが発生しました\n{}\n", message)
}

/// Render whatever the view currently shows.
pub fn render_view(view: &QuizView<'_>) -> String {
    match view.phase {
        QuizPhase::Asking { index } => view
            .current_question
            .map(|q| render_question(q, index, view.total))
            .unwrap_or_default(),
        QuizPhase::Completing | QuizPhase::Loading => format!("{}\n", LOADING_MESSAGE),
        QuizPhase::Done => {
            let body = view.result.map(render_result).unwrap_or_default();
            format!("{}\n{}\n", body, RESTART_HINT)
        }
        QuizPhase::Failed => {
            let body = render_error(view.error.unwrap_or_default());
            format!("{}\n{}\n", body, RESTART_HINT)
        }
    }
}

/// Map a typed 1-based number to an option.
pub fn parse_choice<'a>(input: &str, question: &'a Question) -> Option<&'a QuizOption> {
    let n: usize = input.trim().parse().ok()?;
    n.checked_sub(1).and_then(|i| question.options.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{builtin_questions, QuizController};
    use crate::recommend::{AlternativeTool, RecommendationLevel, RecommendedTool};

    #[test]
    fn test_render_question_numbers_options() {
        let questions = builtin_questions();
        let text = render_question(&questions[0], 0, questions.len());
        assert!(text.starts_with("質問 1 / 10"));
        assert!(text.contains("  1. 文章作成・校正"));
        assert!(text.contains("  4. 情報収集・調査"));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0, 10, 10), "[----------]");
        assert_eq!(progress_bar(10, 10, 10), "[##########]");
        assert_eq!(progress_bar(1, 0, 4), "[----]");
    }

    #[test]
    fn test_parse_choice() {
        let questions = builtin_questions();
        let q = &questions[0];
        assert_eq!(parse_choice("2", q).unwrap().value, "プログラミング支援");
        assert_eq!(parse_choice(" 1 \n", q).unwrap().value, "文章作成・校正");
        assert!(parse_choice("0", q).is_none());
        assert!(parse_choice("9", q).is_none());
        assert!(parse_choice("abc", q).is_none());
    }

    #[test]
    fn test_render_result_lists_alternatives() {
        let result = DiagnosisResult {
            recommended_tool: RecommendedTool {
                name: "ChatGPT".to_string(),
                plan: "Plus".to_string(),
                url: "https://chat.openai.com/plus".to_string(),
                reasoning: "万能".to_string(),
                level: RecommendationLevel::StronglyRecommended,
            },
            alternative_tools: vec![AlternativeTool {
                name: "Genpark".to_string(),
                description: "いろいろ試したい人向け".to_string(),
                url: "https://www.genpark.ai/".to_string(),
            }],
        };
        let text = render_result(&result);
        assert!(text.contains("ChatGPT - Plus  [強く推奨]"));
        assert!(text.contains("- Genpark: いろいろ試したい人向け"));
        assert!(text.contains("詳細を見る: https://www.genpark.ai/"));
    }

    #[test]
    fn test_render_view_for_each_phase() {
        let mut quiz = QuizController::new(builtin_questions());
        assert!(render_view(&quiz.view()).contains("質問 1 / 10"));

        for question in builtin_questions() {
            let option = &question.options[0];
            quiz.select_answer(&question.id, &option.value, &option.label)
                .unwrap();
        }
        assert!(render_view(&quiz.view()).contains(LOADING_MESSAGE));

        let ticket = quiz.begin_recommendation().unwrap();
        quiz.resolve(
            ticket.generation,
            Err(crate::error::RecommendationError::malformed("x")),
        );
        let text = render_view(&quiz.view());
        assert!(text.contains("エラーが発生しました"));
        assert!(text.contains(RESTART_HINT));
    }
}
