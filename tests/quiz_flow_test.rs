//! Quiz flow tests
//!
//! Drives the controller through complete sessions against real
//! recommenders, including outcomes that arrive after a restart.

use std::sync::Arc;

use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use ai_plan_diagnosis::config::{
    Config, GeminiConfig, LogFormat, LoggingConfig, RecommenderKind, RequestConfig,
};
use ai_plan_diagnosis::quiz::{builtin_questions, QuizController, QuizPhase, FREE_BUDGET_VALUE};
use ai_plan_diagnosis::recommend::{build_recommender, Recommender, RuleBasedRecommender};
use ai_plan_diagnosis::Catalog;

/// Answer every remaining question, choosing `pick(question_index)`.
fn answer_all(quiz: &mut QuizController, pick: impl Fn(usize) -> usize) {
    while let Some(question) = quiz.current_question().cloned() {
        let index = match quiz.phase() {
            QuizPhase::Asking { index } => index,
            _ => unreachable!(),
        };
        let option = &question.options[pick(index) % question.options.len()];
        quiz.select_answer(&question.id, &option.value, &option.label)
            .expect("answer should be accepted");
    }
}

fn generative_config(base_url: &str) -> Config {
    Config {
        recommender: RecommenderKind::Generative,
        gemini: GeminiConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: base_url.to_string(),
            model: "test-model".to_string(),
            temperature: 0.5,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        },
        request: RequestConfig { timeout_ms: 5000 },
    }
}

#[tokio::test]
async fn test_rule_based_session_reaches_done() {
    let catalog = Catalog::builtin();
    let recommender = RuleBasedRecommender::new();
    let mut quiz = QuizController::new(builtin_questions());

    answer_all(&mut quiz, |_| 0);
    assert_eq!(quiz.phase(), QuizPhase::Completing);
    assert_eq!(quiz.answers().len(), 10);
    assert_eq!(quiz.answers().value_of("q6"), Some(FREE_BUDGET_VALUE));

    assert!(quiz.complete_with(&recommender, &catalog).await);
    assert_eq!(quiz.phase(), QuizPhase::Done);
    assert_eq!(quiz.result().unwrap().recommended_tool.name, "Gemini");

    // A second completion attempt is a no-op.
    assert!(!quiz.complete_with(&recommender, &catalog).await);
}

#[tokio::test]
async fn test_generative_failure_then_restart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let recommender = build_recommender(&generative_config(&server.uri())).unwrap();
    let catalog = Catalog::builtin();
    let mut quiz = QuizController::new(builtin_questions());

    answer_all(&mut quiz, |i| i);
    assert!(quiz.complete_with(recommender.as_ref(), &catalog).await);
    assert_eq!(quiz.phase(), QuizPhase::Failed);
    assert!(quiz
        .error()
        .unwrap()
        .starts_with("診断の取得中にエラーが発生しました"));

    quiz.restart();
    assert_eq!(quiz.phase(), QuizPhase::Asking { index: 0 });
    assert!(quiz.error().is_none());
    assert!(quiz.answers().is_empty());
}

#[tokio::test]
async fn test_generative_success_through_controller() {
    let server = MockServer::start().await;
    let reply = json!({
        "recommendedTool": {
            "name": "ChatGPT",
            "plan": "Team",
            "reasoning": "チームでの利用",
            "level": "強く推奨"
        },
        "alternativeTools": [{ "name": "Claude", "description": "長文向け" }]
    })
    .to_string();
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": reply }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let recommender = build_recommender(&generative_config(&server.uri())).unwrap();
    let catalog = Catalog::builtin();
    let mut quiz = QuizController::new(builtin_questions());

    answer_all(&mut quiz, |_| 1);
    assert!(quiz.complete_with(recommender.as_ref(), &catalog).await);

    let result = quiz.result().unwrap();
    assert_eq!(result.recommended_tool.url, "https://openai.com/chatgpt/team");
    assert_eq!(result.alternative_tools[0].name, "Genpark");
    assert_eq!(result.alternative_tools[1].url, "https://claude.ai/");
}

#[tokio::test]
async fn test_outcome_arriving_after_restart_is_ignored() {
    let catalog = Arc::new(Catalog::builtin());
    let recommender: Arc<dyn Recommender> = Arc::new(RuleBasedRecommender::new());
    let mut quiz = QuizController::new(builtin_questions());

    answer_all(&mut quiz, |_| 0);
    let ticket = quiz.begin_recommendation().unwrap();
    assert_eq!(quiz.phase(), QuizPhase::Loading);

    let pending = {
        let recommender = Arc::clone(&recommender);
        let catalog = Arc::clone(&catalog);
        let answers = ticket.answers.clone();
        tokio::spawn(async move { recommender.recommend(&answers, &catalog).await })
    };

    quiz.restart();
    let outcome = pending.await.unwrap();

    assert!(!quiz.resolve(ticket.generation, outcome));
    assert_eq!(quiz.phase(), QuizPhase::Asking { index: 0 });
    assert!(quiz.result().is_none());
}
