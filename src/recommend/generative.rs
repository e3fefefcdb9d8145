use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::parse::parse_diagnosis;
use super::repair::repair;
use super::{DiagnosisResult, Recommender};
use crate::catalog::Catalog;
use crate::config::{Config, RecommenderKind};
use crate::error::{GeminiError, RecommendationError, RecommendationResult};
use crate::gemini::{GeminiClient, TextGenerator};
use crate::prompts::build_diagnosis_prompt;
use crate::quiz::AnswerSet;

/// Strategy that delegates the decision to a text generator.
pub struct GenerativeRecommender<G = GeminiClient> {
    generator: G,
}

impl GenerativeRecommender<GeminiClient> {
    /// Build a Gemini-backed recommender from configuration.
    ///
    /// A missing API key is reported as a configuration error before any
    /// request is attempted.
    pub fn from_config(config: &Config) -> RecommendationResult<Self> {
        let client = GeminiClient::new(&config.gemini, config.request.clone()).map_err(
            |e| match e {
                GeminiError::MissingApiKey => RecommendationError::Configuration {
                    message: "APIキーが設定されていません。環境変数 GEMINI_API_KEY を設定してください。"
                        .to_string(),
                },
                other => RecommendationError::Transport(other),
            },
        )?;

        Ok(Self::new(client))
    }
}

impl<G: TextGenerator> GenerativeRecommender<G> {
    /// Wrap an existing generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl<G: TextGenerator> Recommender for GenerativeRecommender<G> {
    fn kind(&self) -> RecommenderKind {
        RecommenderKind::Generative
    }

    async fn recommend(
        &self,
        answers: &AnswerSet,
        catalog: &Catalog,
    ) -> RecommendationResult<DiagnosisResult> {
        let start = Instant::now();

        let prompt = build_diagnosis_prompt(answers, catalog);
        debug!(
            answers = answers.len(),
            prompt_chars = prompt.chars().count(),
            "Requesting generated diagnosis"
        );

        let completion = self.generator.generate_text(&prompt).await?;

        let draft = parse_diagnosis(&completion).map_err(|e| {
            warn!(
                error = %e,
                preview = %completion.chars().take(100).collect::<String>(),
                "Rejected generated diagnosis"
            );
            e
        })?;

        let result = repair(draft, catalog);

        info!(
            tool = %result.recommended_tool.name,
            plan = %result.recommended_tool.plan,
            alternatives = result.alternative_tools.len(),
            latency_ms = start.elapsed().as_millis(),
            "Generative diagnosis completed"
        );

        Ok(result)
    }
}
