//! Recommendation engine.
//!
//! A [`Recommender`] maps a completed [`AnswerSet`] and the [`Catalog`] to a
//! [`DiagnosisResult`]. Two strategies implement it:
//! - [`GenerativeRecommender`]: renders a prompt, calls Gemini, parses and
//!   repairs the JSON reply
//! - [`RuleBasedRecommender`]: a fixed baseline with a single free-tier rule
//!
//! A deployment wires in exactly one of them via [`build_recommender`]. There
//! is no fallback between strategies inside a call.

mod generative;
pub mod parse;
pub mod repair;
mod rule_based;
mod types;

pub use generative::*;
pub use rule_based::*;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::{Config, RecommenderKind};
use crate::error::RecommendationResult;
use crate::quiz::AnswerSet;

/// A recommendation strategy.
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Which strategy this is.
    fn kind(&self) -> RecommenderKind;

    /// Produce a final, repaired diagnosis.
    async fn recommend(
        &self,
        answers: &AnswerSet,
        catalog: &Catalog,
    ) -> RecommendationResult<DiagnosisResult>;
}

/// Build the strategy selected by configuration.
pub fn build_recommender(config: &Config) -> RecommendationResult<Arc<dyn Recommender>> {
    let recommender: Arc<dyn Recommender> = match config.recommender {
        RecommenderKind::Generative => Arc::new(GenerativeRecommender::from_config(config)?),
        RecommenderKind::RuleBased => Arc::new(RuleBasedRecommender::new()),
    };

    info!(recommender = %recommender.kind(), "Recommender initialized");
    Ok(recommender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeminiConfig, LogFormat, LoggingConfig, RequestConfig};
    use crate::error::RecommendationError;

    fn config(kind: RecommenderKind, api_key: Option<&str>) -> Config {
        Config {
            recommender: kind,
            gemini: GeminiConfig {
                api_key: api_key.map(str::to_string),
                ..GeminiConfig::default()
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
            request: RequestConfig::default(),
        }
    }

    #[test]
    fn test_build_rule_based() {
        let recommender = build_recommender(&config(RecommenderKind::RuleBased, None)).unwrap();
        assert_eq!(recommender.kind(), RecommenderKind::RuleBased);
    }

    #[test]
    fn test_build_generative_with_key() {
        let recommender =
            build_recommender(&config(RecommenderKind::Generative, Some("key"))).unwrap();
        assert_eq!(recommender.kind(), RecommenderKind::Generative);
    }

    #[test]
    fn test_build_generative_without_key_is_configuration_error() {
        let err = build_recommender(&config(RecommenderKind::Generative, None))
            .err()
            .unwrap();
        assert!(matches!(err, RecommendationError::Configuration { .. }));
    }
}
