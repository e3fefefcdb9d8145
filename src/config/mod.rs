use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub recommender: RecommenderKind,
    pub gemini: GeminiConfig,
    pub logging: LoggingConfig,
    pub request: RequestConfig,
}

/// Which recommendation strategy the deployment wires in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommenderKind {
    /// Delegate to the Gemini generation service.
    Generative,
    /// Deterministic rule over the static catalog.
    RuleBased,
}

/// Gemini API configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub timeout_ms: u64,
}

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with(None)
    }

    /// Load configuration, letting `recommender` override `RECOMMENDER`.
    ///
    /// The override is applied before validation so that choosing the
    /// rule-based strategy does not demand an API key.
    pub fn from_env_with(recommender: Option<RecommenderKind>) -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let recommender = match (recommender, env::var("RECOMMENDER")) {
            (Some(kind), _) => kind,
            (None, Ok(raw)) => raw.parse()?,
            (None, Err(_)) => RecommenderKind::Generative,
        };

        let gemini = GeminiConfig {
            api_key: env::var("GEMINI_API_KEY")
                .or_else(|_| env::var("API_KEY"))
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            temperature: env::var("GEMINI_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30000),
        };

        let config = Config {
            recommender,
            gemini,
            logging,
            request,
        };
        config.validate()?;
        Ok(config)
    }

    /// Fail fast when the selected strategy lacks what it needs.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.recommender == RecommenderKind::Generative && self.gemini.api_key.is_none() {
            return Err(AppError::Config {
                message: "GEMINI_API_KEY is required for the generative recommender".to_string(),
            });
        }
        Ok(())
    }
}

impl FromStr for RecommenderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generative" | "gemini" => Ok(RecommenderKind::Generative),
            "rule_based" | "rule-based" | "rules" | "fallback" => Ok(RecommenderKind::RuleBased),
            other => Err(AppError::Config {
                message: format!("Unknown recommender: {}", other),
            }),
        }
    }
}

impl std::fmt::Display for RecommenderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommenderKind::Generative => write!(f, "generative"),
            RecommenderKind::RuleBased => write!(f, "rule_based"),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self { timeout_ms: 30000 }
    }
}
