use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Recommendation error: {0}")]
    Recommendation(#[from] RecommendationError),

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by a recommendation strategy
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] GeminiError),

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Catalog incomplete: missing {missing}")]
    CatalogIncomplete { missing: String },
}

/// Gemini API errors
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("API key not valid")]
    InvalidApiKey,

    #[error("Gemini API key is not configured")]
    MissingApiKey,

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Quiz flow errors raised when an answer does not fit the current question
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Quiz is not waiting for an answer")]
    NotAsking,

    #[error("Unexpected question: expected {expected}, got {got}")]
    UnexpectedQuestion { expected: String, got: String },

    #[error("Unknown option for {question_id}: {value}")]
    UnknownOption { question_id: String, value: String },
}

impl RecommendationError {
    /// Construct a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Construct a catalog-incomplete error.
    pub fn catalog_incomplete(missing: impl Into<String>) -> Self {
        Self::CatalogIncomplete {
            missing: missing.into(),
        }
    }

    /// The single message shown to the user alongside the restart action.
    pub fn user_message(&self) -> String {
        let detail = match self {
            RecommendationError::Transport(GeminiError::InvalidApiKey) => {
                "Gemini APIキーが無効です。正しいAPIキーを設定してください。".to_string()
            }
            RecommendationError::Configuration { message } => message.clone(),
            RecommendationError::MalformedResponse { .. } => {
                "AIからの応答形式が正しくありません。期待されるデータ構造ではありません。".to_string()
            }
            other => format!("AIによる診断の生成に失敗しました。詳細: {}", other),
        };
        format!("診断の取得中にエラーが発生しました: {}", detail)
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for recommendation operations
pub type RecommendationResult<T> = Result<T, RecommendationError>;

/// Result type alias for Gemini operations
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Result type alias for quiz flow operations
pub type QuizResult<T> = Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "missing key".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: missing key");
    }

    #[test]
    fn test_recommendation_error_display() {
        let err = RecommendationError::malformed("not JSON");
        assert_eq!(err.to_string(), "Malformed response: not JSON");

        let err = RecommendationError::catalog_incomplete("Gemini");
        assert_eq!(err.to_string(), "Catalog incomplete: missing Gemini");

        let err = RecommendationError::Configuration {
            message: "GEMINI_API_KEY is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: GEMINI_API_KEY is required"
        );
    }

    #[test]
    fn test_gemini_error_display() {
        let err = GeminiError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - overloaded");

        let err = GeminiError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");

        let err = GeminiError::InvalidResponse {
            message: "no candidates".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid response: no candidates");
    }

    #[test]
    fn test_quiz_error_display() {
        let err = QuizError::UnexpectedQuestion {
            expected: "q2".to_string(),
            got: "q5".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected question: expected q2, got q5");

        let err = QuizError::UnknownOption {
            question_id: "q1".to_string(),
            value: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown option for q1: nope");
    }

    #[test]
    fn test_gemini_error_conversion_to_recommendation_error() {
        let err: RecommendationError = GeminiError::Timeout { timeout_ms: 1000 }.into();
        assert!(matches!(err, RecommendationError::Transport(_)));
    }

    #[test]
    fn test_recommendation_error_conversion_to_app_error() {
        let app_err: AppError = RecommendationError::malformed("x").into();
        assert!(matches!(app_err, AppError::Recommendation(_)));
    }

    #[test]
    fn test_user_message_for_invalid_api_key() {
        let err = RecommendationError::Transport(GeminiError::InvalidApiKey);
        let message = err.user_message();
        assert!(message.starts_with("診断の取得中にエラーが発生しました"));
        assert!(message.contains("APIキーが無効です"));
    }

    #[test]
    fn test_user_message_includes_transport_detail() {
        let err = RecommendationError::Transport(GeminiError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert!(err.user_message().contains("500 - boom"));
    }
}
