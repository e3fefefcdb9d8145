use serde::{Deserialize, Serialize};

/// How strongly the primary tool is recommended.
///
/// Strict on the wire; generated text goes through [`Self::from_label`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationLevel {
    #[serde(rename = "強く推奨", alias = "strongly recommended")]
    StronglyRecommended,
    #[default]
    #[serde(rename = "推奨", alias = "recommended")]
    Recommended,
    #[serde(rename = "検討の価値あり", alias = "worth considering")]
    WorthConsidering,
}

impl RecommendationLevel {
    /// Display label in the quiz locale.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationLevel::StronglyRecommended => "強く推奨",
            RecommendationLevel::Recommended => "推奨",
            RecommendationLevel::WorthConsidering => "検討の価値あり",
        }
    }

    /// Best-effort reading of a free-form level such as `強く推奨します` or
    /// `Strongly Recommended`. `None` when nothing matches.
    pub fn from_label(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }
        if text.contains("強く") || text.contains("strongly") || text.contains("highly") {
            Some(RecommendationLevel::StronglyRecommended)
        } else if text.contains("検討") || text.contains("worth") || text.contains("consider") {
            Some(RecommendationLevel::WorthConsidering)
        } else if text.contains("推奨") || text.contains("おすすめ") || text.contains("recommend") {
            Some(RecommendationLevel::Recommended)
        } else {
            None
        }
    }

    /// All levels, strongest first.
    pub fn all() -> [RecommendationLevel; 3] {
        [
            RecommendationLevel::StronglyRecommended,
            RecommendationLevel::Recommended,
            RecommendationLevel::WorthConsidering,
        ]
    }
}

impl std::fmt::Display for RecommendationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The primary recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedTool {
    pub name: String,
    pub plan: String,
    pub url: String,
    pub reasoning: String,
    pub level: RecommendationLevel,
}

/// A secondary suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeTool {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Final outcome of one quiz run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub recommended_tool: RecommendedTool,
    pub alternative_tools: Vec<AlternativeTool>,
}

impl DiagnosisResult {
    /// Whether an alternative with this name is listed.
    pub fn has_alternative(&self, name: &str) -> bool {
        self.alternative_tools.iter().any(|t| t.name == name)
    }
}
