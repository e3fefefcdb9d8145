//! Parsing of generated completions into draft diagnoses.
//!
//! Structural validity is enforced here; URL gaps and a missing explorer
//! entry are left for [`super::repair`].

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::types::RecommendationLevel;
use crate::error::{RecommendationError, RecommendationResult};

/// Primary tool as emitted by a strategy, URL optional.
///
/// Only `name` is required. A missing, `null`, non-string or unrecognised
/// `level` becomes [`RecommendationLevel::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DraftRecommendedTool {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub plan: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reasoning: String,
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: RecommendationLevel,
}

/// Alternative as emitted by a strategy, URL optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DraftAlternativeTool {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_level<'de, D>(deserializer: D) -> Result<RecommendationLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let text = raw.as_ref().and_then(|v| v.as_str()).unwrap_or_default();

    Ok(RecommendationLevel::from_label(text).unwrap_or_else(|| {
        debug!(level = %text, "Unrecognised level, using default");
        RecommendationLevel::default()
    }))
}

/// A structurally valid diagnosis that has not been repaired yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftDiagnosis {
    pub recommended_tool: DraftRecommendedTool,
    pub alternative_tools: Vec<DraftAlternativeTool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDiagnosis {
    #[serde(default)]
    recommended_tool: Option<DraftRecommendedTool>,
    #[serde(default)]
    alternative_tools: Option<Vec<DraftAlternativeTool>>,
}

/// Extract JSON from a completion string, handling markdown code blocks.
///
/// Attempts extraction in this order:
/// 1. Raw JSON (fast path)
/// 2. ```json ... ``` code blocks
/// 3. ``` ... ``` code blocks
pub fn extract_json_from_completion(completion: &str) -> RecommendationResult<&str> {
    let trimmed = completion.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Ok(trimmed);
    }

    if completion.contains("```json") {
        return completion
            .split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                RecommendationError::malformed("found ```json block but content was empty")
            });
    }

    if completion.contains("```") {
        return completion
            .split("```")
            .nth(1)
            .map(strip_fence_language)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RecommendationError::malformed("found ``` block but content was empty"));
    }

    Err(RecommendationError::malformed(format!(
        "no JSON found in response. First 100 chars: '{}'",
        completion.chars().take(100).collect::<String>()
    )))
}

// A fence like ```JSON or ```javascript carries a language tag before the
// first newline.
fn strip_fence_language(block: &str) -> &str {
    let block = block.trim_start_matches([' ', '\t']);
    match block.split_once('\n') {
        Some((tag, rest)) if tag.chars().all(|c| c.is_ascii_alphanumeric()) => rest.trim(),
        _ => block.trim(),
    }
}

/// Parse a completion into a draft, rejecting structurally invalid output.
pub fn parse_diagnosis(completion: &str) -> RecommendationResult<DraftDiagnosis> {
    let json = extract_json_from_completion(completion)?;

    let raw: RawDiagnosis = serde_json::from_str(json)
        .map_err(|e| RecommendationError::malformed(format!("invalid JSON: {}", e)))?;

    let recommended_tool = raw
        .recommended_tool
        .ok_or_else(|| RecommendationError::malformed("missing recommendedTool"))?;

    let alternative_tools = match raw.alternative_tools {
        Some(tools) if !tools.is_empty() => tools,
        _ => return Err(RecommendationError::malformed("missing alternativeTools")),
    };

    Ok(DraftDiagnosis {
        recommended_tool,
        alternative_tools,
    })
}
