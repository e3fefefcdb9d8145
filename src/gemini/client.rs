use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use super::types::{GenerateRequest, GenerateResponse, GenerationConfig};
use super::TextGenerator;
use crate::config::{GeminiConfig, RequestConfig};
use crate::error::{GeminiError, GeminiResult};

/// Client for the Gemini `generateContent` API
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    request_config: RequestConfig,
}

impl GeminiClient {
    /// Create a new Gemini client. Fails when no API key is configured.
    pub fn new(config: &GeminiConfig, request_config: RequestConfig) -> GeminiResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GeminiError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(GeminiError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            request_config,
        })
    }

    /// Run one `generateContent` call. There is no retry.
    pub async fn generate(&self, request: GenerateRequest) -> GeminiResult<GenerateResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        debug!(
            model = %self.model,
            contents = request.contents.len(),
            "Calling Gemini"
        );

        let start = Instant::now();
        let result = self.execute_request(&url, &request).await;
        let latency = start.elapsed();

        match &result {
            Ok(response) => {
                let usage = response.usage_metadata.as_ref();
                info!(
                    model = %self.model,
                    latency_ms = latency.as_millis(),
                    prompt_tokens = usage.and_then(|u| u.prompt_token_count),
                    completion_tokens = usage.and_then(|u| u.candidates_token_count),
                    "Gemini call succeeded"
                );
            }
            Err(e) => {
                error!(
                    model = %self.model,
                    error = %e,
                    latency_ms = latency.as_millis(),
                    "Gemini call failed"
                );
            }
        }

        result
    }

    async fn execute_request(
        &self,
        url: &str,
        request: &GenerateRequest,
    ) -> GeminiResult<GenerateResponse> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::Timeout {
                        timeout_ms: self.request_config.timeout_ms,
                    }
                } else {
                    GeminiError::Http(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            if error_body.contains("API key not valid") {
                return Err(GeminiError::InvalidApiKey);
            }
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidResponse {
                message: format!("Failed to parse response: {}", e),
            })
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Model used for generation
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> GeminiResult<String> {
        let request =
            GenerateRequest::from_prompt(prompt).with_config(GenerationConfig::json(self.temperature));
        self.generate(request).await?.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = GeminiConfig {
            api_key: Some("test_key".to_string()),
            base_url: "https://generativelanguage.googleapis.com/".to_string(),
            ..GeminiConfig::default()
        };

        let client = GeminiClient::new(&config, RequestConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://generativelanguage.googleapis.com");
        assert_eq!(client.model(), crate::config::DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = GeminiConfig::default();
        let result = GeminiClient::new(&config, RequestConfig::default());
        assert!(matches!(result, Err(GeminiError::MissingApiKey)));

        let config = GeminiConfig {
            api_key: Some("   ".to_string()),
            ..GeminiConfig::default()
        };
        assert!(GeminiClient::new(&config, RequestConfig::default()).is_err());
    }
}
