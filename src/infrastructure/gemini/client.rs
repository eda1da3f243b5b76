//! Shared HTTP client for the Gemini `generateContent` endpoint

use std::time::Duration;

use reqwest::StatusCode;

use super::wire::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::application::ports::GenerationError;
use crate::domain::config::DEFAULT_MODEL;
use crate::domain::credential::Credential;
use crate::infrastructure::http_client;

/// Public Gemini API root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Upper bound for one call, audio upload included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A credential-bound Gemini client
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    credential: Credential,
}

impl GeminiClient {
    pub fn new(credential: Credential) -> Self {
        Self {
            http: http_client(REQUEST_TIMEOUT),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            credential,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = http_client(timeout);
        self
    }

    /// Point the client at another API root (a local mock in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Endpoint URL without the key, which travels as a query parameter
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Send one request and return the first candidate's text unmodified
    pub async fn generate_content(
        &self,
        body: &GenerateContentRequest,
    ) -> Result<String, GenerationError> {
        tracing::debug!(model = %self.model, "calling generateContent");

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.credential.expose())])
            .json(body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GenerationError::InvalidApiKey);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }

        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::classify_failure(status, &text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.without_url().to_string()))?;

        if let Some(error) = parsed.error {
            return Err(GenerationError::ApiError(error.message));
        }

        parsed.first_text().ok_or(GenerationError::EmptyResponse)
    }

    fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) if envelope.error.is_invalid_key() => GenerationError::InvalidApiKey,
            Ok(envelope) => {
                GenerationError::ApiError(format!("HTTP {}: {}", status, envelope.error.message))
            }
            Err(_) => GenerationError::ApiError(format!("HTTP {}: {}", status, body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn endpoint_contains_model_not_key() {
        let client = GeminiClient::new(Credential::new("secret-key")).with_model("custom-model");
        let url = client.endpoint();
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/custom-model:generateContent"
        );
        assert!(!url.contains("secret-key"));
    }

    #[test]
    fn base_url_trailing_slash_ignored() {
        let client =
            GeminiClient::new(Credential::new("k")).with_base_url("http://127.0.0.1:9000/");
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:9000/models/gemini-2.0-flash-lite:generateContent"
        );
    }

    #[tokio::test]
    async fn stalled_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let client = GeminiClient::new(Credential::new("secret-key"))
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(200));
        let err = client
            .generate_content(&GenerateContentRequest::user(Vec::new()))
            .await
            .unwrap_err();

        assert!(matches!(&err, GenerationError::RequestFailed(_)));
        assert!(!err.to_string().contains("secret-key"));
    }

    #[test]
    fn classify_plain_text_failure() {
        let err = GeminiClient::classify_failure(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(err, GenerationError::ApiError(msg) if msg.contains("upstream down")));
    }
}
