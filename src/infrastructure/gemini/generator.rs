//! Gemini text generator adapter

use async_trait::async_trait;

use super::client::GeminiClient;
use super::wire::{GenerateContentRequest, Part};
use crate::application::ports::{GenerationError, TextGenerator};
use crate::domain::translation::TranslationPrompt;

/// Sends translation prompts as a single user turn
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_request(prompt: &TranslationPrompt) -> GenerateContentRequest {
        GenerateContentRequest::user(vec![Part::text(prompt.content())])
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &TranslationPrompt) -> Result<String, GenerationError> {
        self.client
            .generate_content(&Self::build_request(prompt))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credential::Credential;
    use crate::domain::translation::{Language, LanguagePair, TranslationRequest};
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/models/gemini-2.0-flash-lite:generateContent";

    fn prompt(text: &str) -> TranslationPrompt {
        let request = TranslationRequest::new(
            text,
            LanguagePair::new(Language::English, Language::Spanish),
        )
        .unwrap();
        TranslationPrompt::build(&request)
    }

    fn generator(server: &MockServer) -> GeminiGenerator {
        GeminiGenerator::new(
            GeminiClient::new(Credential::new("test-key")).with_base_url(server.uri()),
        )
    }

    fn reply(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        }))
    }

    #[test]
    fn request_is_single_user_text_part() {
        let request = GeminiGenerator::build_request(&prompt("Hello"));
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, "user");
        assert_eq!(
            request.contents[0].parts[0].text.as_deref(),
            Some(prompt("Hello").content())
        );
        assert!(request.system_instruction.is_none());
    }

    #[tokio::test]
    async fn sends_prompt_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(query_param("key", "test-key"))
            .and(body_string_contains("from English to Spanish"))
            .and(body_string_contains("Text to translate: The patient has a fever."))
            .respond_with(reply("El paciente tiene fiebre."))
            .expect(1)
            .mount(&server)
            .await;

        let text = generator(&server)
            .generate(&prompt("The patient has a fever."))
            .await
            .unwrap();

        assert_eq!(text, "El paciente tiene fiebre.");
    }

    #[tokio::test]
    async fn response_text_is_not_trimmed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply("\n  Hola  \n"))
            .mount(&server)
            .await;

        let text = generator(&server).generate(&prompt("Hello")).await.unwrap();
        assert_eq!(text, "\n  Hola  \n");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_invalid_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = generator(&server).generate(&prompt("Hello")).await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidApiKey));
    }

    #[tokio::test]
    async fn bad_request_with_invalid_key_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT",
                    "details": [{"reason": "API_KEY_INVALID"}]
                }
            })))
            .mount(&server)
            .await;

        let err = generator(&server).generate(&prompt("Hello")).await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidApiKey));
    }

    #[tokio::test]
    async fn quota_exhaustion_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = generator(&server).generate(&prompt("Hello")).await.unwrap_err();
        assert!(matches!(err, GenerationError::RateLimited));
    }

    #[tokio::test]
    async fn empty_candidates_map_to_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let err = generator(&server).generate(&prompt("Hello")).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = generator(&server).generate(&prompt("Hello")).await.unwrap_err();
        assert!(matches!(err, GenerationError::ParseError(_)));
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": {"code": 500, "message": "Internal error", "status": "INTERNAL"}
            })))
            .mount(&server)
            .await;

        let err = generator(&server).generate(&prompt("Hello")).await.unwrap_err();
        assert!(matches!(err, GenerationError::ApiError(msg) if msg.contains("Internal error")));
    }
}
