//! Google Translate text-to-speech adapter
//!
//! The endpoint only accepts short inputs, so text is cut into chunks of at
//! most `MAX_CHUNK_CHARS` characters, preferring sentence and word
//! boundaries. Chunks are fetched in order and the MP3 frames concatenated.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::audio::{AudioData, AudioMimeType};
use crate::domain::translation::Language;
use crate::infrastructure::http_client;

/// Public endpoint root
pub const DEFAULT_TTS_URL: &str = "https://translate.google.com";

/// Longest text the endpoint accepts per request
pub const MAX_CHUNK_CHARS: usize = 100;

/// Characters after which a sentence may end
const SENTENCE_ENDS: &[char] = &['.', '!', '?', ';', '。', '！', '？', '؟', '।', '\n'];

/// Upper bound for one chunk request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)";

pub struct GoogleTranslateSynthesizer {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateSynthesizer {
    pub fn new() -> Self {
        Self {
            http: http_client(REQUEST_TIMEOUT),
            base_url: DEFAULT_TTS_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = http_client(timeout);
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_tts", self.base_url.trim_end_matches('/'))
    }

    /// Voice tag understood by the endpoint
    fn voice(language: Language) -> &'static str {
        match language {
            Language::Chinese => "zh-CN",
            other => other.code(),
        }
    }

    async fn fetch_chunk(
        &self,
        voice: &str,
        chunk: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SynthesisError> {
        let total = total.to_string();
        let idx = index.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .http
            .get(self.endpoint())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", voice),
                ("q", chunk),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::NOT_FOUND {
            return Err(SynthesisError::UnsupportedLanguage(voice.to_string()));
        }
        if !status.is_success() {
            return Err(SynthesisError::ApiError(format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;
        if bytes.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        Ok(bytes.to_vec())
    }
}

impl Default for GoogleTranslateSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<AudioData, SynthesisError> {
        let chunks = split_into_chunks(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        let voice = Self::voice(language);
        tracing::debug!(voice, chunks = chunks.len(), "requesting speech");

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let bytes = self.fetch_chunk(voice, chunk, index, chunks.len()).await?;
            audio.extend_from_slice(&bytes);
        }

        Ok(AudioData::new(audio, AudioMimeType::Mpeg))
    }
}

/// Split text into trimmed chunks of at most `max_chars` characters.
///
/// Sentences are kept whole when they fit and packed together greedily;
/// longer sentences break between words, and words longer than the limit
/// are cut on character boundaries.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let mut pieces = Vec::new();
    for sentence in text.split_inclusive(SENTENCE_ENDS) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        if sentence.chars().count() <= max_chars {
            pieces.push(sentence.to_string());
        } else {
            pieces.extend(split_words(sentence, max_chars));
        }
    }

    let mut chunks: Vec<String> = Vec::new();
    for piece in pieces {
        match chunks.last_mut() {
            Some(last) if last.chars().count() + 1 + piece.chars().count() <= max_chars => {
                last.push(' ');
                last.push_str(&piece);
            }
            _ => chunks.push(piece),
        }
    }
    chunks
}

fn split_words(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in sentence.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            out.extend(chars.chunks(max_chars).map(|c| c.iter().collect::<String>()));
            continue;
        }

        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if needed > max_chars {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn synthesizer(server: &MockServer) -> GoogleTranslateSynthesizer {
        GoogleTranslateSynthesizer::new().with_base_url(server.uri())
    }

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(split_into_chunks("  Hola  ", 100), vec!["Hola"]);
    }

    #[test]
    fn blank_text_has_no_chunks() {
        assert!(split_into_chunks(" \n ", 100).is_empty());
    }

    #[test]
    fn sentences_are_packed_within_limit() {
        let chunks = split_into_chunks("One. Two. Three four five.", 12);
        assert_eq!(chunks, vec!["One. Two.", "Three four", "five."]);
    }

    #[test]
    fn long_words_are_cut() {
        let word = "a".repeat(250);
        let chunks = split_into_chunks(&word, 100);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].len(), 50);
    }

    #[test]
    fn every_chunk_respects_limit_with_multibyte_text() {
        let text = "患者は腹痛と発熱を訴えています。".repeat(12);
        let chunks = split_into_chunks(&text, MAX_CHUNK_CHARS);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= MAX_CHUNK_CHARS));
        assert_eq!(chunks.concat().replace(' ', ""), text);
    }

    #[test]
    fn chinese_uses_regional_voice() {
        assert_eq!(GoogleTranslateSynthesizer::voice(Language::Chinese), "zh-CN");
        assert_eq!(GoogleTranslateSynthesizer::voice(Language::Arabic), "ar");
    }

    #[tokio::test]
    async fn returns_bytes_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .and(query_param("tl", "es"))
            .and(query_param("q", "Hola"))
            .and(query_param("client", "tw-ob"))
            .and(query_param("total", "1"))
            .and(query_param("idx", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xF3, 0x44, 0xC4]))
            .expect(1)
            .mount(&server)
            .await;

        let audio = synthesizer(&server)
            .synthesize("Hola", Language::Spanish)
            .await
            .unwrap();

        assert_eq!(audio.data(), &[0xFF, 0xF3, 0x44, 0xC4]);
        assert_eq!(audio.mime_type(), AudioMimeType::Mpeg);
    }

    #[tokio::test]
    async fn long_text_fetches_every_chunk_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("idx", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 1]))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("idx", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![2, 2]))
            .mount(&server)
            .await;

        let text = format!("{}. {}.", "a".repeat(80), "b".repeat(80));
        let audio = synthesizer(&server)
            .synthesize(&text, Language::English)
            .await
            .unwrap();

        assert_eq!(audio.data(), &[1, 1, 2, 2]);
    }

    #[tokio::test]
    async fn stalled_chunk_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(vec![1, 2])
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let result = synthesizer(&server)
            .with_timeout(Duration::from_millis(200))
            .synthesize("Hola", Language::Spanish)
            .await;

        assert!(matches!(result, Err(SynthesisError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn server_error_returns_no_partial_audio() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("idx", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 1]))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("idx", "1"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let text = format!("{}. {}.", "a".repeat(80), "b".repeat(80));
        let result = synthesizer(&server).synthesize(&text, Language::English).await;

        assert!(matches!(result, Err(SynthesisError::ApiError(_))));
    }

    #[tokio::test]
    async fn rejected_voice_is_unsupported_language() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = synthesizer(&server).synthesize("你好", Language::Chinese).await;

        assert!(matches!(result, Err(SynthesisError::UnsupportedLanguage(v)) if v == "zh-CN"));
    }

    #[tokio::test]
    async fn empty_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let result = synthesizer(&server).synthesize("Hola", Language::Spanish).await;

        assert!(matches!(result, Err(SynthesisError::EmptyAudio)));
    }
}
