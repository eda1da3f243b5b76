//! Google Gemini adapters: text generation and speech recognition

mod client;
mod generator;
mod recognizer;
mod wire;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use generator::GeminiGenerator;
pub use recognizer::{GeminiRecognizer, NO_SPEECH_MARKER};
