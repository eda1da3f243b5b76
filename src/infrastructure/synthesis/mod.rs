//! Speech synthesis adapters

mod google_tts;

pub use google_tts::{
    split_into_chunks, GoogleTranslateSynthesizer, DEFAULT_TTS_URL, MAX_CHUNK_CHARS,
};
