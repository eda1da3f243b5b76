//! FLAC encoding of captured phrases
//!
//! The recognizer receives a 16 kHz, mono, 16-bit FLAC clip: lossless and
//! well under half the size of the equivalent WAV.

use flacenc::bitsink::ByteSink;
use flacenc::component::BitRepr;
use flacenc::config;
use flacenc::error::Verify;
use flacenc::source::MemSource;

/// Sample rate of every clip sent to the recognizer
pub const TARGET_SAMPLE_RATE: u32 = 16000;

const BITS_PER_SAMPLE: usize = 16;

const CHANNELS: usize = 1;

/// FLAC encoding errors
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("FLAC config error: {0}")]
    Config(String),

    #[error("FLAC encoding failed: {0}")]
    Encode(String),

    #[error("FLAC write failed: {0}")]
    Write(String),
}

/// Encode mono 16 kHz samples as a complete FLAC stream
pub fn encode_to_flac(pcm_samples: &[i16]) -> Result<Vec<u8>, EncodingError> {
    let widened: Vec<i32> = pcm_samples.iter().map(|&s| i32::from(s)).collect();

    let encoder_config = config::Encoder::default()
        .into_verified()
        .map_err(|(_, e)| EncodingError::Config(format!("{:?}", e)))?;

    let source = MemSource::from_samples(
        &widened,
        CHANNELS,
        BITS_PER_SAMPLE,
        TARGET_SAMPLE_RATE as usize,
    );

    let stream =
        flacenc::encode_with_fixed_block_size(&encoder_config, source, encoder_config.block_size)
            .map_err(|e| EncodingError::Encode(format!("{:?}", e)))?;

    let mut sink = ByteSink::new();
    stream
        .write(&mut sink)
        .map_err(|e| EncodingError::Write(e.to_string()))?;

    Ok(sink.into_inner())
}
