//! Microphone capture infrastructure
//!
//! cpal for device access, rubato for resampling, flacenc for the clip
//! handed to the recognizer.

mod cpal_microphone;
mod flac_encoder;

pub use cpal_microphone::CpalMicrophone;
pub use flac_encoder::{encode_to_flac, EncodingError, TARGET_SAMPLE_RATE};
