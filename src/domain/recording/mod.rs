//! Recording domain module

mod duration;
mod utterance;

pub use duration::Duration;
pub use utterance::{
    rms, ListenSettings, UtteranceDetector, UtteranceStatus, CALIBRATION_MS, FRAME_MS, PAUSE_MS,
};
