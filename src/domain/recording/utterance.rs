//! Utterance boundary detection over a stream of PCM samples
//!
//! Energy-based, in the spirit of classic recognizers:
//! - the first second of audio calibrates an ambient energy threshold
//! - a phrase starts at the first frame louder than the threshold
//! - a phrase ends after a run of quiet frames, or at the phrase limit

use super::duration::Duration;

/// Analysis frame length
pub const FRAME_MS: u64 = 30;

/// Ambient noise sampled before listening for speech
pub const CALIBRATION_MS: u64 = 1000;

/// Quiet time that marks the end of a phrase
pub const PAUSE_MS: u64 = 800;

/// Threshold multiplier over the measured ambient energy
pub const DYNAMIC_ENERGY_RATIO: f64 = 1.5;

/// Floor for the threshold, on the 16-bit RMS scale
pub const MIN_ENERGY_THRESHOLD: f64 = 300.0;

/// Timing knobs for one listen operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenSettings {
    /// How long to wait for speech to start once calibrated
    pub timeout: Duration,
    /// Upper bound on the captured phrase
    pub phrase_limit: Duration,
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::default_listen_timeout(),
            phrase_limit: Duration::default_phrase_limit(),
        }
    }
}

/// Where the detector currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtteranceStatus {
    Calibrating,
    WaitingForSpeech,
    Capturing,
    /// A full phrase is available
    Complete,
    /// Nobody spoke before the timeout
    TimedOut,
}

impl UtteranceStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Complete | Self::TimedOut)
    }
}

/// Root-mean-square energy of a block of samples
pub fn rms(samples: &[i16]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum / samples.len() as f64).sqrt()
}

/// Incremental detector fed with mono samples as they arrive from the device
#[derive(Debug)]
pub struct UtteranceDetector {
    frame_len: usize,
    calibration_frames: u64,
    pause_frames: u64,
    timeout_frames: u64,
    phrase_limit_frames: u64,
    status: UtteranceStatus,
    pending: Vec<i16>,
    ambient_energy: f64,
    frames_seen: u64,
    threshold: f64,
    waited_frames: u64,
    phrase_frames: u64,
    quiet_run: u64,
    phrase: Vec<i16>,
}

impl UtteranceDetector {
    pub fn new(sample_rate: u32, settings: ListenSettings) -> Self {
        let frame_len = ((u64::from(sample_rate) * FRAME_MS) / 1000).max(1) as usize;
        Self {
            frame_len,
            calibration_frames: (CALIBRATION_MS / FRAME_MS).max(1),
            pause_frames: PAUSE_MS.div_ceil(FRAME_MS),
            timeout_frames: settings.timeout.as_millis().div_ceil(FRAME_MS),
            phrase_limit_frames: settings.phrase_limit.as_millis().div_ceil(FRAME_MS),
            status: UtteranceStatus::Calibrating,
            pending: Vec::with_capacity(frame_len),
            ambient_energy: 0.0,
            frames_seen: 0,
            threshold: MIN_ENERGY_THRESHOLD,
            waited_frames: 0,
            phrase_frames: 0,
            quiet_run: 0,
            phrase: Vec::new(),
        }
    }

    /// Samples per analysis frame at this sample rate
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    pub fn status(&self) -> UtteranceStatus {
        self.status
    }

    /// Energy threshold in effect (the floor until calibration completes)
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed samples; partial frames are buffered until complete.
    /// Samples pushed after the detector finished are ignored.
    pub fn push(&mut self, samples: &[i16]) -> UtteranceStatus {
        for &sample in samples {
            if self.status.is_finished() {
                break;
            }
            self.pending.push(sample);
            if self.pending.len() == self.frame_len {
                let frame = std::mem::take(&mut self.pending);
                self.process_frame(&frame);
                self.pending = frame;
                self.pending.clear();
            }
        }
        self.status
    }

    /// Captured phrase samples (empty unless the status is `Complete`)
    pub fn into_phrase(self) -> Vec<i16> {
        match self.status {
            UtteranceStatus::Complete => self.phrase,
            _ => Vec::new(),
        }
    }

    /// Close out a phrase still being captured, e.g. when the device stops early
    pub fn finish(&mut self) -> UtteranceStatus {
        if self.status == UtteranceStatus::Capturing {
            self.status = UtteranceStatus::Complete;
        }
        self.status
    }

    fn process_frame(&mut self, frame: &[i16]) {
        let energy = rms(frame);
        match self.status {
            UtteranceStatus::Calibrating => {
                self.frames_seen += 1;
                // Running mean of ambient energy
                self.ambient_energy += (energy - self.ambient_energy) / self.frames_seen as f64;
                if self.frames_seen >= self.calibration_frames {
                    self.threshold =
                        (self.ambient_energy * DYNAMIC_ENERGY_RATIO).max(MIN_ENERGY_THRESHOLD);
                    self.status = UtteranceStatus::WaitingForSpeech;
                }
            }
            UtteranceStatus::WaitingForSpeech => {
                if energy > self.threshold {
                    self.status = UtteranceStatus::Capturing;
                    self.capture(frame, energy);
                } else {
                    self.waited_frames += 1;
                    if self.waited_frames >= self.timeout_frames {
                        self.status = UtteranceStatus::TimedOut;
                    }
                }
            }
            UtteranceStatus::Capturing => self.capture(frame, energy),
            UtteranceStatus::Complete | UtteranceStatus::TimedOut => {}
        }
    }

    fn capture(&mut self, frame: &[i16], energy: f64) {
        self.phrase.extend_from_slice(frame);
        self.phrase_frames += 1;
        if energy > self.threshold {
            self.quiet_run = 0;
        } else {
            self.quiet_run += 1;
        }
        if self.quiet_run >= self.pause_frames || self.phrase_frames >= self.phrase_limit_frames {
            self.status = UtteranceStatus::Complete;
        }
    }
}
