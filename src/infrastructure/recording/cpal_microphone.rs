//! Microphone adapter using cpal
//!
//! One `listen` call opens the default input device, feeds samples into an
//! `UtteranceDetector` until a phrase is complete, then drops the stream.
//! The phrase is downmixed, resampled to 16 kHz and FLAC-encoded.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration as StdDuration, Instant};

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, SampleRate, StreamConfig};
use rubato::{FftFixedIn, Resampler};

use super::flac_encoder::{encode_to_flac, TARGET_SAMPLE_RATE};
use crate::application::ports::{CaptureError, Microphone};
use crate::domain::audio::{AudioData, AudioMimeType};
use crate::domain::recording::{ListenSettings, UtteranceDetector, UtteranceStatus, CALIBRATION_MS};

/// How often the capture loop wakes up when the device is silent
const POLL_INTERVAL: StdDuration = StdDuration::from_millis(100);

/// Slack on top of the detector's own limits before giving up on the device
const DEVICE_GRACE: StdDuration = StdDuration::from_secs(2);

/// Default-device microphone
#[derive(Debug, Default)]
pub struct CpalMicrophone;

impl CpalMicrophone {
    pub fn new() -> Self {
        Self
    }

    fn input_device() -> Result<cpal::Device, CaptureError> {
        cpal::default_host()
            .default_input_device()
            .ok_or(CaptureError::NoAudioDevice)
    }

    /// Pick an i16/f32 config, preferring fewer channels and native 16 kHz
    fn input_config(device: &cpal::Device) -> Result<(StreamConfig, SampleFormat), CaptureError> {
        let ranges = device
            .supported_input_configs()
            .map_err(|e| CaptureError::StartFailed(format!("Failed to get configs: {}", e)))?;

        let supports_target = |range: &cpal::SupportedStreamConfigRange| {
            range.min_sample_rate().0 <= TARGET_SAMPLE_RATE
                && range.max_sample_rate().0 >= TARGET_SAMPLE_RATE
        };

        let best = ranges
            .filter(|range| matches!(range.sample_format(), SampleFormat::I16 | SampleFormat::F32))
            .min_by_key(|range| (!supports_target(range), range.channels()))
            .ok_or_else(|| CaptureError::StartFailed("No suitable input config".into()))?;

        let sample_rate = if supports_target(&best) {
            SampleRate(TARGET_SAMPLE_RATE)
        } else {
            best.min_sample_rate()
        };

        let config = StreamConfig {
            channels: best.channels(),
            sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        Ok((config, best.sample_format()))
    }

    /// Open the stream and forward mono blocks over a channel
    fn open_stream(
        device: &cpal::Device,
        config: &StreamConfig,
        format: SampleFormat,
    ) -> Result<(cpal::Stream, Receiver<Vec<i16>>), CaptureError> {
        let (tx, rx) = mpsc::channel::<Vec<i16>>();
        let channels = config.channels;
        let on_error = |err| tracing::warn!("audio input stream error: {}", err);

        let stream = match format {
            SampleFormat::I16 => device.build_input_stream(
                config,
                move |data: &[i16], _: &cpal::InputCallbackInfo| {
                    let _ = tx.send(downmix(data, channels));
                },
                on_error,
                None,
            ),
            SampleFormat::F32 => device.build_input_stream(
                config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    let pcm: Vec<i16> = data.iter().map(|&s| f32_to_i16(s)).collect();
                    let _ = tx.send(downmix(&pcm, channels));
                },
                on_error,
                None,
            ),
            other => {
                return Err(CaptureError::StartFailed(format!(
                    "Unsupported sample format {:?}",
                    other
                )))
            }
        }
        .map_err(|e| CaptureError::StartFailed(e.to_string()))?;

        stream
            .play()
            .map_err(|e| CaptureError::StartFailed(e.to_string()))?;

        Ok((stream, rx))
    }

    /// Blocking capture of one phrase at the device rate
    fn capture_phrase(settings: ListenSettings) -> Result<(Vec<i16>, u32), CaptureError> {
        let device = Self::input_device()?;
        let (config, format) = Self::input_config(&device)?;
        let sample_rate = config.sample_rate.0;

        let (stream, rx) = Self::open_stream(&device, &config, format)?;
        tracing::debug!(sample_rate, channels = config.channels, "microphone opened");

        let mut detector = UtteranceDetector::new(sample_rate, settings);
        let deadline = Instant::now()
            + StdDuration::from_millis(CALIBRATION_MS)
            + settings.timeout.as_std()
            + settings.phrase_limit.as_std()
            + DEVICE_GRACE;

        let status = loop {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(block) => {
                    let status = detector.push(&block);
                    if status.is_finished() {
                        break status;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break detector.finish(),
            }
            if Instant::now() >= deadline {
                break detector.finish();
            }
        };

        drop(stream);
        tracing::debug!(?status, threshold = detector.threshold(), "microphone released");

        match status {
            UtteranceStatus::Complete => Ok((detector.into_phrase(), sample_rate)),
            UtteranceStatus::TimedOut | UtteranceStatus::WaitingForSpeech => {
                Err(CaptureError::Timeout)
            }
            UtteranceStatus::Calibrating | UtteranceStatus::Capturing => Err(
                CaptureError::CaptureFailed("Input stream stopped early".into()),
            ),
        }
    }

    fn encode(samples: &[i16], sample_rate: u32) -> Result<AudioData, CaptureError> {
        let resampled = resample(samples, sample_rate, TARGET_SAMPLE_RATE)?;
        let flac =
            encode_to_flac(&resampled).map_err(|e| CaptureError::EncodeFailed(e.to_string()))?;
        Ok(AudioData::new(flac, AudioMimeType::Flac))
    }
}

#[async_trait]
impl Microphone for CpalMicrophone {
    async fn listen(&self, settings: ListenSettings) -> Result<AudioData, CaptureError> {
        // cpal::Stream is not Send, so the whole device lifetime stays on one thread
        let (samples, sample_rate) =
            tokio::task::spawn_blocking(move || Self::capture_phrase(settings))
                .await
                .map_err(|e| CaptureError::CaptureFailed(format!("Task join error: {}", e)))??;

        tokio::task::spawn_blocking(move || Self::encode(&samples, sample_rate))
            .await
            .map_err(|e| CaptureError::EncodeFailed(format!("Task join error: {}", e)))?
    }
}

fn f32_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16
}

/// Average interleaved channels into one
fn downmix(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }
    samples
        .chunks(usize::from(channels))
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| i32::from(s)).sum();
            (sum / frame.len() as i32) as i16
        })
        .collect()
}

/// Resample mono PCM between rates with rubato's FFT resampler
fn resample(samples: &[i16], from: u32, to: u32) -> Result<Vec<i16>, CaptureError> {
    if from == to || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    let input: Vec<f32> = samples
        .iter()
        .map(|&s| f32::from(s) / 32768.0)
        .collect();
    let expected_len = (input.len() as f64 * f64::from(to) / f64::from(from)).ceil() as usize;

    let mut resampler = FftFixedIn::<f32>::new(from as usize, to as usize, 1024, 2, 1)
        .map_err(|e| CaptureError::EncodeFailed(format!("Resampler init failed: {}", e)))?;

    let mut output = Vec::with_capacity(expected_len);
    for chunk in input.chunks(resampler.input_frames_next()) {
        let mut block = chunk.to_vec();
        // The final block is zero-padded to a full chunk
        block.resize(resampler.input_frames_next(), 0.0);
        let processed = resampler
            .process(&[block], None)
            .map_err(|e| CaptureError::EncodeFailed(format!("Resampling failed: {}", e)))?;
        output.extend(processed[0].iter().map(|&s| f32_to_i16(s)));
    }
    output.truncate(expected_len);

    Ok(output)
}
