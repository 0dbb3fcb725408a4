//! The beep: a short sine tone through the default output device.

use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::StreamConfig;

use crate::error::RestbellError;

/// Tone frequency in Hz.
const TONE_HZ: f32 = 880.0;
/// Tone length in milliseconds.
const TONE_MS: u32 = 180;
/// Output gain, kept low.
const TONE_GAIN: f32 = 0.06;

/// Play the beep, best-effort.
///
/// Playback runs on a detached thread so callers never block on the
/// audio subsystem; machines without an output device stay silent.
pub fn beep() {
    std::thread::spawn(|| {
        let _ = play_tone();
    });
}

/// Synthesize the tone and block until it has played.
fn play_tone() -> Result<(), RestbellError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| RestbellError::Config("no default output device".to_string()))?;

    let sample_rate = device
        .default_output_config()
        .map_err(|e| RestbellError::Config(format!("no output config: {e}")))?
        .sample_rate();

    let stream_config = StreamConfig {
        channels: 1,
        sample_rate,
        buffer_size: cpal::BufferSize::Default,
    };

    let samples = sine_samples(sample_rate);
    let buffer = Arc::new(Mutex::new(ToneBuffer {
        samples,
        position: 0,
        finished: false,
    }));

    let buffer_clone = Arc::clone(&buffer);
    let stream = device
        .build_output_stream(
            &stream_config,
            move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                let mut buf = match buffer_clone.lock() {
                    Ok(b) => b,
                    Err(_) => return,
                };

                for sample in data.iter_mut() {
                    if buf.position < buf.samples.len() {
                        *sample = buf.samples[buf.position];
                        buf.position += 1;
                    } else {
                        *sample = 0.0;
                        buf.finished = true;
                    }
                }
            },
            |_err| {},
            None,
        )
        .map_err(|e| RestbellError::Config(format!("failed to build output stream: {e}")))?;

    stream
        .play()
        .map_err(|e| RestbellError::Config(format!("failed to start output stream: {e}")))?;

    // Wait for playback, bounded so a stalled device cannot pin the thread.
    for _ in 0..100 {
        std::thread::sleep(std::time::Duration::from_millis(10));
        let done = buffer.lock().map(|buf| buf.finished).unwrap_or(true);
        if done {
            break;
        }
    }

    drop(stream);
    Ok(())
}

/// Render the tone as mono f32 samples at the given rate.
#[allow(clippy::cast_precision_loss)]
fn sine_samples(sample_rate: u32) -> Vec<f32> {
    let total = (sample_rate * TONE_MS / 1000) as usize;
    let step = std::f32::consts::TAU * TONE_HZ / sample_rate as f32;

    (0..total)
        .map(|i| (step * i as f32).sin() * TONE_GAIN)
        .collect()
}

/// Internal buffer for tracking tone playback progress.
struct ToneBuffer {
    samples: Vec<f32>,
    position: usize,
    finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_samples_length_matches_duration() {
        let samples = sine_samples(48_000);
        // 180 ms at 48 kHz
        assert_eq!(samples.len(), 8640);
    }

    #[test]
    fn test_sine_samples_stay_within_gain() {
        for sample in sine_samples(44_100) {
            assert!(sample.abs() <= TONE_GAIN + f32::EPSILON);
        }
    }

    #[test]
    fn test_sine_samples_start_at_zero() {
        let samples = sine_samples(44_100);
        assert!(samples[0].abs() < 1e-6);
    }
}
