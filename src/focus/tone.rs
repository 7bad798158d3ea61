//! Audible completion cue.
//!
//! The cue is synthesized rather than loaded from disk: a short sine wave
//! with an exponentially decaying gain, rendered to 16-bit PCM.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::debug;

use crate::error::PomodoroError;

/// Sample rate of rendered tones.
pub const SAMPLE_RATE: u32 = 44_100;

/// A synthetic sine tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in Hz.
    pub frequency_hz: f64,
    /// Length of the tone.
    pub duration: Duration,
    /// Gain at the start, in `0.0..=1.0`.
    pub start_gain: f64,
    /// Gain reached at the end.
    pub end_gain: f64,
}

impl Default for Tone {
    fn default() -> Self {
        Self {
            frequency_hz: 800.0,
            duration: Duration::from_millis(500),
            start_gain: 0.3,
            end_gain: 0.01,
        }
    }
}

impl Tone {
    /// Gain at time `t` seconds into the tone.
    #[must_use]
    pub fn gain_at(&self, t: f64) -> f64 {
        let length = self.duration.as_secs_f64();
        if length <= 0.0 || self.start_gain <= 0.0 {
            return 0.0;
        }
        let ratio = (self.end_gain / self.start_gain).max(f64::MIN_POSITIVE);
        self.start_gain * ratio.powf((t / length).clamp(0.0, 1.0))
    }

    /// Render mono signed 16-bit samples at `sample_rate`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn samples(&self, sample_rate: u32) -> Vec<i16> {
        let rate = f64::from(sample_rate);
        let count = (self.duration.as_secs_f64() * rate).round() as usize;

        (0..count)
            .map(|n| {
                #[allow(clippy::cast_precision_loss)]
                let t = n as f64 / rate;
                let value = (std::f64::consts::TAU * self.frequency_hz * t).sin() * self.gain_at(t);
                (value * f64::from(i16::MAX)) as i16
            })
            .collect()
    }

    /// Render as little-endian bytes, ready for a raw PCM sink.
    #[must_use]
    pub fn pcm_bytes(&self, sample_rate: u32) -> Vec<u8> {
        self.samples(sample_rate)
            .into_iter()
            .flat_map(i16::to_le_bytes)
            .collect()
    }
}

/// Plays tones, best effort and without blocking.
#[cfg_attr(test, mockall::automock)]
pub trait TonePlayer {
    /// Start playing `tone`.
    ///
    /// # Errors
    ///
    /// Returns an error when no audio output could be started.
    fn play(&self, tone: &Tone) -> Result<(), PomodoroError>;
}

/// Pipes raw PCM into an external player, falling back to the terminal bell.
#[derive(Debug, Clone)]
pub struct PcmTonePlayer {
    program: String,
}

impl PcmTonePlayer {
    /// Use `program` (invoked with `aplay`-compatible flags) as the sink.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn_player(&self, tone: &Tone) -> Result<(), PomodoroError> {
        let rate = SAMPLE_RATE.to_string();
        let mut child = Command::new(&self.program)
            .args(["-q", "-t", "raw", "-f", "S16_LE", "-c", "1", "-r", &rate, "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PomodoroError::Unavailable(format!("{}: {e}", self.program)))?;

        let Some(mut stdin) = child.stdin.take() else {
            return Err(PomodoroError::Unavailable(format!(
                "{}: no stdin",
                self.program
            )));
        };
        let bytes = tone.pcm_bytes(SAMPLE_RATE);

        std::thread::spawn(move || {
            if let Err(e) = stdin.write_all(&bytes) {
                debug!(error = %e, "tone player closed early");
            }
            drop(stdin);
            let _ = child.wait();
        });

        Ok(())
    }
}

impl TonePlayer for PcmTonePlayer {
    fn play(&self, tone: &Tone) -> Result<(), PomodoroError> {
        match self.spawn_player(tone) {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(error = %e, "falling back to terminal bell");
                ring_bell()
            }
        }
    }
}

fn ring_bell() -> Result<(), PomodoroError> {
    let mut stdout = std::io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()?;
    Ok(())
}

/// Player used when sound is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentTone;

impl TonePlayer for SilentTone {
    fn play(&self, _tone: &Tone) -> Result<(), PomodoroError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tone() {
        let tone = Tone::default();
        assert!((tone.frequency_hz - 800.0).abs() < f64::EPSILON);
        assert_eq!(tone.duration, Duration::from_millis(500));
    }

    #[test]
    fn test_gain_decays() {
        let tone = Tone::default();
        assert!((tone.gain_at(0.0) - 0.3).abs() < 1e-9);
        assert!((tone.gain_at(0.5) - 0.01).abs() < 1e-9);
        assert!(tone.gain_at(0.1) > tone.gain_at(0.2));
        assert!(tone.gain_at(0.25) < 0.3 && tone.gain_at(0.25) > 0.01);
    }

    #[test]
    fn test_sample_count_and_envelope() {
        let tone = Tone::default();
        let samples = tone.samples(SAMPLE_RATE);
        assert_eq!(samples.len(), 22_050);

        let peak = |window: &[i16]| window.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0);
        let head = peak(&samples[..1000]);
        let tail = peak(&samples[samples.len() - 1000..]);
        assert!(head > tail * 5);
        assert!(head <= (f64::from(i16::MAX) * 0.3) as u16 + 1);
    }

    #[test]
    fn test_pcm_bytes_little_endian() {
        let tone = Tone::default();
        let bytes = tone.pcm_bytes(8_000);
        let samples = tone.samples(8_000);
        assert_eq!(bytes.len(), samples.len() * 2);
        assert_eq!(i16::from_le_bytes([bytes[2], bytes[3]]), samples[1]);
    }

    #[test]
    fn test_silent_tone() {
        assert!(SilentTone.play(&Tone::default()).is_ok());
    }
}
