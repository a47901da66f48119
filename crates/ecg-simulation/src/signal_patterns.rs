//! Pre-defined heart-rate patterns for ECG simulation

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Heart rate over time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RhythmPattern {
    /// Fixed rate
    Constant { bpm: f64 },
    /// Rate modulated by breathing
    SinusArrhythmia {
        mean_bpm: f64,
        variation_bpm: f64,
        breathing_hz: f64,
    },
    /// Linear change from one rate to another, then constant
    Ramp {
        start_bpm: f64,
        end_bpm: f64,
        duration: f64,
    },
}

impl RhythmPattern {
    const MIN_BPM: f64 = 20.0;
    const MAX_BPM: f64 = 250.0;

    /// Heart rate in beats per minute at `time` seconds
    pub fn heart_rate_at(&self, time: f64) -> f64 {
        let bpm = match *self {
            RhythmPattern::Constant { bpm } => bpm,

            RhythmPattern::SinusArrhythmia { mean_bpm, variation_bpm, breathing_hz } => {
                mean_bpm + variation_bpm * (2.0 * PI * breathing_hz * time).sin()
            }

            RhythmPattern::Ramp { start_bpm, end_bpm, duration } => {
                if time >= duration || duration <= 0.0 {
                    end_bpm
                } else {
                    start_bpm + (end_bpm - start_bpm) * (time / duration)
                }
            }
        };

        bpm.clamp(Self::MIN_BPM, Self::MAX_BPM)
    }

    /// Beat-to-beat interval in seconds at `time`
    pub fn rr_interval_at(&self, time: f64) -> f64 {
        60.0 / self.heart_rate_at(time)
    }

    pub fn description(&self) -> &'static str {
        match self {
            RhythmPattern::Constant { .. } => "Regular rhythm",
            RhythmPattern::SinusArrhythmia { .. } => "Respiratory sinus arrhythmia",
            RhythmPattern::Ramp { .. } => "Rate ramp",
        }
    }

    /// Create common preset patterns
    pub fn presets() -> Vec<(&'static str, RhythmPattern)> {
        vec![
            ("Resting", RhythmPattern::Constant { bpm: 60.0 }),
            ("Normal", RhythmPattern::Constant { bpm: 75.0 }),
            ("Bradycardia", RhythmPattern::Constant { bpm: 45.0 }),
            ("Tachycardia", RhythmPattern::Constant { bpm: 130.0 }),
            ("Breathing", RhythmPattern::SinusArrhythmia {
                mean_bpm: 70.0, variation_bpm: 6.0, breathing_hz: 0.25
            }),
            ("Exercise Onset", RhythmPattern::Ramp {
                start_bpm: 70.0, end_bpm: 140.0, duration: 30.0
            }),
            ("Recovery", RhythmPattern::Ramp {
                start_bpm: 140.0, end_bpm: 80.0, duration: 60.0
            }),
        ]
    }
}

impl Default for RhythmPattern {
    fn default() -> Self {
        RhythmPattern::Constant { bpm: 75.0 }
    }
}
