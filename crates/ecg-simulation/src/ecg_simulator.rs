//! Synthetic 8-channel ECG in device ADC counts

use crate::signal_patterns::RhythmPattern;
use ecg_core::{config_error, EcgResult, RawChannels, CHANNEL_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// One Gaussian bump of the heartbeat template
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    /// Offset from the R peak, seconds
    pub offset: f64,
    /// Peak height relative to R
    pub amplitude: f64,
    /// Standard deviation, seconds
    pub width: f64,
}

/// P, Q, R, S and T waves of a normal beat
pub const NORMAL_BEAT: [Wave; 5] = [
    Wave { offset: -0.20, amplitude: 0.12, width: 0.025 },
    Wave { offset: -0.03, amplitude: -0.10, width: 0.010 },
    Wave { offset: 0.0, amplitude: 1.0, width: 0.012 },
    Wave { offset: 0.03, amplitude: -0.25, width: 0.010 },
    Wave { offset: 0.28, amplitude: 0.30, width: 0.050 },
];

/// Per-channel projection of the beat: I, II, V1..V6
pub const CHANNEL_GAINS: [f64; CHANNEL_COUNT] = [0.6, 1.0, -0.5, 0.2, 0.6, 1.0, 0.9, 0.7];

/// Noise configuration for realistic ECG simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Gaussian noise standard deviation in counts (0.0 = no noise)
    pub gaussian_std: f64,
    /// Baseline wander amplitude in counts
    pub baseline_wander: f64,
    pub baseline_wander_hz: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            gaussian_std: 8.0,
            baseline_wander: 150.0,
            baseline_wander_hz: 0.3,
        }
    }
}

impl NoiseConfig {
    pub fn none() -> Self {
        Self {
            gaussian_std: 0.0,
            baseline_wander: 0.0,
            baseline_wander_hz: 0.0,
        }
    }
}

/// Configuration for ECG simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcgSimConfig {
    /// Sampling rate in Hz
    pub sampling_rate: f64,
    pub rhythm: RhythmPattern,
    /// R peak height on a unit-gain channel, ADC counts
    pub r_amplitude: f64,
    pub noise: NoiseConfig,
    /// Power line interference frequency (50/60 Hz)
    pub powerline_freq: Option<f64>,
    /// Power line interference amplitude, ADC counts
    pub powerline_amplitude: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for EcgSimConfig {
    fn default() -> Self {
        Self {
            sampling_rate: 500.0,
            rhythm: RhythmPattern::default(),
            r_amplitude: 1200.0,
            noise: NoiseConfig::default(),
            powerline_freq: Some(60.0),
            powerline_amplitude: 80.0,
            seed: None,
        }
    }
}

impl EcgSimConfig {
    /// Noise-free beats only
    pub fn clean() -> Self {
        Self {
            noise: NoiseConfig::none(),
            powerline_freq: None,
            seed: Some(0),
            ..Self::default()
        }
    }
}

/// ECG signal simulator
pub struct EcgSimulator {
    config: EcgSimConfig,
    rng: StdRng,
    noise: Option<Normal<f64>>,
    /// Position within the current beat, 0..1
    beat_phase: f64,
    time_offset: f64,
    beats: usize,
}

impl EcgSimulator {
    /// Fraction of the beat cycle at which the R peak sits
    const R_PHASE: f64 = 0.35;

    pub fn new(config: EcgSimConfig) -> EcgResult<Self> {
        if !config.sampling_rate.is_finite() || config.sampling_rate <= 0.0 {
            return Err(config_error!(
                "simulation sampling rate must be positive, got {}",
                config.sampling_rate
            ));
        }

        let noise = if config.noise.gaussian_std != 0.0 {
            Some(Normal::new(0.0, config.noise.gaussian_std).map_err(|e| {
                config_error!("failed to create noise distribution: {}", e)
            })?)
        } else {
            None
        };

        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
        debug!(seed, rate = config.sampling_rate, "ECG simulator seeded");

        Ok(EcgSimulator {
            config,
            rng: StdRng::seed_from_u64(seed),
            noise,
            beat_phase: 0.0,
            time_offset: 0.0,
            beats: 0,
        })
    }

    pub fn config(&self) -> &EcgSimConfig {
        &self.config
    }

    /// Beats completed since construction or the last reset
    pub fn beats(&self) -> usize {
        self.beats
    }

    /// Generate `duration` seconds, continuing from the previous call
    pub fn generate(&mut self, duration: f64) -> RawChannels {
        let samples = (duration * self.config.sampling_rate).round().max(0.0) as usize;
        self.generate_samples(samples)
    }

    pub fn generate_samples(&mut self, samples: usize) -> RawChannels {
        let mut channels = RawChannels::new();
        for _ in 0..samples {
            let frame = self.next_frame();
            channels.push_frame(&frame);
        }
        channels
    }

    /// Generate one sample per channel
    pub fn next_frame(&mut self) -> [i16; CHANNEL_COUNT] {
        let dt = 1.0 / self.config.sampling_rate;
        let time = self.time_offset;
        let rr = self.config.rhythm.rr_interval_at(time);

        let since_r = (self.beat_phase - Self::R_PHASE) * rr;
        let beat = self.config.r_amplitude * beat_shape(since_r);

        let wander = self.config.noise.baseline_wander
            * (2.0 * PI * self.config.noise.baseline_wander_hz * time).sin();
        let hum = self
            .config
            .powerline_freq
            .map(|freq| self.config.powerline_amplitude * (2.0 * PI * freq * time).sin())
            .unwrap_or(0.0);

        let mut frame = [0i16; CHANNEL_COUNT];
        for (sample, gain) in frame.iter_mut().zip(CHANNEL_GAINS) {
            let noise = match &self.noise {
                Some(dist) => dist.sample(&mut self.rng),
                None => 0.0,
            };
            *sample = to_counts(gain * beat + wander + hum + noise);
        }

        self.beat_phase += dt / rr;
        if self.beat_phase >= 1.0 {
            self.beat_phase -= 1.0;
            self.beats += 1;
        }
        self.time_offset += dt;

        frame
    }

    /// Restart at time zero; the random stream continues
    pub fn reset_time(&mut self) {
        self.time_offset = 0.0;
        self.beat_phase = 0.0;
        self.beats = 0;
    }
}

/// Unit-height beat template at `t` seconds from the R peak
pub fn beat_shape(t: f64) -> f64 {
    NORMAL_BEAT
        .iter()
        .map(|w| w.amplitude * (-(t - w.offset).powi(2) / (2.0 * w.width * w.width)).exp())
        .sum()
}

fn to_counts(value: f64) -> i16 {
    value.round().clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak_indices(samples: &[i16], threshold: i16) -> Vec<usize> {
        (1..samples.len().saturating_sub(1))
            .filter(|&i| {
                let s = samples[i];
                s > threshold && s >= samples[i - 1] && s > samples[i + 1]
            })
            .collect()
    }

    #[test]
    fn test_simulator_basic() {
        let mut simulator = EcgSimulator::new(EcgSimConfig::default()).unwrap();
        let channels = simulator.generate(2.0);

        assert_eq!(channels.common_len(), 1000);
        for ch in 0..CHANNEL_COUNT {
            assert_eq!(channels.channel(ch).len(), 1000);
        }
    }

    #[test]
    fn test_clean_beats_at_heart_rate() {
        let config = EcgSimConfig {
            rhythm: RhythmPattern::Constant { bpm: 60.0 },
            ..EcgSimConfig::clean()
        };
        let mut simulator = EcgSimulator::new(config).unwrap();
        let channels = simulator.generate(5.2);

        let peaks = peak_indices(channels.channel(1), 600);
        assert_eq!(peaks.len(), 5);
        for pair in peaks.windows(2) {
            assert!((pair[1] - pair[0]).abs_diff(500) <= 1);
        }
        assert_eq!(simulator.beats(), 5);

        // Channel gain 1.0 on lead II
        let max = *channels.channel(1).iter().max().unwrap();
        assert!((max as f64 - 1200.0).abs() < 30.0);
        // V1 inverted
        assert!(*channels.channel(2).iter().min().unwrap() < -400);
    }

    #[test]
    fn test_seed_reproducibility() {
        let config = EcgSimConfig {
            seed: Some(42),
            ..EcgSimConfig::default()
        };
        let a = EcgSimulator::new(config.clone()).unwrap().generate(1.0);
        let b = EcgSimulator::new(config).unwrap().generate(1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_continuous_generation() {
        let config = EcgSimConfig {
            seed: Some(7),
            ..EcgSimConfig::default()
        };
        let whole = EcgSimulator::new(config.clone()).unwrap().generate_samples(300);

        let mut simulator = EcgSimulator::new(config).unwrap();
        let mut parts = simulator.generate_samples(120);
        for _ in 0..180 {
            let next = simulator.next_frame();
            parts.push_frame(&next);
        }
        assert_eq!(whole, parts);
    }

    #[test]
    fn test_output_saturates() {
        let config = EcgSimConfig {
            r_amplitude: 1e6,
            ..EcgSimConfig::clean()
        };
        let channels = EcgSimulator::new(config).unwrap().generate(1.5);
        assert_eq!(*channels.channel(1).iter().max().unwrap(), i16::MAX);
    }

    #[test]
    fn test_invalid_config() {
        let config = EcgSimConfig {
            sampling_rate: 0.0,
            ..EcgSimConfig::default()
        };
        assert!(EcgSimulator::new(config).is_err());

        let config = EcgSimConfig {
            noise: NoiseConfig { gaussian_std: f64::NAN, ..NoiseConfig::default() },
            ..EcgSimConfig::default()
        };
        assert!(EcgSimulator::new(config).is_err());
    }

    #[test]
    fn test_beat_shape() {
        assert!((beat_shape(0.0) - 1.0).abs() < 0.05);
        assert!(beat_shape(0.28) > 0.25);
        assert!(beat_shape(0.6).abs() < 1e-3);
    }
}
