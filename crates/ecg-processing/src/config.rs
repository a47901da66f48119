//! Configuration management for ECG filtering

use crate::filters::{HighPassCutoff, NotchFrequency, MAX_SMOOTHING_WINDOW};
use ecg_core::{config_error, EcgError, EcgResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sampling rate of the capture device, Hz
pub const DEVICE_SAMPLING_RATE: f64 = 500.0;

/// Per-lead filter toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Power-line frequencies to notch out (50, 60, 100, 120 Hz)
    pub notch_frequencies: Vec<u32>,
    /// Median spike removal instead of the high-pass stage
    pub spike_removal: bool,
    /// High-pass corner, used only without spike removal
    pub hp_cutoff_hz: f64,
    /// Single-pole drift correction ahead of the notch
    pub baseline_correction: bool,
    pub baseline_cutoff_hz: f64,
    /// Moving average as the final stage
    pub smoothing: bool,
    pub smoothing_window: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            notch_frequencies: vec![60],
            spike_removal: true,
            hp_cutoff_hz: 0.15,
            baseline_correction: false,
            baseline_cutoff_hz: 0.5,
            smoothing: false,
            smoothing_window: 5,
        }
    }
}

impl FilterConfig {
    /// Warn about every value a filter will ignore. Returns the number of
    /// warnings issued.
    pub fn check_supported(&self, sampling_rate: f64) -> usize {
        let mut warnings = 0;

        for &hz in &self.notch_frequencies {
            if NotchFrequency::from_hz(hz).is_none() {
                warn!(frequency_hz = hz, "unsupported notch frequency, stage ignored");
                warnings += 1;
            }
        }

        let off_rate = (sampling_rate - DEVICE_SAMPLING_RATE).abs() > f64::EPSILON;
        if !self.notch_frequencies.is_empty() && off_rate {
            warn!(
                sampling_rate,
                "notch tables are designed for {} Hz", DEVICE_SAMPLING_RATE
            );
            warnings += 1;
        }

        if !self.spike_removal && HighPassCutoff::from_hz(self.hp_cutoff_hz).is_none() {
            warn!(
                cutoff_hz = self.hp_cutoff_hz,
                "unsupported high-pass cutoff, stage is a passthrough"
            );
            warnings += 1;
        }

        let baseline_ok = self.baseline_cutoff_hz.is_finite() && self.baseline_cutoff_hz > 0.0;
        if self.baseline_correction && !baseline_ok {
            warn!(
                cutoff_hz = self.baseline_cutoff_hz,
                "invalid baseline cutoff, stage is a passthrough"
            );
            warnings += 1;
        }

        if self.smoothing && !(1..=MAX_SMOOTHING_WINDOW).contains(&self.smoothing_window) {
            warn!(
                window = self.smoothing_window,
                max = MAX_SMOOTHING_WINDOW,
                "smoothing window out of range, stage is a passthrough"
            );
            warnings += 1;
        }

        warnings
    }
}

/// Processing profiles for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessingProfile {
    /// Bedside monitoring, the device software defaults
    Monitoring,
    /// Wide band for diagnostic interpretation
    Diagnostic,
    /// Aggressive cleanup for ambulatory recordings
    Ambulatory,
    /// Hand-tuned
    Custom,
}

/// Global processing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Configuration name
    pub name: String,
    pub profile: ProcessingProfile,
    /// Sampling rate of the decoded leads, Hz
    pub sampling_rate: f64,
    pub filter: FilterConfig,
    /// Filter each lead on its own worker thread
    pub parallel_leads: bool,
}

/// Preset configurations for common scenarios
impl ProcessingConfig {
    /// Defaults of the device software: 60 Hz notch, spike removal
    pub fn monitoring() -> Self {
        ProcessingConfig {
            name: "Monitoring".to_string(),
            profile: ProcessingProfile::Monitoring,
            sampling_rate: DEVICE_SAMPLING_RATE,
            filter: FilterConfig::default(),
            parallel_leads: false,
        }
    }

    /// Both mains frequencies notched, 0.05 Hz high-pass keeps ST segments
    pub fn diagnostic() -> Self {
        ProcessingConfig {
            name: "Diagnostic".to_string(),
            profile: ProcessingProfile::Diagnostic,
            sampling_rate: DEVICE_SAMPLING_RATE,
            filter: FilterConfig {
                notch_frequencies: vec![50, 60],
                spike_removal: false,
                hp_cutoff_hz: 0.05,
                ..FilterConfig::default()
            },
            parallel_leads: true,
        }
    }

    pub fn ambulatory() -> Self {
        ProcessingConfig {
            name: "Ambulatory".to_string(),
            profile: ProcessingProfile::Ambulatory,
            sampling_rate: DEVICE_SAMPLING_RATE,
            filter: FilterConfig {
                notch_frequencies: vec![50, 60, 100, 120],
                spike_removal: false,
                hp_cutoff_hz: 0.5,
                baseline_correction: true,
                baseline_cutoff_hz: 0.5,
                smoothing: true,
                smoothing_window: 5,
            },
            parallel_leads: true,
        }
    }

    /// Create configuration suitable for given profile
    pub fn for_profile(profile: ProcessingProfile) -> Self {
        match profile {
            ProcessingProfile::Monitoring => Self::monitoring(),
            ProcessingProfile::Diagnostic => Self::diagnostic(),
            ProcessingProfile::Ambulatory => Self::ambulatory(),
            ProcessingProfile::Custom => ProcessingConfig {
                name: "Custom".to_string(),
                profile: ProcessingProfile::Custom,
                ..Self::monitoring()
            },
        }
    }

    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_parallel_leads(mut self, parallel: bool) -> Self {
        self.parallel_leads = parallel;
        self
    }

    /// Reject values that can never be processed; merely unsupported
    /// filter settings are logged and degrade to a passthrough.
    pub fn validate(&self) -> EcgResult<()> {
        if self.name.trim().is_empty() {
            return Err(config_error!("configuration name cannot be empty"));
        }

        if !self.sampling_rate.is_finite() || self.sampling_rate <= 0.0 {
            return Err(config_error!(
                "sampling rate must be positive, got {}",
                self.sampling_rate
            ));
        }

        self.filter.check_supported(self.sampling_rate);
        Ok(())
    }

    /// Export configuration to JSON
    pub fn to_json(&self) -> EcgResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EcgError::Serialization {
            message: format!("failed to serialize configuration: {}", e),
        })
    }

    /// Import configuration from JSON
    pub fn from_json(json: &str) -> EcgResult<Self> {
        serde_json::from_str(json).map_err(|e| EcgError::Serialization {
            message: format!("failed to deserialize configuration: {}", e),
        })
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::monitoring()
    }
}
