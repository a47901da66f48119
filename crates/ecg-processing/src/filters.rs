//! Per-sample digital filters for ECG leads
//!
//! Every filter owns its state and is driven one sample at a time through
//! [`SampleFilter::process_sample`]. None of them can fail: a parameter a
//! filter does not support turns it into an identity passthrough.

use crate::coefficients::{NOTCH_100HZ, NOTCH_120HZ, NOTCH_50HZ, NOTCH_60HZ};
use crate::processor::SampleFilter;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Filter kinds, in the order a pipeline may apply them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    /// Single-pole drift corrector
    Baseline,
    /// FIR notch for one power-line frequency
    Notch,
    /// Several notches in series
    MultiNotch,
    /// Median based spike removal
    Morphology,
    /// Two-pole IIR high-pass
    HiPass,
    /// Moving average
    Smoothing,
}

/// Power-line frequencies with a notch design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotchFrequency {
    Hz50,
    Hz60,
    Hz100,
    Hz120,
}

impl NotchFrequency {
    pub const ALL: [NotchFrequency; 4] = [
        NotchFrequency::Hz50,
        NotchFrequency::Hz60,
        NotchFrequency::Hz100,
        NotchFrequency::Hz120,
    ];

    pub fn from_hz(hz: u32) -> Option<Self> {
        match hz {
            50 => Some(NotchFrequency::Hz50),
            60 => Some(NotchFrequency::Hz60),
            100 => Some(NotchFrequency::Hz100),
            120 => Some(NotchFrequency::Hz120),
            _ => None,
        }
    }

    pub fn hz(self) -> u32 {
        match self {
            NotchFrequency::Hz50 => 50,
            NotchFrequency::Hz60 => 60,
            NotchFrequency::Hz100 => 100,
            NotchFrequency::Hz120 => 120,
        }
    }

    /// FIR taps, designed for 500 Hz sampling
    pub fn coefficients(self) -> &'static [f64] {
        match self {
            NotchFrequency::Hz50 => &NOTCH_50HZ,
            NotchFrequency::Hz60 => &NOTCH_60HZ,
            NotchFrequency::Hz100 => &NOTCH_100HZ,
            NotchFrequency::Hz120 => &NOTCH_120HZ,
        }
    }
}

/// Symmetric FIR notch over a ring buffer of past inputs
#[derive(Debug, Clone)]
pub struct NotchFilter {
    frequency_hz: u32,
    coefficients: &'static [f64],
    history: Vec<f64>,
    index: usize,
}

impl NotchFilter {
    /// Notch for `frequency_hz`; unsupported frequencies pass samples through
    pub fn new(frequency_hz: u32) -> Self {
        let coefficients = NotchFrequency::from_hz(frequency_hz)
            .map(NotchFrequency::coefficients)
            .unwrap_or(&[]);

        NotchFilter {
            frequency_hz,
            coefficients,
            history: vec![0.0; coefficients.len()],
            index: 0,
        }
    }

    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    /// Number of taps, zero for a passthrough notch
    pub fn taps(&self) -> usize {
        self.coefficients.len()
    }
}

impl SampleFilter for NotchFilter {
    fn process_sample(&mut self, x: f64) -> f64 {
        let taps = self.coefficients.len();
        if taps == 0 {
            return x;
        }

        self.history[self.index] = x;

        // Newest sample first, wrapping backwards through the ring
        let (head, tail) = self.history.split_at(self.index + 1);
        let acc = head
            .iter()
            .rev()
            .chain(tail.iter().rev())
            .zip(self.coefficients)
            .fold(0.0, |acc, (sample, coef)| acc + sample * coef);

        self.index = (self.index + 1) % taps;
        acc
    }

    fn reset(&mut self) {
        self.history.fill(0.0);
        self.index = 0;
    }

    fn name(&self) -> &str {
        "Notch Filter"
    }

    fn is_passthrough(&self) -> bool {
        self.coefficients.is_empty()
    }
}

/// Notch filters for several frequencies applied in series
#[derive(Debug, Clone)]
pub struct MultiNotchFilter {
    filters: Vec<NotchFilter>,
}

impl MultiNotchFilter {
    /// One notch per supported frequency, in the order given
    pub fn new(frequencies_hz: &[u32]) -> Self {
        let filters = frequencies_hz
            .iter()
            .filter_map(|&hz| match NotchFrequency::from_hz(hz) {
                Some(_) => Some(NotchFilter::new(hz)),
                None => {
                    debug!(frequency_hz = hz, "no notch design, skipping");
                    None
                }
            })
            .collect();

        MultiNotchFilter { filters }
    }

    pub fn frequencies_hz(&self) -> Vec<u32> {
        self.filters.iter().map(NotchFilter::frequency_hz).collect()
    }
}

impl SampleFilter for MultiNotchFilter {
    fn process_sample(&mut self, x: f64) -> f64 {
        self.filters
            .iter_mut()
            .fold(x, |value, filter| filter.process_sample(value))
    }

    fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }

    fn name(&self) -> &str {
        "Multi Notch Filter"
    }

    fn is_passthrough(&self) -> bool {
        self.filters.iter().all(NotchFilter::is_passthrough)
    }
}

const MORPHOLOGY_WINDOW: usize = 8;

/// Spike removal: subtract the running median of the last eight samples,
/// then smooth lightly and truncate toward zero
#[derive(Debug, Clone)]
pub struct MorphologyFilter {
    buffer: [f64; MORPHOLOGY_WINDOW],
    head: usize,
    count: usize,
    previous_output: f64,
}

impl MorphologyFilter {
    pub const CAPACITY: usize = MORPHOLOGY_WINDOW;

    const INPUT_WEIGHT: f64 = 0.7;
    const PREVIOUS_WEIGHT: f64 = 0.3;

    pub fn new() -> Self {
        MorphologyFilter {
            buffer: [0.0; Self::CAPACITY],
            head: 0,
            count: 0,
            previous_output: 0.0,
        }
    }

    fn median(&self) -> f64 {
        let mut sorted = self.buffer;
        sorted.sort_unstable_by(f64::total_cmp);
        sorted[Self::CAPACITY / 2]
    }
}

impl Default for MorphologyFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFilter for MorphologyFilter {
    fn process_sample(&mut self, x: f64) -> f64 {
        self.buffer[self.head] = x;
        self.head = (self.head + 1) % Self::CAPACITY;
        self.count = (self.count + 1).min(Self::CAPACITY);

        if self.count < Self::CAPACITY {
            return x;
        }

        let output = x - self.median();
        let smoothed =
            (Self::INPUT_WEIGHT * output + Self::PREVIOUS_WEIGHT * self.previous_output).trunc();
        self.previous_output = smoothed;
        smoothed
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn name(&self) -> &str {
        "Morphology Filter"
    }
}

/// High-pass corner frequencies with a fixed design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighPassCutoff {
    /// 0.05 Hz
    Hz005,
    /// 0.15 Hz
    Hz015,
    /// 0.5 Hz
    Hz05,
}

/// `(HP0, HP1, GAIN)` of the two-pole design
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiPassCoefficients {
    pub hp0: f64,
    pub hp1: f64,
    pub gain: f64,
}

impl HighPassCutoff {
    pub const ALL: [HighPassCutoff; 3] =
        [HighPassCutoff::Hz005, HighPassCutoff::Hz015, HighPassCutoff::Hz05];

    pub fn from_hz(hz: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|cutoff| (cutoff.hz() - hz).abs() < 1e-9)
    }

    pub fn hz(self) -> f64 {
        match self {
            HighPassCutoff::Hz005 => 0.05,
            HighPassCutoff::Hz015 => 0.15,
            HighPassCutoff::Hz05 => 0.5,
        }
    }

    pub fn coefficients(self) -> HiPassCoefficients {
        match self {
            HighPassCutoff::Hz05 => HiPassCoefficients {
                hp0: -0.9878018507,
                hp1: 1.9877269954,
                gain: 1.006155446,
            },
            HighPassCutoff::Hz015 => HiPassCoefficients {
                hp0: -0.9963349287,
                hp1: 1.9963282000,
                gain: 1.001837588,
            },
            HighPassCutoff::Hz005 => HiPassCoefficients {
                hp0: -0.9987734371,
                hp1: 1.9987726844,
                gain: 1.00061384,
            },
        }
    }
}

/// Two-pole IIR high-pass for baseline wander
#[derive(Debug, Clone)]
pub struct HiPassFilter {
    coefficients: Option<HiPassCoefficients>,
    x: [f64; 3],
    y: [f64; 3],
}

impl HiPassFilter {
    pub fn new(cutoff: HighPassCutoff) -> Self {
        HiPassFilter {
            coefficients: Some(cutoff.coefficients()),
            x: [0.0; 3],
            y: [0.0; 3],
        }
    }

    /// High-pass for `cutoff_hz`; unsupported corners pass samples through
    pub fn from_cutoff_hz(cutoff_hz: f64) -> Self {
        match HighPassCutoff::from_hz(cutoff_hz) {
            Some(cutoff) => Self::new(cutoff),
            None => {
                debug!(cutoff_hz, "no high-pass design, passing through");
                HiPassFilter {
                    coefficients: None,
                    x: [0.0; 3],
                    y: [0.0; 3],
                }
            }
        }
    }
}

impl SampleFilter for HiPassFilter {
    fn process_sample(&mut self, input: f64) -> f64 {
        let Some(c) = self.coefficients else {
            return input;
        };

        self.x[0] = self.x[1];
        self.x[1] = self.x[2];
        self.x[2] = input / c.gain;
        self.y[0] = self.y[1];
        self.y[1] = self.y[2];
        self.y[2] =
            (self.x[0] + self.x[2]) - 2.0 * self.x[1] + c.hp0 * self.y[0] + c.hp1 * self.y[1];
        self.y[2]
    }

    fn reset(&mut self) {
        self.x = [0.0; 3];
        self.y = [0.0; 3];
    }

    fn name(&self) -> &str {
        "High-pass Filter"
    }

    fn is_passthrough(&self) -> bool {
        self.coefficients.is_none()
    }
}

/// Single-pole RC high-pass correcting slow baseline drift
#[derive(Debug, Clone)]
pub struct BaselineFilter {
    alpha: Option<f64>,
    prev_input: f64,
    prev_output: f64,
}

impl BaselineFilter {
    pub fn new(cutoff_hz: f64, sampling_rate: f64) -> Self {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        let alpha = if valid(cutoff_hz) && valid(sampling_rate) {
            let rc = 1.0 / (2.0 * PI * cutoff_hz);
            let dt = 1.0 / sampling_rate;
            Some(rc / (rc + dt))
        } else {
            debug!(cutoff_hz, sampling_rate, "invalid baseline parameters, passing through");
            None
        };

        BaselineFilter {
            alpha,
            prev_input: 0.0,
            prev_output: 0.0,
        }
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }
}

impl SampleFilter for BaselineFilter {
    fn process_sample(&mut self, input: f64) -> f64 {
        let Some(alpha) = self.alpha else {
            return input;
        };

        let output = alpha * (self.prev_output + input - self.prev_input);
        self.prev_input = input;
        self.prev_output = output;
        output
    }

    fn reset(&mut self) {
        self.prev_input = 0.0;
        self.prev_output = 0.0;
    }

    fn name(&self) -> &str {
        "Baseline Filter"
    }

    fn is_passthrough(&self) -> bool {
        self.alpha.is_none()
    }
}

/// Longest moving average accepted, one second at the device rate
pub const MAX_SMOOTHING_WINDOW: usize = 500;

/// Moving average over the last `window_size` samples
#[derive(Debug, Clone)]
pub struct SmoothingFilter {
    window: Vec<f64>,
    head: usize,
    count: usize,
}

impl SmoothingFilter {
    /// A window of 0 or above [`MAX_SMOOTHING_WINDOW`] makes a passthrough
    pub fn new(window_size: usize) -> Self {
        let window_size = if window_size > MAX_SMOOTHING_WINDOW { 0 } else { window_size };
        SmoothingFilter {
            window: vec![0.0; window_size],
            head: 0,
            count: 0,
        }
    }

    pub fn window_size(&self) -> usize {
        self.window.len()
    }
}

impl SampleFilter for SmoothingFilter {
    fn process_sample(&mut self, x: f64) -> f64 {
        let size = self.window.len();
        if size == 0 {
            return x;
        }

        self.window[self.head] = x;
        self.head = (self.head + 1) % size;
        self.count = (self.count + 1).min(size);

        // Unfilled slots are still zero, so summing the whole ring is exact
        self.window.iter().sum::<f64>() / self.count as f64
    }

    fn reset(&mut self) {
        self.window.fill(0.0);
        self.head = 0;
        self.count = 0;
    }

    fn name(&self) -> &str {
        "Smoothing Filter"
    }

    fn is_passthrough(&self) -> bool {
        self.window.is_empty()
    }
}

/// One configured stage of a lead pipeline
#[derive(Debug, Clone)]
pub enum FilterStage {
    Baseline(BaselineFilter),
    Notch(NotchFilter),
    MultiNotch(MultiNotchFilter),
    Morphology(MorphologyFilter),
    HiPass(HiPassFilter),
    Smoothing(SmoothingFilter),
}

impl FilterStage {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterStage::Baseline(_) => FilterKind::Baseline,
            FilterStage::Notch(_) => FilterKind::Notch,
            FilterStage::MultiNotch(_) => FilterKind::MultiNotch,
            FilterStage::Morphology(_) => FilterKind::Morphology,
            FilterStage::HiPass(_) => FilterKind::HiPass,
            FilterStage::Smoothing(_) => FilterKind::Smoothing,
        }
    }

    fn inner(&self) -> &dyn SampleFilter {
        match self {
            FilterStage::Baseline(f) => f,
            FilterStage::Notch(f) => f,
            FilterStage::MultiNotch(f) => f,
            FilterStage::Morphology(f) => f,
            FilterStage::HiPass(f) => f,
            FilterStage::Smoothing(f) => f,
        }
    }
}

impl SampleFilter for FilterStage {
    fn process_sample(&mut self, x: f64) -> f64 {
        match self {
            FilterStage::Baseline(f) => f.process_sample(x),
            FilterStage::Notch(f) => f.process_sample(x),
            FilterStage::MultiNotch(f) => f.process_sample(x),
            FilterStage::Morphology(f) => f.process_sample(x),
            FilterStage::HiPass(f) => f.process_sample(x),
            FilterStage::Smoothing(f) => f.process_sample(x),
        }
    }

    fn reset(&mut self) {
        match self {
            FilterStage::Baseline(f) => f.reset(),
            FilterStage::Notch(f) => f.reset(),
            FilterStage::MultiNotch(f) => f.reset(),
            FilterStage::Morphology(f) => f.reset(),
            FilterStage::HiPass(f) => f.reset(),
            FilterStage::Smoothing(f) => f.reset(),
        }
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn is_passthrough(&self) -> bool {
        self.inner().is_passthrough()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FS: f64 = 500.0;

    fn sine(freq: f64, amplitude: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| amplitude * (2.0 * PI * freq * i as f64 / FS + 0.3).sin())
            .collect()
    }

    fn peak(samples: &[f64]) -> f64 {
        samples.iter().fold(0.0, |m: f64, x| m.max(x.abs()))
    }

    #[test]
    fn test_notch_tables_are_symmetric_and_odd() {
        for freq in NotchFrequency::ALL {
            let taps = freq.coefficients();
            assert_eq!(taps.len() % 2, 1, "{:?}", freq);
            assert!(taps.len() >= 139 && taps.len() <= 201);
            assert!(taps.iter().eq(taps.iter().rev()), "{:?} not symmetric", freq);
        }
    }

    #[test]
    fn test_notch_attenuates_target_frequency() {
        let amplitude = 1000.0;
        for freq in NotchFrequency::ALL {
            let mut filter = NotchFilter::new(freq.hz());
            let taps = filter.taps();
            let output = filter.process_block(&sine(freq.hz() as f64, amplitude, 4 * taps));

            // At least 20 dB once the delay line is full
            let steady = peak(&output[output.len() - taps..]);
            assert!(
                steady < amplitude * 0.1,
                "{} Hz only attenuated to {}",
                freq.hz(),
                steady
            );
        }
    }

    #[test]
    fn test_notch_preserves_ecg_band() {
        let amplitude = 1000.0;
        for freq in NotchFrequency::ALL {
            let mut filter = NotchFilter::new(freq.hz());
            let taps = filter.taps();
            let output = filter.process_block(&sine(10.0, amplitude, 4 * taps));

            let steady = peak(&output[output.len() - taps..]);
            assert!((steady / amplitude - 1.0).abs() < 0.05, "{} Hz notch: {}", freq.hz(), steady);
        }
    }

    #[test]
    fn test_notch_impulse_response_is_table() {
        let mut filter = NotchFilter::new(60);
        let taps = filter.taps();
        let mut impulse = vec![0.0; taps + 3];
        impulse[0] = 1.0;

        let response = filter.process_block(&impulse);
        assert_eq!(&response[..taps], NotchFrequency::Hz60.coefficients());
        assert_eq!(&response[taps..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unsupported_notch_is_identity() {
        let mut filter = NotchFilter::new(55);
        assert!(filter.is_passthrough());
        assert_eq!(filter.taps(), 0);
        assert_eq!(filter.process_sample(12.5), 12.5);

        let mut multi = MultiNotchFilter::new(&[55, 75]);
        assert!(multi.is_passthrough());
        assert_eq!(multi.process_sample(-3.0), -3.0);
    }

    #[test]
    fn test_multi_notch_chains_in_order() {
        let mut multi = MultiNotchFilter::new(&[50, 13, 100]);
        assert_eq!(multi.frequencies_hz(), vec![50, 100]);

        let mut first = NotchFilter::new(50);
        let mut second = NotchFilter::new(100);
        for x in sine(7.0, 300.0, 600) {
            let expected = second.process_sample(first.process_sample(x));
            assert_eq!(multi.process_sample(x), expected);
        }
    }

    #[test]
    fn test_morphology_exactness() {
        let inputs = [
            10.0, -3.0, 7.0, 100.0, 2.0, 5.0, -8.0, 12.0, 40.0, 0.0, 3.0, -20.0, 6.0, 6.0, 9.0,
            -1.0,
        ];
        let expected = [
            10.0, -3.0, 7.0, 100.0, 2.0, 5.0, -8.0, 3.0, 23.0, 2.0, 0.0, -16.0, -4.0, -1.0, 1.0,
            -4.0,
        ];

        let mut filter = MorphologyFilter::new();
        let output = filter.process_block(&inputs);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_morphology_matches_direct_median() {
        let inputs = sine(1.3, 500.0, 64)
            .into_iter()
            .enumerate()
            .map(|(i, x)| if i % 9 == 4 { x + 900.0 } else { x })
            .collect::<Vec<_>>();

        let mut filter = MorphologyFilter::new();
        let mut previous = 0.0;
        for (n, &x) in inputs.iter().enumerate() {
            let y = filter.process_sample(x);
            if n < MorphologyFilter::CAPACITY - 1 {
                assert_eq!(y, x);
                continue;
            }
            let mut window = inputs[n + 1 - MorphologyFilter::CAPACITY..=n].to_vec();
            window.sort_by(f64::total_cmp);
            let expected = (0.7 * (x - window[4]) + 0.3 * previous).trunc();
            assert_eq!(y, expected, "sample {}", n);
            previous = expected;
        }
    }

    #[test]
    fn test_hipass_reset_is_deterministic() {
        let input: Vec<f64> = (0..2000)
            .map(|i| 800.0 + 300.0 * ((i * 37 % 101) as f64 - 50.0) / 50.0)
            .collect();

        for cutoff in HighPassCutoff::ALL {
            let mut filter = HiPassFilter::new(cutoff);
            filter.process_block(&[5.0, -7.0, 1e4]);
            filter.reset();
            let first = filter.process_block(&input);

            filter.reset();
            let second = filter.process_block(&input);
            let fresh = HiPassFilter::new(cutoff).process_block(&input);

            assert!(first.iter().zip(&second).all(|(a, b)| a.to_bits() == b.to_bits()));
            assert!(first.iter().zip(&fresh).all(|(a, b)| a.to_bits() == b.to_bits()));
        }
    }

    #[test]
    fn test_hipass_first_samples() {
        let mut filter = HiPassFilter::new(HighPassCutoff::Hz05);
        let gain = 1.006155446;
        assert_eq!(filter.process_sample(1.0), 1.0 / gain);
        // x = [0, 1/g, 1/g], y = [0, 1/g, ?]
        let expected = (1.0 / gain) - 2.0 * (1.0 / gain) + 1.9877269954 * (1.0 / gain);
        assert!((filter.process_sample(1.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_hipass_removes_dc() {
        let mut filter = HiPassFilter::from_cutoff_hz(0.5);
        let output = filter.process_block(&vec![1000.0; 20_000]);
        assert!(output[output.len() - 1].abs() < 1.0);
    }

    #[test]
    fn test_unsupported_hipass_is_identity() {
        let mut filter = HiPassFilter::from_cutoff_hz(0.3);
        assert!(filter.is_passthrough());
        assert_eq!(filter.process_sample(42.0), 42.0);
        assert_eq!(HighPassCutoff::from_hz(0.15), Some(HighPassCutoff::Hz015));
    }

    #[test]
    fn test_baseline_filter() {
        let mut filter = BaselineFilter::new(0.5, 500.0);
        let rc = 1.0 / (2.0 * PI * 0.5);
        let alpha = rc / (rc + 1.0 / 500.0);
        assert_eq!(filter.alpha(), Some(alpha));

        assert_eq!(filter.process_sample(10.0), alpha * 10.0);
        assert!((filter.process_sample(10.0) - alpha * alpha * 10.0).abs() < 1e-9);

        let mut decayed = 0.0;
        for _ in 0..5000 {
            decayed = filter.process_sample(10.0);
        }
        assert!(decayed.abs() < 1e-6);
    }

    #[test]
    fn test_invalid_baseline_is_identity() {
        for (cutoff, fs) in [(0.0, 500.0), (0.5, 0.0), (-1.0, 500.0), (f64::NAN, 500.0)] {
            let mut filter = BaselineFilter::new(cutoff, fs);
            assert!(filter.is_passthrough());
            assert_eq!(filter.process_sample(3.5), 3.5);
        }
    }

    #[test]
    fn test_smoothing_filter() {
        let mut filter = SmoothingFilter::new(4);
        let output = filter.process_block(&[4.0, 8.0, 0.0, 4.0, 12.0, -4.0]);
        assert_eq!(output, vec![4.0, 6.0, 4.0, 4.0, 6.0, 3.0]);

        filter.reset();
        assert_eq!(filter.process_sample(2.0), 2.0);

        let mut identity = SmoothingFilter::new(0);
        assert_eq!(identity.process_sample(9.0), 9.0);
    }

    #[test]
    fn test_oversized_smoothing_window_is_identity() {
        let widest = SmoothingFilter::new(MAX_SMOOTHING_WINDOW);
        assert_eq!(widest.window_size(), MAX_SMOOTHING_WINDOW);
        assert!(!widest.is_passthrough());

        for size in [MAX_SMOOTHING_WINDOW + 1, usize::MAX] {
            let mut filter = SmoothingFilter::new(size);
            assert!(filter.is_passthrough());
            assert_eq!(filter.window_size(), 0);
            assert_eq!(filter.process_block(&[1.0, -7.5, 3.0]), vec![1.0, -7.5, 3.0]);
        }
    }

    #[test]
    fn test_stage_dispatch() {
        let mut stage = FilterStage::Smoothing(SmoothingFilter::new(2));
        assert_eq!(stage.kind(), FilterKind::Smoothing);
        assert_eq!(stage.name(), "Smoothing Filter");
        assert_eq!(stage.process_sample(2.0), 2.0);
        assert_eq!(stage.process_sample(4.0), 3.0);

        stage.reset();
        assert_eq!(stage.process_sample(8.0), 8.0);
        assert!(!stage.is_passthrough());
    }
}
