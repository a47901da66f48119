//! ECG-Processing: filter pipeline for decoded ECG leads
//!
//! Per-sample notch, high-pass, spike removal, baseline and smoothing
//! filters, chained into one pipeline per lead and driven by
//! [`EcgProcessor`] from raw device bytes.

pub mod coefficients;
pub mod filters;
pub mod pipeline;
pub mod processor;
pub mod config;

pub use pipeline::{FilterPipeline, LeadFilterBank};
pub use processor::{EcgProcessor, ProcessedRecording, ProcessingMetrics, SampleFilter};
pub use filters::{
    BaselineFilter, FilterKind, FilterStage, HiPassFilter, HighPassCutoff, MorphologyFilter,
    MultiNotchFilter, NotchFilter, NotchFrequency, SmoothingFilter, MAX_SMOOTHING_WINDOW,
};
pub use config::{FilterConfig, ProcessingConfig, ProcessingProfile, DEVICE_SAMPLING_RATE};
