//! Per-lead filter pipelines

use crate::config::FilterConfig;
use crate::filters::{
    BaselineFilter, FilterKind, FilterStage, HiPassFilter, MorphologyFilter, MultiNotchFilter,
    NotchFilter, SmoothingFilter,
};
use crate::processor::SampleFilter;
use ecg_core::{Lead, LeadSignals};
use std::thread;
use tracing::debug;

/// Ordered chain of filter stages for one lead
///
/// Stage order is fixed: baseline correction (optional), notch (always,
/// possibly a passthrough), spike removal or high-pass, smoothing
/// (optional).
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    stages: Vec<FilterStage>,
}

impl FilterPipeline {
    pub fn new(config: &FilterConfig, sampling_rate: f64) -> Self {
        let mut stages = Vec::with_capacity(4);

        if config.baseline_correction {
            stages.push(FilterStage::Baseline(BaselineFilter::new(
                config.baseline_cutoff_hz,
                sampling_rate,
            )));
        }

        stages.push(match config.notch_frequencies.as_slice() {
            [single] => FilterStage::Notch(NotchFilter::new(*single)),
            many => FilterStage::MultiNotch(MultiNotchFilter::new(many)),
        });

        if config.spike_removal {
            stages.push(FilterStage::Morphology(MorphologyFilter::new()));
        } else {
            stages.push(FilterStage::HiPass(HiPassFilter::from_cutoff_hz(config.hp_cutoff_hz)));
        }

        if config.smoothing {
            stages.push(FilterStage::Smoothing(SmoothingFilter::new(config.smoothing_window)));
        }

        FilterPipeline { stages }
    }

    pub fn process_sample(&mut self, x: f64) -> f64 {
        self.stages
            .iter_mut()
            .fold(x, |value, stage| stage.process_sample(value))
    }

    /// Filter a whole sequence, continuing from the current state
    pub fn process(&mut self, samples: &[f64]) -> Vec<f64> {
        samples.iter().map(|&x| self.process_sample(x)).collect()
    }

    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(FilterStage::name).collect()
    }

    pub fn stage_kinds(&self) -> Vec<FilterKind> {
        self.stages.iter().map(FilterStage::kind).collect()
    }

    pub fn stages(&self) -> &[FilterStage] {
        &self.stages
    }
}

/// Twelve independent pipelines, one per lead
#[derive(Debug, Clone)]
pub struct LeadFilterBank {
    pipelines: Vec<FilterPipeline>,
    parallel: bool,
}

impl LeadFilterBank {
    pub fn new(config: &FilterConfig, sampling_rate: f64, parallel: bool) -> Self {
        let template = FilterPipeline::new(config, sampling_rate);
        debug!(stages = ?template.stage_names(), parallel, "building lead filter bank");

        LeadFilterBank {
            pipelines: vec![template; Lead::COUNT],
            parallel,
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn pipeline(&self, lead: Lead) -> &FilterPipeline {
        &self.pipelines[lead.index()]
    }

    /// Filter every lead with its own pipeline
    pub fn filter(&mut self, signals: &LeadSignals) -> LeadSignals {
        let inputs = signals.as_array();

        let outputs: Vec<Vec<f64>> = if self.parallel {
            thread::scope(|scope| {
                let handles: Vec<_> = self
                    .pipelines
                    .iter_mut()
                    .zip(inputs.iter())
                    .map(|(pipeline, samples)| scope.spawn(move || pipeline.process(samples)))
                    .collect();

                handles
                    .into_iter()
                    .map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                    })
                    .collect()
            })
        } else {
            self.pipelines
                .iter_mut()
                .zip(inputs.iter())
                .map(|(pipeline, samples)| pipeline.process(samples))
                .collect()
        };

        let mut outputs = outputs.into_iter();
        LeadSignals::from_leads(std::array::from_fn(|_| outputs.next().unwrap_or_default()))
    }

    pub fn reset(&mut self) {
        for pipeline in &mut self.pipelines {
            pipeline.reset();
        }
    }
}
