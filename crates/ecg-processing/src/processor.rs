//! Core filter trait and the bytes-to-leads processor

use crate::config::ProcessingConfig;
use crate::pipeline::LeadFilterBank;
use ecg_core::{
    DecodeStats, EcgRecording, EcgResult, Lead, LeadSignals, LeadStats, PacketDecoder, RawChannels,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

/// Core trait for all per-sample filters
pub trait SampleFilter: Send {
    /// Filter one sample, updating internal state
    fn process_sample(&mut self, x: f64) -> f64;

    /// Return to the freshly constructed state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;

    /// True when the filter leaves every sample unchanged
    fn is_passthrough(&self) -> bool {
        false
    }

    /// Filter a block of samples in order
    fn process_block(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }
}

/// Performance metrics for one processing run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessingMetrics {
    /// Time spent decoding bytes, microseconds
    pub decode_time_us: u64,
    /// Time spent filtering all leads, microseconds
    pub filter_time_us: u64,
    /// Total processing time, microseconds
    pub processing_time_us: u64,
    /// Bytes handed to the decoder
    pub bytes_processed: usize,
    pub samples_per_lead: usize,
    /// Leads that carried samples
    pub leads_filtered: usize,
}

impl ProcessingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing a processing operation
    pub fn start_timing() -> ProcessingTimer {
        let now = Instant::now();
        ProcessingTimer {
            start_time: now,
            stage_start: now,
            metrics: ProcessingMetrics::new(),
        }
    }

    /// Filtered samples per second across all leads
    pub fn throughput(&self) -> f64 {
        if self.processing_time_us == 0 {
            return 0.0;
        }
        (self.samples_per_lead * self.leads_filtered) as f64 * 1e6 / self.processing_time_us as f64
    }
}

/// Helper for timing processing operations
pub struct ProcessingTimer {
    start_time: Instant,
    stage_start: Instant,
    metrics: ProcessingMetrics,
}

impl ProcessingTimer {
    fn lap(&mut self) -> u64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.stage_start).as_micros() as u64;
        self.stage_start = now;
        elapsed
    }

    pub fn decoded(&mut self, bytes: usize) {
        self.metrics.decode_time_us = self.lap();
        self.metrics.bytes_processed = bytes;
    }

    pub fn filtered(&mut self, signals: &LeadSignals) {
        self.metrics.filter_time_us = self.lap();
        self.metrics.samples_per_lead = signals.len();
        self.metrics.leads_filtered = signals.iter().filter(|(_, s)| !s.is_empty()).count();
    }

    /// Finish timing and return metrics
    pub fn finish(mut self) -> ProcessingMetrics {
        self.metrics.processing_time_us = self.start_time.elapsed().as_micros() as u64;
        self.metrics
    }
}

/// Raw and filtered leads of one processed byte stream
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedRecording {
    pub raw: EcgRecording,
    pub filtered: EcgRecording,
    pub stats: DecodeStats,
    pub metrics: ProcessingMetrics,
}

impl ProcessedRecording {
    pub fn samples_per_lead(&self) -> usize {
        self.filtered.samples_per_lead()
    }

    /// Statistics of every filtered lead
    pub fn filtered_stats(&self) -> BTreeMap<Lead, LeadStats> {
        Lead::ALL
            .into_iter()
            .map(|lead| (lead, self.filtered.lead_stats(lead)))
            .collect()
    }

    pub fn to_json(&self) -> EcgResult<String> {
        serde_json::to_string(self).map_err(|e| ecg_core::EcgError::Serialization {
            message: format!("failed to serialize recording: {}", e),
        })
    }
}

/// Decodes device bytes and filters every lead
///
/// Filter state persists across calls so consecutive captures of one
/// session are filtered as a continuous signal; call [`EcgProcessor::reset`]
/// between unrelated captures.
pub struct EcgProcessor {
    config: ProcessingConfig,
    bank: LeadFilterBank,
}

impl EcgProcessor {
    pub fn new(config: ProcessingConfig) -> EcgResult<Self> {
        config.validate()?;
        let bank = LeadFilterBank::new(&config.filter, config.sampling_rate, config.parallel_leads);
        info!(name = %config.name, profile = ?config.profile, "ECG processor ready");

        Ok(EcgProcessor { config, bank })
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Decode a complete byte buffer, derive the twelve leads and filter them
    pub fn process_bytes(&mut self, bytes: &[u8]) -> EcgResult<ProcessedRecording> {
        let timer = ProcessingMetrics::start_timing();
        let mut decoder = PacketDecoder::new();
        decoder.feed(bytes);
        self.finish_decoder(decoder, timer)
    }

    /// Process whatever a decoder fed in chunks has accumulated
    ///
    /// The chunks were scanned before this call, so `decode_time_us` only
    /// covers the final step of the decoder.
    pub fn process_decoder(&mut self, decoder: PacketDecoder) -> EcgResult<ProcessedRecording> {
        self.finish_decoder(decoder, ProcessingMetrics::start_timing())
    }

    /// Filter channels decoded elsewhere
    pub fn process_channels(&mut self, raw: &RawChannels) -> EcgResult<ProcessedRecording> {
        let timer = ProcessingMetrics::start_timing();
        self.filter_channels(raw, DecodeStats::default(), timer)
    }

    fn finish_decoder(
        &mut self,
        decoder: PacketDecoder,
        mut timer: ProcessingTimer,
    ) -> EcgResult<ProcessedRecording> {
        let (raw, stats) = decoder.finish_with_stats()?;
        timer.decoded(stats.bytes_received);

        self.filter_channels(&raw, stats, timer)
    }

    fn filter_channels(
        &mut self,
        raw: &RawChannels,
        stats: DecodeStats,
        mut timer: ProcessingTimer,
    ) -> EcgResult<ProcessedRecording> {
        let leads = LeadSignals::from_raw(raw);
        let raw_recording = EcgRecording::new(leads, self.config.sampling_rate)?;

        let filtered = self.bank.filter(&raw_recording.leads);
        timer.filtered(&filtered);
        let filtered_recording = raw_recording.with_leads(filtered);

        let metrics = timer.finish();
        debug!(
            samples = metrics.samples_per_lead,
            decode_us = metrics.decode_time_us,
            filter_us = metrics.filter_time_us,
            "processed recording"
        );

        Ok(ProcessedRecording {
            raw: raw_recording,
            filtered: filtered_recording,
            stats,
            metrics,
        })
    }

    /// Clear the filter state of every lead
    pub fn reset(&mut self) {
        self.bank.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use ecg_core::protocol::{checksum_byte, encode_frame, PacketHeader, PacketKind};
    use ecg_core::{DecodeError, EcgError};

    fn packet(frames: &[[i16; 8]; 5]) -> Vec<u8> {
        let mut bytes = PacketHeader::for_kind(PacketKind::Ecg).to_bytes().to_vec();
        let mut payload: Vec<u8> = frames.iter().flat_map(encode_frame).collect();
        payload.push(checksum_byte(&payload));
        bytes.extend(payload);
        bytes
    }

    fn stream(packets: usize) -> Vec<u8> {
        (0..packets)
            .flat_map(|p| {
                let frames = std::array::from_fn(|f| {
                    std::array::from_fn(|ch| ((p * 5 + f) as i16 % 17 - 8) * (ch as i16 + 1))
                });
                packet(&frames)
            })
            .collect()
    }

    fn passthrough_config() -> ProcessingConfig {
        ProcessingConfig::default().with_filter(FilterConfig {
            notch_frequencies: Vec::new(),
            spike_removal: false,
            hp_cutoff_hz: 0.2,
            ..FilterConfig::default()
        })
    }

    #[test]
    fn test_process_bytes() {
        let mut processor = EcgProcessor::new(ProcessingConfig::default()).unwrap();
        let result = processor.process_bytes(&stream(20)).unwrap();

        assert_eq!(result.samples_per_lead(), 100);
        assert_eq!(result.stats.ecg_packets, 20);
        assert_eq!(result.metrics.bytes_processed, 20 * 88);
        assert_eq!(result.metrics.leads_filtered, 12);
        assert_eq!(result.raw.sampling_rate, 500.0);
        for (lead, samples) in result.filtered.leads.iter() {
            assert_eq!(samples.len(), 100, "{}", lead);
        }
    }

    #[test]
    fn test_passthrough_keeps_raw_leads() {
        let mut processor = EcgProcessor::new(passthrough_config()).unwrap();
        let result = processor.process_bytes(&stream(4)).unwrap();
        assert_eq!(result.raw.leads, result.filtered.leads);
        assert_eq!(result.raw.lead(Lead::III).len(), 20);
    }

    #[test]
    fn test_no_data_is_an_error() {
        let mut processor = EcgProcessor::new(ProcessingConfig::default()).unwrap();
        let err = processor.process_bytes(&[0x80, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, EcgError::Decode(DecodeError::NoEcgData { bytes_scanned: 3, .. })));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ProcessingConfig::default();
        config.sampling_rate = -1.0;
        assert!(EcgProcessor::new(config).is_err());
    }

    #[test]
    fn test_chunked_decoder_matches_whole_buffer() {
        let bytes = stream(6);
        let mut decoder = PacketDecoder::new();
        for chunk in bytes.chunks(11) {
            decoder.feed(chunk);
        }

        let mut processor = EcgProcessor::new(ProcessingConfig::diagnostic()).unwrap();
        let chunked = processor.process_decoder(decoder).unwrap();
        processor.reset();
        let whole = processor.process_bytes(&bytes).unwrap();

        assert_eq!(chunked.filtered.leads, whole.filtered.leads);
    }

    #[test]
    fn test_process_channels_truncates() {
        let mut channels: [Vec<i16>; 8] = std::array::from_fn(|_| vec![1, 2, 3, 4]);
        channels[5].push(5);
        let raw = RawChannels::from_channels(channels);

        let mut processor = EcgProcessor::new(passthrough_config()).unwrap();
        let result = processor.process_channels(&raw).unwrap();
        assert_eq!(result.samples_per_lead(), 4);
        assert_eq!(result.stats, DecodeStats::default());
        assert_eq!(result.filtered_stats()[&Lead::I].max, 4.0);
    }

    #[test]
    fn test_oversized_smoothing_window_from_json() {
        let smoothed = ProcessingConfig::default().with_filter(FilterConfig {
            smoothing: true,
            ..FilterConfig::default()
        });
        let json = smoothed
            .to_json()
            .unwrap()
            .replace("\"smoothing_window\": 5", "\"smoothing_window\": 18446744073709551615");
        let config = ProcessingConfig::from_json(&json).unwrap();
        assert_eq!(config.filter.smoothing_window, usize::MAX);
        assert!(config.validate().is_ok());

        let mut processor = EcgProcessor::new(config).unwrap();
        let result = processor.process_bytes(&stream(10)).unwrap();

        let mut unsmoothed = EcgProcessor::new(ProcessingConfig::default()).unwrap();
        let expected = unsmoothed.process_bytes(&stream(10)).unwrap();
        assert_eq!(result.filtered.leads, expected.filtered.leads);
    }

    #[test]
    fn test_decode_time_includes_scan() {
        let bytes = stream(6000);

        let direct_us = (0..3)
            .map(|_| {
                let start = Instant::now();
                let mut decoder = PacketDecoder::new();
                decoder.feed(&bytes);
                start.elapsed().as_micros() as u64
            })
            .min()
            .unwrap();

        let mut processor = EcgProcessor::new(passthrough_config()).unwrap();
        let metrics = processor.process_bytes(&bytes).unwrap().metrics;

        assert_eq!(metrics.bytes_processed, bytes.len());
        assert!(metrics.processing_time_us >= metrics.decode_time_us + metrics.filter_time_us);
        assert!(
            metrics.decode_time_us * 4 >= direct_us,
            "decode {} us, direct scan {} us",
            metrics.decode_time_us,
            direct_us
        );
    }

    #[test]
    fn test_recording_serializes() {
        let mut processor = EcgProcessor::new(ProcessingConfig::default()).unwrap();
        let json = processor.process_bytes(&stream(1)).unwrap().to_json().unwrap();
        assert!(json.contains("\"filtered\""));
        assert!(json.contains("\"aVF\""));
        assert!(json.contains("\"ecg_packets\":1"));
    }
}
