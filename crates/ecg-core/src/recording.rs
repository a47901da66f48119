//! EcgRecording: container for one decoded or filtered set of leads

use crate::error::{EcgError, EcgResult};
use crate::leads::{Lead, LeadSignals};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Twelve lead signals sampled at a common rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcgRecording {
    /// Unique identifier for this recording
    pub id: Uuid,
    /// Sampling rate in Hz
    pub sampling_rate: f64,
    /// Lead samples
    pub leads: LeadSignals,
    /// Creation timestamp (ms since the Unix epoch)
    pub created_at: u64,
}

impl EcgRecording {
    pub fn new(leads: LeadSignals, sampling_rate: f64) -> EcgResult<Self> {
        if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
            return Err(crate::config_error!(
                "sampling rate must be positive, got {}",
                sampling_rate
            ));
        }

        Ok(EcgRecording {
            id: Uuid::new_v4(),
            sampling_rate,
            leads,
            created_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
        })
    }

    /// New recording at the same rate, e.g. after filtering
    pub fn with_leads(&self, leads: LeadSignals) -> Self {
        EcgRecording {
            id: Uuid::new_v4(),
            sampling_rate: self.sampling_rate,
            leads,
            created_at: self.created_at,
        }
    }

    pub fn samples_per_lead(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples_per_lead() as f64 / self.sampling_rate
    }

    pub fn lead(&self, lead: Lead) -> &[f64] {
        self.leads.get(lead)
    }

    /// Time axis in seconds for plotting
    pub fn time_vector(&self) -> Vec<f64> {
        let dt = 1.0 / self.sampling_rate;
        (0..self.samples_per_lead()).map(|i| i as f64 * dt).collect()
    }

    pub fn lead_stats(&self, lead: Lead) -> LeadStats {
        LeadStats::calculate(self.lead(lead))
    }

    /// Copy of the sample range `start..end` of every lead
    pub fn slice_samples(&self, start: usize, end: usize) -> EcgResult<EcgRecording> {
        let len = self.samples_per_lead();
        if start >= end || end > len {
            return Err(EcgError::InvalidRange { start, end, len });
        }

        let leads = self.leads.as_array().clone().map(|samples| {
            if samples.len() >= end {
                samples[start..end].to_vec()
            } else {
                Vec::new()
            }
        });

        Ok(self.with_leads(LeadSignals::from_leads(leads)))
    }
}

/// Basic statistics for one lead
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeadStats {
    pub mean: f64,
    pub rms: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub peak_to_peak: f64,
}

impl LeadStats {
    pub fn calculate(data: &[f64]) -> Self {
        if data.is_empty() {
            return Self {
                mean: 0.0,
                rms: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                peak_to_peak: 0.0,
            };
        }

        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let rms = (data.iter().map(|x| x * x).sum::<f64>() / n).sqrt();
        let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            mean,
            rms,
            std_dev: variance.sqrt(),
            min,
            max,
            peak_to_peak: max - min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::derive_leads;

    fn recording() -> EcgRecording {
        let channels = [
            vec![0, 10, 20, 30],
            vec![5, 5, 5, 5],
            vec![1, 1, 1, 1],
            vec![2, 2, 2, 2],
            vec![3, 3, 3, 3],
            vec![4, 4, 4, 4],
            vec![5, 5, 5, 5],
            vec![6, 6, 6, 6],
        ];
        EcgRecording::new(derive_leads(&channels), 500.0).unwrap()
    }

    #[test]
    fn test_recording_creation() {
        let rec = recording();
        assert_eq!(rec.samples_per_lead(), 4);
        assert!((rec.duration() - 0.008).abs() < 1e-12);
        assert_eq!(rec.time_vector()[2], 2.0 / 500.0);
        assert!(EcgRecording::new(LeadSignals::default(), 0.0).is_err());
        assert!(EcgRecording::new(LeadSignals::default(), f64::NAN).is_err());
    }

    #[test]
    fn test_slice_samples() {
        let rec = recording();
        let slice = rec.slice_samples(1, 3).unwrap();

        assert_eq!(slice.lead(Lead::I), &[10.0, 20.0]);
        assert_eq!(slice.lead(Lead::III), &[-5.0, -15.0]);
        assert_ne!(slice.id, rec.id);
        assert!(matches!(
            rec.slice_samples(2, 9),
            Err(EcgError::InvalidRange { len: 4, .. })
        ));
        assert!(rec.slice_samples(3, 3).is_err());
    }

    #[test]
    fn test_lead_stats() {
        let stats = recording().lead_stats(Lead::I);
        assert_eq!(stats.mean, 15.0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.peak_to_peak, 30.0);
        assert!((stats.std_dev - 125.0f64.sqrt()).abs() < 1e-12);

        let empty = LeadStats::calculate(&[]);
        assert_eq!(empty.rms, 0.0);
    }
}
