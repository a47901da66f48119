//! Standard 12-lead naming and derivation from the eight acquired channels
//!
//! Channel map: 0 → I, 1 → II, 2..=7 → V1..V6. The remaining limb leads are
//! linear combinations of I and II (Einthoven / Goldberger).

use crate::decoder::RawChannels;
use crate::error::{EcgError, EcgResult};
use crate::protocol::CHANNEL_COUNT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The twelve standard ECG leads, in conventional display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lead {
    I,
    II,
    III,
    #[serde(rename = "aVR")]
    AVR,
    #[serde(rename = "aVL")]
    AVL,
    #[serde(rename = "aVF")]
    AVF,
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
}

impl Lead {
    pub const COUNT: usize = 12;

    pub const ALL: [Lead; Lead::COUNT] = [
        Lead::I,
        Lead::II,
        Lead::III,
        Lead::AVR,
        Lead::AVL,
        Lead::AVF,
        Lead::V1,
        Lead::V2,
        Lead::V3,
        Lead::V4,
        Lead::V5,
        Lead::V6,
    ];

    /// Position in [`Lead::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Lead::I => "I",
            Lead::II => "II",
            Lead::III => "III",
            Lead::AVR => "aVR",
            Lead::AVL => "aVL",
            Lead::AVF => "aVF",
            Lead::V1 => "V1",
            Lead::V2 => "V2",
            Lead::V3 => "V3",
            Lead::V4 => "V4",
            Lead::V5 => "V5",
            Lead::V6 => "V6",
        }
    }

    /// Acquisition channel carrying this lead, `None` for derived leads
    pub fn source_channel(self) -> Option<usize> {
        match self {
            Lead::I => Some(0),
            Lead::II => Some(1),
            Lead::III | Lead::AVR | Lead::AVL | Lead::AVF => None,
            precordial => Some(precordial.index() - 4),
        }
    }

    pub fn is_derived(self) -> bool {
        self.source_channel().is_none()
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Lead {
    type Err = EcgError;

    fn from_str(s: &str) -> EcgResult<Self> {
        Lead::ALL
            .into_iter()
            .find(|lead| lead.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EcgError::UnknownLead {
                name: s.to_string(),
            })
    }
}

/// Sample sequences of all twelve leads
///
/// Serializes as a map from lead name to samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Lead, Vec<f64>>", from = "BTreeMap<Lead, Vec<f64>>")]
pub struct LeadSignals {
    leads: [Vec<f64>; Lead::COUNT],
}

impl LeadSignals {
    pub fn from_leads(leads: [Vec<f64>; Lead::COUNT]) -> Self {
        LeadSignals { leads }
    }

    /// Truncate the raw channels to their common length, then derive
    pub fn from_raw(raw: &RawChannels) -> Self {
        let mut raw = raw.clone();
        raw.truncate_to_common_length();
        derive_leads(raw.channels())
    }

    pub fn get(&self, lead: Lead) -> &[f64] {
        &self.leads[lead.index()]
    }

    /// Leads in standard order
    pub fn iter(&self) -> impl Iterator<Item = (Lead, &[f64])> {
        Lead::ALL
            .into_iter()
            .zip(self.leads.iter().map(Vec::as_slice))
    }

    pub fn as_array(&self) -> &[Vec<f64>; Lead::COUNT] {
        &self.leads
    }

    pub fn into_array(self) -> [Vec<f64>; Lead::COUNT] {
        self.leads
    }

    /// Samples per lead (longest lead, all leads are equal after derivation)
    pub fn len(&self) -> usize {
        self.leads.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.leads.iter().all(Vec::is_empty)
    }
}

impl From<LeadSignals> for BTreeMap<Lead, Vec<f64>> {
    fn from(signals: LeadSignals) -> Self {
        Lead::ALL.into_iter().zip(signals.leads).collect()
    }
}

impl From<BTreeMap<Lead, Vec<f64>>> for LeadSignals {
    fn from(mut map: BTreeMap<Lead, Vec<f64>>) -> Self {
        let leads = Lead::ALL.map(|lead| map.remove(&lead).unwrap_or_default());
        LeadSignals { leads }
    }
}

/// Map the eight acquired channels to the twelve standard leads.
///
/// Channels are expected to have equal length already. Derived leads are
/// empty when either limb channel is.
pub fn derive_leads(channels: &[Vec<i16>; CHANNEL_COUNT]) -> LeadSignals {
    let to_f64 = |channel: &Vec<i16>| channel.iter().map(|&s| f64::from(s)).collect::<Vec<_>>();

    let lead_i = to_f64(&channels[0]);
    let lead_ii = to_f64(&channels[1]);

    let combine = |f: fn(f64, f64) -> f64| -> Vec<f64> {
        if lead_i.is_empty() || lead_ii.is_empty() {
            return Vec::new();
        }
        lead_i.iter().zip(&lead_ii).map(|(&i, &ii)| f(i, ii)).collect()
    };

    let lead_iii = combine(|i, ii| ii - i);
    let avr = combine(|i, ii| -(i + ii) / 2.0);
    let avl = combine(|i, ii| i - ii / 2.0);
    let avf = combine(|i, ii| ii - i / 2.0);

    LeadSignals {
        leads: [
            lead_i,
            lead_ii,
            lead_iii,
            avr,
            avl,
            avf,
            to_f64(&channels[2]),
            to_f64(&channels[3]),
            to_f64(&channels[4]),
            to_f64(&channels[5]),
            to_f64(&channels[6]),
            to_f64(&channels[7]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels() -> [Vec<i16>; CHANNEL_COUNT] {
        [
            vec![100, -40, 0],
            vec![300, 20, -8],
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
            vec![10, 11, 12],
            vec![13, 14, 15],
            vec![16, 17, 18],
        ]
    }

    #[test]
    fn test_limb_derivation() {
        let leads = derive_leads(&channels());

        assert_eq!(leads.get(Lead::I), &[100.0, -40.0, 0.0]);
        assert_eq!(leads.get(Lead::II), &[300.0, 20.0, -8.0]);
        assert_eq!(leads.get(Lead::III), &[200.0, 60.0, -8.0]);
        assert_eq!(leads.get(Lead::AVR), &[-200.0, 10.0, 4.0]);
        assert_eq!(leads.get(Lead::AVL), &[-50.0, -50.0, 4.0]);
        assert_eq!(leads.get(Lead::AVF), &[250.0, 40.0, -8.0]);
    }

    #[test]
    fn test_precordial_passthrough() {
        let leads = derive_leads(&channels());
        assert_eq!(leads.get(Lead::V1), &[1.0, 2.0, 3.0]);
        assert_eq!(leads.get(Lead::V6), &[16.0, 17.0, 18.0]);
        assert_eq!(leads.len(), 3);
    }

    #[test]
    fn test_empty_limb_channel_gives_empty_derived_leads() {
        let mut raw = channels();
        raw[1].clear();
        let leads = derive_leads(&raw);

        assert_eq!(leads.get(Lead::I).len(), 3);
        for lead in [Lead::III, Lead::AVR, Lead::AVL, Lead::AVF] {
            assert!(leads.get(lead).is_empty(), "{} should be empty", lead);
        }
    }

    #[test]
    fn test_from_raw_truncates_first() {
        let mut raw = channels();
        raw[0].push(5);
        raw[4].push(5);
        raw[7].pop();
        let leads = LeadSignals::from_raw(&RawChannels::from_channels(raw));

        for (lead, samples) in leads.iter() {
            assert_eq!(samples.len(), 2, "lead {}", lead);
        }
        assert_eq!(leads.get(Lead::III), &[200.0, 60.0]);
    }

    #[test]
    fn test_lead_names() {
        for lead in Lead::ALL {
            assert_eq!(lead.name().parse::<Lead>().unwrap(), lead);
        }
        assert_eq!("avf".parse::<Lead>().unwrap(), Lead::AVF);
        assert!(matches!(
            "V7".parse::<Lead>(),
            Err(EcgError::UnknownLead { .. })
        ));
        assert_eq!(Lead::V3.source_channel(), Some(4));
        assert!(Lead::AVL.is_derived());
    }

    #[test]
    fn test_serializes_as_named_map() {
        let leads = derive_leads(&channels());
        let json = serde_json::to_string(&leads).unwrap();
        assert!(json.starts_with("{\"I\":[100.0,-40.0,0.0]"));
        assert!(json.contains("\"aVR\":[-200.0,10.0,4.0]"));

        let back: LeadSignals = serde_json::from_str(&json).unwrap();
        assert_eq!(back, leads);
    }
}
