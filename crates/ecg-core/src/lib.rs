//! ECG-Core: Foundation types for the 12-lead ECG capture device
//!
//! Wire protocol, resynchronizing packet decoder, lead derivation and the
//! recording container shared by the processing and simulation crates.

pub mod error;
pub mod protocol;
pub mod decoder;
pub mod leads;
pub mod recording;

pub use error::{DecodeError, EcgError, EcgResult};
pub use protocol::{Packet, PacketHeader, PacketKind, CHANNEL_COUNT};
pub use decoder::{decode, DecodeStats, PacketDecoder, RawChannels};
pub use leads::{derive_leads, Lead, LeadSignals};
pub use recording::{EcgRecording, LeadStats};
