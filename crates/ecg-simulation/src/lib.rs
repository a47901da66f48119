//! ECG-Simulation: synthetic device streams
//!
//! Generates 8-channel ECG in ADC counts, frames it into device packets and
//! damages the resulting byte stream for decoder and pipeline testing.

pub mod signal_patterns;
pub mod ecg_simulator;
pub mod packet_encoder;
pub mod stream;

pub use ecg_simulator::*;
pub use packet_encoder::*;
pub use signal_patterns::*;
pub use stream::*;
