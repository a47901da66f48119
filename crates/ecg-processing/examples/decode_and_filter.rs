//! Simulate a damaged device stream, decode it in chunks and filter every lead
//!
//! Run with `RUST_LOG=debug` to see the decoder and pipeline at work.

use anyhow::{Context, Result};
use ecg_core::{Lead, PacketDecoder};
use ecg_processing::{EcgProcessor, ProcessingConfig, ProcessingProfile};
use ecg_simulation::{ByteStream, EcgSimConfig, EcgSimulator, PacketEncoder, RhythmPattern};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let sim_config = EcgSimConfig {
        rhythm: RhythmPattern::SinusArrhythmia {
            mean_bpm: 72.0,
            variation_bpm: 6.0,
            breathing_hz: 0.25,
        },
        seed: Some(7),
        ..EcgSimConfig::default()
    };
    let channels = EcgSimulator::new(sim_config)
        .context("simulator configuration")?
        .generate(10.0);

    let encoder = PacketEncoder::new();
    let mut stream = ByteStream::new(encoder.encode_with_faults(&channels, 50, &[0; 10]), 7);
    stream.insert_garbage(0, 40);
    let corrupted = stream.corrupt_random(3);
    info!(bytes = stream.len(), ?corrupted, "simulated device stream");

    let mut decoder = PacketDecoder::new();
    for chunk in stream.random_chunks(16, 512) {
        decoder.feed(&chunk);
    }

    let config = ProcessingConfig::for_profile(ProcessingProfile::Diagnostic);
    println!("Configuration:\n{}", config.to_json()?);

    let mut processor = EcgProcessor::new(config)?;
    let result = processor
        .process_decoder(decoder)
        .context("decoding simulated stream")?;

    println!(
        "\nDecoded {} ECG packets ({} faults, {} rejected headers, {} bad payloads)",
        result.stats.ecg_packets,
        result.stats.fault_packets,
        result.stats.header_rejections,
        result.stats.payload_checksum_failures
    );
    println!(
        "{} samples per lead, {:.1} s, processed in {} us\n",
        result.samples_per_lead(),
        result.filtered.duration(),
        result.metrics.processing_time_us
    );

    println!(
        "{:<5} {:>10} {:>10} {:>10} {:>10}",
        "lead", "raw p-p", "raw mean", "filt p-p", "filt mean"
    );
    for lead in Lead::ALL {
        let raw = result.raw.lead_stats(lead);
        let filtered = result.filtered.lead_stats(lead);
        println!(
            "{:<5} {:>10.1} {:>10.1} {:>10.1} {:>10.1}",
            lead, raw.peak_to_peak, raw.mean, filtered.peak_to_peak, filtered.mean
        );
    }

    Ok(())
}
