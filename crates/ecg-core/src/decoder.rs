//! Resynchronizing packet decoder
//!
//! The scanner walks the byte stream one byte at a time until it meets a sync
//! marker, validates the header that starts there and consumes the packet if
//! one follows. A rejected header only costs one byte, so a valid packet that
//! starts inside a corrupted one is never lost. Truncated packets stop the
//! scan cleanly; when the decoder is fed in chunks the unconsumed tail waits
//! for the next chunk.

use crate::error::DecodeError;
use crate::protocol::{
    checksum_ok, Packet, PacketHeader, PacketKind, CHANNEL_COUNT, HEADER_SIZE, SYNC_BYTE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// Raw samples of the eight acquisition channels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawChannels {
    channels: [Vec<i16>; CHANNEL_COUNT],
}

impl RawChannels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_channels(channels: [Vec<i16>; CHANNEL_COUNT]) -> Self {
        RawChannels { channels }
    }

    /// Samples of one channel, empty for an out of range index
    pub fn channel(&self, index: usize) -> &[i16] {
        self.channels.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn channels(&self) -> &[Vec<i16>; CHANNEL_COUNT] {
        &self.channels
    }

    pub fn into_channels(self) -> [Vec<i16>; CHANNEL_COUNT] {
        self.channels
    }

    /// Length of the shortest channel
    pub fn common_len(&self) -> usize {
        self.channels.iter().map(Vec::len).min().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.channels.iter().all(Vec::is_empty)
    }

    /// Cut every channel down to the shortest one
    pub fn truncate_to_common_length(&mut self) {
        let len = self.common_len();
        for channel in &mut self.channels {
            channel.truncate(len);
        }
    }

    /// Append one frame, one sample per channel
    pub fn push_frame(&mut self, frame: &[i16; CHANNEL_COUNT]) {
        for (channel, &sample) in self.channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }
}

/// Counters describing what the scanner met
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeStats {
    /// Bytes handed to the decoder
    pub bytes_received: usize,
    /// ECG packets whose samples were kept
    pub ecg_packets: usize,
    /// Fault packets skipped
    pub fault_packets: usize,
    /// Valid headers with an unrecognized subtype
    pub unknown_subtypes: usize,
    /// Sync bytes whose header failed validation
    pub header_rejections: usize,
    /// ECG payloads dropped for a bad checksum
    pub payload_checksum_failures: usize,
    /// Non-sync bytes discarded while hunting for a sync marker; rejected
    /// sync bytes are counted in `header_rejections` only
    pub bytes_skipped: usize,
    /// Bytes of an incomplete packet left when decoding finished
    pub trailing_bytes: usize,
}

/// Outcome of scanning from one position
enum ScanStep<'a> {
    /// A complete packet starts here
    Packet(Packet<'a>),
    /// Not a packet start, move one byte on
    Skip,
    /// A packet may start here but the buffer ends first
    Incomplete,
}

/// Incremental decoder for the device byte stream
#[derive(Debug, Default)]
pub struct PacketDecoder {
    /// Unconsumed bytes carried over to the next feed
    pending: Vec<u8>,
    channels: RawChannels,
    stats: DecodeStats,
}

impl PacketDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan another chunk of the stream, returning the samples per channel
    /// it contributed
    pub fn feed(&mut self, chunk: &[u8]) -> usize {
        self.stats.bytes_received += chunk.len();
        let before = self.stats.ecg_packets;

        let mut buffer = std::mem::take(&mut self.pending);
        buffer.extend_from_slice(chunk);
        let consumed = self.scan(&buffer);
        buffer.drain(..consumed);
        self.pending = buffer;

        let added = (self.stats.ecg_packets - before) * crate::protocol::FRAMES_PER_PACKET;
        trace!(
            chunk_len = chunk.len(),
            consumed,
            pending = self.pending.len(),
            samples_added = added,
            "scanned chunk"
        );
        added
    }

    /// Samples accumulated so far
    pub fn channels(&self) -> &RawChannels {
        &self.channels
    }

    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Bytes waiting for the rest of their packet
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop all accumulated state
    pub fn reset(&mut self) {
        self.pending.clear();
        self.channels = RawChannels::new();
        self.stats = DecodeStats::default();
    }

    /// End of stream: hand over the channels, or fail if no ECG payload was
    /// ever accepted
    pub fn finish(self) -> Result<RawChannels, DecodeError> {
        self.finish_with_stats().map(|(channels, _)| channels)
    }

    /// Like [`PacketDecoder::finish`], also returning the final counters
    pub fn finish_with_stats(mut self) -> Result<(RawChannels, DecodeStats), DecodeError> {
        self.stats.trailing_bytes = self.pending.len();
        let stats = self.stats;

        if stats.ecg_packets == 0 {
            debug!(?stats, "no ECG payload recovered");
            return Err(DecodeError::NoEcgData {
                bytes_scanned: stats.bytes_received,
                header_rejections: stats.header_rejections,
                payload_checksum_failures: stats.payload_checksum_failures,
            });
        }

        info!(
            bytes = stats.bytes_received,
            ecg_packets = stats.ecg_packets,
            fault_packets = stats.fault_packets,
            header_rejections = stats.header_rejections,
            payload_checksum_failures = stats.payload_checksum_failures,
            trailing_bytes = stats.trailing_bytes,
            "decode finished"
        );
        Ok((self.channels, stats))
    }

    /// Consume as many whole packets as possible, returning bytes consumed
    fn scan(&mut self, buffer: &[u8]) -> usize {
        let mut pos = 0;

        while pos < buffer.len() {
            match Self::step(buffer, pos) {
                ScanStep::Packet(packet) => {
                    pos += packet.wire_len();
                    self.accept(&packet);
                }
                ScanStep::Skip => {
                    if buffer[pos] == SYNC_BYTE {
                        self.stats.header_rejections += 1;
                        trace!(offset = pos, "rejected header");
                    } else {
                        self.stats.bytes_skipped += 1;
                    }
                    pos += 1;
                }
                ScanStep::Incomplete => break,
            }
        }

        pos
    }

    fn step(buffer: &[u8], pos: usize) -> ScanStep<'_> {
        if buffer[pos] != SYNC_BYTE {
            return ScanStep::Skip;
        }

        let rest = &buffer[pos..];
        if rest.len() < HEADER_SIZE {
            return ScanStep::Incomplete;
        }

        let header = match PacketHeader::parse(rest) {
            Some(header) => header,
            None => return ScanStep::Skip,
        };

        let end = HEADER_SIZE + header.kind().payload_size();
        if end > rest.len() {
            return ScanStep::Incomplete;
        }

        let payload = &rest[HEADER_SIZE..end];
        ScanStep::Packet(Packet {
            header,
            payload,
            payload_checksum_valid: checksum_ok(payload),
        })
    }

    fn accept(&mut self, packet: &Packet<'_>) {
        match packet.kind() {
            PacketKind::Ecg if packet.payload_checksum_valid => {
                for frame in packet.frames() {
                    self.channels.push_frame(&frame);
                }
                self.stats.ecg_packets += 1;
            }
            PacketKind::Ecg => {
                self.stats.payload_checksum_failures += 1;
                debug!(
                    failures = self.stats.payload_checksum_failures,
                    "discarding ECG payload with bad checksum"
                );
            }
            PacketKind::Fault => {
                self.stats.fault_packets += 1;
                debug!(payload_len = packet.payload.len(), "skipping fault packet");
            }
            PacketKind::Unknown(subtype) => {
                self.stats.unknown_subtypes += 1;
                debug!(subtype, "skipping header with unknown subtype");
            }
        }
    }
}

/// Decode a complete in-memory byte stream
pub fn decode(bytes: &[u8]) -> Result<RawChannels, DecodeError> {
    let mut decoder = PacketDecoder::new();
    decoder.feed(bytes);
    decoder.finish()
}
