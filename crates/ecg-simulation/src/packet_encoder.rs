//! Device packet encoder, the inverse of the ECG-Core decoder

use ecg_core::protocol::{
    checksum_byte, encode_frame, PacketHeader, PacketKind, ECG_PAYLOAD_SIZE, FAULT_PAYLOAD_SIZE,
    FRAMES_PER_PACKET, HEADER_SIZE,
};
use ecg_core::{RawChannels, CHANNEL_COUNT};
use tracing::debug;

/// Wire length of one ECG packet
pub const ECG_PACKET_LEN: usize = HEADER_SIZE + ECG_PAYLOAD_SIZE;
/// Wire length of one fault packet
pub const FAULT_PACKET_LEN: usize = HEADER_SIZE + FAULT_PAYLOAD_SIZE;

/// Frames the device emits as packets
#[derive(Debug, Clone, Default)]
pub struct PacketEncoder {
    reserved: [u8; 2],
}

impl PacketEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserved header bytes to emit; the decoder ignores them
    pub fn with_reserved(mut self, reserved: [u8; 2]) -> Self {
        self.reserved = reserved;
        self
    }

    fn header(&self, kind: PacketKind) -> [u8; HEADER_SIZE] {
        PacketHeader {
            reserved: self.reserved,
            ..PacketHeader::for_kind(kind)
        }
        .to_bytes()
    }

    /// One ECG packet carrying five frames
    pub fn ecg_packet(&self, frames: &[[i16; CHANNEL_COUNT]; FRAMES_PER_PACKET]) -> Vec<u8> {
        let mut packet = Vec::with_capacity(ECG_PACKET_LEN);
        packet.extend_from_slice(&self.header(PacketKind::Ecg));

        for frame in frames {
            packet.extend_from_slice(&encode_frame(frame));
        }
        packet.push(checksum_byte(&packet[HEADER_SIZE..]));
        packet
    }

    /// One fault packet with an opaque payload
    pub fn fault_packet(&self, payload: &[u8; FAULT_PAYLOAD_SIZE]) -> Vec<u8> {
        let mut packet = Vec::with_capacity(FAULT_PACKET_LEN);
        packet.extend_from_slice(&self.header(PacketKind::Fault));
        packet.extend_from_slice(payload);
        packet
    }

    /// Bare header announcing a subtype the decoder does not know
    pub fn unknown_header(&self, subtype: u8) -> [u8; HEADER_SIZE] {
        self.header(PacketKind::from_subtype(subtype))
    }

    /// Encode channels as consecutive ECG packets
    ///
    /// Channels are read up to their common length; frames that do not fill
    /// a whole packet are dropped, like the device never sends them.
    pub fn encode_channels(&self, channels: &RawChannels) -> Vec<u8> {
        let len = channels.common_len();
        let packets = len / FRAMES_PER_PACKET;
        if len % FRAMES_PER_PACKET != 0 {
            debug!(
                dropped = len % FRAMES_PER_PACKET,
                "frames short of a full packet not encoded"
            );
        }

        let mut bytes = Vec::with_capacity(packets * ECG_PACKET_LEN);
        for p in 0..packets {
            let frames: [[i16; CHANNEL_COUNT]; FRAMES_PER_PACKET] = std::array::from_fn(|f| {
                let idx = p * FRAMES_PER_PACKET + f;
                std::array::from_fn(|ch| channels.channel(ch)[idx])
            });
            bytes.extend(self.ecg_packet(&frames));
        }
        bytes
    }

    /// Encode channels, following every `interval`-th ECG packet with a
    /// fault packet
    pub fn encode_with_faults(
        &self,
        channels: &RawChannels,
        interval: usize,
        fault: &[u8; FAULT_PAYLOAD_SIZE],
    ) -> Vec<u8> {
        let ecg = self.encode_channels(channels);
        if interval == 0 {
            return ecg;
        }

        let mut bytes = Vec::with_capacity(ecg.len() + ecg.len() / interval);
        for (n, packet) in ecg.chunks(ECG_PACKET_LEN).enumerate() {
            bytes.extend_from_slice(packet);
            if (n + 1) % interval == 0 {
                bytes.extend(self.fault_packet(fault));
            }
        }
        bytes
    }
}
