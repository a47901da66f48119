//! Wire format of the ECG capture device
//!
//! Every packet starts with a 7 byte header:
//!
//! | byte | meaning                                  |
//! |------|------------------------------------------|
//! | 0    | sync / destination marker, always `0x80` |
//! | 1    | source (unit) address, always `0x17`     |
//! | 2    | transfer type, always `0x00`             |
//! | 3-4  | reserved                                 |
//! | 5    | subtype (`0x51` ECG data, `0x03` fault)  |
//! | 6    | checksum, 7 byte sum is 0 mod 256        |
//!
//! An ECG header is followed by 81 payload bytes: 5 frames of 8 little-endian
//! `i16` samples plus a trailing checksum byte. A fault header is followed by
//! 10 opaque bytes.

use serde::{Deserialize, Serialize};

/// Number of physical acquisition channels
pub const CHANNEL_COUNT: usize = 8;

/// Sync / destination marker opening every header
pub const SYNC_BYTE: u8 = 0x80;
/// Unit address of the capture device
pub const SOURCE_ADDRESS: u8 = 0x17;
/// Only transfer type the device emits
pub const TRANSFER_TYPE: u8 = 0x00;

pub const HEADER_SIZE: usize = 7;
pub const SUBTYPE_OFFSET: usize = 5;

pub const ECG_SUBTYPE: u8 = 0x51;
pub const FAULT_SUBTYPE: u8 = 0x03;

/// Bytes per frame: one sample for each channel
pub const FRAME_SIZE: usize = CHANNEL_COUNT * 2;
pub const FRAMES_PER_PACKET: usize = 5;
pub const ECG_DATA_SIZE: usize = FRAME_SIZE * FRAMES_PER_PACKET;
/// ECG data plus its checksum byte
pub const ECG_PAYLOAD_SIZE: usize = ECG_DATA_SIZE + 1;
pub const FAULT_PAYLOAD_SIZE: usize = 10;

/// Sum of all bytes modulo 256
pub fn byte_sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// True when the bytes sum to zero modulo 256
pub fn checksum_ok(bytes: &[u8]) -> bool {
    byte_sum(bytes) == 0
}

/// Byte that, appended to `bytes`, makes the total sum zero modulo 256
pub fn checksum_byte(bytes: &[u8]) -> u8 {
    0u8.wrapping_sub(byte_sum(bytes))
}

/// Packet subtype as announced in header byte 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PacketKind {
    /// Five frames of ECG samples
    Ecg,
    /// Device fault report, payload not interpreted
    Fault,
    /// Any other subtype; carries no payload
    Unknown(u8),
}

impl PacketKind {
    pub fn from_subtype(subtype: u8) -> Self {
        match subtype {
            ECG_SUBTYPE => PacketKind::Ecg,
            FAULT_SUBTYPE => PacketKind::Fault,
            other => PacketKind::Unknown(other),
        }
    }

    pub fn subtype(&self) -> u8 {
        match self {
            PacketKind::Ecg => ECG_SUBTYPE,
            PacketKind::Fault => FAULT_SUBTYPE,
            PacketKind::Unknown(other) => *other,
        }
    }

    /// Payload bytes following the header
    pub fn payload_size(&self) -> usize {
        match self {
            PacketKind::Ecg => ECG_PAYLOAD_SIZE,
            PacketKind::Fault => FAULT_PAYLOAD_SIZE,
            PacketKind::Unknown(_) => 0,
        }
    }
}

/// Validated 7 byte header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketHeader {
    pub dest_address: u8,
    pub source_address: u8,
    pub transfer_type: u8,
    pub reserved: [u8; 2],
    pub subtype: u8,
}

impl PacketHeader {
    /// Parse a header, rejecting wrong address fields and bad checksums
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let header = bytes.get(..HEADER_SIZE)?;
        if header[0] != SYNC_BYTE
            || header[1] != SOURCE_ADDRESS
            || header[2] != TRANSFER_TYPE
            || !checksum_ok(header)
        {
            return None;
        }

        Some(PacketHeader {
            dest_address: header[0],
            source_address: header[1],
            transfer_type: header[2],
            reserved: [header[3], header[4]],
            subtype: header[SUBTYPE_OFFSET],
        })
    }

    pub fn kind(&self) -> PacketKind {
        PacketKind::from_subtype(self.subtype)
    }

    /// Header bytes including the computed checksum
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [
            self.dest_address,
            self.source_address,
            self.transfer_type,
            self.reserved[0],
            self.reserved[1],
            self.subtype,
            0,
        ];
        bytes[HEADER_SIZE - 1] = checksum_byte(&bytes[..HEADER_SIZE - 1]);
        bytes
    }

    /// Device header for the given packet kind
    pub fn for_kind(kind: PacketKind) -> Self {
        PacketHeader {
            dest_address: SYNC_BYTE,
            source_address: SOURCE_ADDRESS,
            transfer_type: TRANSFER_TYPE,
            reserved: [0, 0],
            subtype: kind.subtype(),
        }
    }
}

/// One framed packet, borrowed from the scan buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet<'a> {
    pub header: PacketHeader,
    pub payload: &'a [u8],
    pub payload_checksum_valid: bool,
}

impl<'a> Packet<'a> {
    pub fn kind(&self) -> PacketKind {
        self.header.kind()
    }

    /// Total bytes the packet occupies on the wire
    pub fn wire_len(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }

    /// Iterate the five frames of an ECG payload, checksum byte excluded
    pub fn frames(&self) -> impl Iterator<Item = [i16; CHANNEL_COUNT]> + 'a {
        let payload: &'a [u8] = self.payload;
        let data: &'a [u8] = match self.kind() {
            PacketKind::Ecg => &payload[..ECG_DATA_SIZE.min(payload.len())],
            _ => &[],
        };
        data.chunks_exact(FRAME_SIZE).map(decode_frame)
    }
}

/// Decode one 16 byte frame into one sample per channel
pub fn decode_frame(frame: &[u8]) -> [i16; CHANNEL_COUNT] {
    let mut samples = [0i16; CHANNEL_COUNT];
    for (sample, pair) in samples.iter_mut().zip(frame.chunks_exact(2)) {
        // Two's complement reinterpretation of (msb << 8) | lsb
        *sample = i16::from_le_bytes([pair[0], pair[1]]);
    }
    samples
}

/// Encode one sample per channel into a 16 byte frame
pub fn encode_frame(samples: &[i16; CHANNEL_COUNT]) -> [u8; FRAME_SIZE] {
    let mut frame = [0u8; FRAME_SIZE];
    for (pair, sample) in frame.chunks_exact_mut(2).zip(samples) {
        pair.copy_from_slice(&sample.to_le_bytes());
    }
    frame
}
