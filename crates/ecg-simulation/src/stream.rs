//! Byte stream impairments and chunking for decoder testing

use ecg_core::protocol::SYNC_BYTE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// A device byte stream that can be damaged on purpose
#[derive(Debug, Clone)]
pub struct ByteStream {
    bytes: Vec<u8>,
    rng: StdRng,
}

impl ByteStream {
    pub fn new(bytes: Vec<u8>, seed: u64) -> Self {
        ByteStream {
            bytes,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Insert bytes verbatim at `offset` (clamped to the end)
    pub fn insert(&mut self, offset: usize, bytes: &[u8]) -> &mut Self {
        let offset = offset.min(self.bytes.len());
        self.bytes.splice(offset..offset, bytes.iter().copied());
        self
    }

    /// Insert `len` random bytes at `offset`, every fourth one a sync byte
    pub fn insert_garbage(&mut self, offset: usize, len: usize) -> &mut Self {
        let garbage: Vec<u8> = (0..len)
            .map(|i| if i % 4 == 0 { SYNC_BYTE } else { self.rng.gen() })
            .collect();
        trace!(offset, len, "inserting garbage");
        self.insert(offset, &garbage)
    }

    /// Insert a sync byte that starts no valid header
    pub fn insert_spurious_sync(&mut self, offset: usize) -> &mut Self {
        self.insert(offset, &[SYNC_BYTE])
    }

    /// XOR the byte at `index` with `mask`; out of range is a no-op
    pub fn flip_byte(&mut self, index: usize, mask: u8) -> &mut Self {
        if let Some(byte) = self.bytes.get_mut(index) {
            *byte ^= mask;
        }
        self
    }

    /// Flip one random bit in `count` randomly chosen bytes
    pub fn corrupt_random(&mut self, count: usize) -> Vec<usize> {
        if self.bytes.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| {
                let index = self.rng.gen_range(0..self.bytes.len());
                let bit = self.rng.gen_range(0..8);
                self.bytes[index] ^= 1 << bit;
                index
            })
            .collect()
    }

    pub fn truncate(&mut self, len: usize) -> &mut Self {
        self.bytes.truncate(len);
        self
    }

    /// Fixed size chunks, the last one possibly shorter
    pub fn chunks(&self, size: usize) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks(size.max(1))
    }

    /// Chunks of random length in `min..=max`
    pub fn random_chunks(&mut self, min: usize, max: usize) -> Vec<Vec<u8>> {
        let min = min.max(1);
        let max = max.max(min);

        let mut chunks = Vec::new();
        let mut rest = self.bytes.as_slice();
        while !rest.is_empty() {
            let size = self.rng.gen_range(min..=max).min(rest.len());
            let (chunk, tail) = rest.split_at(size);
            chunks.push(chunk.to_vec());
            rest = tail;
        }
        chunks
    }
}

impl From<Vec<u8>> for ByteStream {
    fn from(bytes: Vec<u8>) -> Self {
        ByteStream::new(bytes, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_truncate() {
        let mut stream = ByteStream::from(vec![1, 2, 3]);
        stream.insert(1, &[9, 9]).insert(100, &[7]).truncate(5);
        assert_eq!(stream.as_bytes(), &[1, 9, 9, 2, 3]);
    }

    #[test]
    fn test_garbage_contains_sync() {
        let mut stream = ByteStream::new(Vec::new(), 3);
        stream.insert_garbage(0, 16);
        assert_eq!(stream.len(), 16);
        assert!(stream.as_bytes().iter().filter(|&&b| b == SYNC_BYTE).count() >= 4);
    }

    #[test]
    fn test_flip_and_corrupt() {
        let mut stream = ByteStream::new(vec![0; 64], 11);
        stream.flip_byte(3, 0xFF).flip_byte(1000, 0xFF);
        assert_eq!(stream.as_bytes()[3], 0xFF);

        let touched = stream.corrupt_random(5);
        assert_eq!(touched.len(), 5);
        assert!(touched.iter().all(|&i| i < 64));
        assert_ne!(stream.as_bytes(), &[0; 64][..]);
    }

    #[test]
    fn test_chunks_cover_stream() {
        let bytes: Vec<u8> = (0..=255).collect();
        let mut stream = ByteStream::new(bytes.clone(), 5);

        let fixed: Vec<u8> = stream.chunks(7).flatten().copied().collect();
        assert_eq!(fixed, bytes);
        assert_eq!(stream.chunks(0).count(), 256);

        let chunks = stream.random_chunks(3, 17);
        assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= 17));
        assert_eq!(chunks.concat(), bytes);
    }

    #[test]
    fn test_same_seed_same_damage() {
        let make = || {
            let mut stream = ByteStream::new(vec![0x55; 200], 99);
            stream.insert_garbage(50, 10);
            stream.corrupt_random(3);
            stream.into_bytes()
        };
        assert_eq!(make(), make());
    }
}
