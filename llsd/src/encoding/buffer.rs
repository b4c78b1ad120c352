//! Append-only output buffer with amortized growth.
//!
//! The encoder separates *reserving* room from *writing* bytes: callers
//! [`ensure`](GrowBuf::ensure) once for a whole fragment, then issue any
//! number of [`append_raw`](GrowBuf::append_raw) and
//! [`append_byte`](GrowBuf::append_byte) calls that fit inside that horizon.
//! Only `ensure` can fail or reallocate.
use log::trace;

use crate::utils::error::{Error, LlsdResult};

/// Capacity multiplier applied on every reallocation.
pub const GROWTH_FACTOR: usize = 2;

#[derive(Debug)]
pub struct GrowBuf {
    bytes: Vec<u8>,
    /// Logical capacity. Growth decisions are taken against this value rather
    /// than `Vec::capacity`, which the allocator may round up.
    size: usize,
    reallocations: usize,
}

impl GrowBuf {
    /// Allocate a buffer holding `initial_capacity` bytes (at least one).
    pub fn with_capacity(initial_capacity: usize) -> LlsdResult<Self> {
        let size = initial_capacity.max(1);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| Error::OutOfMemory { requested: size })?;

        Ok(Self {
            bytes,
            size,
            reallocations: 0,
        })
    }

    /// Guarantee room for at least `len` more bytes.
    ///
    /// When growth is needed the new capacity is
    /// `max(capacity * 2, capacity + len)`: plain doubling, unless a single
    /// request is larger than doubling would provide.
    pub fn ensure(&mut self, len: usize) -> LlsdResult<()> {
        if len <= self.remaining() {
            return Ok(());
        }

        let grown = self
            .size
            .saturating_mul(GROWTH_FACTOR)
            .max(self.size.saturating_add(len));
        self.bytes
            .try_reserve_exact(grown - self.bytes.len())
            .map_err(|_| Error::OutOfMemory { requested: grown })?;

        trace!("growing output buffer from {} to {} bytes", self.size, grown);
        self.size = grown;
        self.reallocations += 1;
        Ok(())
    }

    /// Copy `bytes` in. The caller must already have ensured the room.
    #[inline]
    pub fn append_raw(&mut self, bytes: &[u8]) {
        debug_assert!(
            bytes.len() <= self.remaining(),
            "append of {} bytes past the ensured horizon ({} left)",
            bytes.len(),
            self.remaining()
        );
        self.bytes.extend_from_slice(bytes);
    }

    /// Single-byte [`append_raw`](GrowBuf::append_raw).
    #[inline]
    pub fn append_byte(&mut self, byte: u8) {
        debug_assert!(self.remaining() > 0, "append past the ensured horizon");
        self.bytes.push(byte);
    }

    /// [`ensure`](GrowBuf::ensure) followed by [`append_raw`](GrowBuf::append_raw).
    #[inline]
    pub fn extend(&mut self, bytes: &[u8]) -> LlsdResult<()> {
        self.ensure(bytes.len())?;
        self.append_raw(bytes);
        Ok(())
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Logical capacity (written plus reserved bytes).
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Room left before the next reallocation.
    pub fn remaining(&self) -> usize {
        self.size - self.bytes.len()
    }

    /// Number of times [`ensure`](GrowBuf::ensure) had to grow the storage.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the buffer, yielding exactly the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_requested_capacity() {
        let buf = GrowBuf::with_capacity(256).unwrap();
        assert_eq!(buf.capacity(), 256);
        assert_eq!(buf.remaining(), 256);
        assert!(buf.is_empty());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut buf = GrowBuf::with_capacity(0).unwrap();
        assert_eq!(buf.capacity(), 1);
        buf.extend(b"abc").unwrap();
        assert_eq!(buf.as_bytes(), b"abc");
    }

    #[test]
    fn ensure_within_capacity_does_not_grow() {
        let mut buf = GrowBuf::with_capacity(16).unwrap();
        buf.extend(b"0123456789").unwrap();
        buf.ensure(6).unwrap();
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.reallocations(), 0);
    }

    #[test]
    fn small_request_doubles() {
        let mut buf = GrowBuf::with_capacity(16).unwrap();
        buf.extend(b"0123456789").unwrap();
        buf.ensure(7).unwrap();
        assert_eq!(buf.capacity(), 32);
        assert_eq!(buf.reallocations(), 1);
    }

    #[test]
    fn oversized_request_grows_past_doubling() {
        let mut buf = GrowBuf::with_capacity(256).unwrap();
        buf.ensure(300).unwrap();
        assert_eq!(buf.capacity(), 556);
    }

    #[test]
    fn appends_preserve_order_across_growth() {
        let mut buf = GrowBuf::with_capacity(4).unwrap();
        let mut expected = Vec::new();
        for i in 0..1000u32 {
            let chunk = i.to_string();
            buf.extend(chunk.as_bytes()).unwrap();
            expected.extend_from_slice(chunk.as_bytes());
        }
        buf.ensure(1).unwrap();
        buf.append_byte(b'!');
        expected.push(b'!');

        assert_eq!(buf.len(), expected.len());
        assert_eq!(buf.into_bytes(), expected);
    }

    #[test]
    fn unsatisfiable_initial_capacity_is_out_of_memory() {
        let err = GrowBuf::with_capacity(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::OutOfMemory { requested } if requested == usize::MAX));
    }

    #[test]
    fn unsatisfiable_growth_keeps_written_bytes() {
        let mut buf = GrowBuf::with_capacity(16).unwrap();
        buf.extend(b"0123456789").unwrap();

        let err = buf.ensure(usize::MAX - 4).unwrap_err();
        assert!(err.is_out_of_memory());
        assert_eq!(buf.len(), 10);
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.reallocations(), 0);
        assert_eq!(buf.as_bytes(), b"0123456789");
    }
}
