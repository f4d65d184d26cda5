use byteorder::{ByteOrder, NetworkEndian};

/// Why a length-prefixed field could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overrun {
    /// The field runs past the length declared by the enclosing structure.
    Declared,
    /// The field runs past the end of the capture.
    Captured,
}

/// A read-only view over one captured packet.
///
/// The view remembers two boundaries:
/// * the declared length, i.e. how long the packet was on the wire, accessed
///   with `len`.
/// * the capture end, i.e. how many of those bytes were actually captured,
///   accessed with `capture_end`.
///
/// Only the captured bytes are kept. Every accessor checks the capture end
/// before touching the buffer and returns `None` instead of reading past it,
/// so a decoder that trusts a bogus length field gets a `None`, never a panic
/// or a stray byte.
#[derive(Debug, Clone, Copy)]
pub struct CaptureView<'a> {
    chunk: &'a [u8],
    len: usize,
}

impl<'a> CaptureView<'a> {
    /// Create a view over `buf`, of which only the first `capture_end` bytes
    /// were captured.
    ///
    /// The declared length is `buf.len()`. A `capture_end` beyond the end of
    /// `buf` is clamped.
    #[inline]
    pub fn new(buf: &'a [u8], capture_end: usize) -> Self {
        let capture_end = capture_end.min(buf.len());
        CaptureView {
            chunk: &buf[..capture_end],
            len: buf.len(),
        }
    }

    /// Create a view from the captured bytes alone, with the wire length
    /// reported separately by the capture layer.
    ///
    /// Captured bytes beyond `len` are ignored.
    #[inline]
    pub fn from_captured(captured: &'a [u8], len: usize) -> Self {
        CaptureView {
            chunk: &captured[..captured.len().min(len)],
            len,
        }
    }

    /// The declared length of the packet.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the declared length is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of captured bytes, counted from the start of the view.
    #[inline]
    pub fn capture_end(&self) -> usize {
        self.chunk.len()
    }

    /// All captured bytes.
    #[inline]
    pub fn captured(&self) -> &'a [u8] {
        self.chunk
    }

    /// The captured bytes starting at `off`, empty if `off` is not captured.
    #[inline]
    pub fn captured_from(&self, off: usize) -> &'a [u8] {
        self.chunk.get(off..).unwrap_or(&[])
    }

    /// Whether `cnt` bytes starting at `off` lie within the capture.
    #[inline]
    pub fn is_captured(&self, off: usize, cnt: usize) -> bool {
        off.checked_add(cnt)
            .map_or(false, |end| end <= self.chunk.len())
    }

    /// Read the byte at `off`.
    #[inline]
    pub fn read_u8_at(&self, off: usize) -> Option<u8> {
        self.chunk.get(off).copied()
    }

    /// Read a big-endian `u16` starting at `off`.
    #[inline]
    pub fn read_be16_at(&self, off: usize) -> Option<u16> {
        self.slice_at(off, 2).map(NetworkEndian::read_u16)
    }

    /// Borrow `cnt` bytes starting at `off`.
    #[inline]
    pub fn slice_at(&self, off: usize, cnt: usize) -> Option<&'a [u8]> {
        self.chunk.get(off..off.checked_add(cnt)?)
    }

    /// A view of everything from `off` on, used to hand the payload of one
    /// layer to the next decoder.
    #[inline]
    pub fn payload_from(&self, off: usize) -> CaptureView<'a> {
        CaptureView {
            chunk: self.captured_from(off),
            len: self.len.saturating_sub(off),
        }
    }

    /// Read a length-prefixed field (one length octet `L`, then `L` octets)
    /// starting at `off`.
    ///
    /// The whole field must end at or before `limit`, the end of the
    /// enclosing structure, and must also be captured. On success, return
    /// the value and the offset right after the field.
    pub fn read_prefixed_at(&self, off: usize, limit: usize) -> Result<(&'a [u8], usize), Overrun> {
        if off >= limit {
            return Err(Overrun::Declared);
        }
        let value_len = self.read_u8_at(off).ok_or(Overrun::Captured)? as usize;
        let next = off + 1 + value_len;
        if next > limit {
            return Err(Overrun::Declared);
        }
        let value = self.slice_at(off + 1, value_len).ok_or(Overrun::Captured)?;
        Ok((value, next))
    }
}
