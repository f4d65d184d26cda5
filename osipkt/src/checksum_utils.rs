//! Provide the OSI checksum shared by the ISO network-layer protocols.
//!
//! The algorithm is the two-accumulator running sum of ISO 8473-1 Annex C,
//! which ES-IS (ISO 9542) reuses for its header checksum.

/// The outcome of verifying an OSI checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// Both checksum octets are zero: the sender did not generate a checksum.
    NoChecksum,
    /// The checksum verifies.
    Valid,
    /// The checksum does not verify.
    Invalid,
}

impl ChecksumStatus {
    /// Whether the packet should be accepted, `NoChecksum` included.
    #[inline]
    pub fn is_acceptable(&self) -> bool {
        *self != ChecksumStatus::Invalid
    }
}

/// Verify the checksum over `data`.
///
/// `data` must contain the checksum field unmodified, `field` holds a copy of
/// the two checksum octets as received.
pub fn osi_checksum(data: &[u8], field: [u8; 2]) -> ChecksumStatus {
    if field == [0, 0] {
        return ChecksumStatus::NoChecksum;
    }

    let (c0, c1) = accumulate(data);
    if (c0 | c1) == 0 {
        ChecksumStatus::Valid
    } else {
        ChecksumStatus::Invalid
    }
}

/// Compute the two checksum octets to place at `off` of `data`, so that a
/// later `osi_checksum` over `data` yields `Valid`.
///
/// The octets at `off` and `off + 1` are treated as zero, whatever they hold.
///
/// # Panics
///
/// `off + 1` is not within `data`.
pub fn generate(data: &[u8], off: usize) -> [u8; 2] {
    assert!(off + 1 < data.len());

    let mut c0: u32 = 0;
    let mut c1: u32 = 0;
    for (i, &byte) in data.iter().enumerate() {
        let byte = if i == off || i == off + 1 { 0 } else { byte };
        c0 = (c0 + byte as u32) % 255;
        c1 = (c1 + c0) % 255;
    }

    // Annex C.3, with positions counted from 1.
    let n = (off + 1) as u32;
    let l = data.len() as u32;
    let x = ((l - n) * c0 + 255 - c1) % 255;
    let y = (255 * 2 - ((l - n + 1) * c0) % 255 + c1) % 255;

    [if x == 0 { 255 } else { x as u8 }, if y == 0 { 255 } else { y as u8 }]
}

// Run the two accumulators, both kept modulo 255.
fn accumulate(data: &[u8]) -> (u32, u32) {
    data.iter().fold((0u32, 0u32), |(c0, c1), &byte| {
        let c0 = (c0 + byte as u32) % 255;
        (c0, (c1 + c0) % 255)
    })
}
