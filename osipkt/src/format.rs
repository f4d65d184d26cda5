//! Text forms of the addresses and raw bytes found in OSI packets.

use core::fmt;

/// An NSAP rendered as dotted hex, one octet per group, e.g. `49.00.01.aa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nsap<'a>(pub &'a [u8]);

impl fmt::Display for Nsap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut octets = self.0.iter();
        if let Some(first) = octets.next() {
            write!(f, "{:02x}", first)?;
        }
        for octet in octets {
            write!(f, ".{:02x}", octet)?;
        }
        Ok(())
    }
}

/// Render an NSAP as dotted hex.
pub fn nsap_string(bytes: &[u8]) -> String {
    Nsap(bytes).to_string()
}

/// A link-layer address of any length rendered as colon-separated hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkAddr<'a>(pub &'a [u8]);

impl fmt::Display for LinkAddr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// A six-octet IS-IS system identifier.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct SystemId(pub [u8; 6]);

impl SystemId {
    /// Length of a system identifier on the wire.
    pub const LEN: usize = 6;

    /// Construct a system id from a sequence of octets.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> SystemId {
        let mut bytes = [0; 6];
        bytes.copy_from_slice(data);
        SystemId(bytes)
    }

    /// Return the system id as a sequence of octets.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&LinkAddr(&self.0), f)
    }
}

/// A raw dump of packet bytes.
///
/// Bytes are printed as big-endian 16-bit groups, eight groups per row, and
/// every row starts on a new indented line. A trailing odd byte is printed on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDump<'a>(pub &'a [u8]);

impl HexDump<'_> {
    const GROUPS_PER_ROW: usize = 8;
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.0.chunks(2).enumerate() {
            if i % Self::GROUPS_PER_ROW == 0 {
                f.write_str("\n\t\t\t")?;
            }
            match *group {
                [hi, lo] => write!(f, " {:02x}{:02x}", hi, lo)?,
                _ => write!(f, " {:02x}", group[0])?,
            }
        }
        Ok(())
    }
}
