use core::fmt;

use bytes::Buf;

use crate::format::{HexDump, LinkAddr, Nsap, SystemId};

enum_sim! {
    /// An enum-like type for the IS-IS TLV codes found in LAN hellos.
    pub struct TlvType (u8) {
        /// A list of length-prefixed area addresses.
        AREA_ADDRESSES = 1 => "area addresses",
        /// A list of 6-byte SNPAs of the neighbors heard on the LAN.
        IS_NEIGHBORS = 6 => "neighbor addresses",
        /// Filler, its content is ignored.
        PADDING = 8 => "padding",
        /// Authentication information.
        AUTHENTICATION = 10 => "authentication data",
    }
}

impl TlvType {
    /// Whether rendering this TLV reads its value.
    ///
    /// Padding and unknown TLVs are described by their length alone, so they
    /// can be reported even when their value was not captured.
    pub fn needs_value(&self) -> bool {
        matches!(
            *self,
            TlvType::AREA_ADDRESSES | TlvType::IS_NEIGHBORS | TlvType::AUTHENTICATION
        )
    }
}

/// Render one TLV. `value` holds exactly `len` bytes for the types that
/// need them.
pub(crate) fn render_tlv<W: fmt::Write>(
    out: &mut W,
    tlv_type: TlvType,
    len: u8,
    value: &[u8],
) -> fmt::Result {
    match tlv_type {
        TlvType::AREA_ADDRESSES => render_area_addresses(out, value),
        TlvType::IS_NEIGHBORS => {
            out.write_str("\n\t\t\t neighbor addresses")?;
            for neighbor in value.chunks_exact(SystemId::LEN) {
                write!(out, "\n\t\t\t {}", LinkAddr(neighbor))?;
            }
            Ok(())
        }
        TlvType::PADDING => write!(out, "\n\t\t\t padding for {} bytes", len),
        TlvType::AUTHENTICATION => {
            write!(out, "\n\t\t\t authentication data{}", HexDump(value))
        }
        _ => write!(
            out,
            "\n\t\t\t unknown TLV, type {}, length {}",
            tlv_type.raw(),
            len
        ),
    }
}

// The entries are bounded by the TLV's own length: an entry whose length
// octet claims more than what is left of the TLV ends the list.
fn render_area_addresses<W: fmt::Write>(out: &mut W, value: &[u8]) -> fmt::Result {
    out.write_str("\n\t\t\t area addresses")?;

    let mut buf = value;
    while buf.has_remaining() {
        let addr_len = buf.get_u8() as usize;
        if addr_len > buf.remaining() {
            break;
        }
        let (addr, rest) = buf.split_at(addr_len);
        write!(out, "\n\t\t\t {} ({})", Nsap(addr), addr_len)?;
        buf = rest;
    }
    Ok(())
}
