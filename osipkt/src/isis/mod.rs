//! IS-IS (ISO 10589) LAN Hello Implementation
//!
//! Intermediate systems announce themselves on a LAN with level 1 and level 2
//! LAN hellos (IIHs). This module validates the fixed IIH header and walks the
//! TLVs that follow it. Other IS-IS PDUs are rejected as unsupported.
//!
//! The PDU length from the header bounds the TLV walk, and the capture end
//! bounds every read inside it. A capture that ends before the declared PDU
//! is a normal truncation and is reported as such; only a header that fails
//! validation makes [`dissect_isis`] return an error.
//!
//! # Example
//!
//! ```rust
//! use osipkt::isis::dissect_isis;
//! use osipkt::CaptureView;
//!
//! let hello = [
//!     0x83, 0x1b, 0x01, 0x06, 0x0f, 0x01, 0x00, 0x00, 0x03, 0x00, 0x00, 0x0c, 0x11, 0x22,
//!     0x33, 0x00, 0x1e, 0x00, 0x1e, 0x40, 0x00, 0x00, 0x0c, 0x11, 0x22, 0x33, 0x01, 0x08,
//!     0x01, 0x00,
//! ];
//! let mut out = String::new();
//! let walk = dissect_isis(&mut out, CaptureView::new(&hello[..], hello.len()))?;
//! assert_eq!(walk.records, 1);
//! assert!(out.ends_with("padding for 1 bytes"));
//! # Ok::<(), osipkt::Error>(())
//! ```

mod header;
pub use header::{IsisHeader, ISIS_HEADER_LEN};

mod tlv;
pub use tlv::TlvType;

use core::fmt;

use crate::{CaptureView, Error};

enum_sim! {
    /// An enum-like type for the IS-IS PDU type.
    pub struct IsisPduType (u8) {
        /// Level 1 LAN hello.
        L1_LAN_IIH = 15 => "L1 lan iih",
        /// Level 2 LAN hello.
        L2_LAN_IIH = 16 => "L2 lan iih",
        /// Point-to-point hello.
        PTP_IIH = 17 => "ptp iih",
    }
}

enum_sim! {
    /// An enum-like type for the circuit type of a hello.
    pub struct CircuitType (u8) {
        /// Reserved, never valid.
        UNSET = 0 => "unset",
        /// Level 1 only.
        L1_ONLY = 1 => "l1 only",
        /// Level 2 only.
        L2_ONLY = 2 => "l2 only",
        /// Level 1 and level 2.
        L1_L2 = 3 => "l1-l2",
    }
}

/// The only protocol and packet version this module decodes.
pub const ISIS_VERSION: u8 = 1;

/// A summary of the TLV walk of one hello.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlvWalk {
    /// Number of TLVs rendered.
    pub records: usize,
    /// Bytes of the declared PDU taken by the rendered TLVs and by the
    /// type and length octets read.
    pub consumed: usize,
    /// Declared bytes left over after the last TLV.
    pub stragglers: usize,
    /// Whether the capture ended before the declared PDU did.
    pub truncated: bool,
}

/// Decode an IS-IS LAN hello. `view` starts at the NLPID and its declared
/// length is the length of the frame payload.
///
/// The header and the TLVs are written to `out` as they are decoded. An error
/// is returned when the header fails validation (or was not captured); the
/// caller is then expected to dump the raw packet. Problems found while
/// walking the TLVs are described in `out` and do not fail the call.
pub fn dissect_isis<W: fmt::Write>(out: &mut W, view: CaptureView<'_>) -> Result<TlvWalk, Error> {
    out.write_str("\n\t\t\t")?;

    let header = IsisHeader::parse(view).map_err(|_| Error::Truncated("isis"))?;
    header.validate(view.len())?;

    write!(
        out,
        " {}, circuit {}, holding time {} ",
        header.pdu_type().label().unwrap_or_default(),
        header.circuit_type().label().unwrap_or_default(),
        header.holding_time()
    )?;
    write!(
        out,
        "\n\t\t\t source {}, length {}",
        header.source_id(),
        header.pdu_len()
    )?;
    write!(
        out,
        "\n\t\t\t lan id {}({})",
        header.lan_id(),
        header.pseudonode()
    )?;

    Ok(walk_tlvs(out, &view, header.pdu_len() as usize)?)
}

// Walk the TLVs between the fixed header and `pdu_len`.
fn walk_tlvs<W: fmt::Write>(out: &mut W, view: &CaptureView<'_>, pdu_len: usize) -> Result<TlvWalk, fmt::Error> {
    let mut walk = TlvWalk::default();
    let mut remaining = pdu_len - ISIS_HEADER_LEN;
    let mut cursor = ISIS_HEADER_LEN;

    while remaining >= 2 {
        let (tlv_type, len) = match (view.read_u8_at(cursor), view.read_u8_at(cursor + 1)) {
            (Some(tlv_type), Some(len)) => (TlvType::from(tlv_type), len),
            _ => return exceeded_snapshot(out, walk),
        };
        remaining -= 2;
        walk.consumed += 2;
        if len as usize > remaining {
            log::debug!(
                "isis tlv type={} len={} overruns the pdu by {} bytes",
                tlv_type.raw(),
                len,
                len as usize - remaining
            );
            break;
        }
        log::trace!("isis tlv type={} len={}", tlv_type.raw(), len);

        let value = match view.slice_at(cursor + 2, len as usize) {
            Some(value) => value,
            None if tlv_type.needs_value() => return exceeded_snapshot(out, walk),
            None => &[],
        };
        tlv::render_tlv(out, tlv_type, len, value)?;

        walk.records += 1;
        walk.consumed += len as usize;
        cursor += 2 + len as usize;
        remaining -= len as usize;
    }

    if remaining != 0 {
        write!(out, "\n\t\t\t {} straggler bytes", remaining)?;
    }
    walk.stragglers = remaining;
    Ok(walk)
}

fn exceeded_snapshot<W: fmt::Write>(out: &mut W, mut walk: TlvWalk) -> Result<TlvWalk, fmt::Error> {
    out.write_str("\n\t\t\t packet exceeded snapshot")?;
    walk.truncated = true;
    Ok(walk)
}
