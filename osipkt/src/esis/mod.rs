//! ES-IS (ISO 9542) Implementation
//!
//! End systems and intermediate systems on a LAN use ES-IS to learn about
//! each other. This module decodes the fixed header and the three PDU types:
//!
//! - **ESH**: end system hello.
//! - **ISH**: intermediate system hello, carrying the IS's network entity
//!   title.
//! - **Redirect**: tells an end system which next hop to use for a
//!   destination NSAP, either a subnetwork address (SNPA) or another IS.
//!
//! Addresses are length-prefixed: one length octet followed by the address.
//! Every address must lie within both the length indicator (LI) and the
//! capture. Options follow the addresses as `code, length, value` records
//! and are only decoded in verbose mode.

mod header;
pub use header::{EsisHeader, ESIS_HEADER_LEN};

use core::fmt;

use bytes::Buf;

use crate::checksum_utils::{osi_checksum, ChecksumStatus};
use crate::clns::DissectConfig;
use crate::format::{HexDump, LinkAddr, Nsap};
use crate::{CaptureView, Error, Overrun};

enum_sim! {
    /// An enum-like type for the ES-IS PDU type.
    pub struct EsisType (u8) {
        /// End system hello.
        ESH = 2 => "esh",
        /// Intermediate system hello.
        ISH = 4 => "ish",
        /// Redirect.
        REDIRECT = 6 => "redirect",
    }
}

/// The only ES-IS version this module decodes.
pub const ESIS_VERSION: u8 = 1;

/// Option code of the suggested ES configuration timer.
pub const OPT_CONFIG_TIMER: u8 = 198;

/// One option record from the tail of an ES-IS PDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EsisOption<'a> {
    code: u8,
    value: &'a [u8],
}

impl<'a> EsisOption<'a> {
    /// Wrap an option code and its value.
    #[inline]
    pub fn new(code: u8, value: &'a [u8]) -> Self {
        EsisOption { code, value }
    }

    /// The option code.
    #[inline]
    pub fn code(&self) -> u8 {
        self.code
    }

    /// The option value.
    #[inline]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// The suggested ES configuration timer in seconds, if this option
    /// carries one.
    pub fn config_timer(&self) -> Option<u16> {
        match (self.code, self.value) {
            (OPT_CONFIG_TIMER, &[hi, lo]) => Some(u16::from_be_bytes([hi, lo])),
            _ => None,
        }
    }
}

impl fmt::Display for EsisOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tmo) = self.config_timer() {
            return write!(f, "tmo={}", tmo);
        }
        write!(f, "{}:<", self.code)?;
        for byte in self.value {
            write!(f, "{:02x}", byte)?;
        }
        f.write_str(">")
    }
}

/// Decode an ES-IS PDU. `view` starts at the NLPID.
///
/// The PDU type and the addresses are written to `out` as they are decoded.
/// When the PDU turns out to be malformed, truncated, unsupported or fails
/// its checksum, decoding stops and the reason is returned; the caller
/// renders it.
pub fn dissect_esis<W: fmt::Write>(
    out: &mut W,
    view: CaptureView<'_>,
    config: &DissectConfig,
) -> Result<(), Error> {
    let length = view.len();
    if length == 2 {
        return Err(Error::NoHeader);
    }
    let li = view.read_u8_at(1).ok_or(Error::Truncated("esis"))?;
    let end = li as usize;
    if end > length {
        return Err(Error::LiExceedsPdu(li, length));
    }
    if end < ESIS_HEADER_LEN {
        return Err(Error::TooShortForHeader(li));
    }
    let header = EsisHeader::parse(view).map_err(|_| Error::Truncated("esis"))?;

    let pdu_type = header.pdu_type();
    match pdu_type.label() {
        Some(label) => write!(out, " {}", label)?,
        None => write!(out, " type {}", pdu_type.raw())?,
    }

    if config.verbose {
        // The checksum covers the first LI bytes; it cannot be verified when
        // part of them was not captured.
        if let Some(pdu) = view.slice_at(0, end) {
            let field = header.checksum_bytes();
            if osi_checksum(pdu, field) == ChecksumStatus::Invalid {
                return Err(Error::BadChecksum(field[0], field[1]));
            }
        }
    }

    if header.version() != ESIS_VERSION {
        return Err(Error::UnsupportedVersion(header.version()));
    }

    let pos = match pdu_type {
        EsisType::REDIRECT => {
            let (dst, next) = read_address(&view, ESIS_HEADER_LEN, end)?;
            write!(out, "\n\t\t\t {}", Nsap(dst))?;
            let (snpa, next) = read_address(&view, next, end)?;
            let (is, next) = read_address(&view, next, end)?;
            if is.is_empty() {
                write!(out, " > {}", LinkAddr(snpa))?;
            } else {
                write!(out, " > {}", Nsap(is))?;
            }
            next
        }
        EsisType::ISH => {
            let (net, next) = read_address(&view, ESIS_HEADER_LEN, end)?;
            if !config.quiet {
                write!(out, "\n\t\t\t {}", Nsap(net))?;
            }
            next
        }
        // ESH carries the end system's NSAPs, but it is reported like an
        // unknown type: length and raw bytes.
        _ => {
            write!(out, " len={}", length)?;
            let rest = view.captured_from(ESIS_HEADER_LEN);
            if !rest.is_empty() {
                write!(out, "{}", HexDump(rest))?;
            }
            return Ok(());
        }
    };

    if config.verbose {
        dissect_options(out, &view, pos, end)?;
    }
    Ok(())
}

// Read one length-prefixed address that must end within the LI.
fn read_address<'a>(view: &CaptureView<'a>, off: usize, end: usize) -> Result<(&'a [u8], usize), Error> {
    view.read_prefixed_at(off, end).map_err(|overrun| match overrun {
        Overrun::Declared => Error::BadLi,
        Overrun::Captured => Error::Truncated("esis"),
    })
}

// Decode the option records between `pos` and the end of the LI.
//
// A record that crosses the capture end stops the scan without a message.
fn dissect_options<W: fmt::Write>(
    out: &mut W,
    view: &CaptureView<'_>,
    pos: usize,
    end: usize,
) -> Result<(), Error> {
    let mut remaining = end.saturating_sub(pos);
    let captured = view.captured_from(pos);
    let mut opts = &captured[..captured.len().min(remaining)];

    while remaining >= 2 {
        if opts.remaining() < 2 {
            return Ok(());
        }
        let code = opts.get_u8();
        let len = opts.get_u8() as usize;
        remaining -= 2;
        if len > remaining {
            return Err(Error::OptionTooLong(code));
        }
        remaining -= len;
        if opts.remaining() < len {
            return Ok(());
        }
        let (value, rest) = opts.split_at(len);
        opts = rest;

        let opt = EsisOption::new(code, value);
        log::trace!("esis option code={} len={}", code, len);
        write!(out, " {}", opt)?;
    }
    Ok(())
}
