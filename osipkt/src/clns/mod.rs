//! ISO CLNS dispatch.
//!
//! Every OSI network-layer packet starts with a one-octet network layer
//! protocol identifier (NLPID). [`dissect_clns`] reads it, prints a summary
//! line and hands ES-IS and IS-IS packets to their decoders. CLNP data packets
//! only get the summary line.
//!
//! # Example
//!
//! ```rust
//! use osipkt::clns::{dissect_clns, DissectConfig};
//! use osipkt::CaptureView;
//!
//! let packet = [0x81, 0x1c, 0x01, 0x1e];
//! let mut out = String::new();
//! dissect_clns(&mut out, CaptureView::new(&packet[..], 4), None, &DissectConfig::default())?;
//! assert_eq!(out, "iso clns");
//! # Ok::<(), core::fmt::Error>(())
//! ```

use core::fmt;

use crate::format::HexDump;
use crate::{esis, isis};
use crate::{CaptureView, Error};

enum_sim! {
    /// An enum-like type for the network layer protocol identifier.
    pub struct NlpId (u8) {
        /// Inactive network layer protocol subset.
        NULLNS = 0x00 => "iso nullns",
        /// Connectionless network protocol, ISO 8473.
        CLNP = 0x81 => "iso clns",
        /// End system to intermediate system routeing, ISO 9542.
        ESIS = 0x82 => "iso esis",
        /// Intermediate system to intermediate system routeing, ISO 10589.
        ISIS = 0x83 => "iso isis",
    }
}

/// Options controlling how much detail the decoders print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DissectConfig {
    /// Suppress the details of malformed packets and some address printing.
    pub quiet: bool,
    /// Verify checksums and print option contents.
    pub verbose: bool,
}

impl DissectConfig {
    /// A configuration with only `verbose` set.
    pub fn verbose() -> Self {
        DissectConfig {
            quiet: false,
            verbose: true,
        }
    }

    /// A configuration with only `quiet` set.
    pub fn quiet() -> Self {
        DissectConfig {
            quiet: true,
            verbose: false,
        }
    }
}

/// The link-layer source and destination of the frame, already rendered by
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkAddrs<'a> {
    /// Rendered source address.
    pub src: &'a str,
    /// Rendered destination address.
    pub dst: &'a str,
}

impl<'a> LinkAddrs<'a> {
    /// Pair up a rendered source and destination.
    pub fn new(src: &'a str, dst: &'a str) -> Self {
        LinkAddrs { src, dst }
    }
}

impl fmt::Display for LinkAddrs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.src, self.dst)
    }
}

/// Decode the OSI packet in `view` and write its description to `out`.
///
/// `link_addrs` is printed after the protocol name; pass `None` when the
/// caller has already printed the link-layer header. Malformed, truncated or
/// unsupported packets are described in the output; the only error returned
/// is a failure of `out` itself.
pub fn dissect_clns<W: fmt::Write>(
    out: &mut W,
    view: CaptureView<'_>,
    link_addrs: Option<LinkAddrs<'_>>,
    config: &DissectConfig,
) -> fmt::Result {
    let nlpid = match view.read_u8_at(0) {
        Some(code) => NlpId::from(code),
        None => {
            out.write_str("[|iso-clns] ")?;
            if let Some(addrs) = link_addrs {
                write!(out, "{}", addrs)?;
            }
            return Ok(());
        }
    };

    match nlpid.label() {
        Some(label) => out.write_str(label)?,
        None => write!(out, "iso clns {:02x}", nlpid.raw())?,
    }
    if let Some(addrs) = link_addrs {
        write!(out, " {}", addrs)?;
    }

    match nlpid {
        NlpId::CLNP | NlpId::NULLNS => Ok(()),
        NlpId::ESIS => match esis::dissect_esis(out, view, config) {
            Ok(()) => Ok(()),
            Err(err) => report_esis(out, view, err, config),
        },
        NlpId::ISIS => {
            write!(out, " len={} ", view.len())?;
            match isis::dissect_isis(out, view) {
                Ok(_) => Ok(()),
                Err(Error::Fmt(err)) => Err(err),
                Err(err) => {
                    log::debug!("isis header rejected: {}", err);
                    write!(out, " {}", err)?;
                    write!(out, "{}", HexDump(view.captured()))
                }
            }
        }
        _ => {
            write!(out, " len={} ", view.len())?;
            if view.capture_end() > 1 {
                write!(out, "{}", HexDump(view.captured()))?;
            }
            Ok(())
        }
    }
}

/// Decode the OSI packet in `view` into a new `String`.
pub fn dissect_clns_to_string(
    view: CaptureView<'_>,
    link_addrs: Option<LinkAddrs<'_>>,
    config: &DissectConfig,
) -> String {
    let mut out = String::new();
    // Writing into a `String` never fails.
    let _ = dissect_clns(&mut out, view, link_addrs, config);
    out
}

fn report_esis<W: fmt::Write>(
    out: &mut W,
    view: CaptureView<'_>,
    err: Error,
    config: &DissectConfig,
) -> fmt::Result {
    if let Error::Fmt(err) = err {
        return Err(err);
    }
    log::debug!("esis decode stopped ({:?}): {}", err.kind(), err);

    if config.quiet && err.is_bad_header() {
        return out.write_str(" bad pkt!");
    }
    write!(out, " {}", err)?;
    if err.wants_dump() && !config.quiet {
        write!(out, "{}", HexDump(view.captured()))?;
    }
    Ok(())
}
