#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Provide passive decoders for OSI network-layer packets.
//!
//! The crate renders a human-readable breakdown of three related wire
//! formats found behind an ISO NLPID: CLNP (dispatch only), ES-IS (ISO 9542)
//! and IS-IS LAN hellos (ISO 10589). Every decoder works on a [`CaptureView`],
//! which never hands out a byte beyond the captured boundary, no matter what
//! the length fields inside the packet claim.
//!
//! # Example
//!
//! ```rust
//! use osipkt::clns::{dissect_clns_to_string, DissectConfig, LinkAddrs};
//! use osipkt::CaptureView;
//!
//! let packet = [0x82, 0x02];
//! let view = CaptureView::new(&packet[..], packet.len());
//! let addrs = LinkAddrs::new("00:00:00:00:00:01", "09:00:2b:00:00:05");
//! let text = dissect_clns_to_string(view, Some(addrs), &DissectConfig::default());
//! assert_eq!(text, "iso esis 00:00:00:00:00:01 > 09:00:2b:00:00:05 no header at all!");
//! ```

#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;

mod capture;
pub use capture::{CaptureView, Overrun};

mod error;
pub use error::{Error, ErrorKind};

pub mod checksum_utils;
pub mod format;

pub mod clns;
pub mod esis;
pub mod isis;
