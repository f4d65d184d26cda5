#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use super::EsisType;
use crate::CaptureView;

/// A constant that defines the fixed byte length of the ES-IS header,
/// counted from the NLPID.
pub const ESIS_HEADER_LEN: usize = 9;

/// The fixed part of an ES-IS PDU.
///
/// The layout is:
/// * NLPID: 1 byte.
/// * Length indicator (LI): 1 byte.
/// * Version: 1 byte.
/// * Reserved: 1 byte.
/// * Type: 1 byte, the low 5 bits carry the PDU type.
/// * Holding time: 2 bytes, big-endian.
/// * Checksum: 2 bytes.
#[derive(Debug, Clone, Copy)]
pub struct EsisHeader<'a> {
    view: CaptureView<'a>,
}

impl<'a> EsisHeader<'a> {
    const PDU_TYPE_MASK: u8 = 0x1f;

    /// Parse the header, failing when the capture is shorter than the fixed
    /// header.
    #[inline]
    pub fn parse(view: CaptureView<'a>) -> Result<Self, CaptureView<'a>> {
        if view.capture_end() < ESIS_HEADER_LEN {
            return Err(view);
        }
        Ok(Self { view })
    }

    /// The view the header was parsed from.
    #[inline]
    pub fn view(&self) -> &CaptureView<'a> {
        &self.view
    }

    /// The raw bytes of the fixed header.
    #[inline]
    pub fn fix_header_slice(&self) -> &'a [u8] {
        &self.view.captured()[..ESIS_HEADER_LEN]
    }

    #[inline]
    pub fn nlpid(&self) -> u8 {
        self.fix_header_slice()[0]
    }

    /// The length indicator: the declared length of the PDU in bytes.
    #[inline]
    pub fn li(&self) -> u8 {
        self.fix_header_slice()[1]
    }

    #[inline]
    pub fn version(&self) -> u8 {
        self.fix_header_slice()[2]
    }

    #[inline]
    pub fn pdu_type(&self) -> EsisType {
        EsisType::from(self.fix_header_slice()[4] & Self::PDU_TYPE_MASK)
    }

    #[inline]
    pub fn holding_time(&self) -> u16 {
        NetworkEndian::read_u16(&self.fix_header_slice()[5..7])
    }

    #[inline]
    pub fn checksum(&self) -> u16 {
        NetworkEndian::read_u16(&self.fix_header_slice()[7..9])
    }

    /// The two checksum octets in wire order.
    #[inline]
    pub fn checksum_bytes(&self) -> [u8; 2] {
        let hdr = self.fix_header_slice();
        [hdr[7], hdr[8]]
    }

    /// The variable part of the PDU, starting right after the fixed header.
    #[inline]
    pub fn payload(&self) -> CaptureView<'a> {
        self.view.payload_from(ESIS_HEADER_LEN)
    }
}
