#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use super::{CircuitType, IsisPduType, ISIS_VERSION};
use crate::clns::NlpId;
use crate::format::SystemId;
use crate::{CaptureView, Error};

/// A constant that defines the fixed byte length of an IS-IS LAN hello
/// header: 15 bytes plus two system ids.
pub const ISIS_HEADER_LEN: usize = 15 + 2 * SystemId::LEN;

/// The fixed header of an IS-IS LAN hello.
///
/// The layout is:
/// * NLPID: 1 byte.
/// * Fixed header length: 1 byte.
/// * Protocol version: 1 byte.
/// * System id length: 1 byte, 0 means 6.
/// * PDU type: 1 byte, the low 5 bits carry the type.
/// * Packet version: 1 byte.
/// * Reserved: 1 byte.
/// * Maximum area addresses: 1 byte, 0 means 3.
/// * Circuit type: 1 byte.
/// * Source id: 6 bytes.
/// * Holding time: 2 bytes, big-endian.
/// * PDU length: 2 bytes, big-endian.
/// * Priority: 1 byte, the low 7 bits carry the priority.
/// * LAN id: 7 bytes, the designated IS's system id and a pseudonode id.
#[derive(Debug, Clone, Copy)]
pub struct IsisHeader<'a> {
    view: CaptureView<'a>,
}

impl<'a> IsisHeader<'a> {
    const PDU_TYPE_MASK: u8 = 0x1f;
    const PRIORITY_MASK: u8 = 0x7f;

    /// Parse the header, failing when the capture is shorter than the fixed
    /// header. The field values are checked separately by `validate`.
    #[inline]
    pub fn parse(view: CaptureView<'a>) -> Result<Self, CaptureView<'a>> {
        if view.capture_end() < ISIS_HEADER_LEN {
            return Err(view);
        }
        Ok(Self { view })
    }

    #[inline]
    pub fn view(&self) -> &CaptureView<'a> {
        &self.view
    }

    #[inline]
    pub fn fix_header_slice(&self) -> &'a [u8] {
        &self.view.captured()[..ISIS_HEADER_LEN]
    }

    #[inline]
    pub fn nlpid(&self) -> u8 {
        self.fix_header_slice()[0]
    }

    #[inline]
    pub fn fixed_len(&self) -> u8 {
        self.fix_header_slice()[1]
    }

    #[inline]
    pub fn version(&self) -> u8 {
        self.fix_header_slice()[2]
    }

    #[inline]
    pub fn id_len(&self) -> u8 {
        self.fix_header_slice()[3]
    }

    #[inline]
    pub fn pdu_type(&self) -> IsisPduType {
        IsisPduType::from(self.fix_header_slice()[4] & Self::PDU_TYPE_MASK)
    }

    #[inline]
    pub fn pkt_version(&self) -> u8 {
        self.fix_header_slice()[5]
    }

    /// The raw maximum area addresses field.
    #[inline]
    pub fn max_area_raw(&self) -> u8 {
        self.fix_header_slice()[7]
    }

    /// The maximum number of area addresses, with 0 read as the default 3.
    #[inline]
    pub fn max_area_addresses(&self) -> u8 {
        match self.max_area_raw() {
            0 => 3,
            n => n,
        }
    }

    #[inline]
    pub fn circuit_type(&self) -> CircuitType {
        CircuitType::from(self.fix_header_slice()[8])
    }

    #[inline]
    pub fn source_id(&self) -> SystemId {
        SystemId::from_bytes(&self.fix_header_slice()[9..15])
    }

    #[inline]
    pub fn holding_time(&self) -> u16 {
        NetworkEndian::read_u16(&self.fix_header_slice()[15..17])
    }

    #[inline]
    pub fn pdu_len(&self) -> u16 {
        NetworkEndian::read_u16(&self.fix_header_slice()[17..19])
    }

    #[inline]
    pub fn priority(&self) -> u8 {
        self.fix_header_slice()[19] & Self::PRIORITY_MASK
    }

    /// The system id part of the LAN id.
    #[inline]
    pub fn lan_id(&self) -> SystemId {
        SystemId::from_bytes(&self.fix_header_slice()[20..26])
    }

    /// The pseudonode part of the LAN id.
    #[inline]
    pub fn pseudonode(&self) -> u8 {
        self.fix_header_slice()[26]
    }

    /// Check the header fields, in wire order, against what a LAN hello of
    /// `len` bytes must carry.
    pub fn validate(&self, len: usize) -> Result<(), Error> {
        if self.nlpid() != NlpId::ISIS.raw() {
            return Err(Error::CodingError);
        }
        if self.version() != ISIS_VERSION {
            return Err(Error::IsisVersion(self.version()));
        }
        if self.id_len() != SystemId::LEN as u8 && self.id_len() != 0 {
            return Err(Error::SystemIdLength(self.id_len()));
        }
        if self.fixed_len() as usize != ISIS_HEADER_LEN {
            return Err(Error::FixedHeaderLength(
                self.fixed_len(),
                ISIS_HEADER_LEN as u8,
            ));
        }

        let pdu_type = self.pdu_type();
        if pdu_type != IsisPduType::L1_LAN_IIH && pdu_type != IsisPduType::L2_LAN_IIH {
            return Err(Error::PduType(pdu_type.raw()));
        }
        if self.pkt_version() != ISIS_VERSION {
            return Err(Error::IsisVersion(self.pkt_version()));
        }
        if self.max_area_raw() == 255 {
            return Err(Error::MaxAreaAddresses);
        }

        match self.circuit_type() {
            CircuitType::UNSET => return Err(Error::CircuitTypeZero),
            CircuitType::L1_ONLY if pdu_type == IsisPduType::L2_LAN_IIH => {
                return Err(Error::L2HelloOnL1Circuit)
            }
            CircuitType::L2_ONLY if pdu_type == IsisPduType::L1_LAN_IIH => {
                return Err(Error::L1HelloOnL2Circuit)
            }
            CircuitType::L1_ONLY | CircuitType::L2_ONLY | CircuitType::L1_L2 => {}
            other => return Err(Error::UnknownCircuitType(other.raw())),
        }

        let pdu_len = self.pdu_len();
        if (pdu_len as usize) < ISIS_HEADER_LEN || pdu_len as usize > len {
            return Err(Error::PduLength(pdu_len, len));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static L1_HELLO: [u8; 27] = [
        0x83, 0x1b, 0x01, 0x06, 0x0f, 0x01, 0x00, 0x00, 0x03, 0x00, 0x00, 0x0c, 0x11, 0x22, 0x33,
        0x00, 0x1e, 0x00, 0x1b, 0xc0, 0x00, 0x00, 0x0c, 0x44, 0x55, 0x66, 0x02,
    ];

    fn with(off: usize, value: u8) -> [u8; 27] {
        let mut bytes = L1_HELLO;
        bytes[off] = value;
        bytes
    }

    fn validate(bytes: &[u8]) -> Result<(), Error> {
        IsisHeader::parse(CaptureView::new(bytes, bytes.len()))
            .unwrap()
            .validate(bytes.len())
    }

    #[test]
    fn header_parse() {
        let hdr = IsisHeader::parse(CaptureView::new(&L1_HELLO[..], 27)).unwrap();
        assert_eq!(hdr.nlpid(), 0x83);
        assert_eq!(hdr.fixed_len(), 27);
        assert_eq!(hdr.version(), 1);
        assert_eq!(hdr.id_len(), 6);
        assert_eq!(hdr.pdu_type(), IsisPduType::L1_LAN_IIH);
        assert_eq!(hdr.pkt_version(), 1);
        assert_eq!(hdr.max_area_raw(), 0);
        assert_eq!(hdr.max_area_addresses(), 3);
        assert_eq!(hdr.circuit_type(), CircuitType::L1_L2);
        assert_eq!(hdr.source_id().to_string(), "00:00:0c:11:22:33");
        assert_eq!(hdr.holding_time(), 30);
        assert_eq!(hdr.pdu_len(), 27);
        assert_eq!(hdr.priority(), 0x40);
        assert_eq!(hdr.lan_id().to_string(), "00:00:0c:44:55:66");
        assert_eq!(hdr.pseudonode(), 2);
        assert_eq!(hdr.validate(27), Ok(()));

        assert!(IsisHeader::parse(CaptureView::new(&L1_HELLO[..], 26)).is_err());
    }

    #[test]
    fn header_field_checks() {
        assert_eq!(validate(&with(0, 0x82)), Err(Error::CodingError));
        assert_eq!(validate(&with(2, 2)), Err(Error::IsisVersion(2)));
        assert_eq!(validate(&with(3, 8)), Err(Error::SystemIdLength(8)));
        assert_eq!(validate(&with(3, 0)), Ok(()));
        assert_eq!(validate(&with(4, 0x11)), Err(Error::PduType(17)));
        // The reserved top bits are masked off.
        assert_eq!(validate(&with(4, 0xef)), Ok(()));
        assert_eq!(validate(&with(5, 3)), Err(Error::IsisVersion(3)));
        assert_eq!(validate(&with(7, 255)), Err(Error::MaxAreaAddresses));
        assert_eq!(validate(&with(7, 254)), Ok(()));
        assert_eq!(validate(&with(8, 0)), Err(Error::CircuitTypeZero));
        assert_eq!(validate(&with(8, 4)), Err(Error::UnknownCircuitType(4)));
        assert_eq!(validate(&with(18, 26)), Err(Error::PduLength(26, 27)));
        assert_eq!(validate(&with(18, 28)), Err(Error::PduLength(28, 27)));
    }

    #[test]
    fn fixed_header_length_must_be_27() {
        for fixed_len in 0..=255u8 {
            let res = validate(&with(1, fixed_len));
            if fixed_len == 27 {
                assert_eq!(res, Ok(()));
            } else {
                assert_eq!(res, Err(Error::FixedHeaderLength(fixed_len, 27)));
            }
        }
    }

    #[test]
    fn circuit_and_level() {
        let l1 = IsisPduType::L1_LAN_IIH.raw();
        let l2 = IsisPduType::L2_LAN_IIH.raw();

        let mut bytes = with(8, 1);
        assert_eq!(validate(&bytes), Ok(()));
        bytes[4] = l2;
        assert_eq!(validate(&bytes), Err(Error::L2HelloOnL1Circuit));

        let mut bytes = with(8, 2);
        assert_eq!(validate(&bytes), Err(Error::L1HelloOnL2Circuit));
        bytes[4] = l2;
        assert_eq!(validate(&bytes), Ok(()));

        let mut bytes = with(8, 3);
        bytes[4] = l1;
        assert_eq!(validate(&bytes), Ok(()));
        bytes[4] = l2;
        assert_eq!(validate(&bytes), Ok(()));
    }
}
