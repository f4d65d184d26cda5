use core::fmt;

quick_error! {
    /// A decode error.
    ///
    /// Decoders never print their own errors. They stop and hand the error to
    /// the dispatcher, which renders its `Display` text in place of the
    /// structured output. Only `Fmt`, a failure of the caller's sink, is
    /// passed back to the caller.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Error {
        /// The capture ended inside a structure that had to be read whole.
        Truncated(proto: &'static str) {
            display("[|{}]", proto)
        }
        /// ES-IS packet made of the NLPID and the LI only.
        NoHeader {
            display("no header at all!")
        }
        /// ES-IS LI claims more bytes than the packet has.
        LiExceedsPdu(li: u8, len: usize) {
            display("LI({}) > PDU size ({})!", li, len)
        }
        /// ES-IS LI too small for the fixed header.
        TooShortForHeader(li: u8) {
            display("too short for esis header {}:", li)
        }
        /// ES-IS checksum does not verify; holds the two received octets.
        BadChecksum(first: u8, second: u8) {
            display("bad cksum (got {:02x}{:02x})", second, first)
        }
        /// ES-IS version other than 1.
        UnsupportedVersion(version: u8) {
            display("unsupported version {}", version)
        }
        /// ES-IS address field runs past the LI.
        BadLi {
            display("[bad li]")
        }
        /// ES-IS option runs past the LI.
        OptionTooLong(code: u8) {
            display("opt ({}) too long", code)
        }
        /// IS-IS header does not start with the IS-IS NLPID.
        CodingError {
            display("coding error!")
        }
        /// IS-IS protocol or packet version other than 1.
        IsisVersion(version: u8) {
            display("version {} packet not supported", version)
        }
        /// IS-IS system id length other than 6 (or 0).
        SystemIdLength(len: u8) {
            display("system ID length of {} is not supported", len)
        }
        /// IS-IS fixed header length disagrees with the system id length.
        FixedHeaderLength(got: u8, expected: u8) {
            display("bogus fixed header length {} should be {}", got, expected)
        }
        /// IS-IS PDU other than a LAN hello.
        PduType(pdu_type: u8) {
            display("PDU type ({}) not supported", pdu_type)
        }
        /// IS-IS hello advertising 255 area addresses.
        MaxAreaAddresses {
            display("bad packet -- 255 areas")
        }
        /// IS-IS hello with circuit type 0.
        CircuitTypeZero {
            display("PDU with circuit type 0")
        }
        /// IS-IS level 2 hello on a level 1 only circuit.
        L2HelloOnL1Circuit {
            display("L2 IIH on an L1 only circuit")
        }
        /// IS-IS level 1 hello on a level 2 only circuit.
        L1HelloOnL2Circuit {
            display("L1 IIH on an L2 only circuit")
        }
        /// IS-IS circuit type above 3.
        UnknownCircuitType(circuit: u8) {
            display("unknown circuit type {}", circuit)
        }
        /// IS-IS PDU length shorter than the header or longer than the frame.
        PduLength(pdu_len: u16, len: usize) {
            display("bogus packet length {}, real length {}", pdu_len, len)
        }
        /// The output sink refused a write.
        Fmt(err: fmt::Error) {
            from()
            display("output sink error")
        }
    }
}

/// The class of a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The capture ends before the declared content.
    Truncated,
    /// A declared length is inconsistent with its outer bound.
    Malformed,
    /// A version or PDU type the decoder does not handle.
    Unsupported,
    /// The ES-IS checksum does not verify.
    ChecksumMismatch,
    /// The output sink failed.
    Sink,
}

impl Error {
    /// The class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Truncated(_) => ErrorKind::Truncated,
            Error::BadChecksum(..) => ErrorKind::ChecksumMismatch,
            Error::UnsupportedVersion(_)
            | Error::IsisVersion(_)
            | Error::SystemIdLength(_)
            | Error::PduType(_) => ErrorKind::Unsupported,
            Error::Fmt(_) => ErrorKind::Sink,
            _ => ErrorKind::Malformed,
        }
    }

    /// Whether the caller should follow the message with a raw dump of the
    /// captured packet.
    pub fn wants_dump(&self) -> bool {
        matches!(self, Error::TooShortForHeader(_) | Error::BadChecksum(..))
    }

    /// Whether quiet mode collapses this error into a bare `bad pkt!`.
    pub(crate) fn is_bad_header(&self) -> bool {
        matches!(
            self,
            Error::NoHeader | Error::LiExceedsPdu(..) | Error::TooShortForHeader(_)
        )
    }
}
