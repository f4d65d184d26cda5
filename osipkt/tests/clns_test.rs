mod common;
use common::*;

use core::fmt;

use osipkt::clns::*;
use osipkt::CaptureView;

const HELLO_HEADER: [u8; 27] = [
    0x83, 0x1b, 0x01, 0x06, 0x0f, 0x01, 0x00, 0x00, 0x03, 0x00, 0x00, 0x0c, 0x11, 0x22, 0x33,
    0x00, 0x1e, 0x00, 0x1b, 0x40, 0x00, 0x00, 0x0c, 0x11, 0x22, 0x33, 0x01,
];

fn hello(tlvs: &[u8]) -> Vec<u8> {
    let mut packet = HELLO_HEADER.to_vec();
    packet.extend_from_slice(tlvs);
    let pdu_len = packet.len() as u16;
    packet[17..19].copy_from_slice(&pdu_len.to_be_bytes());
    packet
}

fn dissect(packet: &[u8]) -> String {
    dissect_clns_to_string(
        CaptureView::new(packet, packet.len()),
        None,
        &DissectConfig::default(),
    )
}

// A sink with room for a fixed number of bytes.
struct Limited {
    out: String,
    room: usize,
}

impl fmt::Write for Limited {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.len() > self.room {
            return Err(fmt::Error);
        }
        self.room -= s.len();
        self.out.push_str(s);
        Ok(())
    }
}

#[test]
fn isis_header_without_tlvs() {
    init_logger();
    let packet = hello(&[]);
    assert_eq!(
        dissect(&packet),
        "iso isis len=27 \
         \n\t\t\t L1 lan iih, circuit l1-l2, holding time 30 \
         \n\t\t\t source 00:00:0c:11:22:33, length 27\
         \n\t\t\t lan id 00:00:0c:11:22:33(1)"
    );
}

#[test]
fn isis_single_padding_tlv() {
    init_logger();
    let packet = hello(&[0x08, 0x01, 0x00]);
    assert_eq!(
        dissect(&packet),
        "iso isis len=30 \
         \n\t\t\t L1 lan iih, circuit l1-l2, holding time 30 \
         \n\t\t\t source 00:00:0c:11:22:33, length 30\
         \n\t\t\t lan id 00:00:0c:11:22:33(1)\
         \n\t\t\t padding for 1 bytes"
    );
}

#[test]
fn isis_single_area_address() {
    init_logger();
    let packet = hello(&[0x01, 0x04, 0x03, 0xaa, 0xbb, 0xcc]);
    assert!(dissect(&packet).ends_with(
        "length 33\n\t\t\t lan id 00:00:0c:11:22:33(1)\n\t\t\t area addresses\n\t\t\t aa.bb.cc (3)"
    ));
}

#[test]
fn clnp_and_unknown() {
    init_logger();
    let addrs = LinkAddrs::new("00:00:0c:11:22:33", "09:00:2b:00:00:05");

    let packet = [0x81, 0x1c, 0x01, 0x1e, 0x1c];
    assert_eq!(
        dissect_clns_to_string(
            CaptureView::new(&packet[..], packet.len()),
            Some(addrs),
            &DissectConfig::verbose()
        ),
        "iso clns 00:00:0c:11:22:33 > 09:00:2b:00:00:05"
    );

    let packet = [0x45, 0x00, 0x00, 0x14, 0x00];
    assert_eq!(
        dissect_clns_to_string(
            CaptureView::new(&packet[..], packet.len()),
            Some(addrs),
            &DissectConfig::default()
        ),
        "iso clns 45 00:00:0c:11:22:33 > 09:00:2b:00:00:05 len=5 \n\t\t\t 4500 0014 00"
    );
}

#[test]
fn nothing_captured() {
    init_logger();
    let addrs = LinkAddrs::new("00:00:0c:11:22:33", "09:00:2b:00:00:05");
    let view = CaptureView::from_captured(&[], 40);
    assert_eq!(
        dissect_clns_to_string(view, Some(addrs), &DissectConfig::default()),
        "[|iso-clns] 00:00:0c:11:22:33 > 09:00:2b:00:00:05"
    );
    assert_eq!(
        dissect_clns_to_string(view, None, &DissectConfig::default()),
        "[|iso-clns] "
    );
}

#[test]
fn sink_failure_is_returned() {
    init_logger();
    let addrs = LinkAddrs::new("00:00:0c:11:22:33", "09:00:2b:00:00:05");
    let mut bad_cksum = file_to_packet("EsisIsh.dat");
    bad_cksum[10] = 0x48;

    let cases = [
        (file_to_packet("IsisL1Hello.dat"), DissectConfig::default()),
        (file_to_packet("EsisIsh.dat"), DissectConfig::verbose()),
        (bad_cksum, DissectConfig::verbose()),
    ];
    for (packet, config) in cases {
        let view = CaptureView::new(&packet[..], packet.len());
        let full = dissect_clns_to_string(view, Some(addrs), &config);

        for room in 0..full.len() {
            let mut sink = Limited {
                out: String::new(),
                room,
            };
            assert_eq!(
                dissect_clns(&mut sink, view, Some(addrs), &config),
                Err(fmt::Error)
            );
            assert!(full.starts_with(&sink.out));
        }

        let mut sink = Limited {
            out: String::new(),
            room: full.len(),
        };
        assert_eq!(dissect_clns(&mut sink, view, Some(addrs), &config), Ok(()));
        assert_eq!(sink.out, full);
    }
}
