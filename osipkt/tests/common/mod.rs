use std::{fs::File, io::Read};

pub fn file_to_packet(fname: &str) -> Vec<u8> {
    // The test is executed under the crate root directory.
    let mut program_path = std::env::current_dir().unwrap();
    program_path.push("tests");
    program_path.push("packet_examples");
    program_path.push(fname);

    let mut file = File::open(program_path).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    let content: String = content.split_whitespace().collect();

    content
        .as_bytes()
        .chunks(2)
        .map(|pair| u8::from_str_radix(std::str::from_utf8(pair).unwrap(), 16).unwrap())
        .collect()
}

#[allow(dead_code)]
pub fn init_logger() {
    // Several tests in one binary race to install the logger.
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Decode `packet` captured up to `capture_end`, then again with every byte
/// past the capture end overwritten, and check both runs agree.
#[allow(dead_code)]
pub fn assert_capture_bounded(
    packet: &[u8],
    capture_end: usize,
    dissect: impl Fn(&[u8], usize) -> String,
) -> String {
    let text = dissect(packet, capture_end);
    for sentinel in [0x00u8, 0xff] {
        let mut poisoned = packet.to_vec();
        for byte in poisoned.iter_mut().skip(capture_end) {
            *byte = sentinel;
        }
        assert_eq!(
            dissect(&poisoned, capture_end),
            text,
            "capture_end={} sentinel={:#04x}",
            capture_end,
            sentinel
        );
    }
    text
}
