use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;
use shim::io::{self, Cursor};

use crate::*;

fn full_chunk(fill: u8) -> Vec<u8> {
    let mut stream = vec![CONTINUE];
    stream.extend(std::iter::repeat(fill).take(CHUNK_SIZE));
    stream
}

#[test]
fn single_final_chunk() {
    let stream = [0x03, 0xAA, 0xBB, 0xCC, 0x99, 0x98];
    let mut cursor = Cursor::new(&stream[..]);
    let mut mem = [0u8; 16];
    let mut image = Image::new(&mut mem);

    match load(&mut cursor, &mut image) {
        Handoff::Jump { len: 3, .. } => {}
        other => panic!("unexpected handoff {:?}", other),
    }
    assert_eq!(image.as_slice(), &[0xAA, 0xBB, 0xCC]);

    // Nothing past the final chunk is consumed.
    assert_eq!(cursor.position(), 4);
    assert_eq!(&mem[3..], &[0u8; 13]);
}

#[test]
fn continuation_then_final_chunk() {
    let mut stream = full_chunk(0x5A);
    stream.extend_from_slice(&[0x02, 0xDD, 0xEE]);

    let mut mem = [0u8; 512];
    let mut image = Image::new(&mut mem);
    let entry = image.entry();

    match load(&stream[..], &mut image) {
        Handoff::Jump { entry: at, len: 257 } => assert_eq!(at, entry),
        other => panic!("unexpected handoff {:?}", other),
    }

    let loaded = image.as_slice();
    assert!(loaded[..255].iter().all(|&b| b == 0x5A));
    assert_eq!(&loaded[255..], &[0xDD, 0xEE]);
}

#[test]
fn empty_final_chunk_jumps() {
    let mut mem = [0u8; 4];
    let mut image = Image::new(&mut mem);

    match load(&[0x00][..], &mut image) {
        Handoff::Jump { len: 0, .. } => {}
        other => panic!("unexpected handoff {:?}", other),
    }
    assert!(image.is_empty());
}

#[test]
fn full_chunk_reads_exactly_255_bytes() {
    let mut stream = full_chunk(0x11);
    stream.extend_from_slice(&[0x01, 0x22]);

    let mut cursor = Cursor::new(&stream[..]);
    let mut mem = [0u8; 300];
    let mut image = Image::new(&mut mem);
    let mut framer = Framer::new(&mut cursor);

    assert_eq!(
        framer.step(&mut image).unwrap(),
        State::ReadPayload { len: 255, read: 0 }
    );
    for _ in 0..254 {
        framer.step(&mut image).unwrap();
    }
    assert_eq!(framer.step(&mut image).unwrap(), State::CheckContinue { len: 255 });
    assert_eq!(image.len(), 255);
    assert_eq!(framer.into_inner().position(), 256);

    // The byte after the payload is read as the next length.
    let mut framer = Framer::new(&mut cursor);
    assert_eq!(
        framer.step(&mut image).unwrap(),
        State::ReadPayload { len: 1, read: 0 }
    );
    assert_eq!(framer.receive(&mut image).unwrap(), 256);
    assert_eq!(image.as_slice()[255], 0x22);
}

#[test]
fn state_walk_for_short_chunk() {
    let stream = [0x02, 0x10, 0x20];
    let mut mem = [0u8; 2];
    let mut image = Image::new(&mut mem);
    let mut framer = Framer::new(&stream[..]);

    assert_eq!(framer.state(), State::AwaitLength);
    let walk = [
        State::ReadPayload { len: 2, read: 0 },
        State::ReadPayload { len: 2, read: 1 },
        State::CheckContinue { len: 2 },
        State::Done { total: 2 },
        State::Done { total: 2 },
    ];
    for expected in walk.iter() {
        assert_eq!(framer.step(&mut image).unwrap(), *expected);
    }
}

#[test]
fn repeated_boots_load_identical_images() {
    let mut stream = full_chunk(0xC3);
    stream.extend_from_slice(&[0x04, 1, 2, 3, 4]);

    let mut first = [0u8; 300];
    let mut second = [0xFFu8; 300];
    for mem in [&mut first, &mut second] {
        let mut image = Image::new(mem);
        assert!(matches!(load(&stream[..], &mut image), Handoff::Jump { len: 259, .. }));
    }
    assert_eq!(&first[..259], &second[..259]);
}

#[test]
fn overflow_halts_without_jump() {
    let stream = [0x05, 1, 2, 3, 4, 5];
    let mut mem = [0u8; 4];
    let mut image = Image::new(&mut mem);

    match load(&stream[..], &mut image) {
        Handoff::Halt(Error::CapacityExceeded { offset: 4, capacity: 4 }) => {}
        other => panic!("unexpected handoff {:?}", other),
    }
    assert_eq!(image.len(), 4);
    assert_eq!(mem, [1, 2, 3, 4]);
}

#[test]
fn overflow_across_chunks_halts() {
    let mut stream = full_chunk(0x01);
    stream.extend_from_slice(&[0x01, 0x02]);

    let mut mem = [0u8; 255];
    let mut image = Image::new(&mut mem);
    let mut framer = Framer::new(&stream[..]);

    match framer.receive(&mut image) {
        Err(Error::CapacityExceeded { offset: 255, capacity: 255 }) => {}
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(framer.state(), State::ReadPayload { len: 1, read: 0 });
}

#[test]
fn starved_transport_is_io_error() {
    let stream = [CONTINUE, 1, 2, 3];
    let mut mem = [0u8; 512];
    let mut image = Image::new(&mut mem);

    match load(&stream[..], &mut image) {
        Handoff::Halt(Error::Io(ref e)) if e.kind() == io::ErrorKind::UnexpectedEof => {}
        other => panic!("unexpected handoff {:?}", other),
    }
    assert_eq!(image.as_slice(), &[1, 2, 3]);
}

#[test]
fn transmit_frames_short_data() {
    let mut out = vec![];
    assert_eq!(transmit(&b"hello"[..], &mut out).unwrap(), 5);
    assert_eq!(out, b"\x05hello");
}

#[test]
fn transmit_closes_on_chunk_boundary() {
    let data = vec![0x42u8; CHUNK_SIZE];
    let mut out = vec![];
    assert_eq!(transmit(&data[..], &mut out).unwrap(), CHUNK_SIZE);

    let mut expected = full_chunk(0x42);
    expected.push(0x00);
    assert_eq!(out, expected);
}

#[test]
fn transmit_empty_sends_zero_chunk() {
    let mut out = vec![];
    assert_eq!(transmit(io::empty(), &mut out).unwrap(), 0);
    assert_eq!(out, [0x00u8]);
}

#[test]
fn transmitted_data_loads_back() {
    let mut rng = rand::thread_rng();
    let mut lengths = vec![0, 1, 254, 255, 256, 510, 511];
    for _ in 0..16 {
        lengths.push(rng.gen_range(0, 4096));
    }

    for len in lengths {
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);

        let mut wire = vec![];
        transmit(&data[..], &mut wire).unwrap();

        let mut mem = vec![0u8; 4096];
        let mut image = Image::new(&mut mem);
        match load(&wire[..], &mut image) {
            Handoff::Jump { len: loaded, .. } => assert_eq!(loaded, len),
            other => panic!("unexpected handoff {:?} for {} bytes", other, len),
        }
        assert_eq!(image.as_slice(), &data[..]);
    }
}

static RX_CHUNKS: AtomicUsize = AtomicUsize::new(0);
static RX_TOTAL: AtomicUsize = AtomicUsize::new(usize::MAX);

fn count_rx(progress: Progress) {
    match progress {
        Progress::Chunk { .. } => {
            RX_CHUNKS.fetch_add(1, Ordering::SeqCst);
        }
        Progress::Done { total } => RX_TOTAL.store(total, Ordering::SeqCst),
    }
}

#[test]
fn receive_reports_progress() {
    let mut stream = full_chunk(0x00);
    stream.extend(full_chunk(0x01));
    stream.extend_from_slice(&[0x01, 0x02]);

    let mut mem = [0u8; 600];
    let mut image = Image::new(&mut mem);
    assert!(matches!(
        load_with_progress(&stream[..], &mut image, count_rx),
        Handoff::Jump { len: 511, .. }
    ));
    assert_eq!(RX_CHUNKS.load(Ordering::SeqCst), 3);
    assert_eq!(RX_TOTAL.load(Ordering::SeqCst), 511);
}

static TX_OFFSETS: AtomicUsize = AtomicUsize::new(0);

fn sum_tx_offsets(progress: Progress) {
    if let Progress::Chunk { offset, .. } = progress {
        TX_OFFSETS.fetch_add(offset, Ordering::SeqCst);
    }
}

#[test]
fn transmit_reports_chunk_offsets() {
    let data = vec![7u8; 600];
    let mut out = vec![];
    transmit_with_progress(&data[..], &mut out, sum_tx_offsets).unwrap();

    // Chunks start at 0, 255 and 510.
    assert_eq!(TX_OFFSETS.load(Ordering::SeqCst), 765);
}

#[test]
fn error_display() {
    let err = Error::CapacityExceeded {
        offset: 9,
        capacity: 8,
    };
    assert_eq!(
        err.to_string(),
        "image byte at offset 9 exceeds capacity of 8 bytes"
    );
}
