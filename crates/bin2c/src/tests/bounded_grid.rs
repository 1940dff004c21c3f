//! Output-capacity grid for `encode_bounded`, covering every tail length
//! for plain, two byte and four byte escapes.
use alloc::vec;

use rstest::rstest;

use crate::{Direct, LOOKUP_TABLE, OutputBuffer, Progress, encode_bounded};

fn run_bounded(input: &[u8], capacity: usize) -> (alloc::vec::Vec<u8>, Progress) {
    // Poison past the boundary so an overrun would show up.
    let mut storage = vec![0xaa_u8; capacity + 8];
    let mut out = OutputBuffer::new(&mut storage[..capacity]);
    let progress = encode_bounded(&LOOKUP_TABLE, input, &mut out);
    assert_eq!(progress.produced, out.len());
    let written = out.filled().to_vec();
    assert!(storage[capacity..].iter().all(|&b| b == 0xaa), "wrote past capacity {capacity}");
    (written, progress)
}

#[rstest]
#[case(b"", 0, b"", 0)]
#[case(b"", 1, b"", 0)]
#[case(b"", 2, b"", 0)]
#[case(b"Hello", 0, b"", 0)]
#[case(b"Hello", 1, b"H", 1)]
#[case(b"Hello", 2, b"He", 2)]
#[case(b"Hello", 3, b"Hel", 3)]
#[case(b"Hello", 4, b"Hell", 4)]
#[case(b"Hello", 5, b"Hello", 5)]
#[case(b"Hello", 6, b"Hello", 5)]
#[case(b"Hello", 7, b"Hello", 5)]
#[case(b"\"\n$a", 0, b"", 0)]
#[case(b"\"\n$a", 1, b"", 0)]
#[case(b"\"\n$a", 2, b"\\\"", 1)]
#[case(b"\"\n$a", 3, b"\\\"", 1)]
#[case(b"\"\n$a", 4, b"\\\"", 1)]
#[case(b"\"\n$a", 5, b"\\\"", 1)]
#[case(b"\"\n$a", 6, b"\\\"\\n\\\n", 2)]
#[case(b"\"\n$a", 7, b"\\\"\\n\\\n", 2)]
#[case(b"\"\n$a", 8, b"\\\"\\n\\\n", 2)]
#[case(b"\"\n$a", 9, b"\\\"\\n\\\n", 2)]
#[case(b"\"\n$a", 10, b"\\\"\\n\\\n\\044", 3)]
#[case(b"\"\n$a", 11, b"\\\"\\n\\\n\\044a", 4)]
#[case(b"\"\n$a", 12, b"\\\"\\n\\\n\\044a", 4)]
#[case(b"\"\n$a", 13, b"\\\"\\n\\\n\\044a", 4)]
#[case(b"\"\n$a", 14, b"\\\"\\n\\\n\\044a", 4)]
fn capacity_grid(
    #[case] input: &[u8],
    #[case] capacity: usize,
    #[case] expected: &[u8],
    #[case] consumed: usize,
) {
    let (written, progress) = run_bounded(input, capacity);
    assert_eq!(bstr::BStr::new(&written), bstr::BStr::new(expected));
    assert_eq!(
        progress,
        Progress {
            consumed,
            produced: expected.len()
        }
    );
}

#[test]
fn direct_encoder_matches_table_at_every_capacity() {
    let input: alloc::vec::Vec<u8> = (0..=u8::MAX).collect();
    for capacity in 0..64 {
        let mut a = vec![0u8; capacity];
        let mut b = vec![0u8; capacity];
        let mut out_a = OutputBuffer::new(&mut a[..]);
        let mut out_b = OutputBuffer::new(&mut b[..]);
        assert_eq!(
            encode_bounded(&LOOKUP_TABLE, &input, &mut out_a),
            encode_bounded(&Direct, &input, &mut out_b),
        );
        assert_eq!(out_a.filled(), out_b.filled());
    }
}

#[test]
fn resumes_into_partially_filled_buffer() {
    let mut storage = [0u8; 6];
    let mut out = OutputBuffer::new(&mut storage[..]);
    assert!(out.try_push(b"ab"));
    let progress = encode_bounded(&LOOKUP_TABLE, b"?x", &mut out);
    assert_eq!(progress, Progress { consumed: 1, produced: 4 });
    assert_eq!(out.filled(), b"ab\\077");
}
