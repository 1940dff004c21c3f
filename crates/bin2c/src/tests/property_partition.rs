use alloc::vec::Vec;

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use super::utils::{RecordingSink, SplitSource};
use crate::{
    LOOKUP_TABLE, OutputBuffer, Transcoder, TranscoderOptions, encode_bounded, escape_to_vec,
};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: `encode_bounded` stays inside the output slice, writes exactly
/// the escapes of the bytes it reports as consumed, and only stops early
/// when the next escape does not fit.
#[test]
fn bounded_step_never_overruns() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Vec<u8>, capacity: u8) -> bool {
        let capacity = usize::from(capacity % 64);
        let mut storage = alloc::vec![0u8; capacity];
        let mut out = OutputBuffer::new(&mut storage[..]);
        let progress = encode_bounded(&LOOKUP_TABLE, &input, &mut out);

        let exact = out.filled() == escape_to_vec(&input[..progress.consumed]).as_slice();
        let bounded = progress.produced <= capacity;
        let stopped_for_a_reason = input
            .get(progress.consumed)
            .is_none_or(|&b| LOOKUP_TABLE.get(b).len() > out.remaining());
        exact && bounded && stopped_for_a_reason
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, u8) -> bool);
}

/// Property: more output space never means fewer input bytes consumed.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn consumption_is_monotone_in_capacity(input: Vec<u8>, a: u8, b: u8) -> TestResult {
    let (small, large) = if a <= b { (a, b) } else { (b, a) };
    if input.is_empty() {
        return TestResult::discard();
    }
    let consumed = |capacity: u8| {
        let mut storage = alloc::vec![0u8; usize::from(capacity)];
        let mut out = OutputBuffer::new(&mut storage[..]);
        encode_bounded(&LOOKUP_TABLE, &input, &mut out).consumed
    };
    TestResult::from_bool(consumed(small) <= consumed(large))
}

/// Property: however the source splits its reads and whatever the buffer
/// sizes, the transcoder output equals the one-shot encoding, and no single
/// write exceeds the output buffer.
#[test]
fn transcoder_output_is_independent_of_chunking() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Vec<u8>, splits: Vec<usize>, in_cap: u8, out_cap: u8) -> bool {
        let options = TranscoderOptions {
            input_capacity: 1 + usize::from(in_cap % 32),
            output_capacity: 4 + usize::from(out_cap % 32),
        };
        let mut transcoder = Transcoder::new(options).unwrap();
        let mut sink = RecordingSink::default();
        let summary = transcoder
            .run(SplitSource::new(&input, splits), &mut sink)
            .unwrap();

        let expected = escape_to_vec(&input);
        sink.concat() == expected
            && sink.writes.iter().all(|w| w.len() <= options.output_capacity)
            && summary.bytes_in == input.len() as u64
            && summary.bytes_out == expected.len() as u64
            && summary.flushes == sink.writes.len() as u64
            && sink.flushed == 1
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<usize>, u8, u8) -> bool);
}
