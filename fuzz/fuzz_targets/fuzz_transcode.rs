#![no_main]
use std::convert::Infallible;

use arbitrary::Arbitrary;
use bin2c::{
    ByteSource, LOOKUP_TABLE, OutputBuffer, Transcoder, TranscoderOptions, encode_bounded,
    escape_to_vec,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    input_capacity: u8,
    output_capacity: u8,
    /// Read sizes handed out by the source, cycled.
    splits: Vec<u8>,
    payload: &'a [u8],
}

struct Chunked<'a> {
    payload: &'a [u8],
    splits: &'a [u8],
    next: usize,
}

impl ByteSource for Chunked<'_> {
    type Error = Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let want = if self.splits.is_empty() {
            buf.len()
        } else {
            usize::from(self.splits[self.next % self.splits.len()]).max(1)
        };
        self.next += 1;
        let n = want.min(buf.len()).min(self.payload.len());
        buf[..n].copy_from_slice(&self.payload[..n]);
        self.payload = &self.payload[n..];
        Ok(n)
    }
}

fuzz_target!(|data: Input<'_>| {
    let expected = escape_to_vec(data.payload);

    // Streaming through arbitrary buffer sizes and read splits.
    let options = TranscoderOptions {
        input_capacity: 1 + usize::from(data.input_capacity),
        output_capacity: 4 + usize::from(data.output_capacity),
    };
    let mut transcoder = Transcoder::new(options).unwrap();
    let mut out: Vec<u8> = Vec::new();
    let source = Chunked {
        payload: data.payload,
        splits: &data.splits,
        next: 0,
    };
    let summary = transcoder.run(source, &mut out).unwrap();
    assert_eq!(out, expected);
    assert_eq!(summary.bytes_out, expected.len() as u64);

    // A single bounded step stays inside its slice and writes a prefix.
    let capacity = usize::from(data.output_capacity);
    let mut storage = vec![0u8; capacity];
    let mut bounded = OutputBuffer::new(&mut storage[..]);
    let progress = encode_bounded(&LOOKUP_TABLE, data.payload, &mut bounded);
    assert!(progress.produced <= capacity);
    assert_eq!(
        bounded.filled(),
        escape_to_vec(&data.payload[..progress.consumed]).as_slice()
    );
});
