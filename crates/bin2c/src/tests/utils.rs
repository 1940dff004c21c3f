use alloc::vec::Vec;
use core::convert::Infallible;

use crate::ByteSource;

/// A source that hands out its payload in caller-chosen read sizes, the way
/// a pipe delivers short reads.
pub(crate) struct SplitSource<'a> {
    payload: &'a [u8],
    splits: Vec<usize>,
    next: usize,
}

impl<'a> SplitSource<'a> {
    pub(crate) fn new(payload: &'a [u8], splits: Vec<usize>) -> Self {
        Self {
            payload,
            splits,
            next: 0,
        }
    }
}

impl ByteSource for SplitSource<'_> {
    type Error = Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        if self.payload.is_empty() || buf.is_empty() {
            return Ok(0);
        }
        let want = match self.splits.get(self.next) {
            Some(&s) => 1 + s % self.payload.len(),
            None => self.payload.len(),
        };
        self.next += 1;
        let n = want.min(buf.len());
        buf[..n].copy_from_slice(&self.payload[..n]);
        self.payload = &self.payload[n..];
        Ok(n)
    }
}

/// Records every `write_all` call separately.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) writes: Vec<Vec<u8>>,
    pub(crate) flushed: usize,
}

impl RecordingSink {
    pub(crate) fn concat(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

impl crate::ByteSink for RecordingSink {
    type Error = Infallible;

    fn write_all(&mut self, buf: &[u8]) -> Result<(), Infallible> {
        self.writes.push(buf.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        self.flushed += 1;
        Ok(())
    }
}
