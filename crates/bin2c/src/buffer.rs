//! Fixed-capacity input and output regions used by the transcoder.
//!
//! Neither buffer ever grows. The input side tracks an explicit read cursor
//! and fill length; the output side tracks how many leading bytes are in
//! use and offers a bounded write ([`OutputBuffer::try_push`]) that leaves
//! the buffer untouched when the bytes do not fit.
use alloc::{boxed::Box, vec};

use crate::io::ByteSource;

/// Input region. Unread bytes live in `data[pos..end]`.
#[derive(Debug)]
pub(crate) struct InputBuffer {
    data: Box<[u8]>,
    pos: usize,
    end: usize,
}

impl InputBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            pos: 0,
            end: 0,
        }
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.pos == self.end
    }

    #[inline]
    pub(crate) fn unread(&self) -> &[u8] {
        &self.data[self.pos..self.end]
    }

    #[inline]
    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.end - self.pos);
        self.pos += n;
    }

    /// Drops any unread bytes.
    pub(crate) fn clear(&mut self) {
        self.pos = 0;
        self.end = 0;
    }

    /// Replaces the (exhausted) contents with one read from `source`.
    ///
    /// Returns the number of bytes read; zero means end of stream.
    pub(crate) fn fill<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<usize, S::Error> {
        debug_assert!(self.is_exhausted(), "refilling a buffer with unread input");
        self.clear();
        let n = source.read(&mut self.data)?;
        debug_assert!(n <= self.data.len());
        self.end = n;
        Ok(n)
    }
}

/// Output region over any mutable byte storage. Written bytes live in
/// `storage[..len]`.
///
/// The transcoder owns an `OutputBuffer<Box<[u8]>>`;
/// [`encode_bounded`](crate::encode_bounded) callers can wrap a borrowed
/// `&mut [u8]`.
#[derive(Debug)]
pub struct OutputBuffer<B> {
    storage: B,
    len: usize,
}

impl OutputBuffer<Box<[u8]>> {
    /// Allocates an empty buffer of `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(vec![0; capacity].into_boxed_slice())
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> OutputBuffer<B> {
    /// Wraps `storage` as an empty buffer spanning all of it.
    pub fn new(storage: B) -> Self {
        Self { storage, len: 0 }
    }

    /// Total number of bytes the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().len()
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written since the last clear.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Free slots left before the capacity boundary.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// The written bytes.
    #[inline]
    pub fn filled(&self) -> &[u8] {
        &self.storage.as_ref()[..self.len]
    }

    /// Appends `bytes`, which the caller has checked fit.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than [`remaining`](Self::remaining).
    #[inline]
    pub fn push(&mut self, bytes: &[u8]) {
        let end = self.len + bytes.len();
        self.storage.as_mut()[self.len..end].copy_from_slice(bytes);
        self.len = end;
    }

    /// Appends `bytes` if they fit entirely.
    ///
    /// Returns `false` and leaves the buffer unchanged otherwise.
    #[inline]
    pub fn try_push(&mut self, bytes: &[u8]) -> bool {
        if bytes.len() > self.remaining() {
            return false;
        }
        self.push(bytes);
        true
    }

    /// Resets the buffer to empty.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Consumes the buffer, returning the storage and the written length.
    pub fn into_parts(self) -> (B, usize) {
        (self.storage, self.len)
    }
}
