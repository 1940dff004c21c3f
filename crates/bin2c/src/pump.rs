//! The streaming transcoder.
//!
//! A [`Transcoder`] owns one input and one output buffer for the lifetime
//! of a run. It cycles between three states:
//!
//! - **Filling**: the input buffer is exhausted. Pending output is flushed
//!   to the sink, then the input is refilled from the source. An empty fill
//!   ends the stream.
//! - **Encoding**: bytes are escaped into the output buffer by
//!   [`encode_bounded`] until either side runs out.
//! - **Draining**: the output buffer cannot take the next escape, so it is
//!   written to the sink and encoding resumes.
//!
//! [`encode_bounded`] never writes past the output boundary. While at
//! least [`MAX_ESCAPE_LEN`] slots are free it appends unconditionally; in
//! the last few slots it switches to [`OutputBuffer::try_push`] and stops at
//! the first escape that does not fit, leaving that byte unconsumed.
use alloc::boxed::Box;

use bstr::ByteSlice;

use crate::{
    LOOKUP_TABLE, LookupTable, TranscoderOptions,
    buffer::{InputBuffer, OutputBuffer},
    error::{OptionsError, PumpError},
    escape::{Encoder, MAX_ESCAPE_LEN},
    io::{ByteSink, ByteSource},
};

/// How far one call to [`encode_bounded`] got.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Input bytes whose full encoding was written.
    pub consumed: usize,
    /// Output bytes written.
    pub produced: usize,
}

/// Escapes as much of `input` as fits into `output`.
///
/// Stops at the end of `input` or at the first byte whose escape does not
/// fit in the space left, whichever comes first. The returned
/// [`Progress::consumed`] counts only bytes that were fully written.
pub fn encode_bounded<E, B>(encoder: &E, input: &[u8], output: &mut OutputBuffer<B>) -> Progress
where
    E: Encoder + ?Sized,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let start = output.len();
    let mut consumed = 0;

    // Hot loop: the largest escape always fits.
    for &byte in input {
        if output.remaining() < MAX_ESCAPE_LEN {
            break;
        }
        output.push(encoder.encode(byte).as_bytes());
        consumed += 1;
    }

    // Tail: fewer than four slots left.
    for &byte in &input[consumed..] {
        if !output.try_push(encoder.encode(byte).as_bytes()) {
            break;
        }
        consumed += 1;
    }

    Progress {
        consumed,
        produced: output.len() - start,
    }
}

/// Totals for one completed [`Transcoder::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Bytes read from the source.
    pub bytes_in: u64,
    /// Escaped bytes written to the sink.
    pub bytes_out: u64,
    /// Number of non-empty source reads.
    pub fills: u64,
    /// Number of non-empty sink writes.
    pub flushes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Filling,
    Encoding,
    Draining,
}

/// Double-buffered pump from a [`ByteSource`] to a [`ByteSink`].
///
/// Buffers are allocated once in the constructor and reused for every run.
///
/// ```rust
/// use bin2c::{Transcoder, TranscoderOptions};
///
/// let mut transcoder = Transcoder::new(TranscoderOptions::default()).unwrap();
/// let mut out: Vec<u8> = Vec::new();
/// transcoder.run(&b"say \"hi\"\n"[..], &mut out).unwrap();
/// assert_eq!(out, b"say \\\"hi\\\"\\n\\\n");
/// ```
#[derive(Debug)]
pub struct Transcoder<'t, E: ?Sized = LookupTable> {
    encoder: &'t E,
    input: InputBuffer,
    output: OutputBuffer<Box<[u8]>>,
    summary: Summary,
}

impl Transcoder<'static> {
    /// Creates a transcoder backed by the shared [`LOOKUP_TABLE`].
    ///
    /// # Errors
    ///
    /// Returns an [`OptionsError`] if either buffer capacity is too small.
    pub fn new(options: TranscoderOptions) -> Result<Self, OptionsError> {
        Self::with_encoder(&LOOKUP_TABLE, options)
    }
}

impl<'t, E: Encoder + ?Sized> Transcoder<'t, E> {
    /// Creates a transcoder that escapes bytes with `encoder`.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionsError`] if either buffer capacity is too small.
    pub fn with_encoder(
        encoder: &'t E,
        options: TranscoderOptions,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            encoder,
            input: InputBuffer::with_capacity(options.input_capacity),
            output: OutputBuffer::with_capacity(options.output_capacity),
            summary: Summary::default(),
        })
    }

    /// Escapes everything `source` yields into `sink`.
    ///
    /// Returns once the source reports end of stream and every byte has been
    /// written and the sink flushed.
    ///
    /// # Errors
    ///
    /// The first source or sink failure aborts the run. Bytes already handed
    /// to the sink stay written; buffered bytes are dropped.
    pub fn run<R, W>(
        &mut self,
        mut source: R,
        mut sink: W,
    ) -> Result<Summary, PumpError<R::Error, W::Error>>
    where
        R: ByteSource,
        W: ByteSink,
    {
        // Raw text queued by `write_raw` goes out first and is not counted.
        self.drain_raw(&mut sink).map_err(PumpError::Write)?;
        self.input.clear();
        self.summary = Summary::default();

        let mut state = State::Filling;
        loop {
            log::trace!("transcoder state {state:?}");
            state = match state {
                State::Filling => {
                    self.drain(&mut sink).map_err(PumpError::Write)?;
                    let n = self.input.fill(&mut source).map_err(PumpError::Read)?;
                    if n == 0 {
                        break;
                    }
                    log::debug!("read {n} bytes");
                    self.summary.fills += 1;
                    self.summary.bytes_in += n as u64;
                    State::Encoding
                }
                State::Encoding => {
                    let progress =
                        encode_bounded(self.encoder, self.input.unread(), &mut self.output);
                    self.input.consume(progress.consumed);
                    if self.input.is_exhausted() {
                        State::Filling
                    } else {
                        State::Draining
                    }
                }
                State::Draining => {
                    self.drain(&mut sink).map_err(PumpError::Write)?;
                    State::Encoding
                }
            };
        }

        debug_assert!(self.input.is_exhausted());
        self.drain(&mut sink).map_err(PumpError::Write)?;
        sink.flush().map_err(PumpError::Write)?;
        log::debug!(
            "transcoded {} bytes into {} ({} fills, {} flushes)",
            self.summary.bytes_in,
            self.summary.bytes_out,
            self.summary.fills,
            self.summary.flushes
        );
        Ok(self.summary)
    }

    /// Sends `bytes` to `sink` verbatim, through the output buffer.
    ///
    /// Used for text that must surround the escaped stream, such as a C
    /// declaration. The bytes are only guaranteed to reach the sink after the
    /// next [`run`](Self::run) or [`flush`](Self::flush).
    ///
    /// # Errors
    ///
    /// Returns the sink's error if a drain fails. Buffered bytes are dropped.
    pub fn write_raw<W: ByteSink>(
        &mut self,
        mut sink: W,
        mut bytes: &[u8],
    ) -> Result<(), W::Error> {
        while !bytes.is_empty() {
            let n = bytes.len().min(self.output.remaining());
            self.output.push(&bytes[..n]);
            bytes = &bytes[n..];
            if !bytes.is_empty() {
                self.drain_raw(&mut sink)?;
            }
        }
        Ok(())
    }

    /// Writes any buffered output to `sink` and flushes it.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn flush<W: ByteSink>(&mut self, mut sink: W) -> Result<(), W::Error> {
        self.drain_raw(&mut sink)?;
        sink.flush()
    }

    fn drain<W: ByteSink>(&mut self, sink: &mut W) -> Result<(), W::Error> {
        let n = self.output.len();
        self.drain_raw(sink)?;
        if n > 0 {
            self.summary.flushes += 1;
            self.summary.bytes_out += n as u64;
        }
        Ok(())
    }

    fn drain_raw<W: ByteSink>(&mut self, sink: &mut W) -> Result<(), W::Error> {
        if self.output.is_empty() {
            return Ok(());
        }
        log::debug!("writing {} bytes", self.output.len());
        log::trace!("output: {:?}", self.output.filled().as_bstr());
        let written = sink.write_all(self.output.filled());
        // Discarded on failure too; the next run must not resend it.
        self.output.clear();
        written
    }
}

/// Escapes all of `input` in memory.
///
/// ```rust
/// assert_eq!(bin2c::escape_to_vec(b"$5?"), b"\\0445\\077");
/// ```
#[must_use]
pub fn escape_to_vec(input: &[u8]) -> alloc::vec::Vec<u8> {
    let mut out = alloc::vec::Vec::with_capacity(input.len());
    for &byte in input {
        out.extend_from_slice(LOOKUP_TABLE.get(byte).as_bytes());
    }
    out
}
