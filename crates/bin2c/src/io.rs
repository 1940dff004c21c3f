//! Byte source and byte sink abstractions consumed by the transcoder.
//!
//! Implementations are expected to hide transient interruptions: a source
//! returns `Ok(0)` only at end of stream, and a sink either accepts every
//! byte or fails. [`IoSource`] and [`IoSink`] adapt `std::io` readers and
//! writers accordingly.
use alloc::vec::Vec;
use core::convert::Infallible;

/// Where input bytes come from.
pub trait ByteSource {
    /// Error reported by a failed read.
    type Error;

    /// Fills as much of `buf` as the available data permits.
    ///
    /// Returns the number of bytes written to the front of `buf`; `0` means
    /// end of stream.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the transcoding run.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Where encoded bytes go.
pub trait ByteSink {
    /// Error reported by a failed write.
    type Error;

    /// Writes all of `buf`.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the transcoding run.
    fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Pushes any bytes held by the sink itself to their destination.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the transcoding run.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ByteSource for &[u8] {
    type Error = Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn write_all(&mut self, buf: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    type Error = S::Error;

    fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

#[cfg(feature = "std")]
pub use self::std_io::{IoSink, IoSource};

#[cfg(feature = "std")]
mod std_io {
    use std::io::{self, ErrorKind, Read, Write};

    use super::{ByteSink, ByteSource};

    /// Adapts a [`Read`] into a [`ByteSource`].
    ///
    /// Each call keeps reading until the buffer is full or the reader hits
    /// end of file, retrying interrupted reads.
    #[derive(Debug)]
    pub struct IoSource<R> {
        inner: R,
    }

    impl<R: Read> IoSource<R> {
        /// Wraps `inner`.
        pub fn new(inner: R) -> Self {
            Self { inner }
        }

        /// Unwraps the reader.
        pub fn into_inner(self) -> R {
            self.inner
        }
    }

    impl<R: Read> ByteSource for IoSource<R> {
        type Error = io::Error;

        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let mut filled = 0;
            while filled < buf.len() {
                match self.inner.read(&mut buf[filled..]) {
                    Ok(0) => break,
                    Ok(n) => filled += n,
                    Err(e) if e.kind() == ErrorKind::Interrupted => {
                        log::trace!("read interrupted, retrying");
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(filled)
        }
    }

    /// Adapts a [`Write`] into a [`ByteSink`].
    ///
    /// Interrupted writes are retried; a writer that accepts zero bytes is
    /// reported as [`ErrorKind::WriteZero`].
    #[derive(Debug)]
    pub struct IoSink<W> {
        inner: W,
    }

    impl<W: Write> IoSink<W> {
        /// Wraps `inner`.
        pub fn new(inner: W) -> Self {
            Self { inner }
        }

        /// Unwraps the writer.
        pub fn into_inner(self) -> W {
            self.inner
        }
    }

    impl<W: Write> ByteSink for IoSink<W> {
        type Error = io::Error;

        fn write_all(&mut self, mut buf: &[u8]) -> io::Result<()> {
            while !buf.is_empty() {
                match self.inner.write(buf) {
                    Ok(0) => {
                        return Err(io::Error::new(
                            ErrorKind::WriteZero,
                            "failed to write whole buffer",
                        ));
                    }
                    Ok(n) => buf = &buf[n..],
                    Err(e) if e.kind() == ErrorKind::Interrupted => {
                        log::trace!("write interrupted, retrying");
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            loop {
                match self.inner.flush() {
                    Err(e) if e.kind() == ErrorKind::Interrupted => {}
                    res => return res,
                }
            }
        }
    }
}
