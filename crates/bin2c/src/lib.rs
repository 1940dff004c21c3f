//! Streaming conversion of arbitrary bytes into C string literal text.
//!
//! Every input byte is expanded to one to four output bytes: named escapes
//! for the usual control characters, printable ASCII passed through, and
//! octal escapes for everything else. A newline additionally ends the
//! output line with a backslash continuation.
//!
//! ```rust
//! use bin2c::{Transcoder, TranscoderOptions};
//!
//! let mut transcoder = Transcoder::new(TranscoderOptions::default()).unwrap();
//! let mut out: Vec<u8> = Vec::new();
//! transcoder.run(&b"a\tb\n\x00"[..], &mut out).unwrap();
//! assert_eq!(out, b"a\\tb\\n\\\n\\000");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod declaration;
mod error;
mod escape;
mod io;
mod options;
mod pump;
mod table;

#[cfg(test)]
mod tests;

pub use buffer::OutputBuffer;
pub use declaration::Declaration;
pub use error::{DeclarationError, OptionsError, PackedTableError, PumpError};
pub use escape::{Direct, Encoder, Escape, MAX_ESCAPE_LEN, escape_byte};
#[cfg(feature = "std")]
pub use io::{IoSink, IoSource};
pub use io::{ByteSink, ByteSource};
pub use options::{DEFAULT_BUFFER_CAPACITY, TranscoderOptions};
pub use pump::{Progress, Summary, Transcoder, encode_bounded, escape_to_vec};
pub use table::{LOOKUP_TABLE, LookupTable, PACKED_TABLE_LEN};
