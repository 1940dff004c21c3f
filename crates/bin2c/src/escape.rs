//! Per-byte escaping rules for C string literal bodies.
//!
//! Every byte value has exactly one encoding, between one and four bytes
//! long:
//!
//! - Named escapes for `\a \b \t \v \f \r \\ \"`. A newline becomes `\n`
//!   followed by a backslash-newline continuation so generated source lines
//!   stay short.
//! - Printable ASCII (`' '..='~'`) passes through unchanged, except for `$`,
//!   `@` and `?`, which older C dialects treat specially (`?` starts
//!   trigraphs).
//! - Everything else becomes a three digit octal escape such as `\177`.
//!
//! [`escape_byte`] evaluates these rules directly. The hot path uses the
//! precomputed [`LookupTable`](crate::LookupTable) instead, which is built
//! from this function at compile time.

/// Longest encoding any single byte can produce.
pub const MAX_ESCAPE_LEN: usize = 4;

/// The encoded form of a single input byte.
///
/// Holds up to [`MAX_ESCAPE_LEN`] bytes, zero padded, together with the
/// number of bytes actually in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Escape {
    bytes: [u8; MAX_ESCAPE_LEN],
    len: u8,
}

impl Escape {
    const fn one(b: u8) -> Self {
        Self {
            bytes: [b, 0, 0, 0],
            len: 1,
        }
    }

    const fn two(b: u8) -> Self {
        Self {
            bytes: [b'\\', b, 0, 0],
            len: 2,
        }
    }

    const fn octal(b: u8) -> Self {
        Self {
            bytes: [
                b'\\',
                b'0' + ((b >> 6) & 7),
                b'0' + ((b >> 3) & 7),
                b'0' + (b & 7),
            ],
            len: 4,
        }
    }

    /// Builds an escape from raw parts.
    ///
    /// Returns `None` if `len` is outside `1..=4` or if any byte past `len`
    /// is non-zero.
    #[must_use]
    pub const fn from_parts(bytes: [u8; MAX_ESCAPE_LEN], len: usize) -> Option<Self> {
        if len == 0 || len > MAX_ESCAPE_LEN {
            return None;
        }
        let mut i = len;
        while i < MAX_ESCAPE_LEN {
            if bytes[i] != 0 {
                return None;
            }
            i += 1;
        }
        #[allow(clippy::cast_possible_truncation)]
        let len = len as u8;
        Some(Self { bytes, len })
    }

    /// The encoded bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Number of encoded bytes, always in `1..=4`.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// The zero padded four byte slot, as stored in a table entry.
    #[inline]
    #[must_use]
    pub const fn padded(&self) -> [u8; MAX_ESCAPE_LEN] {
        self.bytes
    }
}

impl AsRef<[u8]> for Escape {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Encodes `b` by evaluating the escaping rules directly.
#[must_use]
pub const fn escape_byte(b: u8) -> Escape {
    match b {
        0x07 => Escape::two(b'a'),
        0x08 => Escape::two(b'b'),
        b'\t' => Escape::two(b't'),
        b'\n' => Escape {
            bytes: [b'\\', b'n', b'\\', b'\n'],
            len: 4,
        },
        0x0b => Escape::two(b'v'),
        0x0c => Escape::two(b'f'),
        b'\r' => Escape::two(b'r'),
        b'\\' => Escape::two(b'\\'),
        b'"' => Escape::two(b'"'),
        b'$' | b'@' | b'?' => Escape::octal(b),
        b' '..=b'~' => Escape::one(b),
        _ => Escape::octal(b),
    }
}

/// Something that maps a byte to its escaped form.
///
/// Implemented by [`Direct`], which evaluates the rules on every call, and
/// by [`LookupTable`](crate::LookupTable), which reads a precomputed entry.
pub trait Encoder {
    /// Returns the encoding of `byte`.
    fn encode(&self, byte: u8) -> Escape;
}

/// Rule-evaluating encoder, mostly useful as a reference for the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Direct;

impl Encoder for Direct {
    #[inline]
    fn encode(&self, byte: u8) -> Escape {
        escape_byte(byte)
    }
}

impl<E: Encoder + ?Sized> Encoder for &E {
    #[inline]
    fn encode(&self, byte: u8) -> Escape {
        (**self).encode(byte)
    }
}
