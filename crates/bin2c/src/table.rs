//! Precomputed byte → escape lookup table.
//!
//! The table is derived from [`escape_byte`] at compile time and exposed as
//! the immutable [`LOOKUP_TABLE`] static. Encoding through it is a single
//! indexed read.
//!
//! # Packed form
//!
//! The table can be exported to (and imported from) a flat 1024 byte image:
//! four zero-padded bytes per entry, with `len - 1` stored in the two most
//! significant bits of each entry's fourth byte. No escape ever puts a byte
//! `>= 0x40` in that position, so the bits are free.
use crate::{
    error::PackedTableError,
    escape::{Encoder, Escape, MAX_ESCAPE_LEN, escape_byte},
};

/// Size in bytes of the packed table image.
pub const PACKED_TABLE_LEN: usize = 256 * MAX_ESCAPE_LEN;

const LEN_SHIFT: u32 = 6;
const DATA_MASK: u8 = (1 << LEN_SHIFT) - 1;

/// The process-wide table, built at compile time.
pub static LOOKUP_TABLE: LookupTable = LookupTable::new();

/// One [`Escape`] per byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    entries: [Escape; 256],
}

impl LookupTable {
    /// Builds the table from the escaping rules.
    ///
    /// This is a pure function of the 256 byte values; every call yields an
    /// identical table.
    #[must_use]
    pub const fn new() -> Self {
        let mut entries = [escape_byte(0); 256];
        let mut i = 0;
        while i < entries.len() {
            #[allow(clippy::cast_possible_truncation)]
            let b = i as u8;
            entries[i] = escape_byte(b);
            i += 1;
        }
        Self { entries }
    }

    /// Returns the entry for `byte`.
    #[inline]
    #[must_use]
    pub fn get(&self, byte: u8) -> &Escape {
        &self.entries[usize::from(byte)]
    }

    /// Iterates over `(byte, escape)` pairs in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Escape)> {
        (0..=u8::MAX).zip(self.entries.iter())
    }

    /// Exports the table in its packed form.
    #[must_use]
    pub fn to_packed(&self) -> [u8; PACKED_TABLE_LEN] {
        let mut out = [0; PACKED_TABLE_LEN];
        for (slot, entry) in out.chunks_exact_mut(MAX_ESCAPE_LEN).zip(&self.entries) {
            slot.copy_from_slice(&entry.padded());
            #[allow(clippy::cast_possible_truncation)]
            let len_bits = (entry.len() - 1) as u8;
            slot[MAX_ESCAPE_LEN - 1] |= len_bits << LEN_SHIFT;
        }
        out
    }

    /// Imports a table from its packed form.
    ///
    /// # Errors
    ///
    /// Returns [`PackedTableError::Length`] if `packed` is not exactly
    /// [`PACKED_TABLE_LEN`] bytes long, and [`PackedTableError::Entry`] if an
    /// entry carries data past its encoded length.
    pub fn from_packed(packed: &[u8]) -> Result<Self, PackedTableError> {
        if packed.len() != PACKED_TABLE_LEN {
            return Err(PackedTableError::Length(packed.len()));
        }

        let mut entries = [escape_byte(0); 256];
        for ((byte, entry), slot) in (0..=u8::MAX)
            .zip(entries.iter_mut())
            .zip(packed.chunks_exact(MAX_ESCAPE_LEN))
        {
            let mut bytes = [0; MAX_ESCAPE_LEN];
            bytes.copy_from_slice(slot);
            let len = usize::from(bytes[MAX_ESCAPE_LEN - 1] >> LEN_SHIFT) + 1;
            bytes[MAX_ESCAPE_LEN - 1] &= DATA_MASK;
            *entry = Escape::from_parts(bytes, len).ok_or(PackedTableError::Entry { byte })?;
        }

        Ok(Self { entries })
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for LookupTable {
    #[inline]
    fn encode(&self, byte: u8) -> Escape {
        *self.get(byte)
    }
}
