use thiserror::Error;

/// A failure of the byte source or byte sink during a transcoding run.
///
/// Either one aborts the run; nothing is retried at this level.
#[derive(Error, Debug, PartialEq)]
pub enum PumpError<R, W> {
    /// Reading from the source failed.
    #[error("error reading data: {0}")]
    Read(R),
    /// Writing to the sink failed.
    #[error("error writing data: {0}")]
    Write(W),
}

/// Buffer capacities that cannot drive a transcoding run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    /// The input buffer must hold at least one byte.
    #[error("input buffer capacity must be at least 1, got {0}")]
    InputCapacity(usize),
    /// The output buffer must fit the longest escape.
    #[error("output buffer capacity must be at least 4, got {0}")]
    OutputCapacity(usize),
}

/// A packed table image that does not describe a valid table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackedTableError {
    /// The image is not exactly 1024 bytes long.
    #[error("packed table must be 1024 bytes, got {0}")]
    Length(usize),
    /// An entry has non-zero bytes past its encoded length.
    #[error("malformed packed table entry for byte {byte:#04x}")]
    Entry {
        /// The byte value whose entry is malformed.
        byte: u8,
    },
}

/// A symbol name that is not a valid C identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid C identifier {name:?}")]
pub struct DeclarationError {
    pub(crate) name: alloc::string::String,
}

impl DeclarationError {
    /// The rejected name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
