use crate::{error::OptionsError, escape::MAX_ESCAPE_LEN};

/// Buffer size used for both sides when nothing else is configured.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8129;

/// Configuration for a [`Transcoder`](crate::Transcoder).
///
/// # Examples
///
/// ```rust
/// use bin2c::{Transcoder, TranscoderOptions};
///
/// let options = TranscoderOptions {
///     output_capacity: 64,
///     ..Default::default()
/// };
/// let transcoder = Transcoder::new(options).unwrap();
/// ```
///
/// # Default
///
/// Both capacities default to [`DEFAULT_BUFFER_CAPACITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TranscoderOptions {
    /// Size of the input buffer, i.e. the most bytes requested from the
    /// source at once.
    ///
    /// Must be at least 1.
    pub input_capacity: usize,

    /// Size of the output buffer, i.e. the most bytes handed to the sink at
    /// once.
    ///
    /// Must be at least 4 so that the longest escape always fits after a
    /// flush.
    pub output_capacity: usize,
}

impl TranscoderOptions {
    /// Uses `capacity` for both buffers.
    #[must_use]
    pub fn with_buffer_capacity(capacity: usize) -> Self {
        Self {
            input_capacity: capacity,
            output_capacity: capacity,
        }
    }

    /// Checks that the capacities can drive a run.
    ///
    /// # Errors
    ///
    /// Returns the first capacity found to be too small.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.input_capacity == 0 {
            return Err(OptionsError::InputCapacity(self.input_capacity));
        }
        if self.output_capacity < MAX_ESCAPE_LEN {
            return Err(OptionsError::OutputCapacity(self.output_capacity));
        }
        Ok(())
    }
}

impl Default for TranscoderOptions {
    fn default() -> Self {
        Self::with_buffer_capacity(DEFAULT_BUFFER_CAPACITY)
    }
}
