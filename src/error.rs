use thiserror::Error;

/// Result alias for checked slice operations and decoders.
pub type SliceResult<T> = Result<T, SliceError>;

/// Errors reported by the checked counterparts of slice operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliceError {
    /// Byte index past the end of the view.
    #[error("index {index} out of range for slice of length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the view at the time of the call.
        len: usize,
    },
    /// Attempt to drop more bytes than the view holds.
    #[error("cannot remove {n} bytes from slice of length {len}")]
    PrefixOutOfBounds {
        /// Requested prefix length.
        n: usize,
        /// Length of the view at the time of the call.
        len: usize,
    },
    /// Input ended before a complete value could be decoded.
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes required to finish decoding.
        needed: usize,
        /// Bytes left in the input.
        remaining: usize,
    },
    /// Varint longer than its target width allows.
    #[error("malformed varint for {bits}-bit value")]
    MalformedVarint {
        /// Width of the integer being decoded.
        bits: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_offsets() {
        let err = SliceError::PrefixOutOfBounds { n: 7, len: 3 };
        assert_eq!(err.to_string(), "cannot remove 7 bytes from slice of length 3");

        let err = SliceError::Truncated {
            needed: 4,
            remaining: 1,
        };
        assert!(err.to_string().contains("needed 4 bytes"));
    }
}
