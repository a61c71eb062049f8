// src/error.rs

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WireError {
    /// VarInt value does not fit in the supported 48-bit range.
    ValueTooLarge(u64),

    /// Decode was attempted on a zero-length buffer.
    EmptyInput,

    /// The buffer ended before the current field could be fully read.
    TruncatedInput { needed: usize, available: usize },

    /// Witness text was not valid standard base64.
    InvalidBase64,

    // --- Strict DER (BIP66) ---
    /// DER payload shorter than 8 bytes (or no hash type byte at all).
    TooShort,

    /// DER payload longer than 72 bytes.
    TooLong,

    /// Byte 0 was not the SEQUENCE tag (0x30).
    ExpectedSequence,

    /// Byte 1 does not match the payload length minus 2.
    InvalidSequenceLength,

    /// R was not tagged as INTEGER (0x02).
    ExpectedInteger,

    RLengthZero,

    /// R length runs past the point where the S header must start.
    RLengthTooLong,

    /// S was not tagged as INTEGER (0x02).
    ExpectedInteger2,

    SLengthZero,

    /// R and S lengths do not add up to the payload length.
    SLengthInvalid,

    RNegative,

    /// R carries a leading 0x00 that DER does not require.
    RExcessivelyPadded,

    SNegative,

    /// S carries a leading 0x00 that DER does not require.
    SExcessivelyPadded,

    /// Hash type (with 0x80 masked off) is not SIGHASH_ALL, NONE or SINGLE.
    InvalidHashType(u8),

    /// S lies in the upper half of the curve order.
    HighS,

    /// R or S is zero or not below the curve order.
    InvalidScalar,
}

// Manual implementation of Display for no_std environments.
impl core::fmt::Display for WireError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValueTooLarge(v) => write!(f, "VarInt value too large: {} (max 2^48 - 1)", v),
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::TruncatedInput { needed, available } => write!(
                f,
                "Truncated input: needed {} bytes, {} available",
                needed, available
            ),
            Self::InvalidBase64 => write!(f, "Invalid base64 witness encoding"),
            Self::TooShort => write!(f, "DER sequence too short"),
            Self::TooLong => write!(f, "DER sequence too long"),
            Self::ExpectedSequence => write!(f, "Expected DER sequence"),
            Self::InvalidSequenceLength => write!(f, "DER sequence length is invalid"),
            Self::ExpectedInteger => write!(f, "Expected DER integer"),
            Self::RLengthZero => write!(f, "R length is zero"),
            Self::RLengthTooLong => write!(f, "R length is too long"),
            Self::ExpectedInteger2 => write!(f, "Expected DER integer (2)"),
            Self::SLengthZero => write!(f, "S length is zero"),
            Self::SLengthInvalid => write!(f, "S length is invalid"),
            Self::RNegative => write!(f, "R value is negative"),
            Self::RExcessivelyPadded => write!(f, "R value excessively padded"),
            Self::SNegative => write!(f, "S value is negative"),
            Self::SExcessivelyPadded => write!(f, "S value excessively padded"),
            Self::InvalidHashType(h) => write!(f, "Invalid hashType 0x{:02x}", h),
            Self::HighS => write!(f, "S value is not in the lower half of the curve order"),
            Self::InvalidScalar => write!(f, "R or S is not a valid secp256k1 scalar"),
        }
    }
}

// Enable standard Error trait if the "std" feature is on.
#[cfg(feature = "std")]
impl std::error::Error for WireError {}

/// Reports a rejected input when the `tracing` feature is enabled; otherwise a no-op.
#[inline]
pub(crate) fn reject<T>(what: &'static str, input_len: usize, err: WireError) -> Result<T, WireError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(codec = what, input_len, error = %err, "rejected input");
    #[cfg(not(feature = "tracing"))]
    let _ = (what, input_len);
    Err(err)
}

/// Like [`reject`], for encoders handed a scalar rather than a buffer.
#[inline]
pub(crate) fn reject_value<T>(what: &'static str, value: u64, err: WireError) -> Result<T, WireError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(codec = what, value, error = %err, "rejected value");
    #[cfg(not(feature = "tracing"))]
    let _ = (what, value);
    Err(err)
}
