//! The error taxonomy for EWKB encoding and decoding.

use crate::common::Dimension;

/// Errors produced while constructing, encoding, or decoding EWKB geometries.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EwkbError {
    /// The buffer was shorter than the fixed or declared size for a header,
    /// a count, or a body.
    #[error("insufficient bytes for {context}: needed {needed}, found {available} remaining at offset {offset}")]
    InsufficientBytes {
        /// What was being read when the buffer ran out, e.g. `"LineString point data"`.
        context: &'static str,
        /// The number of bytes required to satisfy the read.
        needed: usize,
        /// The number of bytes actually remaining in the buffer.
        available: usize,
        /// The cursor offset at which the short read was detected.
        offset: usize,
    },

    /// Hex decoding of the envelope input failed.
    #[error("malformed hex input: {0}")]
    MalformedHex(String),

    /// The byte-order marker was not `0x01` (little-endian).
    #[error("unsupported byte order marker 0x{marker:02x}; only little-endian EWKB (0x01) is supported")]
    UnsupportedByteOrder {
        /// The byte-order marker actually read.
        marker: u8,
    },

    /// The type code did not match any of the 14 known geometry types.
    #[error("unknown geometry type code {code}")]
    UnknownGeometryType {
        /// The unrecognized type code (lower 16 bits of the 4-byte header).
        code: u32,
    },

    /// A structural rule was violated: ring closure, odd-count, fixed-count,
    /// minimum-length, or an out-of-allowed-set child type.
    #[error("invalid structure in {variant}: {detail}")]
    InvalidStructure {
        /// The variant that detected the violation, e.g. `"LinearRing"`.
        variant: &'static str,
        /// A short diagnostic naming observed vs. expected values.
        detail: String,
    },

    /// A child added to (or decoded into) an aggregate disagreed with the
    /// aggregate's already-fixed `Dimension`.
    #[error("dimension mismatch: container is {expected:?}, child is {found:?}")]
    DimensionMismatch {
        /// The dimension the aggregate had already fixed.
        expected: Dimension,
        /// The dimension of the child that disagreed.
        found: Dimension,
    },
}

impl From<hex::FromHexError> for EwkbError {
    fn from(err: hex::FromHexError) -> Self {
        EwkbError::MalformedHex(err.to_string())
    }
}

/// Convenience alias for results produced by this crate.
pub type EwkbResult<T> = Result<T, EwkbError>;
