//! The boundary with an external relational-persistence layer (spec.md §6).
//!
//! This is the only contract the rest of the system sees: given an
//! [`Envelope`], produce hex-encoded bytes; given hex-encoded bytes,
//! reconstruct an envelope. Everything upstream — an actual
//! `tokio-postgres`/`rusqlite` column adapter, CLI glue, generated query
//! code — is out of scope per spec.md §1 and is not built here.

use crate::envelope::Envelope;
use crate::error::EwkbResult;

/// Serialize an envelope to the lowercase hex string a database driver
/// writes as a column value. Total: an envelope built through this crate's
/// validating constructors cannot fail to encode (spec.md §6).
pub fn to_driver_value(envelope: &Envelope) -> String {
    envelope.to_hex()
}

/// Parse a hex-encoded column value read back from a database driver into
/// an envelope. Fails with [`crate::error::EwkbError::MalformedHex`],
/// `InsufficientBytes`, `UnsupportedByteOrder`, `UnknownGeometryType`,
/// `InvalidStructure`, or `DimensionMismatch`, per spec.md §6.
pub fn from_driver_value(hex_bytes: &str) -> EwkbResult<Envelope> {
    Envelope::from_hex(hex_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Dimension;
    use crate::geometry::{Geometry, Point};

    #[test]
    fn round_trips_through_driver_value() {
        let envelope = Envelope::with_default_srid(Geometry::Point(
            Point::new(Dimension::Xy, vec![3.0, 4.0]).unwrap(),
        ));
        let value = to_driver_value(&envelope);
        let decoded = from_driver_value(&value).unwrap();
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(from_driver_value("not hex").is_err());
    }
}
