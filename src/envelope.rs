//! [`Envelope`]: the top-level self-describing EWKB record (spec.md §3, §4.9).

use std::fmt;

use crate::common::{Endianness, GeometryHeader, DEFAULT_SRID};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::Geometry;

/// The one effective write-time setting spec.md §6 allows: the compiled-in
/// default byte order. Mirrors the shape of the teacher's
/// `writer::WriteOptions`, but carries no field that could select
/// big-endian output — spec.md §1 names that an explicit Non-goal, so
/// unlike the teacher's options type this one is not user-constructible
/// with an alternate byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    _private: (),
}

impl EncodeOptions {
    /// The byte order this crate's encoder always uses.
    pub fn endianness(&self) -> Endianness {
        Endianness::LittleEndian
    }
}

/// Byte-order, type, dimension, optional SRID, and exactly one inner
/// geometry. Owns the hex framing that is the only boundary named in
/// spec.md §6.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    srid: Option<u32>,
    geometry: Geometry,
}

impl Envelope {
    /// Wrap a geometry with no SRID. The codec never writes an SRID unless
    /// the caller explicitly sets one, per spec.md §9.
    pub fn new(geometry: Geometry) -> Self {
        Envelope {
            srid: None,
            geometry,
        }
    }

    /// Wrap a geometry, tagging it with an explicit SRID.
    pub fn with_srid(geometry: Geometry, srid: u32) -> Self {
        Envelope {
            srid: Some(srid),
            geometry,
        }
    }

    /// Wrap a geometry, tagging it with the default SRID (4326, WGS 84).
    /// Convenience only: the codec itself has no notion of a default.
    pub fn with_default_srid(geometry: Geometry) -> Self {
        Envelope::with_srid(geometry, DEFAULT_SRID)
    }

    /// The byte-order this envelope encodes with. Always little-endian;
    /// this crate's encoder never emits big-endian EWKB (spec.md §1, §6).
    pub fn byte_order(&self) -> Endianness {
        Endianness::LittleEndian
    }

    /// The SRID this envelope carries, if any.
    pub fn srid(&self) -> Option<u32> {
        self.srid
    }

    /// The wrapped geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Consume the envelope, returning the wrapped geometry.
    pub fn into_geometry(self) -> Geometry {
        self.geometry
    }

    /// Encode to raw EWKB bytes using the compiled-in default [`EncodeOptions`].
    pub fn encode(&self) -> Vec<u8> {
        self.encode_with_options(&EncodeOptions::default())
    }

    /// Encode to raw EWKB bytes: byte-order marker, 4-byte type header (SRID
    /// flag set iff an SRID is configured), optional 4-byte SRID, then the
    /// inner geometry's body with no duplicated header (spec.md §4.9).
    pub fn encode_with_options(&self, options: &EncodeOptions) -> Vec<u8> {
        let mut w = Writer::new();
        w.write_u8(options.endianness() as u8);
        w.write_u32(GeometryHeader::encode(
            self.geometry.geometry_type(),
            self.geometry.dimension(),
            self.srid.is_some(),
        ));
        if let Some(srid) = self.srid {
            w.write_u32(srid);
        }
        self.geometry.encode_body(&mut w);
        w.into_bytes()
    }

    /// Decode raw EWKB bytes per the state machine in spec.md §4.9: read the
    /// byte-order marker (rejecting anything but little-endian), the 4-byte
    /// header, an optional SRID, then dispatch to the inner body decoder.
    pub fn decode(bytes: &[u8]) -> EwkbResult<Self> {
        let mut r = Reader::new(bytes);
        let marker = r.read_u8("envelope byte-order marker")?;
        if marker != Endianness::LittleEndian as u8 {
            return Err(EwkbError::UnsupportedByteOrder { marker });
        }
        let header = GeometryHeader::decode(r.read_u32("envelope type header")?)?;
        let srid = if header.has_srid {
            Some(r.read_u32("envelope SRID")?)
        } else {
            None
        };
        let geometry = Geometry::decode_body(&mut r, header.geometry_type, header.dimension)?;
        Ok(Envelope { srid, geometry })
    }

    /// Encode to lowercase hex, as the relational driver boundary expects
    /// (spec.md §6).
    pub fn to_hex(&self) -> String {
        hex::encode(self.encode())
    }

    /// Hex-decode then parse, per spec.md §4.9: the input must hex-decode to
    /// at least 9 bytes (byte-order + type header + SRID) to be worth
    /// attempting as an envelope.
    pub fn from_hex(hex_str: &str) -> EwkbResult<Self> {
        let bytes = hex::decode(hex_str)?;
        Envelope::decode(&bytes)
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Envelope byte_order={:?} type={} dimension={} srid={} {})",
            self.byte_order(),
            self.geometry.geometry_type().name(),
            self.geometry.dimension(),
            self.srid
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string()),
            self.geometry
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Dimension;
    use crate::geometry::Point;

    #[test]
    fn round_trip_with_srid() {
        let point = Geometry::Point(Point::new(Dimension::Xy, vec![3.0, 4.0]).unwrap());
        let envelope = Envelope::with_srid(point, 4326);
        let hex = envelope.to_hex();
        let decoded = Envelope::from_hex(&hex).unwrap();
        assert_eq!(decoded, envelope);
        assert_eq!(decoded.srid(), Some(4326));
    }

    #[test]
    fn round_trip_without_srid() {
        let point = Geometry::Point(Point::new(Dimension::Xy, vec![1.0, 2.0]).unwrap());
        let envelope = Envelope::new(point);
        let hex = envelope.to_hex();
        let decoded = Envelope::from_hex(&hex).unwrap();
        assert_eq!(decoded, envelope);
        assert_eq!(decoded.srid(), None);
    }

    #[test]
    fn rejects_big_endian_marker() {
        let mut bytes = vec![0x02u8];
        bytes.extend_from_slice(&[1, 0, 0, 0]);
        let err = Envelope::decode(&bytes).unwrap_err();
        assert!(matches!(err, EwkbError::UnsupportedByteOrder { marker: 0x02 }));
    }

    #[test]
    fn rejects_odd_length_hex() {
        let err = Envelope::from_hex("abc").unwrap_err();
        assert!(matches!(err, EwkbError::MalformedHex(_)));
    }

    #[test]
    fn default_srid_constant_is_4326() {
        let point = Geometry::Point(Point::new(Dimension::Xy, vec![0.0, 0.0]).unwrap());
        let envelope = Envelope::with_default_srid(point);
        assert_eq!(envelope.srid(), Some(4326));
    }
}
