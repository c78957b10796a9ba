//! Dimension tags, geometry-type codes, and the 4-byte EWKB header.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::EwkbError;

/// Bit flag for an EWKB geometry carrying a Z coordinate.
const EWKB_FLAG_Z: u8 = 0x80;
/// Bit flag for an EWKB geometry carrying an M coordinate.
const EWKB_FLAG_M: u8 = 0x40;
/// Bit flag for an EWKB geometry with an embedded SRID.
const EWKB_FLAG_SRID: u8 = 0x20;

/// The coordinate layout of a geometry.
///
/// Every concrete value fixes a point's arity (and therefore its encoded
/// byte width, `arity * 8`). `Unset` is an internal sentinel used only
/// during incremental construction of the heterogeneous containers
/// (`CompoundCurve`, `CurvePolygon`, `MultiCurve`, `MultiSurface`) before
/// their first child fixes the real dimension; it is never a legal
/// dimension on an encoded or decoded geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// No dimension fixed yet (pre-first-add sentinel only).
    Unset,
    /// X, Y.
    Xy,
    /// X, Y, Z.
    Xyz,
    /// X, Y, M.
    Xym,
    /// X, Y, Z, M.
    Xyzm,
}

impl Dimension {
    /// Number of coordinates per point in this layout, or 0 for `Unset`.
    pub fn arity(&self) -> usize {
        match self {
            Dimension::Unset => 0,
            Dimension::Xy => 2,
            Dimension::Xyz | Dimension::Xym => 3,
            Dimension::Xyzm => 4,
        }
    }

    /// Encoded byte width of one point in this layout.
    pub fn point_width(&self) -> usize {
        self.arity() * 8
    }

    fn has_z(&self) -> bool {
        matches!(self, Dimension::Xyz | Dimension::Xyzm)
    }

    fn has_m(&self) -> bool {
        matches!(self, Dimension::Xym | Dimension::Xyzm)
    }

    /// Reconstruct a `Dimension` from the Z/M header flags, per spec.md §4.1:
    /// Z∧M→XYZM, M only→XYM, Z only→XYZ, neither→XY.
    fn from_flags(z: bool, m: bool) -> Dimension {
        match (z, m) {
            (true, true) => Dimension::Xyzm,
            (false, true) => Dimension::Xym,
            (true, false) => Dimension::Xyz,
            (false, false) => Dimension::Xy,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Dimension::Unset => "UNSET",
            Dimension::Xy => "XY",
            Dimension::Xyz => "XYZ",
            Dimension::Xym => "XYM",
            Dimension::Xyzm => "XYZM",
        };
        f.write_str(s)
    }
}

/// The byte-order marker that leads every self-describing EWKB geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Endianness {
    /// `0x01`: little-endian. The only order this crate ever encodes.
    LittleEndian = 0x01,
    /// `0x02`: big-endian. Always rejected on decode.
    BigEndian = 0x02,
}

/// The 32-bit wire code identifying one of the 14 concrete geometry kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum GeometryType {
    /// Code 1.
    Point = 1,
    /// Code 2.
    LineString = 2,
    /// Code 3.
    Polygon = 3,
    /// Code 4.
    MultiPoint = 4,
    /// Code 5.
    MultiLineString = 5,
    /// Code 6.
    MultiPolygon = 6,
    /// Code 7.
    GeometryCollection = 7,
    /// Code 8.
    CircularString = 8,
    /// Code 9.
    CompoundCurve = 9,
    /// Code 10.
    CurvePolygon = 10,
    /// Code 11.
    MultiCurve = 11,
    /// Code 12.
    MultiSurface = 12,
    /// Code 15.
    PolyhedralSurface = 15,
    /// Code 16.
    Tin = 16,
    /// Code 17.
    Triangle = 17,
}

impl GeometryType {
    /// Human-readable variant name, used by `Display` impls and error text.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
            GeometryType::CircularString => "CircularString",
            GeometryType::CompoundCurve => "CompoundCurve",
            GeometryType::CurvePolygon => "CurvePolygon",
            GeometryType::MultiCurve => "MultiCurve",
            GeometryType::MultiSurface => "MultiSurface",
            GeometryType::PolyhedralSurface => "PolyhedralSurface",
            GeometryType::Tin => "TIN",
            GeometryType::Triangle => "Triangle",
        }
    }
}

/// A decoded 4-byte geometry header: type code, dimension, and whether an
/// SRID follows immediately after.
#[derive(Clone, Copy, Debug)]
pub struct GeometryHeader {
    /// The decoded geometry-type code.
    pub geometry_type: GeometryType,
    /// The decoded coordinate layout.
    pub dimension: Dimension,
    /// Whether the SRID flag (0x20) was set in the header's high byte.
    pub has_srid: bool,
}

impl GeometryHeader {
    /// Pack this header's type code, dimension, and SRID flag into the
    /// little-endian 4-byte wire form described in spec.md §4.1.
    pub fn encode(geometry_type: GeometryType, dimension: Dimension, has_srid: bool) -> u32 {
        let code: u32 = geometry_type.into();
        let mut flags: u8 = 0;
        if has_srid {
            flags |= EWKB_FLAG_SRID;
        }
        if dimension.has_m() {
            flags |= EWKB_FLAG_M;
        }
        if dimension.has_z() {
            flags |= EWKB_FLAG_Z;
        }
        code | ((flags as u32) << 24)
    }

    /// Decode a 4-byte little-endian header word into its parts. Per
    /// spec.md §4.1, the type code is read from the low 16 bits and the
    /// flags from byte 3, so codes beyond 16 bits are never mistaken for
    /// flag bits.
    pub fn decode(word: u32) -> Result<GeometryHeader, EwkbError> {
        let code = word & 0xFFFF;
        let flags = ((word >> 24) & 0xFF) as u8;
        let geometry_type =
            GeometryType::try_from(code).map_err(|_| EwkbError::UnknownGeometryType { code })?;
        let has_srid = flags & EWKB_FLAG_SRID != 0;
        let dimension = Dimension::from_flags(flags & EWKB_FLAG_Z != 0, flags & EWKB_FLAG_M != 0);
        Ok(GeometryHeader {
            geometry_type,
            dimension,
            has_srid,
        })
    }
}

/// The default SRID (4326, WGS 84) applied only by callers that explicitly
/// opt in via [`crate::envelope::Envelope::with_default_srid`]. The codec
/// itself never writes an SRID unless the caller set one.
pub const DEFAULT_SRID: u32 = 4326;
