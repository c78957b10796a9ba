//! The closed 14-variant geometry union and the per-child header helpers
//! shared by every container that embeds one (spec.md §4.5, §4.6, §4.8).

mod circularstring;
mod compoundcurve;
mod curvepolygon;
mod geometrycollection;
mod linestring;
mod multicurve;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod multisurface;
mod point;
mod polygon;
mod polyhedralsurface;
mod tin;
mod triangle;

pub use circularstring::CircularString;
pub use compoundcurve::{CompoundCurve, CompoundCurveElement};
pub use curvepolygon::{CurvePolygon, CurveRing};
pub use geometrycollection::GeometryCollection;
pub use linestring::{LineString, LinearRing};
pub use multicurve::{CurveElement, MultiCurve};
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use multisurface::{MultiSurface, SurfaceElement};
pub use point::Point;
pub use polygon::Polygon;
pub use polyhedralsurface::PolyhedralSurface;
pub use tin::Tin;
pub use triangle::Triangle;

use std::fmt;

use crate::common::{Dimension, GeometryHeader, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};

/// The closed union of all 14 concrete geometry kinds named in spec.md §3.
///
/// Pattern matching against this type gives exhaustiveness checking for
/// every encoder and decoder that dispatches on geometry kind, per the
/// Design Notes in spec.md §9.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// A single coordinate tuple.
    Point(Point),
    /// An open sequence of points.
    LineString(LineString),
    /// An outer shell plus holes.
    Polygon(Polygon),
    /// A homogeneous sequence of points.
    MultiPoint(MultiPoint),
    /// A homogeneous sequence of line strings.
    MultiLineString(MultiLineString),
    /// A homogeneous sequence of polygons.
    MultiPolygon(MultiPolygon),
    /// A heterogeneous sequence of any of these 14 variants.
    GeometryCollection(GeometryCollection),
    /// An odd-length sequence of arc-triples.
    CircularString(CircularString),
    /// A sequence of line string / circular string elements.
    CompoundCurve(CompoundCurve),
    /// A polygon whose rings may be straight, circular, or compound.
    CurvePolygon(CurvePolygon),
    /// A sequence of line string / circular string / compound curve elements.
    MultiCurve(MultiCurve),
    /// A sequence of polygon / curve polygon elements.
    MultiSurface(MultiSurface),
    /// A sequence of polygon facets.
    PolyhedralSurface(PolyhedralSurface),
    /// A sequence of triangles.
    Tin(Tin),
    /// A closed 4-point ring.
    Triangle(Triangle),
}

impl Geometry {
    /// This geometry's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dimension(),
            Geometry::LineString(g) => g.dimension(),
            Geometry::Polygon(g) => g.dimension(),
            Geometry::MultiPoint(g) => g.dimension(),
            Geometry::MultiLineString(g) => g.dimension(),
            Geometry::MultiPolygon(g) => g.dimension(),
            Geometry::GeometryCollection(g) => g.dimension(),
            Geometry::CircularString(g) => g.dimension(),
            Geometry::CompoundCurve(g) => g.dimension(),
            Geometry::CurvePolygon(g) => g.dimension(),
            Geometry::MultiCurve(g) => g.dimension(),
            Geometry::MultiSurface(g) => g.dimension(),
            Geometry::PolyhedralSurface(g) => g.dimension(),
            Geometry::Tin(g) => g.dimension(),
            Geometry::Triangle(g) => g.dimension(),
        }
    }

    /// This geometry's wire type code.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
            Geometry::CircularString(_) => GeometryType::CircularString,
            Geometry::CompoundCurve(_) => GeometryType::CompoundCurve,
            Geometry::CurvePolygon(_) => GeometryType::CurvePolygon,
            Geometry::MultiCurve(_) => GeometryType::MultiCurve,
            Geometry::MultiSurface(_) => GeometryType::MultiSurface,
            Geometry::PolyhedralSurface(_) => GeometryType::PolyhedralSurface,
            Geometry::Tin(_) => GeometryType::Tin,
            Geometry::Triangle(_) => GeometryType::Triangle,
        }
    }

    /// Encode this geometry's body (no byte-order marker, no type header).
    pub(crate) fn encode_body(&self, w: &mut Writer) {
        match self {
            Geometry::Point(g) => g.encode_body(w),
            Geometry::LineString(g) => g.encode_body(w),
            Geometry::Polygon(g) => g.encode_body(w),
            Geometry::MultiPoint(g) => g.encode_body(w),
            Geometry::MultiLineString(g) => g.encode_body(w),
            Geometry::MultiPolygon(g) => g.encode_body(w),
            Geometry::GeometryCollection(g) => g.encode_body(w),
            Geometry::CircularString(g) => g.encode_body(w),
            Geometry::CompoundCurve(g) => g.encode_body(w),
            Geometry::CurvePolygon(g) => g.encode_body(w),
            Geometry::MultiCurve(g) => g.encode_body(w),
            Geometry::MultiSurface(g) => g.encode_body(w),
            Geometry::PolyhedralSurface(g) => g.encode_body(w),
            Geometry::Tin(g) => g.encode_body(w),
            Geometry::Triangle(g) => g.encode_body(w),
        }
    }

    /// Decode a geometry body given an externally-resolved type and dimension,
    /// as done by every container that has already committed to a child's
    /// kind from its own position or header (spec.md §4.5, §4.6).
    pub(crate) fn decode_body(
        r: &mut Reader,
        geometry_type: GeometryType,
        dimension: Dimension,
    ) -> EwkbResult<Self> {
        Ok(match geometry_type {
            GeometryType::Point => Geometry::Point(Point::decode_body(r, dimension)?),
            GeometryType::LineString => Geometry::LineString(LineString::decode_body(r, dimension)?),
            GeometryType::Polygon => Geometry::Polygon(Polygon::decode_body(r, dimension)?),
            GeometryType::MultiPoint => Geometry::MultiPoint(MultiPoint::decode_body(r, dimension)?),
            GeometryType::MultiLineString => {
                Geometry::MultiLineString(MultiLineString::decode_body(r, dimension)?)
            }
            GeometryType::MultiPolygon => {
                Geometry::MultiPolygon(MultiPolygon::decode_body(r, dimension)?)
            }
            GeometryType::GeometryCollection => {
                Geometry::GeometryCollection(GeometryCollection::decode_body(r)?)
            }
            GeometryType::CircularString => {
                Geometry::CircularString(CircularString::decode_body(r, dimension)?)
            }
            GeometryType::CompoundCurve => {
                Geometry::CompoundCurve(CompoundCurve::decode_body(r, dimension)?)
            }
            GeometryType::CurvePolygon => {
                Geometry::CurvePolygon(CurvePolygon::decode_body(r, dimension)?)
            }
            GeometryType::MultiCurve => Geometry::MultiCurve(MultiCurve::decode_body(r, dimension)?),
            GeometryType::MultiSurface => {
                Geometry::MultiSurface(MultiSurface::decode_body(r, dimension)?)
            }
            GeometryType::PolyhedralSurface => {
                Geometry::PolyhedralSurface(PolyhedralSurface::decode_body(r, dimension)?)
            }
            GeometryType::Tin => Geometry::Tin(Tin::decode_body(r, dimension)?),
            GeometryType::Triangle => Geometry::Triangle(Triangle::decode_body(r, dimension)?),
        })
    }

    /// Decode a full self-describing geometry: byte-order marker, 4-byte
    /// header (type, dimension, SRID flag), optional embedded SRID (consumed
    /// but not retained), then the body — as every [`GeometryCollection`]
    /// child is encoded, per spec.md §4.8.
    pub(crate) fn decode_self_describing(r: &mut Reader) -> EwkbResult<Self> {
        let marker = r.read_u8("geometry byte-order marker")?;
        if marker != crate::common::Endianness::LittleEndian as u8 {
            return Err(EwkbError::UnsupportedByteOrder { marker });
        }
        let header = GeometryHeader::decode(r.read_u32("geometry type header")?)?;
        if header.has_srid {
            r.read_u32("embedded SRID")?;
        }
        Geometry::decode_body(r, header.geometry_type, header.dimension)
    }

    fn encode_self_describing(&self, w: &mut Writer) {
        w.write_u8(crate::common::Endianness::LittleEndian as u8);
        w.write_u32(GeometryHeader::encode(
            self.geometry_type(),
            self.dimension(),
            false,
        ));
        self.encode_body(w);
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(g) => write!(f, "{}", g),
            Geometry::LineString(g) => write!(f, "{}", g),
            Geometry::Polygon(g) => write!(f, "{}", g),
            Geometry::MultiPoint(g) => write!(f, "{}", g),
            Geometry::MultiLineString(g) => write!(f, "{}", g),
            Geometry::MultiPolygon(g) => write!(f, "{}", g),
            Geometry::GeometryCollection(g) => write!(f, "{}", g),
            Geometry::CircularString(g) => write!(f, "{}", g),
            Geometry::CompoundCurve(g) => write!(f, "{}", g),
            Geometry::CurvePolygon(g) => write!(f, "{}", g),
            Geometry::MultiCurve(g) => write!(f, "{}", g),
            Geometry::MultiSurface(g) => write!(f, "{}", g),
            Geometry::PolyhedralSurface(g) => write!(f, "{}", g),
            Geometry::Tin(g) => write!(f, "{}", g),
            Geometry::Triangle(g) => write!(f, "{}", g),
        }
    }
}

/// Write a child's 1-byte byte-order marker and 4-byte type header, as every
/// per-child-header container does (spec.md §4.5, §4.6). SRID is never set
/// on a child header written by this crate.
pub(crate) fn write_child_header(w: &mut Writer, geometry_type: GeometryType, dimension: Dimension) {
    w.write_u8(crate::common::Endianness::LittleEndian as u8);
    w.write_u32(GeometryHeader::encode(geometry_type, dimension, false));
}

/// Read a child's byte-order marker and 4-byte header, returning the decoded
/// header for dispatch in the heterogeneous containers (spec.md §4.6).
pub(crate) fn read_child_header(r: &mut Reader) -> EwkbResult<GeometryHeader> {
    let marker = r.read_u8("child byte-order marker")?;
    if marker != crate::common::Endianness::LittleEndian as u8 {
        return Err(EwkbError::UnsupportedByteOrder { marker });
    }
    GeometryHeader::decode(r.read_u32("child type header")?)
}

/// Read and discard a child's byte-order marker and type header: the
/// homogeneous containers know the child type from their own position, so
/// the embedded header is redundant but still present on the wire (spec.md
/// §4.5).
pub(crate) fn read_and_discard_child_header(r: &mut Reader) -> EwkbResult<()> {
    read_child_header(r).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(Dimension::Xy, vec![x, y]).unwrap()
    }

    #[test]
    fn dispatches_self_describing_round_trip() {
        let geom = Geometry::Point(pt(3.0, 4.0));
        let mut w = Writer::new();
        geom.encode_self_describing(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = Geometry::decode_self_describing(&mut r).unwrap();
        assert_eq!(decoded, geom);
        assert_eq!(r.remaining(), 0);
    }
}
