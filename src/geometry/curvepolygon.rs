//! [`CurvePolygon`]: rings that may be straight, circular, or compound.

use std::fmt;

use crate::common::{Dimension, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::circularstring::CircularString;
use crate::geometry::compoundcurve::CompoundCurve;
use crate::geometry::linestring::LinearRing;
use crate::geometry::{read_child_header, write_child_header};

/// One ring of a [`CurvePolygon`].
#[derive(Clone, Debug, PartialEq)]
pub enum CurveRing {
    /// A straight-edged closed ring.
    LinearRing(LinearRing),
    /// A single closed arc.
    CircularString(CircularString),
    /// A mixed straight/arc closed ring.
    CompoundCurve(CompoundCurve),
}

impl CurveRing {
    fn dimension(&self) -> Dimension {
        match self {
            CurveRing::LinearRing(r) => r.dimension(),
            CurveRing::CircularString(c) => c.dimension(),
            CurveRing::CompoundCurve(c) => c.dimension(),
        }
    }

    fn geometry_type(&self) -> GeometryType {
        match self {
            CurveRing::LinearRing(_) => GeometryType::LineString,
            CurveRing::CircularString(_) => GeometryType::CircularString,
            CurveRing::CompoundCurve(_) => GeometryType::CompoundCurve,
        }
    }

    fn encode_body(&self, w: &mut Writer) {
        match self {
            CurveRing::LinearRing(r) => r.encode_body(w),
            CurveRing::CircularString(c) => c.encode_body(w),
            CurveRing::CompoundCurve(c) => c.encode_body(w),
        }
    }
}

impl fmt::Display for CurveRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveRing::LinearRing(r) => write!(f, "{}", r),
            CurveRing::CircularString(c) => write!(f, "{}", c),
            CurveRing::CompoundCurve(c) => write!(f, "{}", c),
        }
    }
}

/// Ordered sequence of ring-like elements (`LinearRing | CircularString |
/// CompoundCurve`). Dimension fixes on the first ring appended.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvePolygon {
    dimension: Dimension,
    rings: Vec<CurveRing>,
}

impl CurvePolygon {
    /// An empty curve polygon with dimension not yet fixed.
    pub fn empty() -> Self {
        CurvePolygon {
            dimension: Dimension::Unset,
            rings: Vec::new(),
        }
    }

    /// This polygon's coordinate layout (`Unset` until the first ring is added).
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The rings in order.
    pub fn rings(&self) -> &[CurveRing] {
        &self.rings
    }

    fn fix_or_check_dimension(&mut self, found: Dimension) -> EwkbResult<()> {
        if self.dimension == Dimension::Unset {
            self.dimension = found;
        } else if self.dimension != found {
            return Err(EwkbError::DimensionMismatch {
                expected: self.dimension,
                found,
            });
        }
        Ok(())
    }

    /// Append a straight-edged ring, fixing dimension on first call.
    pub fn add_linear_ring(&mut self, ring: LinearRing) -> EwkbResult<()> {
        self.fix_or_check_dimension(ring.dimension())?;
        self.rings.push(CurveRing::LinearRing(ring));
        Ok(())
    }

    /// Append an all-arc ring, fixing dimension on first call.
    pub fn add_circular_string(&mut self, ring: CircularString) -> EwkbResult<()> {
        self.fix_or_check_dimension(ring.dimension())?;
        self.rings.push(CurveRing::CircularString(ring));
        Ok(())
    }

    /// Append a mixed straight/arc ring, fixing dimension on first call.
    pub fn add_compound_curve(&mut self, ring: CompoundCurve) -> EwkbResult<()> {
        self.fix_or_check_dimension(ring.dimension())?;
        self.rings.push(CurveRing::CompoundCurve(ring));
        Ok(())
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(self.rings.len() as u32);
        for ring in &self.rings {
            write_child_header(w, ring.geometry_type(), self.dimension);
            ring.encode_body(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let count = r.read_u32("CurvePolygon count")? as usize;
        r.require_count("CurvePolygon data", count, 5 + 4)?;
        let mut poly = CurvePolygon::empty();
        for _ in 0..count {
            let header = read_child_header(r)?;
            match header.geometry_type {
                GeometryType::LineString => {
                    poly.add_linear_ring(LinearRing::decode_body(r, dimension)?)?;
                }
                GeometryType::CircularString => {
                    poly.add_circular_string(CircularString::decode_body(r, dimension)?)?;
                }
                GeometryType::CompoundCurve => {
                    poly.add_compound_curve(CompoundCurve::decode_body(r, dimension)?)?;
                }
                other => {
                    return Err(EwkbError::InvalidStructure {
                        variant: "CurvePolygon",
                        detail: format!("child type {} not allowed", other.name()),
                    })
                }
            }
        }
        Ok(poly)
    }
}

impl fmt::Display for CurvePolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::geometry::linestring::write_aggregate(f, "CurvePolygon", self.dimension, &self.rings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(Dimension::Xy, vec![x, y]).unwrap()
    }

    #[test]
    fn round_trip_with_circular_ring() {
        let mut poly = CurvePolygon::empty();
        poly.add_circular_string(
            CircularString::new(
                Dimension::Xy,
                vec![pt(0.0, 0.0), pt(2.0, 2.0), pt(4.0, 0.0), pt(2.0, -2.0), pt(0.0, 0.0)],
            )
            .unwrap(),
        )
        .unwrap();
        let mut w = Writer::new();
        poly.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = CurvePolygon::decode_body(&mut r, Dimension::Xy).unwrap();
        assert_eq!(decoded, poly);
        assert_eq!(r.remaining(), 0);
    }
}
