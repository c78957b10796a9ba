//! [`Triangle`]: exactly 4 points, closed (first == last).

use std::fmt;

use crate::common::Dimension;
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::linestring::{check_child_dimensions, write_aggregate};
use crate::geometry::point::Point;

/// A closed 4-point ring: 3 distinct corners plus the repeated first point.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    dimension: Dimension,
    points: [Point; 4],
}

impl Triangle {
    /// Build a triangle from exactly 4 points with `points[0] == points[3]`.
    pub fn new(dimension: Dimension, points: [Point; 4]) -> EwkbResult<Self> {
        check_child_dimensions("Triangle", dimension, &points)?;
        if points[0] != points[3] {
            return Err(EwkbError::InvalidStructure {
                variant: "Triangle",
                detail: "first point does not equal last point".to_string(),
            });
        }
        Ok(Triangle { dimension, points })
    }

    /// This triangle's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The 4 points; `points()[0] == points()[3]`.
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(1); // ring count, always 1
        w.write_u32(4); // point count, always 4
        for p in &self.points {
            p.encode_body(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let ring_count = r.read_u32("Triangle ring count")?;
        let _ = ring_count; // always 1, not otherwise validated
        let point_count = r.read_u32("Triangle point count")? as usize;
        if point_count != 4 {
            return Err(EwkbError::InvalidStructure {
                variant: "Triangle",
                detail: format!("expected exactly 4 points, got {}", point_count),
            });
        }
        r.require_count("Triangle point data", 4, dimension.point_width())?;
        let points: [Point; 4] = [
            Point::decode_body(r, dimension)?,
            Point::decode_body(r, dimension)?,
            Point::decode_body(r, dimension)?,
            Point::decode_body(r, dimension)?,
        ];
        Triangle::new(dimension, points)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "Triangle", self.dimension, &self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(Dimension::Xy, vec![x, y]).unwrap()
    }

    #[test]
    fn rejects_open_ring() {
        let pts = [pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0)];
        assert!(Triangle::new(Dimension::Xy, pts).is_err());
    }

    #[test]
    fn round_trip() {
        let pts = [pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), pt(0.0, 0.0)];
        let tri = Triangle::new(Dimension::Xy, pts).unwrap();
        let mut w = Writer::new();
        tri.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = Triangle::decode_body(&mut r, Dimension::Xy).unwrap();
        assert_eq!(decoded, tri);
        assert_eq!(r.remaining(), 0);
    }
}
