//! [`LineString`] and [`LinearRing`]: sequences of [`Point`]s.

use std::fmt;

use crate::common::Dimension;
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::point::Point;

/// An ordered sequence of points, `len >= 1`, all sharing one [`Dimension`].
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
    dimension: Dimension,
    points: Vec<Point>,
}

impl LineString {
    /// Build a line string from at least one point, all of `dimension`.
    pub fn new(dimension: Dimension, points: Vec<Point>) -> EwkbResult<Self> {
        if points.is_empty() {
            return Err(EwkbError::InvalidStructure {
                variant: "LineString",
                detail: "expected at least 1 point, got 0".to_string(),
            });
        }
        check_child_dimensions("LineString", dimension, &points)?;
        Ok(LineString { dimension, points })
    }

    /// This line string's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        encode_point_sequence(w, &self.points);
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let points = decode_point_sequence(r, dimension, "LineString point data")?;
        LineString::new(dimension, points)
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "LineString", self.dimension, &self.points)
    }
}

/// A closed line string (`len >= 3`, first point == last point by value).
/// Not itself a top-level wire type; appears only as a [`super::polygon::Polygon`] child.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRing {
    dimension: Dimension,
    points: Vec<Point>,
}

impl LinearRing {
    /// Build a ring, requiring at least 3 points and a closed first/last pair.
    pub fn new(dimension: Dimension, points: Vec<Point>) -> EwkbResult<Self> {
        if points.len() < 3 {
            return Err(EwkbError::InvalidStructure {
                variant: "LinearRing",
                detail: format!("expected at least 3 points, got {}", points.len()),
            });
        }
        check_child_dimensions("LinearRing", dimension, &points)?;
        if points.first() != points.last() {
            return Err(EwkbError::InvalidStructure {
                variant: "LinearRing",
                detail: "first point does not equal last point".to_string(),
            });
        }
        Ok(LinearRing { dimension, points })
    }

    /// This ring's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The points in order; `points()[0] == points().last()`.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        encode_point_sequence(w, &self.points);
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let points = decode_point_sequence(r, dimension, "LinearRing point data")?;
        LinearRing::new(dimension, points)
    }
}

impl fmt::Display for LinearRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "LinearRing", self.dimension, &self.points)
    }
}

pub(crate) fn check_child_dimensions(
    variant: &'static str,
    expected: Dimension,
    points: &[Point],
) -> EwkbResult<()> {
    for p in points {
        if p.dimension() != expected {
            return Err(EwkbError::DimensionMismatch {
                expected,
                found: p.dimension(),
            });
        }
    }
    let _ = variant;
    Ok(())
}

pub(crate) fn encode_point_sequence(w: &mut Writer, points: &[Point]) {
    w.write_u32(points.len() as u32);
    for p in points {
        p.encode_body(w);
    }
}

pub(crate) fn decode_point_sequence(
    r: &mut Reader,
    dimension: Dimension,
    context: &'static str,
) -> EwkbResult<Vec<Point>> {
    let count = r.read_u32("sequence count")? as usize;
    r.require_count(context, count, dimension.point_width())?;
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(Point::decode_body(r, dimension)?);
    }
    Ok(points)
}

pub(crate) fn write_aggregate(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    dimension: Dimension,
    children: &[impl fmt::Display],
) -> fmt::Result {
    let children = children
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    write!(f, "({} {} [{}])", name, dimension, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(Dimension::Xy, vec![x, y]).unwrap()
    }

    #[test]
    fn ring_requires_closure() {
        let pts = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)];
        assert!(LinearRing::new(Dimension::Xy, pts).is_err());
    }

    #[test]
    fn ring_round_trip() {
        let pts = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 0.0)];
        let ring = LinearRing::new(Dimension::Xy, pts).unwrap();
        let mut w = Writer::new();
        ring.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = LinearRing::decode_body(&mut r, Dimension::Xy).unwrap();
        assert_eq!(decoded, ring);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn linestring_ten_points_byte_count() {
        let pts: Vec<Point> = (0..10).map(|i| pt(i as f64, i as f64)).collect();
        let ls = LineString::new(Dimension::Xy, pts).unwrap();
        let mut w = Writer::new();
        ls.encode_body(&mut w);
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 4 + 160);
    }
}
