//! [`CircularString`]: arc-triples, an odd-length point sequence.

use std::fmt;

use crate::common::Dimension;
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::linestring::{
    check_child_dimensions, decode_point_sequence, encode_point_sequence, write_aggregate,
};
use crate::geometry::point::Point;

/// Ordered sequence of points, length odd and `>= 3`. Successive triples
/// (start, mid, end) denote one arc each; successive arcs share endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct CircularString {
    dimension: Dimension,
    points: Vec<Point>,
}

impl CircularString {
    /// Build a circular string; `points.len()` must be odd and `>= 3`.
    pub fn new(dimension: Dimension, points: Vec<Point>) -> EwkbResult<Self> {
        if points.len() < 3 || points.len() % 2 == 0 {
            return Err(EwkbError::InvalidStructure {
                variant: "CircularString",
                detail: format!(
                    "requires odd count >= 3, got {}",
                    points.len()
                ),
            });
        }
        check_child_dimensions("CircularString", dimension, &points)?;
        Ok(CircularString { dimension, points })
    }

    /// This circular string's coordinate layout.
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
        let points = decode_point_sequence(r, dimension, "CircularString point data")?;
        CircularString::new(dimension, points)
    }
}

impl fmt::Display for CircularString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "CircularString", self.dimension, &self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(Dimension::Xy, vec![x, y]).unwrap()
    }

    #[test]
    fn rejects_even_count() {
        let pts = vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(1.0, 0.0), pt(2.0, 0.0)];
        assert!(CircularString::new(Dimension::Xy, pts).is_err());
    }

    #[test]
    fn rejects_too_few() {
        let pts = vec![pt(0.0, 0.0), pt(1.0, 1.0)];
        assert!(CircularString::new(Dimension::Xy, pts).is_err());
    }

    #[test]
    fn round_trip() {
        let pts = vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(1.0, 0.0)];
        let cs = CircularString::new(Dimension::Xy, pts).unwrap();
        let mut w = Writer::new();
        cs.encode_body(&mut w);
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 4 + 48);
        let mut r = Reader::new(&bytes);
        let decoded = CircularString::decode_body(&mut r, Dimension::Xy).unwrap();
        assert_eq!(decoded, cs);
    }

    #[test]
    fn decoded_arc_points_stay_equidistant_from_center() {
        let center = (2.0, 1.0_f64);
        let radius = 5.0_f64;
        let pts: Vec<Point> = [0.0, std::f64::consts::FRAC_PI_2, std::f64::consts::PI]
            .iter()
            .map(|angle| pt(center.0 + radius * angle.cos(), center.1 + radius * angle.sin()))
            .collect();
        let cs = CircularString::new(Dimension::Xy, pts).unwrap();
        let mut w = Writer::new();
        cs.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = CircularString::decode_body(&mut r, Dimension::Xy).unwrap();
        for p in decoded.points() {
            let dx = p.coords()[0] - center.0;
            let dy = p.coords()[1] - center.1;
            approx::assert_relative_eq!((dx * dx + dy * dy).sqrt(), radius, epsilon = 1e-9);
        }
    }
}
