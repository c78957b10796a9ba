//! [`Tin`]: a triangulated irregular network, a sequence of [`Triangle`]s.

use std::fmt;

use crate::common::{Dimension, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::linestring::write_aggregate;
use crate::geometry::triangle::Triangle;
use crate::geometry::{read_and_discard_child_header, write_child_header};

/// Ordered sequence of triangles (`len >= 1`).
#[derive(Clone, Debug, PartialEq)]
pub struct Tin {
    dimension: Dimension,
    triangles: Vec<Triangle>,
}

impl Tin {
    /// Build from at least one triangle, all of `dimension`.
    pub fn new(dimension: Dimension, triangles: Vec<Triangle>) -> EwkbResult<Self> {
        if triangles.is_empty() {
            return Err(EwkbError::InvalidStructure {
                variant: "TIN",
                detail: "expected at least 1 triangle, got 0".to_string(),
            });
        }
        for t in &triangles {
            if t.dimension() != dimension {
                return Err(EwkbError::DimensionMismatch {
                    expected: dimension,
                    found: t.dimension(),
                });
            }
        }
        Ok(Tin {
            dimension,
            triangles,
        })
    }

    /// This TIN's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The triangles in order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(self.triangles.len() as u32);
        for t in &self.triangles {
            write_child_header(w, GeometryType::Triangle, self.dimension);
            t.encode_body(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let count = r.read_u32("TIN count")? as usize;
        r.require_count("TIN data", count, 5 + 8)?;
        let mut triangles = Vec::with_capacity(count);
        for _ in 0..count {
            read_and_discard_child_header(r)?;
            triangles.push(Triangle::decode_body(r, dimension)?);
        }
        Tin::new(dimension, triangles)
    }
}

impl fmt::Display for Tin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "TIN", self.dimension, &self.triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> crate::geometry::point::Point {
        crate::geometry::point::Point::new(Dimension::Xy, vec![x, y]).unwrap()
    }

    #[test]
    fn round_trip() {
        let tri = Triangle::new(
            Dimension::Xy,
            [pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), pt(0.0, 0.0)],
        )
        .unwrap();
        let tin = Tin::new(Dimension::Xy, vec![tri]).unwrap();
        let mut w = Writer::new();
        tin.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = Tin::decode_body(&mut r, Dimension::Xy).unwrap();
        assert_eq!(decoded, tin);
        assert_eq!(r.remaining(), 0);
    }
}
