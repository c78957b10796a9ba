//! [`PolyhedralSurface`]: an ordered sequence of [`Polygon`] facets.

use std::fmt;

use crate::common::{Dimension, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::linestring::write_aggregate;
use crate::geometry::polygon::Polygon;
use crate::geometry::{read_and_discard_child_header, write_child_header};

/// Ordered sequence of polygon facets (`len >= 1`).
#[derive(Clone, Debug, PartialEq)]
pub struct PolyhedralSurface {
    dimension: Dimension,
    facets: Vec<Polygon>,
}

impl PolyhedralSurface {
    /// Build from at least one facet, all of `dimension`.
    pub fn new(dimension: Dimension, facets: Vec<Polygon>) -> EwkbResult<Self> {
        if facets.is_empty() {
            return Err(EwkbError::InvalidStructure {
                variant: "PolyhedralSurface",
                detail: "expected at least 1 facet, got 0".to_string(),
            });
        }
        for f in &facets {
            if f.dimension() != dimension {
                return Err(EwkbError::DimensionMismatch {
                    expected: dimension,
                    found: f.dimension(),
                });
            }
        }
        Ok(PolyhedralSurface { dimension, facets })
    }

    /// This surface's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The facets in order.
    pub fn facets(&self) -> &[Polygon] {
        &self.facets
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(self.facets.len() as u32);
        for f in &self.facets {
            write_child_header(w, GeometryType::Polygon, self.dimension);
            f.encode_body(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let count = r.read_u32("PolyhedralSurface count")? as usize;
        r.require_count("PolyhedralSurface data", count, 5 + 4)?;
        let mut facets = Vec::with_capacity(count);
        for _ in 0..count {
            read_and_discard_child_header(r)?;
            facets.push(Polygon::decode_body(r, dimension)?);
        }
        PolyhedralSurface::new(dimension, facets)
    }
}

impl fmt::Display for PolyhedralSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "PolyhedralSurface", self.dimension, &self.facets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::linestring::LinearRing;
    use crate::geometry::point::Point;

    #[test]
    fn round_trip() {
        let pts = vec![
            Point::new(Dimension::Xyz, vec![0.0, 0.0, 0.0]).unwrap(),
            Point::new(Dimension::Xyz, vec![1.0, 0.0, 0.0]).unwrap(),
            Point::new(Dimension::Xyz, vec![0.0, 1.0, 0.0]).unwrap(),
            Point::new(Dimension::Xyz, vec![0.0, 0.0, 0.0]).unwrap(),
        ];
        let ring = LinearRing::new(Dimension::Xyz, pts).unwrap();
        let poly = Polygon::new(Dimension::Xyz, vec![ring]).unwrap();
        let surf = PolyhedralSurface::new(Dimension::Xyz, vec![poly]).unwrap();
        let mut w = Writer::new();
        surf.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = PolyhedralSurface::decode_body(&mut r, Dimension::Xyz).unwrap();
        assert_eq!(decoded, surf);
        assert_eq!(r.remaining(), 0);
    }
}
