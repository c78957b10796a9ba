//! [`MultiPolygon`]: a homogeneous sequence of [`Polygon`]s.

use std::fmt;

use crate::common::{Dimension, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::linestring::write_aggregate;
use crate::geometry::polygon::Polygon;
use crate::geometry::{read_and_discard_child_header, write_child_header};

/// Homogeneous ordered sequence of polygons (`len >= 1`).
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPolygon {
    dimension: Dimension,
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Build from at least one polygon, all of `dimension`.
    pub fn new(dimension: Dimension, polygons: Vec<Polygon>) -> EwkbResult<Self> {
        if polygons.is_empty() {
            return Err(EwkbError::InvalidStructure {
                variant: "MultiPolygon",
                detail: "expected at least 1 polygon, got 0".to_string(),
            });
        }
        for p in &polygons {
            if p.dimension() != dimension {
                return Err(EwkbError::DimensionMismatch {
                    expected: dimension,
                    found: p.dimension(),
                });
            }
        }
        Ok(MultiPolygon { dimension, polygons })
    }

    /// This multi-polygon's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The member polygons in order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(self.polygons.len() as u32);
        for p in &self.polygons {
            write_child_header(w, GeometryType::Polygon, self.dimension);
            p.encode_body(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let count = r.read_u32("MultiPolygon count")? as usize;
        r.require_count("MultiPolygon data", count, 5 + 4)?;
        let mut polygons = Vec::with_capacity(count);
        for _ in 0..count {
            read_and_discard_child_header(r)?;
            polygons.push(Polygon::decode_body(r, dimension)?);
        }
        MultiPolygon::new(dimension, polygons)
    }
}

impl fmt::Display for MultiPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "MultiPolygon", self.dimension, &self.polygons)
    }
}
