//! [`MultiPoint`]: a homogeneous sequence of [`Point`]s, each child
//! carrying a redundant per-child byte-order marker and type header.

use std::fmt;

use crate::common::{Dimension, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::linestring::write_aggregate;
use crate::geometry::point::Point;
use crate::geometry::{read_and_discard_child_header, write_child_header};

/// Homogeneous ordered sequence of points (`len >= 1`).
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPoint {
    dimension: Dimension,
    points: Vec<Point>,
}

impl MultiPoint {
    /// Build from at least one point, all of `dimension`.
    pub fn new(dimension: Dimension, points: Vec<Point>) -> EwkbResult<Self> {
        if points.is_empty() {
            return Err(EwkbError::InvalidStructure {
                variant: "MultiPoint",
                detail: "expected at least 1 point, got 0".to_string(),
            });
        }
        for p in &points {
            if p.dimension() != dimension {
                return Err(EwkbError::DimensionMismatch {
                    expected: dimension,
                    found: p.dimension(),
                });
            }
        }
        Ok(MultiPoint { dimension, points })
    }

    /// This multi-point's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The member points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(self.points.len() as u32);
        for p in &self.points {
            write_child_header(w, GeometryType::Point, self.dimension);
            p.encode_body(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let count = r.read_u32("MultiPoint count")? as usize;
        r.require_count("MultiPoint data", count, 5 + dimension.point_width())?;
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            read_and_discard_child_header(r)?;
            points.push(Point::decode_body(r, dimension)?);
        }
        MultiPoint::new(dimension, points)
    }
}

impl fmt::Display for MultiPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "MultiPoint", self.dimension, &self.points)
    }
}
