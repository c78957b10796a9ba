//! [`Polygon`]: an outer shell ring plus zero or more hole rings.

use std::fmt;

use crate::common::Dimension;
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::linestring::{write_aggregate, LinearRing};

/// Ordered sequence of rings (`len >= 1`); the first is the outer shell,
/// the rest are holes. All rings share one [`Dimension`].
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    dimension: Dimension,
    rings: Vec<LinearRing>,
}

impl Polygon {
    /// Build a polygon from at least one ring, all of `dimension`.
    pub fn new(dimension: Dimension, rings: Vec<LinearRing>) -> EwkbResult<Self> {
        if rings.is_empty() {
            return Err(EwkbError::InvalidStructure {
                variant: "Polygon",
                detail: "expected at least 1 ring, got 0".to_string(),
            });
        }
        for ring in &rings {
            if ring.dimension() != dimension {
                return Err(EwkbError::DimensionMismatch {
                    expected: dimension,
                    found: ring.dimension(),
                });
            }
        }
        Ok(Polygon { dimension, rings })
    }

    /// This polygon's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The outer shell, followed by any holes.
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(self.rings.len() as u32);
        for ring in &self.rings {
            ring.encode_body(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let count = r.read_u32("Polygon ring count")? as usize;
        r.require_count("Polygon ring data", count, 4 + 3 * dimension.point_width())?;
        let mut rings = Vec::with_capacity(count);
        for _ in 0..count {
            rings.push(LinearRing::decode_body(r, dimension)?);
        }
        Polygon::new(dimension, rings)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "Polygon", self.dimension, &self.rings)
    }
}
