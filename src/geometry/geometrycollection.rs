//! [`GeometryCollection`]: a heterogeneous aggregate of any of the 14
//! geometry variants, each self-describing on the wire.

use std::fmt;

use crate::common::Dimension;
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::Geometry;

/// Ordered sequence of arbitrary [`Geometry`] values. Unlike every other
/// aggregate in this crate, an empty collection is valid (spec.md §9 open
/// questions note the `len >= 1` standardization applies only to the other
/// aggregates), and each child is fully self-describing on the wire rather
/// than inheriting the collection's declared dimension (spec.md §4.8).
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryCollection {
    dimension: Dimension,
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Build a collection from zero or more geometries, all of one
    /// [`Dimension`]; `dimension` is `Unset` iff `geometries` is empty.
    pub fn new(geometries: Vec<Geometry>) -> EwkbResult<Self> {
        let dimension = geometries
            .first()
            .map(Geometry::dimension)
            .unwrap_or(Dimension::Unset);
        for g in &geometries {
            if g.dimension() != dimension {
                return Err(EwkbError::DimensionMismatch {
                    expected: dimension,
                    found: g.dimension(),
                });
            }
        }
        Ok(GeometryCollection {
            dimension,
            geometries,
        })
    }

    /// This collection's coordinate layout (`Unset` iff empty).
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The member geometries in order.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(self.geometries.len() as u32);
        for g in &self.geometries {
            g.encode_self_describing(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader) -> EwkbResult<Self> {
        let count = r.read_u32("GeometryCollection count")? as usize;
        r.require_count("GeometryCollection data", count, 9)?;
        let mut geometries = Vec::with_capacity(count);
        for _ in 0..count {
            geometries.push(Geometry::decode_self_describing(r)?);
        }
        GeometryCollection::new(geometries)
    }
}

impl fmt::Display for GeometryCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::geometry::linestring::write_aggregate(
            f,
            "GeometryCollection",
            self.dimension,
            &self.geometries,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;
    use crate::geometry::Geometry;

    #[test]
    fn empty_is_valid() {
        let gc = GeometryCollection::new(vec![]).unwrap();
        assert_eq!(gc.dimension(), Dimension::Unset);
        assert!(gc.geometries().is_empty());
    }

    #[test]
    fn round_trip_mixed_children() {
        let gc = GeometryCollection::new(vec![
            Geometry::Point(Point::new(Dimension::Xy, vec![1.0, 2.0]).unwrap()),
            Geometry::Point(Point::new(Dimension::Xy, vec![3.0, 4.0]).unwrap()),
        ])
        .unwrap();
        let mut w = Writer::new();
        gc.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = GeometryCollection::decode_body(&mut r).unwrap();
        assert_eq!(decoded, gc);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn rejects_mismatched_child_dimension() {
        let pts_xyz = vec![
            Point::new(Dimension::Xyz, vec![0.0, 0.0, 0.0]).unwrap(),
            Point::new(Dimension::Xyz, vec![1.0, 1.0, 1.0]).unwrap(),
        ];
        let err = GeometryCollection::new(vec![
            Geometry::Point(Point::new(Dimension::Xy, vec![1.0, 2.0]).unwrap()),
            Geometry::LineString(
                crate::geometry::LineString::new(Dimension::Xyz, pts_xyz).unwrap(),
            ),
        ])
        .unwrap_err();
        assert!(matches!(err, EwkbError::DimensionMismatch { .. }));
    }
}
