//! [`MultiLineString`]: a homogeneous sequence of [`LineString`]s.

use std::fmt;

use crate::common::{Dimension, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::linestring::{write_aggregate, LineString};
use crate::geometry::{read_and_discard_child_header, write_child_header};

/// Homogeneous ordered sequence of line strings (`len >= 1`).
#[derive(Clone, Debug, PartialEq)]
pub struct MultiLineString {
    dimension: Dimension,
    lines: Vec<LineString>,
}

impl MultiLineString {
    /// Build from at least one line string, all of `dimension`.
    pub fn new(dimension: Dimension, lines: Vec<LineString>) -> EwkbResult<Self> {
        if lines.is_empty() {
            return Err(EwkbError::InvalidStructure {
                variant: "MultiLineString",
                detail: "expected at least 1 line string, got 0".to_string(),
            });
        }
        for l in &lines {
            if l.dimension() != dimension {
                return Err(EwkbError::DimensionMismatch {
                    expected: dimension,
                    found: l.dimension(),
                });
            }
        }
        Ok(MultiLineString { dimension, lines })
    }

    /// This multi-line-string's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The member line strings in order.
    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(self.lines.len() as u32);
        for l in &self.lines {
            write_child_header(w, GeometryType::LineString, self.dimension);
            l.encode_body(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let count = r.read_u32("MultiLineString count")? as usize;
        r.require_count(
            "MultiLineString data",
            count,
            5 + 4 + dimension.point_width(),
        )?;
        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            read_and_discard_child_header(r)?;
            lines.push(LineString::decode_body(r, dimension)?);
        }
        MultiLineString::new(dimension, lines)
    }
}

impl fmt::Display for MultiLineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_aggregate(f, "MultiLineString", self.dimension, &self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;

    #[test]
    fn round_trip() {
        let line = LineString::new(
            Dimension::Xy,
            vec![
                Point::new(Dimension::Xy, vec![0.0, 0.0]).unwrap(),
                Point::new(Dimension::Xy, vec![1.0, 1.0]).unwrap(),
            ],
        )
        .unwrap();
        let mls = MultiLineString::new(Dimension::Xy, vec![line.clone(), line]).unwrap();
        let mut w = Writer::new();
        mls.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = MultiLineString::decode_body(&mut r, Dimension::Xy).unwrap();
        assert_eq!(decoded, mls);
        assert_eq!(r.remaining(), 0);
    }
}
