//! [`CompoundCurve`]: a sequence of [`LineString`] or [`CircularString`]
//! elements, incrementally built.

use std::fmt;

use crate::common::{Dimension, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::circularstring::CircularString;
use crate::geometry::linestring::LineString;
use crate::geometry::{read_child_header, write_child_header};

/// One element of a [`CompoundCurve`].
#[derive(Clone, Debug, PartialEq)]
pub enum CompoundCurveElement {
    /// A straight segment.
    LineString(LineString),
    /// An arc segment.
    CircularString(CircularString),
}

impl CompoundCurveElement {
    fn dimension(&self) -> Dimension {
        match self {
            CompoundCurveElement::LineString(l) => l.dimension(),
            CompoundCurveElement::CircularString(c) => c.dimension(),
        }
    }

    fn geometry_type(&self) -> GeometryType {
        match self {
            CompoundCurveElement::LineString(_) => GeometryType::LineString,
            CompoundCurveElement::CircularString(_) => GeometryType::CircularString,
        }
    }

    fn encode_body(&self, w: &mut Writer) {
        match self {
            CompoundCurveElement::LineString(l) => l.encode_body(w),
            CompoundCurveElement::CircularString(c) => c.encode_body(w),
        }
    }
}

impl fmt::Display for CompoundCurveElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundCurveElement::LineString(l) => write!(f, "{}", l),
            CompoundCurveElement::CircularString(c) => write!(f, "{}", c),
        }
    }
}

/// Ordered sequence of `LineString | CircularString` elements. Dimension is
/// fixed by the first element appended; continuity between consecutive
/// elements is assumed but not enforced, per spec.
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundCurve {
    dimension: Dimension,
    elements: Vec<CompoundCurveElement>,
}

impl CompoundCurve {
    /// An empty compound curve with dimension not yet fixed.
    pub fn empty() -> Self {
        CompoundCurve {
            dimension: Dimension::Unset,
            elements: Vec::new(),
        }
    }

    /// This curve's coordinate layout (`Unset` until the first element is added).
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The elements in order.
    pub fn elements(&self) -> &[CompoundCurveElement] {
        &self.elements
    }

    fn fix_or_check_dimension(&mut self, found: Dimension) -> EwkbResult<()> {
        if self.dimension == Dimension::Unset {
            self.dimension = found;
        } else if self.dimension != found {
            return Err(EwkbError::DimensionMismatch {
                expected: self.dimension,
                found,
            });
        }
        Ok(())
    }

    /// Append a line string segment, fixing dimension on first call.
    pub fn add_line_string(&mut self, line: LineString) -> EwkbResult<()> {
        self.fix_or_check_dimension(line.dimension())?;
        self.elements.push(CompoundCurveElement::LineString(line));
        Ok(())
    }

    /// Append a circular string segment, fixing dimension on first call.
    pub fn add_circular_string(&mut self, arc: CircularString) -> EwkbResult<()> {
        self.fix_or_check_dimension(arc.dimension())?;
        self.elements
            .push(CompoundCurveElement::CircularString(arc));
        Ok(())
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        w.write_u32(self.elements.len() as u32);
        for e in &self.elements {
            write_child_header(w, e.geometry_type(), self.dimension);
            e.encode_body(w);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let count = r.read_u32("CompoundCurve count")? as usize;
        r.require_count("CompoundCurve data", count, 5 + 4)?;
        let mut curve = CompoundCurve::empty();
        for _ in 0..count {
            let header = read_child_header(r)?;
            match header.geometry_type {
                GeometryType::LineString => {
                    curve.add_line_string(LineString::decode_body(r, dimension)?)?;
                }
                GeometryType::CircularString => {
                    curve.add_circular_string(CircularString::decode_body(r, dimension)?)?;
                }
                other => {
                    return Err(EwkbError::InvalidStructure {
                        variant: "CompoundCurve",
                        detail: format!("child type {} not allowed", other.name()),
                    })
                }
            }
        }
        Ok(curve)
    }
}

impl fmt::Display for CompoundCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::geometry::linestring::write_aggregate(
            f,
            "CompoundCurve",
            self.dimension,
            &self.elements,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(Dimension::Xy, vec![x, y]).unwrap()
    }

    #[test]
    fn dimension_fixed_on_first_add() {
        let mut curve = CompoundCurve::empty();
        curve
            .add_circular_string(
                CircularString::new(Dimension::Xy, vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(1.0, 0.0)])
                    .unwrap(),
            )
            .unwrap();
        let bad = LineString::new(
            Dimension::Xyz,
            vec![
                Point::new(Dimension::Xyz, vec![0.0, 0.0, 0.0]).unwrap(),
                Point::new(Dimension::Xyz, vec![1.0, 1.0, 1.0]).unwrap(),
            ],
        )
        .unwrap();
        assert!(curve.add_line_string(bad).is_err());
    }

    #[test]
    fn round_trip() {
        let mut curve = CompoundCurve::empty();
        curve
            .add_circular_string(
                CircularString::new(Dimension::Xy, vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(1.0, 0.0)])
                    .unwrap(),
            )
            .unwrap();
        curve
            .add_line_string(
                LineString::new(Dimension::Xy, vec![pt(1.0, 0.0), pt(2.0, 0.0)]).unwrap(),
            )
            .unwrap();
        let mut w = Writer::new();
        curve.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = CompoundCurve::decode_body(&mut r, Dimension::Xy).unwrap();
        assert_eq!(decoded, curve);
        assert_eq!(r.remaining(), 0);
    }
}
