//! [`MultiCurve`]: a heterogeneous sequence of `LineString | CircularString
//! | CompoundCurve` elements.

use std::fmt;

use crate::common::{Dimension, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::circularstring::CircularString;
use crate::geometry::compoundcurve::CompoundCurve;
use crate::geometry::linestring::LineString;
use crate::geometry::{read_child_header, write_child_header};

/// One element of a [`MultiCurve`].
#[derive(Clone, Debug, PartialEq)]
pub enum CurveElement {
    /// A straight curve.
    LineString(LineString),
    /// A single arc.
    CircularString(CircularString),
    /// A mixed straight/arc curve.
    CompoundCurve(CompoundCurve),
}

impl CurveElement {
    fn dimension(&self) -> Dimension {
        match self {
            CurveElement::LineString(l) => l.dimension(),
            CurveElement::CircularString(c) => c.dimension(),
            CurveElement::CompoundCurve(c) => c.dimension(),
        }
    }

    fn geometry_type(&self) -> GeometryType {
        match self {
            CurveElement::LineString(_) => GeometryType::LineString,
            CurveElement::CircularString(_) => GeometryType::CircularString,
            CurveElement::CompoundCurve(_) => GeometryType::CompoundCurve,
        }
    }

    fn encode_body(&self, w: &mut Writer) {
        match self {
            CurveElement::LineString(l) => l.encode_body(w),
            CurveElement::CircularString(c) => c.encode_body(w),
            CurveElement::CompoundCurve(c) => c.encode_body(w),
        }
    }
}

impl fmt::Display for CurveElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveElement::LineString(l) => write!(f, "{}", l),
            CurveElement::CircularString(c) => write!(f, "{}", c),
            CurveElement::CompoundCurve(c) => write!(f, "{}", c),
        }
    }
}

/// Ordered sequence of `LineString | CircularString | CompoundCurve`.
/// Dimension fixes on the first element appended.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiCurve {
    dimension: Dimension,
    elements: Vec<CurveElement>,
}

impl MultiCurve {
    /// An empty multi-curve with dimension not yet fixed.
    pub fn empty() -> Self {
        MultiCurve {
            dimension: Dimension::Unset,
            elements: Vec::new(),
        }
    }

    /// This multi-curve's coordinate layout (`Unset` until the first add).
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The elements in order.
    pub fn elements(&self) -> &[CurveElement] {
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

    /// Append a line string, fixing dimension on first call.
    pub fn add_line_string(&mut self, line: LineString) -> EwkbResult<()> {
        self.fix_or_check_dimension(line.dimension())?;
        self.elements.push(CurveElement::LineString(line));
        Ok(())
    }

    /// Append a circular string, fixing dimension on first call.
    pub fn add_circular_string(&mut self, arc: CircularString) -> EwkbResult<()> {
        self.fix_or_check_dimension(arc.dimension())?;
        self.elements.push(CurveElement::CircularString(arc));
        Ok(())
    }

    /// Append a compound curve, fixing dimension on first call.
    pub fn add_compound_curve(&mut self, curve: CompoundCurve) -> EwkbResult<()> {
        self.fix_or_check_dimension(curve.dimension())?;
        self.elements.push(CurveElement::CompoundCurve(curve));
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
        let count = r.read_u32("MultiCurve count")? as usize;
        r.require_count("MultiCurve data", count, 5 + 4)?;
        let mut curve = MultiCurve::empty();
        for _ in 0..count {
            let header = read_child_header(r)?;
            match header.geometry_type {
                GeometryType::LineString => {
                    curve.add_line_string(LineString::decode_body(r, dimension)?)?;
                }
                GeometryType::CircularString => {
                    curve.add_circular_string(CircularString::decode_body(r, dimension)?)?;
                }
                GeometryType::CompoundCurve => {
                    curve.add_compound_curve(CompoundCurve::decode_body(r, dimension)?)?;
                }
                other => {
                    return Err(EwkbError::InvalidStructure {
                        variant: "MultiCurve",
                        detail: format!("child type {} not allowed", other.name()),
                    })
                }
            }
        }
        Ok(curve)
    }
}

impl fmt::Display for MultiCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::geometry::linestring::write_aggregate(f, "MultiCurve", self.dimension, &self.elements)
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
    fn round_trip_mixed() {
        let mut mc = MultiCurve::empty();
        mc.add_line_string(LineString::new(Dimension::Xy, vec![pt(0.0, 0.0), pt(1.0, 1.0)]).unwrap())
            .unwrap();
        mc.add_circular_string(
            CircularString::new(Dimension::Xy, vec![pt(1.0, 1.0), pt(2.0, 2.0), pt(3.0, 1.0)])
                .unwrap(),
        )
        .unwrap();
        let mut w = Writer::new();
        mc.encode_body(&mut w);
        let bytes = w.into_bytes();
        let mut r = Reader::new(&bytes);
        let decoded = MultiCurve::decode_body(&mut r, Dimension::Xy).unwrap();
        assert_eq!(decoded, mc);
        assert_eq!(r.remaining(), 0);
    }
}
