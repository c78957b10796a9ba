//! [`MultiSurface`]: a heterogeneous sequence of `Polygon | CurvePolygon`
//! elements.

use std::fmt;

use crate::common::{Dimension, GeometryType};
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};
use crate::geometry::curvepolygon::CurvePolygon;
use crate::geometry::polygon::Polygon;
use crate::geometry::{read_child_header, write_child_header};

/// One element of a [`MultiSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceElement {
    /// A straight-edged polygon.
    Polygon(Polygon),
    /// A polygon with one or more curved rings.
    CurvePolygon(CurvePolygon),
}

impl SurfaceElement {
    fn dimension(&self) -> Dimension {
        match self {
            SurfaceElement::Polygon(p) => p.dimension(),
            SurfaceElement::CurvePolygon(p) => p.dimension(),
        }
    }

    fn geometry_type(&self) -> GeometryType {
        match self {
            SurfaceElement::Polygon(_) => GeometryType::Polygon,
            SurfaceElement::CurvePolygon(_) => GeometryType::CurvePolygon,
        }
    }

    fn encode_body(&self, w: &mut Writer) {
        match self {
            SurfaceElement::Polygon(p) => p.encode_body(w),
            SurfaceElement::CurvePolygon(p) => p.encode_body(w),
        }
    }
}

impl fmt::Display for SurfaceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceElement::Polygon(p) => write!(f, "{}", p),
            SurfaceElement::CurvePolygon(p) => write!(f, "{}", p),
        }
    }
}

/// Ordered sequence of `Polygon | CurvePolygon`. Dimension fixes on the
/// first element appended. Per spec.md §4.6, a child that carries the SRID
/// flag has its 4-byte SRID skipped (not validated) before its body.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiSurface {
    dimension: Dimension,
    elements: Vec<SurfaceElement>,
}

impl MultiSurface {
    /// An empty multi-surface with dimension not yet fixed.
    pub fn empty() -> Self {
        MultiSurface {
            dimension: Dimension::Unset,
            elements: Vec::new(),
        }
    }

    /// This multi-surface's coordinate layout (`Unset` until the first add).
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The elements in order.
    pub fn elements(&self) -> &[SurfaceElement] {
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

    /// Append a straight-edged polygon, fixing dimension on first call.
    pub fn add_polygon(&mut self, polygon: Polygon) -> EwkbResult<()> {
        self.fix_or_check_dimension(polygon.dimension())?;
        self.elements.push(SurfaceElement::Polygon(polygon));
        Ok(())
    }

    /// Append a curve polygon, fixing dimension on first call.
    pub fn add_curve_polygon(&mut self, polygon: CurvePolygon) -> EwkbResult<()> {
        self.fix_or_check_dimension(polygon.dimension())?;
        self.elements.push(SurfaceElement::CurvePolygon(polygon));
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
        let count = r.read_u32("MultiSurface count")? as usize;
        r.require_count("MultiSurface data", count, 5 + 4)?;
        let mut surface = MultiSurface::empty();
        for _ in 0..count {
            let header = read_child_header(r)?;
            if header.has_srid {
                r.read_u32("MultiSurface child SRID")?;
            }
            match header.geometry_type {
                GeometryType::Polygon => {
                    surface.add_polygon(Polygon::decode_body(r, dimension)?)?;
                }
                GeometryType::CurvePolygon => {
                    surface.add_curve_polygon(CurvePolygon::decode_body(r, dimension)?)?;
                }
                other => {
                    return Err(EwkbError::InvalidStructure {
                        variant: "MultiSurface",
                        detail: format!("child type {} not allowed", other.name()),
                    })
                }
            }
        }
        Ok(surface)
    }
}

impl fmt::Display for MultiSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::geometry::linestring::write_aggregate(
            f,
            "MultiSurface",
            self.dimension,
            &self.elements,
        )
    }
}
