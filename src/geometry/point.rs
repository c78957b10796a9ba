//! The [`Point`] variant: a tuple of doubles matching its [`Dimension`].

use std::fmt;

use crate::common::Dimension;
use crate::cursor::{Reader, Writer};
use crate::error::{EwkbError, EwkbResult};

/// An ordered tuple of coordinates, `(x, y, [z], [m])`.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    dimension: Dimension,
    coords: Vec<f64>,
}

impl Point {
    /// Build a point, checking that `coords.len()` matches `dimension`'s arity.
    pub fn new(dimension: Dimension, coords: Vec<f64>) -> EwkbResult<Self> {
        if coords.len() != dimension.arity() {
            return Err(EwkbError::InvalidStructure {
                variant: "Point",
                detail: format!(
                    "expected {} coordinates for {:?}, got {}",
                    dimension.arity(),
                    dimension,
                    coords.len()
                ),
            });
        }
        Ok(Point { dimension, coords })
    }

    /// This point's coordinate layout.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The coordinates in declaration order: X, Y, [Z], [M].
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub(crate) fn encode_body(&self, w: &mut Writer) {
        for c in &self.coords {
            w.write_f64(*c);
        }
    }

    pub(crate) fn decode_body(r: &mut Reader, dimension: Dimension) -> EwkbResult<Self> {
        let mut coords = Vec::with_capacity(dimension.arity());
        for _ in 0..dimension.arity() {
            coords.push(r.read_f64("Point coordinate")?);
        }
        Ok(Point { dimension, coords })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coords = self
            .coords
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "({} point: [{}])", self.dimension, coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_arity() {
        assert!(Point::new(Dimension::Xy, vec![1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn body_round_trip() {
        let p = Point::new(Dimension::Xyz, vec![3.0, 4.0, 5.0]).unwrap();
        let mut w = Writer::new();
        p.encode_body(&mut w);
        let bytes = w.into_bytes();
        assert_eq!(bytes.len(), 24);
        let mut r = Reader::new(&bytes);
        let decoded = Point::decode_body(&mut r, Dimension::Xyz).unwrap();
        assert_eq!(decoded, p);
        assert_eq!(r.remaining(), 0);
    }
}
