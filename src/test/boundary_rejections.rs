//! The boundary-rejection table from spec.md §8: each case must fail with
//! the indicated error kind.

use crate::common::Dimension;
use crate::envelope::Envelope;
use crate::error::EwkbError;
use crate::geometry::{CircularString, CompoundCurve, LineString, LinearRing, Point, Triangle};

fn pt(x: f64, y: f64) -> Point {
    Point::new(Dimension::Xy, vec![x, y]).unwrap()
}

#[test]
fn circular_string_with_two_points_is_invalid_structure() {
    let err = CircularString::new(Dimension::Xy, vec![pt(0.0, 0.0), pt(1.0, 1.0)]).unwrap_err();
    assert!(matches!(err, EwkbError::InvalidStructure { variant: "CircularString", .. }));
}

#[test]
fn circular_string_with_four_points_is_invalid_structure() {
    let points = vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(1.0, 0.0), pt(2.0, 0.0)];
    let err = CircularString::new(Dimension::Xy, points).unwrap_err();
    assert!(matches!(err, EwkbError::InvalidStructure { variant: "CircularString", .. }));
}

#[test]
fn linear_ring_with_open_first_last_is_invalid_structure() {
    let points = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)];
    let err = LinearRing::new(Dimension::Xy, points).unwrap_err();
    assert!(matches!(err, EwkbError::InvalidStructure { variant: "LinearRing", .. }));
}

#[test]
fn triangle_with_open_first_last_is_invalid_structure() {
    let points = [pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0)];
    let err = Triangle::new(Dimension::Xy, points).unwrap_err();
    assert!(matches!(err, EwkbError::InvalidStructure { variant: "Triangle", .. }));
}

#[test]
fn compound_curve_dimension_mismatch_on_add() {
    let mut curve = CompoundCurve::empty();
    curve
        .add_line_string(LineString::new(Dimension::Xy, vec![pt(0.0, 0.0), pt(1.0, 1.0)]).unwrap())
        .unwrap();
    let xyz_line = LineString::new(
        Dimension::Xyz,
        vec![
            Point::new(Dimension::Xyz, vec![0.0, 0.0, 0.0]).unwrap(),
            Point::new(Dimension::Xyz, vec![1.0, 1.0, 1.0]).unwrap(),
        ],
    )
    .unwrap();
    let err = curve.add_line_string(xyz_line).unwrap_err();
    assert!(matches!(err, EwkbError::DimensionMismatch { .. }));
}

#[test]
fn envelope_decode_rejects_big_endian() {
    let mut bytes = vec![0x02u8];
    bytes.extend_from_slice(&[1, 0, 0, 0]);
    let err = Envelope::decode(&bytes).unwrap_err();
    assert!(matches!(err, EwkbError::UnsupportedByteOrder { marker: 0x02 }));
}

#[test]
fn envelope_decode_rejects_odd_length_hex() {
    let err = Envelope::from_hex("abcde").unwrap_err();
    assert!(matches!(err, EwkbError::MalformedHex(_)));
}
