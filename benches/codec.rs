use criterion::{criterion_group, criterion_main, Criterion};
use ewkb::envelope::Envelope;
use ewkb::geometry::{Geometry, LinearRing, Point, Polygon};
use ewkb::Dimension;

fn pt(x: f64, y: f64) -> Point {
    Point::new(Dimension::Xy, vec![x, y]).unwrap()
}

fn small_polygon() -> Polygon {
    let ring = LinearRing::new(
        Dimension::Xy,
        vec![pt(0.0, 10.0), pt(10.0, 0.0), pt(0.0, -10.0), pt(0.0, 10.0)],
    )
    .unwrap();
    Polygon::new(Dimension::Xy, vec![ring]).unwrap()
}

fn big_polygon() -> Polygon {
    let n = 2000;
    let mut points: Vec<Point> = (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            pt(angle.cos() * 1000.0, angle.sin() * 1000.0)
        })
        .collect();
    points.push(points[0].clone());
    let ring = LinearRing::new(Dimension::Xy, points).unwrap();
    Polygon::new(Dimension::Xy, vec![ring]).unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let small = Envelope::with_default_srid(Geometry::Polygon(small_polygon()));
    let big = Envelope::with_default_srid(Geometry::Polygon(big_polygon()));

    c.bench_function("encode small polygon", |b| {
        b.iter(|| small.to_hex());
    });
    c.bench_function("encode big polygon", |b| {
        b.iter(|| big.to_hex());
    });
}

fn bench_decode(c: &mut Criterion) {
    let small_hex = Envelope::with_default_srid(Geometry::Polygon(small_polygon())).to_hex();
    let big_hex = Envelope::with_default_srid(Geometry::Polygon(big_polygon())).to_hex();

    c.bench_function("decode small polygon", |b| {
        b.iter(|| Envelope::from_hex(&small_hex).unwrap());
    });
    c.bench_function("decode big polygon", |b| {
        b.iter(|| Envelope::from_hex(&big_hex).unwrap());
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
