//! Crate-level round-trip and cross-cutting invariant tests, mirroring the
//! teacher's `wkb::test` layout: per-variant construction/codec tests live
//! colocated in each `geometry::*` module; this module covers envelope
//! round-trips, the boundary-rejection table, and the seed scenarios.

mod boundary_rejections;
