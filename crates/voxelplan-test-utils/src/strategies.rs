//! Proptest strategies for [`Coord`] and [`Roi`] values.

use std::ops::Range;

use proptest::collection::vec;
use proptest::prelude::*;

use voxelplan_core::{Coord, Roi};

/// A coordinate of `dims` components, each drawn from `range`.
pub fn arb_coord(dims: usize, range: Range<i64>) -> impl Strategy<Value = Coord> {
    vec(range, dims).prop_map(Coord::new)
}

/// An ROI whose offset components are drawn from `offset_range` and
/// whose shape components are drawn from `shape_range` (non-negative;
/// [`Roi::new`] clamps any negative shape to zero).
pub fn arb_roi(
    dims: usize,
    offset_range: Range<i64>,
    shape_range: Range<i64>,
) -> impl Strategy<Value = Roi> {
    (
        arb_coord(dims, offset_range),
        arb_coord(dims, shape_range),
    )
        .prop_map(|(offset, shape)| Roi::new(offset, shape))
}

/// A `read_roi`/`write_roi` pair where `read_roi` contains `write_roi`,
/// built by growing a randomly placed write ROI outward by a
/// non-negative halo on every axis.
pub fn arb_read_write_pair(
    dims: usize,
    write_offset_range: Range<i64>,
    write_shape_range: Range<i64>,
    halo_range: Range<i64>,
) -> impl Strategy<Value = (Roi, Roi)> {
    (
        arb_roi(dims, write_offset_range, write_shape_range),
        vec(halo_range, dims),
    )
        .prop_map(|(write, halos)| {
            let neg: Vec<i64> = halos.clone();
            let pos: Vec<i64> = halos;
            let read = write
                .grow(&Coord::new(neg), &Coord::new(pos))
                .expect("equal dimension counts");
            (read, write)
        })
}
