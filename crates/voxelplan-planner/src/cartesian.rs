//! Small Cartesian-product helpers over per-axis integer sequences.
//!
//! Product order is outermost-dimension-slowest, matching the
//! Cartesian product order used throughout this crate for block and
//! conflict-offset enumeration.

use voxelplan_core::Coord;

/// An arithmetic progression `start, start + step, …` strictly less
/// than `end`. Requires `step > 0`.
pub fn arithmetic_progression(start: i64, end: i64, step: i64) -> Vec<i64> {
    debug_assert!(step > 0, "arithmetic_progression requires step > 0");
    let mut v = Vec::new();
    let mut cur = start;
    while cur < end {
        v.push(cur);
        cur += step;
    }
    v
}

/// Cartesian product of per-axis value lists, returned as `Coord`s in
/// outermost-dimension-slowest order.
pub fn product(axes: &[Vec<i64>]) -> Vec<Coord> {
    if axes.is_empty() {
        return Vec::new();
    }
    if axes.iter().any(|axis| axis.is_empty()) {
        return Vec::new();
    }
    let mut out = vec![Vec::new()];
    for axis in axes {
        let mut next = Vec::with_capacity(out.len() * axis.len());
        for prefix in &out {
            for &v in axis {
                let mut p = prefix.clone();
                p.push(v);
                next.push(p);
            }
        }
        out = next;
    }
    out.into_iter().map(Coord::new).collect()
}
