//! Benchmark profiles for the voxelplan block-wise dependency scheduler.
//!
//! - [`reference_profile`]: 2-D, 1000x1000 total, 64x64 write, halo 8.
//! - [`stress_profile`]: 2-D, 4000x4000 total, same block geometry,
//!   ~16x the block count of the reference profile.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use voxelplan_core::{Coord, Roi};
use voxelplan_planner::{Fit, PlanConfig};

/// Build a square N-D volume profile: `total_shape` on every axis,
/// `write_shape` per-block write extent, grown by `halo` on each side
/// for the read extent.
pub fn volume_profile(dims: usize, total_shape: i64, write_shape: i64, halo: i64) -> PlanConfig {
    let total = Roi::new(Coord::zero(dims), Coord::new(vec![total_shape; dims]));
    let write = Roi::new(Coord::zero(dims), Coord::new(vec![write_shape; dims]));
    let read = Roi::new(
        Coord::new(vec![-halo; dims]),
        Coord::new(vec![write_shape + 2 * halo; dims]),
    );
    PlanConfig::new(total, read, write, Fit::Valid)
}

/// A reference 2-D profile: 1000x1000 total, 64x64 write blocks, halo 8.
pub fn reference_profile() -> PlanConfig {
    volume_profile(2, 1000, 64, 8)
}

/// A stress 2-D profile: 4000x4000 total, same block geometry as
/// [`reference_profile`] (~16x the block count).
pub fn stress_profile() -> PlanConfig {
    volume_profile(2, 4000, 64, 8)
}
