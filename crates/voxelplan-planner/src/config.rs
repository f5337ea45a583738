//! Planner configuration and eager validation.

use voxelplan_core::{PlanError, Roi};

use crate::fit::Fit;

/// The full set of inputs to [`crate::plan`].
///
/// `validate()` performs the §4.7 failure checks eagerly, so `plan()`
/// never needs to fail partway through emitting a graph.
#[derive(Clone, Debug)]
pub struct PlanConfig {
    /// The full region to be processed.
    pub total_roi: Roi,
    /// Per-block region read from (write ROI plus halo).
    pub read_roi: Roi,
    /// Per-block region exclusively written to.
    pub write_roi: Roi,
    /// Whether concurrently-running blocks may conflict on read/write
    /// access. When `false`, every block's upstream list is empty.
    pub read_write_conflict: bool,
    /// Boundary-handling strategy.
    pub fit: Fit,
}

impl PlanConfig {
    /// Construct a config with `read_write_conflict = true`.
    pub fn new(total_roi: Roi, read_roi: Roi, write_roi: Roi, fit: Fit) -> Self {
        Self {
            total_roi,
            read_roi,
            write_roi,
            read_write_conflict: true,
            fit,
        }
    }

    /// Validate that all Rois share one dimension count, that
    /// `read_roi` contains `write_roi`, and that no write-shape
    /// component is zero.
    pub fn validate(&self) -> Result<(), PlanError> {
        let dims = self.total_roi.dims();
        for roi in [&self.read_roi, &self.write_roi] {
            if roi.dims() != dims {
                return Err(PlanError::DimensionMismatch {
                    expected: dims,
                    found: roi.dims(),
                });
            }
        }
        if !self.read_roi.contains(&self.write_roi)?
            || self.write_roi.shape().as_slice().iter().any(|&s| s == 0)
        {
            return Err(PlanError::InvalidGeometry {
                read_roi: self.read_roi.clone(),
                write_roi: self.write_roi.clone(),
            });
        }
        Ok(())
    }
}
