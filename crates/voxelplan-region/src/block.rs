//! A single unit of work: a total/read/write ROI triple with a stable id.

use voxelplan_core::{PlanError, Roi};

/// A block of work within a planned volume.
///
/// **Invariant:** `read_roi` contains `write_roi` (checked at
/// construction). `block_id` is a deterministic function of
/// `(total_roi, write_roi)`: any two blocks with equal `write_roi`
/// within the same `total_roi` carry the same id, and distinct
/// `write_roi` values carry distinct ids with overwhelming probability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    block_id: u64,
    total_roi: Roi,
    read_roi: Roi,
    write_roi: Roi,
}

impl Block {
    /// Construct a block, deriving its id from `total_roi` and
    /// `write_roi`. Fails if `read_roi` does not contain `write_roi`.
    pub fn new(total_roi: Roi, read_roi: Roi, write_roi: Roi) -> Result<Self, PlanError> {
        if !read_roi.contains(&write_roi)? {
            return Err(PlanError::InvalidGeometry {
                read_roi: read_roi.clone(),
                write_roi: write_roi.clone(),
            });
        }
        let block_id = Self::compute_id(&total_roi, &write_roi);
        Ok(Self {
            block_id,
            total_roi,
            read_roi,
            write_roi,
        })
    }

    fn compute_id(total_roi: &Roi, write_roi: &Roi) -> u64 {
        voxelplan_core::hash::hash_coords([
            total_roi.begin().as_slice(),
            total_roi.shape().as_slice(),
            write_roi.begin().as_slice(),
            write_roi.shape().as_slice(),
        ])
    }

    /// The block's stable identifier.
    pub fn block_id(&self) -> u64 {
        self.block_id
    }

    /// The total ROI this block was planned within.
    pub fn total_roi(&self) -> &Roi {
        &self.total_roi
    }

    /// The region this block reads from.
    pub fn read_roi(&self) -> &Roi {
        &self.read_roi
    }

    /// The region this block exclusively writes to.
    pub fn write_roi(&self) -> &Roi {
        &self.write_roi
    }
}
