//! Level stride, level offsets, and cross-level conflict offsets.

use voxelplan_core::{Coord, PlanError, Roi};

use crate::cartesian::{arithmetic_progression, product};

/// The per-axis stride separating mutually-independent blocks.
///
/// Fails with [`PlanError::InvalidGeometry`] if `read_roi` does not
/// contain `write_roi`, or if any write-shape component is zero.
pub fn level_stride(read_roi: &Roi, write_roi: &Roi) -> Result<Coord, PlanError> {
    if !read_roi.contains(write_roi)? || write_roi.shape().as_slice().iter().any(|&s| s == 0) {
        return Err(PlanError::InvalidGeometry {
            read_roi: read_roi.clone(),
            write_roi: write_roi.clone(),
        });
    }

    let context_ul = (write_roi.begin().clone() - read_roi.begin().clone())?;
    let context_lr = (read_roi.end()? - write_roi.end()?)?;
    let max_context = context_ul.max(&context_lr)?;
    let write_shape = write_roi.shape();
    let min_stride = (max_context + write_shape.clone())?;

    // Round min_stride up to the nearest multiple of write_shape on each
    // axis: ceil(m / w) * w, via floor division on (m - 1).
    let ones = Coord::new(std::iter::repeat(1i64).take(min_stride.dims()));
    let shifted = (min_stride - ones.clone())?;
    let ceil_div = (shifted.div_floor(write_shape)? + ones)?;
    Ok((&ceil_div * write_shape)?)
}

/// The intra-stride starting offsets that generate mutually-independent
/// waves, in level order (level 0 first). Reversal relative to natural
/// Cartesian product order is a normative part of the contract: it
/// places the most-negatively-positioned offsets first.
pub fn level_offsets(write_shape: &Coord, level_stride: &Coord) -> Vec<Coord> {
    let dim_offsets: Vec<Vec<i64>> = write_shape
        .as_slice()
        .iter()
        .zip(level_stride.as_slice().iter())
        .map(|(&w, &s)| arithmetic_progression(0, s, w))
        .collect();
    let mut offsets = product(&dim_offsets);
    offsets.reverse();
    offsets
}

/// The translations to upstream (previous-level) blocks whose write ROI
/// may intersect the current level's read ROI. Callers skip this
/// entirely for level 0 or when `read_write_conflict` is disabled.
pub fn conflict_offsets(
    current_level_offset: &Coord,
    prev_level_offset: &Coord,
    level_stride: &Coord,
) -> Result<Vec<Coord>, PlanError> {
    let delta = (prev_level_offset.clone() - current_level_offset.clone())?;
    let axes: Vec<Vec<i64>> = delta
        .as_slice()
        .iter()
        .zip(level_stride.as_slice().iter())
        .map(|(&d, &s)| if d < 0 { vec![d, d + s] } else { vec![d - s, d] })
        .collect();
    Ok(product(&axes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roi(offset: i64, shape: i64) -> Roi {
        Roi::new(Coord::new([offset]), Coord::new([shape]))
    }

    #[test]
    fn stride_with_no_halo_equals_write_shape() {
        let stride = level_stride(&roi(0, 10), &roi(0, 10)).unwrap();
        assert_eq!(stride, Coord::new([10]));
    }

    #[test]
    fn stride_with_symmetric_halo_doubles_write_shape() {
        // write 10, read 30 (halo 10 each side): ceil(20/10)*10 = 20.
        let stride = level_stride(&roi(0, 30), &roi(10, 10)).unwrap();
        assert_eq!(stride, Coord::new([20]));
    }

    #[test]
    fn stride_rejects_write_not_contained_in_read() {
        assert!(matches!(
            level_stride(&roi(10, 5), &roi(10, 10)),
            Err(PlanError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn stride_rejects_zero_write_shape() {
        assert!(matches!(
            level_stride(&roi(0, 10), &roi(0, 0)),
            Err(PlanError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn offsets_reversed_for_symmetric_halo() {
        // level_stride = 20, write_shape = 10 -> natural order [0, 10],
        // reversed -> level 0 starts at 10, level 1 at 0.
        let offsets = level_offsets(&Coord::new([10]), &Coord::new([20]));
        assert_eq!(offsets, vec![Coord::new([10]), Coord::new([0])]);
    }

    #[test]
    fn conflict_offsets_bracket_the_two_level0_neighbours() {
        // S2: level_stride = 20, level 1 (offset 0) conflicting with
        // level 0 (offset 10): delta = 10 - 0 = 10 >= 0, so candidates
        // are {10 - 20, 10} = {-10, 10}.
        let offsets =
            conflict_offsets(&Coord::new([0]), &Coord::new([10]), &Coord::new([20])).unwrap();
        assert_eq!(offsets, vec![Coord::new([-10]), Coord::new([10])]);
    }

    #[test]
    fn conflict_offsets_count_is_two_to_the_n() {
        let offsets = conflict_offsets(
            &Coord::new([0, 0]),
            &Coord::new([30, 30]),
            &Coord::new([60, 60]),
        )
        .unwrap();
        assert_eq!(offsets.len(), 4);
    }

    #[test]
    fn conflict_offsets_rejects_dimension_mismatch() {
        assert!(matches!(
            conflict_offsets(&Coord::new([0, 0]), &Coord::new([10]), &Coord::new([20, 20])),
            Err(PlanError::DimensionMismatch { .. })
        ));
    }
}
