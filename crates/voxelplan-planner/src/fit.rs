//! Fit policy: how to handle a `total_roi` that the write shape does
//! not tile exactly.

use std::fmt;
use std::str::FromStr;

use voxelplan_core::diagnostics::FilterReason;
use voxelplan_core::{PlanError, Roi};
use voxelplan_region::Block;

/// Boundary-handling strategy for blocks whose read or write ROI would
/// otherwise extend beyond `total_roi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fit {
    /// Skip candidates whose read ROI is not fully contained in
    /// `total_roi`.
    Valid,
    /// Include any candidate whose write-ROI begin point lies within
    /// `total_roi`, even if its read (or write) ROI extends beyond it.
    /// Callers must handle out-of-bounds access themselves.
    Overhang,
    /// Like `Overhang`, but clip the read and write ROIs to
    /// `total_roi`, preserving the halo width on the clipped side.
    Shrink,
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Valid => "valid",
            Self::Overhang => "overhang",
            Self::Shrink => "shrink",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Fit {
    type Err = PlanError;

    /// Parse a fit policy from its string name, for configuration
    /// surfaces that accept a string rather than the enum directly.
    /// Unrecognised names fail with [`PlanError::UnknownFit`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid" => Ok(Self::Valid),
            "overhang" => Ok(Self::Overhang),
            "shrink" => Ok(Self::Shrink),
            other => Err(PlanError::UnknownFit {
                name: other.to_string(),
            }),
        }
    }
}

/// Whether `candidate` is included under `fit`, and if not, why.
pub fn inclusion(total_roi: &Roi, candidate: &Block, fit: Fit) -> Result<(bool, Option<FilterReason>), PlanError> {
    match fit {
        Fit::Valid => {
            let ok = total_roi.contains(candidate.read_roi())?;
            Ok((ok, (!ok).then_some(FilterReason::ReadOutsideTotal)))
        }
        Fit::Overhang => {
            let ok = total_roi.contains_point(candidate.write_roi().begin())?;
            Ok((ok, (!ok).then_some(FilterReason::WriteBeginOutsideTotal)))
        }
        Fit::Shrink => {
            if !total_roi.contains_point(candidate.write_roi().begin())? {
                return Ok((false, Some(FilterReason::WriteBeginOutsideTotal)));
            }
            let shrunk = shrink(total_roi, candidate)?;
            let ok = shrunk.write_roi().shape().as_slice().iter().all(|&s| s > 0);
            Ok((ok, (!ok).then_some(FilterReason::ShrinkWouldCollapse)))
        }
    }
}

/// Apply the fit policy's geometric adjustment to an included
/// candidate. `Valid`/`Overhang` are no-ops; `Shrink` clips read/write
/// to `total_roi`.
pub fn adjust(total_roi: &Roi, candidate: Block, fit: Fit) -> Result<Block, PlanError> {
    match fit {
        Fit::Valid | Fit::Overhang => Ok(candidate),
        Fit::Shrink => shrink(total_roi, &candidate),
    }
}

/// Clip `block`'s read ROI to `total_roi` and grow the write ROI by the
/// same deltas, so the halo width is preserved on the clipped side.
///
/// Postcondition: the returned block's read ROI contains its write ROI
/// (enforced by [`Block::new`]).
fn shrink(total_roi: &Roi, block: &Block) -> Result<Block, PlanError> {
    let r = total_roi.intersect(block.read_roi())?;
    let left_delta = (block.read_roi().begin().clone() - r.begin().clone())?;
    let right_delta = (r.end()? - block.read_roi().end()?)?;
    let new_write = block.write_roi().grow(&left_delta, &right_delta)?;
    Block::new(block.total_roi().clone(), r, new_write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxelplan_core::Coord;

    fn roi(offset: i64, shape: i64) -> Roi {
        Roi::new(Coord::new([offset]), Coord::new([shape]))
    }

    #[test]
    fn from_str_round_trips_known_variants() {
        for f in [Fit::Valid, Fit::Overhang, Fit::Shrink] {
            assert_eq!(f.to_string().parse::<Fit>().unwrap(), f);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!(matches!(
            "bogus".parse::<Fit>(),
            Err(PlanError::UnknownFit { .. })
        ));
    }

    #[test]
    fn shrink_preserves_left_context_when_only_right_clipped() {
        // total shape 95, write shape 10, symmetric halo 10 each side,
        // trailing block at write offset 80 (read 70..100 overhangs by 5).
        let total = roi(0, 95);
        let block = Block::new(total.clone(), roi(70, 30), roi(80, 10)).unwrap();
        let shrunk = shrink(&total, &block).unwrap();
        assert_eq!(shrunk.read_roi(), &roi(70, 25));
        assert_eq!(shrunk.write_roi(), &roi(80, 5));
    }

    #[test]
    fn valid_excludes_read_overhang() {
        let total = roi(0, 95);
        let candidate = Block::new(total.clone(), roi(70, 30), roi(80, 10)).unwrap();
        let (ok, reason) = inclusion(&total, &candidate, Fit::Valid).unwrap();
        assert!(!ok);
        assert_eq!(reason, Some(FilterReason::ReadOutsideTotal));
    }

    #[test]
    fn overhang_includes_as_long_as_write_begin_inside() {
        let total = roi(0, 95);
        let candidate = Block::new(total.clone(), roi(70, 30), roi(80, 10)).unwrap();
        let (ok, _) = inclusion(&total, &candidate, Fit::Overhang).unwrap();
        assert!(ok);
    }
}
