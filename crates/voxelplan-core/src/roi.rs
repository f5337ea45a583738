//! Axis-aligned N-D region (region of interest).

use std::fmt;

use crate::coord::Coord;
use crate::error::PlanError;

/// An axis-aligned N-dimensional region: an `offset` plus a `shape`.
///
/// `begin = offset`, `end = offset + shape`. All containment and
/// intersection queries are half-open on the high side (`begin <= p <
/// end`). `shape` components are always non-negative; operations that
/// would otherwise produce a negative shape clamp it to zero instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Roi {
    offset: Coord,
    shape: Coord,
}

impl Roi {
    /// Construct a Roi from an offset and a non-negative shape.
    ///
    /// Negative shape components are clamped to zero, matching the
    /// clamping behavior of [`Roi::intersect`].
    pub fn new(offset: Coord, shape: Coord) -> Self {
        let shape = Coord::new(shape.as_slice().iter().map(|&s| s.max(0)));
        Self { offset, shape }
    }

    /// The region's dimension count.
    pub fn dims(&self) -> usize {
        self.offset.dims()
    }

    /// The region's offset (same as `begin()`).
    pub fn offset(&self) -> &Coord {
        &self.offset
    }

    /// The region's shape.
    pub fn shape(&self) -> &Coord {
        &self.shape
    }

    /// Inclusive lower corner.
    pub fn begin(&self) -> &Coord {
        &self.offset
    }

    /// Exclusive upper corner.
    pub fn end(&self) -> Result<Coord, PlanError> {
        (&self.offset) + (&self.shape)
    }

    /// True iff any shape component is zero.
    pub fn is_empty(&self) -> bool {
        self.shape.as_slice().iter().any(|&s| s == 0)
    }

    /// Half-open containment of a point: `begin <= p < end`.
    pub fn contains_point(&self, p: &Coord) -> Result<bool, PlanError> {
        let end = self.end()?;
        Ok(self.offset.le(p)? && p.lt(&end)?)
    }

    /// Containment of another Roi: `begin <= other.begin && other.end <=
    /// end`. An empty `other` is contained whenever its begin point
    /// lies within `self`'s bounds.
    pub fn contains(&self, other: &Roi) -> Result<bool, PlanError> {
        let self_end = self.end()?;
        let other_end = other.end()?;
        Ok(self.offset.le(other.begin())? && other_end.le(&self_end)?)
    }

    /// Intersection with another Roi. Shape is clamped at zero rather
    /// than allowed to go negative, so a non-overlapping pair yields an
    /// empty Roi anchored at the componentwise max of the two begins.
    pub fn intersect(&self, other: &Roi) -> Result<Roi, PlanError> {
        let begin = self.offset.max(&other.offset)?;
        let self_end = self.end()?;
        let other_end = other.end()?;
        let end = self_end.min(&other_end)?;
        let shape = Coord::new(
            begin
                .as_slice()
                .iter()
                .zip(end.as_slice().iter())
                .map(|(b, e)| (e - b).max(0)),
        );
        Ok(Roi::new(begin, shape))
    }

    /// Grow (or shrink, for negative amounts) the Roi: the offset moves
    /// back by `amount_neg` and the shape grows by `amount_neg +
    /// amount_pos`. Resulting shape components are clamped at zero.
    pub fn grow(&self, amount_neg: &Coord, amount_pos: &Coord) -> Result<Roi, PlanError> {
        let offset = ((&self.offset) - amount_neg)?;
        let grown = ((&self.shape + amount_neg.clone())? + amount_pos.clone())?;
        Ok(Roi::new(offset, grown))
    }

    /// Translate the Roi by `delta`.
    pub fn translate(&self, delta: &Coord) -> Result<Roi, PlanError> {
        Ok(Roi {
            offset: ((&self.offset) + delta)?,
            shape: self.shape.clone(),
        })
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Roi(offset={}, shape={})", self.offset, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_roi(dims: usize) -> impl Strategy<Value = Roi> {
        (
            proptest::collection::vec(-100i64..100, dims..=dims),
            proptest::collection::vec(0i64..50, dims..=dims),
        )
            .prop_map(|(o, s)| Roi::new(Coord::new(o), Coord::new(s)))
    }

    #[test]
    fn contains_is_reflexive() {
        let r = Roi::new(Coord::new([0, 0]), Coord::new([10, 10]));
        assert!(r.contains(&r).unwrap());
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let a = Roi::new(Coord::new([0]), Coord::new([5]));
        let b = Roi::new(Coord::new([10]), Coord::new([5]));
        let i = a.intersect(&b).unwrap();
        assert!(i.is_empty());
    }

    #[test]
    fn grow_preserves_center_context() {
        let r = Roi::new(Coord::new([10]), Coord::new([10]));
        let grown = r.grow(&Coord::new([2]), &Coord::new([3])).unwrap();
        assert_eq!(grown.offset(), &Coord::new([8]));
        assert_eq!(grown.shape(), &Coord::new([15]));
    }

    #[test]
    fn grow_with_negative_amounts_shrinks() {
        let r = Roi::new(Coord::new([10]), Coord::new([10]));
        let shrunk = r.grow(&Coord::new([-2]), &Coord::new([-3])).unwrap();
        assert_eq!(shrunk.offset(), &Coord::new([12]));
        assert_eq!(shrunk.shape(), &Coord::new([5]));
    }

    #[test]
    fn grow_rejects_dimension_mismatch() {
        let r = Roi::new(Coord::new([10, 10]), Coord::new([10, 10]));
        assert!(matches!(
            r.grow(&Coord::new([2]), &Coord::new([3])),
            Err(PlanError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn translate_rejects_dimension_mismatch() {
        let r = Roi::new(Coord::new([10, 10]), Coord::new([10, 10]));
        assert!(matches!(
            r.translate(&Coord::new([1])),
            Err(PlanError::DimensionMismatch { .. })
        ));
    }

    proptest! {
        #[test]
        fn intersect_is_commutative(a in arb_roi(2), b in arb_roi(2)) {
            let ab = a.intersect(&b).unwrap();
            let ba = b.intersect(&a).unwrap();
            prop_assert_eq!(ab.offset(), ba.offset());
            prop_assert_eq!(ab.shape(), ba.shape());
        }

        #[test]
        fn intersect_with_self_is_self(a in arb_roi(3)) {
            let aa = a.intersect(&a).unwrap();
            prop_assert_eq!(aa.offset(), a.offset());
            prop_assert_eq!(aa.shape(), a.shape());
        }

        #[test]
        fn translate_preserves_shape(a in arb_roi(3), d in proptest::collection::vec(-50i64..50, 3..=3)) {
            let delta = Coord::new(d);
            let t = a.translate(&delta).unwrap();
            prop_assert_eq!(t.shape(), a.shape());
        }
    }
}
