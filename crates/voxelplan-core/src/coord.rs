//! Integer N-dimensional coordinate vector.

use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::error::PlanError;

/// A coordinate in N-dimensional integer space.
///
/// Uses `SmallVec<[i64; 4]>` to avoid heap allocation for the common
/// case of up to 4 dimensions; higher-dimensional coordinates spill to
/// the heap transparently. All `Coord`s participating in one planning
/// call must share the same dimension; mixing dimensions is rejected
/// with [`PlanError::DimensionMismatch`] on every binary operation
/// rather than panicking, including `+`/`-`/componentwise `*`, whose
/// `Output` is `Result<Coord, PlanError>` for that reason.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Coord(SmallVec<[i64; 4]>);

impl Coord {
    /// Construct a coordinate from its components.
    pub fn new(components: impl IntoIterator<Item = i64>) -> Self {
        Self(components.into_iter().collect())
    }

    /// A coordinate of `n` zeros.
    pub fn zero(n: usize) -> Self {
        Self(SmallVec::from_elem(0, n))
    }

    /// Number of dimensions.
    pub fn dims(&self) -> usize {
        self.0.len()
    }

    /// Component values as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    fn check_dims(&self, other: &Coord) -> Result<(), PlanError> {
        if self.dims() != other.dims() {
            Err(PlanError::DimensionMismatch {
                expected: self.dims(),
                found: other.dims(),
            })
        } else {
            Ok(())
        }
    }

    /// Componentwise minimum. Fails if dimensions disagree.
    pub fn min(&self, other: &Coord) -> Result<Coord, PlanError> {
        self.check_dims(other)?;
        Ok(Coord(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| *a.min(b))
                .collect(),
        ))
    }

    /// Componentwise maximum. Fails if dimensions disagree.
    pub fn max(&self, other: &Coord) -> Result<Coord, PlanError> {
        self.check_dims(other)?;
        Ok(Coord(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| *a.max(b))
                .collect(),
        ))
    }

    /// Componentwise less-than-or-equal.
    pub fn le(&self, other: &Coord) -> Result<bool, PlanError> {
        self.check_dims(other)?;
        Ok(self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b))
    }

    /// Componentwise less-than.
    pub fn lt(&self, other: &Coord) -> Result<bool, PlanError> {
        self.check_dims(other)?;
        Ok(self.0.iter().zip(other.0.iter()).all(|(a, b)| a < b))
    }

    /// Componentwise integer floor division.
    pub fn div_floor(&self, divisor: &Coord) -> Result<Coord, PlanError> {
        self.check_dims(divisor)?;
        Ok(Coord(
            self.0
                .iter()
                .zip(divisor.0.iter())
                .map(|(a, b)| a.div_euclid(*b))
                .collect(),
        ))
    }

    /// True iff every component of `self` is an exact multiple of the
    /// corresponding component of `other`.
    pub fn is_multiple_of(&self, other: &Coord) -> Result<bool, PlanError> {
        self.check_dims(other)?;
        Ok(self.0.iter().zip(other.0.iter()).all(|(a, b)| a % b == 0))
    }
}

impl Index<usize> for Coord {
    type Output = i64;
    fn index(&self, i: usize) -> &i64 {
        &self.0[i]
    }
}

impl FromIterator<i64> for Coord {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Coord(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Coord {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add for &Coord {
    type Output = Result<Coord, PlanError>;
    fn add(self, rhs: &Coord) -> Result<Coord, PlanError> {
        self.check_dims(rhs)?;
        Ok(Coord(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }
}

impl Add for Coord {
    type Output = Result<Coord, PlanError>;
    fn add(self, rhs: Coord) -> Result<Coord, PlanError> {
        &self + &rhs
    }
}

impl Sub for &Coord {
    type Output = Result<Coord, PlanError>;
    fn sub(self, rhs: &Coord) -> Result<Coord, PlanError> {
        self.check_dims(rhs)?;
        Ok(Coord(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(a, b)| a - b)
                .collect(),
        ))
    }
}

impl Sub for Coord {
    type Output = Result<Coord, PlanError>;
    fn sub(self, rhs: Coord) -> Result<Coord, PlanError> {
        &self - &rhs
    }
}

impl Neg for &Coord {
    type Output = Coord;
    fn neg(self) -> Coord {
        Coord(self.0.iter().map(|a| -a).collect())
    }
}

impl Neg for Coord {
    type Output = Coord;
    fn neg(self) -> Coord {
        -&self
    }
}

impl Mul<i64> for &Coord {
    type Output = Coord;
    fn mul(self, scalar: i64) -> Coord {
        Coord(self.0.iter().map(|a| a * scalar).collect())
    }
}

impl Mul for &Coord {
    type Output = Result<Coord, PlanError>;
    fn mul(self, rhs: &Coord) -> Result<Coord, PlanError> {
        self.check_dims(rhs)?;
        Ok(Coord(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(a, b)| a * b)
                .collect(),
        ))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_coord(dims: usize) -> impl Strategy<Value = Coord> {
        proptest::collection::vec(-1000i64..1000, dims..=dims).prop_map(Coord::new)
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = Coord::new([1, 2, 3]);
        let b = Coord::new([4, -1, 0]);
        let sum = (a.clone() + b.clone()).unwrap();
        assert_eq!((sum - b).unwrap(), a);
    }

    #[test]
    fn add_rejects_dimension_mismatch() {
        let a = Coord::new([1, 2]);
        let b = Coord::new([1, 2, 3]);
        assert_eq!(
            a + b,
            Err(PlanError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn dimension_mismatch_is_reported() {
        let a = Coord::new([1, 2]);
        let b = Coord::new([1, 2, 3]);
        assert_eq!(
            a.le(&b),
            Err(PlanError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn div_floor_rounds_toward_negative_infinity() {
        let a = Coord::new([7, -7, -1]);
        let b = Coord::new([2, 2, 2]);
        assert_eq!(a.div_floor(&b).unwrap(), Coord::new([3, -4, -1]));
    }

    #[test]
    fn multiple_of_checks_every_component() {
        let a = Coord::new([10, 20, 0]);
        let b = Coord::new([5, 10, 7]);
        assert!(a.is_multiple_of(&b).unwrap());
        let c = Coord::new([10, 21, 0]);
        assert!(!c.is_multiple_of(&b).unwrap());
    }

    proptest! {
        #[test]
        fn neg_is_involution(c in arb_coord(3)) {
            prop_assert_eq!(-(-c.clone()), c);
        }

        #[test]
        fn min_max_bracket_inputs(a in arb_coord(3), b in arb_coord(3)) {
            let lo = a.min(&b).unwrap();
            let hi = a.max(&b).unwrap();
            prop_assert!(lo.le(&a).unwrap() && lo.le(&b).unwrap());
            prop_assert!(a.le(&hi).unwrap() && b.le(&hi).unwrap());
        }
    }
}
