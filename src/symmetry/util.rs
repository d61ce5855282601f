//! Small numeric helpers shared across the crate.

use crate::FailResult;
use crate::SymmetryError;
use spgr_array_types::{V3, M33};

/// Map a float into `[0, 1)`.
#[inline(always)]
pub(crate) fn fract(x: f64) -> f64
{ x - x.floor() }

/// Map each coordinate into `[0, 1)`.
#[inline]
pub(crate) fn fract_v3(v: V3) -> V3
{ v.map(fract) }

/// Wrap a fractional displacement to the nearest periodic image,
/// leaving each coordinate in `[-0.5, 0.5)`.
#[inline]
pub(crate) fn min_image(v: V3) -> V3
{ v.map(|x| x - (x + 0.5).floor()) }

/// Nonnegative remainder modulo 12, the denominator used for all
/// fractional translations in this crate.
#[inline(always)]
pub(crate) fn mod12(x: i32) -> i32
{ ((x % 12) + 12) % 12 }

/// Tolerance for checked float-to-integer conversions.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Tol(pub f64);

impl Tol {
    pub fn unfloat(&self, x: f64) -> FailResult<i32> {
        let r = x.round();
        if (r - x).abs() > self.0 {
            throw!(SymmetryError::IntPrecision(x));
        }
        Ok(r as i32)
    }

    pub fn unfloat_m33(&self, m: &M33) -> FailResult<M33<i32>>
    { m.try_map(|x| self.unfloat(x)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping() {
        assert_eq!(fract(-0.25), 0.75);
        assert_eq!(min_image(V3([0.75, -0.75, 0.5])), V3([-0.25, 0.25, -0.5]));
        assert_eq!(mod12(-1), 11);
        assert_eq!(mod12(25), 1);
    }

    #[test]
    fn unfloat() {
        assert_eq!(Tol(1e-4).unfloat(2.00001).unwrap(), 2);
        assert!(Tol(1e-4).unfloat(2.1).is_err());
    }
}
