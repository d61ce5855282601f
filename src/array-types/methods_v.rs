/* ************************************************************************ **
** This file is part of spgr, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::types::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<X> V3<X> {
    /// Construct a fixed-size vector from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize) -> X,
    { V3([f(0), f(1), f(2)]) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> V3<B>
    where F: FnMut(X) -> B,
    {
        let V3([a, b, c]) = self;
        V3([f(a), f(b), f(c)])
    }

    /// Apply a fallible function to each element, with short-circuiting.
    #[inline]
    pub fn try_map<E, B, F>(self, mut f: F) -> Result<V3<B>, E>
    where F: FnMut(X) -> Result<B, E>,
    {
        let V3([a, b, c]) = self;
        Ok(V3([f(a)?, f(b)?, f(c)?]))
    }

    /// Apply a partial function to each element, with short-circuiting.
    #[inline]
    pub fn opt_map<B, F>(self, mut f: F) -> Option<V3<B>>
    where F: FnMut(X) -> Option<B>,
    {
        let V3([a, b, c]) = self;
        Some(V3([f(a)?, f(b)?, f(c)?]))
    }
}

/// Element type of the vector.
pub type ScalarT<V> = <V as Dot>::Scalar;

/// Implementation detail of the inherent method `V3::dot`.
///
/// Without this, the free function `dot` could not be generic
/// over element types.
pub trait Dot {
    type Scalar;

    fn dot(&self, b: &Self) -> Self::Scalar;
}

/// Inner product of vectors.
///
/// This is basically just `V3::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<V: Dot>(a: &V, b: &V) -> ScalarT<V>
{ Dot::dot(a, b) }

macro_rules! impl_ring_methods {
    ($X:ty) => {
        impl Dot for V3<$X> {
            type Scalar = $X;

            #[inline]
            fn dot(&self, other: &V3<$X>) -> $X
            { self[0] * other[0] + self[1] * other[1] + self[2] * other[2] }
        }

        impl V3<$X> {
            /// Get a zero vector.
            #[inline(always)]
            pub fn zero() -> Self
            { V3([0 as $X; 3]) }

            /// Get a basis vector.
            #[inline]
            pub fn axis_unit(i: usize) -> Self {
                let mut v = Self::zero();
                v[i] = 1 as $X;
                v
            }

            /// Get the inner product of two vectors.
            ///
            /// It is recommended you write this as `V3::dot(a, b)`,
            /// rather than `a.dot(b)`.
            #[inline(always)]
            pub fn dot(&self, other: &Self) -> $X
            { Dot::dot(self, other) }

            /// Get the vector's squared magnitude.
            #[inline(always)]
            pub fn sqnorm(&self) -> $X
            { Dot::dot(self, self) }

            /// Cross-product.
            #[inline]
            pub fn cross(&self, other: &Self) -> Self {
                V3([
                    self[1] * other[2] - self[2] * other[1],
                    self[2] * other[0] - self[0] * other[2],
                    self[0] * other[1] - self[1] * other[0],
                ])
            }

            /// Perform elementwise multiplication, or multiplication
            /// of a vector by a diagonal matrix.
            #[inline(always)]
            pub fn mul_diag(&self, other: &Self) -> Self
            { V3::from_fn(|i| self[i] * other[i]) }
        }

        impl std::iter::Sum for V3<$X> {
            fn sum<I: Iterator<Item=V3<$X>>>(iter: I) -> Self {
                iter.fold(V3::<$X>::zero(), |a, b| a + b)
            }
        }

        impl<'a> std::iter::Sum<&'a V3<$X>> for V3<$X> {
            fn sum<I: Iterator<Item=&'a V3<$X>>>(iter: I) -> Self {
                iter.fold(V3::<$X>::zero(), |a, b| a + b)
            }
        }
    };
}

impl_ring_methods!{f64}
impl_ring_methods!{i32}

impl V3<f64> {
    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> f64
    { self.sqnorm().sqrt() }

    /// Normalize the vector.
    #[inline(always)]
    pub fn unit(&self) -> Self
    { self / self.norm() }

    /// Get the shortest angle (as a value in `[0, pi]`) between
    /// this vector and another.
    #[inline]
    pub fn angle_to(&self, other: &Self) -> f64 {
        let arg = dot(self, other) / f64::sqrt(self.sqnorm() * other.sqnorm());
        arg.min(1.0).max(-1.0).acos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle() {
        let a: V3 = V3([0.5, 0.0,  0.0]);
        let b: V3 = V3([8.0, 0.0, -8.0]);

        assert!((45.0 - a.angle_to(&b).to_degrees()).abs() < 1e-10);
    }

    #[test]
    fn cross_is_perp() {
        for _ in 0..10 {
            let a: V3 = V3(rand::random());
            let b: V3 = V3(rand::random());
            let c = a.cross(&b);
            assert!(dot(&a, &c).abs() < 1e-10);
            assert!(dot(&b, &c).abs() < 1e-10);
        }
    }
}
