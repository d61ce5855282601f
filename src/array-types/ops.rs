/* ************************************************************************ **
** This file is part of spgr, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Operator impls, in every ref/value combination that inference
//! could reasonably ask for. Each operator has one true impl (on
//! references); the rest forward to it.

use crate::types::*;
use std::ops::{Add, Sub, Neg, Mul, Div};
use std::ops::{AddAssign, SubAssign, MulAssign};

// ---------------------------------------------------------------------------

/// Forward `T op U` in the owned/mixed forms to the `&T op &U` impl.
macro_rules! forward_ref_binop {
    (impl $Op:ident::$op:ident for $T:ty, $U:ty => $Out:ty) => {
        impl $Op<$U> for $T {
            type Output = $Out;

            #[inline(always)]
            fn $op(self, other: $U) -> $Out
            { $Op::$op(&self, &other) }
        }

        impl<'a> $Op<$U> for &'a $T {
            type Output = $Out;

            #[inline(always)]
            fn $op(self, other: $U) -> $Out
            { $Op::$op(self, &other) }
        }

        impl<'b> $Op<&'b $U> for $T {
            type Output = $Out;

            #[inline(always)]
            fn $op(self, other: &'b $U) -> $Out
            { $Op::$op(&self, other) }
        }
    };
}

macro_rules! impl_ops_for_element {
    ($X:ty) => {
        // -------------------- elementwise V3 --------------------

        impl<'a, 'b> Add<&'b V3<$X>> for &'a V3<$X> {
            type Output = V3<$X>;

            #[inline]
            fn add(self, other: &'b V3<$X>) -> V3<$X>
            { V3::from_fn(|i| self[i] + other[i]) }
        }

        impl<'a, 'b> Sub<&'b V3<$X>> for &'a V3<$X> {
            type Output = V3<$X>;

            #[inline]
            fn sub(self, other: &'b V3<$X>) -> V3<$X>
            { V3::from_fn(|i| self[i] - other[i]) }
        }

        forward_ref_binop!{impl Add::add for V3<$X>, V3<$X> => V3<$X>}
        forward_ref_binop!{impl Sub::sub for V3<$X>, V3<$X> => V3<$X>}

        impl<'a> Neg for &'a V3<$X> {
            type Output = V3<$X>;

            #[inline]
            fn neg(self) -> V3<$X>
            { V3::from_fn(|i| -self[i]) }
        }

        impl Neg for V3<$X> {
            type Output = V3<$X>;

            #[inline(always)]
            fn neg(self) -> V3<$X>
            { -&self }
        }

        impl AddAssign<V3<$X>> for V3<$X> {
            #[inline]
            fn add_assign(&mut self, other: V3<$X>)
            { *self = &*self + &other; }
        }

        impl<'b> AddAssign<&'b V3<$X>> for V3<$X> {
            #[inline]
            fn add_assign(&mut self, other: &'b V3<$X>)
            { *self = &*self + other; }
        }

        impl SubAssign<V3<$X>> for V3<$X> {
            #[inline]
            fn sub_assign(&mut self, other: V3<$X>)
            { *self = &*self - &other; }
        }

        impl<'b> SubAssign<&'b V3<$X>> for V3<$X> {
            #[inline]
            fn sub_assign(&mut self, other: &'b V3<$X>)
            { *self = &*self - other; }
        }

        // -------------------- V3 by scalar --------------------

        impl<'a> Mul<$X> for &'a V3<$X> {
            type Output = V3<$X>;

            #[inline]
            fn mul(self, x: $X) -> V3<$X>
            { V3::from_fn(|i| self[i] * x) }
        }

        impl Mul<$X> for V3<$X> {
            type Output = V3<$X>;

            #[inline(always)]
            fn mul(self, x: $X) -> V3<$X>
            { &self * x }
        }

        impl<'a> Mul<&'a V3<$X>> for $X {
            type Output = V3<$X>;

            #[inline(always)]
            fn mul(self, v: &'a V3<$X>) -> V3<$X>
            { v * self }
        }

        impl Mul<V3<$X>> for $X {
            type Output = V3<$X>;

            #[inline(always)]
            fn mul(self, v: V3<$X>) -> V3<$X>
            { &v * self }
        }

        impl MulAssign<$X> for V3<$X> {
            #[inline]
            fn mul_assign(&mut self, x: $X)
            { *self = &*self * x; }
        }

        // -------------------- elementwise M33 --------------------

        impl<'a, 'b> Add<&'b M33<$X>> for &'a M33<$X> {
            type Output = M33<$X>;

            #[inline]
            fn add(self, other: &'b M33<$X>) -> M33<$X>
            { M33::from_fn(|r, c| self[r][c] + other[r][c]) }
        }

        impl<'a, 'b> Sub<&'b M33<$X>> for &'a M33<$X> {
            type Output = M33<$X>;

            #[inline]
            fn sub(self, other: &'b M33<$X>) -> M33<$X>
            { M33::from_fn(|r, c| self[r][c] - other[r][c]) }
        }

        forward_ref_binop!{impl Add::add for M33<$X>, M33<$X> => M33<$X>}
        forward_ref_binop!{impl Sub::sub for M33<$X>, M33<$X> => M33<$X>}

        impl<'a> Neg for &'a M33<$X> {
            type Output = M33<$X>;

            #[inline]
            fn neg(self) -> M33<$X>
            { M33::from_fn(|r, c| -self[r][c]) }
        }

        impl Neg for M33<$X> {
            type Output = M33<$X>;

            #[inline(always)]
            fn neg(self) -> M33<$X>
            { -&self }
        }

        impl AddAssign<M33<$X>> for M33<$X> {
            #[inline]
            fn add_assign(&mut self, other: M33<$X>)
            { *self = &*self + &other; }
        }

        // -------------------- M33 by scalar --------------------

        impl<'a> Mul<$X> for &'a M33<$X> {
            type Output = M33<$X>;

            #[inline]
            fn mul(self, x: $X) -> M33<$X>
            { M33::from_fn(|r, c| self[r][c] * x) }
        }

        impl Mul<$X> for M33<$X> {
            type Output = M33<$X>;

            #[inline(always)]
            fn mul(self, x: $X) -> M33<$X>
            { &self * x }
        }

        // -------------------- products --------------------

        impl<'a, 'b> Mul<&'b M33<$X>> for &'a M33<$X> {
            type Output = M33<$X>;

            #[inline]
            fn mul(self, other: &'b M33<$X>) -> M33<$X>
            { M33::from_fn(|r, c| {
                (0..3).map(|k| self[r][k] * other[k][c]).sum()
            })}
        }

        forward_ref_binop!{impl Mul::mul for M33<$X>, M33<$X> => M33<$X>}

        // row vector times matrix
        impl<'a, 'b> Mul<&'b M33<$X>> for &'a V3<$X> {
            type Output = V3<$X>;

            #[inline]
            fn mul(self, m: &'b M33<$X>) -> V3<$X>
            { V3::from_fn(|c| (0..3).map(|k| self[k] * m[k][c]).sum()) }
        }

        forward_ref_binop!{impl Mul::mul for V3<$X>, M33<$X> => V3<$X>}

        // matrix times column vector
        impl<'a, 'b> Mul<&'b V3<$X>> for &'a M33<$X> {
            type Output = V3<$X>;

            #[inline]
            fn mul(self, v: &'b V3<$X>) -> V3<$X>
            { V3::from_fn(|r| crate::methods_v::dot(&self[r], v)) }
        }

        forward_ref_binop!{impl Mul::mul for M33<$X>, V3<$X> => V3<$X>}
    };
}

impl_ops_for_element!{f64}
impl_ops_for_element!{i32}

// Division by a scalar only makes sense for floats; exact integer
// division goes through `map` at the call site, where the caller
// can vouch for divisibility.

impl<'a> Div<f64> for &'a V3 {
    type Output = V3;

    #[inline]
    fn div(self, x: f64) -> V3
    { V3::from_fn(|i| self[i] / x) }
}

impl Div<f64> for V3 {
    type Output = V3;

    #[inline(always)]
    fn div(self, x: f64) -> V3
    { &self / x }
}

impl<'a> Div<f64> for &'a M33 {
    type Output = M33;

    #[inline]
    fn div(self, x: f64) -> M33
    { M33::from_fn(|r, c| self[r][c] / x) }
}

impl Div<f64> for M33 {
    type Output = M33;

    #[inline(always)]
    fn div(self, x: f64) -> M33
    { &self / x }
}

#[cfg(test)]
mod tests {
    use crate::types::*;
    use crate::methods_m::mat;

    #[test]
    fn multiplication_order() {
        // matrices that don't commute
        let a = mat::from_array([
            [2.0, 2.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let b = mat::from_array([
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);

        assert_eq!(&a * &b, mat::from_array([
            [2.0, 2.0, 0.0],
            [4.0, 0.0, 0.0],
            [0.0, 0.0, 2.0],
        ]));
        assert_eq!(&b * &a, mat::from_array([
            [0.0, 4.0, 0.0],
            [2.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
        ]));
    }

    #[test]
    fn row_vs_column() {
        let m: M33<i32> = mat::from_array([
            [0, 1, 0],
            [0, 0, 1],
            [1, 0, 0],
        ]);
        let v = V3([1, 2, 3]);
        assert_eq!(&v * &m, V3([3, 1, 2]));
        assert_eq!(&m * &v, V3([2, 3, 1]));
    }
}
