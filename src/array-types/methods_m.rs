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

/// Free functions that are easier to call with type inference
/// than the equivalent static methods.
pub mod mat {
    use super::*;

    /// Construct a matrix from a nested array.
    #[inline(always)]
    pub fn from_array<X>(arr: [[X; 3]; 3]) -> M33<X> {
        let [a, b, c] = arr;
        M3([V3(a), V3(b), V3(c)])
    }

    /// Construct a matrix whose *columns* are the given vectors.
    ///
    /// This is the transpose of `from_array`, and exists because
    /// tables of matrices in the literature are frequently given
    /// column-by-column.
    #[inline]
    pub fn from_cols<X: Copy>(cols: [[X; 3]; 3]) -> M33<X>
    { from_array(cols).t() }

    /// The identity matrix.
    #[inline(always)]
    pub fn eye<X: Eye>() -> M33<X>
    { Eye::eye() }

    /// Implementation detail of `mat::eye`.
    pub trait Eye: Sized {
        fn eye() -> M33<Self>;
    }
}

/// Matrix inverse, as a free function.
#[inline(always)]
pub fn inv(m: &M33) -> M33
{ m.inv() }

impl<X> M33<X> {
    /// Construct a matrix from a function on (row, column) indices.
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { M3([
        V3::from_fn(|c| f(0, c)),
        V3::from_fn(|c| f(1, c)),
        V3::from_fn(|c| f(2, c)),
    ])}

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> M33<B>
    where F: FnMut(X) -> B,
    {
        let M3([a, b, c]) = self;
        M3([a.map(&mut f), b.map(&mut f), c.map(&mut f)])
    }

    /// Apply a fallible function to each element, with short-circuiting.
    #[inline]
    pub fn try_map<E, B, F>(self, mut f: F) -> Result<M33<B>, E>
    where F: FnMut(X) -> Result<B, E>,
    {
        let M3([a, b, c]) = self;
        Ok(M3([a.try_map(&mut f)?, b.try_map(&mut f)?, c.try_map(&mut f)?]))
    }

    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> M33<X>
    where X: Copy,
    { M33::from_fn(|r, c| self[c][r]) }
}

macro_rules! impl_ring_methods {
    ($X:ty) => {
        impl mat::Eye for $X {
            #[inline]
            fn eye() -> M33<$X> {
                M33::from_fn(|r, c| if r == c { 1 as $X } else { 0 as $X })
            }
        }

        impl M33<$X> {
            /// The identity matrix.
            #[inline(always)]
            pub fn eye() -> Self
            { mat::eye() }

            /// The zero matrix.
            #[inline(always)]
            pub fn zero() -> Self
            { M3([V3::<$X>::zero(); 3]) }

            /// Matrix determinant.
            #[inline]
            pub fn det(&self) -> $X {
                let m = self;
                m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
                - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
                + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
            }

            /// The adjugate: the transpose of the cofactor matrix.
            ///
            /// Satisfies `m * m.adjugate() == m.det() * eye()` exactly,
            /// making it the tool of choice for inverting integer
            /// matrices whose determinant divides everything in sight.
            #[inline]
            pub fn adjugate(&self) -> Self {
                let m = self;
                crate::methods_m::mat::from_array([
                    [
                        m[1][1] * m[2][2] - m[1][2] * m[2][1],
                        m[0][2] * m[2][1] - m[0][1] * m[2][2],
                        m[0][1] * m[1][2] - m[0][2] * m[1][1],
                    ],
                    [
                        m[1][2] * m[2][0] - m[1][0] * m[2][2],
                        m[0][0] * m[2][2] - m[0][2] * m[2][0],
                        m[0][2] * m[1][0] - m[0][0] * m[1][2],
                    ],
                    [
                        m[1][0] * m[2][1] - m[1][1] * m[2][0],
                        m[0][1] * m[2][0] - m[0][0] * m[2][1],
                        m[0][0] * m[1][1] - m[0][1] * m[1][0],
                    ],
                ])
            }

            /// View the matrix rows as an array of arrays.
            #[inline]
            pub fn into_array(self) -> [[$X; 3]; 3] {
                let M3([V3(a), V3(b), V3(c)]) = self;
                [a, b, c]
            }
        }
    };
}

impl_ring_methods!{f64}
impl_ring_methods!{i32}

impl M33<f64> {
    /// Matrix inverse.
    pub fn inv(&self) -> M33 {
        let det = self.det();
        self.adjugate().map(|x| x / det)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse() {
        // matrix whose inverse should be able to be computed exactly
        // by any reasonable matrix inversion algorithm working on f64s
        let matrix = mat::from_array([
            [2.0, 2.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let exact_inverse = mat::from_array([
            [0.5, -0.25, 0.0],
            [0.0,  0.25, 0.0],
            [0.0,   0.0, 0.5],
        ]);
        assert_eq!(matrix.inv(), exact_inverse);
        assert_eq!(&matrix * &exact_inverse, M33::<f64>::eye());
    }

    #[test]
    fn adjugate_identity() {
        let m: M33<i32> = mat::from_array([
            [ 2,  1, 0],
            [-1,  1, 1],
            [ 1, -2, 1],
        ]);
        let det = m.det();
        assert_eq!(&m * &m.adjugate(), M33::<i32>::eye().map(|x| x * det));
    }

    #[test]
    fn transpose_involution() {
        let m: M33<i32> = mat::from_array([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        assert_eq!(m.t().t(), m);
        assert_eq!(m.t()[0][1], m[1][0]);
    }
}
