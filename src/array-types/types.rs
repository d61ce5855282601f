/* ************************************************************************ **
** This file is part of spgr, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

// ---------------------------------------------------------------------------

/// A 3-dimensional vector with operations for linear algebra.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct V3<X=f64>(pub [X; 3]);

/// A linear algebra dense matrix with 3 rows and fixed width.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct M3<V>(pub [V; 3]);

/// A square dense 3x3 matrix.
pub type M33<X=f64> = M3<V3<X>>;

// ---------------------------------------------------------------------------
// Both types behave generally like their backing array type.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

macro_rules! impl_array_like {
    ($Cn:ident) => {
        impl<X> Deref for $Cn<X> {
            type Target = [X; 3];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl<X> DerefMut for $Cn<X> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        // Fix a paper cut not solved by Deref, which is that many methods
        // take `I: IntoIterator`.
        impl<'a, X> IntoIterator for &'a $Cn<X> {
            type Item = &'a X;
            type IntoIter = Iter<'a, X>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a, X> IntoIterator for &'a mut $Cn<X> {
            type Item = &'a mut X;
            type IntoIter = IterMut<'a, X>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // forward the debug impl without a surrounding "V3(...)", which
        // makes the output valid JSON and Python for the common element
        // types, significantly lowering the barrier to some common tasks
        // during debugging
        impl<X: fmt::Debug> fmt::Debug for $Cn<X> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    };
}

impl_array_like!{V3}
impl_array_like!{M3}

// slice-of-array integration, letting callers view `&[V3<X>]` as a
// flat `&[X]` and back without copies.
unsafe impl<X> slice_of_array::IsSliceomorphic for V3<X> {
    type Element = X;
    const LEN: usize = 3;
}
