/* ************************************************************************ **
** This file is part of spgr, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

extern crate slice_of_array;
#[cfg(test)] extern crate rand;

mod types;
mod methods_v;
mod methods_m;
mod ops;

pub use crate::types::{V3, M3, M33};
pub use crate::methods_v::dot;
pub use crate::methods_m::{mat, inv};
