//! Symmetry determination for periodic chemical structures.
//!
//! Given a unit cell and fractional atomic positions, the routines in
//! this crate recover the full crystallographic description of the
//! structure: reduced cells, the primitive cell, the point group, and
//! finally the Hall symbol and conventional setting of the space group.
//!
//! The top-level entry point is [`find_space_group`]; the intermediate
//! stages are exposed individually for callers that only need part of
//! the pipeline.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[macro_use] extern crate lazy_static;
#[cfg(test)] extern crate rand;

macro_rules! throw {
    ($e:expr)
    => { return Err($e.into()) }
}

/// Things that can go wrong while hunting for symmetry.
#[derive(Debug, Fail)]
pub enum SymmetryError {
    /// A cell reduction failed to reach a fixed point.
    #[fail(display = "cell reduction did not converge")]
    ReductionDidNotConverge,

    /// A lattice matrix (or other matrix that must be invertible) was singular.
    #[fail(display = "matrix is singular or nearly singular")]
    SingularMatrix,

    /// The translational search produced a cell incompatible with the atom count.
    #[fail(display = "could not find a consistent primitive cell")]
    InconsistentPrimitiveCell,

    /// The discovered rotations matched none of the 32 point groups.
    #[fail(display = "point group could not be identified")]
    NoMatchingPointGroup,

    /// No tabulated Hall group reproduced the discovered operations.
    #[fail(display = "no matching space group found")]
    NoMatchingSpaceGroup,

    /// A float was not close enough to an integer during idealization.
    #[fail(display = "a value was not near an integer: {}", _0)]
    IntPrecision(f64),

    /// Catch-all for searches that come up empty-handed.
    #[fail(display = "search failed: {}", _0)]
    NotFound(&'static str),
}

pub type FailResult<T> = Result<T, SymmetryError>;

mod util;
mod core;
mod algo;
mod oper;

pub use crate::core::lattice::Lattice;
pub use crate::core::cell::SymmetryCell;
pub use crate::core::atoms::Atom;

pub use crate::oper::symmops::{FracRot, FracTrans, FracOp, ChangeOfBasis};
pub use crate::oper::symmops::{SeitzOp, SeitzOperationSet};
pub use crate::oper::symmops::{SymmetryOperationSet, Centering};
pub use crate::oper::point_group::{PointGroup, Laue, Holohedry};
pub use crate::oper::hall::{HallGroup, hall_number_for_space_group};

pub use crate::algo::reduction::{reduce_niggli, NiggliReduction};
pub use crate::algo::delaunay::{reduce_delaunay, reduce_delaunay_2d};
pub use crate::algo::primitive::find_primitive_cell;
pub use crate::algo::rotations::find_lattice_symmetry;
pub use crate::algo::spacegroup::{find_space_group_symmetry, find_space_group, find_point_group};
pub use crate::algo::spacegroup::SpaceGroupMatch;
