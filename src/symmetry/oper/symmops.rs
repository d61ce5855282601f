//! Symmetry operations on fractional coordinates.
//!
//! Rotations are integer matrices acting on column vectors of
//! fractional coordinates. Tabulated translations are stored in units
//! of 1/12, which exactly represents every translation that appears
//! in a space group (halves, thirds, quarters, sixths and twelfths).
//! Translations measured in a structure stay in floating point, since
//! an arbitrary origin makes them land off the twelfth grid.

use crate::core::atoms::{Atom, is_overlap};
use crate::core::lattice::Lattice;
use crate::util::{fract_v3, mod12};
use spgr_array_types::{V3, M33, mat};

// ---------------------------------------------------------------------------
// rotations

/// An integer rotation (or rotoinversion) in fractional coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FracRot(M33<i32>);

/// Every integer vector that can serve as a rotation axis of a
/// crystallographic rotation, ordered so that "nicer" axes are found
/// first.
pub(crate) const ALL_ROTATION_AXES: [[i32; 3]; 73] = [
    [1, 0, 0], [0, 1, 0], [0, 0, 1],
    [0, 1, 1], [1, 0, 1], [1, 1, 0],
    [0, -1, 1], [-1, 0, 1], [1, -1, 0],
    [1, 1, 1],
    [-1, 1, 1], [1, -1, 1], [1, 1, -1],
    [0, 1, 2], [2, 0, 1], [1, 2, 0],
    [0, 2, 1], [1, 0, 2], [2, 1, 0],
    [0, -1, 2], [-2, 0, 1], [-1, 2, 0],
    [0, -2, 1], [-1, 0, 2], [-2, 1, 0],
    [2, 1, 1], [1, 2, 1], [1, 1, 2],
    [-2, 1, 1], [1, -2, 1], [-1, -1, 2],
    [-2, -1, 1], [-1, 2, 1], [1, -1, 2],
    [2, -1, 1], [-1, -2, 1], [-1, 1, 2],
    [3, 1, 2], [2, 3, 1], [1, 2, 3],
    [3, 2, 1], [1, 3, 2], [2, 1, 3],
    [3, -1, 2], [-2, -3, 1], [-1, 2, 3],
    [3, -2, 1], [-1, -3, 2], [-2, 1, 3],
    [-3, 1, 2], [2, -3, 1], [-1, -2, 3],
    [-3, 2, 1], [1, -3, 2], [-2, -1, 3],
    [-3, -1, 2], [-2, 3, 1], [1, -2, 3],
    [-3, -2, 1], [-1, 3, 2], [2, -1, 3],
    [1, 1, 3], [-1, 1, 3], [1, -1, 3], [-1, -1, 3],
    [1, 3, 1], [-1, 3, 1], [-1, -3, 1], [1, -3, 1],
    [3, 1, 1], [-3, -1, 1], [3, -1, 1], [-3, 1, 1],
];

impl FracRot {
    pub fn new(matrix: &M33<i32>) -> Self
    { FracRot(*matrix) }

    pub fn eye() -> Self
    { FracRot(M33::<i32>::eye()) }

    pub fn inversion() -> Self
    { FracRot(-M33::<i32>::eye()) }

    pub fn matrix(&self) -> &M33<i32>
    { &self.0 }

    pub fn det(&self) -> i32
    { self.0.det() }

    pub fn trace(&self) -> i32
    { self.0[0][0] + self.0[1][1] + self.0[2][2] }

    /// Apply to a column of fractional coordinates.
    pub fn transform(&self, v: &V3) -> V3
    { &self.0.map(|x| x as f64) * v }

    /// The crystallographic type of the rotation: `1, 2, 3, 4, 6` for
    /// proper rotations, negated for rotoinversions, or `0` when the
    /// matrix is not a crystallographic rotation at all.
    pub fn rotation_type(&self) -> i32 {
        match (self.det(), self.trace()) {
            (-1, -3) => -1,
            (-1, -2) => -6,
            (-1, -1) => -4,
            (-1, 0) => -3,
            (-1, 1) => -2,
            (1, -1) => 2,
            (1, 0) => 3,
            (1, 1) => 4,
            (1, 2) => 6,
            (1, 3) => 1,
            _ => 0,
        }
    }

    /// Smallest positive `n` with `self^n == identity`.
    pub fn order(&self) -> i32 {
        let n = self.rotation_type();
        if n > 0 {
            n
        } else if n % 2 == 0 {
            -n
        } else {
            -2 * n
        }
    }

    /// The rotation with any inversion factored out.
    pub fn proper(&self) -> FracRot {
        if self.det() < 0 { FracRot(-self.0) } else { *self }
    }

    /// `I + W + W^2 + ... + W^(order-1)`.
    ///
    /// Projects onto the invariant axis of a proper rotation; kills
    /// everything for a rotation without fixed nonzero vectors.
    pub fn accumulate(&self) -> M33<i32> {
        let order = self.order();
        if order == 1 {
            return self.0;
        }
        let mut sum = M33::<i32>::eye();
        let mut power = M33::<i32>::eye();
        for _ in 1..order {
            power = &power * &self.0;
            sum = &sum + &power;
        }
        sum
    }

    /// The invariant axis, for rotations that have one.
    pub fn rotation_axis(&self) -> Option<V3<i32>> {
        for axis in &ALL_ROTATION_AXES {
            let axis = V3(*axis);
            if &self.0 * &axis == axis {
                return Some(axis);
            }
        }
        None
    }

    /// Integer axes perpendicular to the rotation axis, in the sense
    /// of being annihilated by the projector onto the axis.
    pub fn orthogonal_axes(&self) -> Vec<V3<i32>> {
        let projector = self.proper().accumulate();
        ALL_ROTATION_AXES.iter()
            .map(|axis| V3(*axis))
            .filter(|axis| &projector * axis == V3::<i32>::zero())
            .collect()
    }
}

impl<'a, 'b> std::ops::Mul<&'b FracRot> for &'a FracRot {
    type Output = FracRot;

    fn mul(self, other: &'b FracRot) -> FracRot
    { FracRot(&self.0 * &other.0) }
}

// ---------------------------------------------------------------------------
// translations

/// A fractional translation in units of 1/12, normalized to `[0, 12)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FracTrans(V3<i32>);

impl FracTrans {
    pub fn zero() -> Self
    { FracTrans(V3([0; 3])) }

    /// From twelfths, wrapping into the unit cell.
    pub fn from_twelfths(v: &V3<i32>) -> Self
    { FracTrans(v.map(mod12)) }

    pub fn twelfths(&self) -> &V3<i32>
    { &self.0 }

    pub fn to_float(&self) -> V3
    { self.0.map(|x| x as f64 / 12.0) }
}

// ---------------------------------------------------------------------------
// full operations

/// A space group operation `x -> W x + t`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FracOp {
    pub rot: FracRot,
    pub trans: FracTrans,
}

impl FracOp {
    pub fn new(rot: &FracRot, trans: &FracTrans) -> Self
    { FracOp { rot: *rot, trans: *trans } }

    pub fn eye() -> Self
    { FracOp::new(&FracRot::eye(), &FracTrans::zero()) }

    pub fn inversion() -> Self
    { FracOp::new(&FracRot::inversion(), &FracTrans::zero()) }

    pub fn transform(&self, pos: &V3) -> V3
    { self.rot.transform(pos) + self.trans.to_float() }
}

impl<'a, 'b> std::ops::Mul<&'b FracOp> for &'a FracOp {
    type Output = FracOp;

    /// `(W1, t1) * (W2, t2) = (W1 W2, t1 + W1 t2)`.
    fn mul(self, other: &'b FracOp) -> FracOp {
        let rot = &self.rot * &other.rot;
        let trans = self.trans.0 + &self.rot.0 * &other.trans.0;
        FracOp::new(&rot, &FracTrans::from_twelfths(&trans))
    }
}

// ---------------------------------------------------------------------------
// centering

/// Bravais centering of a conventional cell.
///
/// The discriminants are a stable encoding used by callers that
/// serialize results.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Centering {
    None = 0,
    Primitive = 1,
    Body = 2,
    Face = 3,
    AFace = 4,
    BFace = 5,
    CFace = 6,
    Base = 7,
    Rhombohedral = 8,
    /// The reverse-setting hexagonal centering; only ever produced as
    /// an intermediate before the basis correction step.
    Hexagonal = 9,
}

impl Centering {
    pub fn raw(&self) -> u8
    { *self as u8 }

    /// How many lattice points the conventional cell holds.
    pub fn multiplicity(&self) -> usize {
        match *self {
            Centering::None | Centering::Primitive => 1,
            Centering::Body | Centering::AFace | Centering::BFace
                | Centering::CFace | Centering::Base => 2,
            Centering::Rhombohedral | Centering::Hexagonal => 3,
            Centering::Face => 4,
        }
    }

    /// The pure translations (in twelfths) added to a primitive set of
    /// operations to express it in this centered cell.
    pub fn lattice_translations(&self) -> Vec<V3<i32>> {
        match *self {
            Centering::None | Centering::Primitive | Centering::Base => {
                vec![V3([0, 0, 0])]
            },
            Centering::Face => vec![
                V3([0, 0, 0]), V3([0, 6, 6]), V3([6, 0, 6]), V3([6, 6, 0]),
            ],
            Centering::Rhombohedral => vec![
                V3([0, 0, 0]), V3([8, 4, 4]), V3([4, 8, 8]),
            ],
            Centering::Hexagonal => vec![
                V3([0, 0, 0]), V3([8, 4, 0]), V3([0, 8, 4]),
            ],
            Centering::Body => vec![V3([0, 0, 0]), V3([6, 6, 6])],
            Centering::AFace => vec![V3([0, 0, 0]), V3([0, 6, 6])],
            Centering::BFace => vec![V3([0, 0, 0]), V3([6, 0, 6])],
            Centering::CFace => vec![V3([0, 0, 0]), V3([6, 6, 0])],
        }
    }

    /// The rational transformation from this centered cell to the
    /// corresponding primitive cell, as `(numerators, denominator)`.
    pub fn to_primitive(&self) -> (M33<i32>, i32) {
        match *self {
            Centering::None | Centering::Primitive | Centering::Base => {
                (M33::<i32>::eye(), 1)
            },
            Centering::Body => {
                (mat::from_cols([[-1, 1, 1], [1, -1, 1], [1, 1, -1]]), 2)
            },
            Centering::Face => {
                (mat::from_cols([[0, 1, 1], [1, 0, 1], [1, 1, 0]]), 2)
            },
            Centering::AFace => {
                (mat::from_cols([[-2, 0, 0], [0, -1, 1], [0, 1, 1]]), 2)
            },
            Centering::BFace => {
                (mat::from_cols([[-1, 0, 1], [0, -2, 0], [1, 0, 1]]), 2)
            },
            Centering::CFace => {
                (mat::from_cols([[1, 1, 0], [1, -1, 0], [0, 0, -2]]), 2)
            },
            Centering::Rhombohedral => {
                (mat::from_cols([[2, 1, 1], [-1, 1, 1], [-1, -2, 1]]), 3)
            },
            Centering::Hexagonal => {
                (mat::from_cols([[2, 1, 0], [-1, 1, 0], [0, 0, 1]]), 3)
            },
        }
    }
}

// ---------------------------------------------------------------------------
// change of basis

/// A rational change of basis between two settings of a lattice,
/// stored together with its inverse.
///
/// Operations and coordinates are transformed by the *inverse* matrix
/// (new coordinates of an old object); lattices by the forward one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChangeOfBasis {
    forward: M33<i32>,
    forward_denominator: i32,
    inverse: M33<i32>,
    inverse_denominator: i32,
}

/// The rational inverse of `num / den`, normalized to a positive
/// denominator.
pub(crate) fn rational_inverse(num: &M33<i32>, den: i32) -> (M33<i32>, i32) {
    let det = num.det();
    let adj = num.adjugate();
    if det < 0 {
        (&adj * -den, -det)
    } else {
        (&adj * den, det)
    }
}

impl ChangeOfBasis {
    pub fn identity() -> Self
    { ChangeOfBasis::from_rational(&M33::<i32>::eye(), 1) }

    /// From an integer matrix with determinant `+-1`.
    pub fn from_int(matrix: &M33<i32>) -> Self
    { ChangeOfBasis::from_rational(matrix, 1) }

    pub fn from_rational(num: &M33<i32>, den: i32) -> Self {
        let (inverse, inverse_denominator) = rational_inverse(num, den);
        ChangeOfBasis {
            forward: *num,
            forward_denominator: den,
            inverse,
            inverse_denominator,
        }
    }

    pub fn inverse(&self) -> Self {
        ChangeOfBasis {
            forward: self.inverse,
            forward_denominator: self.inverse_denominator,
            inverse: self.forward,
            inverse_denominator: self.forward_denominator,
        }
    }

    pub fn forward_matrix(&self) -> (&M33<i32>, i32)
    { (&self.forward, self.forward_denominator) }

    /// Re-express a symmetry operation in the new basis:
    /// `W' = C^-1 W C`, `t' = C^-1 t`.
    pub fn transform_op(&self, op: &FracOp) -> FracOp {
        let rot = self.transform_rotation(&op.rot);
        let trans = (&self.inverse * op.trans.twelfths())
            .map(|x| x / self.inverse_denominator);
        FracOp::new(&rot, &FracTrans::from_twelfths(&trans))
    }

    /// The similarity transform of a rotation, which must come out
    /// integral for a valid basis change.
    pub fn transform_rotation(&self, rot: &FracRot) -> FracRot {
        let den = self.inverse_denominator * self.forward_denominator;
        let m = &(&self.inverse * rot.matrix()) * &self.forward;
        FracRot::new(&m.map(|x| x / den))
    }

    /// `C^-1 v` with truncating division, for vectors in twelfths.
    pub fn transform_twelfths(&self, v: &V3<i32>) -> V3<i32>
    { (&self.inverse * v).map(|x| x / self.inverse_denominator) }

    pub fn transform_float(&self, v: &V3) -> V3
    { &self.inverse.map(|x| x as f64) * v / (self.inverse_denominator as f64) }

    /// The new description of a lattice: rows become rational
    /// combinations of the old rows.
    pub fn transform_lattice(&self, lattice: &Lattice) -> Lattice {
        let coeffs = self.inverse.t().map(|x| x as f64) / (self.inverse_denominator as f64);
        Lattice::new(&(&coeffs * lattice.matrix()))
    }
}

// ---------------------------------------------------------------------------
// operation sets

/// A finite group of symmetry operations, kept sorted for determinism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetryOperationSet {
    pub operations: Vec<FracOp>,
    pub centering: Centering,
}

impl SymmetryOperationSet {
    pub fn from_operations(mut operations: Vec<FracOp>) -> Self {
        operations.sort();
        operations.dedup();
        let centering = detect_centering(&operations);
        SymmetryOperationSet { operations, centering }
    }

    /// Close a set of generators under composition.
    pub fn from_generators(generators: &[FracOp]) -> Self {
        let mut group: Vec<FracOp> = vec![];

        for k in generators {
            let mut i = group.len();
            let mut j = 0;
            let mut element = *k;
            loop {
                if !group.contains(&element) {
                    group.push(element);
                }
                if j > i {
                    i += 1;
                    j = 0;
                }
                if i == group.len() {
                    break;
                }
                element = &group[j] * &group[i];
                j += 1;
            }
        }

        SymmetryOperationSet::from_operations(group)
    }

    pub fn len(&self) -> usize
    { self.operations.len() }

    /// The distinct rotation parts.
    pub fn rotations(&self) -> Vec<FracRot> {
        let mut rotations: Vec<FracRot> = self.operations.iter()
            .map(|op| op.rot)
            .collect();
        rotations.sort();
        rotations.dedup();
        rotations
    }

    pub fn changed_basis(&self, change_of_basis: &ChangeOfBasis) -> Self {
        let operations = self.operations.iter()
            .map(|op| change_of_basis.transform_op(op))
            .collect();
        SymmetryOperationSet::from_operations(operations)
    }

    /// Add the pure lattice translations of a centering to every
    /// operation.
    pub fn adding_centering_operations(&self, centering: Centering) -> Self {
        let shifts = centering.lattice_translations();

        let mut operations = vec![];
        for op in &self.operations {
            for shift in &shifts {
                let trans = FracTrans::from_twelfths(&(op.trans.0 + shift));
                operations.push(FracOp::new(&op.rot, &trans));
            }
        }
        SymmetryOperationSet::from_operations(operations)
    }

    /// One representative atom per orbit of the group.
    pub fn asymmetric_atoms(
        &self,
        atoms: &[Atom],
        lattice: &Lattice,
        symprec: f64,
    ) -> Vec<Atom> {
        if atoms.is_empty() {
            return vec![];
        }

        let mut asymmetric = vec![atoms[0]];
        let mut orbit_of = vec![-1isize; atoms.len()];
        orbit_of[0] = 0;

        'atoms: for i in 0..atoms.len() {
            if orbit_of[i] != -1 {
                continue;
            }
            for j in 0..asymmetric.len() {
                for op in &self.operations {
                    let position = op.transform(&atoms[i].position);
                    if is_overlap(&position, &asymmetric[j].position, lattice, symprec) {
                        orbit_of[i] = j as isize;
                    }
                }
            }

            if orbit_of[i] == -1 {
                for j in 0..asymmetric.len() {
                    for op in &self.operations {
                        let position = op.transform(&atoms[i].position);
                        if !is_overlap(&position, &asymmetric[j].position, lattice, symprec) {
                            asymmetric.push(atoms[i]);
                            orbit_of[i] = (asymmetric.len() - 1) as isize;
                            continue 'atoms;
                        }
                    }
                }
            }
        }

        asymmetric
    }
}

// ---------------------------------------------------------------------------
// measured operations

/// A symmetry operation found in a structure: an exact rotation part
/// with the translation as measured.
///
/// The translation is kept in floating point because an arbitrary
/// placement of the structure's origin moves every translation by
/// `(W - 1) delta`, which lands off the twelfth grid for a generic
/// shift `delta`. Rounding only becomes valid after the origin shift
/// has been solved for.
#[derive(Debug, Copy, Clone)]
pub struct SeitzOp {
    pub rot: FracRot,
    pub trans: V3,
}

impl SeitzOp {
    /// Wraps the translation into `[0, 1)`.
    pub fn new(rot: &FracRot, trans: &V3) -> Self
    { SeitzOp { rot: *rot, trans: fract_v3(*trans) } }
}

/// The operations measured in a structure, in discovery order.
#[derive(Debug, Clone)]
pub struct SeitzOperationSet {
    pub operations: Vec<SeitzOp>,
}

impl SeitzOperationSet {
    pub fn new(operations: Vec<SeitzOp>) -> Self
    { SeitzOperationSet { operations } }

    /// Reinterpret tabulated operations as measured ones, for matching
    /// a known group against one of its own settings.
    pub fn from_frac_ops(operations: &[FracOp]) -> Self {
        let operations = operations.iter()
            .map(|op| SeitzOp::new(&op.rot, &op.trans.to_float()))
            .collect();
        SeitzOperationSet { operations }
    }

    pub fn len(&self) -> usize
    { self.operations.len() }

    /// The distinct rotation parts.
    pub fn rotations(&self) -> Vec<FracRot> {
        let mut rotations: Vec<FracRot> = self.operations.iter()
            .map(|op| op.rot)
            .collect();
        rotations.sort();
        rotations.dedup();
        rotations
    }

    pub fn changed_basis(&self, change_of_basis: &ChangeOfBasis) -> Self {
        let operations = self.operations.iter()
            .map(|op| SeitzOp::new(
                &change_of_basis.transform_rotation(&op.rot),
                &change_of_basis.transform_float(&op.trans),
            ))
            .collect();
        SeitzOperationSet { operations }
    }

    /// Add the pure lattice translations of a centering to every
    /// operation.
    pub fn adding_centering_operations(&self, centering: Centering) -> Self {
        let shifts = centering.lattice_translations();

        let mut operations = vec![];
        for op in &self.operations {
            for shift in &shifts {
                let trans = op.trans + shift.map(|x| x as f64 / 12.0);
                operations.push(SeitzOp::new(&op.rot, &trans));
            }
        }
        SeitzOperationSet { operations }
    }
}

fn pure_translations_of(operations: &[FracOp]) -> Vec<V3<i32>> {
    let mut rotations: Vec<FracRot> = operations.iter().map(|op| op.rot).collect();
    rotations.sort();
    rotations.dedup();

    let mut found: Vec<V3<i32>> = vec![];
    for rotation in rotations {
        let with_this_rotation: Vec<&FracOp> = operations.iter()
            .filter(|op| op.rot == rotation)
            .collect();
        for i in 0..with_this_rotation.len() {
            for j in i..with_this_rotation.len() {
                let diff = with_this_rotation[i].trans.0 - with_this_rotation[j].trans.0;
                found.push(diff.map(mod12));
            }
        }
    }
    found.sort_by_key(|v| (v.sqnorm(), *v));
    found.dedup();
    found
}

/// Classify the centering from the distinct pure translations.
fn detect_centering(operations: &[FracOp]) -> Centering {
    let found = pure_translations_of(operations);

    match found.len() {
        2 => {
            if found[1][0] == 0 {
                Centering::AFace
            } else if found[1][1] == 0 {
                Centering::BFace
            } else if found[1][2] == 0 {
                Centering::CFace
            } else {
                Centering::Body
            }
        },
        3 => {
            if found[1][0] == 0 || found[1][1] == 0 || found[1][2] == 0 {
                Centering::Hexagonal
            } else {
                Centering::Rhombohedral
            }
        },
        4 => Centering::Face,
        _ => Centering::Primitive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rot(rows: [[i32; 3]; 3]) -> FracRot
    { FracRot::new(&mat::from_array(rows)) }

    #[test]
    fn rotation_types() {
        assert_eq!(FracRot::eye().rotation_type(), 1);
        assert_eq!(FracRot::inversion().rotation_type(), -1);

        let two_fold = rot([[-1, 0, 0], [0, -1, 0], [0, 0, 1]]);
        assert_eq!(two_fold.rotation_type(), 2);
        assert_eq!(two_fold.order(), 2);

        let four_fold = rot([[0, -1, 0], [1, 0, 0], [0, 0, 1]]);
        assert_eq!(four_fold.rotation_type(), 4);
        assert_eq!(four_fold.order(), 4);

        let six_bar = rot([[-1, 1, 0], [-1, 0, 0], [0, 0, -1]]);
        assert_eq!(six_bar.rotation_type(), -6);
        assert_eq!(six_bar.order(), 6);
    }

    #[test]
    fn rotation_axis_of_z_rotations() {
        let four_fold = rot([[0, -1, 0], [1, 0, 0], [0, 0, 1]]);
        assert_eq!(four_fold.rotation_axis(), Some(V3([0, 0, 1])));

        let orthogonal = four_fold.orthogonal_axes();
        assert!(orthogonal.contains(&V3([1, 0, 0])));
        assert!(orthogonal.contains(&V3([0, 1, 0])));
        assert!(orthogonal.iter().all(|a| a[2] == 0));
    }

    #[test]
    fn seitz_composition() {
        // 2-fold screw along z
        let screw = FracOp::new(
            &rot([[-1, 0, 0], [0, -1, 0], [0, 0, 1]]),
            &FracTrans::from_twelfths(&V3([0, 0, 6])),
        );
        let squared = &screw * &screw;
        assert_eq!(squared, FracOp::eye());

        let moved = screw.transform(&V3([0.3, 0.1, 0.2]));
        assert!((moved[0] - -0.3).abs() < 1e-12);
        assert!((moved[1] - -0.1).abs() < 1e-12);
        assert!((moved[2] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn group_expansion_from_generators() {
        // P4: a single 4-fold generates a group of order 4
        let four_fold = FracOp::new(
            &rot([[0, -1, 0], [1, 0, 0], [0, 0, 1]]),
            &FracTrans::zero(),
        );
        let group = SymmetryOperationSet::from_generators(&[four_fold]);
        assert_eq!(group.len(), 4);
        assert!(group.operations.contains(&FracOp::eye()));
    }

    #[test]
    fn centering_detection() {
        let base = SymmetryOperationSet::from_operations(vec![FracOp::eye()]);
        assert_eq!(base.centering, Centering::Primitive);

        let body = base.adding_centering_operations(Centering::Body);
        assert_eq!(body.centering, Centering::Body);
        assert_eq!(body.len(), 2);

        let face = base.adding_centering_operations(Centering::Face);
        assert_eq!(face.centering, Centering::Face);
        assert_eq!(face.len(), 4);

        let a_face = base.adding_centering_operations(Centering::AFace);
        assert_eq!(a_face.centering, Centering::AFace);
    }

    #[test]
    fn measured_set_carries_float_translations() {
        // a 2-fold screw measured away from the standard origin
        let screw = SeitzOp::new(
            &rot([[-1, 0, 0], [0, -1, 0], [0, 0, 1]]),
            &V3([0.274, -0.312, 0.5]),
        );
        assert!((screw.trans[0] - 0.274).abs() < 1e-12);
        assert!((screw.trans[1] - 0.688).abs() < 1e-12);

        let set = SeitzOperationSet::new(vec![
            SeitzOp::new(&FracRot::eye(), &V3([0.0; 3])),
            screw,
        ]);
        assert_eq!(set.rotations().len(), 2);

        let body = set.adding_centering_operations(Centering::Body);
        assert_eq!(body.len(), 4);
        assert!(body.operations.iter().any(|op| {
            op.rot == FracRot::eye() && (op.trans - V3([0.5; 3])).sqnorm() < 1e-18
        }));
    }

    #[test]
    fn change_of_basis_round_trip() {
        let c = ChangeOfBasis::from_int(&mat::from_cols([
            [0, 0, 1], [1, 0, 0], [0, 1, 0],
        ]));
        let op = FracOp::new(
            &rot([[-1, 0, 0], [0, 1, 0], [0, 0, -1]]),
            &FracTrans::from_twelfths(&V3([6, 0, 0])),
        );
        let there = c.transform_op(&op);
        let back = c.inverse().transform_op(&there);
        assert_eq!(back, op);
    }

    #[test]
    fn centering_transform_denominators() {
        for &centering in &[
            Centering::Body, Centering::Face, Centering::AFace,
            Centering::BFace, Centering::CFace,
            Centering::Rhombohedral, Centering::Hexagonal,
        ] {
            let (num, den) = centering.to_primitive();
            // the transform reduces cell volume by the multiplicity
            let det = num.det() as f64 / (den as f64).powi(3);
            assert!((det.abs() - 1.0 / centering.multiplicity() as f64).abs() < 1e-12);
        }
    }
}
