//! The full space-group determination pipeline.
//!
//! Ties the cell reductions, the lattice-symmetry search, and the
//! tabulated Hall settings together into [`find_space_group`].

use crate::{FailResult, SymmetryError};
use crate::core::atoms::{Atom, reduced_atom_set, trim_to_cell, primitive_translation_vectors};
use crate::core::cell::SymmetryCell;
use crate::core::lattice::Lattice;
use crate::oper::symmops::{FracRot, ChangeOfBasis};
use crate::oper::symmops::{SeitzOp, SeitzOperationSet, Centering};
use crate::oper::point_group::{PointGroup, Laue};
use crate::oper::hall::{HallGroup, hall_number_for_space_group};
use crate::oper::matching::match_space_group;
use crate::algo::reduction::reduce_niggli;
use crate::algo::delaunay::{reduce_delaunay, reduce_delaunay_2d};
use crate::algo::primitive::find_primitive_cell;
use crate::algo::rotations::find_lattice_symmetry;
use crate::util::fract_v3;
use spgr_array_types::{V3, M33};

/// The combined rotational and translational symmetry of a decorated
/// lattice.
///
/// Every rotation of the bare lattice is tried against the atoms; the
/// rotations that admit at least one compatible translation survive,
/// each paired with all of its translations. The translations are
/// kept as measured, since a structure described away from the
/// standard origin carries translations off the twelfth grid.
pub fn find_space_group_symmetry(
    reduced_atoms: &[Atom],
    atoms: &[Atom],
    lattice_rotations: &[FracRot],
    symprec: f64,
    allow_partial_occupancies: bool,
) -> SeitzOperationSet {
    let mut operations = vec![];
    for rotation in lattice_rotations {
        let translations = primitive_translation_vectors(
            reduced_atoms, atoms, rotation.matrix(), symprec, allow_partial_occupancies);

        for translation in translations {
            operations.push(SeitzOp::new(rotation, &translation));
        }
    }
    SeitzOperationSet::new(operations)
}

/// A successful space-group determination.
#[derive(Debug, Clone)]
pub struct SpaceGroupMatch {
    /// Index of the matched setting in the 530-entry Hall table.
    pub hall_number: usize,
    /// International space-group number, 1 through 230.
    pub number: usize,
    pub hm_symbol: &'static str,
    pub hall_symbol: &'static str,
    pub point_group: &'static PointGroup,
    pub centering: Centering,
    /// Origin of the standard setting, in fractional coordinates of
    /// the conventional cell.
    pub origin: V3,
    /// Change of basis from the derived conventional cell to the
    /// matched standard setting.
    pub change_of_basis: ChangeOfBasis,
    /// Idealized conventional cell.
    pub cell: SymmetryCell,
    /// Conventional lattice before idealization.
    pub lattice: Lattice,
    /// All input sites, re-expressed in the conventional cell.
    pub atoms: Vec<Atom>,
    /// One representative site per orbit of the space group.
    pub asymmetric_atoms: Vec<Atom>,
}

/// Determine the space group of a decorated lattice.
///
/// `atoms` are fractional positions in `lattice`. Sites closer than
/// `symprec` (cartesian) are treated as coincident. With
/// `allow_partial_occupancies`, sites of different type may be mapped
/// onto each other by a candidate symmetry; otherwise a symmetry must
/// match types and occupancies exactly.
pub fn find_space_group(
    lattice: &Lattice,
    atoms: &[Atom],
    symprec: f64,
    allow_partial_occupancies: bool,
) -> FailResult<SpaceGroupMatch> {
    if lattice.volume().abs() < 1.0e-10 {
        throw!(SymmetryError::SingularMatrix);
    }
    if atoms.is_empty() {
        throw!(SymmetryError::NotFound("no atoms to match against"));
    }

    // only translations mapping the least frequent species onto itself
    // can be lattice translations
    let reduced_atoms = reduced_atom_set(atoms, allow_partial_occupancies);

    let primitive = find_primitive_cell(
        &reduced_atoms, atoms, lattice, symprec, allow_partial_occupancies)?;
    let delaunay = reduce_delaunay(&primitive, symprec)?;
    trace!("delaunay-reduced primitive cell: {:?}", delaunay.matrix());

    let lattice_rotations = find_lattice_symmetry(&delaunay, symprec);

    // re-express the atoms in the delaunay cell, merging duplicates
    let atoms_in_cell = trim_to_cell(atoms, lattice, &delaunay, symprec);
    let reduced_in_cell = reduced_atom_set(&atoms_in_cell, allow_partial_occupancies);

    // the point group of the crystal is a subgroup of that of the lattice
    let space_group_symmetries = find_space_group_symmetry(
        &reduced_in_cell, &atoms_in_cell, &lattice_rotations,
        symprec, allow_partial_occupancies);

    let rotations = space_group_symmetries.rotations();
    let group = PointGroup::from_rotations(&rotations)
        .ok_or(SymmetryError::NoMatchingPointGroup)?;
    trace!("point group: {} ({})", group.symbol, group.schoenflies);

    // basis taking the primitive setting to a convenient standard
    // setting (Boisen & Gibbs, theorem T.2.10)
    let m_prime = group.construct_axes(&rotations)
        .ok_or(SymmetryError::NotFound("no consistent point-group axes"))?;

    // adjust for the Laue classes whose standard setting is not fixed
    // by the axes alone
    let preliminary: M33<i32> = match group.laue {
        Laue::L1 => {
            let cell = SymmetryCell::from_lattice(&delaunay.transformed_by(&m_prime));
            reduce_niggli(&cell)?.change_of_basis
        }
        Laue::L2m => {
            // unique axis b; the shortest a and c in its plane
            let oriented = delaunay.transformed_by(&m_prime);
            let reduced_2d = reduce_delaunay_2d(&oriented, 1, symprec)?;
            (reduced_2d.matrix() * delaunay.inverse_matrix()).t()
                .map(|x| x.round() as i32)
        }
        _ => m_prime,
    };

    let mut centering = group.compute_centering(&preliminary);
    let inverse_m = &preliminary * &group.compute_basis_correction(&preliminary, &mut centering);

    let conventional_lattice = delaunay.transformed_by(&inverse_m);
    let conventional_symmetry = space_group_symmetries
        .changed_basis(&ChangeOfBasis::from_int(&inverse_m))
        .adding_centering_operations(centering);

    for space_group in 1..=230 {
        let hall_number = match hall_number_for_space_group(space_group) {
            Some(hall_number) => hall_number,
            None => continue,
        };
        let hall = match HallGroup::get(hall_number) {
            Some(hall) => hall,
            None => continue,
        };

        let matched = match_space_group(
            hall, group.number, centering, &conventional_symmetry, symprec)?;
        if let Some((origin, change_of_basis)) = matched {
            let changed_lattice = change_of_basis.transform_lattice(&conventional_lattice);

            // delaunay fractional coordinates to changed-cell ones
            let transform = (delaunay.matrix() * changed_lattice.inverse_matrix()).t();
            let transformed_atoms: Vec<Atom> = atoms_in_cell.iter().map(|atom| Atom {
                position: fract_v3(&transform * &atom.position + origin),
                ..*atom
            }).collect();

            // orbits are taken under the tabulated setting, whose
            // operations the transformed atoms now satisfy
            let hall_operations = hall.operations()?;
            let asymmetric_atoms = hall_operations.asymmetric_atoms(
                &transformed_atoms, &changed_lattice, symprec);

            let hall_group = hall.point_group()?;
            let rhombohedral_axes = hall.hm_symbol.contains("Rhombohedral");
            let idealized = SymmetryCell::from_lattice(&changed_lattice)
                .conventional_lattice(hall_group.holohedry, rhombohedral_axes);

            info!("matched space group {} ({})", space_group, hall.hm_symbol);
            return Ok(SpaceGroupMatch {
                hall_number,
                number: hall.number,
                hm_symbol: hall.hm_symbol,
                hall_symbol: hall.symbol,
                point_group: group,
                centering,
                origin,
                change_of_basis,
                cell: SymmetryCell::from_lattice(&idealized),
                lattice: changed_lattice,
                atoms: transformed_atoms,
                asymmetric_atoms,
            });
        }
    }

    throw!(SymmetryError::NoMatchingSpaceGroup)
}

/// Classify the point group of a decorated lattice, without matching
/// a full space-group setting.
pub fn find_point_group(
    lattice: &Lattice,
    atoms: &[Atom],
    symprec: f64,
    allow_partial_occupancies: bool,
) -> FailResult<&'static PointGroup> {
    if lattice.volume().abs() < 1.0e-10 {
        throw!(SymmetryError::SingularMatrix);
    }
    if atoms.is_empty() {
        throw!(SymmetryError::NotFound("no atoms to match against"));
    }

    let reduced_atoms = reduced_atom_set(atoms, allow_partial_occupancies);
    let primitive = find_primitive_cell(
        &reduced_atoms, atoms, lattice, symprec, allow_partial_occupancies)?;
    let delaunay = reduce_delaunay(&primitive, symprec)?;
    let lattice_rotations = find_lattice_symmetry(&delaunay, symprec);

    let atoms_in_cell = trim_to_cell(atoms, lattice, &delaunay, symprec);
    let reduced_in_cell = reduced_atom_set(&atoms_in_cell, allow_partial_occupancies);
    let symmetries = find_space_group_symmetry(
        &reduced_in_cell, &atoms_in_cell, &lattice_rotations,
        symprec, allow_partial_occupancies);

    PointGroup::from_rotations(&symmetries.rotations())
        .ok_or(SymmetryError::NoMatchingPointGroup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spgr_array_types::mat;

    const SYMPREC: f64 = 1e-5;

    fn cubic(a: f64) -> Lattice
    { Lattice::diagonal(&[a, a, a]) }

    fn find(lattice: &Lattice, atoms: &[Atom]) -> SpaceGroupMatch
    { find_space_group(lattice, atoms, SYMPREC, false).unwrap() }

    #[test]
    fn simple_cubic() {
        let atoms = [Atom::new(0, V3([0.0, 0.0, 0.0]))];
        let result = find(&cubic(4.0), &atoms);
        assert_eq!(result.number, 221);
        assert_eq!(result.point_group.symbol, "m-3m");
        assert_eq!(result.centering, Centering::Primitive);
        assert_eq!(result.asymmetric_atoms.len(), 1);
    }

    #[test]
    fn face_centered_cubic() {
        let atoms = [
            Atom::new(0, V3([0.0, 0.0, 0.0])),
            Atom::new(0, V3([0.0, 0.5, 0.5])),
            Atom::new(0, V3([0.5, 0.0, 0.5])),
            Atom::new(0, V3([0.5, 0.5, 0.0])),
        ];
        let result = find(&cubic(3.61), &atoms);
        assert_eq!(result.number, 225);
        assert_eq!(result.centering, Centering::Face);
        assert_eq!(result.atoms.len(), 4);
        assert_eq!(result.asymmetric_atoms.len(), 1);
    }

    #[test]
    fn body_centered_cubic() {
        let atoms = [
            Atom::new(0, V3([0.0, 0.0, 0.0])),
            Atom::new(0, V3([0.5, 0.5, 0.5])),
        ];
        let result = find(&cubic(2.87), &atoms);
        assert_eq!(result.number, 229);
        assert_eq!(result.centering, Centering::Body);
        assert_eq!(result.asymmetric_atoms.len(), 1);
    }

    #[test]
    fn point_group_of_decorated_lattices() {
        let bcc = [
            Atom::new(0, V3([0.0, 0.0, 0.0])),
            Atom::new(0, V3([0.5, 0.5, 0.5])),
        ];
        let group = find_point_group(&cubic(2.87), &bcc, SYMPREC, false).unwrap();
        assert_eq!(group.number, 32);
        assert_eq!(group.symbol, "m-3m");

        let zb = [
            Atom::new(0, V3([0.0, 0.0, 0.0])),
            Atom::new(1, V3([0.25, 0.25, 0.25])),
            Atom::new(1, V3([0.25, 0.75, 0.75])),
            Atom::new(1, V3([0.75, 0.25, 0.75])),
            Atom::new(1, V3([0.75, 0.75, 0.25])),
            Atom::new(0, V3([0.0, 0.5, 0.5])),
            Atom::new(0, V3([0.5, 0.0, 0.5])),
            Atom::new(0, V3([0.5, 0.5, 0.0])),
        ];
        let group = find_point_group(&cubic(5.43), &zb, SYMPREC, false).unwrap();
        assert_eq!(group.symbol, "-43m");
        assert!(!group.centrosymmetric);
    }

    #[test]
    fn cesium_chloride() {
        let atoms = [
            Atom::new(0, V3([0.0, 0.0, 0.0])),
            Atom::new(1, V3([0.5, 0.5, 0.5])),
        ];
        let result = find(&cubic(4.11), &atoms);
        assert_eq!(result.number, 221);
        assert_eq!(result.centering, Centering::Primitive);
        assert_eq!(result.asymmetric_atoms.len(), 2);
    }

    #[test]
    fn rock_salt() {
        let atoms = [
            Atom::new(0, V3([0.0, 0.0, 0.0])),
            Atom::new(0, V3([0.0, 0.5, 0.5])),
            Atom::new(0, V3([0.5, 0.0, 0.5])),
            Atom::new(0, V3([0.5, 0.5, 0.0])),
            Atom::new(1, V3([0.5, 0.5, 0.5])),
            Atom::new(1, V3([0.5, 0.0, 0.0])),
            Atom::new(1, V3([0.0, 0.5, 0.0])),
            Atom::new(1, V3([0.0, 0.0, 0.5])),
        ];
        let result = find(&cubic(5.64), &atoms);
        assert_eq!(result.number, 225);
        assert_eq!(result.asymmetric_atoms.len(), 2);
    }

    #[test]
    fn zinc_blende() {
        let atoms = [
            Atom::new(0, V3([0.0, 0.0, 0.0])),
            Atom::new(0, V3([0.0, 0.5, 0.5])),
            Atom::new(0, V3([0.5, 0.0, 0.5])),
            Atom::new(0, V3([0.5, 0.5, 0.0])),
            Atom::new(1, V3([0.25, 0.25, 0.25])),
            Atom::new(1, V3([0.25, 0.75, 0.75])),
            Atom::new(1, V3([0.75, 0.25, 0.75])),
            Atom::new(1, V3([0.75, 0.75, 0.25])),
        ];
        let result = find(&cubic(5.43), &atoms);
        assert_eq!(result.number, 216);
        assert_eq!(result.centering, Centering::Face);
    }

    #[test]
    fn shifted_origin_is_recovered() {
        let shift = V3([0.3, 0.3, 0.3]);
        let atoms = [
            Atom::new(0, V3([0.0, 0.0, 0.0]) + shift),
            Atom::new(0, V3([0.0, 0.5, 0.5]) + shift),
            Atom::new(0, V3([0.5, 0.0, 0.5]) + shift),
            Atom::new(0, V3([0.5, 0.5, 0.0]) + shift),
        ];
        let result = find(&cubic(3.61), &atoms);
        assert_eq!(result.number, 225);
        assert_eq!(result.asymmetric_atoms.len(), 1);
    }

    #[test]
    fn triclinic_lattice_with_inversion_only() {
        let lattice = Lattice::new(&mat::from_array([
            [4.0, 0.1, 0.2],
            [0.3, 5.0, 0.1],
            [0.2, 0.1, 6.0],
        ]));
        let atoms = [Atom::new(0, V3([0.0, 0.0, 0.0]))];
        let result = find(&lattice, &atoms);
        assert_eq!(result.number, 2);
        assert_eq!(result.point_group.symbol, "-1");
    }

    #[test]
    fn monoclinic_lattice() {
        let beta = 100f64.to_radians();
        let lattice = Lattice::new(&mat::from_array([
            [5.0, 0.0, 0.0],
            [0.0, 4.0, 0.0],
            [6.0 * beta.cos(), 0.0, 6.0 * beta.sin()],
        ]));
        let atoms = [Atom::new(0, V3([0.0, 0.0, 0.0]))];
        let result = find(&lattice, &atoms);
        assert_eq!(result.number, 10);
        assert_eq!(result.centering, Centering::Primitive);
    }

    #[test]
    fn orthorhombic_lattice() {
        let lattice = Lattice::diagonal(&[3.0, 4.0, 5.0]);
        let atoms = [Atom::new(0, V3([0.0, 0.0, 0.0]))];
        let result = find(&lattice, &atoms);
        assert_eq!(result.number, 47);
    }

    #[test]
    fn tetragonal_lattice() {
        let lattice = Lattice::diagonal(&[3.0, 3.0, 5.0]);
        let atoms = [Atom::new(0, V3([0.0, 0.0, 0.0]))];
        let result = find(&lattice, &atoms);
        assert_eq!(result.number, 123);
    }

    #[test]
    fn hexagonal_lattice() {
        let lattice = Lattice::new(&mat::from_array([
            [3.0, 0.0, 0.0],
            [-1.5, 1.5 * 3f64.sqrt(), 0.0],
            [0.0, 0.0, 5.0],
        ]));
        let atoms = [Atom::new(0, V3([0.0, 0.0, 0.0]))];
        let result = find(&lattice, &atoms);
        assert_eq!(result.number, 191);
    }

    #[test]
    fn hexagonal_close_packed() {
        let a = 2.51;
        let c = 4.07;
        let lattice = Lattice::new(&mat::from_array([
            [a, 0.0, 0.0],
            [-0.5 * a, 0.5 * a * 3f64.sqrt(), 0.0],
            [0.0, 0.0, c],
        ]));
        let atoms = [
            Atom::new(0, V3([1.0 / 3.0, 2.0 / 3.0, 0.25])),
            Atom::new(0, V3([2.0 / 3.0, 1.0 / 3.0, 0.75])),
        ];
        let result = find(&lattice, &atoms);
        assert_eq!(result.number, 194);
        assert_eq!(result.asymmetric_atoms.len(), 1);
    }

    #[test]
    fn rhombohedral_lattice() {
        // primitive rhombohedral cell, alpha well away from 60 and 90
        let cell = SymmetryCell::new(4.0, 4.0, 4.0, 75.0, 75.0, 75.0);
        let atoms = [Atom::new(0, V3([0.0, 0.0, 0.0]))];
        let result = find(&cell.lattice(), &atoms);
        assert_eq!(result.number, 166);
        assert_eq!(result.centering, Centering::Rhombohedral);
    }

    #[test]
    fn singular_lattice_is_rejected() {
        let lattice = Lattice::new(&mat::from_array([
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]));
        let atoms = [Atom::new(0, V3([0.0, 0.0, 0.0]))];
        assert!(find_space_group(&lattice, &atoms, SYMPREC, false).is_err());
    }

    #[test]
    fn partial_occupancies_merge_species() {
        // two species on one site class only share symmetry when
        // type-blind matching is allowed
        let atoms = [
            Atom::with_occupancy(0, V3([0.0, 0.0, 0.0]), 0.5),
            Atom::with_occupancy(1, V3([0.5, 0.5, 0.5]), 0.5),
        ];
        let strict = find_space_group(&cubic(3.0), &atoms, SYMPREC, false).unwrap();
        assert_eq!(strict.number, 221);

        let blind = find_space_group(&cubic(3.0), &atoms, SYMPREC, true).unwrap();
        assert_eq!(blind.number, 229);
    }

    #[test]
    fn symmetry_operation_search_keeps_compatible_rotations() {
        // CsCl decoration kills no rotation of the cubic lattice but
        // restricts each to a single translation
        let atoms = [
            Atom::new(0, V3([0.0, 0.0, 0.0])),
            Atom::new(1, V3([0.5, 0.5, 0.5])),
        ];
        let lattice = cubic(4.11);
        let rotations = find_lattice_symmetry(&lattice, SYMPREC);
        assert_eq!(rotations.len(), 48);

        let reduced = reduced_atom_set(&atoms, false);
        let set = find_space_group_symmetry(&reduced, &atoms, &rotations, SYMPREC, false);
        assert_eq!(set.len(), 48);
        assert!(set.operations.iter().all(|op| op.trans.sqnorm() < 1e-16));
    }

    #[test]
    fn space_group_survives_random_origin_shifts() {
        use rand::{Rng, SeedableRng, StdRng};
        let mut rng = StdRng::from_seed(&[41, 8]);

        let diamond: Vec<Atom> = [
            [0.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0],
            [0.25, 0.25, 0.25], [0.25, 0.75, 0.75],
            [0.75, 0.25, 0.75], [0.75, 0.75, 0.25],
        ].iter().map(|&p| Atom::new(0, V3(p))).collect();

        let beta = 104f64.to_radians();
        let monoclinic = Lattice::new(&mat::from_array([
            [5.0, 0.0, 0.0],
            [0.0, 4.0, 0.0],
            [6.0 * beta.cos(), 0.0, 6.0 * beta.sin()],
        ]));
        let single = [Atom::new(0, V3([0.0, 0.0, 0.0]))];

        for _ in 0..6 {
            // a generic shift, nowhere near the twelfth grid
            let shift = V3::from_fn(|_| rng.gen_range(-0.1, 0.1));

            let shifted: Vec<Atom> = diamond.iter().map(|atom| Atom {
                position: fract_v3(atom.position + shift),
                ..*atom
            }).collect();
            let result = find(&cubic(3.567), &shifted);
            assert_eq!(result.number, 227, "diamond under {:?}", shift);
            assert_eq!(result.asymmetric_atoms.len(), 1);

            let shifted: Vec<Atom> = single.iter().map(|atom| Atom {
                position: fract_v3(atom.position + shift),
                ..*atom
            }).collect();
            let result = find(&monoclinic, &shifted);
            assert_eq!(result.number, 10, "monoclinic under {:?}", shift);
        }
    }
}
