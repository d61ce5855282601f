use std::collections::HashMap;

use crate::core::lattice::Lattice;
use crate::util::{fract_v3, min_image};
use spgr_array_types::{V3, M33};

/// An atom in fractional coordinates.
///
/// Positions may lie outside `[0, 1)`; everything in this crate
/// compares positions modulo the lattice.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Atom {
    pub position: V3,
    pub type_id: usize,
    /// Site occupancy in `(0, 1]`; `1.0` when occupancy is not modeled.
    pub occupancy: f64,
}

impl Atom {
    pub fn new(type_id: usize, position: V3) -> Self
    { Atom { position, type_id, occupancy: 1.0 } }

    pub fn with_occupancy(type_id: usize, position: V3, occupancy: f64) -> Self
    { Atom { position, type_id, occupancy } }
}

/// Whether two atoms count as the same decoration for symmetry purposes.
///
/// With partial occupancies allowed, every site can host a mixture and
/// only geometry matters; otherwise both the chemical type and the
/// occupancy must agree.
pub(crate) fn same_species(a: &Atom, b: &Atom, allow_partial_occupancies: bool) -> bool {
    if allow_partial_occupancies {
        true
    } else {
        a.type_id == b.type_id && (a.occupancy - b.occupancy).abs() < 1e-8
    }
}

/// The type id that occurs least often, breaking ties towards the
/// smallest id so the choice is deterministic.
pub(crate) fn least_frequent_type(atoms: &[Atom]) -> Option<usize> {
    let mut histogram = HashMap::new();
    for atom in atoms {
        *histogram.entry(atom.type_id).or_insert(0usize) += 1;
    }
    histogram.into_iter()
        .min_by_key(|&(type_id, count)| (count, type_id))
        .map(|(type_id, _)| type_id)
}

/// The subset of atoms used to seed translation searches.
pub(crate) fn reduced_atom_set(atoms: &[Atom], allow_partial_occupancies: bool) -> Vec<Atom> {
    if allow_partial_occupancies {
        atoms.to_vec()
    } else {
        match least_frequent_type(atoms) {
            None => vec![],
            Some(min_type) => {
                atoms.iter().cloned().filter(|a| a.type_id == min_type).collect()
            },
        }
    }
}

/// Squared fractional distance between two positions, minimum image.
pub(crate) fn frac_distance_squared(a: &V3, b: &V3) -> f64 {
    let dr = (a - b).map(f64::abs);
    min_image(dr).sqnorm()
}

/// Whether `(rotation, translation)` maps every atom onto an atom of
/// matching decoration, to within `symprec` in fractional coordinates.
pub(crate) fn is_overlap_all_atoms(
    translation: &V3,
    rotation: &M33<i32>,
    atoms: &[Atom],
    symprec: f64,
    allow_partial_occupancies: bool,
) -> bool {
    let precision = symprec * symprec;
    let rotation = rotation.map(|x| x as f64);

    for atom in atoms {
        let pos_rot = &rotation * &atom.position + translation;

        let found = atoms.iter().any(|other| {
            same_species(atom, other, allow_partial_occupancies)
                && frac_distance_squared(&pos_rot, &other.position) < precision
        });
        if !found {
            return false;
        }
    }
    true
}

/// Candidate translations that, combined with `rotation`, leave the
/// whole decorated structure invariant.
///
/// Only translations taking the first reduced atom onto some other
/// reduced atom need to be considered.
pub(crate) fn primitive_translation_vectors(
    reduced_atoms: &[Atom],
    atoms: &[Atom],
    rotation: &M33<i32>,
    symprec: f64,
    allow_partial_occupancies: bool,
) -> Vec<V3> {
    let mut translations = vec![];
    if let Some(first) = reduced_atoms.first() {
        let origin = &rotation.map(|x| x as f64) * &first.position;

        for atom in reduced_atoms {
            let vec = atom.position - origin;
            if is_overlap_all_atoms(&vec, rotation, atoms, symprec, allow_partial_occupancies) {
                translations.push(vec);
            }
        }
    }
    translations
}

/// Re-express atoms in the cell `to` and drop duplicates that become
/// images of each other there.
///
/// `from` must be a superlattice of `to` (up to tolerance) for the
/// result to make sense.
pub(crate) fn trim_to_cell(
    atoms: &[Atom],
    from: &Lattice,
    to: &Lattice,
    symprec: f64,
) -> Vec<Atom> {
    let change_of_basis = from.matrix() * to.inverse_matrix();

    let trimmed: Vec<Atom> = atoms.iter().map(|atom| Atom {
        position: fract_v3(&atom.position * &change_of_basis),
        ..*atom
    }).collect();

    let mut overlap_table = vec![usize::max_value(); trimmed.len()];
    for i in 0..trimmed.len() {
        overlap_table[i] = i;
        for j in 0..trimmed.len() {
            if frac_distance_squared(&trimmed[i].position, &trimmed[j].position) < symprec {
                if overlap_table[j] == j {
                    overlap_table[i] = j;
                    break;
                }
            }
        }
    }

    trimmed.iter().enumerate()
        .filter(|&(i, _)| overlap_table[i] == i)
        .map(|(_, atom)| *atom)
        .collect()
}

/// Whether two fractional positions describe the same site of the
/// given lattice, by cartesian distance.
pub(crate) fn is_overlap(a: &V3, b: &V3, lattice: &Lattice, symprec: f64) -> bool {
    let dr = min_image((a - b).map(f64::abs));
    lattice.sqnorm_frac(&dr) < symprec * symprec
}
