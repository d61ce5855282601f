//! Search for the primitive cell of a decorated lattice.

use crate::{FailResult, SymmetryError};
use crate::core::atoms::{Atom, is_overlap_all_atoms};
use crate::core::lattice::Lattice;
use crate::util::Tol;
use spgr_array_types::{V3, M33, mat, inv};

/// Find the smallest cell whose lattice translations all map the
/// decorated structure onto itself.
///
/// `reduced_atoms` is the seed subset (typically the atoms of the
/// least frequent type); only translations taking its first member
/// onto another member can possibly be lattice translations.
///
/// Returns the input lattice unchanged when the cell is already
/// primitive.
pub fn find_primitive_cell(
    reduced_atoms: &[Atom],
    atoms: &[Atom],
    lattice: &Lattice,
    symprec: f64,
    allow_partial_occupancies: bool,
) -> FailResult<Lattice> {
    let mut translations: Vec<V3> = vec![];

    if !atoms.is_empty() {
        if let Some(first) = reduced_atoms.first() {
            let origin = first.position;
            for atom in reduced_atoms {
                let vec = atom.position - origin;
                let eye = M33::<i32>::eye();
                if is_overlap_all_atoms(&vec, &eye, atoms, symprec, allow_partial_occupancies) {
                    translations.push(vec);
                }
            }
            translations.push(V3([1.0, 0.0, 0.0]));
            translations.push(V3([0.0, 1.0, 0.0]));
            translations.push(V3([0.0, 0.0, 1.0]));
        }
    }

    let size = translations.len();
    if size == 3 {
        return Ok(lattice.clone());
    }

    let mut smallest_cell = lattice.clone();
    let initial_volume = lattice.matrix().det();
    let mut minimum_volume = initial_volume;

    for i in 0..size {
        for j in i + 1..size {
            for k in j + 1..size {
                let cart = mat::from_array([
                    lattice.to_carts(&translations[i]).0,
                    lattice.to_carts(&translations[j]).0,
                    lattice.to_carts(&translations[k]).0,
                ]);
                let volume = cart.det().abs();

                if volume > 1.0 && volume < minimum_volume {
                    minimum_volume = volume;
                    smallest_cell = Lattice::new(&cart);

                    if (initial_volume / volume).round() as i64 == (size as i64) - 2 {
                        // snap the fractional sub-basis to exact
                        // integers in its own inverse, which cleans up
                        // the float noise accumulated above
                        let relative = mat::from_array([
                            translations[i].0,
                            translations[j].0,
                            translations[k].0,
                        ]);
                        let snapped = Tol(1e-4).unfloat_m33(&inv(&relative))
                            .map_err(|_| SymmetryError::InconsistentPrimitiveCell)?;
                        if snapped.det() == 0 {
                            throw!(SymmetryError::InconsistentPrimitiveCell);
                        }
                        let matrix = &inv(&snapped.map(|x| x as f64)) * lattice.matrix();
                        return Ok(Lattice::new(&matrix));
                    }
                }
            }
        }
    }
    Ok(smallest_cell)
}
