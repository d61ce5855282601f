//! Delaunay cell reduction.
//!
//! Reduces a basis by repeatedly flipping vectors of the "extended
//! basis" `{b1, b2, b3, -(b1+b2+b3)}` until all pairwise inner
//! products are non-positive, then picks the three shortest
//! independent vectors from the superbase. Unlike Niggli reduction
//! this works directly on cartesian vectors.

use crate::{FailResult, SymmetryError};
use crate::core::lattice::Lattice;
use ordered_float::OrderedFloat;
use spgr_array_types::{V3, dot, mat};

const MAX_STEPS: usize = 10_000;

/// One pass over the extended basis. Returns `true` when no pair of
/// vectors has a positive inner product.
fn reduce_basis_once(basis: &mut [V3; 4], symprec: f64) -> bool {
    for i in 0..4 {
        for j in i + 1..4 {
            if dot(&basis[i], &basis[j]) > symprec {
                for k in 0..4 {
                    if k != i && k != j {
                        basis[k] = basis[k] + basis[i];
                    }
                }
                basis[i] = -basis[i];
                return false;
            }
        }
    }
    true
}

/// The shortest three independent vectors from the reduced superbase,
/// as a right-handed lattice.
fn shortest_vectors(basis: &[V3; 4], symprec: f64) -> FailResult<Lattice> {
    let mut b = [
        basis[0], basis[1], basis[2], basis[3],
        basis[0] + basis[1],
        basis[1] + basis[2],
        basis[2] + basis[0],
    ];
    b.sort_by_key(|v| OrderedFloat(v.sqnorm()));

    for i in 2..7 {
        let candidate = mat::from_array([b[0].0, b[1].0, b[i].0]);
        let volume = candidate.det();
        if volume.abs() > symprec {
            let matrix = if volume > 0.0 { candidate } else { -candidate };
            return Ok(Lattice::new(&matrix));
        }
    }
    throw!(SymmetryError::NotFound("no independent short vectors in delaunay set"))
}

/// Compute the Delaunay-reduced description of a lattice.
pub fn reduce_delaunay(lattice: &Lattice, symprec: f64) -> FailResult<Lattice> {
    let v = lattice.vectors();
    let mut extended = [v[0], v[1], v[2], -(v[0] + v[1] + v[2])];

    let mut counter = 0;
    while !reduce_basis_once(&mut extended, symprec) {
        counter += 1;
        if counter > MAX_STEPS {
            throw!(SymmetryError::ReductionDidNotConverge);
        }
    }

    shortest_vectors(&extended, symprec)
}

fn reduce_basis_2d_once(basis: &mut [V3; 3], symprec: f64) -> bool {
    for i in 0..3 {
        for j in i + 1..3 {
            if dot(&basis[i], &basis[j]) > symprec {
                for k in 0..3 {
                    if k != i && k != j {
                        basis[k] = basis[k] + 2.0 * basis[i];
                        break;
                    }
                }
                basis[i] = -basis[i];
                return false;
            }
        }
    }
    true
}

/// Delaunay reduction of the plane perpendicular to one lattice
/// vector, leaving that vector in place.
///
/// `unique_axis` is the index of the untouched lattice vector.
pub fn reduce_delaunay_2d(
    lattice: &Lattice,
    unique_axis: usize,
    symprec: f64,
) -> FailResult<Lattice> {
    let vectors = lattice.vectors();
    let unique_vec = vectors[unique_axis];

    let mut plane = vec![];
    for (i, v) in vectors.iter().enumerate() {
        if i != unique_axis {
            plane.push(*v);
        }
    }
    let mut extended = [plane[0], plane[1], -(plane[0] + plane[1])];

    let mut counter = 0;
    while !reduce_basis_2d_once(&mut extended, symprec) {
        counter += 1;
        if counter > MAX_STEPS {
            throw!(SymmetryError::ReductionDidNotConverge);
        }
    }

    let mut b = [
        extended[0], extended[1], extended[2],
        extended[0] + extended[1],
    ];
    b.sort_by_key(|v| OrderedFloat(v.sqnorm()));

    let mut chosen = (extended[0], extended[1]);
    for i in 1..4 {
        let candidate = mat::from_array([b[0].0, unique_vec.0, b[i].0]);
        if candidate.det().abs() > symprec {
            chosen = (b[0], b[i]);
            break;
        }
    }

    let mut rows = [V3::<f64>::zero(); 3];
    let mut k = 0;
    for i in 0..3 {
        if i == unique_axis {
            rows[i] = unique_vec;
        } else {
            rows[i] = [chosen.0, chosen.1][k];
            k += 1;
        }
    }

    let mut matrix = mat::from_array([rows[0].0, rows[1].0, rows[2].0]);
    let volume = matrix.det();
    if volume.abs() < symprec {
        throw!(SymmetryError::SingularMatrix);
    }
    if volume < 0.0 {
        matrix[unique_axis] = -matrix[unique_axis];
    }
    Ok(Lattice::new(&matrix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spgr_array_types::mat;

    #[test]
    fn reduced_basis_has_short_vectors() {
        // an awful description of the cubic lattice
        let lattice = Lattice::new(&mat::from_array([
            [1.0, 0.0, 0.0],
            [4.0, 1.0, 0.0],
            [6.0, 5.0, 1.0],
        ]));
        let reduced = reduce_delaunay(&lattice, 1e-5).unwrap();
        let norms = reduced.norms();
        for &n in &norms {
            assert!((n - 1.0).abs() < 1e-10, "{:?}", norms);
        }
        assert!((reduced.volume() - 1.0).abs() < 1e-10);
        assert!(reduced.matrix().det() > 0.0);
    }

    #[test]
    fn volume_is_preserved() {
        let lattice = Lattice::new(&mat::from_array([
            [2.0, 0.4, 0.0],
            [-1.1, 3.0, 0.2],
            [0.3, 4.0, 5.0],
        ]));
        let reduced = reduce_delaunay(&lattice, 1e-5).unwrap();
        assert!((reduced.volume() - lattice.volume()).abs() < 1e-9);
    }

    #[test]
    fn pairwise_products_non_positive() {
        let lattice = Lattice::new(&mat::from_array([
            [3.0, 0.1, 0.0],
            [2.9, 3.0, 0.0],
            [0.0, 0.7, 4.0],
        ]));
        let reduced = reduce_delaunay(&lattice, 1e-5).unwrap();
        let v = reduced.vectors();
        let extended = [v[0], v[1], v[2], -(v[0] + v[1] + v[2])];
        for i in 0..4 {
            for j in i + 1..4 {
                assert!(dot(&extended[i], &extended[j]) < 1e-5);
            }
        }
    }

    #[test]
    fn two_dimensional_reduction_keeps_the_unique_axis() {
        let lattice = Lattice::new(&mat::from_array([
            [3.0, 7.0, 0.0],
            [0.0, 0.0, 9.0],
            [3.0, 10.0, 0.0],
        ]));
        let reduced = reduce_delaunay_2d(&lattice, 1, 1e-5).unwrap();
        assert_eq!(reduced.vectors()[1], V3([0.0, 0.0, 9.0]));
        assert!((reduced.volume() - lattice.volume()).abs() < 1e-9);
        assert!(reduced.matrix().det() > 0.0);
    }
}
