//! Niggli cell reduction.
//!
//! Implements the unified reduction algorithm of Krivy and Gruber
//! (Acta Cryst. A32 (1976) 297), operating on the six metric scalars
//! `A, B, C, xi, eta, zeta` rather than on the lattice vectors
//! themselves. The reduced cell is the unique canonical cell among
//! all cells generating the same lattice, which makes it the tool of
//! choice for recognizing equivalent lattices.

use crate::{FailResult, SymmetryError};
use crate::core::cell::SymmetryCell;
use spgr_array_types::{M33, mat};

/// Comparison tolerance on the squared-length scale.
const EPS: f64 = 1.0e-5;

const MAX_STEPS: usize = 10_000;

/// Outcome of a Niggli reduction.
#[derive(Debug, Copy, Clone)]
pub struct NiggliReduction {
    pub cell: SymmetryCell,
    /// Integer matrix taking fractional coordinates in the reduced
    /// cell to fractional coordinates in the input cell (columns are
    /// the reduced basis vectors, expressed in the input basis).
    pub change_of_basis: M33<i32>,
}

fn smaller(x: f64, y: f64) -> bool
{ x < y - EPS }

fn larger(x: f64, y: f64) -> bool
{ smaller(y, x) }

fn equal(x: f64, y: f64) -> bool
{ !(x < y - EPS || y < x - EPS) }

fn sign(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else if x < 0.0 { -1.0 } else { 0.0 }
}

/// The "all angles acute or all angles non-acute" test of step 3/4.
fn main_diagonal_positive(xi: f64, eta: f64, zeta: f64) -> bool {
    let mut n_positive = 0;
    let mut n_zero = 0;
    for &x in &[xi, eta, zeta] {
        if smaller(0.0, x) {
            n_positive += 1;
        } else if !smaller(x, 0.0) {
            n_zero += 1;
        }
    }
    n_positive == 3 || (n_zero == 0 && n_positive == 1)
}

/// Reduce a cell to Niggli form, tracking the change of basis.
pub fn reduce_niggli(input: &SymmetryCell) -> FailResult<NiggliReduction> {
    let mut a = input.a * input.a;
    let mut b = input.b * input.b;
    let mut c = input.c * input.c;
    let mut xi = 2.0 * input.b * input.c * input.alpha.cos();
    let mut eta = 2.0 * input.a * input.c * input.beta.cos();
    let mut zeta = 2.0 * input.a * input.b * input.gamma.cos();

    let mut change_of_basis = M33::<i32>::eye();

    let mut counter = 0;
    'start: loop {
        counter += 1;
        if counter > MAX_STEPS {
            throw!(SymmetryError::ReductionDidNotConverge);
        }

        // step 1: order A <= B
        if larger(a, b) || (equal(a, b) && larger(xi.abs(), eta.abs())) {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut xi, &mut eta);
            change_of_basis = &change_of_basis * &mat::from_cols([
                [0, -1, 0], [-1, 0, 0], [0, 0, -1],
            ]);
        }

        // step 2: order B <= C
        if larger(b, c) || (equal(b, c) && larger(eta.abs(), zeta.abs())) {
            std::mem::swap(&mut b, &mut c);
            std::mem::swap(&mut eta, &mut zeta);
            change_of_basis = &change_of_basis * &mat::from_cols([
                [-1, 0, 0], [0, 0, -1], [0, -1, 0],
            ]);
            continue 'start;
        }

        if main_diagonal_positive(xi, eta, zeta) {
            // step 3: make all three positive
            let mut f = [1, 1, 1];
            if smaller(xi, 0.0) { f[0] = -1 }
            if smaller(eta, 0.0) { f[1] = -1 }
            if smaller(zeta, 0.0) { f[2] = -1 }
            xi = xi.abs();
            eta = eta.abs();
            zeta = zeta.abs();
            change_of_basis = &change_of_basis * &mat::from_cols([
                [f[0], 0, 0], [0, f[1], 0], [0, 0, f[2]],
            ]);
        } else {
            // step 4: make all three non-positive; an odd number of
            // sign flips is repaired using the slot that was zero
            let mut p = None;
            let mut f = [1, 1, 1];
            if larger(xi, 0.0) { f[0] = -1 } else if !smaller(xi, 0.0) { p = Some(0) }
            if larger(eta, 0.0) { f[1] = -1 } else if !smaller(eta, 0.0) { p = Some(1) }
            if larger(zeta, 0.0) { f[2] = -1 } else if !smaller(zeta, 0.0) { p = Some(2) }
            if f[0] * f[1] * f[2] < 0 {
                match p {
                    Some(p) => f[p] = -1,
                    None => throw!(SymmetryError::ReductionDidNotConverge),
                }
            }
            xi = -xi.abs();
            eta = -eta.abs();
            zeta = -zeta.abs();
            change_of_basis = &change_of_basis * &mat::from_cols([
                [f[0], 0, 0], [0, f[1], 0], [0, 0, f[2]],
            ]);
        }

        // step 5
        if larger(xi.abs(), b)
            || (equal(xi, b) && smaller(2.0 * eta, zeta))
            || (equal(xi, -b) && smaller(zeta, 0.0))
        {
            let s = sign(xi);
            c = b + c - xi * s;
            eta = eta - zeta * s;
            xi = xi - 2.0 * b * s;
            change_of_basis = &change_of_basis * &mat::from_cols([
                [1, 0, 0], [0, 1, 0], [0, -(s as i32), 1],
            ]);
            continue 'start;
        }

        // step 6
        if larger(eta.abs(), a)
            || (equal(eta, a) && smaller(2.0 * xi, zeta))
            || (equal(eta, -a) && smaller(zeta, 0.0))
        {
            let s = sign(eta);
            c = a + c - eta * s;
            xi = xi - zeta * s;
            eta = eta - 2.0 * a * s;
            change_of_basis = &change_of_basis * &mat::from_cols([
                [1, 0, 0], [0, 1, 0], [-(s as i32), 0, 1],
            ]);
            continue 'start;
        }

        // step 7
        if larger(zeta.abs(), a)
            || (equal(zeta, a) && smaller(2.0 * xi, eta))
            || (equal(zeta, -a) && smaller(eta, 0.0))
        {
            let s = sign(zeta);
            b = a + b - zeta * s;
            xi = xi - eta * s;
            zeta = zeta - 2.0 * a * s;
            change_of_basis = &change_of_basis * &mat::from_cols([
                [1, 0, 0], [-(s as i32), 1, 0], [0, 0, 1],
            ]);
            continue 'start;
        }

        // step 8
        if smaller(xi + eta + zeta + a + b, 0.0)
            || (equal(xi + eta + zeta + a + b, 0.0) && larger(2.0 * (a + eta) + zeta, 0.0))
        {
            c = a + b + c + xi + eta + zeta;
            xi = 2.0 * b + xi + zeta;
            eta = 2.0 * a + eta + zeta;
            change_of_basis = &change_of_basis * &mat::from_cols([
                [1, 0, 0], [0, 1, 0], [1, 1, 1],
            ]);
            continue 'start;
        }

        break;
    }

    trace!("niggli reduction converged after {} steps", counter);

    Ok(NiggliReduction {
        cell: SymmetryCell::from_metric_scalars(a, b, c, xi, eta, zeta),
        change_of_basis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::SymmetryCell;
    use crate::core::lattice::Lattice;
    use spgr_array_types::mat;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-8, "{} vs {}", a, b);
    }

    #[test]
    fn already_reduced_cell_is_fixed() {
        let cell = SymmetryCell::new(3.0, 4.0, 5.0, 90.0, 90.0, 90.0);
        let reduced = reduce_niggli(&cell).unwrap();
        assert_close(reduced.cell.a, 3.0);
        assert_close(reduced.cell.b, 4.0);
        assert_close(reduced.cell.c, 5.0);
        assert_eq!(reduced.change_of_basis, M33::<i32>::eye());
    }

    #[test]
    fn reduction_is_idempotent() {
        let cell = SymmetryCell::new(6.0, 2.0, 7.5, 72.0, 101.0, 118.0);
        let once = reduce_niggli(&cell).unwrap();
        let twice = reduce_niggli(&once.cell).unwrap();
        assert_close(once.cell.a, twice.cell.a);
        assert_close(once.cell.b, twice.cell.b);
        assert_close(once.cell.c, twice.cell.c);
        assert_close(once.cell.alpha, twice.cell.alpha);
        assert_close(once.cell.beta, twice.cell.beta);
        assert_close(once.cell.gamma, twice.cell.gamma);
        assert_eq!(twice.change_of_basis, M33::<i32>::eye());
    }

    #[test]
    fn ordering_invariant() {
        let cell = SymmetryCell::new(8.0, 3.0, 5.0, 90.0, 90.0, 90.0);
        let reduced = reduce_niggli(&cell).unwrap().cell;
        assert!(reduced.a <= reduced.b + 1e-8);
        assert!(reduced.b <= reduced.c + 1e-8);
    }

    #[test]
    fn change_of_basis_preserves_the_lattice() {
        // a deliberately skewed description of a simple orthorhombic lattice
        let lattice = Lattice::new(&mat::from_array([
            [3.0, 0.0, 0.0],
            [3.0, 4.0, 0.0],
            [3.0, 4.0, 5.0],
        ]));
        let cell = SymmetryCell::from_lattice(&lattice);
        let reduced = reduce_niggli(&cell).unwrap();

        assert_eq!(reduced.change_of_basis.det().abs(), 1);

        // the transformed lattice must reproduce the reduced parameters
        let transformed = lattice.transformed_by(&reduced.change_of_basis);
        let params = SymmetryCell::from_lattice(&transformed);
        assert_close(params.a, reduced.cell.a);
        assert_close(params.b, reduced.cell.b);
        assert_close(params.c, reduced.cell.c);
        assert_close(params.alpha, reduced.cell.alpha);
        assert_close(params.beta, reduced.cell.beta);
        assert_close(params.gamma, reduced.cell.gamma);
    }

    #[test]
    fn random_cells_stay_reduced() {
        use rand::{Rng, SeedableRng, StdRng};
        let mut rng = StdRng::from_seed(&[17, 29]);

        for _ in 0..40 {
            let a = rng.gen_range(1.0, 8.0);
            let b = rng.gen_range(1.0, 8.0);
            let c = rng.gen_range(1.0, 8.0);
            let alpha = rng.gen_range(50.0, 130.0);
            let beta = rng.gen_range(50.0, 130.0);
            let gamma = rng.gen_range(50.0, 130.0);
            let cell = SymmetryCell::new(a, b, c, alpha, beta, gamma);
            if cell.volume().is_nan() || cell.volume() < 0.3 {
                continue;
            }

            let reduced = match reduce_niggli(&cell) {
                Ok(r) => r,
                Err(_) => continue,
            };
            assert!(reduced.cell.a <= reduced.cell.b + 1e-7);
            assert!(reduced.cell.b <= reduced.cell.c + 1e-7);
            assert_close(reduced.cell.volume(), cell.volume());
            assert_eq!(reduced.change_of_basis.det().abs(), 1);
        }
    }
}
