//! Point symmetry of a bare lattice.
//!
//! Finding the rotations that map a lattice onto itself (ignoring any
//! atoms) is equivalent to determining its Bravais class. Candidate
//! rotations are enumerated as integer matrices whose columns are
//! short lattice vectors; a candidate is accepted when it leaves the
//! metric tensor unchanged to within tolerance.

use crate::oper::symmops::FracRot;
use crate::core::lattice::Lattice;
use spgr_array_types::{V3, M33, mat};

/// All lattice vectors with coefficients in `{-1, 0, 1}`.
const LATTICE_AXES: [[i32; 3]; 26] = [
    [1, 1, 1], [1, 1, 0], [1, 1, -1],
    [1, 0, 1], [1, 0, 0], [1, 0, -1],
    [1, -1, 1], [1, -1, 0], [1, -1, -1],
    [0, 1, 1], [0, 1, 0], [0, 1, -1],
    [0, 0, 1], [0, 0, -1],
    [0, -1, 1], [0, -1, 0], [0, -1, -1],
    [-1, 1, 1], [-1, 1, 0], [-1, 1, -1],
    [-1, 0, 1], [-1, 0, 0], [-1, 0, -1],
    [-1, -1, 1], [-1, -1, 0], [-1, -1, -1],
];

/// Whether two metric tensors describe the same cell shape to within
/// `symprec` (interpreted as a cartesian length tolerance).
///
/// Angle deviations are converted to a displacement at the scale of
/// the participating cell vectors before being compared.
pub(crate) fn is_identity_metric(rotated: &M33, original: &M33, symprec: f64) -> bool {
    let length_orig = V3::from_fn(|i| original[i][i].sqrt());
    let length_rot = V3::from_fn(|i| rotated[i][i].sqrt());

    for i in 0..3 {
        if (length_orig[i] - length_rot[i]).abs() > symprec {
            return false;
        }
    }

    for &(j, k) in &[(0, 1), (0, 2), (1, 2)] {
        let cos1 = original[j][k] / length_orig[j] / length_orig[k];
        let cos2 = rotated[j][k] / length_rot[j] / length_rot[k];
        // x = cos(theta1 - theta2)
        let x = cos1 * cos2 + f64::sqrt(1.0 - cos1 * cos1) * f64::sqrt(1.0 - cos2 * cos2);
        let sin_dtheta2 = 1.0 - x * x;
        let length_ave2 = (length_orig[j] + length_rot[j]) * (length_orig[k] + length_rot[k]);
        if sin_dtheta2 > 1e-12 {
            if sin_dtheta2 * length_ave2 * 0.25 > symprec * symprec {
                return false;
            }
        }
    }
    true
}

/// Enumerate the rotations under which the lattice maps onto itself.
///
/// The result is sorted, so equal lattices always produce the set in
/// the same order.
pub fn find_lattice_symmetry(lattice: &Lattice, symprec: f64) -> Vec<FracRot> {
    let metric_orig = lattice.metric_tensor();

    let mut rotations = vec![];
    for (first, second, third) in iproduct!(&LATTICE_AXES, &LATTICE_AXES, &LATTICE_AXES) {
        let axes: M33<i32> = mat::from_cols([*first, *second, *third]);

        let det = axes.det();
        if det == 1 || det == -1 {
            let rotated = &axes.t().map(|x| x as f64) * lattice.matrix();
            let metric = &rotated * &rotated.t();

            if is_identity_metric(&metric, &metric_orig, symprec) {
                rotations.push(FracRot::new(&axes));
            }
        }
    }

    rotations.sort();
    debug!("lattice point symmetry: {} rotations", rotations.len());
    rotations
}
