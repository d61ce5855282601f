use crate::core::lattice::Lattice;
use crate::oper::point_group::Holohedry;
use spgr_array_types::{M33, mat};

/// A cell described by lengths and angles rather than by vectors.
///
/// This form forgets the orientation of the cell, which is exactly
/// what the reduction algorithms want; lattices that differ only by
/// a rigid rotation compare equal here.
#[derive(Debug, Copy, Clone)]
pub struct SymmetryCell {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Angle between `b` and `c`, in radians.
    pub alpha: f64,
    /// Angle between `a` and `c`, in radians.
    pub beta: f64,
    /// Angle between `a` and `b`, in radians.
    pub gamma: f64,
}

impl SymmetryCell {
    /// Construct from lengths and angles in degrees.
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        SymmetryCell {
            a, b, c,
            alpha: alpha.to_radians(),
            beta: beta.to_radians(),
            gamma: gamma.to_radians(),
        }
    }

    pub fn from_lattice(lattice: &Lattice) -> Self {
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();
        SymmetryCell::new(a, b, c, alpha, beta, gamma)
    }

    /// Construct from the six independent entries of a metric tensor.
    pub(crate) fn from_metric_scalars(
        aa: f64, bb: f64, cc: f64,
        xi: f64, eta: f64, zeta: f64,
    ) -> Self {
        let (a, b, c) = (aa.sqrt(), bb.sqrt(), cc.sqrt());
        SymmetryCell {
            a, b, c,
            alpha: f64::acos(xi / (2.0 * b * c)),
            beta: f64::acos(eta / (2.0 * a * c)),
            gamma: f64::acos(zeta / (2.0 * a * b)),
        }
    }

    pub fn volume(&self) -> f64 {
        let (ca, cb, cg) = (self.alpha.cos(), self.beta.cos(), self.gamma.cos());
        self.a * self.b * self.c
            * f64::sqrt(1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg)
    }

    /// Realize the cell as a lattice in the standard orientation:
    /// `a` along x, `b` in the x-y plane.
    pub fn lattice(&self) -> Lattice {
        let (ca, cb, cg) = (self.alpha.cos(), self.beta.cos(), self.gamma.cos());
        let sg = self.gamma.sin();
        let temp = (ca - cg * cb) / sg;
        Lattice::new(&mat::from_array([
            [self.a, 0.0, 0.0],
            [self.b * cg, self.b * sg, 0.0],
            [self.c * cb, self.c * temp, self.c * f64::sqrt(1.0 - cb * cb - temp * temp)],
        ]))
    }

    pub fn metric_tensor(&self) -> M33 {
        let (a, b, c) = (self.a, self.b, self.c);
        let (ca, cb, cg) = (self.alpha.cos(), self.beta.cos(), self.gamma.cos());
        mat::from_array([
            [a * a, a * b * cg, a * c * cb],
            [a * b * cg, b * b, b * c * ca],
            [a * c * cb, b * c * ca, c * c],
        ])
    }

    /// Idealize the cell parameters to exactly satisfy the constraints
    /// of the given crystal family, averaging lengths and angles that
    /// symmetry requires to be equal.
    ///
    /// `rhombohedral_axes` selects the rhombohedral description of
    /// trigonal cells; it is ignored for the other families.
    pub fn conventional_lattice(&self, holohedry: Holohedry, rhombohedral_axes: bool) -> Lattice {
        let (a, b, c) = (self.a, self.b, self.c);
        match holohedry {
            Holohedry::Triclinic => self.lattice(),
            Holohedry::Monoclinic => {
                let (cb, sb) = (self.beta.cos(), self.beta.sin());
                Lattice::new(&mat::from_array([
                    [a, 0.0, 0.0],
                    [0.0, b, 0.0],
                    [c * cb, 0.0, c * sb],
                ]))
            },
            Holohedry::Orthorhombic => Lattice::diagonal(&[a, b, c]),
            Holohedry::Tetragonal => {
                let ab = 0.5 * (a + b);
                Lattice::diagonal(&[ab, ab, c])
            },
            Holohedry::Trigonal if rhombohedral_axes => {
                let avg = (a + b + c) / 3.0;
                let angle = f64::acos((self.alpha.cos() + self.beta.cos() + self.gamma.cos()) / 3.0);
                let ahex = 2.0 * avg * f64::sin(0.5 * angle);
                let chex = avg * f64::sqrt(3.0 * (1.0 + 2.0 * angle.cos()));
                let s3 = 3f64.sqrt();
                Lattice::new(&mat::from_array([
                    [ahex / 2.0, -ahex / (2.0 * s3), chex / 3.0],
                    [0.0, ahex / s3, chex / 3.0],
                    [-ahex / 2.0, -ahex / (2.0 * s3), chex / 3.0],
                ]))
            },
            Holohedry::Trigonal | Holohedry::Hexagonal => {
                let ab = a + b;
                Lattice::new(&mat::from_array([
                    [0.5 * ab, 0.0, 0.0],
                    [-0.25 * ab, 0.25 * ab * 3f64.sqrt(), 0.0],
                    [0.0, 0.0, c],
                ]))
            },
            Holohedry::Cubic => {
                let edge = (a + b + c) / 3.0;
                Lattice::diagonal(&[edge, edge, edge])
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spgr_array_types::mat;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-10, "{} vs {}", a, b);
    }

    #[test]
    fn round_trip_through_lattice() {
        let cell = SymmetryCell::new(3.0, 4.0, 5.0, 80.0, 95.0, 107.0);
        let back = SymmetryCell::from_lattice(&cell.lattice());
        assert_close(back.a, cell.a);
        assert_close(back.b, cell.b);
        assert_close(back.c, cell.c);
        assert_close(back.alpha, cell.alpha);
        assert_close(back.beta, cell.beta);
        assert_close(back.gamma, cell.gamma);
    }

    #[test]
    fn metric_tensor_matches_lattice() {
        let cell = SymmetryCell::new(3.0, 4.0, 5.0, 80.0, 95.0, 107.0);
        let from_cell = cell.metric_tensor();
        let from_lattice = cell.lattice().metric_tensor();
        for r in 0..3 {
            for c in 0..3 {
                assert_close(from_cell[r][c], from_lattice[r][c]);
            }
        }
    }

    #[test]
    fn cubic_idealization_averages_edges() {
        let cell = SymmetryCell::new(4.0, 4.0 + 1e-5, 4.0 - 1e-5, 90.0, 90.0, 90.0);
        let conv = cell.conventional_lattice(Holohedry::Cubic, false);
        let expected = mat::from_array([
            [4.0, 0.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 4.0],
        ]);
        for r in 0..3 {
            for c in 0..3 {
                assert_close(conv.matrix()[r][c], expected[r][c]);
            }
        }
    }

    #[test]
    fn rhombohedral_setting_of_fcc_primitive() {
        // rhombohedral cell with a 60 degree angle is the primitive
        // cell of some fcc lattice
        let cell = SymmetryCell::new(1.0, 1.0, 1.0, 60.0, 60.0, 60.0);
        let conv = cell.conventional_lattice(Holohedry::Trigonal, true);
        let (a, b, c, ..) = conv.parameters();
        assert_close(a, b);
        assert_close(a, c);
        assert_close(conv.volume(), cell.volume());
    }
}
