use std::sync::Arc;
use spgr_array_types::{V3, M33, mat, inv};

/// A 3x3 matrix with a precomputed inverse.
///
/// The rows of the matrix are the lattice vectors, so that a row
/// vector of fractional coordinates times the matrix yields cartesian
/// coordinates.
#[derive(Debug, Clone)]
pub struct Lattice {
    matrix: Arc<M33>,
    inverse: Arc<M33>,
}

// Manual impl that doesn't compare the inverse.
impl PartialEq<Lattice> for Lattice {
    fn eq(&self, other: &Lattice) -> bool {
        // deconstruct to get errors when new fields are added
        let Lattice { ref matrix, inverse: _ } = *self;
        matrix == &other.matrix
    }
}

impl Lattice {
    /// Create a lattice from a matrix where the rows are lattice vectors.
    ///
    /// The matrix must be invertible; the caller is responsible for
    /// rejecting degenerate cells before they get here.
    pub fn new(matrix: &M33) -> Self {
        let matrix = Arc::new(*matrix);
        let inverse = Arc::new(inv(&matrix));
        Lattice { matrix, inverse }
    }

    /// Invert the lattice.
    pub fn inverted(&self) -> Self {
        Lattice {
            matrix: self.inverse.clone(),
            inverse: self.matrix.clone(),
        }
    }

    /// Matrix with lattice vectors as rows.
    pub fn matrix(&self) -> &M33
    { &self.matrix }

    /// Inverse of the matrix with lattice vectors as rows.
    pub fn inverse_matrix(&self) -> &M33
    { &self.inverse }

    pub fn vectors(&self) -> &[V3; 3]
    { &self.matrix.0 }

    /// Unsigned volume of the cell.
    pub fn volume(&self) -> f64
    { self.matrix.det().abs() }

    pub fn norms(&self) -> [f64; 3] {
        let v = self.vectors();
        [v[0].norm(), v[1].norm(), v[2].norm()]
    }

    /// The metric tensor `L L^T`, whose entries are the inner products
    /// of the lattice vectors.
    pub fn metric_tensor(&self) -> M33
    { &*self.matrix * &self.matrix.t() }

    /// Cell lengths and angles `(a, b, c, alpha, beta, gamma)`,
    /// with angles in degrees.
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let v = self.vectors();
        let (a, b, c) = (v[0].norm(), v[1].norm(), v[2].norm());
        let alpha = v[1].angle_to(&v[2]).to_degrees();
        let beta = v[0].angle_to(&v[2]).to_degrees();
        let gamma = v[0].angle_to(&v[1]).to_degrees();
        (a, b, c, alpha, beta, gamma)
    }

    /// Take an integer linear combination of the lattice vectors.
    ///
    /// Row `i` of the output lattice is `sum_j coeffs[i][j] * self[j]`.
    pub fn linear_combination(&self, coeffs: &M33<i32>) -> Self {
        let matrix = &coeffs.map(|x| x as f64) * &*self.matrix;
        Lattice::new(&matrix)
    }

    /// Apply an integer change of basis given in the column convention
    /// used for symmetry operations, i.e. column `j` of `m` holds the
    /// fractional coordinates of the new lattice vector `j`.
    pub fn transformed_by(&self, m: &M33<i32>) -> Self
    { self.linear_combination(&m.t()) }

    /// Fractional coordinates of a cartesian point.
    pub fn to_fracs(&self, cart: &V3) -> V3
    { cart * &*self.inverse }

    /// Cartesian coordinates of a fractional point.
    pub fn to_carts(&self, frac: &V3) -> V3
    { frac * &*self.matrix }

    /// Squared cartesian norm of a fractional displacement.
    pub fn sqnorm_frac(&self, frac: &V3) -> f64
    { self.to_carts(frac).sqnorm() }
}

impl Lattice {
    pub fn eye() -> Self
    { Lattice::new(&M33::<f64>::eye()) }

    pub fn diagonal(diag: &[f64; 3]) -> Self {
        Lattice::new(&M33::from_fn(|r, c| {
            if r == c { diag[r] } else { 0.0 }
        }))
    }

    pub fn from_vectors(vectors: &[V3; 3]) -> Self
    { Lattice::new(&mat::from_array([vectors[0].0, vectors[1].0, vectors[2].0])) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_inverse() {
        let lattice = Lattice::new(&mat::from_array([
            [2.0, 0.0, 0.0],
            [1.0, 3.0, 0.0],
            [0.0, -1.0, 4.0],
        ]));
        let product = &*lattice.matrix() * lattice.inverse_matrix();
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!((product[r][c] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn parameters_of_hexagonal_cell() {
        let a = 2.456;
        let c = 6.7;
        let lattice = Lattice::new(&mat::from_array([
            [a, 0.0, 0.0],
            [-0.5 * a, 0.75_f64.sqrt() * a, 0.0],
            [0.0, 0.0, c],
        ]));
        let (pa, pb, pc, alpha, beta, gamma) = lattice.parameters();
        assert!((pa - a).abs() < 1e-12);
        assert!((pb - a).abs() < 1e-12);
        assert!((pc - c).abs() < 1e-12);
        assert!((alpha - 90.0).abs() < 1e-10);
        assert!((beta - 90.0).abs() < 1e-10);
        assert!((gamma - 120.0).abs() < 1e-10);
    }

    #[test]
    fn linear_combination() {
        let lattice = Lattice::diagonal(&[1.0, 2.0, 4.0]);
        let combo = lattice.linear_combination(&mat::from_array([
            [1, 1, 0],
            [0, 1, 0],
            [0, 0, 1],
        ]));
        assert_eq!(combo.vectors()[0], V3([1.0, 2.0, 0.0]));
        assert_eq!(combo.vectors()[1], V3([0.0, 2.0, 0.0]));
        assert!((combo.volume() - lattice.volume()).abs() < 1e-12);
    }
}
