//! Classification of rotation groups into the 32 crystallographic
//! point groups, and construction of a conventional basis from the
//! symmetry axes.
//!
//! The basis construction follows R.W. Grosse-Kunstleve, "Algorithms
//! for deriving crystallographic space-group information", Acta
//! Cryst. A55, 383-395 (1999), Table 5.

use crate::oper::symmops::{FracRot, Centering, ALL_ROTATION_AXES, rational_inverse};
use num_integer::gcd;
use spgr_array_types::{V3, M33, mat};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Holohedry {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

/// The symmetry class of the diffraction pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Laue {
    L1,
    L2m,
    Lmmm,
    L4m,
    L4mmm,
    L3,
    L3m,
    L6m,
    L6mmm,
    Lm3,
    Lm3m,
}

/// One of the 32 crystallographic point groups.
///
/// The `signature` counts rotations by type, in the order
/// `-6, -4, -3, -2, -1, 1, 2, 3, 4, 6`; it uniquely identifies the
/// group among the 32.
#[derive(Debug)]
pub struct PointGroup {
    pub number: usize,
    pub symbol: &'static str,
    pub schoenflies: &'static str,
    pub holohedry: Holohedry,
    pub laue: Laue,
    pub centrosymmetric: bool,
    pub enantiomorphic: bool,
    signature: [i32; 10],
}

macro_rules! point_group {
    ($sig:expr, $num:expr, $sym:expr, $schoen:expr, $holo:ident, $laue:ident, $centro:expr, $enantio:expr) => {
        PointGroup {
            number: $num,
            symbol: $sym,
            schoenflies: $schoen,
            holohedry: Holohedry::$holo,
            laue: Laue::$laue,
            centrosymmetric: $centro,
            enantiomorphic: $enantio,
            signature: $sig,
        }
    };
}

pub static POINT_GROUP_DATA: [PointGroup; 32] = [
    point_group!([0,0,0,0,0,1,0,0,0,0],  1, "1",     "C1",  Triclinic,    L1,    false, true),
    point_group!([0,0,0,0,1,1,0,0,0,0],  2, "-1",    "Ci",  Triclinic,    L1,    true,  false),
    point_group!([0,0,0,0,0,1,1,0,0,0],  3, "2",     "C2",  Monoclinic,   L2m,   false, true),
    point_group!([0,0,0,1,0,1,0,0,0,0],  4, "m",     "Cs",  Monoclinic,   L2m,   false, false),
    point_group!([0,0,0,1,1,1,1,0,0,0],  5, "2/m",   "C2h", Monoclinic,   L2m,   true,  false),
    point_group!([0,0,0,0,0,1,3,0,0,0],  6, "222",   "D2",  Orthorhombic, Lmmm,  false, true),
    point_group!([0,0,0,2,0,1,1,0,0,0],  7, "mm2",   "C2v", Orthorhombic, Lmmm,  false, false),
    point_group!([0,0,0,3,1,1,3,0,0,0],  8, "mmm",   "D2h", Orthorhombic, Lmmm,  true,  false),
    point_group!([0,0,0,0,0,1,1,0,2,0],  9, "4",     "C4",  Tetragonal,   L4m,   false, true),
    point_group!([0,2,0,0,0,1,1,0,0,0], 10, "-4",    "S4",  Tetragonal,   L4m,   false, false),
    point_group!([0,2,0,1,1,1,1,0,2,0], 11, "4/m",   "C4h", Tetragonal,   L4m,   true,  false),
    point_group!([0,0,0,0,0,1,5,0,2,0], 12, "422",   "D4",  Tetragonal,   L4mmm, false, true),
    point_group!([0,0,0,4,0,1,1,0,2,0], 13, "4mm",   "C4v", Tetragonal,   L4mmm, false, false),
    point_group!([0,2,0,2,0,1,3,0,0,0], 14, "-42m",  "D2d", Tetragonal,   L4mmm, false, false),
    point_group!([0,2,0,5,1,1,5,0,2,0], 15, "4/mmm", "D4h", Tetragonal,   L4mmm, true,  false),
    point_group!([0,0,0,0,0,1,0,2,0,0], 16, "3",     "C3",  Trigonal,     L3,    false, true),
    point_group!([0,0,2,0,1,1,0,2,0,0], 17, "-3",    "C3i", Trigonal,     L3,    true,  false),
    point_group!([0,0,0,0,0,1,3,2,0,0], 18, "32",    "D3",  Trigonal,     L3m,   false, true),
    point_group!([0,0,0,3,0,1,0,2,0,0], 19, "3m",    "C3v", Trigonal,     L3m,   false, false),
    point_group!([0,0,2,3,1,1,3,2,0,0], 20, "-3m",   "D3d", Trigonal,     L3m,   true,  false),
    point_group!([0,0,0,0,0,1,1,2,0,2], 21, "6",     "C6",  Hexagonal,    L6m,   false, true),
    point_group!([2,0,0,1,0,1,0,2,0,0], 22, "-6",    "C3h", Hexagonal,    L6m,   false, false),
    point_group!([2,0,2,1,1,1,1,2,0,2], 23, "6/m",   "C6h", Hexagonal,    L6m,   true,  false),
    point_group!([0,0,0,0,0,1,7,2,0,2], 24, "622",   "D6",  Hexagonal,    L6mmm, false, true),
    point_group!([0,0,0,6,0,1,1,2,0,2], 25, "6mm",   "C6v", Hexagonal,    L6mmm, false, false),
    point_group!([2,0,0,4,0,1,3,2,0,0], 26, "-6m",   "D3h", Hexagonal,    L6mmm, false, false),
    point_group!([2,0,2,7,1,1,7,2,0,2], 27, "6/mmm", "D6h", Hexagonal,    L6mmm, true,  false),
    point_group!([0,0,0,0,0,1,3,8,0,0], 28, "23",    "T",   Cubic,        Lm3,   false, true),
    point_group!([0,0,8,3,1,1,3,8,0,0], 29, "m-3",   "Th",  Cubic,        Lm3,   true,  false),
    point_group!([0,0,0,0,0,1,9,8,6,0], 30, "432",   "O",   Cubic,        Lm3m,  false, true),
    point_group!([0,6,0,6,0,1,3,8,0,0], 31, "-43m",  "Td",  Cubic,        Lm3m,  false, false),
    point_group!([0,6,8,9,1,1,9,8,6,0], 32, "m-3m",  "Oh",  Cubic,        Lm3m,  true,  false),
];

/// Count rotations by type in the order `-6,-4,-3,-2,-1,1,2,3,4,6`.
fn signature_of(rotations: &[FracRot]) -> [i32; 10] {
    let mut signature = [0; 10];
    for rotation in rotations {
        let slot = match rotation.rotation_type() {
            -6 => 0, -4 => 1, -3 => 2, -2 => 3, -1 => 4,
            1 => 5, 2 => 6, 3 => 7, 4 => 8, 6 => 9,
            _ => unreachable!(),
        };
        signature[slot] += 1;
    }
    signature
}

fn axis_table_index(axis: &V3<i32>) -> usize {
    ALL_ROTATION_AXES.iter()
        .position(|a| &V3(*a) == axis)
        .unwrap_or(ALL_ROTATION_AXES.len())
}

impl PointGroup {
    pub fn from_number(number: usize) -> Option<&'static PointGroup> {
        POINT_GROUP_DATA.get(number.wrapping_sub(1))
    }

    /// Identify the point group of a set of rotations by its
    /// distribution of rotation types.
    ///
    /// Returns `None` when the set is not one of the 32 groups (which
    /// happens when the input is not actually closed under
    /// multiplication, or contains duplicates).
    pub fn from_rotations(rotations: &[FracRot]) -> Option<&'static PointGroup> {
        let signature = signature_of(rotations);
        POINT_GROUP_DATA.iter().find(|group| group.signature == signature)
    }

    /// The proper rotation type whose axes generate the conventional
    /// basis for this group's Laue class. (Table 5 in
    /// Grosse-Kunstleve (1999))
    fn rotation_type_for_basis(&self) -> i32 {
        match self.laue {
            Laue::L1 => 0,
            Laue::L2m | Laue::Lmmm | Laue::Lm3 => 2,
            Laue::L4m | Laue::L4mmm | Laue::Lm3m => 4,
            Laue::L3 | Laue::L3m | Laue::L6m | Laue::L6mmm => 3,
        }
    }

    /// Construct a basis for the conventional cell out of rotation
    /// axes of the group, as the columns of an integer matrix.
    ///
    /// The basic idea is to use the axis directions of the Laue
    /// class-specific symmetry as a new basis.
    pub fn construct_axes(&self, rotations: &[FracRot]) -> Option<M33<i32>> {
        let wanted = self.rotation_type_for_basis();
        match self.laue {
            Laue::L1 => Some(M33::<i32>::eye()),
            Laue::L2m => {
                let rotation = rotations.iter()
                    .map(FracRot::proper)
                    .find(|rot| rot.rotation_type() == wanted)?;

                // the twofold axis becomes the second basis vector;
                // the other two are the shortest axes orthogonal to it
                let axis = rotation.rotation_axis()?;
                let mut orthogonal = rotation.orthogonal_axes();

                let first = pick_shortest(&orthogonal);
                let index = orthogonal.iter().position(|&v| v == first)?;
                orthogonal.remove(index);
                let third = pick_shortest(&orthogonal);

                Some(mat::from_cols([first.0, axis.0, third.0]))
            }
            Laue::Lmmm | Laue::Lm3 | Laue::Lm3m => {
                // the axes are immediately available for these cases
                let mut axes: Vec<V3<i32>> = rotations.iter()
                    .map(FracRot::proper)
                    .filter(|rot| rot.rotation_type() == wanted)
                    .filter_map(|rot| rot.rotation_axis())
                    .collect();
                axes.sort_by_key(axis_table_index);
                axes.dedup();

                if axes.len() < 3 {
                    return None;
                }
                let basis = mat::from_cols([axes[0].0, axes[1].0, axes[2].0]);
                if basis.det() < 0 {
                    return Some(mat::from_cols([axes[0].0, axes[2].0, axes[1].0]));
                }
                Some(basis)
            }
            Laue::L4m | Laue::L4mmm | Laue::L3 | Laue::L3m | Laue::L6m | Laue::L6mmm => {
                let rotation = rotations.iter()
                    .map(FracRot::proper)
                    .find(|rot| rot.rotation_type() == wanted)?;

                // the main axis becomes the third basis vector; the
                // first is orthogonal to it, and the second is its
                // image under the rotation
                let axis = rotation.rotation_axis()?;
                for orthogonal in rotation.orthogonal_axes() {
                    let image = rotation.matrix() * &orthogonal;
                    let in_table = axis_table_index(&image) < ALL_ROTATION_AXES.len()
                        || axis_table_index(&-image) < ALL_ROTATION_AXES.len();
                    if in_table {
                        let basis = mat::from_cols([orthogonal.0, image.0, axis.0]);
                        // reject the F-centered choice (det 4)
                        if basis.det().abs() < 4 {
                            if basis.det() < 0 {
                                return Some(mat::from_cols([image.0, orthogonal.0, axis.0]));
                            }
                            return Some(basis);
                        }
                    }
                }
                None
            }
        }
    }

    /// The centering implied by a basis of axis vectors, from the
    /// number of lattice points per cell (its absolute determinant).
    pub fn compute_centering(&self, basis: &M33<i32>) -> Centering {
        match basis.det().abs() {
            1 => Centering::Primitive,
            2 => {
                for i in 0..3 {
                    if basis[i][0].abs() == 1 && basis[i][1] == 0 && basis[i][2] == 0 {
                        return Centering::AFace;
                    }
                }
                for i in 0..3 {
                    if basis[i][0] == 0 && basis[i][1].abs() == 1 && basis[i][2] == 0 {
                        return Centering::BFace;
                    }
                }
                for i in 0..3 {
                    if basis[i][0] == 0 && basis[i][1] == 0 && basis[i][2].abs() == 1 {
                        return Centering::CFace;
                    }
                }
                if basis[0][0].abs() + basis[0][1].abs() + basis[0][2].abs() == 2 {
                    return Centering::Body;
                }
                Centering::None
            }
            3 => Centering::Rhombohedral,
            4 => Centering::Face,
            _ => Centering::None,
        }
    }

    /// A correction to the basis that moves non-standard settings to
    /// the standard one. A standard conventional cell is always
    /// C-centered, and rhombohedral cells use the obverse setting.
    ///
    /// `centering` is updated in step with the returned matrix.
    pub fn compute_basis_correction(
        &self,
        basis: &M33<i32>,
        centering: &mut Centering,
    ) -> M33<i32> {
        let monoclinic = self.laue == Laue::L2m;
        match basis.det().abs() {
            2 => match *centering {
                // axes a and c are swapped; b is negated to keep the
                // handedness (and beta obtuse)
                Centering::AFace if monoclinic => {
                    *centering = Centering::CFace;
                    mat::from_cols([[0, 0, 1], [0, -1, 0], [1, 0, 0]])
                }
                Centering::AFace => {
                    *centering = Centering::CFace;
                    mat::from_cols([[0, 1, 0], [0, 0, 1], [1, 0, 0]])
                }
                Centering::BFace => {
                    *centering = Centering::CFace;
                    mat::from_cols([[0, 0, 1], [1, 0, 0], [0, 1, 0]])
                }
                Centering::Body if monoclinic => {
                    *centering = Centering::CFace;
                    mat::from_cols([[1, 0, 1], [0, 1, 0], [-1, 0, 0]])
                }
                _ => M33::<i32>::eye(),
            },
            3 => {
                let (adjugate, _) = rational_inverse(basis, 1);
                let m = &mat::from_cols([[0, -1, 1], [1, 0, -1], [1, 1, 1]]) * &adjugate;
                let common = m.0.iter()
                    .flat_map(|row| row.0.iter())
                    .fold(0, |acc, &x| gcd(acc, x));
                if common == 3 {
                    // reverse setting detected, change to obverse
                    return mat::from_cols([[1, 1, 0], [-1, 0, 0], [0, 0, 1]]);
                }
                M33::<i32>::eye()
            }
            _ => M33::<i32>::eye(),
        }
    }
}

/// The shortest of a list of integer axes; ties go to the later
/// entry.
fn pick_shortest(axes: &[V3<i32>]) -> V3<i32> {
    axes.iter().fold(axes[0], |best, &v| {
        if best.sqnorm() < v.sqnorm() { best } else { v }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::rotations::find_lattice_symmetry;
    use crate::core::lattice::Lattice;

    #[test]
    fn identity_alone_is_group_1() {
        let group = PointGroup::from_rotations(&[FracRot::eye()]).unwrap();
        assert_eq!(group.number, 1);
        assert_eq!(group.symbol, "1");
        assert!(group.enantiomorphic);
    }

    #[test]
    fn inversion_pair_is_group_minus_1() {
        let rotations = [FracRot::eye(), FracRot::inversion()];
        let group = PointGroup::from_rotations(&rotations).unwrap();
        assert_eq!(group.number, 2);
        assert!(group.centrosymmetric);
        assert_eq!(group.holohedry, Holohedry::Triclinic);
    }

    #[test]
    fn cubic_lattice_symmetry_is_m3m() {
        let lattice = Lattice::diagonal(&[4.0, 4.0, 4.0]);
        let rotations = find_lattice_symmetry(&lattice, 1e-5);
        let group = PointGroup::from_rotations(&rotations).unwrap();
        assert_eq!(group.symbol, "m-3m");
        assert_eq!(group.holohedry, Holohedry::Cubic);
        assert_eq!(group.laue, Laue::Lm3m);
    }

    #[test]
    fn tetragonal_lattice_symmetry_is_4mmm() {
        let lattice = Lattice::diagonal(&[4.0, 4.0, 6.0]);
        let rotations = find_lattice_symmetry(&lattice, 1e-5);
        let group = PointGroup::from_rotations(&rotations).unwrap();
        assert_eq!(group.symbol, "4/mmm");
    }

    #[test]
    fn hexagonal_lattice_symmetry_is_6mmm() {
        let a = 2.456;
        let lattice = Lattice::new(&mat::from_array([
            [a, 0.0, 0.0],
            [-0.5 * a, 0.75_f64.sqrt() * a, 0.0],
            [0.0, 0.0, 6.7],
        ]));
        let rotations = find_lattice_symmetry(&lattice, 1e-5);
        let group = PointGroup::from_rotations(&rotations).unwrap();
        assert_eq!(group.symbol, "6/mmm");
        assert_eq!(group.holohedry, Holohedry::Hexagonal);
    }

    #[test]
    fn unclosed_sets_match_nothing() {
        // a bare fourfold rotation without its powers
        let four = FracRot::new(&mat::from_cols([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]));
        assert!(PointGroup::from_rotations(&[four]).is_none());
    }

    #[test]
    fn cubic_axes_are_a_permutation() {
        let lattice = Lattice::diagonal(&[4.0, 4.0, 4.0]);
        let rotations = find_lattice_symmetry(&lattice, 1e-5);
        let group = PointGroup::from_rotations(&rotations).unwrap();
        let axes = group.construct_axes(&rotations).unwrap();
        assert_eq!(axes.det().abs(), 1);
        for row in &axes.0 {
            assert_eq!(row.0.iter().map(|x| x.abs()).sum::<i32>(), 1);
        }
    }

    #[test]
    fn tetragonal_axes_have_unit_determinant() {
        let lattice = Lattice::diagonal(&[4.0, 4.0, 6.0]);
        let rotations = find_lattice_symmetry(&lattice, 1e-5);
        let group = PointGroup::from_rotations(&rotations).unwrap();
        let axes = group.construct_axes(&rotations).unwrap();
        assert_eq!(axes.det().abs(), 1);
    }

    #[test]
    fn primitive_basis_has_primitive_centering() {
        let group = PointGroup::from_number(32).unwrap();
        assert_eq!(group.compute_centering(&M33::<i32>::eye()), Centering::Primitive);
    }

    #[test]
    fn body_centered_basis_is_detected() {
        // conventional axes of a bcc lattice, in primitive coordinates
        let group = PointGroup::from_number(32).unwrap();
        let basis = mat::from_cols([[0, 1, 1], [1, 0, 1], [1, 1, 0]]);
        assert_eq!(group.compute_centering(&basis), Centering::Body);
        // an fcc conventional cell holds four lattice points
        let basis = mat::from_cols([[-1, 1, 1], [1, -1, 1], [1, 1, -1]]);
        assert_eq!(group.compute_centering(&basis), Centering::Face);
    }

    #[test]
    fn monoclinic_a_centering_is_corrected_to_c() {
        let group = PointGroup::from_number(5).unwrap();
        let basis = mat::from_cols([[1, 0, 0], [0, 1, 1], [0, -1, 1]]);
        let mut centering = group.compute_centering(&basis);
        assert_eq!(centering, Centering::AFace);
        let correction = group.compute_basis_correction(&basis, &mut centering);
        assert_eq!(centering, Centering::CFace);
        assert_eq!(correction.det().abs(), 1);
    }
}
