//! Matching discovered symmetry operations against the tabulated
//! space-group settings.
//!
//! A candidate setting matches when its generators appear among the
//! discovered operations (up to an allowed change of basis) and the
//! linear system for the origin shift has a solution. The system's
//! integer rotation matrix is diagonalized exactly with a Smith
//! normal form; the right-hand side of measured translations stays in
//! floating point, so a structure described off the standard origin
//! still matches.

use crate::FailResult;
use crate::oper::symmops::{FracRot, Centering, ChangeOfBasis, SeitzOperationSet};
use crate::oper::hall::HallGroup;
use crate::oper::point_group::Holohedry;
use crate::util::{fract, fract_v3};
use spgr_array_types::{V3, M33, mat};

const ROWS: usize = 9;
const COLS: usize = 3;

/// `p * a * q == d` with `p`, `q` unimodular and `d` diagonal.
struct SmithNormalForm {
    p: [[i64; ROWS]; ROWS],
    q: [[i64; COLS]; COLS],
    d: [[i64; COLS]; ROWS],
}

fn smith_normal_form(matrix: &[[i64; COLS]; ROWS]) -> SmithNormalForm {
    let mut d = *matrix;
    let mut p = [[0i64; ROWS]; ROWS];
    let mut q = [[0i64; COLS]; COLS];
    for i in 0..ROWS {
        p[i][i] = 1;
    }
    for j in 0..COLS {
        q[j][j] = 1;
    }

    'diagonal: for k in 0..COLS {
        loop {
            // bring the remaining entry of smallest magnitude to the pivot
            let mut pivot: Option<(usize, usize)> = None;
            for i in k..ROWS {
                for j in k..COLS {
                    if d[i][j] != 0 {
                        if pivot.map_or(true, |(pi, pj)| d[i][j].abs() < d[pi][pj].abs()) {
                            pivot = Some((i, j));
                        }
                    }
                }
            }
            let (pi, pj) = match pivot {
                Some(found) => found,
                None => break 'diagonal,
            };
            if pi != k {
                d.swap(k, pi);
                p.swap(k, pi);
            }
            if pj != k {
                for row in &mut d {
                    row.swap(k, pj);
                }
                for row in &mut q {
                    row.swap(k, pj);
                }
            }

            // euclidean elimination of the pivot's row and column
            let mut done = true;
            for i in k + 1..ROWS {
                if d[i][k] != 0 {
                    let factor = d[i][k] / d[k][k];
                    for j in 0..COLS {
                        d[i][j] -= factor * d[k][j];
                    }
                    for j in 0..ROWS {
                        p[i][j] -= factor * p[k][j];
                    }
                    if d[i][k] != 0 {
                        done = false;
                    }
                }
            }
            for j in k + 1..COLS {
                if d[k][j] != 0 {
                    let factor = d[k][j] / d[k][k];
                    for i in 0..ROWS {
                        d[i][j] -= factor * d[i][k];
                    }
                    for i in 0..COLS {
                        q[i][j] -= factor * q[i][k];
                    }
                    if d[k][j] != 0 {
                        done = false;
                    }
                }
            }
            if done {
                break;
            }
        }
        if d[k][k] < 0 {
            for j in 0..COLS {
                d[k][j] = -d[k][j];
            }
            for j in 0..ROWS {
                p[k][j] = -p[k][j];
            }
        }
    }

    SmithNormalForm { p, q, d }
}

/// Solve for the origin shift that takes the operations of the
/// tabulated setting onto `operations`, both expressed in the
/// conventional basis modified by `change_of_basis`.
///
/// Returns `Ok(None)` when the setting does not fit: its centering
/// disagrees, a generator rotation is absent, or the shift system has
/// no solution modulo lattice translations.
pub(crate) fn get_origin_shift(
    hall: &HallGroup,
    centering: Centering,
    change_of_basis: &ChangeOfBasis,
    operations: &SeitzOperationSet,
    symprec: f64,
) -> FailResult<Option<V3>> {
    let mut generators = hall.generators()?;
    // three generators always suffice; for centrosymmetric groups
    // with three matrix terms the middle one is redundant
    if generators.len() > 3 {
        generators.remove(1);
    }

    // the centering may be relabeled among a/b/c by the basis change
    let mut database_centering = hall.centering();
    match database_centering {
        Centering::AFace | Centering::BFace | Centering::CFace => {
            let translations = database_centering.lattice_translations();
            let moved = change_of_basis.transform_twelfths(&translations[1]);
            if moved[0] == 0 {
                database_centering = Centering::AFace;
            }
            if moved[1] == 0 {
                database_centering = Centering::BFace;
            }
            if moved[2] == 0 {
                database_centering = Centering::CFace;
            }
        }
        _ => {}
    }
    if centering != database_centering {
        return Ok(None);
    }

    let (num, den) = database_centering.to_primitive();
    let change_to_primitive = ChangeOfBasis::from_rational(&num, den);

    let mut a = [[0i64; COLS]; ROWS];
    let mut x = [0.0f64; ROWS];
    for (i, generator) in generators.iter().enumerate() {
        let generator = change_of_basis.transform_op(generator);

        let found = match operations.operations.iter().find(|op| op.rot == generator.rot) {
            Some(op) => op,
            None => return Ok(None),
        };

        let difference = generator.rot.matrix() - &M33::<i32>::eye();
        let block = change_to_primitive.transform_rotation(&FracRot::new(&difference));
        for r in 0..3 {
            for c in 0..3 {
                a[3 * i + r][c] = block.matrix()[r][c] as i64;
            }
        }

        let found_primitive = change_to_primitive.transform_float(&found.trans);
        let database_primitive = change_to_primitive.transform_float(&generator.trans.to_float());
        let difference = (found_primitive - database_primitive).map(fract);
        for r in 0..3 {
            x[3 * i + r] = difference[r];
        }
    }

    let snf = smith_normal_form(&a);

    let mut test = [0.0f64; ROWS];
    for i in 0..ROWS {
        test[i] = (0..ROWS).map(|j| snf.p[i][j] as f64 * x[j]).sum();
    }

    // rows annihilated by the operations must carry no translation
    // difference (modulo lattice translations); a mismatched setting
    // leaves a residual that is a multiple of a twelfth, far above
    // symprec
    let off_lattice = |t: f64| (t - t.round()).abs() > symprec;
    for i in 0..COLS {
        if snf.d[i][i] == 0 && off_lattice(test[i]) {
            return Ok(None);
        }
    }
    for i in COLS..ROWS {
        if off_lattice(test[i]) {
            return Ok(None);
        }
    }

    // back-substitute through the diagonal
    let mut z = [0.0f64; COLS];
    for i in 0..COLS {
        if snf.d[i][i] != 0 {
            z[i] = test[i] / snf.d[i][i] as f64;
        }
    }

    let shift = V3::from_fn(|r| {
        (0..COLS).map(|j| snf.q[r][j] as f64 * z[j]).sum::<f64>()
    });

    let to_conventional = change_of_basis.inverse();
    Ok(Some(fract_v3(to_conventional.transform_float(&shift))))
}

// Table 2 from R.W. Grosse-Kunstleve, Acta Cryst. (1999). A55, 383-395:
// the changes of basis that preserve the conventional cell shape of
// each holohedry, as columns.
const MONOCLINIC_BASES: [[[i32; 3]; 3]; 6] = [
    [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    [[-1, 0, -1], [0, 1, 0], [1, 0, 0]],
    [[0, 0, 1], [0, 1, 0], [-1, 0, -1]],
    [[0, 0, 1], [0, -1, 0], [1, 0, 0]],
    [[-1, 0, -1], [0, -1, 0], [0, 0, 1]],
    [[1, 0, 0], [0, -1, 0], [-1, 0, -1]],
];

const ORTHORHOMBIC_BASES: [[[i32; 3]; 3]; 6] = [
    [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
    [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
    [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
    [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
    [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
];

/// Test one tabulated setting against the discovered operations,
/// trying the basis changes its holohedry allows.
pub(crate) fn match_space_group(
    hall: &HallGroup,
    point_group_number: usize,
    centering: Centering,
    operations: &SeitzOperationSet,
    symprec: f64,
) -> FailResult<Option<(V3, ChangeOfBasis)>> {
    let group = hall.point_group()?;
    if group.number != point_group_number {
        return Ok(None);
    }

    match group.holohedry {
        Holohedry::Triclinic
        | Holohedry::Tetragonal
        | Holohedry::Trigonal
        | Holohedry::Hexagonal => {
            let identity = ChangeOfBasis::identity();
            if let Some(origin) = get_origin_shift(hall, centering, &identity, operations, symprec)? {
                return Ok(Some((origin, identity)));
            }
        }
        Holohedry::Monoclinic => {
            for basis in &MONOCLINIC_BASES {
                let change_of_basis = ChangeOfBasis::from_int(&mat::from_cols(*basis));
                if let Some(origin) = get_origin_shift(hall, centering, &change_of_basis, operations, symprec)? {
                    return Ok(Some((origin, change_of_basis)));
                }
            }
        }
        Holohedry::Orthorhombic => {
            for basis in &ORTHORHOMBIC_BASES {
                let change_of_basis = ChangeOfBasis::from_int(&mat::from_cols(*basis));
                if let Some(origin) = get_origin_shift(hall, centering, &change_of_basis, operations, symprec)? {
                    return Ok(Some((origin, change_of_basis)));
                }
            }
        }
        Holohedry::Cubic => {
            let identity = ChangeOfBasis::identity();
            if let Some(origin) = get_origin_shift(hall, centering, &identity, operations, symprec)? {
                return Ok(Some((origin, identity)));
            }

            // P a -3 also occurs with its two-fold axes swapped, which
            // no cubic basis change can repair
            if hall.hall_number == 501 {
                let swapped = ChangeOfBasis::from_int(
                    &mat::from_cols([[0, 0, 1], [0, -1, 0], [1, 0, 0]]));
                let forced = Centering::Primitive;
                if let Some(origin) = get_origin_shift(hall, forced, &swapped, operations, symprec)? {
                    return Ok(Some((origin, swapped)));
                }
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oper::symmops::SeitzOp;

    fn matrix_product(snf: &SmithNormalForm, a: &[[i64; COLS]; ROWS]) -> [[i64; COLS]; ROWS] {
        // p * a * q
        let mut pa = [[0i64; COLS]; ROWS];
        for i in 0..ROWS {
            for j in 0..COLS {
                pa[i][j] = (0..ROWS).map(|k| snf.p[i][k] * a[k][j]).sum();
            }
        }
        let mut paq = [[0i64; COLS]; ROWS];
        for i in 0..ROWS {
            for j in 0..COLS {
                paq[i][j] = (0..COLS).map(|k| pa[i][k] * snf.q[k][j]).sum();
            }
        }
        paq
    }

    fn det3(m: &[[i64; 3]; 3]) -> i64 {
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    #[test]
    fn smith_form_diagonalizes() {
        let mut a = [[0i64; COLS]; ROWS];
        a[0] = [2, 4, 4];
        a[1] = [-6, 6, 12];
        a[2] = [10, -4, -16];
        a[4] = [3, 1, 0];
        a[7] = [0, 5, 7];

        let snf = smith_normal_form(&a);
        let paq = matrix_product(&snf, &a);
        for i in 0..ROWS {
            for j in 0..COLS {
                if i == j {
                    assert_eq!(paq[i][j], snf.d[i][j]);
                    assert!(snf.d[i][j] >= 0);
                } else {
                    assert_eq!(paq[i][j], 0, "({}, {})", i, j);
                }
            }
        }
        assert_eq!(det3(&snf.q).abs(), 1);
    }

    #[test]
    fn smith_form_of_zero_matrix() {
        let a = [[0i64; COLS]; ROWS];
        let snf = smith_normal_form(&a);
        for i in 0..COLS {
            assert_eq!(snf.d[i][i], 0);
        }
    }

    const SYMPREC: f64 = 1e-5;

    #[test]
    fn setting_matches_its_own_operations() {
        // F m -3 m against its own tabulated operations
        let hall = HallGroup::get(crate::oper::hall::hall_number_for_space_group(225).unwrap()).unwrap();
        let operations = SeitzOperationSet::from_frac_ops(&hall.operations().unwrap().operations);
        let group = hall.point_group().unwrap();

        let matched = match_space_group(hall, group.number, Centering::Face, &operations, SYMPREC)
            .unwrap()
            .expect("should match itself");
        let (origin, _) = matched;
        for i in 0..3 {
            assert!(origin[i].abs() < 1e-9, "{:?}", origin);
        }
    }

    #[test]
    fn wrong_centering_is_rejected() {
        let hall = HallGroup::get(crate::oper::hall::hall_number_for_space_group(225).unwrap()).unwrap();
        let operations = SeitzOperationSet::from_frac_ops(&hall.operations().unwrap().operations);
        let group = hall.point_group().unwrap();
        let matched = match_space_group(hall, group.number, Centering::Body, &operations, SYMPREC).unwrap();
        assert!(matched.is_none());
    }

    #[test]
    fn wrong_point_group_is_rejected() {
        let hall = HallGroup::get(1).unwrap();
        let operations = SeitzOperationSet::from_frac_ops(&hall.operations().unwrap().operations);
        let matched = match_space_group(hall, 32, Centering::Primitive, &operations, SYMPREC).unwrap();
        assert!(matched.is_none());
    }

    #[test]
    fn shifted_inversion_center_is_recovered() {
        // -P 1 with the inversion center moved off the origin
        let hall = HallGroup::get(2).unwrap();
        let operations = SeitzOperationSet::new(vec![
            SeitzOp::new(&FracRot::eye(), &V3([0.0; 3])),
            SeitzOp::new(&FracRot::inversion(), &V3([0.5, 0.0, 0.25])),
        ]);
        let origin = get_origin_shift(hall, Centering::Primitive, &ChangeOfBasis::identity(), &operations, SYMPREC)
            .unwrap()
            .expect("solvable");
        // moving the origin by the shift must reproduce the found
        // translation: t' = t + (W - 1) origin, with W = -1 and t = 0
        let moved = fract_v3(origin * -2.0);
        let expected = [0.5, 0.0, 0.25];
        for i in 0..3 {
            assert!((moved[i] - expected[i]).abs() < 1e-9, "{:?}", moved);
        }
    }

    #[test]
    fn origin_shift_is_solved_off_the_twelfth_grid() {
        // the same group measured at a generic origin: the inversion
        // translation is -2 delta, which no twelfth approximates
        let hall = HallGroup::get(2).unwrap();
        let delta = V3([0.137, -0.061, 0.291]);
        let operations = SeitzOperationSet::new(vec![
            SeitzOp::new(&FracRot::eye(), &V3([0.0; 3])),
            SeitzOp::new(&FracRot::inversion(), &(delta * -2.0)),
        ]);
        let origin = get_origin_shift(hall, Centering::Primitive, &ChangeOfBasis::identity(), &operations, SYMPREC)
            .unwrap()
            .expect("solvable");
        // the shift is determined modulo half lattice translations
        let moved = fract_v3(origin * -2.0);
        let expected = fract_v3(delta * -2.0);
        for i in 0..3 {
            assert!((moved[i] - expected[i]).abs() < 1e-9, "{:?} vs {:?}", moved, expected);
        }
    }

    #[test]
    fn monoclinic_setting_matches_under_a_permuted_basis() {
        // P 2/m with axes permuted by one of the allowed basis changes
        let hall = HallGroup::get(crate::oper::hall::hall_number_for_space_group(10).unwrap()).unwrap();
        let change = ChangeOfBasis::from_int(&mat::from_cols(MONOCLINIC_BASES[3]));
        let operations = SeitzOperationSet::from_frac_ops(
            &hall.operations().unwrap().changed_basis(&change).operations);
        let group = hall.point_group().unwrap();

        let matched = match_space_group(hall, group.number, Centering::Primitive, &operations, SYMPREC).unwrap();
        assert!(matched.is_some());
    }
}
