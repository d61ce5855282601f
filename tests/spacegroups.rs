//! Space-group determination for a gallery of well-known structures.

extern crate spgr;
extern crate env_logger;

use spgr::array_types::{V3, mat};
use spgr::symmetry::{Lattice, Atom, Centering, SpaceGroupMatch, find_space_group};

const SYMPREC: f64 = 1e-5;

fn find(lattice: &Lattice, atoms: &[Atom]) -> SpaceGroupMatch {
    let _ = env_logger::try_init();
    find_space_group(lattice, atoms, SYMPREC, false)
        .unwrap_or_else(|e| panic!("space group search failed: {}", e))
}

fn hexagonal(a: f64, c: f64) -> Lattice {
    Lattice::new(&mat::from_array([
        [a, 0.0, 0.0],
        [-0.5 * a, 0.5 * a * 3f64.sqrt(), 0.0],
        [0.0, 0.0, c],
    ]))
}

fn fcc_sites(base: V3) -> Vec<V3> {
    let shifts = [
        V3([0.0, 0.0, 0.0]),
        V3([0.0, 0.5, 0.5]),
        V3([0.5, 0.0, 0.5]),
        V3([0.5, 0.5, 0.0]),
    ];
    shifts.iter().map(|s| base + *s).collect()
}

#[test]
fn diamond() {
    let mut atoms = vec![];
    for site in fcc_sites(V3([0.0, 0.0, 0.0])) {
        atoms.push(Atom::new(0, site));
    }
    for site in fcc_sites(V3([0.25, 0.25, 0.25])) {
        atoms.push(Atom::new(0, site));
    }
    let result = find(&Lattice::diagonal(&[3.567; 3]), &atoms);
    assert_eq!(result.number, 227);
    assert_eq!(result.centering, Centering::Face);
    assert_eq!(result.asymmetric_atoms.len(), 1);
}

#[test]
fn fluorite() {
    let mut atoms = vec![];
    for site in fcc_sites(V3([0.0, 0.0, 0.0])) {
        atoms.push(Atom::new(0, site));
    }
    for site in fcc_sites(V3([0.25, 0.25, 0.25])) {
        atoms.push(Atom::new(1, site));
    }
    for site in fcc_sites(V3([0.75, 0.75, 0.75])) {
        atoms.push(Atom::new(1, site));
    }
    let result = find(&Lattice::diagonal(&[5.463; 3]), &atoms);
    assert_eq!(result.number, 225);
    assert_eq!(result.asymmetric_atoms.len(), 2);
}

#[test]
fn cubic_perovskite() {
    let atoms = [
        Atom::new(0, V3([0.0, 0.0, 0.0])),
        Atom::new(1, V3([0.5, 0.5, 0.5])),
        Atom::new(2, V3([0.5, 0.5, 0.0])),
        Atom::new(2, V3([0.5, 0.0, 0.5])),
        Atom::new(2, V3([0.0, 0.5, 0.5])),
    ];
    let result = find(&Lattice::diagonal(&[3.905; 3]), &atoms);
    assert_eq!(result.number, 221);
    assert_eq!(result.asymmetric_atoms.len(), 3);
}

#[test]
fn rutile() {
    let u = 0.305;
    let atoms = [
        Atom::new(0, V3([0.0, 0.0, 0.0])),
        Atom::new(0, V3([0.5, 0.5, 0.5])),
        Atom::new(1, V3([u, u, 0.0])),
        Atom::new(1, V3([1.0 - u, 1.0 - u, 0.0])),
        Atom::new(1, V3([0.5 + u, 0.5 - u, 0.5])),
        Atom::new(1, V3([0.5 - u, 0.5 + u, 0.5])),
    ];
    let result = find(&Lattice::diagonal(&[4.594, 4.594, 2.959]), &atoms);
    assert_eq!(result.number, 136);
}

#[test]
fn wurtzite() {
    let u = 0.375;
    let atoms = [
        Atom::new(0, V3([1.0 / 3.0, 2.0 / 3.0, 0.0])),
        Atom::new(0, V3([2.0 / 3.0, 1.0 / 3.0, 0.5])),
        Atom::new(1, V3([1.0 / 3.0, 2.0 / 3.0, u])),
        Atom::new(1, V3([2.0 / 3.0, 1.0 / 3.0, 0.5 + u])),
    ];
    let result = find(&hexagonal(3.82, 6.26), &atoms);
    assert_eq!(result.number, 186);
}

#[test]
fn graphite() {
    let atoms = [
        Atom::new(0, V3([0.0, 0.0, 0.25])),
        Atom::new(0, V3([0.0, 0.0, 0.75])),
        Atom::new(0, V3([1.0 / 3.0, 2.0 / 3.0, 0.25])),
        Atom::new(0, V3([2.0 / 3.0, 1.0 / 3.0, 0.75])),
    ];
    let result = find(&hexagonal(2.464, 6.711), &atoms);
    assert_eq!(result.number, 194);
}

#[test]
fn fcc_from_primitive_cell() {
    // rhombohedral primitive description of fcc copper
    let lattice = Lattice::new(&mat::from_array([
        [0.0, 1.805, 1.805],
        [1.805, 0.0, 1.805],
        [1.805, 1.805, 0.0],
    ]));
    let atoms = [Atom::new(0, V3([0.0, 0.0, 0.0]))];
    let result = find(&lattice, &atoms);
    assert_eq!(result.number, 225);
    assert_eq!(result.centering, Centering::Face);

    // the reported cell is the conventional cubic one
    assert!((result.cell.a - 3.61).abs() < 1e-8);
    assert!((result.cell.alpha.to_degrees() - 90.0).abs() < 1e-8);
}

#[test]
fn supercell_is_reduced_to_primitive() {
    // 2x1x1 supercell of bcc iron
    let atoms = [
        Atom::new(0, V3([0.0, 0.0, 0.0])),
        Atom::new(0, V3([0.25, 0.5, 0.5])),
        Atom::new(0, V3([0.5, 0.0, 0.0])),
        Atom::new(0, V3([0.75, 0.5, 0.5])),
    ];
    let result = find(&Lattice::diagonal(&[5.74, 2.87, 2.87]), &atoms);
    assert_eq!(result.number, 229);
    assert_eq!(result.asymmetric_atoms.len(), 1);
    assert!((result.cell.a - 2.87).abs() < 1e-8);
}

#[test]
fn occupancies_distinguish_sites_unless_ignored() {
    let atoms = [
        Atom::with_occupancy(0, V3([0.0, 0.0, 0.0]), 1.0),
        Atom::with_occupancy(0, V3([0.5, 0.5, 0.5]), 0.5),
    ];
    let lattice = Lattice::diagonal(&[3.0; 3]);

    let strict = find_space_group(&lattice, &atoms, SYMPREC, false).unwrap();
    assert_eq!(strict.number, 221);

    let blind = find_space_group(&lattice, &atoms, SYMPREC, true).unwrap();
    assert_eq!(blind.number, 229);
}
