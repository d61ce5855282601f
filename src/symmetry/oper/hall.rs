//! The 530 tabulated space-group settings and their Hall symbols.
//!
//! A Hall symbol encodes a generating set of Seitz matrices in a few
//! characters (S.R. Hall, "Space-group notation with an explicit
//! origin", Acta Cryst. A37, 517-525, 1981). Parsing the symbol and
//! closing over the generators reproduces the full operation set of
//! the setting, so no per-setting matrix data needs to be stored.

use crate::{FailResult, SymmetryError};
use crate::oper::symmops::{FracRot, FracTrans, FracOp, Centering, SymmetryOperationSet};
use crate::oper::point_group::PointGroup;
use spgr_array_types::{V3, M33, mat};

/// One setting of a space group.
///
/// `hall_number` runs from 1 to 530 and identifies the setting;
/// `number` is the international space-group number it belongs to.
#[derive(Debug)]
pub struct HallGroup {
    pub hall_number: usize,
    pub number: usize,
    pub hm_symbol: &'static str,
    pub symbol: &'static str,
}

/// Space groups published with two origin choices, for which the
/// setting with the origin on an inversion center (choice 2) is
/// preferred. 228 also has two origin choices but keeps choice 1.
const PREFER_SECOND_ORIGIN: [usize; 23] = [
    48, 50, 59, 68, 70, 85, 86, 88, 125, 126, 129, 130, 133, 134,
    137, 138, 141, 142, 201, 203, 222, 224, 227,
];

impl HallGroup {
    pub fn get(hall_number: usize) -> Option<&'static HallGroup>
    { HALL_GROUP_DATA.get(hall_number.wrapping_sub(1)) }

    /// The centering encoded by the lattice symbol.
    pub fn centering(&self) -> Centering {
        let letter = self.symbol.trim_start_matches('-')
            .chars().next().unwrap_or('P');
        match letter {
            'A' => Centering::AFace,
            'B' => Centering::BFace,
            'C' => Centering::CFace,
            'I' => Centering::Body,
            'R' => Centering::Rhombohedral,
            'F' => Centering::Face,
            _ => Centering::Primitive,
        }
    }

    /// The generators encoded by the Hall symbol: one Seitz matrix per
    /// matrix term, with the inversion last for centrosymmetric
    /// groups. Centering translations are not included.
    pub fn generators(&self) -> FailResult<Vec<FracOp>> {
        let parsed = parse_hall_symbol(self.symbol)?;
        Ok(parsed.generators)
    }

    /// The full operation set of this setting, with centering
    /// translations applied.
    pub fn operations(&self) -> FailResult<SymmetryOperationSet> {
        let generators = self.generators()?;
        let set = SymmetryOperationSet::from_generators(&generators);
        Ok(set.adding_centering_operations(self.centering()))
    }

    pub fn point_group(&self) -> FailResult<&'static PointGroup> {
        let operations = self.operations()?;
        let rotations = operations.rotations();
        match PointGroup::from_rotations(&rotations) {
            Some(group) => Ok(group),
            None => Err(SymmetryError::NoMatchingPointGroup),
        }
    }
}

lazy_static! {
    /// Hall number of the first tabulated setting of each space group.
    static ref FIRST_HALL_NUMBER: [usize; 231] = {
        let mut first = [0; 231];
        for (i, group) in HALL_GROUP_DATA.iter().enumerate().rev() {
            first[group.number] = i + 1;
        }
        first
    };
}

/// The preferred setting of a space group, as a hall number.
pub fn hall_number_for_space_group(space_group: usize) -> Option<usize> {
    match FIRST_HALL_NUMBER.get(space_group) {
        None | Some(&0) => None,
        Some(&first) if PREFER_SECOND_ORIGIN.contains(&space_group) => Some(first + 1),
        Some(&first) => Some(first),
    }
}

struct ParsedHall {
    generators: Vec<FracOp>,
}

fn rotation_matrix(n: u32, axis: char) -> FailResult<M33<i32>> {
    let rows = match (n, axis) {
        (1, _) => [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
        (2, 'x') => [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
        (2, 'y') => [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
        (2, 'z') => [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
        // twofold axes along the face diagonals a-b and a+b
        (2, '\'') => [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
        (2, '"') => [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
        (3, 'z') => [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
        // threefold along the body diagonal
        (3, '*') => [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
        (4, 'z') => [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
        (6, 'z') => [[1, -1, 0], [1, 0, 0], [0, 0, 1]],
        _ => throw!(SymmetryError::NotFound("rotation in hall symbol")),
    };
    Ok(mat::from_array(rows))
}

fn translation_letter(letter: char) -> Option<V3<i32>> {
    // in twelfths
    match letter {
        'a' => Some(V3([6, 0, 0])),
        'b' => Some(V3([0, 6, 0])),
        'c' => Some(V3([0, 0, 6])),
        'n' => Some(V3([6, 6, 6])),
        'u' => Some(V3([3, 0, 0])),
        'v' => Some(V3([0, 3, 0])),
        'w' => Some(V3([0, 0, 3])),
        'd' => Some(V3([3, 3, 3])),
        _ => None,
    }
}

/// Parse one matrix term of a Hall symbol into a Seitz matrix.
///
/// `index` is the position among the matrix terms and `previous_n`
/// the rotation count of the preceding term; both feed the implied
/// axis rules of the notation.
fn parse_term(token: &str, index: usize, previous_n: u32) -> FailResult<(FracOp, u32)> {
    let mut chars = token.chars().peekable();

    let improper = chars.peek() == Some(&'-');
    if improper {
        chars.next();
    }

    let n: u32 = match chars.next().and_then(|c| c.to_digit(10)) {
        Some(n @ 1) | Some(n @ 2) | Some(n @ 3) | Some(n @ 4) | Some(n @ 6) => n,
        _ => throw!(SymmetryError::NotFound("rotation order in hall symbol")),
    };

    let mut translation = V3([0i32; 3]);

    // a screw axis is written as a subscript digit
    if let Some(subscript) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        translation[2] += (12 * subscript / n) as i32;
    }

    let axis = match chars.peek() {
        Some(&c) if c == 'x' || c == 'y' || c == '"' || c == '*' => {
            chars.next();
            c
        }
        _ => match (index, n) {
            (0, _) => 'z',
            (_, 2) => match previous_n {
                2 | 4 => 'x',
                3 | 6 => '\'',
                _ => 'z',
            },
            (2, 3) => '*',
            _ => 'z',
        },
    };

    for letter in chars {
        match translation_letter(letter) {
            Some(v) => translation = translation + v,
            None => throw!(SymmetryError::NotFound("translation in hall symbol")),
        }
    }

    let mut matrix = rotation_matrix(n, axis)?;
    if improper {
        matrix = -matrix;
    }
    let op = FracOp::new(&FracRot::new(&matrix), &FracTrans::from_twelfths(&translation));
    Ok((op, n))
}

fn parse_hall_symbol(symbol: &str) -> FailResult<ParsedHall> {
    let (body, origin) = match symbol.find('(') {
        Some(paren) => (&symbol[..paren], parse_origin_shift(&symbol[paren..])?),
        None => (symbol, V3([0i32; 3])),
    };

    let mut tokens = body.split_whitespace();
    let lattice = match tokens.next() {
        Some(token) => token,
        None => throw!(SymmetryError::NotFound("lattice symbol in hall symbol")),
    };
    let centrosymmetric = lattice.starts_with('-');

    let mut generators = vec![];
    let mut previous_n = 0;
    for (index, token) in tokens.enumerate() {
        let (op, n) = parse_term(token, index, previous_n)?;
        generators.push(op);
        previous_n = n;
    }
    if centrosymmetric {
        generators.push(FracOp::inversion());
    }

    // an origin shift conjugates every generator
    if origin != V3([0i32; 3]) {
        for op in &mut generators {
            let rotated = op.rot.matrix() * &origin;
            let twelfths = *op.trans.twelfths() + origin - rotated;
            op.trans = FracTrans::from_twelfths(&twelfths);
        }
    }

    Ok(ParsedHall { generators })
}

/// Parse a trailing `(p q r)` origin shift, in twelfths.
fn parse_origin_shift(text: &str) -> FailResult<V3<i32>> {
    let inner = text.trim_start_matches('(').trim_end_matches(')');
    let mut shift = V3([0i32; 3]);
    let mut count = 0;
    for part in inner.split_whitespace() {
        match part.parse::<i32>() {
            Ok(value) if count < 3 => {
                shift[count] = value;
                count += 1;
            }
            _ => throw!(SymmetryError::NotFound("origin shift in hall symbol")),
        }
    }
    if count != 3 {
        throw!(SymmetryError::NotFound("origin shift in hall symbol"));
    }
    Ok(shift)
}

pub static HALL_GROUP_DATA: [HallGroup; 530] = [
    HallGroup { hall_number: 1, number: 1, hm_symbol: "P 1", symbol: "P 1" },
    HallGroup { hall_number: 2, number: 2, hm_symbol: "P -1", symbol: "-P 1" },
    HallGroup { hall_number: 3, number: 3, hm_symbol: "P 1 2 1 unique b axis", symbol: "P 2y" },
    HallGroup { hall_number: 4, number: 3, hm_symbol: "P 1 1 2 unique c axis", symbol: "P 2" },
    HallGroup { hall_number: 5, number: 3, hm_symbol: "P 2 1 1 unique a axis", symbol: "P 2x" },
    HallGroup { hall_number: 6, number: 4, hm_symbol: "P 1 21 1 unique b axis", symbol: "P 2yb" },
    HallGroup { hall_number: 7, number: 4, hm_symbol: "P 1 1 21 unique c axis", symbol: "P 2c" },
    HallGroup { hall_number: 8, number: 4, hm_symbol: "P 21 1 1 unique a axis", symbol: "P 2xa" },
    HallGroup { hall_number: 9, number: 5, hm_symbol: "C 1 2 1 unique b axis: cell choice 1", symbol: "C 2y" },
    HallGroup { hall_number: 10, number: 5, hm_symbol: "A 1 2 1 unique b axis: cell choice 2", symbol: "A 2y" },
    HallGroup { hall_number: 11, number: 5, hm_symbol: "I 1 2 1 unique b axis: cell choice 3", symbol: "I 2y" },
    HallGroup { hall_number: 12, number: 5, hm_symbol: "A 1 1 2 unique c axis: cell choice 1", symbol: "A 2" },
    HallGroup { hall_number: 13, number: 5, hm_symbol: "B 1 1 2 unique c axis: cell choice 2", symbol: "B 2" },
    HallGroup { hall_number: 14, number: 5, hm_symbol: "I 1 1 2 unique c axis: cell choice 3", symbol: "I 2" },
    HallGroup { hall_number: 15, number: 5, hm_symbol: "B 2 1 1 unique a axis: cell choice 1", symbol: "B 2x" },
    HallGroup { hall_number: 16, number: 5, hm_symbol: "C 2 1 1 unique a axis: cell choice 2", symbol: "C 2x" },
    HallGroup { hall_number: 17, number: 5, hm_symbol: "I 2 1 1 unique a axis: cell choice 3", symbol: "I 2x" },
    HallGroup { hall_number: 18, number: 6, hm_symbol: "P 1 m 1 unique b axis", symbol: "P -2y" },
    HallGroup { hall_number: 19, number: 6, hm_symbol: "P 1 1 m unique c axis", symbol: "P -2" },
    HallGroup { hall_number: 20, number: 6, hm_symbol: "P m 1 1 unique a axis", symbol: "P -2x" },
    HallGroup { hall_number: 21, number: 7, hm_symbol: "P 1 c 1 unique b axis: cell choice 1", symbol: "P -2yc" },
    HallGroup { hall_number: 22, number: 7, hm_symbol: "P 1 n 1 unique b axis: cell choice 2", symbol: "P -2yac" },
    HallGroup { hall_number: 23, number: 7, hm_symbol: "P 1 a 1 unique b axis: cell choice 3", symbol: "P -2ya" },
    HallGroup { hall_number: 24, number: 7, hm_symbol: "P 1 1 a unique c axis: cell choice 1", symbol: "P -2a" },
    HallGroup { hall_number: 25, number: 7, hm_symbol: "P 1 1 n unique c axis: cell choice 2", symbol: "P -2ab" },
    HallGroup { hall_number: 26, number: 7, hm_symbol: "P 1 1 b unique c axis: cell choice 3", symbol: "P -2b" },
    HallGroup { hall_number: 27, number: 7, hm_symbol: "P b 1 1 unique a axis: cell choice 1", symbol: "P -2xb" },
    HallGroup { hall_number: 28, number: 7, hm_symbol: "P n 1 1 unique a axis: cell choice 2", symbol: "P -2xbc" },
    HallGroup { hall_number: 29, number: 7, hm_symbol: "P c 1 1 unique a axis: cell choice 3", symbol: "P -2xc" },
    HallGroup { hall_number: 30, number: 8, hm_symbol: "C 1 m 1 unique b axis: cell choice 1", symbol: "C -2y" },
    HallGroup { hall_number: 31, number: 8, hm_symbol: "A 1 m 1 unique b axis: cell choice 2", symbol: "A -2y" },
    HallGroup { hall_number: 32, number: 8, hm_symbol: "I 1 m 1 unique b axis: cell choice 3", symbol: "I -2y" },
    HallGroup { hall_number: 33, number: 8, hm_symbol: "A 1 1 m unique c axis: cell choice 1", symbol: "A -2" },
    HallGroup { hall_number: 34, number: 8, hm_symbol: "B 1 1 m  unique c axis: cell choice 2", symbol: "B -2" },
    HallGroup { hall_number: 35, number: 8, hm_symbol: "I 1 1 m unique c axis: cell choice 3", symbol: "I -2" },
    HallGroup { hall_number: 36, number: 8, hm_symbol: "B m 1 1 unique a axis: cell choice 1", symbol: "B -2x" },
    HallGroup { hall_number: 37, number: 8, hm_symbol: "C m 1 1 unique a axis: cell choice 2", symbol: "C -2x" },
    HallGroup { hall_number: 38, number: 8, hm_symbol: "I m 1 1 unique a axis: cell choice 3", symbol: "I -2x" },
    HallGroup { hall_number: 39, number: 9, hm_symbol: "C 1 c 1 unique b axis: cell choice 1", symbol: "C -2yc" },
    HallGroup { hall_number: 40, number: 9, hm_symbol: "A 1 n 1 unique b axis: cell choice 2", symbol: "A -2yab" },
    HallGroup { hall_number: 41, number: 9, hm_symbol: "I 1 a 1 unique b axis: cell choice 3", symbol: "I -2ya" },
    HallGroup { hall_number: 42, number: 9, hm_symbol: "A 1 a 1 unique -b axis: cell choice 1", symbol: "A -2ya" },
    HallGroup { hall_number: 43, number: 9, hm_symbol: "C 1 n 1 unique -b axis: cell choice 2", symbol: "C -2yac" },
    HallGroup { hall_number: 44, number: 9, hm_symbol: "I 1 c 1 unique -b axis: cell choice 3", symbol: "I -2yc" },
    HallGroup { hall_number: 45, number: 9, hm_symbol: "A 1 1 a unique c axis: cell choice 1", symbol: "A -2a" },
    HallGroup { hall_number: 46, number: 9, hm_symbol: "B 1 1 n unique c axis: cell choice 2", symbol: "B -2ab" },
    HallGroup { hall_number: 47, number: 9, hm_symbol: "I 1 1 b unique c axis: cell choice 3", symbol: "I -2b" },
    HallGroup { hall_number: 48, number: 9, hm_symbol: "B 1 1 b unique -c axis: cell choice 1", symbol: "B -2b" },
    HallGroup { hall_number: 49, number: 9, hm_symbol: "A 1 1 n unique -c axis: cell choice 2", symbol: "A -2ab" },
    HallGroup { hall_number: 50, number: 9, hm_symbol: "I 1 1 a unique -c axis: cell choice 3", symbol: "I -2a" },
    HallGroup { hall_number: 51, number: 9, hm_symbol: "B b 1 1 unique a axis: cell choice 1", symbol: "B -2xb" },
    HallGroup { hall_number: 52, number: 9, hm_symbol: "C n 1 1 unique a axis: cell choice 2", symbol: "C -2xac" },
    HallGroup { hall_number: 53, number: 9, hm_symbol: "I c 1 1 unique a axis: cell choice 3", symbol: "I -2xc" },
    HallGroup { hall_number: 54, number: 9, hm_symbol: "C c 1 1 unique -a axis: cell choice 1", symbol: "C -2xc" },
    HallGroup { hall_number: 55, number: 9, hm_symbol: "B n 1 1 unique -a axis: cell choice 2", symbol: "B -2xab" },
    HallGroup { hall_number: 56, number: 9, hm_symbol: "I b 1 1 unique -a axis: cell choice 3", symbol: "I -2xb" },
    HallGroup { hall_number: 57, number: 10, hm_symbol: "P 1 2/m 1 unique b axis", symbol: "-P 2y" },
    HallGroup { hall_number: 58, number: 10, hm_symbol: "P 1 1 2/m unique c axis", symbol: "-P 2" },
    HallGroup { hall_number: 59, number: 10, hm_symbol: "P 2/m 1 1 unique a axis", symbol: "-P 2x" },
    HallGroup { hall_number: 60, number: 11, hm_symbol: "P 1 21/m 1 unique axis b", symbol: "-P 2yb" },
    HallGroup { hall_number: 61, number: 11, hm_symbol: "P 1 1 21/m unique c axis", symbol: "-P 2c" },
    HallGroup { hall_number: 62, number: 11, hm_symbol: "P 21/m 1 1 unique a axis", symbol: "-P 2xa" },
    HallGroup { hall_number: 63, number: 12, hm_symbol: "C 1 2/m 1 unique b axis: cell choice 1", symbol: "-C 2y" },
    HallGroup { hall_number: 64, number: 12, hm_symbol: "A 1 2/m 1 unique b axis: cell choice 2", symbol: "-A 2y" },
    HallGroup { hall_number: 65, number: 12, hm_symbol: "I 1 2/m 1 unique b axis: cell choice 3", symbol: "-I 2y" },
    HallGroup { hall_number: 66, number: 12, hm_symbol: "A 1 1 2/m unique c axis: cell choice 1", symbol: "-A 2" },
    HallGroup { hall_number: 67, number: 12, hm_symbol: "B 1 1 2/m unique c axis: cell choice 2", symbol: "-B 2" },
    HallGroup { hall_number: 68, number: 12, hm_symbol: "I 1 1 2/m unique c axis: cell choice 3", symbol: "-I 2" },
    HallGroup { hall_number: 69, number: 12, hm_symbol: "B 2/m 1 1 unique a axis: cell choice 1", symbol: "-B 2x" },
    HallGroup { hall_number: 70, number: 12, hm_symbol: "C 2/m 1 1 unique a axis: cell choice 2", symbol: "-C 2x" },
    HallGroup { hall_number: 71, number: 12, hm_symbol: "I 2/m 1 1 unique a axis: cell choice 3", symbol: "-I 2x" },
    HallGroup { hall_number: 72, number: 13, hm_symbol: "P 1 2/c 1 unique b axis: cell choice 1", symbol: "-P 2yc" },
    HallGroup { hall_number: 73, number: 13, hm_symbol: "P 1 2/n 1 unique b axis: cell choice 2", symbol: "-P 2yac" },
    HallGroup { hall_number: 74, number: 13, hm_symbol: "P 1 2/a 1 unique b axis: cell choice 3", symbol: "-P 2ya" },
    HallGroup { hall_number: 75, number: 13, hm_symbol: "P 1 1 2/a unique c axis: cell choice 1", symbol: "-P 2a" },
    HallGroup { hall_number: 76, number: 13, hm_symbol: "P 1 1 2/n unique c axis: cell choice 2", symbol: "-P 2ab" },
    HallGroup { hall_number: 77, number: 13, hm_symbol: "P 1 1 2/b unique c axis: cell choice 3", symbol: "-P 2b" },
    HallGroup { hall_number: 78, number: 13, hm_symbol: "P 2/b 1 1 unique a axis: cell choice 1", symbol: "-P 2xb" },
    HallGroup { hall_number: 79, number: 13, hm_symbol: "P 2/n 1 1 unique a axis: cell choice 2", symbol: "-P 2xbc" },
    HallGroup { hall_number: 80, number: 13, hm_symbol: "P 2/c 1 1 unique a axis: cell choice 3", symbol: "-P 2xc" },
    HallGroup { hall_number: 81, number: 14, hm_symbol: "P 1 21/c 1 unique b axis: cell choice 1", symbol: "-P 2ybc" },
    HallGroup { hall_number: 82, number: 14, hm_symbol: "P 1 21/n 1 unique b axis: cell choice 2", symbol: "-P 2yn" },
    HallGroup { hall_number: 83, number: 14, hm_symbol: "P 1 21/a 1 unique b axis: cell choice 3", symbol: "-P 2yab" },
    HallGroup { hall_number: 84, number: 14, hm_symbol: "P 1 1 21/a unique c axis: cell choice 1", symbol: "-P 2ac" },
    HallGroup { hall_number: 85, number: 14, hm_symbol: "P 1 1 21/n unique c axis: cell choice 2", symbol: "-P 2n" },
    HallGroup { hall_number: 86, number: 14, hm_symbol: "P 1 1 21/b unique c axis: cell choice 3", symbol: "-P 2bc" },
    HallGroup { hall_number: 87, number: 14, hm_symbol: "P 21/b 1 1 unique a axis: cell choice 1", symbol: "-P 2xab" },
    HallGroup { hall_number: 88, number: 14, hm_symbol: "P 21/n 1 1 unique a axis: cell choice 2", symbol: "-P 2xn" },
    HallGroup { hall_number: 89, number: 14, hm_symbol: "P 21/c 1 1 unique a axis: cell choice 3", symbol: "-P 2xac" },
    HallGroup { hall_number: 90, number: 15, hm_symbol: "C 1 2/c 1 unique b axis: cell choice 1", symbol: "-C 2yc" },
    HallGroup { hall_number: 91, number: 15, hm_symbol: "A 1 2/n 1 unique b axis: cell choice 2", symbol: "-A 2yab" },
    HallGroup { hall_number: 92, number: 15, hm_symbol: "I 1 2/a 1 unique b axis: cell choice 3", symbol: "-I 2ya" },
    HallGroup { hall_number: 93, number: 15, hm_symbol: "A 1 2/a 1 unique -b axis: cell choice 1", symbol: "-A 2ya" },
    HallGroup { hall_number: 94, number: 15, hm_symbol: "C 1 2/n 1 unique -b axis: cell choice 2", symbol: "-C 2yac" },
    HallGroup { hall_number: 95, number: 15, hm_symbol: "I 1 2/c 1 unique -b axis: cell choice 3", symbol: "-I 2yc" },
    HallGroup { hall_number: 96, number: 15, hm_symbol: "A 1 1 2/a unique c axis: cell choice 1", symbol: "-A 2a" },
    HallGroup { hall_number: 97, number: 15, hm_symbol: "B 1 1 2/n unique c axis: cell choice 2", symbol: "-B 2ab" },
    HallGroup { hall_number: 98, number: 15, hm_symbol: "I 1 1 2/b unique c axis: cell choice 3", symbol: "-I 2b" },
    HallGroup { hall_number: 99, number: 15, hm_symbol: "B 1 1 2/b unique -c axis: cell choice 1", symbol: "-B 2b" },
    HallGroup { hall_number: 100, number: 15, hm_symbol: "A 1 1 2/n unique -c axis: cell choice 2", symbol: "-A 2ab" },
    HallGroup { hall_number: 101, number: 15, hm_symbol: "I 1 1 2/a unique -c axis: cell choice 3", symbol: "-I 2a" },
    HallGroup { hall_number: 102, number: 15, hm_symbol: "B 2/b 1 1 unique a axis: cell choice 1", symbol: "-B 2xb" },
    HallGroup { hall_number: 103, number: 15, hm_symbol: "C 2/n 1 1 unique a axis: cell choice 2", symbol: "-C 2xac" },
    HallGroup { hall_number: 104, number: 15, hm_symbol: "I 2/c 1 1 unique a axis: cell choice 3", symbol: "-I 2xc" },
    HallGroup { hall_number: 105, number: 15, hm_symbol: "C 2/c 1 1 unique -a axis: cell choice 1", symbol: "-C 2xc" },
    HallGroup { hall_number: 106, number: 15, hm_symbol: "B 2/n 1 1 unique -a axis: cell choice 2", symbol: "-B 2xab" },
    HallGroup { hall_number: 107, number: 15, hm_symbol: "I 2/b 1 1 unique -a axis: cell choice 3", symbol: "-I 2xb" },
    HallGroup { hall_number: 108, number: 16, hm_symbol: "P 2 2 2", symbol: "P 2 2" },
    HallGroup { hall_number: 109, number: 17, hm_symbol: "P 2 2 21 Origin-1,abc", symbol: "P 2c 2" },
    HallGroup { hall_number: 110, number: 17, hm_symbol: "P 21 2 2 Origin-1,cab", symbol: "P 2a 2a" },
    HallGroup { hall_number: 111, number: 17, hm_symbol: "P 2 21 2 Origin-1,bca", symbol: "P 2 2b" },
    HallGroup { hall_number: 112, number: 18, hm_symbol: "P 21 21 2 Origin-1,abc", symbol: "P 2 2ab" },
    HallGroup { hall_number: 113, number: 18, hm_symbol: "P 2 21 21 Origin-1,cab", symbol: "P 2bc 2" },
    HallGroup { hall_number: 114, number: 18, hm_symbol: "P 21 2 21 Origin-1,bca", symbol: "P 2ac 2ac" },
    HallGroup { hall_number: 115, number: 19, hm_symbol: "P 21 21 21", symbol: "P 2ac 2ab" },
    HallGroup { hall_number: 116, number: 20, hm_symbol: "C 2 2 21  Origin-1,abc", symbol: "C 2c 2" },
    HallGroup { hall_number: 117, number: 20, hm_symbol: "A 21 2 2  Origin-1,cba", symbol: "A 2a 2a" },
    HallGroup { hall_number: 118, number: 20, hm_symbol: "B 2 21 2  Origin-1,bca", symbol: "B 2 2b" },
    HallGroup { hall_number: 119, number: 21, hm_symbol: "C 2 2 2 Origin-1,abc", symbol: "C 2 2" },
    HallGroup { hall_number: 120, number: 21, hm_symbol: "A 2 2 2 Origin-1,cab", symbol: "A 2 2" },
    HallGroup { hall_number: 121, number: 21, hm_symbol: "B 2 2 2 Origin-1,bca", symbol: "B 2 2" },
    HallGroup { hall_number: 122, number: 22, hm_symbol: "F 2 2 2", symbol: "F 2 2" },
    HallGroup { hall_number: 123, number: 23, hm_symbol: "I 2 2 2", symbol: "I 2 2" },
    HallGroup { hall_number: 124, number: 24, hm_symbol: "I 21 21 21", symbol: "I 2b 2c" },
    HallGroup { hall_number: 125, number: 25, hm_symbol: "P m m 2", symbol: "P 2 -2" },
    HallGroup { hall_number: 126, number: 25, hm_symbol: "P 2 m m", symbol: "P -2 2" },
    HallGroup { hall_number: 127, number: 25, hm_symbol: "P m 2 m", symbol: "P -2 -2" },
    HallGroup { hall_number: 128, number: 26, hm_symbol: "P m c 21", symbol: "P 2c -2" },
    HallGroup { hall_number: 129, number: 26, hm_symbol: "P c m 21", symbol: "P 2c -2c" },
    HallGroup { hall_number: 130, number: 26, hm_symbol: "P 21 m a", symbol: "P -2a 2a" },
    HallGroup { hall_number: 131, number: 26, hm_symbol: "P 21 a m", symbol: "P -2 2a" },
    HallGroup { hall_number: 132, number: 26, hm_symbol: "P b 21 m", symbol: "P -2 -2b" },
    HallGroup { hall_number: 133, number: 26, hm_symbol: "P m 21 b", symbol: "P -2b -2" },
    HallGroup { hall_number: 134, number: 27, hm_symbol: "P c c 2", symbol: "P 2 -2c" },
    HallGroup { hall_number: 135, number: 27, hm_symbol: "P 2 a a", symbol: "P -2a 2" },
    HallGroup { hall_number: 136, number: 27, hm_symbol: "P b 2 b", symbol: "P -2b -2b" },
    HallGroup { hall_number: 137, number: 28, hm_symbol: "P m a 2", symbol: "P 2 -2a" },
    HallGroup { hall_number: 138, number: 28, hm_symbol: "P b m 2", symbol: "P 2 -2b" },
    HallGroup { hall_number: 139, number: 28, hm_symbol: "P 2 m b", symbol: "P -2b 2" },
    HallGroup { hall_number: 140, number: 28, hm_symbol: "P 2 c m", symbol: "P -2c 2" },
    HallGroup { hall_number: 141, number: 28, hm_symbol: "P c 2 m", symbol: "P -2c -2c" },
    HallGroup { hall_number: 142, number: 28, hm_symbol: "P m 2 a", symbol: "P -2a -2a" },
    HallGroup { hall_number: 143, number: 29, hm_symbol: "P c a 21", symbol: "P 2c -2ac" },
    HallGroup { hall_number: 144, number: 29, hm_symbol: "P b c 21", symbol: "P 2c -2b" },
    HallGroup { hall_number: 145, number: 29, hm_symbol: "P 21 a b", symbol: "P -2b 2a" },
    HallGroup { hall_number: 146, number: 29, hm_symbol: "P 21 c a", symbol: "P -2ac 2a" },
    HallGroup { hall_number: 147, number: 29, hm_symbol: "P c 21 b", symbol: "P -2bc -2c" },
    HallGroup { hall_number: 148, number: 29, hm_symbol: "P b 21 a", symbol: "P -2a -2ab" },
    HallGroup { hall_number: 149, number: 30, hm_symbol: "P n c 2", symbol: "P 2 -2bc" },
    HallGroup { hall_number: 150, number: 30, hm_symbol: "P c n 2", symbol: "P 2 -2ac" },
    HallGroup { hall_number: 151, number: 30, hm_symbol: "P 2 n a", symbol: "P -2ac 2" },
    HallGroup { hall_number: 152, number: 30, hm_symbol: "P 2 a n", symbol: "P -2ab 2" },
    HallGroup { hall_number: 153, number: 30, hm_symbol: "P b 2 n", symbol: "P -2ab -2ab" },
    HallGroup { hall_number: 154, number: 30, hm_symbol: "P n 2 b", symbol: "P -2bc -2bc" },
    HallGroup { hall_number: 155, number: 31, hm_symbol: "P m n 21", symbol: "P 2ac -2" },
    HallGroup { hall_number: 156, number: 31, hm_symbol: "P n m 21", symbol: "P 2bc -2bc" },
    HallGroup { hall_number: 157, number: 31, hm_symbol: "P 21 m n", symbol: "P -2ab 2ab" },
    HallGroup { hall_number: 158, number: 31, hm_symbol: "P 21 n m", symbol: "P -2 2ac" },
    HallGroup { hall_number: 159, number: 31, hm_symbol: "P n 21 m", symbol: "P -2 -2bc" },
    HallGroup { hall_number: 160, number: 31, hm_symbol: "P m 21 n", symbol: "P -2ab -2" },
    HallGroup { hall_number: 161, number: 32, hm_symbol: "P b a 2", symbol: "P 2 -2ab" },
    HallGroup { hall_number: 162, number: 32, hm_symbol: "P 2 c b", symbol: "P -2bc 2" },
    HallGroup { hall_number: 163, number: 32, hm_symbol: "P c 2 a", symbol: "P -2ac -2ac" },
    HallGroup { hall_number: 164, number: 33, hm_symbol: "P n a 21", symbol: "P 2c -2n" },
    HallGroup { hall_number: 165, number: 33, hm_symbol: "P b n 21", symbol: "P 2c -2ab" },
    HallGroup { hall_number: 166, number: 33, hm_symbol: "P 21 n b", symbol: "P -2bc 2a" },
    HallGroup { hall_number: 167, number: 33, hm_symbol: "P 21 c n", symbol: "P -2n 2a" },
    HallGroup { hall_number: 168, number: 33, hm_symbol: "P c 21 n", symbol: "P -2n -2ac" },
    HallGroup { hall_number: 169, number: 33, hm_symbol: "P n 21 a", symbol: "P -2ac -2n" },
    HallGroup { hall_number: 170, number: 34, hm_symbol: "P n n 2", symbol: "P 2 -2n" },
    HallGroup { hall_number: 171, number: 34, hm_symbol: "P 2 n n", symbol: "P -2n 2" },
    HallGroup { hall_number: 172, number: 34, hm_symbol: "P n 2 n", symbol: "P -2n -2n" },
    HallGroup { hall_number: 173, number: 35, hm_symbol: "C m m 2", symbol: "C 2 -2" },
    HallGroup { hall_number: 174, number: 35, hm_symbol: "A 2 m m", symbol: "A -2 2" },
    HallGroup { hall_number: 175, number: 35, hm_symbol: "B m 2 m", symbol: "B -2 -2" },
    HallGroup { hall_number: 176, number: 36, hm_symbol: "C m c 21", symbol: "C 2c -2" },
    HallGroup { hall_number: 177, number: 36, hm_symbol: "C c m 21", symbol: "C 2c -2c" },
    HallGroup { hall_number: 178, number: 36, hm_symbol: "A 21 m a", symbol: "A -2a 2a" },
    HallGroup { hall_number: 179, number: 36, hm_symbol: "A 21 a m", symbol: "A -2 2a" },
    HallGroup { hall_number: 180, number: 36, hm_symbol: "B b 21 m", symbol: "B -2 -2b" },
    HallGroup { hall_number: 181, number: 36, hm_symbol: "B m 21 b", symbol: "B -2b -2" },
    HallGroup { hall_number: 182, number: 37, hm_symbol: "C c c 2", symbol: "C 2 -2c" },
    HallGroup { hall_number: 183, number: 37, hm_symbol: "A 2 a a", symbol: "A -2a 2" },
    HallGroup { hall_number: 184, number: 37, hm_symbol: "B b 2 b", symbol: "B -2b -2b" },
    HallGroup { hall_number: 185, number: 38, hm_symbol: "A m m 2", symbol: "A 2 -2" },
    HallGroup { hall_number: 186, number: 38, hm_symbol: "B m m 2", symbol: "B 2 -2" },
    HallGroup { hall_number: 187, number: 38, hm_symbol: "B 2 m m", symbol: "B -2 2" },
    HallGroup { hall_number: 188, number: 38, hm_symbol: "C 2 m m", symbol: "C -2 2" },
    HallGroup { hall_number: 189, number: 38, hm_symbol: "C m 2 m", symbol: "C -2 -2" },
    HallGroup { hall_number: 190, number: 38, hm_symbol: "A m 2 m", symbol: "A -2 -2" },
    HallGroup { hall_number: 191, number: 39, hm_symbol: "A b m 2", symbol: "A 2 -2b" },
    HallGroup { hall_number: 192, number: 39, hm_symbol: "B m a 2", symbol: "B 2 -2a" },
    HallGroup { hall_number: 193, number: 39, hm_symbol: "B 2 c m", symbol: "B -2a 2" },
    HallGroup { hall_number: 194, number: 39, hm_symbol: "C 2 m b", symbol: "C -2a 2" },
    HallGroup { hall_number: 195, number: 39, hm_symbol: "C m 2 a", symbol: "C -2a -2a" },
    HallGroup { hall_number: 196, number: 39, hm_symbol: "A c 2 m", symbol: "A -2b -2b" },
    HallGroup { hall_number: 197, number: 40, hm_symbol: "A m a 2", symbol: "A 2 -2a" },
    HallGroup { hall_number: 198, number: 40, hm_symbol: "B b m 2", symbol: "B 2 -2b" },
    HallGroup { hall_number: 199, number: 40, hm_symbol: "B 2 m b", symbol: "B -2b 2" },
    HallGroup { hall_number: 200, number: 40, hm_symbol: "C 2 c m", symbol: "C -2c 2" },
    HallGroup { hall_number: 201, number: 40, hm_symbol: "C c 2 m", symbol: "C -2c -2c" },
    HallGroup { hall_number: 202, number: 40, hm_symbol: "A m 2 a", symbol: "A -2a -2a" },
    HallGroup { hall_number: 203, number: 41, hm_symbol: "A b a 2", symbol: "A 2 -2ab" },
    HallGroup { hall_number: 204, number: 41, hm_symbol: "B b a 2", symbol: "B 2 -2ab" },
    HallGroup { hall_number: 205, number: 41, hm_symbol: "B 2 c b", symbol: "B -2ab 2" },
    HallGroup { hall_number: 206, number: 41, hm_symbol: "C 2 c b", symbol: "C -2ac 2" },
    HallGroup { hall_number: 207, number: 41, hm_symbol: "C c 2 a", symbol: "C -2ac -2ac" },
    HallGroup { hall_number: 208, number: 41, hm_symbol: "A c 2 a", symbol: "A -2ab -2ab" },
    HallGroup { hall_number: 209, number: 42, hm_symbol: "F m m 2", symbol: "F 2 -2" },
    HallGroup { hall_number: 210, number: 42, hm_symbol: "F 2 m m", symbol: "F -2 2" },
    HallGroup { hall_number: 211, number: 42, hm_symbol: "F m 2 m", symbol: "F -2 -2" },
    HallGroup { hall_number: 212, number: 43, hm_symbol: "F d d 2", symbol: "F 2 -2d" },
    HallGroup { hall_number: 213, number: 43, hm_symbol: "F 2 d d", symbol: "F -2d 2" },
    HallGroup { hall_number: 214, number: 43, hm_symbol: "F d 2 d", symbol: "F -2d -2d" },
    HallGroup { hall_number: 215, number: 44, hm_symbol: "I m m 2", symbol: "I 2 -2" },
    HallGroup { hall_number: 216, number: 44, hm_symbol: "I 2 m m", symbol: "I -2 2" },
    HallGroup { hall_number: 217, number: 44, hm_symbol: "I m 2 m", symbol: "I -2 -2" },
    HallGroup { hall_number: 218, number: 45, hm_symbol: "I b a 2", symbol: "I 2 -2c" },
    HallGroup { hall_number: 219, number: 45, hm_symbol: "I 2 c b", symbol: "I -2a 2" },
    HallGroup { hall_number: 220, number: 45, hm_symbol: "I c 2 a", symbol: "I -2b -2b" },
    HallGroup { hall_number: 221, number: 46, hm_symbol: "I m a 2", symbol: "I 2 -2a" },
    HallGroup { hall_number: 222, number: 46, hm_symbol: "I b m 2", symbol: "I 2 -2b" },
    HallGroup { hall_number: 223, number: 46, hm_symbol: "I 2 m b", symbol: "I -2b 2" },
    HallGroup { hall_number: 224, number: 46, hm_symbol: "I 2 c m", symbol: "I -2c 2" },
    HallGroup { hall_number: 225, number: 46, hm_symbol: "I c 2 m", symbol: "I -2c -2c" },
    HallGroup { hall_number: 226, number: 46, hm_symbol: "I m 2 a", symbol: "I -2a -2a" },
    HallGroup { hall_number: 227, number: 47, hm_symbol: "P m m m", symbol: "-P 2 2" },
    HallGroup { hall_number: 228, number: 48, hm_symbol: "P n n n Origin choice 1", symbol: "P 2 2 -1n" },
    HallGroup { hall_number: 229, number: 48, hm_symbol: "P n n n Origin choice 2", symbol: "-P 2ab 2bc" },
    HallGroup { hall_number: 230, number: 49, hm_symbol: "P c c m", symbol: "-P 2 2c" },
    HallGroup { hall_number: 231, number: 49, hm_symbol: "P m a a", symbol: "-P 2a 2" },
    HallGroup { hall_number: 232, number: 49, hm_symbol: "P b m b", symbol: "-P 2b 2b" },
    HallGroup { hall_number: 233, number: 50, hm_symbol: "P b a n Origin choice 1", symbol: "P 2 2 -1ab" },
    HallGroup { hall_number: 234, number: 50, hm_symbol: "P b a n Origin choice 2", symbol: "-P 2ab 2b" },
    HallGroup { hall_number: 235, number: 50, hm_symbol: "P n c b Origin choice 1", symbol: "P 2 2 -1bc" },
    HallGroup { hall_number: 236, number: 50, hm_symbol: "P n c b Origin choice 2", symbol: "-P 2b 2bc" },
    HallGroup { hall_number: 237, number: 50, hm_symbol: "P c n a Origin choice 1", symbol: "P 2 2 -1ac" },
    HallGroup { hall_number: 238, number: 50, hm_symbol: "P c n a Origin choice 2", symbol: "-P 2a 2c" },
    HallGroup { hall_number: 239, number: 51, hm_symbol: "P m m a", symbol: "-P 2a 2a" },
    HallGroup { hall_number: 240, number: 51, hm_symbol: "P m m b", symbol: "-P 2b 2" },
    HallGroup { hall_number: 241, number: 51, hm_symbol: "P b m m", symbol: "-P 2 2b" },
    HallGroup { hall_number: 242, number: 51, hm_symbol: "P c m m", symbol: "-P 2c 2c" },
    HallGroup { hall_number: 243, number: 51, hm_symbol: "P m c m", symbol: "-P 2c 2" },
    HallGroup { hall_number: 244, number: 51, hm_symbol: "P m a m", symbol: "-P 2 2a" },
    HallGroup { hall_number: 245, number: 52, hm_symbol: "P n n a", symbol: "-P 2a 2bc" },
    HallGroup { hall_number: 246, number: 52, hm_symbol: "P n n b", symbol: "-P 2b 2n" },
    HallGroup { hall_number: 247, number: 52, hm_symbol: "P b n n", symbol: "-P 2n 2b" },
    HallGroup { hall_number: 248, number: 52, hm_symbol: "P c n n", symbol: "-P 2ab 2c" },
    HallGroup { hall_number: 249, number: 52, hm_symbol: "P n c n", symbol: "-P 2ab 2n" },
    HallGroup { hall_number: 250, number: 52, hm_symbol: "P n a n", symbol: "-P 2n 2bc" },
    HallGroup { hall_number: 251, number: 53, hm_symbol: "P m n a", symbol: "-P 2ac 2" },
    HallGroup { hall_number: 252, number: 53, hm_symbol: "Pnmb", symbol: "-P 2bc 2bc" },
    HallGroup { hall_number: 253, number: 53, hm_symbol: "P b m n", symbol: "-P 2ab 2ab" },
    HallGroup { hall_number: 254, number: 53, hm_symbol: "P c n m", symbol: "-P 2 2ac" },
    HallGroup { hall_number: 255, number: 53, hm_symbol: "P n c m", symbol: "-P 2 2bc" },
    HallGroup { hall_number: 256, number: 53, hm_symbol: "P m a n", symbol: "-P 2ab 2" },
    HallGroup { hall_number: 257, number: 54, hm_symbol: "P c c a", symbol: "-P 2a 2ac" },
    HallGroup { hall_number: 258, number: 54, hm_symbol: "P c c b", symbol: "-P 2b 2c" },
    HallGroup { hall_number: 259, number: 54, hm_symbol: "P b a a", symbol: "-P 2a 2b" },
    HallGroup { hall_number: 260, number: 54, hm_symbol: "P c a a", symbol: "-P 2ac 2c" },
    HallGroup { hall_number: 261, number: 54, hm_symbol: "P b c b", symbol: "-P 2bc 2b" },
    HallGroup { hall_number: 262, number: 54, hm_symbol: "P b a b", symbol: "-P 2b 2ab" },
    HallGroup { hall_number: 263, number: 55, hm_symbol: "P b a m", symbol: "-P 2 2ab" },
    HallGroup { hall_number: 264, number: 55, hm_symbol: "P m c b", symbol: "-P 2bc 2" },
    HallGroup { hall_number: 265, number: 55, hm_symbol: "P c m a", symbol: "-P 2ac 2ac" },
    HallGroup { hall_number: 266, number: 56, hm_symbol: "P c c n", symbol: "-P 2ab 2ac" },
    HallGroup { hall_number: 267, number: 56, hm_symbol: "P n a a", symbol: "-P 2ac 2bc" },
    HallGroup { hall_number: 268, number: 56, hm_symbol: "P b n b", symbol: "-P 2bc 2ab" },
    HallGroup { hall_number: 269, number: 57, hm_symbol: "P b c m", symbol: "-P 2c 2b" },
    HallGroup { hall_number: 270, number: 57, hm_symbol: "P c a m", symbol: "-P 2c 2ac" },
    HallGroup { hall_number: 271, number: 57, hm_symbol: "P m c a", symbol: "-P 2ac 2a" },
    HallGroup { hall_number: 272, number: 57, hm_symbol: "P m a b", symbol: "-P 2b 2a" },
    HallGroup { hall_number: 273, number: 57, hm_symbol: "P b m a", symbol: "-P 2a 2ab" },
    HallGroup { hall_number: 274, number: 57, hm_symbol: "P c m b", symbol: "-P 2bc 2c" },
    HallGroup { hall_number: 275, number: 58, hm_symbol: "P n n m", symbol: "-P 2 2n" },
    HallGroup { hall_number: 276, number: 58, hm_symbol: "P m n n", symbol: "-P 2n 2" },
    HallGroup { hall_number: 277, number: 58, hm_symbol: "P n m n", symbol: "-P 2n 2n" },
    HallGroup { hall_number: 278, number: 59, hm_symbol: "P m m n Origin choice 1", symbol: "P 2 2ab -1ab" },
    HallGroup { hall_number: 279, number: 59, hm_symbol: "P m m n Origin choice 2", symbol: "-P 2ab 2a" },
    HallGroup { hall_number: 280, number: 59, hm_symbol: "P n m m Origin choice 1", symbol: "P 2bc 2 -1bc" },
    HallGroup { hall_number: 281, number: 59, hm_symbol: "P n m m Origin choice 2", symbol: "-P 2c 2bc" },
    HallGroup { hall_number: 282, number: 59, hm_symbol: "P m n m Origin choice 1", symbol: "P 2ac 2ac -1ac" },
    HallGroup { hall_number: 283, number: 59, hm_symbol: "P m n m Origin choice 2", symbol: "-P 2c 2a" },
    HallGroup { hall_number: 284, number: 60, hm_symbol: "P b c n", symbol: "-P 2n 2ab" },
    HallGroup { hall_number: 285, number: 60, hm_symbol: "P c a n", symbol: "-P 2n 2c" },
    HallGroup { hall_number: 286, number: 60, hm_symbol: "P n c a", symbol: "-P 2a 2n" },
    HallGroup { hall_number: 287, number: 60, hm_symbol: "P n a b", symbol: "-P 2bc 2n" },
    HallGroup { hall_number: 288, number: 60, hm_symbol: "P b n a", symbol: "-P 2ac 2b" },
    HallGroup { hall_number: 289, number: 60, hm_symbol: "P c n b", symbol: "-P 2b 2ac" },
    HallGroup { hall_number: 290, number: 61, hm_symbol: "P b c a", symbol: "-P 2ac 2ab" },
    HallGroup { hall_number: 291, number: 61, hm_symbol: "P c a b", symbol: "-P 2bc 2ac" },
    HallGroup { hall_number: 292, number: 62, hm_symbol: "P n m a", symbol: "-P 2ac 2n" },
    HallGroup { hall_number: 293, number: 62, hm_symbol: "P m n b", symbol: "-P 2bc 2a" },
    HallGroup { hall_number: 294, number: 62, hm_symbol: "P b n m", symbol: "-P 2c 2ab" },
    HallGroup { hall_number: 295, number: 62, hm_symbol: "P c m n", symbol: "-P 2n 2ac" },
    HallGroup { hall_number: 296, number: 62, hm_symbol: "P m c n", symbol: "-P 2n 2a" },
    HallGroup { hall_number: 297, number: 62, hm_symbol: "P n a m", symbol: "-P 2c 2n" },
    HallGroup { hall_number: 298, number: 63, hm_symbol: "C m c m", symbol: "-C 2c 2" },
    HallGroup { hall_number: 299, number: 63, hm_symbol: "C c m m", symbol: "-C 2c 2c" },
    HallGroup { hall_number: 300, number: 63, hm_symbol: "A m m a", symbol: "-A 2a 2a" },
    HallGroup { hall_number: 301, number: 63, hm_symbol: "A m a m", symbol: "-A 2 2a" },
    HallGroup { hall_number: 302, number: 63, hm_symbol: "B b m m", symbol: "-B 2 2b" },
    HallGroup { hall_number: 303, number: 63, hm_symbol: "B m m b", symbol: "-B 2b 2" },
    HallGroup { hall_number: 304, number: 64, hm_symbol: "C m c a", symbol: "-C 2ac 2" },
    HallGroup { hall_number: 305, number: 64, hm_symbol: "C c m b", symbol: "-C 2ac 2ac" },
    HallGroup { hall_number: 306, number: 64, hm_symbol: "A b m a", symbol: "-A 2ab 2ab" },
    HallGroup { hall_number: 307, number: 64, hm_symbol: "A c a m", symbol: "-A 2 2ab" },
    HallGroup { hall_number: 308, number: 64, hm_symbol: "B b c m", symbol: "-B 2 2ab" },
    HallGroup { hall_number: 309, number: 64, hm_symbol: "B m a b", symbol: "-B 2ab 2" },
    HallGroup { hall_number: 310, number: 65, hm_symbol: "C m m m", symbol: "-C 2 2" },
    HallGroup { hall_number: 311, number: 65, hm_symbol: "A m m m", symbol: "-A 2 2" },
    HallGroup { hall_number: 312, number: 65, hm_symbol: "B m m m", symbol: "-B 2 2" },
    HallGroup { hall_number: 313, number: 66, hm_symbol: "C c c m", symbol: "-C 2 2c" },
    HallGroup { hall_number: 314, number: 66, hm_symbol: "A m a a", symbol: "-A 2a 2" },
    HallGroup { hall_number: 315, number: 66, hm_symbol: "B b m b", symbol: "-B 2b 2b" },
    HallGroup { hall_number: 316, number: 67, hm_symbol: "C m m a", symbol: "-C 2a 2" },
    HallGroup { hall_number: 317, number: 67, hm_symbol: "C m m b", symbol: "-C 2a 2a" },
    HallGroup { hall_number: 318, number: 67, hm_symbol: "A b m m", symbol: "-A 2b 2b" },
    HallGroup { hall_number: 319, number: 67, hm_symbol: "A c m m", symbol: "-A 2 2b" },
    HallGroup { hall_number: 320, number: 67, hm_symbol: "B m c m", symbol: "-B 2 2a" },
    HallGroup { hall_number: 321, number: 67, hm_symbol: "B m a m", symbol: "-B 2a 2" },
    HallGroup { hall_number: 322, number: 68, hm_symbol: "C c c a Origin choice 1", symbol: "C 2 2 -1ac" },
    HallGroup { hall_number: 323, number: 68, hm_symbol: "C c c a Origin choice 2", symbol: "-C 2a 2ac" },
    HallGroup { hall_number: 324, number: 68, hm_symbol: "C c c b Origin choice 1", symbol: "C 2 2 -1bc" },
    HallGroup { hall_number: 325, number: 68, hm_symbol: "C c c b Origin choice 2", symbol: "-C 2b 2c" },
    HallGroup { hall_number: 326, number: 68, hm_symbol: "A b a a Origin choice 1", symbol: "A 2 2 -1ac" },
    HallGroup { hall_number: 327, number: 68, hm_symbol: "A b a a Origin choice 2", symbol: "-A 2a 2b" },
    HallGroup { hall_number: 328, number: 68, hm_symbol: "A c a a Origin choice 1", symbol: "A 2 2 -1ab" },
    HallGroup { hall_number: 329, number: 68, hm_symbol: "A c a a Origin choice 2", symbol: "-A 2ab 2b" },
    HallGroup { hall_number: 330, number: 68, hm_symbol: "B b c b Origin choice 1", symbol: "B 2 2 -1ab" },
    HallGroup { hall_number: 331, number: 68, hm_symbol: "B b c b Origin choice 2", symbol: "-B 2ab 2b" },
    HallGroup { hall_number: 332, number: 68, hm_symbol: "B b a b Origin choice 1", symbol: "B 2 2 -1ab" },
    HallGroup { hall_number: 333, number: 68, hm_symbol: "B b a b Origin choice 2", symbol: "-B 2b 2ab" },
    HallGroup { hall_number: 334, number: 69, hm_symbol: "F m m m", symbol: "-F 2 2" },
    HallGroup { hall_number: 335, number: 70, hm_symbol: "F d d d:1 Origin choice 1", symbol: "F 2 2 -1d" },
    HallGroup { hall_number: 336, number: 70, hm_symbol: "F d d d:2 Origin choice 2", symbol: "-F 2uv 2vw" },
    HallGroup { hall_number: 337, number: 71, hm_symbol: "I m m m", symbol: "-I 2 2" },
    HallGroup { hall_number: 338, number: 72, hm_symbol: "I b a m", symbol: "-I 2 2c" },
    HallGroup { hall_number: 339, number: 72, hm_symbol: "I m c b", symbol: "-I 2a 2" },
    HallGroup { hall_number: 340, number: 72, hm_symbol: "I c m a", symbol: "-I 2b 2b" },
    HallGroup { hall_number: 341, number: 73, hm_symbol: "I b c a", symbol: "-I 2b 2c" },
    HallGroup { hall_number: 342, number: 73, hm_symbol: "I c a b", symbol: "-I 2a 2b" },
    HallGroup { hall_number: 343, number: 74, hm_symbol: "I m m a", symbol: "-I 2b 2" },
    HallGroup { hall_number: 344, number: 74, hm_symbol: "I m m b", symbol: "-I 2a 2a" },
    HallGroup { hall_number: 345, number: 74, hm_symbol: "I b m m", symbol: "-I 2c 2c" },
    HallGroup { hall_number: 346, number: 74, hm_symbol: "I c m m", symbol: "-I 2 2b" },
    HallGroup { hall_number: 347, number: 74, hm_symbol: "I m c m", symbol: "-I 2 2a" },
    HallGroup { hall_number: 348, number: 74, hm_symbol: "I m a m", symbol: "-I 2c 2" },
    HallGroup { hall_number: 349, number: 75, hm_symbol: "P 4", symbol: "P 4" },
    HallGroup { hall_number: 350, number: 76, hm_symbol: "P 41", symbol: "P 4w" },
    HallGroup { hall_number: 351, number: 77, hm_symbol: "P 42", symbol: "P 4c" },
    HallGroup { hall_number: 352, number: 78, hm_symbol: "P 43", symbol: "P 4cw" },
    HallGroup { hall_number: 353, number: 79, hm_symbol: "I 4", symbol: "I 4" },
    HallGroup { hall_number: 354, number: 80, hm_symbol: "I 41", symbol: "I 4bw" },
    HallGroup { hall_number: 355, number: 81, hm_symbol: "P -4", symbol: "P -4" },
    HallGroup { hall_number: 356, number: 82, hm_symbol: "I -4", symbol: "I -4" },
    HallGroup { hall_number: 357, number: 83, hm_symbol: "P 4/m", symbol: "-P 4" },
    HallGroup { hall_number: 358, number: 84, hm_symbol: "P 42/m", symbol: "-P 4c" },
    HallGroup { hall_number: 359, number: 85, hm_symbol: "P 4/n Origin choice 1", symbol: "P 4ab -1ab" },
    HallGroup { hall_number: 360, number: 85, hm_symbol: "P 4/n Origin choice 2", symbol: "-P 4a" },
    HallGroup { hall_number: 361, number: 86, hm_symbol: "P 42/n Origin choice 1", symbol: "P 4n -1n" },
    HallGroup { hall_number: 362, number: 86, hm_symbol: "P 42/n Origin choice 2", symbol: "-P 4bc" },
    HallGroup { hall_number: 363, number: 87, hm_symbol: "I 4/m", symbol: "-I 4" },
    HallGroup { hall_number: 364, number: 88, hm_symbol: "I 41/a Origin choice 1", symbol: "I 4bw -1bw" },
    HallGroup { hall_number: 365, number: 88, hm_symbol: "I 41/a Origin choice 2", symbol: "-I 4ad" },
    HallGroup { hall_number: 366, number: 89, hm_symbol: "P 4 2 2", symbol: "P 4 2" },
    HallGroup { hall_number: 367, number: 90, hm_symbol: "P 4 21 2", symbol: "P 4ab 2ab" },
    HallGroup { hall_number: 368, number: 91, hm_symbol: "P 41 2 2", symbol: "P 4w 2c" },
    HallGroup { hall_number: 369, number: 92, hm_symbol: "P 41 21 2", symbol: "P 4abw 2nw" },
    HallGroup { hall_number: 370, number: 93, hm_symbol: "P 42 2 2", symbol: "P 4c 2" },
    HallGroup { hall_number: 371, number: 94, hm_symbol: "P 42 21 2", symbol: "P 4n 2n" },
    HallGroup { hall_number: 372, number: 95, hm_symbol: "P 43 2 2", symbol: "P 4cw 2c" },
    HallGroup { hall_number: 373, number: 96, hm_symbol: "P 43 21 2", symbol: "P 4nw 2abw" },
    HallGroup { hall_number: 374, number: 97, hm_symbol: "I 4 2 2", symbol: "I 4 2" },
    HallGroup { hall_number: 375, number: 98, hm_symbol: "I 41 2 2", symbol: "I 4bw 2bw" },
    HallGroup { hall_number: 376, number: 99, hm_symbol: "P 4 m m", symbol: "P 4 -2" },
    HallGroup { hall_number: 377, number: 100, hm_symbol: "P 4 b m", symbol: "P 4 -2ab" },
    HallGroup { hall_number: 378, number: 101, hm_symbol: "P 42 c m", symbol: "P 4c -2c" },
    HallGroup { hall_number: 379, number: 102, hm_symbol: "P 42 n m", symbol: "P 4n -2n" },
    HallGroup { hall_number: 380, number: 103, hm_symbol: "P 4 c c", symbol: "P 4 -2c" },
    HallGroup { hall_number: 381, number: 104, hm_symbol: "P 4 n c", symbol: "P 4 -2n" },
    HallGroup { hall_number: 382, number: 105, hm_symbol: "P 42 m c", symbol: "P 4c -2" },
    HallGroup { hall_number: 383, number: 106, hm_symbol: "P 42 b c", symbol: "P 4c -2ab" },
    HallGroup { hall_number: 384, number: 107, hm_symbol: "I 4 m m", symbol: "I 4 -2" },
    HallGroup { hall_number: 385, number: 108, hm_symbol: "I 4 c m", symbol: "I 4 -2c" },
    HallGroup { hall_number: 386, number: 109, hm_symbol: "I 41 m d", symbol: "I 4bw -2" },
    HallGroup { hall_number: 387, number: 110, hm_symbol: "I 41 c d", symbol: "I 4bw -2c" },
    HallGroup { hall_number: 388, number: 111, hm_symbol: "P -4 2 m", symbol: "P -4 2" },
    HallGroup { hall_number: 389, number: 112, hm_symbol: "P -4 2 c", symbol: "P -4 2c" },
    HallGroup { hall_number: 390, number: 113, hm_symbol: "P -4 21 m", symbol: "P -4 2ab" },
    HallGroup { hall_number: 391, number: 114, hm_symbol: "P -4 21 c", symbol: "P -4 2n" },
    HallGroup { hall_number: 392, number: 115, hm_symbol: "P -4 m 2", symbol: "P -4 -2" },
    HallGroup { hall_number: 393, number: 116, hm_symbol: "P -4 c 2", symbol: "P -4 -2c" },
    HallGroup { hall_number: 394, number: 117, hm_symbol: "P -4 b 2", symbol: "P -4 -2ab" },
    HallGroup { hall_number: 395, number: 118, hm_symbol: "P -4 n 2", symbol: "P -4 -2n" },
    HallGroup { hall_number: 396, number: 119, hm_symbol: "I -4 m 2", symbol: "I -4 -2" },
    HallGroup { hall_number: 397, number: 120, hm_symbol: "I -4 c 2", symbol: "I -4 -2c" },
    HallGroup { hall_number: 398, number: 121, hm_symbol: "I -4 2 m", symbol: "I -4 2" },
    HallGroup { hall_number: 399, number: 122, hm_symbol: "I -4 2 d", symbol: "I -4 2bw" },
    HallGroup { hall_number: 400, number: 123, hm_symbol: "P 4/m m m", symbol: "-P 4 2" },
    HallGroup { hall_number: 401, number: 124, hm_symbol: "P 4/m c c", symbol: "-P 4 2c" },
    HallGroup { hall_number: 402, number: 125, hm_symbol: "P 4/n b m Origin choice 1", symbol: "P 4 2 -1ab" },
    HallGroup { hall_number: 403, number: 125, hm_symbol: "P 4/n b m Origin choice 2", symbol: "-P 4a 2b" },
    HallGroup { hall_number: 404, number: 126, hm_symbol: "P 4/n n c Origin choice 1", symbol: "P 4 2 -1n" },
    HallGroup { hall_number: 405, number: 126, hm_symbol: "P 4/n n c Origin choice 2", symbol: "-P 4a 2bc" },
    HallGroup { hall_number: 406, number: 127, hm_symbol: "P 4/m b m", symbol: "-P 4 2ab" },
    HallGroup { hall_number: 407, number: 128, hm_symbol: "P 4/m n c", symbol: "-P 4 2n" },
    HallGroup { hall_number: 408, number: 129, hm_symbol: "P 4/n m m Origin choice 1", symbol: "P 4ab 2ab -1ab" },
    HallGroup { hall_number: 409, number: 129, hm_symbol: "P 4/n m m Origin choice 2", symbol: "-P 4a 2a" },
    HallGroup { hall_number: 410, number: 130, hm_symbol: "P 4/n c c Origin choice 1", symbol: "P 4ab 2n -1ab" },
    HallGroup { hall_number: 411, number: 130, hm_symbol: "P 4/n c c Origin choice 2", symbol: "-P 4a 2ac" },
    HallGroup { hall_number: 412, number: 131, hm_symbol: "P 42/m m c", symbol: "-P 4c 2" },
    HallGroup { hall_number: 413, number: 132, hm_symbol: "P 42/m c m", symbol: "-P 4c 2c" },
    HallGroup { hall_number: 414, number: 133, hm_symbol: "P 42/n b c Origin choice 1", symbol: "P 4n 2c -1n" },
    HallGroup { hall_number: 415, number: 133, hm_symbol: "P 42/n b c Origin choice 2", symbol: "-P 4ac 2b" },
    HallGroup { hall_number: 416, number: 134, hm_symbol: "P 42/n n m Origin choice 1", symbol: "P 4n 2 -1n" },
    HallGroup { hall_number: 417, number: 134, hm_symbol: "P 42/n n m Origin choice 2", symbol: "-P 4ac 2bc" },
    HallGroup { hall_number: 418, number: 135, hm_symbol: "P 42/m b c", symbol: "-P 4c 2ab" },
    HallGroup { hall_number: 419, number: 136, hm_symbol: "P 42/m n m", symbol: "-P 4n 2n" },
    HallGroup { hall_number: 420, number: 137, hm_symbol: "P 42/n m c Origin choice 1", symbol: "P 4n 2n -1n" },
    HallGroup { hall_number: 421, number: 137, hm_symbol: "P 42/n m c Origin choice 2", symbol: "-P 4ac 2a" },
    HallGroup { hall_number: 422, number: 138, hm_symbol: "P 42/n c m Origin choice 1", symbol: "P 4n 2ab -1n" },
    HallGroup { hall_number: 423, number: 138, hm_symbol: "P 42/n c m Origin choice 2", symbol: "-P 4ac 2ac" },
    HallGroup { hall_number: 424, number: 139, hm_symbol: "I 4/m m m", symbol: "-I 4 2" },
    HallGroup { hall_number: 425, number: 140, hm_symbol: "I 4/m c m", symbol: "-I 4 2c" },
    HallGroup { hall_number: 426, number: 141, hm_symbol: "I 41/a m d Origin choice 1", symbol: "I 4bw 2bw -1bw" },
    HallGroup { hall_number: 427, number: 141, hm_symbol: "I 41/a m d Origin choice 2", symbol: "-I 4bd 2" },
    HallGroup { hall_number: 428, number: 142, hm_symbol: "I 41/a c d Origin choice 1", symbol: "I 4bw 2aw -1bw" },
    HallGroup { hall_number: 429, number: 142, hm_symbol: "I 41/a c d Origin choice 2", symbol: "-I 4bd 2c" },
    HallGroup { hall_number: 430, number: 143, hm_symbol: "P 3", symbol: "P 3" },
    HallGroup { hall_number: 431, number: 144, hm_symbol: "P 31", symbol: "P 31" },
    HallGroup { hall_number: 432, number: 145, hm_symbol: "P 32", symbol: "P 32" },
    HallGroup { hall_number: 433, number: 146, hm_symbol: "R 3 hexagonal axes", symbol: "R 3" },
    HallGroup { hall_number: 434, number: 146, hm_symbol: "R 3 Rhombohedral axes", symbol: "P 3*" },
    HallGroup { hall_number: 435, number: 147, hm_symbol: "P -3", symbol: "P -3" },
    HallGroup { hall_number: 436, number: 148, hm_symbol: "R-3 hexagonal axes", symbol: "-R 3" },
    HallGroup { hall_number: 437, number: 148, hm_symbol: "R -3 Rhombohedral axes", symbol: "-P 3*" },
    HallGroup { hall_number: 438, number: 149, hm_symbol: "P 3 1 2", symbol: "P 3 2" },
    HallGroup { hall_number: 439, number: 150, hm_symbol: "P 3 2 1", symbol: "P 3 2\"" },
    HallGroup { hall_number: 440, number: 151, hm_symbol: "P 31 1 2", symbol: "P 31 2 (0 0 4)" },
    HallGroup { hall_number: 441, number: 152, hm_symbol: "P 31 2 1", symbol: "P 31 2\"" },
    HallGroup { hall_number: 442, number: 153, hm_symbol: "P 32 1 2", symbol: "P 32 2 (0 0 2)" },
    HallGroup { hall_number: 443, number: 154, hm_symbol: "P 32 2 1", symbol: "P 32 2\"" },
    HallGroup { hall_number: 444, number: 155, hm_symbol: "R 3 2 Hexagonal axes", symbol: "R 3 2\"" },
    HallGroup { hall_number: 445, number: 155, hm_symbol: "R 3 2 Rhombohedral axes", symbol: "P 3* 2" },
    HallGroup { hall_number: 446, number: 156, hm_symbol: "P 3 m 1", symbol: "P 3 -2\"" },
    HallGroup { hall_number: 447, number: 157, hm_symbol: "P 3 1 m", symbol: "P 3 -2" },
    HallGroup { hall_number: 448, number: 158, hm_symbol: "P 3 c 1", symbol: "P 3 -2\"c" },
    HallGroup { hall_number: 449, number: 159, hm_symbol: "P 3 1 c", symbol: "P 3 -2c" },
    HallGroup { hall_number: 450, number: 160, hm_symbol: "R 3 m Hexagonal axes", symbol: "R 3 -2\"" },
    HallGroup { hall_number: 451, number: 160, hm_symbol: "R 3 m Rhombohedral axes", symbol: "P 3* -2" },
    HallGroup { hall_number: 452, number: 161, hm_symbol: "R 3 c Hexagonal axes", symbol: "R 3 -2\"c" },
    HallGroup { hall_number: 453, number: 161, hm_symbol: "R 3 c Rhombohedral axes", symbol: "P 3* -2n" },
    HallGroup { hall_number: 454, number: 162, hm_symbol: "P -3 1 m", symbol: "-P 3 2" },
    HallGroup { hall_number: 455, number: 163, hm_symbol: "P -3 1 c", symbol: "-P 3 2c" },
    HallGroup { hall_number: 456, number: 164, hm_symbol: "P -3 m 1", symbol: "-P 3 2\"" },
    HallGroup { hall_number: 457, number: 165, hm_symbol: "P -3 c 1", symbol: "-P 3 2\"c" },
    HallGroup { hall_number: 458, number: 166, hm_symbol: "R -3 m Hexagonal axes", symbol: "-R 3 2\"" },
    HallGroup { hall_number: 459, number: 166, hm_symbol: "R -3 m Rhombohedral axes", symbol: "-P 3* 2" },
    HallGroup { hall_number: 460, number: 167, hm_symbol: "R -3 c Hexagonal axes", symbol: "-R 3 2\"c" },
    HallGroup { hall_number: 461, number: 167, hm_symbol: "R -3 c Rhombohedral axes", symbol: "-P 3* 2n" },
    HallGroup { hall_number: 462, number: 168, hm_symbol: "P 6", symbol: "P 6" },
    HallGroup { hall_number: 463, number: 169, hm_symbol: "P 61", symbol: "P 61" },
    HallGroup { hall_number: 464, number: 170, hm_symbol: "P 65", symbol: "P 65" },
    HallGroup { hall_number: 465, number: 171, hm_symbol: "P 62", symbol: "P 62" },
    HallGroup { hall_number: 466, number: 172, hm_symbol: "P 64", symbol: "P 64" },
    HallGroup { hall_number: 467, number: 173, hm_symbol: "P 63", symbol: "P 6c" },
    HallGroup { hall_number: 468, number: 174, hm_symbol: "P -6", symbol: "P -6" },
    HallGroup { hall_number: 469, number: 175, hm_symbol: "P6/m", symbol: "-P 6" },
    HallGroup { hall_number: 470, number: 176, hm_symbol: "P 63/m", symbol: "-P 6c" },
    HallGroup { hall_number: 471, number: 177, hm_symbol: "P 6 2 2", symbol: "P 6 2" },
    HallGroup { hall_number: 472, number: 178, hm_symbol: "P 61 2 2", symbol: "P 61 2 (0 0 5)" },
    HallGroup { hall_number: 473, number: 179, hm_symbol: "P 65 2 2", symbol: "P 65 2 (0 0 1)" },
    HallGroup { hall_number: 474, number: 180, hm_symbol: "P 62 2 2", symbol: "P 62 2 (0 0 4)" },
    HallGroup { hall_number: 475, number: 181, hm_symbol: "P 64 2 2", symbol: "P 64 2 (0 0 2)" },
    HallGroup { hall_number: 476, number: 182, hm_symbol: "P 63 2 2", symbol: "P 6c 2c" },
    HallGroup { hall_number: 477, number: 183, hm_symbol: "P 6 m m", symbol: "P 6 -2" },
    HallGroup { hall_number: 478, number: 184, hm_symbol: "P 6 c c", symbol: "P 6 -2c" },
    HallGroup { hall_number: 479, number: 185, hm_symbol: "P 63 c m", symbol: "P 6c -2" },
    HallGroup { hall_number: 480, number: 186, hm_symbol: "P 63 m c", symbol: "P 6c -2c" },
    HallGroup { hall_number: 481, number: 187, hm_symbol: "P -6 m 2", symbol: "P -6 2" },
    HallGroup { hall_number: 482, number: 188, hm_symbol: "P -6 c 2", symbol: "P -6c 2" },
    HallGroup { hall_number: 483, number: 189, hm_symbol: "P -6 2 m", symbol: "P -6 -2" },
    HallGroup { hall_number: 484, number: 190, hm_symbol: "P -6 2 c", symbol: "P -6c -2c" },
    HallGroup { hall_number: 485, number: 191, hm_symbol: "P 6/m m m", symbol: "-P 6 2" },
    HallGroup { hall_number: 486, number: 192, hm_symbol: "P 6/m c c", symbol: "-P 6 2c" },
    HallGroup { hall_number: 487, number: 193, hm_symbol: "P 63/m c m", symbol: "-P 6c 2" },
    HallGroup { hall_number: 488, number: 194, hm_symbol: "P 63/m m c", symbol: "-P 6c 2c" },
    HallGroup { hall_number: 489, number: 195, hm_symbol: "P 2 3", symbol: "P 2 2 3" },
    HallGroup { hall_number: 490, number: 196, hm_symbol: "F 2 3", symbol: "F 2 2 3" },
    HallGroup { hall_number: 491, number: 197, hm_symbol: "I 2 3", symbol: "I 2 2 3" },
    HallGroup { hall_number: 492, number: 198, hm_symbol: "P 21 3", symbol: "P 2ac 2ab 3" },
    HallGroup { hall_number: 493, number: 199, hm_symbol: "I 21 3", symbol: "I 2b 2c 3" },
    HallGroup { hall_number: 494, number: 200, hm_symbol: "P m -3", symbol: "-P 2 2 3" },
    HallGroup { hall_number: 495, number: 201, hm_symbol: "P n -3 Origin choice 1", symbol: "P 2 2 3 -1n" },
    HallGroup { hall_number: 496, number: 201, hm_symbol: "P n -3 Origin choice 2", symbol: "-P 2ab 2bc 3" },
    HallGroup { hall_number: 497, number: 202, hm_symbol: "F m -3", symbol: "-F 2 2 3" },
    HallGroup { hall_number: 498, number: 203, hm_symbol: "F d -3 Origin choice 1", symbol: "F 2 2 3 -1d" },
    HallGroup { hall_number: 499, number: 203, hm_symbol: "F d -3 Origin choice 2", symbol: "-F 2uv 2vw 3" },
    HallGroup { hall_number: 500, number: 204, hm_symbol: "I m -3", symbol: "-I 2 2 3" },
    HallGroup { hall_number: 501, number: 205, hm_symbol: "P a -3", symbol: "-P 2ac 2ab 3" },
    HallGroup { hall_number: 502, number: 206, hm_symbol: "I a -3", symbol: "-I 2b 2c 3" },
    HallGroup { hall_number: 503, number: 207, hm_symbol: "P 4 3 2", symbol: "P 4 2 3" },
    HallGroup { hall_number: 504, number: 208, hm_symbol: "P 42 3 2", symbol: "P 4n 2 3" },
    HallGroup { hall_number: 505, number: 209, hm_symbol: "F 4 3 2", symbol: "F 4 2 3" },
    HallGroup { hall_number: 506, number: 210, hm_symbol: "F 41 3 2", symbol: "F 4d 2 3" },
    HallGroup { hall_number: 507, number: 211, hm_symbol: "I 4 3 2", symbol: "I 4 2 3" },
    HallGroup { hall_number: 508, number: 212, hm_symbol: "P 43 3 2", symbol: "P 4acd 2ab 3" },
    HallGroup { hall_number: 509, number: 213, hm_symbol: "P 41 3 2", symbol: "P 4bd 2ab 3" },
    HallGroup { hall_number: 510, number: 214, hm_symbol: "I 41 3 2", symbol: "I 4bd 2c 3" },
    HallGroup { hall_number: 511, number: 215, hm_symbol: "P -4 3 m", symbol: "P -4 2 3" },
    HallGroup { hall_number: 512, number: 216, hm_symbol: "F -4 3 m", symbol: "F -4 2 3" },
    HallGroup { hall_number: 513, number: 217, hm_symbol: "I -4 3 m", symbol: "I -4 2 3" },
    HallGroup { hall_number: 514, number: 218, hm_symbol: "P -4 3 n", symbol: "P -4n 2 3" },
    HallGroup { hall_number: 515, number: 219, hm_symbol: "F -4 3 c", symbol: "F -4a 2 3" },
    HallGroup { hall_number: 516, number: 220, hm_symbol: "I -4 3 d", symbol: "I -4bd 2c 3" },
    HallGroup { hall_number: 517, number: 221, hm_symbol: "P m -3 m", symbol: "-P 4 2 3" },
    HallGroup { hall_number: 518, number: 222, hm_symbol: "P n -3 n Origin choice 1", symbol: "P 4 2 3 -1n" },
    HallGroup { hall_number: 519, number: 222, hm_symbol: "P n -3 n Origin choice 2", symbol: "-P 4a 2bc 3" },
    HallGroup { hall_number: 520, number: 223, hm_symbol: "P m -3 n", symbol: "-P 4n 2 3" },
    HallGroup { hall_number: 521, number: 224, hm_symbol: "P n -3 m Origin choice 1", symbol: "P 4n 2 3 -1n" },
    HallGroup { hall_number: 522, number: 224, hm_symbol: "P n -3 m Origin choice 2", symbol: "-P 4bc 2bc 3" },
    HallGroup { hall_number: 523, number: 225, hm_symbol: "F m -3 m", symbol: "-F 4 2 3" },
    HallGroup { hall_number: 524, number: 226, hm_symbol: "F m -3 c", symbol: "-F 4a 2 3" },
    HallGroup { hall_number: 525, number: 227, hm_symbol: "F d -3 m Origin choice 1", symbol: "F 4d 2 3 -1d" },
    HallGroup { hall_number: 526, number: 227, hm_symbol: "F d -3 m Origin choice 2", symbol: "-F 4vw 2vw 3" },
    HallGroup { hall_number: 527, number: 228, hm_symbol: "F d -3 c Origin choice 1", symbol: "F 4d 2 3 -1ad" },
    HallGroup { hall_number: 528, number: 228, hm_symbol: "F d -3 c Origin choice 2", symbol: "-F 4ud 2vw 3" },
    HallGroup { hall_number: 529, number: 229, hm_symbol: "I m -3 m", symbol: "-I 4 2 3" },
    HallGroup { hall_number: 530, number: 230, hm_symbol: "I a -3 d", symbol: "-I 4bd 2c 3" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn preferred(space_group: usize) -> &'static HallGroup {
        let hall_number = hall_number_for_space_group(space_group).unwrap();
        HallGroup::get(hall_number).unwrap()
    }

    #[test]
    fn p1_has_a_single_operation() {
        let group = preferred(1);
        assert_eq!(group.symbol, "P 1");
        assert_eq!(group.operations().unwrap().len(), 1);
    }

    #[test]
    fn p_minus_1_is_centrosymmetric() {
        let group = preferred(2);
        let operations = group.operations().unwrap();
        assert_eq!(operations.len(), 2);
        assert!(operations.operations.contains(&FracOp::inversion()));
    }

    #[test]
    fn p21_c_has_four_operations() {
        let group = preferred(14);
        assert_eq!(group.operations().unwrap().len(), 4);
        assert_eq!(group.point_group().unwrap().symbol, "2/m");
    }

    #[test]
    fn sixfold_screw_carries_a_sixth_translation() {
        let group = preferred(169);
        assert_eq!(group.symbol, "P 61");
        let operations = group.operations().unwrap();
        assert_eq!(operations.len(), 6);
        let translations: Vec<&V3<i32>> = operations.operations.iter()
            .map(|op| op.trans.twelfths())
            .collect();
        assert!(translations.contains(&&V3([0, 0, 2])));
        assert!(translations.contains(&&V3([0, 0, 10])));
    }

    #[test]
    fn fm3m_expands_to_192_operations() {
        let group = preferred(225);
        assert_eq!(group.centering(), Centering::Face);
        assert_eq!(group.operations().unwrap().len(), 192);
        assert_eq!(group.point_group().unwrap().symbol, "m-3m");
    }

    #[test]
    fn origin_shifted_entries_parse() {
        // P 61 2 2 is stored as "P 61 2 (0 0 5)"
        let group = preferred(178);
        assert_eq!(group.operations().unwrap().len(), 12);
        assert_eq!(group.point_group().unwrap().symbol, "622");
    }

    #[test]
    fn preferred_setting_of_two_origin_groups_is_choice_two() {
        let group = preferred(227);
        assert!(group.hm_symbol.contains("choice 2"));
        let group = preferred(228);
        assert!(group.hm_symbol.contains("choice 1"));
    }

    #[test]
    fn rhombohedral_settings_triple_the_operation_count() {
        let group = preferred(166);
        assert_eq!(group.centering(), Centering::Rhombohedral);
        assert_eq!(group.operations().unwrap().len(), 36);
    }

    #[test]
    fn every_setting_parses_to_a_consistent_group() {
        for group in &HALL_GROUP_DATA {
            let operations = group.operations()
                .unwrap_or_else(|e| panic!("hall {}: {}", group.hall_number, e));
            let multiplicity = group.centering().multiplicity();
            assert_eq!(operations.len() % multiplicity, 0, "hall {}", group.hall_number);
            assert_eq!(
                operations.len() / multiplicity,
                operations.rotations().len(),
                "hall {}", group.hall_number,
            );
            group.point_group()
                .unwrap_or_else(|e| panic!("hall {}: {}", group.hall_number, e));
        }
    }

    #[test]
    fn every_space_group_has_a_preferred_setting() {
        for number in 1..=230 {
            let hall_number = hall_number_for_space_group(number).unwrap();
            assert_eq!(HallGroup::get(hall_number).unwrap().number, number);
        }
    }
}
