use std::{fmt, str::FromStr};

use self::Move::*;
use crate::constants::*;
use crate::cubie::{Corner::*, CubieCube, Edge::*};
use crate::error::Error;

/// Layer moves, Up, Right, Front, Down, Left, Back.
///
/// $ clockwise, $2 double, $3 counter-clockwise.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(R),
            "R'" => Ok(R3),
            "R2" => Ok(R2),
            "L" => Ok(L),
            "L'" => Ok(L3),
            "L2" => Ok(L2),
            "U" => Ok(U),
            "U'" => Ok(U3),
            "U2" => Ok(U2),
            "D" => Ok(D),
            "D'" => Ok(D3),
            "D2" => Ok(D2),
            "F" => Ok(F),
            "F'" => Ok(F3),
            "F2" => Ok(F2),
            "B" => Ok(B),
            "B'" => Ok(B3),
            "B2" => Ok(B2),
            _ => Err(Error::InvalidScramble),
        }
    }
}

/// The basic six cube moves described by permutations and changes in orientation.
///
/// U_MOVE
pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// R_MOVE
pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR], //permutation of the corners
    co: [2, 0, 0, 1, 1, 0, 0, 2],                 //changes of the orientations of the corners
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR], //permutation of the edges
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],     //changes of the orientations of the edges
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// F_MOVE
pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// D_MOVE
pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// L_MOVE
pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// B_MOVE
pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// The six basic move cubes in face order U, R, F, D, L, B.
pub const BASIC_MOVE_CUBES: [CubieCube; 6] = [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE];

/// The cubie cube of an arbitrary move, the basic cube of its face raised to
/// the power of the move.
pub fn move_cube(m: Move) -> CubieCube {
    let basic = BASIC_MOVE_CUBES[m as usize / 3];
    match m as usize % 3 {
        0 => basic,
        1 => basic * basic,
        _ => basic * basic * basic,
    }
}

/// How the corner permutation parity changes with each of the 18 moves:
/// every quarter turn flips it, every half turn keeps it.
pub const PARITY_MOVE: [[usize; 18]; 2] = [
    [1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1],
    [0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0],
];

/// The move tables of the six cube coordinates, plus the merge lookup that
/// combines the two phase 1 half-coordinates at the phase boundary.
///
/// A table row holds the new coordinate after each of the 18 moves; tables
/// are laid out flat and indexed by `N_MOVE * coordinate + move`.
pub struct MoveTables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub fr_to_br_move: Vec<u16>,
    pub urf_to_dlf_move: Vec<u16>,
    pub ur_to_df_move: Vec<u16>,
    pub ur_to_ul_move: Vec<u16>,
    pub ub_to_df_move: Vec<u16>,
    pub merge_ur_to_df: Vec<i16>,
}

impl MoveTables {
    pub fn new() -> Self {
        Self {
            twist_move: move_twist(),
            flip_move: move_flip(),
            fr_to_br_move: move_fr_to_br(),
            urf_to_dlf_move: move_urf_to_dlf(),
            ur_to_df_move: move_ur_to_df(),
            ur_to_ul_move: move_ur_to_ul(),
            ub_to_df_move: move_ub_to_df(),
            merge_ur_to_df: merge_ur_to_df(),
        }
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Move table for the twists of the corners.
///
/// The twist coordinate describes the 3^7 = 2187 possible orientations of the 8 corners.
///
/// 0 <= twist < 2187 in phase 1, twist = 0 in phase 2.
pub fn move_twist() -> Vec<u16> {
    let mut a = CubieCube::default();
    let mut twist_move = vec![0; N_TWIST * N_MOVE];
    for i in 0..N_TWIST {
        a.set_twist(i as u16);
        for j in ALL_COLORS {
            // six faces U, R, F, D, L, B
            for k in 0..3 {
                // three moves for each face, for example U, U2, U3 = U'
                a.corner_multiply(BASIC_MOVE_CUBES[j as usize]);
                twist_move[N_MOVE * i + 3 * j as usize + k] = a.get_twist();
            }
            a.corner_multiply(BASIC_MOVE_CUBES[j as usize]); // 4. move restores face
        }
    }
    twist_move
}

/// Move table for the flip of the edges.
///
/// The flip coordinate describes the 2^11 = 2048 possible orientations of the 12 edges.
///
/// 0 <= flip < 2048 in phase 1, flip = 0 in phase 2.
pub fn move_flip() -> Vec<u16> {
    let mut a = CubieCube::default();
    let mut flip_move = vec![0; N_FLIP * N_MOVE];
    for i in 0..N_FLIP {
        a.set_flip(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
                flip_move[N_MOVE * i + 3 * j as usize + k] = a.get_flip();
            }
            a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
        }
    }
    flip_move
}

/// Move table for the four UD-slice edges FR, FL, BL and BR.
///
/// The fr_to_br coordinate describes the 12!/8! = 11880 possible positions and
/// permutations of these edges. The phase 1 slice coordinate is fr_to_br / 24;
/// carrying the full coordinate gives the permutation of the slice edges at
/// the beginning of phase 2 for free.
pub fn move_fr_to_br() -> Vec<u16> {
    let mut a = CubieCube::default();
    let mut fr_to_br_move = vec![0; N_FRTOBR * N_MOVE];
    for i in 0..N_FRTOBR {
        a.set_fr_to_br(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
                fr_to_br_move[N_MOVE * i + 3 * j as usize + k] = a.get_fr_to_br();
            }
            a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
        }
    }
    fr_to_br_move
}

/// Move table for the six corners URF, UFL, ULB, UBR, DFR and DLF.
///
/// 0 <= urf_to_dlf < 20160 in both phases, urf_to_dlf = 0 for a solved cube.
pub fn move_urf_to_dlf() -> Vec<u16> {
    let mut a = CubieCube::default();
    let mut urf_to_dlf_move = vec![0; N_URFTODLF * N_MOVE];
    for i in 0..N_URFTODLF {
        a.set_urf_to_dlf(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.corner_multiply(BASIC_MOVE_CUBES[j as usize]);
                urf_to_dlf_move[N_MOVE * i + 3 * j as usize + k] = a.get_urf_to_dlf();
            }
            a.corner_multiply(BASIC_MOVE_CUBES[j as usize]);
        }
    }
    urf_to_dlf_move
}

/// Move table for the six edges UR, UF, UL, UB, DR and DF.
///
/// The stored values are only valid for sources reachable by phase 2 moves;
/// for phase 1 states the true coordinate overflows the 16-bit entries and
/// gets truncated, so phase 1 code must not read this table.
pub fn move_ur_to_df() -> Vec<u16> {
    let mut a = CubieCube::default();
    let mut ur_to_df_move = vec![0; N_URTODF * N_MOVE];
    for i in 0..N_URTODF {
        a.set_ur_to_df(i as u32);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
                ur_to_df_move[N_MOVE * i + 3 * j as usize + k] = a.get_ur_to_df() as u16;
            }
            a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
        }
    }
    ur_to_df_move
}

/// Move table for the three edges UR, UF and UL.
///
/// Half-coordinate carried through phase 1 to set up ur_to_df at the phase
/// boundary.
pub fn move_ur_to_ul() -> Vec<u16> {
    let mut a = CubieCube::default();
    let mut ur_to_ul_move = vec![0; N_URTOUL * N_MOVE];
    for i in 0..N_URTOUL {
        a.set_ur_to_ul(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
                ur_to_ul_move[N_MOVE * i + 3 * j as usize + k] = a.get_ur_to_ul();
            }
            a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
        }
    }
    ur_to_ul_move
}

/// Move table for the three edges UB, DR and DF.
///
/// The other half-coordinate carried through phase 1.
pub fn move_ub_to_df() -> Vec<u16> {
    let mut a = CubieCube::default();
    let mut ub_to_df_move = vec![0; N_UBTODF * N_MOVE];
    for i in 0..N_UBTODF {
        a.set_ub_to_df(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
                ub_to_df_move[N_MOVE * i + 3 * j as usize + k] = a.get_ub_to_df();
            }
            a.edge_multiply(BASIC_MOVE_CUBES[j as usize]);
        }
    }
    ub_to_df_move
}

/// Merge table combining the ur_to_ul and ub_to_df half-coordinates into the
/// ur_to_df coordinate at the phase 1 -> phase 2 boundary.
///
/// Both inputs are below 336 there, because in the subgroup H the six edges
/// UR, UF, UL, UB, DR and DF all sit outside the UD-slice. Colliding pairs
/// hold -1.
pub fn merge_ur_to_df() -> Vec<i16> {
    let mut merge = vec![0; N_MERGE * N_MERGE];
    for ur_to_ul in 0..N_MERGE {
        for ub_to_df in 0..N_MERGE {
            merge[N_MERGE * ur_to_ul + ub_to_df] =
                CubieCube::ur_to_df_standalone(ur_to_ul as u16, ub_to_df as u16) as i16;
        }
    }
    merge
}

#[cfg(test)]
mod test {
    use crate::moves::*;

    #[test]
    fn test_move_parse() {
        assert_eq!("R'".parse::<Move>(), Ok(R3));
        assert_eq!("U2".parse::<Move>(), Ok(U2));
        assert_eq!(R3.to_string(), "R'");
        assert_eq!(F2.to_string(), "F2");
        assert!("X2".parse::<Move>().is_err());
    }

    #[test]
    fn test_move_twist() {
        let move_twist = move_twist();
        assert_eq!(move_twist.len(), 39366);
        // U leaves all corners oriented, R twists four of them
        assert_eq!(move_twist[0], 0);
        assert_eq!(move_twist[3], 1494);
    }

    #[test]
    fn test_move_flip() {
        let move_flip = move_flip();
        assert_eq!(move_flip.len(), 36864);
        // only F and B change edge orientations
        assert_eq!(move_flip[0], 0);
        assert_eq!(move_flip[3], 0);
        assert_eq!(move_flip[6], 550);
    }

    #[test]
    fn test_table_periodicity() {
        // four turns of the same face restore every coordinate
        let tables = [
            (move_twist(), N_TWIST),
            (move_flip(), N_FLIP),
            (move_fr_to_br(), N_FRTOBR),
            (move_urf_to_dlf(), N_URFTODLF),
            (move_ur_to_ul(), N_URTOUL),
            (move_ub_to_df(), N_UBTODF),
        ];
        for (table, size) in tables {
            for coord in 0..size {
                for face in 0..6 {
                    let mut c = coord;
                    for _ in 0..4 {
                        c = table[N_MOVE * c + 3 * face] as usize;
                    }
                    assert_eq!(c, coord);
                }
            }
        }
    }

    #[test]
    fn test_merge_table() {
        let merge = merge_ur_to_df();
        assert_eq!(merge.len(), 336 * 336);
        // the solved pair merges into the solved coordinate
        assert_eq!(merge[114], 0);
        // colliding placements are marked invalid
        assert_eq!(merge[0], -1);
        // every entry is either -1 or a phase 2 coordinate
        assert!(merge.iter().all(|&m| m >= -1 && (m as i32) < 20160));
    }
}
