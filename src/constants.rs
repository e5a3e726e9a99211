use crate::cubie::Corner::{self, *};
use crate::cubie::Edge::{self, *};
use crate::facelet::Color;
use crate::moves::Move::{self, *};

pub const ALL_CORNERS: [Corner; 8] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];
pub const ALL_EDGES: [Edge; 12] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];
pub const ALL_COLORS: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];
pub const ALL_MOVES: [Move; 18] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

/// number of possible face moves
pub const N_MOVE: usize = 18;
/// 3^7 possible corner orientations in phase 1
pub const N_TWIST: usize = 2187;
/// 2^11 possible edge orientations in phase 1
pub const N_FLIP: usize = 2048;
/// 12*11*10*9 possible positions and permutations of the FR, FL, BL, BR edges
pub const N_FRTOBR: usize = 11880;
/// 8*7*6*5*4*3 possible positions and permutations of the URF..DLF corners
pub const N_URFTODLF: usize = 20160;
/// positions and permutations of the UR..DF edges, restricted to the phase 2 range
pub const N_URTODF: usize = 20160;
/// 12*11*10 possible positions and permutations of the UR, UF, UL edges
pub const N_URTOUL: usize = 1320;
/// 12*11*10 possible positions and permutations of the UB, DR, DF edges
pub const N_UBTODF: usize = 1320;
/// half-coordinate values whose three edges all sit outside the UD-slice;
/// the merge table covers exactly these
pub const N_MERGE: usize = 336;
/// Binomial(12,4) placements of the four UD-slice edges, ignoring their order
pub const N_SLICE1: usize = 495;
/// 4! permutations of the four UD-slice edges once they sit in their slice
pub const N_SLICE2: usize = 24;
/// parity of the corner (and edge) permutation
pub const N_PARITY: usize = 2;

/// The moves allowed in phase 2: U, D in all powers and R2, F2, L2, B2,
/// as indices into [`ALL_MOVES`].
pub const PHASE2_MOVES: [usize; 10] = [0, 1, 2, 4, 7, 9, 10, 11, 13, 16];
