use rand::random;
use std::fmt;
use std::ops::Mul;

use self::{Corner::*, Edge::*};
use crate::constants::*;
use crate::error::Error;
use crate::facelet::*;
use crate::moves::{self, Move};

/// Represents the 8 corners on the cube, described by the layer they are on.
///
/// Example: `ULB` (Up, Left, Back).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<u8> for Corner {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(URF),
            1 => Ok(UFL),
            2 => Ok(ULB),
            3 => Ok(UBR),
            4 => Ok(DFR),
            5 => Ok(DLF),
            6 => Ok(DBL),
            7 => Ok(DRB),
            _ => Err(Error::InvalidCorner),
        }
    }
}

/// Represents the 12 edges on the cube, described by the layer they are on.
///
/// Example: `BL` (Back, Left).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<u8> for Edge {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UR),
            1 => Ok(UF),
            2 => Ok(UL),
            3 => Ok(UB),
            4 => Ok(DR),
            5 => Ok(DF),
            6 => Ok(DL),
            7 => Ok(DB),
            8 => Ok(FR),
            9 => Ok(FL),
            10 => Ok(BL),
            11 => Ok(BR),
            _ => Err(Error::InvalidEdge),
        }
    }
}

/// Cube on the cubie level.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CubieCube {
    /// Corner permutation, relative to SOLVED_CUBIE_CUBE.
    pub cp: [Corner; 8],
    /// Corner orientation, 3 possible values: 0 (correctly oriented), 1 (twisted clockwise), 2 (twisted counter-clockwise).
    pub co: [u8; 8],
    /// Edge permutation, relative to SOLVED_CUBIE_CUBE.
    pub ep: [Edge; 12],
    /// Edge orientation, 2 possible values: 0 (correctly oriented), 1 (flipped).
    pub eo: [u8; 12],
}

/// Solved cube on the cubie level.
pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

impl Mul for CubieCube {
    type Output = Self;

    fn mul(self, rhs: CubieCube) -> Self::Output {
        let mut res = CubieCube::default();
        // (A * B).c = A(B(x).c).c
        // (A * B).o = A(B(x).c).o + B(x).o

        for i in 0..8 {
            res.cp[i] = self.cp[rhs.cp[i] as usize];
            res.co[i] = (self.co[rhs.cp[i] as usize] + rhs.co[i]) % 3;
        }

        for i in 0..12 {
            res.ep[i] = self.ep[rhs.ep[i] as usize];
            res.eo[i] = (self.eo[rhs.ep[i] as usize] + rhs.eo[i]) % 2;
        }
        res
    }
}

impl From<&Vec<Move>> for CubieCube {
    fn from(moves: &Vec<Move>) -> Self {
        CubieCube::default().apply_moves(moves)
    }
}

/// Gives cubie representation of a face cube (facelet).
impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;
    fn try_from(face_cube: &FaceCube) -> Result<Self, Self::Error> {
        let mut state = CubieCube::default();
        let mut ori: usize = 0;
        let mut col1;
        let mut col2;

        for i in 0..8 {
            let i = Corner::try_from(i)?;
            // get the colors of the cubie at corner i, starting with U/D
            for index in 0..3 {
                ori = index;
                if face_cube.f[CORNER_FACELET[i as usize][ori] as usize] == Color::U
                    || face_cube.f[CORNER_FACELET[i as usize][ori] as usize] == Color::D
                {
                    break;
                }
            }

            col1 = face_cube.f[CORNER_FACELET[i as usize][(ori + 1) % 3] as usize];
            col2 = face_cube.f[CORNER_FACELET[i as usize][(ori + 2) % 3] as usize];

            for j in 0..8 {
                let j = Corner::try_from(j)?;
                if col1 == CORNER_COLOR[j as usize][1] && col2 == CORNER_COLOR[j as usize][2] {
                    // in corner position i we have corner cubie j
                    state.cp[i as usize] = j;
                    state.co[i as usize] = ori as u8 % 3;
                    break;
                }
            }
        }

        for i in 0..12 {
            let i = Edge::try_from(i)?;
            for j in 0..12 {
                let j = Edge::try_from(j)?;
                if face_cube.f[EDGE_FACELET[i as usize][0] as usize] == EDGE_COLOR[j as usize][0]
                    && face_cube.f[EDGE_FACELET[i as usize][1] as usize]
                        == EDGE_COLOR[j as usize][1]
                {
                    state.ep[i as usize] = j;
                    state.eo[i as usize] = 0;
                    break;
                }
                if face_cube.f[EDGE_FACELET[i as usize][0] as usize] == EDGE_COLOR[j as usize][1]
                    && face_cube.f[EDGE_FACELET[i as usize][1] as usize]
                        == EDGE_COLOR[j as usize][0]
                {
                    state.ep[i as usize] = j;
                    state.eo[i as usize] = 1;
                    break;
                }
            }
        }

        Ok(state)
    }
}

impl CubieCube {
    /// Builds a CubieCube from raw permutation and orientation arrays.
    pub fn new(cp: [Corner; 8], co: [u8; 8], ep: [Edge; 12], eo: [u8; 12]) -> Self {
        Self { cp, co, ep, eo }
    }

    /// Applies a move to the current state.
    pub fn apply_move(self, m: Move) -> Self {
        self * moves::move_cube(m)
    }

    /// Applies the sequence of moves to the current state.
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        moves.iter().fold(*self, |acc, &m| acc.apply_move(m))
    }

    /// Multiply this cubie cube with another cubie cube b, restricted to the corners.
    ///
    /// The orientation arithmetic stays total over the extended set {0..5}:
    /// values 3..5 describe mirrored states, which never occur for cubes
    /// reachable by face turns but are legal operands of the group operation.
    pub fn corner_multiply(&mut self, b: CubieCube) {
        let mut c_perm = [URF; 8];
        let mut c_ori = [0; 8];
        let mut ori = 0;
        for c in 0..8 {
            c_perm[c] = self.cp[b.cp[c] as usize];
            let ori_a = self.co[b.cp[c] as usize];
            let ori_b = b.co[c];
            if ori_a < 3 && ori_b < 3 {
                // two regular cubes
                ori = ori_a + ori_b;
                if ori >= 3 {
                    ori -= 3;
                }
            } else if ori_a < 3 && 3 <= ori_b {
                // cube b is in a mirrored state
                ori = ori_a + ori_b;
                if ori >= 6 {
                    ori -= 3; // the composition also is in a mirrored state
                }
            } else if ori_a >= 3 && 3 > ori_b {
                // cube a is in a mirrored state
                ori = ori_a - ori_b;
                if ori < 3 {
                    ori += 3; // the composition is a mirrored cube
                }
            } else if ori_a >= 3 && ori_b >= 3 {
                // both cubes are in mirrored states
                if ori_a >= ori_b {
                    ori = ori_a - ori_b;
                } else {
                    ori = ori_b - ori_a;
                    ori = 3 - ori; // the composition is a regular cube
                }
            }
            c_ori[c] = ori;
        }
        for c in 0..8 {
            self.cp[c] = c_perm[c];
            self.co[c] = c_ori[c];
        }
    }

    /// Multiply this cubie cube with another cubie cube b, restricted to the edges.
    pub fn edge_multiply(&mut self, b: CubieCube) {
        let mut e_perm = [UR; 12];
        let mut e_ori = [0; 12];
        for e in 0..12 {
            e_perm[e] = self.ep[b.ep[e] as usize];
            e_ori[e] = (b.eo[e] + self.eo[b.ep[e] as usize]) % 2;
        }
        for e in 0..12 {
            self.ep[e] = e_perm[e];
            self.eo[e] = e_ori[e];
        }
    }

    /// Multiply this cubie cube with another cubie cube b.
    pub fn multiply(&mut self, b: CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    /// Return the inverse of this cubie cube.
    pub fn inverse_cubie_cube(&self) -> Self {
        let mut d = CubieCube::default();
        for e in 0..12 {
            d.ep[self.ep[e] as usize] = ALL_EDGES[e];
        }
        for e in 0..12 {
            d.eo[e] = self.eo[d.ep[e] as usize];
        }

        for c in 0..8 {
            d.cp[self.cp[c] as usize] = ALL_CORNERS[c];
        }
        for c in 0..8 {
            let ori = self.co[d.cp[c] as usize];
            if ori >= 3 {
                // mirrored state stays as it is
                d.co[c] = ori;
            } else {
                d.co[c] = 3 - ori;
                if d.co[c] == 3 {
                    d.co[c] = 0;
                }
            }
        }
        d
    }

    /// Give the parity of the corner permutation.
    pub fn corner_parity(&self) -> u8 {
        let mut s = 0;
        for i in (1..8).rev() {
            for j in 0..i {
                if self.cp[j] > self.cp[i] {
                    s += 1;
                }
            }
        }
        s % 2
    }

    /// Give the parity of the edge permutation. A solvable cube has the same corner and edge parity.
    pub fn edge_parity(&self) -> u8 {
        let mut s = 0;
        for i in (1..12).rev() {
            for j in 0..i {
                if self.ep[j] > self.ep[i] {
                    s += 1;
                }
            }
        }
        s % 2
    }

    /// Get the twist of the 8 corners. 0 <= twist < 2187 in phase 1, twist = 0 in phase 2.
    pub fn get_twist(&self) -> u16 {
        let mut twist = 0;
        for i in 0..7 {
            twist = 3 * twist + self.co[i] as u16;
        }
        twist
    }

    /// Set the twist of the 8 corners.
    ///
    /// The orientation of the last corner is fixed by the others, so that the
    /// orientation sum stays 0 modulo 3.
    pub fn set_twist(&mut self, twist: u16) {
        let mut twistparity = 0;
        let mut twist = twist;
        for i in (0..7).rev() {
            self.co[i] = (twist % 3) as u8;
            twistparity += self.co[i];
            twist /= 3;
        }
        self.co[DRB as usize] = (3 - twistparity % 3) % 3;
    }

    /// Get the flip of the 12 edges. 0 <= flip < 2048 in phase 1, flip = 0 in phase 2.
    pub fn get_flip(&self) -> u16 {
        let mut flip = 0;
        for i in 0..11 {
            flip = 2 * flip + self.eo[i] as u16;
        }
        flip
    }

    /// Set the flip of the 12 edges.
    ///
    /// The orientation of the last edge is fixed by the others, so that the
    /// orientation sum stays even.
    pub fn set_flip(&mut self, flip: u16) {
        let mut flipparity = 0;
        let mut flip = flip;
        for i in (0..11).rev() {
            self.eo[i] = (flip % 2) as u8;
            flipparity += self.eo[i];
            flip /= 2;
        }
        self.eo[BR as usize] = (2 - flipparity % 2) % 2;
    }

    /// Get the location and permutation of the UD-slice edges FR, FL, BL and BR.
    ///
    /// The coordinate is placement * 24 + permutation; the placement part
    /// divided out gives the phase 1 slice coordinate.
    ///
    /// 0 <= fr_to_br < 11880 in phase 1, 0 <= fr_to_br < 24 in phase 2.
    pub fn get_fr_to_br(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        let mut edge4 = [FR; 4];
        // compute the index a < (12 choose 4) and the permutation array
        for j in (0..12).rev() {
            if FR <= self.ep[j] && self.ep[j] <= BR {
                a += c_nk(11 - j, x + 1);
                edge4[3 - x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..4).rev() {
            // compute the index b < 4! for the permutation in edge4
            let mut k = 0;
            while edge4[j] as usize != j + 8 {
                rotate_left(&mut edge4, 0, j);
                k += 1;
            }
            b = (j + 1) * b + k;
        }
        (24 * a + b) as u16
    }

    /// Set the location and permutation of the UD-slice edges FR, FL, BL and BR.
    pub fn set_fr_to_br(&mut self, idx: u16) {
        let mut slice_edge = [FR, FL, BL, BR];
        let other_edge = [UR, UF, UL, UB, DR, DF, DL, DB];
        let mut b = (idx % 24) as usize; // Permutation
        let mut a = (idx / 24) as i32; // Combination
        self.ep = [DB; 12]; // invalidate all edge positions

        for j in 1..4 {
            // generate permutation from index b
            let mut k = b % (j + 1);
            b /= j + 1;
            while k > 0 {
                rotate_right(&mut slice_edge, 0, j);
                k -= 1;
            }
        }

        let mut x: i32 = 3; // generate combination and set slice edges
        for j in 0..12 {
            if a - c_nk(11 - j, (x + 1) as usize) as i32 >= 0 {
                self.ep[j] = slice_edge[(3 - x) as usize];
                a -= c_nk(11 - j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
        let mut x = 0; // set the remaining edges UR..DB
        for j in 0..12 {
            if self.ep[j] == DB {
                self.ep[j] = other_edge[x];
                x += 1;
            }
        }
    }

    /// Get the location and permutation of the six corners URF, UFL, ULB, UBR, DFR and DLF.
    ///
    /// 0 <= urf_to_dlf < 20160 in phase 1 and phase 2, urf_to_dlf = 0 for a solved cube.
    pub fn get_urf_to_dlf(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        let mut corner6 = [URF; 6];
        // compute the index a < (8 choose 6) and the corner permutation
        for j in 0..8 {
            if self.cp[j] <= DLF {
                a += c_nk(j, x + 1);
                corner6[x] = self.cp[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..6).rev() {
            // compute the index b < 6! for the permutation in corner6
            let mut k = 0;
            while corner6[j] as usize != j {
                rotate_left(&mut corner6, 0, j);
                k += 1;
            }
            b = (j + 1) * b + k;
        }
        (720 * a + b) as u16
    }

    /// Set the location and permutation of the six corners URF, UFL, ULB, UBR, DFR and DLF.
    pub fn set_urf_to_dlf(&mut self, idx: u16) {
        let mut corner6 = [URF, UFL, ULB, UBR, DFR, DLF];
        let other_corner = [DBL, DRB];
        let mut b = (idx % 720) as usize; // Permutation
        let mut a = (idx / 720) as i32; // Combination
        self.cp = [DRB; 8]; // invalidate all corner positions

        for j in 1..6 {
            // generate permutation from index b
            let mut k = b % (j + 1);
            b /= j + 1;
            while k > 0 {
                rotate_right(&mut corner6, 0, j);
                k -= 1;
            }
        }
        let mut x: i32 = 5; // generate combination and set corners
        for j in (0..8).rev() {
            if a - c_nk(j, (x + 1) as usize) as i32 >= 0 {
                self.cp[j] = corner6[x as usize];
                a -= c_nk(j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
        let mut x = 0; // set the remaining corners DBL and DRB
        for j in 0..8 {
            if self.cp[j] == DRB {
                self.cp[j] = other_corner[x];
                x += 1;
            }
        }
    }

    /// Get the location and permutation of the six edges UR, UF, UL, UB, DR and DF.
    ///
    /// The value exceeds 16 bits in phase 1; in phase 2 these edges stay in
    /// their own six positions and the coordinate is below 20160.
    pub fn get_ur_to_df(&self) -> u32 {
        let mut a = 0;
        let mut x = 0;
        let mut edge6 = [UR; 6];
        // compute the index a < (12 choose 6) and the edge permutation
        for j in 0..12 {
            if self.ep[j] <= DF {
                a += c_nk(j, x + 1);
                edge6[x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..6).rev() {
            // compute the index b < 6! for the permutation in edge6
            let mut k = 0;
            while edge6[j] as usize != j {
                rotate_left(&mut edge6, 0, j);
                k += 1;
            }
            b = (j + 1) * b + k;
        }
        (720 * a + b) as u32
    }

    /// Set the location and permutation of the six edges UR, UF, UL, UB, DR and DF.
    pub fn set_ur_to_df(&mut self, idx: u32) {
        let mut edge6 = [UR, UF, UL, UB, DR, DF];
        let other_edge = [DL, DB, FR, FL, BL, BR];
        let mut b = (idx % 720) as usize; // Permutation
        let mut a = (idx / 720) as i32; // Combination
        self.ep = [BR; 12]; // invalidate all edge positions

        for j in 1..6 {
            // generate permutation from index b
            let mut k = b % (j + 1);
            b /= j + 1;
            while k > 0 {
                rotate_right(&mut edge6, 0, j);
                k -= 1;
            }
        }
        let mut x: i32 = 5; // generate combination and set edges
        for j in (0..12).rev() {
            if a - c_nk(j, (x + 1) as usize) as i32 >= 0 {
                self.ep[j] = edge6[x as usize];
                a -= c_nk(j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
        let mut x = 0; // set the remaining edges DL..BR
        for j in 0..12 {
            if self.ep[j] == BR {
                self.ep[j] = other_edge[x];
                x += 1;
            }
        }
    }

    /// Get the location and permutation of the three edges UR, UF and UL.
    ///
    /// One of the two phase 1 half-coordinates that merge into ur_to_df at
    /// the phase boundary.
    pub fn get_ur_to_ul(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        let mut edge3 = [UR; 3];
        // compute the index a < (12 choose 3) and the edge permutation
        for j in 0..12 {
            if self.ep[j] <= UL {
                a += c_nk(j, x + 1);
                edge3[x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..3).rev() {
            // compute the index b < 3! for the permutation in edge3
            let mut k = 0;
            while edge3[j] as usize != j {
                rotate_left(&mut edge3, 0, j);
                k += 1;
            }
            b = (j + 1) * b + k;
        }
        (6 * a + b) as u16
    }

    /// Set the location and permutation of the three edges UR, UF and UL.
    ///
    /// The remaining positions keep the BR marker; the result is not a legal
    /// cube and is only fed to `edge_multiply` during table generation.
    pub fn set_ur_to_ul(&mut self, idx: u16) {
        let mut edge3 = [UR, UF, UL];
        let mut b = (idx % 6) as usize; // Permutation
        let mut a = (idx / 6) as i32; // Combination
        self.ep = [BR; 12]; // invalidate all edge positions

        for j in 1..3 {
            // generate permutation from index b
            let mut k = b % (j + 1);
            b /= j + 1;
            while k > 0 {
                rotate_right(&mut edge3, 0, j);
                k -= 1;
            }
        }
        let mut x: i32 = 2; // generate combination and set edges
        for j in (0..12).rev() {
            if a - c_nk(j, (x + 1) as usize) as i32 >= 0 {
                self.ep[j] = edge3[x as usize];
                a -= c_nk(j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
    }

    /// Get the location and permutation of the three edges UB, DR and DF.
    ///
    /// The other phase 1 half-coordinate merging into ur_to_df.
    pub fn get_ub_to_df(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        let mut edge3 = [UB; 3];
        // compute the index a < (12 choose 3) and the edge permutation
        for j in 0..12 {
            if UB <= self.ep[j] && self.ep[j] <= DF {
                a += c_nk(j, x + 1);
                edge3[x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0;
        for j in (1..3).rev() {
            // compute the index b < 3! for the permutation in edge3
            let mut k = 0;
            while edge3[j] as usize != UB as usize + j {
                rotate_left(&mut edge3, 0, j);
                k += 1;
            }
            b = (j + 1) * b + k;
        }
        (6 * a + b) as u16
    }

    /// Set the location and permutation of the three edges UB, DR and DF.
    pub fn set_ub_to_df(&mut self, idx: u16) {
        let mut edge3 = [UB, DR, DF];
        let mut b = (idx % 6) as usize; // Permutation
        let mut a = (idx / 6) as i32; // Combination
        self.ep = [BR; 12]; // invalidate all edge positions

        for j in 1..3 {
            // generate permutation from index b
            let mut k = b % (j + 1);
            b /= j + 1;
            while k > 0 {
                rotate_right(&mut edge3, 0, j);
                k -= 1;
            }
        }
        let mut x: i32 = 2; // generate combination and set edges
        for j in (0..12).rev() {
            if a - c_nk(j, (x + 1) as usize) as i32 >= 0 {
                self.ep[j] = edge3[x as usize];
                a -= c_nk(j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
    }

    /// Combine the two half-coordinates into the ur_to_df coordinate.
    ///
    /// Returns -1 when the placements collide, which happens unless all six
    /// edges sit outside the UD-slice.
    pub fn ur_to_df_standalone(idx1: u16, idx2: u16) -> i32 {
        let mut a = CubieCube::default();
        let mut b = CubieCube::default();
        a.set_ur_to_ul(idx1);
        b.set_ub_to_df(idx2);
        for i in 0..8 {
            if a.ep[i] != BR {
                if b.ep[i] != BR {
                    return -1; // collision
                }
                b.ep[i] = a.ep[i];
            }
        }
        b.get_ur_to_df() as i32
    }

    /// Generate a random cube. The probability is the same for all possible states.
    pub fn randomize(&mut self) {
        // the permutation of the 12 edges, 0 <= idx < 12!
        let mut idx = random::<u64>() as usize % 479001600;
        self.ep = ALL_EDGES;
        for j in 0..12 {
            let mut k = idx % (j + 1);
            idx /= j + 1;
            while k > 0 {
                rotate_right(&mut self.ep, 0, j);
                k -= 1;
            }
        }
        let p = self.edge_parity();
        loop {
            // the parities of the edge and corner permutations must agree
            let mut idx = random::<u32>() as usize % 40320;
            self.cp = ALL_CORNERS;
            for j in 0..8 {
                let mut k = idx % (j + 1);
                idx /= j + 1;
                while k > 0 {
                    rotate_right(&mut self.cp, 0, j);
                    k -= 1;
                }
            }
            if p == self.corner_parity() {
                break;
            }
        }
        self.set_flip(random::<u16>() % 2048);
        self.set_twist(random::<u16>() % 2187);
    }

    /// Check if this cubie cube describes a reachable state.
    pub fn verify(&self) -> Result<(), Error> {
        let mut edge_count = [0; 12];
        for e in self.ep {
            edge_count[e as usize] += 1;
        }
        if edge_count.iter().any(|&c| c != 1) {
            return Err(Error::MissingEdge);
        }
        if self.eo.iter().map(|&o| o as u32).sum::<u32>() % 2 != 0 {
            return Err(Error::FlipParity);
        }

        let mut corner_count = [0; 8];
        for c in self.cp {
            corner_count[c as usize] += 1;
        }
        if corner_count.iter().any(|&c| c != 1) {
            return Err(Error::MissingCorner);
        }
        if self.co.iter().map(|&o| o as u32).sum::<u32>() % 3 != 0 {
            return Err(Error::TwistParity);
        }

        if self.edge_parity() != self.corner_parity() {
            return Err(Error::PermutationParity);
        }
        Ok(())
    }
}

/// Rotate array arr right between left and right. right is included.
pub fn rotate_right<T: Copy>(arr: &mut [T], left: usize, right: usize) {
    let temp = arr[right];
    for i in (left + 1..=right).rev() {
        arr[i] = arr[i - 1];
    }
    arr[left] = temp;
}

/// Rotate array arr left between left and right. right is included.
pub fn rotate_left<T: Copy>(arr: &mut [T], left: usize, right: usize) {
    let temp = arr[left];
    for i in left..right {
        arr[i] = arr[i + 1];
    }
    arr[right] = temp;
}

/// Binomial coefficient [n choose k].
pub fn c_nk(n: usize, k: usize) -> usize {
    let mut k = k;
    if n < k {
        return 0;
    }
    if k > n / 2 {
        k = n - k;
    }
    let mut s = 1;
    let mut i = n;
    let mut j = 1;
    while i != n - k {
        s *= i;
        s /= j;
        i -= 1;
        j += 1;
    }
    s
}

#[cfg(test)]
mod tests {
    use crate::cubie::*;
    use crate::moves::Move::*;

    #[test]
    fn test_mult() {
        let state = CubieCube::default().apply_move(R);
        assert_eq!(state, moves::R_MOVE);

        let r2_state = CubieCube::default().apply_move(R).apply_move(R);
        assert_eq!(r2_state, moves::R_MOVE * moves::R_MOVE);

        let fr_state = CubieCube {
            cp: [URF, DLF, ULB, UFL, DRB, DFR, DBL, UBR],
            co: [1, 2, 0, 2, 1, 1, 0, 2],
            ep: [UF, FL, UL, UB, BR, FR, DL, DB, DR, DF, BL, UR],
            eo: [1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0],
        };
        assert_eq!(moves::F_MOVE * moves::R_MOVE, fr_state);
    }

    #[test]
    fn test_move_sequence() {
        // (R U R' U') * 6 is the identity maneuver
        let moves = vec![
            R, U, R3, U3, R, U, R3, U3, R, U, R3, U3, R, U, R3, U3, R, U, R3, U3, R, U, R3, U3,
        ];
        let state = CubieCube::default().apply_moves(&moves);

        assert_eq!(state, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_inverse() {
        let state = CubieCube {
            cp: [DLF, ULB, DBL, DRB, UBR, UFL, DFR, URF],
            co: [2, 1, 2, 1, 2, 2, 0, 2],
            ep: [BR, BL, UB, UR, DR, FR, FL, UF, DF, DL, DB, UL],
            eo: [1, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 1],
        };
        let ic = state.inverse_cubie_cube();
        let d = CubieCube {
            cp: [DRB, DLF, UFL, DFR, DBL, URF, ULB, UBR],
            co: [1, 1, 2, 1, 0, 1, 1, 2],
            ep: [UB, DB, BR, UL, DR, FR, FL, BL, DF, DL, UF, UR],
            eo: [0, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1],
        };
        assert_eq!(ic, d);
        let d2 = ic.inverse_cubie_cube();
        assert_eq!(state, d2);

        let mut product = state;
        product.multiply(ic);
        assert_eq!(product, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_parity() {
        let state = CubieCube::default();
        assert_eq!(state.corner_parity(), 0);
        assert_eq!(state.edge_parity(), 0);

        // a single quarter turn flips both parities
        let state = state.apply_move(R);
        assert_eq!(state.corner_parity(), 1);
        assert_eq!(state.edge_parity(), 1);

        let state = CubieCube::from(&vec![R, U, R3, U3]);
        assert_eq!(state.corner_parity(), 0);
        assert_eq!(state.edge_parity(), 0);
    }

    #[test]
    fn test_scramble_state() {
        // U F' D' F2 D B2 D' R2 U' F2 R2 D2 R2 U' L B L R F' D B'
        let scramble = vec![
            U, F3, D3, F2, D, B2, D3, R2, U3, F2, R2, D2, R2, U3, L, B, L, R, F3, D, B3,
        ];
        let state = CubieCube::default().apply_moves(&scramble);

        let expected = CubieCube {
            cp: [DFR, UBR, DLF, ULB, DRB, UFL, URF, DBL],
            co: [2, 0, 1, 2, 0, 0, 2, 2],
            ep: [DF, UB, FL, BL, BR, UL, DR, FR, DL, DB, UF, UR],
            eo: [1, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1],
        };

        assert_eq!(state, expected);
    }

    #[test]
    fn test_orientation_invariants() {
        // every state reachable by face turns keeps the orientation sums and
        // matching permutation parities
        let mut cc = CubieCube::default();
        for m in [R, U2, F3, L, D, B2, R3, U, F2, D3] {
            cc = cc.apply_move(m);
            assert_eq!(cc.co.iter().map(|&o| o as u32).sum::<u32>() % 3, 0);
            assert_eq!(cc.eo.iter().map(|&o| o as u32).sum::<u32>() % 2, 0);
            assert_eq!(cc.corner_parity(), cc.edge_parity());
            cc.verify().unwrap();
        }
    }

    #[test]
    fn test_solved_coordinates() {
        let cc = CubieCube::default();
        assert_eq!(cc.get_twist(), 0);
        assert_eq!(cc.get_flip(), 0);
        assert_eq!(cc.get_fr_to_br(), 0);
        assert_eq!(cc.get_urf_to_dlf(), 0);
        assert_eq!(cc.get_ur_to_df(), 0);
        assert_eq!(cc.get_ur_to_ul(), 0);
        // the UB, DR, DF edges of a solved cube occupy positions 3, 4 and 5
        assert_eq!(cc.get_ub_to_df(), 114);
        assert_eq!(cc.corner_parity(), 0);
    }

    #[test]
    fn test_coordinate_roundtrip() {
        let mut cc = CubieCube::default();
        for twist in 0..2187 {
            cc.set_twist(twist);
            assert_eq!(cc.get_twist(), twist);
        }
        for flip in 0..2048 {
            cc.set_flip(flip);
            assert_eq!(cc.get_flip(), flip);
        }
        for idx in 0..11880 {
            cc.set_fr_to_br(idx);
            assert_eq!(cc.get_fr_to_br(), idx);
        }
        for idx in 0..20160 {
            cc.set_urf_to_dlf(idx);
            assert_eq!(cc.get_urf_to_dlf(), idx);
        }
        for idx in 0..20160 {
            cc.set_ur_to_df(idx);
            assert_eq!(cc.get_ur_to_df(), idx);
        }
        for idx in 0..1320 {
            cc.set_ur_to_ul(idx);
            assert_eq!(cc.get_ur_to_ul(), idx);
        }
        for idx in 0..1320 {
            cc.set_ub_to_df(idx);
            assert_eq!(cc.get_ub_to_df(), idx);
        }
    }

    #[test]
    fn test_standalone_merge() {
        // solved half-coordinates merge into the solved ur_to_df
        assert_eq!(CubieCube::ur_to_df_standalone(0, 114), 0);
        // both placements claim position UL, which cannot merge
        assert_eq!(CubieCube::ur_to_df_standalone(0, 0), -1);
    }

    #[test]
    fn test_verify() {
        let mut cc = CubieCube::default();
        assert_eq!(cc.verify(), Ok(()));

        cc.co[0] = 1;
        assert_eq!(cc.verify(), Err(Error::TwistParity));

        let mut cc = CubieCube::default();
        cc.eo[3] = 1;
        assert_eq!(cc.verify(), Err(Error::FlipParity));

        let mut cc = CubieCube::default();
        cc.ep.swap(0, 1);
        assert_eq!(cc.verify(), Err(Error::PermutationParity));

        let mut cc = CubieCube::default();
        cc.ep[0] = UF;
        assert_eq!(cc.verify(), Err(Error::MissingEdge));

        let mut cc = CubieCube::default();
        cc.cp[0] = UFL;
        assert_eq!(cc.verify(), Err(Error::MissingCorner));
    }

    #[test]
    fn test_randomize() {
        let mut cc = CubieCube::default();
        cc.randomize();
        cc.verify().unwrap();
    }
}
