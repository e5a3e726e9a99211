use std::cmp::{max, min};
use std::time::Instant;

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::facelet::FaceCube;
use crate::moves::{MoveTables, PARITY_MOVE};
use crate::pruning::{get_pruning, PruningTables};

/// The move tables and pruning tables shared by every solve call.
///
/// Construction happens once per process behind the lazy initializer below;
/// afterwards the tables are read-only.
pub struct SolverTables {
    pub mv: MoveTables,
    pub pr: PruningTables,
}

impl SolverTables {
    fn new() -> Self {
        let mv = MoveTables::new();
        let pr = PruningTables::new(&mv);
        Self { mv, pr }
    }
}

lazy_static! {
    static ref TABLES: SolverTables = SolverTables::new();
}

/// Build the move and pruning tables.
///
/// Optional: the first solve triggers the same one-time construction. Calling
/// this more than once is safe, later calls are no-ops.
pub fn setup() {
    lazy_static::initialize(&TABLES);
}

/// Scratch state of one two-phase search.
///
/// The arrays are indexed by ply: `ax[n]`/`po[n]` describe the move applied at
/// ply n, the coordinate arrays hold the state after the first n moves, and
/// the min_dist arrays the heuristic bounds on the remaining depth. A total
/// of 31 plies covers both phase budgets with room to spare.
struct Search<'a> {
    tables: &'a SolverTables,
    start: Instant,
    timeout: f32,
    max_depth: usize,
    depth_phase1: usize,
    ax: [usize; 31],
    po: [usize; 31],
    flip: [usize; 31],
    twist: [usize; 31],
    slice: [usize; 31],
    parity: [usize; 31],
    urf_to_dlf: [usize; 31],
    fr_to_br: [usize; 31],
    ur_to_ul: [usize; 31],
    ub_to_df: [usize; 31],
    ur_to_df: [usize; 31],
    min_dist_phase1: [usize; 31],
    min_dist_phase2: [usize; 31],
}

impl<'a> Search<'a> {
    fn new(cc: &CubieCube, tables: &'a SolverTables, max_depth: usize, timeout: f32) -> Self {
        let mut s = Self {
            tables,
            start: Instant::now(),
            timeout,
            max_depth,
            depth_phase1: 0,
            ax: [0; 31],
            po: [0; 31],
            flip: [0; 31],
            twist: [0; 31],
            slice: [0; 31],
            parity: [0; 31],
            urf_to_dlf: [0; 31],
            fr_to_br: [0; 31],
            ur_to_ul: [0; 31],
            ub_to_df: [0; 31],
            ur_to_df: [0; 31],
            min_dist_phase1: [0; 31],
            min_dist_phase2: [0; 31],
        };
        s.flip[0] = cc.get_flip() as usize;
        s.twist[0] = cc.get_twist() as usize;
        s.fr_to_br[0] = cc.get_fr_to_br() as usize;
        s.slice[0] = s.fr_to_br[0] / N_SLICE2;
        s.parity[0] = cc.corner_parity() as usize;
        s.urf_to_dlf[0] = cc.get_urf_to_dlf() as usize;
        s.ur_to_ul[0] = cc.get_ur_to_ul() as usize;
        s.ub_to_df[0] = cc.get_ub_to_df() as usize;
        s
    }

    /// Iterative deepening over the phase 1 depth. Returns the length of the
    /// first complete solution.
    fn run(&mut self) -> Result<usize, Error> {
        let pr = &self.tables.pr;
        self.min_dist_phase1[0] = max(
            get_pruning(
                &pr.slice_twist_prun,
                N_SLICE1 * self.twist[0] + self.slice[0],
            ),
            get_pruning(&pr.slice_flip_prun, N_SLICE1 * self.flip[0] + self.slice[0]),
        ) as usize;

        for depth_phase1 in max(1, self.min_dist_phase1[0])..=self.max_depth {
            self.depth_phase1 = depth_phase1;
            if let Some(total) = self.phase1(0, depth_phase1)? {
                return Ok(total);
            }
        }
        Err(Error::NoSolutionForMaxDepth)
    }

    /// Expand one phase 1 node at ply `n` with `togo` moves left in the
    /// current bound.
    fn phase1(&mut self, n: usize, togo: usize) -> Result<Option<usize>, Error> {
        if self.start.elapsed().as_secs_f32() > self.timeout {
            return Err(Error::Timeout);
        }
        for axis in 0..6 {
            // successive moves on the same face collapse into one; opposite
            // faces commute, so only the ordered pair is expanded
            if n > 0 && (self.ax[n - 1] == axis || self.ax[n - 1] == axis + 3) {
                continue;
            }
            for power in 1..=3 {
                let mv = 3 * axis + power - 1;
                self.ax[n] = axis;
                self.po[n] = power;

                let t = self.tables;
                self.flip[n + 1] = t.mv.flip_move[N_MOVE * self.flip[n] + mv] as usize;
                self.twist[n + 1] = t.mv.twist_move[N_MOVE * self.twist[n] + mv] as usize;
                self.slice[n + 1] =
                    t.mv.fr_to_br_move[N_MOVE * (self.slice[n] * N_SLICE2) + mv] as usize
                        / N_SLICE2;
                let dist = max(
                    get_pruning(
                        &t.pr.slice_twist_prun,
                        N_SLICE1 * self.twist[n + 1] + self.slice[n + 1],
                    ),
                    get_pruning(
                        &t.pr.slice_flip_prun,
                        N_SLICE1 * self.flip[n + 1] + self.slice[n + 1],
                    ),
                ) as usize;
                self.min_dist_phase1[n + 1] = dist;

                let togo1 = togo - 1;
                if dist > togo1 {
                    // the subgroup H is out of reach within the bound
                    continue;
                }
                if dist == 0 {
                    if togo1 == 0 {
                        // phase 1 done at exactly depth_phase1, try phase 2
                        if let Some(total) = self.total_depth() {
                            // reject the maneuver when the first phase 2 move
                            // merges with the last phase 1 move
                            if total == self.depth_phase1
                                || (self.ax[self.depth_phase1 - 1] != self.ax[self.depth_phase1]
                                    && self.ax[self.depth_phase1 - 1]
                                        != self.ax[self.depth_phase1] + 3)
                            {
                                return Ok(Some(total));
                            }
                        }
                        continue;
                    }
                    if togo1 < 5 {
                        // entering H early leaves only phase 2 moves for the
                        // tail; those maneuvers show up with a shorter phase 1
                        continue;
                    }
                }
                if let Some(total) = self.phase1(n + 1, togo1)? {
                    return Ok(Some(total));
                }
            }
        }
        Ok(None)
    }

    /// Set up phase 2 from the recorded phase 1 maneuver and search for a
    /// completion. Returns the combined length of both phases.
    fn total_depth(&mut self) -> Option<usize> {
        let t = self.tables;
        let d1 = self.depth_phase1;
        let max_depth_phase2 = min(10, self.max_depth - d1);

        for i in 0..d1 {
            let mv = 3 * self.ax[i] + self.po[i] - 1;
            self.urf_to_dlf[i + 1] =
                t.mv.urf_to_dlf_move[N_MOVE * self.urf_to_dlf[i] + mv] as usize;
            self.fr_to_br[i + 1] = t.mv.fr_to_br_move[N_MOVE * self.fr_to_br[i] + mv] as usize;
            self.parity[i + 1] = PARITY_MOVE[self.parity[i]][mv];
        }
        let d1_prun = get_pruning(
            &t.pr.slice_urf_to_dlf_parity_prun,
            (N_SLICE2 * self.urf_to_dlf[d1] + self.fr_to_br[d1]) * 2 + self.parity[d1],
        ) as usize;
        if d1_prun > max_depth_phase2 {
            return None;
        }

        for i in 0..d1 {
            let mv = 3 * self.ax[i] + self.po[i] - 1;
            self.ur_to_ul[i + 1] = t.mv.ur_to_ul_move[N_MOVE * self.ur_to_ul[i] + mv] as usize;
            self.ub_to_df[i + 1] = t.mv.ub_to_df_move[N_MOVE * self.ub_to_df[i] + mv] as usize;
        }
        let merged = t.mv.merge_ur_to_df[N_MERGE * self.ur_to_ul[d1] + self.ub_to_df[d1]];
        if merged < 0 {
            return None;
        }
        self.ur_to_df[d1] = merged as usize;

        let d2_prun = get_pruning(
            &t.pr.slice_ur_to_df_parity_prun,
            (N_SLICE2 * self.ur_to_df[d1] + self.fr_to_br[d1]) * 2 + self.parity[d1],
        ) as usize;
        if d2_prun > max_depth_phase2 {
            return None;
        }

        self.min_dist_phase2[d1] = max(d1_prun, d2_prun);
        if self.min_dist_phase2[d1] == 0 {
            // the phase 1 maneuver already solved the cube
            return Some(d1);
        }
        for depth_phase2 in max(1, self.min_dist_phase2[d1])..=max_depth_phase2 {
            if let Some(ply) = self.phase2(d1, depth_phase2) {
                return Some(ply);
            }
        }
        None
    }

    /// Expand one phase 2 node at ply `n` with `togo` moves left. Only the 10
    /// phase 2 moves are generated. Returns the ply count of the solved state.
    fn phase2(&mut self, n: usize, togo: usize) -> Option<usize> {
        for &mv in PHASE2_MOVES.iter() {
            let axis = mv / 3;
            // the move after the phase boundary is unconstrained; the caller
            // filters maneuvers whose boundary moves merge
            if n > self.depth_phase1 && (self.ax[n - 1] == axis || self.ax[n - 1] == axis + 3) {
                continue;
            }
            self.ax[n] = axis;
            self.po[n] = mv % 3 + 1;

            let t = self.tables;
            self.urf_to_dlf[n + 1] =
                t.mv.urf_to_dlf_move[N_MOVE * self.urf_to_dlf[n] + mv] as usize;
            self.fr_to_br[n + 1] = t.mv.fr_to_br_move[N_MOVE * self.fr_to_br[n] + mv] as usize;
            self.parity[n + 1] = PARITY_MOVE[self.parity[n]][mv];
            self.ur_to_df[n + 1] = t.mv.ur_to_df_move[N_MOVE * self.ur_to_df[n] + mv] as usize;
            let dist = max(
                get_pruning(
                    &t.pr.slice_ur_to_df_parity_prun,
                    (N_SLICE2 * self.ur_to_df[n + 1] + self.fr_to_br[n + 1]) * 2
                        + self.parity[n + 1],
                ),
                get_pruning(
                    &t.pr.slice_urf_to_dlf_parity_prun,
                    (N_SLICE2 * self.urf_to_dlf[n + 1] + self.fr_to_br[n + 1]) * 2
                        + self.parity[n + 1],
                ),
            ) as usize;
            self.min_dist_phase2[n + 1] = dist;

            if dist == 0 {
                return Some(n + 1);
            }
            if dist > togo - 1 {
                continue;
            }
            if let Some(ply) = self.phase2(n + 1, togo - 1) {
                return Some(ply);
            }
        }
        None
    }

    /// Format the first `length` recorded moves, with the phase separator
    /// token after ply `separator_at`.
    fn solution_to_string(&self, length: usize, separator_at: Option<usize>) -> String {
        let mut tokens = Vec::new();
        for i in 0..length {
            tokens.push(ALL_MOVES[3 * self.ax[i] + self.po[i] - 1].to_string());
            if separator_at == Some(i + 1) && i + 1 < length {
                tokens.push(".".to_string());
            }
        }
        tokens.join(" ")
    }
}

/// Solve a cube on the cubie level.
///
/// `max_depth` bounds the length of the full maneuver, `timeout` the wall
/// clock seconds spent searching. With `use_separator` the returned string
/// carries a `.` token between the phase 1 and phase 2 moves.
pub fn solve_cubie(
    cc: &CubieCube,
    max_depth: usize,
    timeout: f32,
    use_separator: bool,
) -> Result<String, Error> {
    cc.verify()?;
    if *cc == CubieCube::default() {
        // already solved, the empty maneuver
        return Ok(String::new());
    }
    // the scratch arrays cover 31 plies, phase 2 adds at most 10
    let max_depth = min(max_depth, 30);
    let mut search = Search::new(cc, &TABLES, max_depth, timeout);
    let length = search.run()?;
    let separator_at = if use_separator {
        Some(search.depth_phase1)
    } else {
        None
    };
    Ok(search.solution_to_string(length, separator_at))
}

/// Solve a cube defined by its facelet definition string.
pub fn solve(
    facelets: &str,
    max_depth: usize,
    timeout: f32,
    use_separator: bool,
) -> Result<String, Error> {
    let fc = FaceCube::try_from(facelets)?;
    let cc = CubieCube::try_from(&fc)?;
    solve_cubie(&cc, max_depth, timeout, use_separator)
}

/// Compose a cube state with a pattern, so that solving the result yields the
/// maneuver which transforms `facelets` into `pattern`.
pub fn patternize(facelets: &str, pattern: &str) -> Result<String, Error> {
    let fc = FaceCube::try_from(facelets)?;
    let f = CubieCube::try_from(&fc)?;
    f.verify()?;
    let pc = FaceCube::try_from(pattern)?;
    let p = CubieCube::try_from(&pc)?;
    p.verify()?;

    let mut patternized = p.inverse_cubie_cube();
    patternized.multiply(f);
    Ok(FaceCube::from(&patternized).to_string())
}

/// Solve a cube towards an arbitrary goal state instead of the solved one.
pub fn solve_to(
    facelets: &str,
    pattern: &str,
    max_depth: usize,
    timeout: f32,
    use_separator: bool,
) -> Result<String, Error> {
    let patternized = patternize(facelets, pattern)?;
    solve(&patternized, max_depth, timeout, use_separator)
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use crate::cubie::CubieCube;
    use crate::error::Error;
    use crate::facelet::FaceCube;
    use crate::moves::Move;
    use crate::scramble::scramble_from_str;
    use crate::solver::*;

    const SOLVED_FACELETS: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    fn apply_solution(cc: &CubieCube, solution: &str) -> CubieCube {
        let moves: Vec<Move> = solution
            .split_whitespace()
            .filter(|token| *token != ".")
            .map(|token| Move::from_str(token).unwrap())
            .collect();
        cc.apply_moves(&moves)
    }

    #[test]
    fn test_solve_solved_cube() {
        assert_eq!(solve(SOLVED_FACELETS, 23, 5.0, false), Ok(String::new()));
    }

    #[test]
    fn test_solve_single_turn() {
        let cc = CubieCube::default().apply_move(Move::R);
        assert_eq!(solve_cubie(&cc, 23, 5.0, false), Ok("R'".to_string()));
    }

    #[test]
    fn test_solve_regression_scramble() {
        let scramble = scramble_from_str("F U R2 B L' D F2 U' B2 L").unwrap();
        let cc = CubieCube::default().apply_moves(&scramble);

        let solution = solve_cubie(&cc, 25, 10.0, false).unwrap();
        assert!(solution.split_whitespace().count() <= 25);
        assert_eq!(apply_solution(&cc, &solution), CubieCube::default());

        // the separator splits but does not change the maneuver
        let with_separator = solve_cubie(&cc, 25, 10.0, true).unwrap();
        assert_eq!(apply_solution(&cc, &with_separator), CubieCube::default());
    }

    #[test]
    fn test_solve_superflip() {
        // all edges flipped in place, a valid cube deep in phase 1
        let mut cc = CubieCube::default();
        cc.eo = [1; 12];
        cc.verify().unwrap();

        let solution = solve_cubie(&cc, 24, 30.0, false).unwrap();
        assert!(solution.split_whitespace().count() <= 24);
        assert_eq!(apply_solution(&cc, &solution), CubieCube::default());
    }

    #[test]
    fn test_solve_facelet_scramble() {
        let cc = CubieCube::try_from(
            &FaceCube::try_from("RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF").unwrap(),
        )
        .unwrap();
        let solution = solve_cubie(&cc, 23, 10.0, false).unwrap();
        assert_eq!(apply_solution(&cc, &solution), CubieCube::default());
    }

    #[test]
    fn test_solve_rejects_invalid_cube() {
        let mut cc = CubieCube::default();
        cc.co[0] = 1;
        assert_eq!(solve_cubie(&cc, 23, 5.0, false), Err(Error::TwistParity));
    }

    #[test]
    fn test_solve_max_depth_exhausted() {
        let scramble = scramble_from_str("F U R2 B L' D F2 U' B2 L").unwrap();
        let cc = CubieCube::default().apply_moves(&scramble);
        assert_eq!(
            solve_cubie(&cc, 2, 5.0, false),
            Err(Error::NoSolutionForMaxDepth)
        );
    }

    #[test]
    fn test_solve_timeout() {
        // all edges flipped again, but with no time budget at all
        let mut cc = CubieCube::default();
        cc.eo = [1; 12];
        assert_eq!(solve_cubie(&cc, 24, 0.0, false), Err(Error::Timeout));
    }

    #[test]
    fn test_patternize() {
        // solving towards a pattern one move away yields that move
        let pattern = FaceCube::from(&CubieCube::default().apply_move(Move::U)).to_string();
        assert_eq!(
            solve_to(SOLVED_FACELETS, &pattern, 23, 5.0, false),
            Ok("U".to_string())
        );

        // patternizing a state with itself solves in zero moves
        let state = FaceCube::from(&CubieCube::default().apply_move(Move::F)).to_string();
        assert_eq!(patternize(&state, &state), Ok(SOLVED_FACELETS.to_string()));
    }
}
