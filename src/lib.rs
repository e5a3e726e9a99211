//! # twophase
//! `twophase`: crate for solving the 3x3 Rubik's cube with [Kociemba's two phase algorithm](http://kociemba.org/cube.htm).

#[macro_use]
extern crate lazy_static;

/// Module containing 3x3 cube constants.
pub mod constants;

/// Error define.
pub mod error;

/// Module for represent a cube on the cubie level.
pub mod cubie;

/// Module for represent a cube on the facelet level.
pub mod facelet;

/// Module for represent moves and create move tables.
pub mod moves;

/// Module for create pruning tables. The pruning tables cut the search tree during the search.
pub mod pruning;

/// Module containing functions for scrambling the cube.
pub mod scramble;

/// Module for the two phase Solver.
pub mod solver;

pub use cubie::CubieCube;
pub use error::Error;
pub use moves::Move;
pub use solver::{patternize, setup, solve, solve_cubie, solve_to};
