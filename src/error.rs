use thiserror::Error;

/// Errors.
///    Error 1: There is not exactly one facelet of each colour
///    Error 2: Not all 12 edges exist exactly once
///    Error 3: Flip error: One edge has to be flipped
///    Error 4: Not all corners exist exactly once
///    Error 5: Twist error: One corner has to be twisted
///    Error 6: Parity error: Two corners or two edges have to be exchanged
///    Error 7: No solution exists for the given max depth
///    Error 8: Timeout, no solution within given time
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("there is not exactly one facelet of each colour")]
    InvalidColorCount,
    #[error("not all 12 edges exist exactly once")]
    MissingEdge,
    #[error("one edge has to be flipped")]
    FlipParity,
    #[error("not all 8 corners exist exactly once")]
    MissingCorner,
    #[error("one corner has to be twisted")]
    TwistParity,
    #[error("two corners or two edges have to be exchanged")]
    PermutationParity,
    #[error("no solution exists for the given max depth")]
    NoSolutionForMaxDepth,
    #[error("timeout, no solution within given time")]
    Timeout,
    #[error("invalid color value")]
    InvalidColor,
    #[error("invalid corner value")]
    InvalidCorner,
    #[error("invalid edge value")]
    InvalidEdge,
    #[error("invalid facelet string")]
    InvalidFaceletString,
    #[error("invalid scramble string")]
    InvalidScramble,
}
