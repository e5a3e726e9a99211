use std::str::FromStr;

use rand::random;

use crate::constants::ALL_MOVES;
use crate::error::Error;
use crate::moves::Move;

/// Parse a whitespace separated scramble string into moves.
pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

/// Format a move sequence as a whitespace separated scramble string.
pub fn scramble_to_str(s: &[Move]) -> String {
    s.iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate a random scramble of 25 moves, without two successive moves on
/// the same face.
pub fn random_scramble() -> Vec<Move> {
    let mut r = Vec::new();
    let mut previous = 6;
    while r.len() < 25 {
        let axis = random::<u32>() as usize % 6;
        if axis == previous {
            continue;
        }
        let power = random::<u32>() as usize % 3;
        r.push(ALL_MOVES[3 * axis + power]);
        previous = axis;
    }
    r
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn test_scramble_from_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
        assert!(scramble_from_str("R U X").is_err());
    }

    #[test]
    fn test_scramble_to_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&m), "R U R' U' F L' D' B2 R' U'");
    }

    #[test]
    fn test_random_scramble() {
        let s = random_scramble();
        assert_eq!(s.len(), 25);
        for w in s.windows(2) {
            assert_ne!(w[0] as usize / 3, w[1] as usize / 3);
        }
    }
}
