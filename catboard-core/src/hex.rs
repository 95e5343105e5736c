//! Hex grid geometry with axial/cube coordinates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseHexError;

/// Axial hex coordinates.
///
/// The third cube coordinate `s` is not stored: it is always `-q - r`,
/// so equality and hashing only ever look at `(q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    /// Center of every board
    pub const ORIGIN: Hex = Hex::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived cube coordinate, `q + r + s == 0`.
    ///
    /// Widened to `i64` so that it is defined for every `(q, r)` pair.
    pub const fn s(&self) -> i64 {
        -(self.q as i64) - (self.r as i64)
    }

    /// Largest of |q|, |r|, |s|: the ring this hex sits on
    pub fn distance_to_center(&self) -> i64 {
        let q = (self.q as i64).abs();
        let r = (self.r as i64).abs();
        q.max(r).max(self.s().abs())
    }

    /// Distance between two hexes
    pub fn distance_to(&self, other: Hex) -> i64 {
        let dq = (self.q as i64 - other.q as i64).abs();
        let dr = (self.r as i64 - other.r as i64).abs();
        let ds = (self.s() - other.s()).abs();
        (dq + dr + ds) / 2
    }

    /// Get neighbor in direction (0-5). Wraps on `i32` overflow.
    pub fn neighbor(&self, direction: u8) -> Hex {
        let (dq, dr) = DIRECTIONS[direction as usize % 6];
        Hex::new(self.q.wrapping_add(dq), self.r.wrapping_add(dr))
    }

    /// Neighbor in direction (0-5), or `None` if it is not representable
    pub fn checked_neighbor(&self, direction: u8) -> Option<Hex> {
        let (dq, dr) = DIRECTIONS[direction as usize % 6];
        Some(Hex::new(self.q.checked_add(dq)?, self.r.checked_add(dr)?))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl FromStr for Hex {
    type Err = ParseHexError;

    /// Parses `"q,r"`; surrounding whitespace and one pair of parentheses are allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest
                .strip_suffix(')')
                .ok_or_else(|| ParseHexError::Malformed(s.to_string()))?,
            None => trimmed,
        };

        let (q, r) = inner
            .split_once(',')
            .ok_or_else(|| ParseHexError::Malformed(s.to_string()))?;

        let parse_axis = |text: &str| {
            text.trim()
                .parse::<i32>()
                .map_err(|source| ParseHexError::InvalidAxis {
                    text: text.trim().to_string(),
                    source,
                })
        };

        Ok(Hex::new(parse_axis(q)?, parse_axis(r)?))
    }
}

/// Direction vectors in axial coordinates (dq, dr).
///
/// Adjacency order is fixed: callers rely on `adjacent_positions`
/// following this list.
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (0, -1),
    (1, -1),
];
