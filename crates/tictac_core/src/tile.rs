//! Tile identifiers for the 3x3 board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the nine cells on the board, named `T1` through `T9`.
///
/// Tiles are numbered row-major: `T1` is the top-left cell and `T9`
/// the bottom-right one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Tile {
    /// Row 0, column 0.
    T1,
    /// Row 0, column 1.
    T2,
    /// Row 0, column 2.
    T3,
    /// Row 1, column 0.
    T4,
    /// Row 1, column 1.
    T5,
    /// Row 1, column 2.
    T6,
    /// Row 2, column 0.
    T7,
    /// Row 2, column 1.
    T8,
    /// Row 2, column 2.
    T9,
}

impl Tile {
    /// All nine tiles in board order.
    pub const ALL: [Tile; 9] = [
        Tile::T1,
        Tile::T2,
        Tile::T3,
        Tile::T4,
        Tile::T5,
        Tile::T6,
        Tile::T7,
        Tile::T8,
        Tile::T9,
    ];

    /// Board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Tile::T1 => 0,
            Tile::T2 => 1,
            Tile::T3 => 2,
            Tile::T4 => 3,
            Tile::T5 => 4,
            Tile::T6 => 5,
            Tile::T7 => 6,
            Tile::T8 => 7,
            Tile::T9 => 8,
        }
    }

    /// Grid row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Grid column (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a tile from its board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a tile from grid coordinates.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// The tile name as used by the scene graph (`"T1"`..`"T9"`).
    pub fn name(self) -> &'static str {
        match self {
            Tile::T1 => "T1",
            Tile::T2 => "T2",
            Tile::T3 => "T3",
            Tile::T4 => "T4",
            Tile::T5 => "T5",
            Tile::T6 => "T6",
            Tile::T7 => "T7",
            Tile::T8 => "T8",
            Tile::T9 => "T9",
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A string that does not name any tile.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown tile: {:?}", input)]
pub struct TileParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Tile {
    type Err = TileParseError;

    /// Parses `"T5"`, `"t5"` or a bare digit `"5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('T')
            .or_else(|| trimmed.strip_prefix('t'))
            .unwrap_or(trimmed);

        digits
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=9).contains(n))
            .and_then(|n| Self::from_index(n - 1))
            .ok_or_else(|| TileParseError {
                input: s.to_string(),
            })
    }
}
