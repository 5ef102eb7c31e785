// Checkers board: 8x8 grid of which only the 32 dark squares are playable.
// Squares are indexed 0..32 row by row, four playable squares per row.

use std::fmt;

use smallvec::SmallVec;

use super::piece::{Color, Kind, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [Option<Piece>; 32],
}

impl Board {
    /// Number of playable squares.
    pub const SQUARES: u8 = 32;

    /// Standard starting setup: Black on rows 0..3 moving down the board,
    /// White on rows 5..8 moving up.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for index in 0..12 {
            board.set(index, Piece::man(Color::Black));
        }
        for index in 20..32 {
            board.set(index, Piece::man(Color::White));
        }
        board
    }

    pub fn empty() -> Self {
        Self { tiles: [None; 32] }
    }

    pub fn get(&self, index: u8) -> Option<Piece> {
        self.tiles.get(index as usize).copied().flatten()
    }

    pub fn set(&mut self, index: u8, piece: Piece) {
        if let Some(tile) = self.tiles.get_mut(index as usize) {
            *tile = Some(piece);
        }
    }

    pub fn clear(&mut self, index: u8) {
        if let Some(tile) = self.tiles.get_mut(index as usize) {
            *tile = None;
        }
    }

    /// Indices of every piece belonging to `color`.
    pub fn find(&self, color: Color) -> SmallVec<[u8; 12]> {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(index, tile)| match tile {
                Some(piece) if piece.is(color) => Some(index as u8),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, color: Color) -> usize {
        self.tiles
            .iter()
            .filter(|tile| matches!(tile, Some(piece) if piece.is(color)))
            .count()
    }

    /// Board coordinates (x = column, y = row) of a playable square.
    pub fn to_point(index: u8) -> (i32, i32) {
        let y = i32::from(index) / 4;
        let x = 2 * (i32::from(index) % 4) + (y + 1) % 2;
        (x, y)
    }

    /// Index of the playable square at (x, y), if there is one. The dark
    /// squares are exactly those with odd x + y.
    pub fn to_index(x: i32, y: i32) -> Option<u8> {
        if !(0..8).contains(&x) || !(0..8).contains(&y) || (x + y) % 2 == 0 {
            return None;
        }
        Some((y * 4 + x / 2) as u8)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8 {
            for x in 0..8 {
                let glyph = match Board::to_index(x, y).and_then(|index| self.get(index)) {
                    Some(piece) => match (piece.color, piece.kind) {
                        (Color::Black, Kind::Man) => 'b',
                        (Color::Black, Kind::King) => 'B',
                        (Color::White, Kind::Man) => 'w',
                        (Color::White, Kind::King) => 'W',
                    },
                    None if (x + y) % 2 == 1 => '.',
                    None => ' ',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
