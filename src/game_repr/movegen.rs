// Per-piece move generation. Men step and jump diagonally forward only
// (Black down the board, White up); kings use all four diagonals. A skip
// jumps an adjacent enemy piece into the empty square directly beyond it.

use smallvec::SmallVec;

use super::board::Board;
use super::piece::{Color, Kind, Piece};

static ALL_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

fn directions(piece: Piece) -> &'static [(i32, i32)] {
    match (piece.kind, piece.color) {
        (Kind::King, _) => &ALL_DIRECTIONS,
        // Black men move toward higher rows, White men toward lower ones.
        (Kind::Man, Color::Black) => &ALL_DIRECTIONS[2..],
        (Kind::Man, Color::White) => &ALL_DIRECTIONS[..2],
    }
}

/// Destinations of the ordinary (non-capturing) moves for the piece at
/// `index`. Empty when the square is empty.
pub fn moves(board: &Board, index: u8) -> SmallVec<[u8; 4]> {
    let mut out = SmallVec::new();
    let Some(piece) = board.get(index) else {
        return out;
    };
    let (x, y) = Board::to_point(index);
    for &(dx, dy) in directions(piece) {
        let Some(end) = Board::to_index(x + dx, y + dy) else {
            continue;
        };
        if board.get(end).is_none() {
            out.push(end);
        }
    }
    out
}

/// Destinations of the skips (capturing jumps) for the piece at `index`.
pub fn skips(board: &Board, index: u8) -> SmallVec<[u8; 4]> {
    let mut out = SmallVec::new();
    let Some(piece) = board.get(index) else {
        return out;
    };
    let (x, y) = Board::to_point(index);
    for &(dx, dy) in directions(piece) {
        let Some(middle) = Board::to_index(x + dx, y + dy) else {
            continue;
        };
        let Some(end) = Board::to_index(x + 2 * dx, y + 2 * dy) else {
            continue;
        };
        let jumps_enemy = board
            .get(middle)
            .is_some_and(|victim| victim.is(piece.color.opposite()));
        if jumps_enemy && board.get(end).is_none() {
            out.push(end);
        }
    }
    out
}

/// Whether moving `start` -> `end` is mechanically legal for `turn` given a
/// possibly pending skip obligation. While a capture sequence is in
/// progress, only continuation skips from the obligated square are legal.
pub fn is_valid(board: &Board, turn: Color, skip: Option<u8>, start: u8, end: u8) -> bool {
    let Some(piece) = board.get(start) else {
        return false;
    };
    if !piece.is(turn) {
        return false;
    }
    if let Some(origin) = skip {
        return origin == start && skips(board, start).contains(&end);
    }
    skips(board, start).contains(&end) || moves(board, start).contains(&end)
}
