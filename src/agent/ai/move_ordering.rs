// Move enumeration and ordering for the search engines.
//
// The enumerator owns the forced-capture rule: while a capture sequence is
// pending, only its continuations are produced; otherwise, if any piece
// can jump, ordinary moves are excluded entirely. Candidates come out
// best-scoring first, which is what makes alpha-beta cutoffs bite early.

use smallvec::SmallVec;

use crate::game_repr::{movegen, Game, Move};

/// Inline capacity sized for checkers; positions rarely offer more than a
/// dozen legal moves.
pub type MoveList = SmallVec<[Move; 16]>;

/// All legal moves for the side to move, ordered by descending score.
///
/// An empty list means the side to move has no legal move, which the
/// caller must treat as a terminal position.
pub fn ordered_moves(game: &Game) -> MoveList {
    let mut moves = MoveList::new();

    if let Some(origin) = game.skip_index() {
        // A capture sequence is in progress: only continuations from the
        // landing square may move.
        for end in movegen::skips(game.board(), origin) {
            moves.push(score_move(game, origin, end));
        }
    } else {
        let pieces = game.board().find(game.turn());
        for &start in &pieces {
            for end in movegen::skips(game.board(), start) {
                moves.push(score_move(game, start, end));
            }
        }
        // Captures are mandatory: ordinary moves only exist when no piece
        // of this side can jump.
        if moves.is_empty() {
            for &start in &pieces {
                for end in movegen::moves(game.board(), start) {
                    moves.push(score_move(game, start, end));
                }
            }
        }
    }

    moves.sort_by(|a, b| b.score().total_cmp(&a.score()));
    moves
}

/// Score a candidate by playing it out on a disposable copy and evaluating
/// the result for the side that moves next.
fn score_move(game: &Game, start: u8, end: u8) -> Move {
    let mut copy = game.clone();
    copy.apply_move(start, end);
    Move::new(start, end, copy.heuristic(copy.turn()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Board, Color, Piece};

    #[test]
    fn test_opening_has_seven_moves() {
        let moves = ordered_moves(&Game::new());
        // Four front-row men, the two in the middle with two steps each.
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn test_moves_come_out_sorted_descending() {
        let moves = ordered_moves(&Game::new());
        for pair in moves.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
    }

    #[test]
    fn test_captures_exclude_ordinary_moves() {
        let mut board = Board::empty();
        board.set(13, Piece::man(Color::Black));
        board.set(17, Piece::man(Color::White));
        board.set(4, Piece::man(Color::Black));
        let game = Game::from_setup(board, Color::Black);

        let moves = ordered_moves(&game);
        assert_eq!(moves.len(), 1, "only the jump is legal");
        assert_eq!(moves[0].start(), 13);
        assert_eq!(moves[0].end(), 22);
    }

    #[test]
    fn test_pending_skip_restricts_to_its_square() {
        let mut board = Board::empty();
        board.set(13, Piece::man(Color::Black));
        board.set(17, Piece::man(Color::White));
        board.set(26, Piece::man(Color::White));
        // A second black piece with jumps of its own.
        board.set(5, Piece::man(Color::Black));
        board.set(9, Piece::man(Color::White));
        let mut game = Game::from_setup(board, Color::Black);

        assert!(game.apply_move(13, 22));
        assert_eq!(game.skip_index(), Some(22));

        let moves = ordered_moves(&game);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.start() == 22));
    }

    #[test]
    fn test_empty_when_no_legal_move() {
        let mut board = Board::empty();
        board.set(28, Piece::man(Color::White));
        board.set(24, Piece::man(Color::Black));
        board.set(21, Piece::man(Color::Black));
        let game = Game::from_setup(board, Color::White);
        assert!(ordered_moves(&game).is_empty());
    }

    #[test]
    fn test_enumeration_does_not_touch_the_state() {
        let game = Game::new();
        let before = game.clone();
        let _ = ordered_moves(&game);
        assert_eq!(game, before);
    }
}
