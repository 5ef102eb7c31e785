// Static position evaluation.
// Material plus a small advancement term for men; positive favors the
// given perspective. The search treats this as a black box.

use super::board::Board;
use super::game::Game;
use super::piece::{Color, Kind};

const MAN_VALUE: f64 = 100.0;
const KING_VALUE: f64 = 160.0;

// Per-row bonus for men marching toward the crowning row.
const ADVANCE_WEIGHT: f64 = 2.0;

pub fn evaluate(game: &Game, perspective: Color) -> f64 {
    let board = game.board();
    let mut score = 0.0;
    for index in 0..Board::SQUARES {
        let Some(piece) = board.get(index) else {
            continue;
        };
        let worth = match piece.kind {
            Kind::King => KING_VALUE,
            Kind::Man => MAN_VALUE + ADVANCE_WEIGHT * advancement(piece.color, index),
        };
        if piece.is(perspective) {
            score += worth;
        } else {
            score -= worth;
        }
    }
    score
}

fn advancement(color: Color, index: u8) -> f64 {
    let (_, y) = Board::to_point(index);
    let rows = match color {
        Color::Black => y,
        Color::White => 7 - y,
    };
    f64::from(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Piece;

    #[test]
    fn test_starting_position_is_balanced() {
        let game = Game::new();
        assert_eq!(evaluate(&game, Color::Black), 0.0);
        assert_eq!(evaluate(&game, Color::White), 0.0);
    }

    #[test]
    fn test_perspectives_are_mirrored() {
        let mut board = Board::empty();
        board.set(13, Piece::man(Color::Black));
        board.set(22, Piece::king(Color::White));
        board.set(25, Piece::man(Color::White));
        let game = Game::from_setup(board, Color::Black);

        let black = evaluate(&game, Color::Black);
        let white = evaluate(&game, Color::White);
        assert_eq!(black, -white);
        assert!(black < 0.0, "White is a king up: {black}");
    }

    #[test]
    fn test_king_outweighs_man() {
        let mut board = Board::empty();
        board.set(13, Piece::king(Color::Black));
        board.set(18, Piece::man(Color::White));
        let game = Game::from_setup(board, Color::Black);
        assert!(evaluate(&game, Color::Black) > 0.0);
    }

    #[test]
    fn test_advanced_man_scores_higher() {
        let mut near = Board::empty();
        near.set(4, Piece::man(Color::Black));
        let mut far = Board::empty();
        far.set(24, Piece::man(Color::Black));

        let near_score = evaluate(&Game::from_setup(near, Color::Black), Color::Black);
        let far_score = evaluate(&Game::from_setup(far, Color::Black), Color::Black);
        assert!(far_score > near_score);
    }
}
