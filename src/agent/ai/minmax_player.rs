use log::debug;

use crate::agent::player::Player;
use crate::game_repr::{Color, Game};

use super::minmax;
use super::search::{SearchContext, SEARCH_DEPTH};

/// Computer player driven by the exhaustive MinMax engine.
pub struct MinMaxPlayer {
    color: Color,
}

impl MinMaxPlayer {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Player for MinMaxPlayer {
    fn update_game(&mut self, game: &mut Game) {
        if game.is_game_over() || game.turn() != self.color {
            return;
        }

        // Every decision searches with empty tables; values cached for one
        // root position are meaningless for the next.
        let mut ctx = SearchContext::new();
        let Some(chosen) = minmax::decide(game, SEARCH_DEPTH, &mut ctx) else {
            return;
        };
        game.apply_move(chosen.start(), chosen.end());
        debug!(
            "{}: {} -> {} ({} nodes, {} cache hits)",
            self.name(),
            chosen.start(),
            chosen.end(),
            ctx.nodes,
            ctx.cache_hits()
        );
    }

    fn name(&self) -> &str {
        "MinMax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Board, Piece};

    // Exhaustive search is expensive from the full opening, so the player
    // tests use a small endgame instead.
    fn endgame() -> Game {
        let mut board = Board::empty();
        board.set(5, Piece::king(Color::Black));
        board.set(26, Piece::man(Color::White));
        board.set(30, Piece::man(Color::White));
        Game::from_setup(board, Color::Black)
    }

    #[test]
    fn test_noop_when_not_its_turn() {
        let mut game = endgame();
        let before = game.clone();
        let mut player = MinMaxPlayer::new(Color::White);
        player.update_game(&mut game);
        assert_eq!(game, before);
    }

    #[test]
    fn test_plays_one_move_on_its_turn() {
        let mut game = endgame();
        let mut player = MinMaxPlayer::new(Color::Black);
        player.update_game(&mut game);
        assert_eq!(game.turn(), Color::White, "exactly one ply was played");
    }

    #[test]
    fn test_repeat_decision_is_identical() {
        let mut player = MinMaxPlayer::new(Color::Black);
        let mut first = endgame();
        let mut second = endgame();
        player.update_game(&mut first);
        player.update_game(&mut second);
        assert_eq!(first, second);
    }
}
