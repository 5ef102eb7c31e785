use log::debug;

use crate::agent::player::Player;
use crate::game_repr::{Color, Game};

use super::alpha_beta;
use super::search::{SearchContext, SEARCH_DEPTH};

/// Computer player driven by the alpha-beta pruned engine. Plays the same
/// moves as [`MinMaxPlayer`](super::MinMaxPlayer) while visiting far fewer
/// nodes.
pub struct AlphaBetaPlayer {
    color: Color,
}

impl AlphaBetaPlayer {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Player for AlphaBetaPlayer {
    fn update_game(&mut self, game: &mut Game) {
        if game.is_game_over() || game.turn() != self.color {
            return;
        }

        let mut ctx = SearchContext::new();
        let Some(chosen) = alpha_beta::decide(game, SEARCH_DEPTH, &mut ctx) else {
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
        "AlphaBeta"
    }
}
