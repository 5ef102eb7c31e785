use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::ai::move_ordering::ordered_moves;
use crate::agent::player::Player;
use crate::game_repr::{Color, Game};

/// Baseline computer player: picks a uniformly random legal move. Useful
/// as a cheap opponent and for driving games into varied positions in
/// tests.
pub struct RandomPlayer {
    color: Color,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(color: Color) -> Self {
        Self::with_seed(color, rand::random())
    }

    /// Seeded variant for reproducible games.
    pub fn with_seed(color: Color, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Player for RandomPlayer {
    fn update_game(&mut self, game: &mut Game) {
        if game.is_game_over() || game.turn() != self.color {
            return;
        }
        let moves = ordered_moves(game);
        if moves.is_empty() {
            return;
        }
        let pick = moves[self.rng.gen_range(0..moves.len())];
        game.apply_move(pick.start(), pick.end());
    }

    fn name(&self) -> &str {
        "Random"
    }
}
