//! Player trait for entities that can advance the game.
//!
//! A player is anything that, given its turn, can pick and apply one move:
//! the two search-driven computer players, the random baseline, or some
//! future interactive front end. The trait deliberately exposes a single
//! "take your turn" entry point rather than a "return a move" one, because
//! a turn may be a no-op (game over, not this player's turn, no legal
//! move) and only the player knows which.

use crate::game_repr::Game;

pub trait Player {
    /// Inspect the game and, if it is this player's turn, apply exactly
    /// one move to it.
    ///
    /// Leaves the game untouched when it is already over, when it is not
    /// this player's turn, or when the side to move has no legal move. The
    /// caller is responsible for noticing the resulting terminal state; a
    /// player never declares game outcomes.
    fn update_game(&mut self, game: &mut Game);

    /// Display name used in logs.
    fn name(&self) -> &str {
        "Player"
    }
}
