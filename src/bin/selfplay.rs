// Plays one full game between the two search engines and prints it.
//
// The alpha-beta player takes Black, the plain MinMax player takes White;
// run with RUST_LOG=debug to see each decision's node count and cache
// hits, which is the quickest way to watch the pruning pay off.

use draughts_engine::agent::ai::{AlphaBetaPlayer, MinMaxPlayer};
use draughts_engine::agent::Player;
use draughts_engine::game_repr::{Color, Game};
use log::info;

// Stops drawn-out king endgames from shuffling forever.
const MAX_PLIES: u32 = 200;

fn main() {
    env_logger::init();

    let mut game = Game::new();
    let mut black = AlphaBetaPlayer::new(Color::Black);
    let mut white = MinMaxPlayer::new(Color::White);

    let mut plies = 0;
    while !game.is_game_over() && plies < MAX_PLIES {
        let before = game.turn();
        match before {
            Color::Black => black.update_game(&mut game),
            Color::White => white.update_game(&mut game),
        }
        plies += 1;
        info!("ply {plies} played by {before:?}");
        println!("{game}");
    }

    if game.is_game_over() {
        let loser = game.turn();
        println!("Game over after {plies} plies: {:?} cannot move.", loser);
    } else {
        println!("Stopped after {MAX_PLIES} plies.");
    }
}
