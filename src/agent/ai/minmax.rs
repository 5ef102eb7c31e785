// Exhaustive fixed-depth MinMax search.
//
// Roles alternate per ply: a maximizing node takes the maximum of its
// children, a minimizing node the minimum, and at depth zero the static
// heuristic is evaluated from the perspective of the node's role. Every
// legal move is explored exactly once per node, modulo transposition-table
// hits; there is no pruning, which makes this engine the reference the
// alpha-beta variant is measured against.

use crate::game_repr::{Color, Game, Move};

use super::move_ordering::ordered_moves;
use super::search::SearchContext;

/// Pick the best move for the side to move, searching `depth` plies.
///
/// Scans root candidates in enumerator order and keeps the move whose
/// value is at least as high as the best seen so far, so ties go to the
/// candidate scanned last, deterministically for a fixed move order. Returns
/// `None` when the side to move has no legal move.
pub fn decide(game: &Game, depth: u8, ctx: &mut SearchContext) -> Option<Move> {
    let player = game.turn();
    let mut best = None;
    let mut max = f64::NEG_INFINITY;

    for candidate in ordered_moves(game) {
        let mut copy = game.clone();
        copy.apply_move(candidate.start(), candidate.end());
        let value = min_value(&copy, depth.saturating_sub(1), player.opposite(), ctx);
        if value >= max {
            max = value;
            best = Some(candidate);
        }
    }
    best
}

fn max_value(game: &Game, depth: u8, perspective: Color, ctx: &mut SearchContext) -> f64 {
    ctx.nodes += 1;
    if depth == 0 {
        return game.heuristic(perspective);
    }

    let mut max = f64::NEG_INFINITY;
    for candidate in ordered_moves(game) {
        let mut child = game.clone();
        child.apply_move(candidate.start(), candidate.end());
        let value = match ctx.table_max.lookup(&child) {
            Some(cached) => cached,
            None => {
                let computed = min_value(&child, depth - 1, perspective.opposite(), ctx);
                ctx.table_max.store(&child, computed);
                computed
            }
        };
        max = max.max(value);
    }
    // No legal reply leaves the maximum at negative infinity: a lost
    // position for the maximizing side.
    max
}

fn min_value(game: &Game, depth: u8, perspective: Color, ctx: &mut SearchContext) -> f64 {
    ctx.nodes += 1;
    if depth == 0 {
        return game.heuristic(perspective);
    }

    let mut min = f64::INFINITY;
    for candidate in ordered_moves(game) {
        let mut child = game.clone();
        child.apply_move(candidate.start(), candidate.end());
        let value = match ctx.table_min.lookup(&child) {
            Some(cached) => cached,
            None => {
                let computed = max_value(&child, depth - 1, perspective.opposite(), ctx);
                ctx.table_min.store(&child, computed);
                computed
            }
        };
        min = min.min(value);
    }
    min
}
