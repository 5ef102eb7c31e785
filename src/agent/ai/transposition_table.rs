use std::collections::HashMap;

use crate::game_repr::Game;

/// Cache of previously evaluated positions for one ply role within a
/// single decision.
///
/// Keys compare by full positional equality (board contents, side to move,
/// pending skip), never by identity: the same position reached through two
/// different move orders hits the same entry. Values are truncated to
/// whole numbers when stored. There is no eviction; the table lives for
/// exactly one decision and is dropped wholesale with its context.
pub struct TranspositionTable {
    entries: HashMap<Game, i32>,
    hits: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
        }
    }

    /// Previously stored value for this exact position, if any.
    pub fn lookup(&mut self, state: &Game) -> Option<f64> {
        let value = self.entries.get(state).copied();
        if value.is_some() {
            self.hits += 1;
        }
        value.map(f64::from)
    }

    /// Record the evaluation computed for a position.
    pub fn store(&mut self, state: &Game, value: f64) {
        self.entries.insert(state.clone(), value as i32);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of successful lookups so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
