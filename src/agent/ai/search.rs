use super::transposition_table::TranspositionTable;

/// Number of plies both engines explore on every decision.
pub const SEARCH_DEPTH: u8 = 7;

/// Mutable state for one decision: the two role-scoped transposition
/// tables and the node-evaluation counter.
///
/// A position can recur as a maximizing node and as a minimizing node
/// within the same search, and its value differs by role, so each role
/// caches independently. A fresh context must be built for every decision;
/// values cached for one root position are never valid for another.
///
/// The counter exists to compare the two engines' search effort and plays
/// no part in control flow.
pub struct SearchContext {
    pub table_max: TranspositionTable,
    pub table_min: TranspositionTable,
    pub nodes: u64,
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            table_max: TranspositionTable::new(),
            table_min: TranspositionTable::new(),
            nodes: 0,
        }
    }

    /// Combined hit count of both tables.
    pub fn cache_hits(&self) -> u64 {
        self.table_max.hits() + self.table_min.hits()
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_context_is_empty() {
        let ctx = SearchContext::new();
        assert!(ctx.table_max.is_empty());
        assert!(ctx.table_min.is_empty());
        assert_eq!(ctx.nodes, 0);
        assert_eq!(ctx.cache_hits(), 0);
    }
}
