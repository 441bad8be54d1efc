//! Transposition table: canonical nodes and cached search results per signature.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::node::NodeId;

/// How a cached score relates to the true minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// True value is at least the score.
    Lower,
    /// True value is at most the score.
    Upper,
}

impl FromStr for Bound {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EXACT" => Ok(Bound::Exact),
            "LOWER" => Ok(Bound::Lower),
            "UPPER" => Ok(Bound::Upper),
            _ => Err(SearchError::InvalidBound(s.to_string())),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Exact => f.write_str("EXACT"),
            Bound::Lower => f.write_str("LOWER"),
            Bound::Upper => f.write_str("UPPER"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TtEntry {
    /// Remaining depth the score was searched to.
    pub depth: u8,
    pub score: f64,
    pub bound: Bound,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TtStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    /// Stores dropped because a deeper result was already cached.
    pub rejected: u64,
}

/// Maps a position signature to its canonical node and its cached result.
///
/// One table belongs to one search session; `clear` it (or build a new one)
/// before searching an unrelated root.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    nodes: HashMap<u64, NodeId>,
    results: HashMap<u64, TtEntry>,
    stats: TtStats,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical node registered for `signature`.
    pub fn lookup_node(&self, signature: u64) -> Option<NodeId> {
        self.nodes.get(&signature).copied()
    }

    /// Register `id` as canonical for `signature` unless another node already
    /// is. Returns whichever node is canonical afterwards.
    pub fn register_node(&mut self, signature: u64, id: NodeId) -> NodeId {
        *self.nodes.entry(signature).or_insert(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn lookup_result(&mut self, signature: u64) -> Option<TtEntry> {
        self.stats.probes += 1;
        let entry = self.results.get(&signature).copied();
        if entry.is_some() {
            self.stats.hits += 1;
        }
        entry
    }

    /// Cache a result. An existing entry searched deeper is kept.
    pub fn store_result(&mut self, signature: u64, depth: u8, score: f64, bound: Bound) {
        match self.results.get(&signature) {
            Some(old) if old.depth > depth => self.stats.rejected += 1,
            _ => {
                self.results.insert(signature, TtEntry { depth, score, bound });
                self.stats.stores += 1;
            }
        }
    }

    /// Cache a result whose bound arrives as text ("EXACT", "LOWER", "UPPER").
    pub fn store_result_flag(
        &mut self,
        signature: u64,
        depth: u8,
        score: f64,
        flag: &str,
    ) -> Result<(), SearchError> {
        let bound = flag.parse()?;
        self.store_result(signature, depth, score, bound);
        Ok(())
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn stats(&self) -> TtStats {
        self.stats
    }

    /// Drop every node registration and cached result.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.results.clear();
        self.stats = TtStats::default();
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
