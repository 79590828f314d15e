use crate::Position;
use serde::{Deserialize, Serialize};

/// How the backtracking search walks the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SearchMode {
    /// Plain recursion, one stack frame per marked cell
    #[default]
    Recursive,
    /// Explicit frame stack; same visiting order, no call-stack growth
    Iterative,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Recursive => write!(f, "recursive"),
            SearchMode::Iterative => write!(f, "iterative"),
        }
    }
}

/// Configuration for the path tracer
#[derive(Debug, Clone, Default)]
pub struct TracerConfig {
    /// Search strategy
    pub search: SearchMode,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of times a free cell was given a step index
    pub cells_marked: usize,
    /// Number of times a dead-end cell was reset to free
    pub cells_reset: usize,
}

/// Result of a solve that got past exit selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveOutcome {
    /// The grid now holds the path `1..=length` from start to `exit`
    Solved {
        exit: Position,
        length: usize,
        stats: SearchStats,
    },
    /// No connected path to `exit`; the grid is back to its input state
    NoPath { exit: Position, stats: SearchStats },
}

impl SolveOutcome {
    pub fn exit(&self) -> Position {
        match self {
            SolveOutcome::Solved { exit, .. } | SolveOutcome::NoPath { exit, .. } => *exit,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            SolveOutcome::Solved { stats, .. } | SolveOutcome::NoPath { stats, .. } => *stats,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved { .. })
    }
}
