use maze_core::{Grid, PathTracer, Position, SolveOutcome};
use serde::Serialize;

/// JSON output of one solve
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub start: Position,
    #[serde(flatten)]
    pub outcome: SolveOutcome,
    pub path: Vec<Position>,
    pub grid: &'a Grid,
}

impl<'a> Report<'a> {
    pub fn new(tracer: &'a PathTracer<'_>, outcome: SolveOutcome) -> Self {
        Self {
            start: tracer.start(),
            outcome,
            path: tracer.path(),
            grid: tracer.maze(),
        }
    }
}
