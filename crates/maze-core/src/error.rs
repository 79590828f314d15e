use thiserror::Error;

/// Result type for maze operations
pub type MazeResult<T> = Result<T, MazeError>;

/// Errors raised while loading a grid or setting up a solve.
///
/// All of these surface synchronously: at grid loading, at tracer construction, or on
/// entry to [`crate::PathTracer::solve`]. A maze with no connecting path is not an error,
/// see [`crate::SolveOutcome::NoPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The grid is absent (no rows or no columns)
    #[error("grid can't be empty")]
    NullGrid,
    /// Negative start coordinate, or a start cell that is a wall
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Start coordinate past the grid's dimensions
    #[error("start ({row}, {col}) is out of range for a {height}x{width} grid")]
    OutOfRange {
        row: i64,
        col: i64,
        height: usize,
        width: usize,
    },
    /// Fewer than two open border cells, so no exit distinct from the start exists
    #[error("grid hasn't got an exit: {open_border_cells} open border cell(s), need at least 2")]
    NoExit { open_border_cells: usize },
    /// A token in the text format is not an integer
    #[error("line {line}: can't parse {token:?} as a cell value")]
    Parse { line: usize, token: String },
    /// Rows of different lengths
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Cell value that is neither a wall, free, nor a step index
    #[error("cell ({row}, {col}) holds {value}, expected -1 or a non-negative value")]
    InvalidCell { row: usize, col: usize, value: i32 },
}
