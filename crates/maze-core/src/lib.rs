//! Maze path tracing.
//!
//! A [`Grid`] holds walls (`-1`) and free cells (`0`). [`PathTracer`] picks the border exit
//! nearest to a start cell and writes one path to it into the grid as step indices `1..=n`.
//!
//! ```
//! use maze_core::{Grid, PathTracer, Position};
//!
//! let mut grid = Grid::from_string("-1 0 -1\n 0 0 -1\n-1 -1 -1").unwrap();
//! let mut tracer = PathTracer::new(&mut grid, 0, 1).unwrap();
//! let outcome = tracer.solve().unwrap();
//!
//! assert_eq!(outcome.exit(), Position::new(1, 0));
//! assert_eq!(grid.to_rows(), vec![vec![-1, 1, -1], vec![3, 2, -1], vec![-1, -1, -1]]);
//! ```

mod error;
mod grid;
mod tracer;

pub use error::{MazeError, MazeResult};
pub use grid::{Grid, Position, FREE, WALL};
pub use tracer::{PathTracer, SearchMode, SearchStats, SolveOutcome, TracerConfig};
