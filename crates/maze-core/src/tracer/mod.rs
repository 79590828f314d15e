//! Path tracer.
//!
//! Validates the start, picks an exit on the border, then runs the backtracking search
//! that writes the path into the caller's grid.

mod backtrack;
mod exit;
mod types;

use crate::{Grid, MazeError, MazeResult, Position};

pub use types::{SearchMode, SearchStats, SolveOutcome, TracerConfig};

/// Traces one path from a start cell to a border exit, in place.
///
/// The tracer borrows the grid mutably for its whole lifetime; nothing is copied, so once
/// the tracer is dropped the caller reads the marked path from its own grid.
pub struct PathTracer<'a> {
    grid: &'a mut Grid,
    start: Position,
    exit: Option<Position>,
    solved: bool,
    height: usize,
    width: usize,
    config: TracerConfig,
    outcome: Option<SolveOutcome>,
}

impl<'a> PathTracer<'a> {
    /// Create a tracer starting at (`start_row`, `start_col`) with the default configuration
    pub fn new(grid: &'a mut Grid, start_row: i64, start_col: i64) -> MazeResult<Self> {
        Self::with_config(grid, start_row, start_col, TracerConfig::default())
    }

    /// Create a tracer with a custom configuration.
    ///
    /// Fails with [`MazeError::NullGrid`] for an absent grid, [`MazeError::InvalidArgument`]
    /// for a negative coordinate or a start on a wall, and [`MazeError::OutOfRange`] when
    /// the row is past the grid's height or the column past its width.
    pub fn with_config(
        grid: &'a mut Grid,
        start_row: i64,
        start_col: i64,
        config: TracerConfig,
    ) -> MazeResult<Self> {
        if grid.is_empty() {
            return Err(MazeError::NullGrid);
        }

        if start_row < 0 || start_col < 0 {
            return Err(MazeError::InvalidArgument(format!(
                "start ({}, {}) can't be negative",
                start_row, start_col
            )));
        }

        let height = grid.height();
        let width = grid.width();
        let out_of_range = MazeError::OutOfRange {
            row: start_row,
            col: start_col,
            height,
            width,
        };

        let row = usize::try_from(start_row).map_err(|_| out_of_range.clone())?;
        let col = usize::try_from(start_col).map_err(|_| out_of_range.clone())?;
        if row >= height || col >= width {
            return Err(out_of_range);
        }

        let start = Position::new(row, col);
        if grid.is_wall(start) {
            return Err(MazeError::InvalidArgument(format!("start {} is a wall", start)));
        }

        Ok(Self {
            grid,
            start,
            exit: None,
            solved: false,
            height,
            width,
            config,
            outcome: None,
        })
    }

    /// Pick an exit and trace a path to it.
    ///
    /// Fails with [`MazeError::NoExit`], leaving the grid untouched, when the border has
    /// fewer than two open cells. An exit that can't be reached is not an error: the
    /// result is [`SolveOutcome::NoPath`] and the grid is back to its input state.
    ///
    /// A tracer solves once; later calls return the first outcome.
    pub fn solve(&mut self) -> MazeResult<SolveOutcome> {
        if let Some(outcome) = self.outcome {
            return Ok(outcome);
        }

        let exit = exit::select_exit(&*self.grid, self.start)?;
        self.exit = Some(exit);
        log::debug!(
            "tracing {}x{} grid from {} to {} ({} search)",
            self.height,
            self.width,
            self.start,
            exit,
            self.config.search
        );

        let run = backtrack::search(&mut *self.grid, self.start, exit, self.config.search);
        self.solved = run.solved;

        let outcome = if run.solved {
            SolveOutcome::Solved {
                exit,
                length: self.grid.get(exit) as usize,
                stats: run.stats,
            }
        } else {
            SolveOutcome::NoPath {
                exit,
                stats: run.stats,
            }
        };
        log::debug!("{:?}", outcome);

        self.outcome = Some(outcome);
        Ok(outcome)
    }

    /// Current state of the grid, with the path once solved
    pub fn maze(&self) -> &Grid {
        &*self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// The selected exit, once `solve` got past exit selection
    pub fn exit(&self) -> Option<Position> {
        self.exit
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Cells holding a step index, ordered by step
    pub fn path(&self) -> Vec<Position> {
        let mut cells: Vec<(i32, Position)> = self
            .grid
            .positions()
            .map(|pos| (self.grid.get(pos), pos))
            .filter(|&(step, _)| step > 0)
            .collect();
        cells.sort_unstable();
        cells.into_iter().map(|(_, pos)| pos).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FREE, WALL};

    const MODES: [SearchMode; 2] = [SearchMode::Recursive, SearchMode::Iterative];

    const SAMPLE: &str = "
        -1 -1 -1 -1 -1 -1
         0  0  0 -1  0  0
        -1  0 -1 -1  0 -1
        -1  0 -1 -1  0  0
         0  0  0  0  0 -1
        -1 -1 -1 -1 -1 -1
    ";

    fn sample() -> Grid {
        Grid::from_string(SAMPLE).unwrap()
    }

    fn corners_walled() -> Grid {
        Grid::from_rows(vec![vec![-1, 0, -1], vec![0, 0, 0], vec![-1, 0, -1]]).unwrap()
    }

    fn config(search: SearchMode) -> TracerConfig {
        TracerConfig { search }
    }

    /// Path values are 1..=len, consecutive cells are neighbors, everything else is as before
    fn assert_valid_path(original: &Grid, solved: &Grid, path: &[Position]) {
        for (idx, pos) in path.iter().enumerate() {
            assert_eq!(solved.get(*pos), idx as i32 + 1);
            if idx > 0 {
                assert_eq!(path[idx - 1].manhattan_distance(*pos), 1, "gap before {}", pos);
            }
        }
        for pos in original.positions() {
            if !path.contains(&pos) {
                assert_eq!(solved.get(pos), original.get(pos), "cell {} changed", pos);
            }
        }
    }

    #[test]
    fn test_interior_start() {
        for mode in MODES {
            let mut grid = sample();
            let outcome = {
                let mut tracer = PathTracer::with_config(&mut grid, 3, 1, config(mode)).unwrap();
                let outcome = tracer.solve().unwrap();

                assert!(tracer.is_solved());
                assert_eq!(tracer.exit(), Some(Position::new(4, 0)));
                assert_eq!(
                    tracer.path(),
                    vec![Position::new(3, 1), Position::new(4, 1), Position::new(4, 0)]
                );
                outcome
            };

            assert!(matches!(outcome, SolveOutcome::Solved { length: 3, .. }));
            // the caller's grid holds the path once the tracer is gone
            assert_eq!(grid.get(Position::new(3, 1)), 1);
            assert_eq!(grid.get(Position::new(4, 1)), 2);
            assert_eq!(grid.get(Position::new(4, 0)), 3);
            assert_eq!(grid.get(Position::new(2, 1)), FREE);
            assert_eq!(grid.get(Position::new(3, 4)), FREE);
        }
    }

    #[test]
    fn test_border_start() {
        for mode in MODES {
            let original = sample();
            let mut grid = original.clone();
            let mut tracer = PathTracer::with_config(&mut grid, 3, 5, config(mode)).unwrap();

            let outcome = tracer.solve().unwrap();
            let path = tracer.path();

            assert_eq!(outcome.exit(), Position::new(1, 5));
            assert_eq!(
                path,
                vec![
                    Position::new(3, 5),
                    Position::new(3, 4),
                    Position::new(2, 4),
                    Position::new(1, 4),
                    Position::new(1, 5),
                ]
            );
            assert_valid_path(&original, tracer.maze(), &path);
        }
    }

    #[test]
    fn test_equidistant_exits_pick_first_scanned() {
        let mut grid = corners_walled();
        let mut tracer = PathTracer::new(&mut grid, 0, 1).unwrap();

        let outcome = tracer.solve().unwrap();

        assert_eq!(outcome.exit(), Position::new(1, 0));
        assert_eq!(
            tracer.maze().to_rows(),
            vec![vec![-1, 1, -1], vec![3, 2, 0], vec![-1, 0, -1]]
        );
    }

    #[test]
    fn test_no_path_leaves_grid_unchanged() {
        for mode in MODES {
            let original = Grid::from_string(
                "
                -1  0 -1 -1 -1
                -1  0 -1  0 -1
                -1  0 -1  0  0
                -1 -1 -1 -1 -1
                ",
            )
            .unwrap();
            let mut grid = original.clone();
            let mut tracer = PathTracer::with_config(&mut grid, 0, 1, config(mode)).unwrap();

            let outcome = tracer.solve().unwrap();

            assert_eq!(outcome.exit(), Position::new(2, 4));
            assert!(!outcome.is_solved());
            assert!(!tracer.is_solved());
            assert!(tracer.path().is_empty());
            assert_eq!(tracer.maze().get(Position::new(2, 4)), FREE);
            assert_eq!(tracer.maze(), &original);
        }
    }

    #[test]
    fn test_no_exit_before_mutation() {
        let original = Grid::from_string(
            "
            -1  0 -1
            -1  0 -1
            -1 -1 -1
            ",
        )
        .unwrap();
        let mut grid = original.clone();
        let mut tracer = PathTracer::new(&mut grid, 0, 1).unwrap();

        let err = tracer.solve().unwrap_err();

        assert_eq!(err, MazeError::NoExit { open_border_cells: 1 });
        assert_eq!(tracer.exit(), None);
        assert_eq!(tracer.maze(), &original);
    }

    #[test]
    fn test_solve_twice_returns_first_outcome() {
        let mut grid = sample();
        let mut tracer = PathTracer::new(&mut grid, 3, 1).unwrap();

        let first = tracer.solve().unwrap();
        let snapshot = tracer.maze().clone();
        let second = tracer.solve().unwrap();

        assert_eq!(first, second);
        assert_eq!(tracer.maze(), &snapshot);
    }

    #[test]
    fn test_null_grid() {
        let mut grid = Grid::default();
        assert!(matches!(PathTracer::new(&mut grid, 0, 0), Err(MazeError::NullGrid)));
    }

    #[test]
    fn test_negative_start() {
        let mut grid = sample();
        assert!(matches!(
            PathTracer::new(&mut grid, -1, 1),
            Err(MazeError::InvalidArgument(_))
        ));
        assert!(matches!(
            PathTracer::new(&mut grid, 1, -3),
            Err(MazeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_out_of_range_start() {
        let mut grid = Grid::new(3, 5);
        for (row, col) in [(3, 0), (7, 0), (0, 5), (0, 9)] {
            let err = PathTracer::new(&mut grid, row, col).err();
            assert_eq!(
                err,
                Some(MazeError::OutOfRange {
                    row,
                    col,
                    height: 3,
                    width: 5
                })
            );
        }
        // rows are checked against height and columns against width
        assert!(PathTracer::new(&mut grid, 2, 4).is_ok());
    }

    #[test]
    fn test_start_on_wall() {
        let mut grid = sample();
        let err = PathTracer::new(&mut grid, 0, 0).err();
        assert!(matches!(err, Some(MazeError::InvalidArgument(msg)) if msg.contains("wall")));
    }

    #[test]
    fn test_invalid_arguments_fail_the_same_way_twice() {
        let mut grid = sample();
        for (row, col) in [(-1, 0), (9, 0), (2, 0)] {
            let first = PathTracer::new(&mut grid, row, col).err();
            let second = PathTracer::new(&mut grid, row, col).err();

            assert!(first.is_some());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_stats_reported() {
        let mut grid = sample();
        let mut tracer = PathTracer::new(&mut grid, 3, 5).unwrap();

        let stats = tracer.solve().unwrap().stats();

        // 5 cells stay on the path, the rest were marked and reset
        assert_eq!(stats.cells_marked - stats.cells_reset, 5);
        assert!(stats.cells_reset > 0);
    }

    #[test]
    fn test_walls_stay_walls() {
        let original = sample();
        let mut grid = original.clone();
        PathTracer::new(&mut grid, 3, 1).unwrap().solve().unwrap();

        for pos in original.positions() {
            if original.get(pos) == WALL {
                assert_eq!(grid.get(pos), WALL);
            } else {
                assert!(grid.get(pos) >= FREE);
            }
        }
    }
}
