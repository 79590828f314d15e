use crate::{MazeError, MazeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell value of an impassable wall
pub const WALL: i32 = -1;
/// Cell value of a free, unvisited cell
pub const FREE: i32 = 0;

/// A cell position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Sum of absolute row and column differences
    pub fn manhattan_distance(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular maze grid, stored row-major.
///
/// Cells hold [`WALL`], [`FREE`], or a positive step index written by the path tracer.
/// A grid with no rows or no columns is the "absent" grid; it exists so loaders have
/// something to return for empty input, and the tracer refuses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Create a grid of the given size with every cell free
    pub fn new(height: usize, width: usize) -> Self {
        if height == 0 || width == 0 {
            return Self::default();
        }
        Self {
            height,
            width,
            cells: vec![FREE; height * width],
        }
    }

    /// Build a grid from a list of rows.
    ///
    /// Every row must have the same length and every value must be `-1` or non-negative.
    /// An empty list (or empty rows) yields the absent grid.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> MazeResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(MazeError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                if value < WALL {
                    return Err(MazeError::InvalidCell { row, col, value });
                }
                cells.push(value);
            }
        }

        if width == 0 {
            return Ok(Self::default());
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Parse the text format: whitespace-separated integers, one row per non-blank line.
    ///
    /// This is also what `Display` prints, so rendered grids parse back.
    pub fn from_string(s: &str) -> MazeResult<Self> {
        let mut rows = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i32>().map_err(|_| MazeError::Parse {
                        line: idx + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<MazeResult<Vec<i32>>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// True for the absent grid
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// True for cells in the first/last row or first/last column
    pub fn is_border(&self, pos: Position) -> bool {
        pos.row == 0 || pos.row == self.height - 1 || pos.col == 0 || pos.col == self.width - 1
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.in_bounds(pos), "{} outside {}x{}", pos, self.height, self.width);
        pos.row * self.width + pos.col
    }

    /// Value at `pos`. Panics when `pos` is out of bounds.
    pub fn get(&self, pos: Position) -> i32 {
        self.cells[self.index(pos)]
    }

    /// Overwrite the value at `pos`. Panics when `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, value: i32) {
        let idx = self.index(pos);
        self.cells[idx] = value;
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.get(pos) == WALL
    }

    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos) == FREE
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // chunks(0) panics, and the absent grid has no rows anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Position::new(row, col)))
    }
}

impl TryFrom<Vec<Vec<i32>>> for Grid {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<i32>>) -> MazeResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<i32>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

/// Each cell right-aligned to two characters, two spaces between cells, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>2}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
        -1 -1 -1
         0  0 -1
        -1  0 -1
    ";

    #[test]
    fn test_from_string() {
        let grid = Grid::from_string(SAMPLE).unwrap();

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
        assert!(grid.is_wall(Position::new(0, 0)));
        assert!(grid.is_free(Position::new(1, 0)));
        assert_eq!(grid.get(Position::new(2, 1)), FREE);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = Grid::from_string("0 0\n0 x\n").unwrap_err();
        assert_eq!(
            err,
            MazeError::Parse {
                line: 2,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::from_rows(vec![vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            MazeError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_invalid_cell_rejected() {
        let err = Grid::from_rows(vec![vec![0, -2]]).unwrap_err();
        assert!(matches!(err, MazeError::InvalidCell { row: 0, col: 1, value: -2 }));
    }

    #[test]
    fn test_empty_input_is_absent_grid() {
        assert!(Grid::from_string("  \n\n").unwrap().is_empty());
        assert!(Grid::from_rows(vec![vec![], vec![]]).unwrap().is_empty());
        assert!(Grid::new(0, 4).is_empty());
        assert_eq!(Grid::default().rows().count(), 0);
    }

    #[test]
    fn test_border_cells() {
        let grid = Grid::new(3, 4);

        assert!(grid.is_border(Position::new(0, 2)));
        assert!(grid.is_border(Position::new(2, 1)));
        assert!(grid.is_border(Position::new(1, 0)));
        assert!(grid.is_border(Position::new(1, 3)));
        assert!(!grid.is_border(Position::new(1, 1)));
        assert!(!grid.is_border(Position::new(1, 2)));
    }

    #[test]
    fn test_display_spacing() {
        let mut grid = Grid::from_rows(vec![vec![-1, 0, 0], vec![0, 0, -1]]).unwrap();
        grid.set(Position::new(0, 2), 12);

        assert_eq!(grid.to_string(), "-1   0  12\n 0   0  -1\n");
    }

    #[test]
    fn test_display_parses_back() {
        let mut grid = Grid::from_string(SAMPLE).unwrap();
        grid.set(Position::new(1, 0), 1);
        grid.set(Position::new(1, 1), 2);

        let reparsed = Grid::from_string(&grid.to_string()).unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_json_rows() {
        let grid = Grid::from_string(SAMPLE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!(json, "[[-1,-1,-1],[0,0,-1],[-1,0,-1]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        assert!(serde_json::from_str::<Grid>("[[0,0],[0]]").is_err());
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(3, 1);
        assert_eq!(a.manhattan_distance(Position::new(4, 0)), 2);
        assert_eq!(a.manhattan_distance(Position::new(1, 5)), 6);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::new(2, 2);
        let all: Vec<Position> = grid.positions().collect();

        assert_eq!(
            all,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
    }
}
