//! Depth-first backtracking search.
//!
//! Each visited free cell gets the next step index; a cell whose subtree never reaches the
//! exit is reset to free on the way back. Once the exit is marked the solved flag stops any
//! further marking, so the committed path stays in the grid while the search unwinds.

use super::types::{SearchMode, SearchStats};
use crate::{Grid, Position, FREE};

/// Neighbor visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Down,
    Right,
    Up,
    Left,
}

const ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
];

/// One marked cell on the current path prefix
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Position,
    step: i32,
    next: usize,
}

pub(crate) struct SearchRun {
    pub solved: bool,
    pub stats: SearchStats,
}

struct Search<'g> {
    grid: &'g mut Grid,
    exit: Position,
    height: usize,
    width: usize,
    solved: bool,
    stats: SearchStats,
}

/// Trace a path from `start` to `exit`, writing step indices into `grid`
pub(crate) fn search(grid: &mut Grid, start: Position, exit: Position, mode: SearchMode) -> SearchRun {
    let mut search = Search {
        height: grid.height(),
        width: grid.width(),
        grid,
        exit,
        solved: false,
        stats: SearchStats::default(),
    };

    match mode {
        SearchMode::Recursive => search.explore(start, 0),
        SearchMode::Iterative => search.explore_iterative(start),
    }

    SearchRun {
        solved: search.solved,
        stats: search.stats,
    }
}

impl Search<'_> {
    /// Mark `pos` as step `step + 1` if the search may enter it.
    ///
    /// Only upper bounds are checked here; neighbors past the lower edge are never produced.
    fn enter(&mut self, pos: Position, step: i32) -> Option<Frame> {
        if self.solved || pos.row >= self.height || pos.col >= self.width {
            return None;
        }
        if self.grid.get(pos) != FREE {
            return None;
        }

        let step = step + 1;
        self.grid.set(pos, step);
        self.stats.cells_marked += 1;

        if pos == self.exit {
            self.solved = true;
        }

        Some(Frame { pos, step, next: 0 })
    }

    /// Undo the mark on `pos` unless the exit has been reached
    fn leave(&mut self, pos: Position) {
        if !self.solved {
            self.grid.set(pos, FREE);
            self.stats.cells_reset += 1;
            log::trace!("backtrack from {}", pos);
        }
    }

    /// The neighbor of `pos` in direction `dir`, if it is inside the grid and free
    fn free_neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let next = match dir {
            Direction::Down if pos.row + 1 < self.height => Position::new(pos.row + 1, pos.col),
            Direction::Right if pos.col + 1 < self.width => Position::new(pos.row, pos.col + 1),
            Direction::Up => Position::new(pos.row.checked_sub(1)?, pos.col),
            Direction::Left => Position::new(pos.row, pos.col.checked_sub(1)?),
            _ => return None,
        };

        (self.grid.get(next) == FREE).then_some(next)
    }

    fn explore(&mut self, pos: Position, step: i32) {
        let Some(frame) = self.enter(pos, step) else {
            return;
        };

        for dir in ORDER {
            if let Some(next) = self.free_neighbor(frame.pos, dir) {
                self.explore(next, frame.step);
            }
        }

        self.leave(frame.pos);
    }

    /// Same visiting order as `explore`, driven by an explicit stack
    fn explore_iterative(&mut self, start: Position) {
        let mut stack: Vec<Frame> = self.enter(start, 0).into_iter().collect();

        while let Some(top) = stack.last_mut() {
            let (pos, step) = (top.pos, top.step);

            if let Some(&dir) = ORDER.get(top.next) {
                top.next += 1;
                if let Some(next) = self.free_neighbor(pos, dir) {
                    if let Some(child) = self.enter(next, step) {
                        stack.push(child);
                    }
                }
            } else {
                stack.pop();
                self.leave(pos);
            }
        }
    }
}
