use crossterm::style::Color;
use maze_core::{Position, FREE, WALL};

/// Color theme for grid output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Wall cells
    pub wall: Color,
    /// Free cells off the path
    pub free: Color,
    /// Path cells between start and exit
    pub path: Color,
    /// Start cell
    pub start: Color,
    /// Exit cell
    pub exit: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            wall: Color::Rgb { r: 70, g: 75, b: 90 },
            free: Color::Rgb { r: 140, g: 150, b: 180 },
            path: Color::Rgb { r: 80, g: 180, b: 255 },
            start: Color::Rgb { r: 255, g: 210, b: 100 },
            exit: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }

    /// Color for the cell at `pos` holding `value`
    pub fn cell_color(&self, pos: Position, value: i32, start: Position, exit: Option<Position>) -> Color {
        if pos == start {
            self.start
        } else if Some(pos) == exit {
            self.exit
        } else {
            match value {
                WALL => self.wall,
                FREE => self.free,
                _ => self.path,
            }
        }
    }
}
