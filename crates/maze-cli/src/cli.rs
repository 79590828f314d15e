use clap::{Parser, ValueEnum};
use maze_core::SearchMode;
use std::path::PathBuf;

/// Trace a path through a maze grid
#[derive(Debug, Parser)]
#[command(name = "maze", version, about)]
pub struct Cli {
    /// Maze file: `.json` holds an array of rows, anything else the text format
    /// (whitespace-separated cells, one row per line). Omit to run the built-in sample.
    #[arg(short, long, value_name = "FILE")]
    pub maze: Option<PathBuf>,

    /// Start row
    #[arg(short, long, allow_negative_numbers = true, requires = "col")]
    pub row: Option<i64>,

    /// Start column
    #[arg(short, long, allow_negative_numbers = true, requires = "row")]
    pub col: Option<i64>,

    /// Search strategy
    #[arg(long, value_enum, env = "MAZE_SEARCH", default_value_t = SearchArg::Recursive)]
    pub search: SearchArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Don't colorize the grid
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Start coordinates, if both were given
    pub fn start(&self) -> Option<(i64, i64)> {
        self.row.zip(self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchArg {
    Recursive,
    Iterative,
}

impl From<SearchArg> for SearchMode {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::Recursive => SearchMode::Recursive,
            SearchArg::Iterative => SearchMode::Iterative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The grid as text
    Text,
    /// A JSON report with the outcome, path, and grid
    Json,
}
