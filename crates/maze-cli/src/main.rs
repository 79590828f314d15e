mod cli;
mod load;
mod render;
mod report;
mod theme;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Format};
use maze_core::{PathTracer, SolveOutcome, TracerConfig};
use report::Report;
use std::io::{self, IsTerminal};
use theme::Theme;

fn main() -> Result<()> {
    if std::env::var("MAZE_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let (mut grid, (row, col)) = match &cli.maze {
        Some(path) => {
            let Some(start) = cli.start() else {
                bail!("--row and --col are required with --maze");
            };
            (load::load_grid(path)?, start)
        }
        None => (
            load::sample_grid()?,
            cli.start().unwrap_or(load::SAMPLE_START),
        ),
    };

    let config = TracerConfig {
        search: cli.search.into(),
    };
    let mut tracer = PathTracer::with_config(&mut grid, row, col, config)
        .with_context(|| format!("can't start at ({}, {})", row, col))?;
    let outcome = tracer.solve()?;

    match cli.format {
        Format::Json => {
            let report = Report::new(&tracer, outcome);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Text => {
            let mut stdout = io::stdout().lock();
            if cli.plain || !stdout.is_terminal() {
                render::render_plain(&mut stdout, tracer.maze())?;
            } else {
                render::render_colored(
                    &mut stdout,
                    tracer.maze(),
                    tracer.start(),
                    tracer.exit(),
                    &Theme::default(),
                )?;
            }
        }
    }

    // An unreachable exit is a normal outcome: report it, exit 0
    match outcome {
        SolveOutcome::Solved { exit, length, .. } => {
            eprintln!("reached exit {} in {} steps", exit, length);
        }
        SolveOutcome::NoPath { exit, .. } => {
            eprintln!("no path from {} to exit {}", tracer.start(), exit);
        }
    }

    Ok(())
}
