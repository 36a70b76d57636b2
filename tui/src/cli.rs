//! Parsing command-line arguments.

use crate::tui::explore;
use automata_lib::{Config, Rule, Seed, Status, World, ALIVE};
use clap::Parser;
use std::{error::Error, fs, path::PathBuf};

/// An elementary cellular automaton explorer for the terminal.
///
/// Evolves a Wolfram-style elementary rule from a seed row and draws
/// each generation as one line, the way the Automata widget paints one
/// pixel row per generation.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Args {
    /// Width of the visible window, clamped to [100, 1000]
    #[arg(short = 'x', long)]
    width: Option<i32>,

    /// Number of generations to compute, clamped to [100, 1000]
    #[arg(short = 'y', long)]
    height: Option<i32>,

    /// Rule number; numeric input is rounded and clamped to [0, 255],
    /// anything else means rule 0
    #[arg(short, long)]
    rule: Option<String>,

    /// How generation 0 is seeded: "center" or "random"
    #[arg(short, long)]
    seed: Option<String>,

    /// Seed for the random source, to make the "random" seed mode
    /// reproducible
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Reads the configuration from a TOML file;
    /// other options override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prints the whole evolution to stdout instead of entering the TUI
    #[arg(short = 'n', long)]
    no_tui: bool,
}

pub(crate) fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(width) = args.width {
        config = config.set_width(width);
    }
    if let Some(height) = args.height {
        config = config.set_height(height);
    }
    if let Some(rule) = &args.rule {
        config = config.set_rule(rule.parse::<Rule>().unwrap_or_default());
    }
    if let Some(seed) = &args.seed {
        config = config.set_seed(Seed::from_attr(seed));
    }
    if args.rng_seed.is_some() {
        config = config.set_rng_seed(args.rng_seed);
    }

    let world = config.world();
    log::debug!(
        "effective configuration: {}x{}, rule {}, {} seed",
        world.width(),
        world.height(),
        world.rule(),
        world.seed()
    );

    if args.no_tui {
        print_evolution(world);
        Ok(())
    } else {
        explore(world)
    }
}

/// Prints the whole evolution, one generation per line.
///
/// Columns are centered like the widget's canvas: column `c` shows the
/// cell at x-coordinate `c - width / 2`.
fn print_evolution(mut world: World) {
    let width = world.width();
    let mut status = Status::Evolving;
    loop {
        let row: String = (0..width)
            .map(|c| {
                if world.get_cell_state(c - width / 2) == ALIVE {
                    'o'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{}", row);
        if status == Status::Done {
            break;
        }
        status = world.run(Some(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition() {
        Args::command().debug_assert();
    }
}
