//! Decision Binary
//!
//! Loads a scenario file and prints the fugitive's chosen move.

use clap::Parser;
use colored::Colorize;
use fugitive::*;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Choose the fugitive's next move", long_about = None)]
struct Args {
    #[arg(required = true)]
    scenario: PathBuf,
    #[arg(
        long,
        default_value_t = MAX_DEPTH,
        help = "plies to search, counting the fugitive's move"
    )]
    depth: usize,
    #[arg(long, default_value_t = 30, help = "seconds before a slow decision is reported")]
    budget: u64,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let table = Scenario::load(&args.scenario)?.table()?;
    log::info!(
        "[decide] round {} of {}, fugitive on {}, pursuers on {:?}",
        table.round() + 1,
        table.setup().rounds(),
        table.fugitive(),
        table.occupied()
    );
    let ref mut evader = Evader::with_depth(args.depth);
    let mv = evader.decide(&table, Duration::from_secs(args.budget))?;
    let tickets = mv
        .tickets()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" + ");
    println!("{} {}", evader.name().bold(), mv.to_string().green());
    println!("{} {}", "spends".dimmed(), tickets.yellow());
    Ok(())
}
