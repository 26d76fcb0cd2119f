mod config;
mod driver;
mod error;
mod logger;
mod steps;

use std::path::PathBuf;

use clap::Parser as ClapParser;
use log::{debug, info};
use strum::IntoEnumIterator;
use termcolor::{ColorChoice, StandardStream};

use crate::{
    config::DemoConfig,
    driver::{Run, render},
    error::DemoResult,
    logger::{TermLogger, level_from_verbosity},
    steps::StepKind,
};

#[derive(ClapParser)]
#[command(version, about)]
pub struct Arguments {
    /// Step function to evaluate (see `--list`)
    #[arg(short, long, value_parser = StepKind::parse)]
    step: Option<StepKind>,

    /// First input of the range (inclusive)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true, requires = "step")]
    from: i64,

    /// Last input of the range (inclusive)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true, requires = "step")]
    to: i64,

    /// Path to a TOML file listing `[[run]]` tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List the available step functions and exit
    #[arg(long)]
    list: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Arguments::parse();

    if let Err(error) = run(args) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

fn run(args: Arguments) -> DemoResult<()> {
    TermLogger::new(level_from_verbosity(args.verbose), ColorChoice::Auto).install()?;

    if args.list {
        for kind in StepKind::iter() {
            println!("{kind}");
        }
        return Ok(());
    }

    let runs = match args.step {
        Some(step) => vec![Run::new(step, args.from, args.to)?],
        None => {
            let config = match &args.config {
                Some(path) => DemoConfig::load_from_toml(path)?,
                None => DemoConfig::load_default()?,
            };
            let runs = config.resolve()?;
            if runs.is_empty() {
                debug!("No runs configured, using the defaults");
                Run::defaults()
            } else {
                runs
            }
        }
    };

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for run in &runs {
        let rows = run.evaluate();
        render(&mut stdout, run.step, &rows)?;
    }
    info!("Completed {} run(s)", runs.len());
    Ok(())
}
