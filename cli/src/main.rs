mod logging;
mod report;
mod tui;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use studyboost_core::{AppConfig, Planner, YearFilter};

#[derive(Parser)]
#[command(name = "studyboost")]
#[command(about = "Calendar, classes and study settings for students", long_about = None)]
struct Cli {
    /// Config file (default: ~/.studyboost/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui {
        /// JSON file replayed into the session at startup
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Print semesters and their classes from a seed file
    Semesters {
        #[arg(long)]
        seed: PathBuf,
        /// Only show this year
        #[arg(long)]
        year: Option<String>,
    },
    /// Print assignments from a seed file
    Agenda {
        #[arg(long)]
        seed: PathBuf,
        /// YYYY-MM-DD, today, tomorrow, +Nd or +Nw
        #[arg(long)]
        date: Option<String>,
    },
}

/// An explicit `--seed` wins over the config's seed. No seed at all means an
/// empty session.
fn session(seed: Option<&Path>, config: &AppConfig) -> Result<Planner> {
    match seed.or(config.seed.as_deref()) {
        Some(path) => Planner::load_seed(path),
        None => Ok(Planner::new()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init(&config, cli.verbose)?;

    match cli.command {
        Some(Commands::Semesters { seed, year }) => {
            let planner = Planner::load_seed(&seed)?;
            let filter = YearFilter::from(year);
            match report::semesters_table(&planner, &filter) {
                Some(table) => println!("{}", table),
                None => println!("No semesters found for {}.", filter),
            }
        }
        Some(Commands::Agenda { seed, date }) => {
            let planner = Planner::load_seed(&seed)?;
            let date = date.as_deref().map(Planner::parse_user_date).transpose()?;
            match report::agenda_table(&planner, date) {
                Some(table) => println!("{}", table),
                None => println!("No assignments found."),
            }
        }
        Some(Commands::Tui { seed }) => {
            let planner = session(seed.as_deref(), &config)?;
            tui::run(planner, config.default_season)?;
        }
        None => {
            let planner = session(None, &config)?;
            tui::run(planner, config.default_season)?;
        }
    }
    Ok(())
}
