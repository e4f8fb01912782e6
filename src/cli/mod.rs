//! Command-line interface for todo
//!
//! This module defines the CLI structure using clap derive macros.
//! Command implementations live in the submodules.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::error::Result;
use crate::seed::{self, SeedSource};
use crate::store::TaskStore;
use crate::view::Lane;

mod tasks;
mod tui;

/// todo - Todo Board
///
/// Keeps a list of tasks split into urgent, normal and completed lanes.
/// Tasks live in memory only; the seed file is read at startup and never written.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (defaults to ./.todo.toml when present)
    #[arg(long, global = true, env = "TODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file with the initial task list
    #[arg(long, global = true, env = "TODO_SEED")]
    pub seed: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Include task descriptions in listings
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show tasks grouped into lanes
    List {
        /// Only show one lane
        #[arg(long, value_enum)]
        lane: Option<LaneArg>,
    },

    /// Count tasks
    Count {
        /// Only count one lane
        #[arg(long, value_enum)]
        lane: Option<LaneArg>,
    },

    /// Apply a JSON-lines script of add/remove/toggle operations, then show the board
    Replay {
        /// Script file, or "-" for stdin
        script: String,
    },

    /// Open the interactive board
    Tui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LaneArg {
    Urgent,
    Normal,
    Completed,
}

impl From<LaneArg> for Lane {
    fn from(value: LaneArg) -> Self {
        match value {
            LaneArg::Urgent => Lane::Urgent,
            LaneArg::Normal => Lane::Normal,
            LaneArg::Completed => Lane::Completed,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let ctx = load_context(self.config.as_deref(), self.seed.as_deref())?;
        match self.command {
            Commands::List { lane } => tasks::run_list(
                ctx,
                tasks::ListOptions {
                    lane: lane.map(Lane::from),
                    verbose: self.verbose,
                    json: self.json,
                    quiet: self.quiet,
                },
            ),
            Commands::Count { lane } => tasks::run_count(
                ctx,
                tasks::CountOptions {
                    lane: lane.map(Lane::from),
                    json: self.json,
                    quiet: self.quiet,
                },
            ),
            Commands::Replay { script } => tasks::run_replay(
                ctx,
                tasks::ReplayOptions {
                    script,
                    verbose: self.verbose,
                    json: self.json,
                    quiet: self.quiet,
                },
            ),
            Commands::Tui => tui::run(
                ctx,
                tui::TuiOptions {
                    json: self.json,
                    quiet: self.quiet,
                },
            ),
        }
    }
}

pub(crate) struct Context {
    pub config: Config,
    pub source: SeedSource,
    pub store: TaskStore,
    pub warnings: Vec<String>,
}

fn load_context(config_path: Option<&Path>, seed_path: Option<&Path>) -> Result<Context> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::load_from_dir(&std::env::current_dir()?),
    };
    let source = seed::resolve(&config, seed_path);
    let tasks = seed::load_source(&source)?;
    let mut warnings = Vec::new();
    if tasks.is_empty() {
        warnings.push(format!("seed {} has no tasks", source.label()));
    }
    let store = TaskStore::with_strategy(tasks, config.ids.strategy()?);
    Ok(Context {
        config,
        source,
        store,
        warnings,
    })
}
