//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use types::{JsonStyle, Season};

use crate::bdl::BDL_BASE_URL;

/// Connection and logging options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL (override to point at a mirror or mock server).
    #[clap(long, global = true, hide = true, default_value = BDL_BASE_URL)]
    pub base_url: String,

    /// Abort a request that takes longer than this many seconds.
    /// Requests wait indefinitely when omitted.
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (repeatable): `-v` info, `-vv` debug.
    #[clap(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Parser)]
#[clap(
    name = "bdl-stats",
    version,
    about = "NBA statistics from the balldontlie API"
)]
pub struct Cli {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch all teams and print them grouped by division.
    GroupedTeams,

    /// Print the tallest and heaviest players matching a name search.
    PlayerStats {
        /// Player name (or part of it) to search for.
        #[clap(long)]
        name: String,
    },

    /// Win/loss record of every team in a season, split by home and visitor games.
    TeamsStats {
        /// Season, usually its starting year (e.g. 2021).
        #[clap(long)]
        season: Season,

        /// Output target: stdout | csv | json.
        #[clap(long, default_value = "stdout")]
        output: String,

        /// Directory that receives `teams-stats.csv` / `teams-stats.json`.
        #[clap(long, default_value = ".")]
        output_dir: PathBuf,

        /// Layout of the JSON report file.
        #[clap(long, value_enum, default_value_t = JsonStyle::default())]
        json_style: JsonStyle,
    },
}

impl Commands {
    /// Generic message printed when the command fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Commands::GroupedTeams => "Failed to get the teams.",
            Commands::PlayerStats { .. } => "Failed to get the player statistics.",
            Commands::TeamsStats { .. } => "Failed to get the teams statistics.",
        }
    }
}
