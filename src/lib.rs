//! balldontlie NBA statistics CLI library
//!
//! Fetches paginated collections from the public balldontlie API and derives
//! a few reports from them.
//!
//! ## Features
//!
//! - **Division listing**: all teams grouped by division, in API order
//! - **Player extremes**: tallest and heaviest player matching a name search,
//!   converted to meters and kilograms
//! - **Season standings**: per-team wins and losses split by home/visitor
//!   games, printed or written to `teams-stats.csv` / `teams-stats.json`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bdl_stats::{bdl::{BdlClient, ClientConfig}, stats::aggregate_season, Season};
//!
//! # async fn example() -> bdl_stats::Result<()> {
//! let client = BdlClient::new(ClientConfig::default())?;
//! let games = client.games(&Season::new("2021"), |_, _| {}).await?;
//! let standings = aggregate_season(&games);
//!
//! for (team, tally) in standings.iter() {
//!     println!("{team}: {} home wins", tally.home_wins);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bdl;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use bdl::{BdlClient, ClientConfig};
pub use cli::types::{JsonStyle, OutputSelector, Season};
pub use error::{ConversionError, Result, StatsError};
