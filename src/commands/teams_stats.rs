//! `teams-stats` command implementation

use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    bdl::BdlClient,
    cli::types::{JsonStyle, OutputSelector, Season},
    report::render,
    stats::season::aggregate_season,
    Result, StatsError,
};

/// Configuration parameters for the teams stats command.
#[derive(Debug, Clone)]
pub struct TeamsStatsParams {
    pub season: Season,
    /// Raw `--output` value; anything other than `stdout`, `csv` or `json`
    /// produces no report.
    pub output: String,
    pub output_dir: PathBuf,
    pub json_style: JsonStyle,
}

/// Handle the teams stats command.
///
/// Fetches every game of the season, aggregates home/visitor wins and
/// losses per team and renders them to the selected target.
///
/// # Errors
///
/// Returns an error if any page of games cannot be fetched or decoded, or if
/// the report cannot be written. An unsupported output selector is not an
/// error: it is logged and nothing is fetched or written.
pub async fn handle_teams_stats(client: &BdlClient, params: TeamsStatsParams) -> Result<()> {
    let selector = match params.output.parse::<OutputSelector>() {
        Ok(selector) => selector,
        Err(StatsError::UnsupportedOutput { selector }) => {
            info!(%selector, "unsupported output target, nothing to do");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let season = &params.season;
    let games = client
        .games(season, |page, records| {
            if page == 1 {
                println!("Loading data for {} season...", season);
            }
            debug!(page, records, "games page received");
        })
        .await?;

    let standings = aggregate_season(&games);
    info!(
        games = games.len(),
        teams = standings.len(),
        "aggregated season"
    );

    if let Some(path) = render(&standings, selector, &params.output_dir, params.json_style)? {
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
