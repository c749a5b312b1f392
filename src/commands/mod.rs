//! Command implementations for the balldontlie statistics CLI

pub mod grouped_teams;
pub mod player_stats;
pub mod teams_stats;

use crate::{bdl::BdlClient, cli::Commands, Result};

use grouped_teams::handle_grouped_teams;
use player_stats::handle_player_stats;
use teams_stats::{handle_teams_stats, TeamsStatsParams};

/// Dispatch a parsed subcommand to its handler.
pub async fn run_command(client: &BdlClient, command: Commands) -> Result<()> {
    match command {
        Commands::GroupedTeams => handle_grouped_teams(client).await,
        Commands::PlayerStats { name } => handle_player_stats(client, &name).await,
        Commands::TeamsStats {
            season,
            output,
            output_dir,
            json_style,
        } => {
            handle_teams_stats(
                client,
                TeamsStatsParams {
                    season,
                    output,
                    output_dir,
                    json_style,
                },
            )
            .await
        }
    }
}
