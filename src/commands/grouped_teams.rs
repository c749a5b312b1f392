//! `grouped-teams` command implementation

use std::io::{self, Write};

use tracing::info;

use crate::{
    bdl::{types::Team, BdlClient},
    stats::divisions::group_by_division,
    Result,
};

/// Handle the grouped teams command
pub async fn handle_grouped_teams(client: &BdlClient) -> Result<()> {
    let teams = client.teams().await?;
    info!(teams = teams.len(), "loaded teams");

    let stdout = io::stdout();
    write_grouped_teams(&teams, &mut stdout.lock())
}

/// Division name on its own line, then one tab-indented `Full Name (ABB)` line per team.
pub fn write_grouped_teams<W: Write>(teams: &[Team], out: &mut W) -> Result<()> {
    for group in group_by_division(teams) {
        writeln!(out, "{}", group.division)?;
        for team in group.teams {
            writeln!(out, "\t{}", team.label())?;
        }
    }
    Ok(())
}
