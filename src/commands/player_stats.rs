//! `player-stats` command implementation
//!
//! Looks up every player matching a name search (all pages) and reports the
//! tallest and the heaviest of them in metric units.

use std::{
    fmt::Display,
    io::{self, Write},
};

use tracing::{info, warn};

use crate::{
    bdl::{types::Player, BdlClient},
    error::ConversionError,
    stats::{heaviest, tallest, units::pounds_to_kg},
    Result,
};

/// Shown in place of a measurement that could not be converted.
pub const UNCONVERTED: &str = "n/a";

/// Handle the player stats command
pub async fn handle_player_stats(client: &BdlClient, name: &str) -> Result<()> {
    let players = client.players(name).await?;
    info!(search = name, players = players.len(), "loaded players");

    let stdout = io::stdout();
    let stderr = io::stderr();
    write_player_stats(&players, &mut stdout.lock(), &mut stderr.lock())
}

/// Print the tallest and heaviest lines.
///
/// A conversion failure is reported on `err` and the line is still printed
/// with [`UNCONVERTED`] as the measurement.
pub fn write_player_stats<W: Write, E: Write>(
    players: &[Player],
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match tallest(players) {
        Some(found) => {
            let meters = converted_or_placeholder(found.measurement.to_meters(), err)?;
            writeln!(out, "The tallest player: {} {} meters", found.name, meters)?;
        }
        None => writeln!(out, "The tallest player: Not found")?,
    }

    match heaviest(players) {
        Some(found) => {
            let kg = converted_or_placeholder(pounds_to_kg(f64::from(found.measurement)), err)?;
            writeln!(out, "The heaviest player: {} {} kilograms", found.name, kg)?;
        }
        None => writeln!(out, "The heaviest player: Not found")?,
    }

    Ok(())
}

fn converted_or_placeholder<T: Display, E: Write>(
    converted: std::result::Result<T, ConversionError>,
    err: &mut E,
) -> Result<String> {
    match converted {
        Ok(value) => Ok(value.to_string()),
        Err(e) => {
            warn!(error = %e, "unit conversion failed");
            writeln!(err, "Couldn't convert the units")?;
            Ok(UNCONVERTED.to_string())
        }
    }
}
