//! Rendering of season standings to the console, a CSV file or a JSON file.

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    cli::types::{JsonStyle, OutputSelector},
    error::{Result, StatsError},
    stats::season::{SeasonStandings, TeamTally},
};


pub const CSV_FILE_NAME: &str = "teams-stats.csv";
pub const JSON_FILE_NAME: &str = "teams-stats.json";

pub const CSV_HEADER: [&str; 5] = [
    "Team name",
    "Won games as home team",
    "Won games as visitor team",
    "Lost games as home team",
    "Lost games as visitor team",
];

/// One team in the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRow {
    pub team_name: String,
    #[serde(rename = "Won games as home team")]
    pub home_wins: u32,
    #[serde(rename = "Won games as visitor team")]
    pub visitor_wins: u32,
    #[serde(rename = "Lost games as home team")]
    pub home_losses: u32,
    #[serde(rename = "Lost games as visitor team")]
    pub visitor_losses: u32,
}

impl TeamRow {
    pub fn new(label: &str, tally: &TeamTally) -> Self {
        Self {
            team_name: label.to_string(),
            home_wins: tally.home_wins,
            visitor_wins: tally.visitor_wins,
            home_losses: tally.home_losses,
            visitor_losses: tally.visitor_losses,
        }
    }
}

/// Send the standings to the selected target.
///
/// File targets are written under `output_dir` (truncating any previous
/// report) and their path is returned; the console target returns `None`.
pub fn render(
    standings: &SeasonStandings,
    selector: OutputSelector,
    output_dir: &Path,
    json_style: JsonStyle,
) -> Result<Option<PathBuf>> {
    match selector {
        OutputSelector::Stdout => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_console(standings, &mut out)?;
            Ok(None)
        }
        OutputSelector::Csv => {
            let path = output_dir.join(CSV_FILE_NAME);
            write_csv(standings, File::create(&path)?)?;
            info!(path = %path.display(), teams = standings.len(), "wrote CSV report");
            Ok(Some(path))
        }
        OutputSelector::Json => {
            let path = output_dir.join(JSON_FILE_NAME);
            let mut out = BufWriter::new(File::create(&path)?);
            write_json(standings, &mut out, json_style)?;
            out.flush()?;
            info!(path = %path.display(), teams = standings.len(), "wrote JSON report");
            Ok(Some(path))
        }
    }
}

/// Human-readable block per team.
pub fn write_console<W: Write>(standings: &SeasonStandings, out: &mut W) -> Result<()> {
    for (label, tally) in standings.iter() {
        writeln!(out, "{label}")?;
        writeln!(out, "  won games as home team: {}", tally.home_wins)?;
        writeln!(out, "  won games as visitor team: {}", tally.visitor_wins)?;
        writeln!(out, "  lost games as home team: {}", tally.home_losses)?;
        writeln!(out, "  lost games as visitor team: {}", tally.visitor_losses)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Header row followed by one row per team, in standings order.
pub fn write_csv<W: Write>(standings: &SeasonStandings, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for (label, tally) in standings.iter() {
        writer.write_record([
            label.to_string(),
            tally.home_wins.to_string(),
            tally.visitor_wins.to_string(),
            tally.home_losses.to_string(),
            tally.visitor_losses.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Team objects either as one array or back to back, each followed by a comma.
pub fn write_json<W: Write>(
    standings: &SeasonStandings,
    out: &mut W,
    style: JsonStyle,
) -> Result<()> {
    let rows: Vec<TeamRow> = standings
        .iter()
        .map(|(label, tally)| TeamRow::new(label, tally))
        .collect();

    match style {
        JsonStyle::Array => {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        JsonStyle::Concatenated => {
            for row in &rows {
                serde_json::to_writer(&mut *out, row)?;
                out.write_all(b",")?;
            }
        }
    }
    Ok(())
}

/// Load standings back from a CSV report produced by [`write_csv`].
pub fn read_csv<R: Read>(input: R) -> Result<SeasonStandings> {
    let mut reader = csv::Reader::from_reader(input);

    let header = reader.headers()?;
    if header.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(StatsError::MalformedCsv {
            message: format!("unexpected header: {:?}", header.iter().collect::<Vec<_>>()),
        });
    }

    let mut standings = SeasonStandings::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let counter = |index: usize| -> Result<u32> {
            let raw = record.get(index).unwrap_or_default();
            raw.trim().parse().map_err(|_| StatsError::MalformedCsv {
                message: format!("row {}: invalid counter {:?}", line + 1, raw),
            })
        };

        let tally = TeamTally {
            home_wins: counter(1)?,
            visitor_wins: counter(2)?,
            home_losses: counter(3)?,
            visitor_losses: counter(4)?,
        };
        *standings.entry(&record[0]) = tally;
    }

    Ok(standings)
}
