//! Records returned by the balldontlie API and its pagination envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StatsError};


/// An NBA franchise as listed by `/teams` and embedded in every game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub full_name: String,
    pub abbreviation: String,
    pub division: String,
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Team {
    /// Display label used as the key of season standings, e.g. `Boston Celtics (BOS)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.full_name, self.abbreviation)
    }
}

/// Player bio data. Measurements are missing for many historical players.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub height_feet: Option<u32>,
    #[serde(default)]
    pub height_inches: Option<u32>,
    #[serde(default)]
    pub weight_pounds: Option<u32>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single game with the final (or current) score of both sides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Game {
    pub home_team: Team,
    pub visitor_team: Team,
    pub home_team_score: u32,
    pub visitor_team_score: u32,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub season: Option<u16>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Pagination metadata attached to every collection response.
///
/// `next_page` is kept raw because the API is inconsistent about it: it
/// shows up as an integer, `null`, the string `"null"`, or not at all.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Meta {
    #[serde(default)]
    pub next_page: Option<Value>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl Meta {
    /// Decode the next page token. `Ok(None)` means this was the last page.
    pub fn next_page_number(&self) -> Result<Option<u32>> {
        match &self.next_page {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s == "null" => Ok(None),
            Some(Value::String(s)) => s
                .trim()
                .parse::<u32>()
                .map(Some)
                .map_err(|_| StatsError::InvalidPageToken { value: s.clone() }),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| StatsError::InvalidPageToken {
                    value: n.to_string(),
                }),
            Some(other) => Err(StatsError::InvalidPageToken {
                value: other.to_string(),
            }),
        }
    }
}

/// One page of a collection resource: `{"data": [...], "meta": {...}}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}
