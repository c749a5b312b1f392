//! Per-team win/loss aggregation over a season of games.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bdl::types::Game;


/// Wins and losses of one team, split by home and visitor games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTally {
    pub home_wins: u32,
    pub visitor_wins: u32,
    pub home_losses: u32,
    pub visitor_losses: u32,
}

/// Team label → tally, iterated in the order teams were first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonStandings {
    order: Vec<String>,
    tallies: HashMap<String, TeamTally>,
}

impl SeasonStandings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally for `label`, inserting a zeroed one the first time the team appears.
    pub fn entry(&mut self, label: &str) -> &mut TeamTally {
        if !self.tallies.contains_key(label) {
            self.order.push(label.to_string());
        }
        self.tallies.entry(label.to_string()).or_default()
    }

    pub fn get(&self, label: &str) -> Option<&TeamTally> {
        self.tallies.get(label)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(label, tally)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TeamTally)> + '_ {
        self.order
            .iter()
            .filter_map(move |label| self.tallies.get(label).map(|t| (label.as_str(), t)))
    }

    /// Fold one game into the standings. Both teams are registered even when
    /// the game ends level, but a level game changes no counters.
    pub fn record_game(&mut self, game: &Game) {
        let home = game.home_team.label();
        let visitor = game.visitor_team.label();
        self.entry(&home);
        self.entry(&visitor);

        if game.home_team_score > game.visitor_team_score {
            self.entry(&home).home_wins += 1;
            self.entry(&visitor).visitor_losses += 1;
        } else if game.visitor_team_score > game.home_team_score {
            self.entry(&visitor).visitor_wins += 1;
            self.entry(&home).home_losses += 1;
        }
    }
}

/// Build standings from every game of a season.
pub fn aggregate_season(games: &[Game]) -> SeasonStandings {
    let mut standings = SeasonStandings::new();
    for game in games {
        standings.record_game(game);
    }
    standings
}
