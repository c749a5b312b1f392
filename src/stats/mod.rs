//! Pure aggregation over fetched records: unit conversion, division grouping,
//! extremum search and season standings.

pub mod divisions;
pub mod extremum;
pub mod season;
pub mod units;

pub use divisions::{group_by_division, DivisionGroup};
pub use extremum::{heaviest, tallest, Extremum, Height};
pub use season::{aggregate_season, SeasonStandings, TeamTally};
