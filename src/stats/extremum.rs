//! Tallest / heaviest player search.
//!
//! Players without the gating measurement are skipped. The first qualifying
//! player seeds the result and is only replaced by a strictly larger one, so
//! ties go to whoever was seen first.

use crate::{bdl::types::Player, error::ConversionError, stats::units};

/// Height as the API reports it: whole feet plus optional extra inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Height {
    pub feet: u32,
    pub inches: Option<u32>,
}

impl Height {
    /// Feet decide first; inches only break a tie on feet. Missing inches
    /// rank below any recorded value.
    pub fn is_taller_than(&self, other: &Height) -> bool {
        self.feet > other.feet || (self.feet == other.feet && self.inches > other.inches)
    }

    pub fn to_meters(&self) -> Result<f64, ConversionError> {
        units::feet_inches_to_meters(Some(f64::from(self.feet)), self.inches.map(f64::from))
    }
}

/// The winning player's display name and measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extremum<M> {
    pub name: String,
    pub measurement: M,
}

pub fn tallest(players: &[Player]) -> Option<Extremum<Height>> {
    find_extremum(
        players,
        |p| {
            p.height_feet.map(|feet| Height {
                feet,
                inches: p.height_inches,
            })
        },
        Height::is_taller_than,
    )
}

/// Heaviest player by `weight_pounds`.
pub fn heaviest(players: &[Player]) -> Option<Extremum<u32>> {
    find_extremum(players, |p| p.weight_pounds, |a, b| a > b)
}

fn find_extremum<M, F, B>(players: &[Player], measure: F, beats: B) -> Option<Extremum<M>>
where
    F: Fn(&Player) -> Option<M>,
    B: Fn(&M, &M) -> bool,
{
    let mut best: Option<(&Player, M)> = None;

    for player in players {
        let Some(candidate) = measure(player) else {
            continue;
        };
        let replace = match &best {
            None => true,
            Some((_, current)) => beats(&candidate, current),
        };
        if replace {
            best = Some((player, candidate));
        }
    }

    best.map(|(player, measurement)| Extremum {
        name: player.full_name(),
        measurement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(
        first: &str,
        last: &str,
        feet: Option<u32>,
        inches: Option<u32>,
        pounds: Option<u32>,
    ) -> Player {
        Player {
            first_name: first.to_string(),
            last_name: last.to_string(),
            height_feet: feet,
            height_inches: inches,
            weight_pounds: pounds,
        }
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(tallest(&[]), None);
        assert_eq!(heaviest(&[]), None);
    }

    #[test]
    fn test_all_null_measurements_yield_nothing() {
        let players = vec![
            player("A", "One", None, Some(11), None),
            player("B", "Two", None, None, None),
        ];
        assert_eq!(tallest(&players), None);
        assert_eq!(heaviest(&players), None);
    }

    #[test]
    fn test_tallest_later_taller_player_wins() {
        let players = vec![
            player("Short", "Guard", Some(6), Some(1), Some(190)),
            player("No", "Data", None, None, None),
            player("Tall", "Center", Some(7), Some(0), Some(260)),
        ];
        let result = tallest(&players).unwrap();
        assert_eq!(result.name, "Tall Center");
        assert_eq!(
            result.measurement,
            Height {
                feet: 7,
                inches: Some(0)
            }
        );
    }

    #[test]
    fn test_tallest_inches_break_feet_ties() {
        let players = vec![
            player("A", "Six-Five", Some(6), Some(5), None),
            player("B", "Six-Ten", Some(6), Some(10), None),
            player("C", "Six-Eight", Some(6), Some(8), None),
        ];
        assert_eq!(tallest(&players).unwrap().name, "B Six-Ten");
    }

    #[test]
    fn test_tallest_more_feet_beats_more_inches() {
        let players = vec![
            player("A", "Six-Eleven", Some(6), Some(11), None),
            player("B", "Seven-Zero", Some(7), Some(0), None),
        ];
        assert_eq!(tallest(&players).unwrap().name, "B Seven-Zero");
    }

    #[test]
    fn test_tallest_first_seen_wins_ties() {
        let players = vec![
            player("First", "Seen", Some(6), Some(9), None),
            player("Second", "Seen", Some(6), Some(9), None),
        ];
        assert_eq!(tallest(&players).unwrap().name, "First Seen");
    }

    #[test]
    fn test_tallest_missing_inches_still_qualifies() {
        let players = vec![
            player("No", "Inches", Some(7), None, None),
            player("Six", "Eleven", Some(6), Some(11), None),
        ];
        let result = tallest(&players).unwrap();
        assert_eq!(result.name, "No Inches");
        assert_eq!(result.measurement.inches, None);
        assert!(result.measurement.to_meters().is_err());
    }

    #[test]
    fn test_tallest_recorded_inches_beat_missing_inches() {
        let players = vec![
            player("No", "Inches", Some(7), None, None),
            player("Seven", "Zero", Some(7), Some(0), None),
        ];
        assert_eq!(tallest(&players).unwrap().name, "Seven Zero");
    }

    #[test]
    fn test_heaviest_replaces_only_when_strictly_heavier() {
        let players = vec![
            player("A", "Light", None, None, Some(180)),
            player("B", "Heavy", None, None, Some(290)),
            player("C", "AlsoHeavy", None, None, Some(290)),
            player("D", "Unknown", None, None, None),
        ];
        let result = heaviest(&players).unwrap();
        assert_eq!(result.name, "B Heavy");
        assert_eq!(result.measurement, 290);
    }

    #[test]
    fn test_height_to_meters() {
        let height = Height {
            feet: 6,
            inches: Some(0),
        };
        assert_eq!(height.to_meters().unwrap(), 1.83);
    }
}
