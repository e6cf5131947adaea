use itertools::Itertools;
use math::interp::TableRecord;
use math::{Mass, Position};
use ordered_float::OrderedFloat;

use crate::{AircraftProfile, ClimbTable};

/// Identifies a table of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TableKind {
    /// The cumulative or segmented climb table.
    Climb,
    /// The takeoff distance table.
    Takeoff,
    /// The cruise performance table.
    Cruise,
    /// The compass deviation card.
    CompassCard,
}

/// An inconsistency in an aircraft profile.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// Weights are not ordered `empty <= standard <= max_gross`.
    #[error(
        "weights are out of order: empty {empty:?}, standard {standard:?}, max gross {max_gross:?}"
    )]
    WeightOrder {
        /// Basic empty weight.
        empty:     Mass,
        /// Standard weight, if given.
        standard:  Option<Mass>,
        /// Maximum gross weight.
        max_gross: Mass,
    },
    /// Two rows of a table have the same keys.
    #[error("{table} table has duplicate rows at ({first}, {second})")]
    DuplicateKey {
        /// The table containing the duplicates.
        table:  TableKind,
        /// First key of the duplicated rows.
        first:  f32,
        /// Second key of the duplicated rows, 0 for single-key tables.
        second: f32,
    },
    /// A climb segment does not gain altitude.
    #[error("climb segment #{index} does not climb: {from:?} to {to:?}")]
    InvertedSegment {
        /// Index of the segment in the table.
        index: usize,
        /// Lower bound of the segment.
        from:  Position<f32>,
        /// Upper bound of the segment.
        to:    Position<f32>,
    },
}

fn duplicate_keys<R: TableRecord>(
    table: TableKind,
    records: &[R],
) -> impl Iterator<Item = ProfileError> {
    records.iter().map(|record| record.keys().map(OrderedFloat)).duplicates().map(
        move |[first, second]| ProfileError::DuplicateKey {
            table,
            first: first.0,
            second: second.0,
        },
    )
}

impl AircraftProfile {
    /// Checks the profile for internal consistency.
    ///
    /// Returns every problem found; an empty list means the profile is consistent.
    #[must_use]
    pub fn check(&self) -> Vec<ProfileError> {
        let mut errors = Vec::new();

        let weights = self.weights;
        let standard_ok = weights
            .standard
            .is_none_or(|standard| weights.empty <= standard && standard <= weights.max_gross);
        if !(weights.empty <= weights.max_gross && standard_ok) {
            errors.push(ProfileError::WeightOrder {
                empty:     weights.empty,
                standard:  weights.standard,
                max_gross: weights.max_gross,
            });
        }

        match &self.climb {
            Some(ClimbTable::Cumulative(entries)) => {
                errors.extend(duplicate_keys(TableKind::Climb, entries));
            }
            Some(ClimbTable::Segmented(segments)) => {
                for (index, segment) in segments.iter().enumerate() {
                    if segment.altitude_from >= segment.altitude_to {
                        errors.push(ProfileError::InvertedSegment {
                            index,
                            from: segment.altitude_from,
                            to: segment.altitude_to,
                        });
                    }
                }
            }
            None => {}
        }

        errors.extend(duplicate_keys(TableKind::Takeoff, &self.takeoff));
        errors.extend(duplicate_keys(TableKind::Cruise, &self.cruise));
        errors.extend(
            self.compass_card
                .iter()
                .map(|entry| OrderedFloat(entry.magnetic_heading.degrees().round()))
                .duplicates()
                .map(|heading| ProfileError::DuplicateKey {
                    table:  TableKind::CompassCard,
                    first:  heading.0,
                    second: 0.0,
                }),
        );

        errors
    }
}
