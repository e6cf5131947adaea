//! Splits a leg into climb, cruise and descent.

use std::ops;
use std::time::Duration;

use enum_map::{EnumMap, enum_map};
use math::{Fuel, FuelFlow, Length, Speed};

use crate::FlightPhase;
use crate::climb::{ClimbPerformance, estimate_climb_distance, estimate_climb_time};


/// Parameters of the descent at the end of a leg.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Descent {
    pub altitude_to_lose: Length<f32>,
    /// Rate of descent, positive downwards.
    pub rate:             Speed<f32>,
    pub ground_speed:     Speed<f32>,
    pub fuel_flow:        FuelFlow,
}

/// Parameters of a trip calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripInput {
    /// Total distance of the leg.
    pub leg_distance:        Length<f32>,
    pub climb:               ClimbPerformance,
    pub cruise_ground_speed: Speed<f32>,
    pub cruise_fuel_flow:    FuelFlow,
    pub descent:             Descent,
}

/// Distance, time and fuel of one phase or of the whole leg.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct PhaseTotals {
    pub distance: Length<f32>,
    #[serde(serialize_with = "crate::serialize_minutes")]
    pub time:     Duration,
    pub fuel:     Fuel,
}

impl PhaseTotals {
    fn scale(self, factor: f32) -> Self {
        Self {
            distance: self.distance * factor,
            time:     self.time.mul_f32(factor),
            fuel:     self.fuel * factor,
        }
    }
}

impl ops::Add for PhaseTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            distance: self.distance + other.distance,
            time:     self.time + other.time,
            fuel:     self.fuel + other.fuel,
        }
    }
}

/// A condition that makes the trip plan approximate.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error, serde_with::SerializeDisplay)]
pub enum TripAdvisory {
    #[error(
        "climb and descent need {:.1} nm but the leg is {:.1} nm, both were shortened to fit",
        .required.into_nm(), .leg.into_nm()
    )]
    ClimbDescentExceedLeg { required: Length<f32>, leg: Length<f32> },
    #[error("rate of descent is not positive, descent time is omitted")]
    NonPositiveDescentRate,
    #[error("cruise ground speed is not positive, cruise time is omitted")]
    ZeroCruiseGroundSpeed,
}

/// Per-phase and total distance, time and fuel of a leg.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TripPlan {
    pub phases:     EnumMap<FlightPhase, PhaseTotals>,
    pub total:      PhaseTotals,
    pub advisories: Vec<TripAdvisory>,
}

/// Splits the leg into its climb, cruise and descent portions.
///
/// If the climb and descent together are longer than the leg,
/// both are shortened in proportion and the cruise is omitted.
#[must_use]
pub fn trip_plan(input: &TripInput) -> TripPlan {
    let mut advisories = Vec::new();
    let leg = input.leg_distance.max(Length::ZERO);

    let mut climb = PhaseTotals {
        distance: input.climb.distance,
        time:     input.climb.time,
        fuel:     input.climb.fuel,
    };

    let descent_time = estimate_climb_time(input.descent.altitude_to_lose, input.descent.rate)
        .unwrap_or_else(|| {
            if input.descent.altitude_to_lose.is_positive() {
                advisories.push(TripAdvisory::NonPositiveDescentRate);
            }
            Duration::ZERO
        });
    let mut descent = PhaseTotals {
        distance: estimate_climb_distance(descent_time, input.descent.ground_speed),
        time:     descent_time,
        fuel:     input.descent.fuel_flow * descent_time,
    };

    let required = climb.distance + descent.distance;
    let mut cruise = PhaseTotals::default();
    if required > leg {
        tracing::debug!("Climb and descent of {required:?} exceed leg of {leg:?}");
        advisories.push(TripAdvisory::ClimbDescentExceedLeg { required, leg });
        let factor = leg / required;
        climb = climb.scale(factor);
        descent = descent.scale(factor);
    } else {
        cruise.distance = leg - required;
        match cruise.distance.try_div(input.cruise_ground_speed) {
            Some(time) if input.cruise_ground_speed.is_positive() => {
                cruise.time = time;
                cruise.fuel = input.cruise_fuel_flow * time;
            }
            _ => {
                if cruise.distance.is_positive() {
                    advisories.push(TripAdvisory::ZeroCruiseGroundSpeed);
                }
            }
        }
    }

    let phases = enum_map! {
        FlightPhase::Climb => climb,
        FlightPhase::Cruise => cruise,
        FlightPhase::Descent => descent,
    };
    let total = phases.values().fold(PhaseTotals::default(), |sum, &phase| sum + phase);
    TripPlan { phases, total, advisories }
}
