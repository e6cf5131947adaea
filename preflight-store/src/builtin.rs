use std::time::Duration;

use math::{Angle, Fuel, FuelFlow, Heading, Length, Mass, Position, Speed, Temp};

use crate::{
    AircraftProfile, ClimbTable, CruiseEntry, CumulativeClimbEntry, DeviationEntry, SpeedLimits,
    TakeoffEntry, Weights,
};

/// Profiles shipped with the library.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Builtin {
    /// Cessna 150, the reference profile.
    C150,
}

impl Builtin {
    /// Builds the profile.
    #[must_use]
    pub fn profile(self) -> AircraftProfile {
        match self {
            Self::C150 => c150(),
        }
    }
}

/// Standard-day climb from sea level: pressure altitude in ft, time in minutes,
/// fuel in gallons and distance in nm.
const C150_CLIMB: [(f32, f32, f32, f32); 7] = [
    (0.0, 0.0, 0.0, 0.0),
    (2000.0, 3.0, 0.5, 4.0),
    (4000.0, 6.5, 1.1, 8.0),
    (6000.0, 10.5, 1.8, 13.0),
    (8000.0, 15.5, 2.6, 20.0),
    (10000.0, 22.0, 3.6, 29.0),
    (12000.0, 31.0, 4.9, 41.0),
];

/// OAT columns of the climb table in Celsius and their factor on the standard-day figures.
const C150_CLIMB_OAT_FACTORS: [(f32, f32); 3] = [(0.0, 0.92), (20.0, 1.0), (40.0, 1.15)];

/// Pressure altitude in ft, OAT in Celsius, ground roll and total over 50 ft in ft.
const C150_TAKEOFF: [(f32, f32, f32, f32); 12] = [
    (0.0, 0.0, 640.0, 1205.0),
    (0.0, 20.0, 760.0, 1420.0),
    (0.0, 40.0, 890.0, 1650.0),
    (2500.0, 0.0, 760.0, 1425.0),
    (2500.0, 20.0, 905.0, 1700.0),
    (2500.0, 40.0, 1060.0, 1990.0),
    (5000.0, 0.0, 910.0, 1725.0),
    (5000.0, 20.0, 1085.0, 2075.0),
    (5000.0, 40.0, 1280.0, 2460.0),
    (7500.0, 0.0, 1100.0, 2110.0),
    (7500.0, 20.0, 1320.0, 2580.0),
    (7500.0, 40.0, 1560.0, 3100.0),
];

/// Pressure altitude in ft, percent power, TAS in knots and fuel flow in gph.
///
/// 75% power is not available at 10000 ft.
const C150_CRUISE: [(f32, f32, f32, f32); 14] = [
    (2000.0, 55.0, 93.0, 4.9),
    (2000.0, 65.0, 101.0, 5.6),
    (2000.0, 75.0, 108.0, 6.3),
    (4000.0, 55.0, 94.0, 4.9),
    (4000.0, 65.0, 102.0, 5.6),
    (4000.0, 75.0, 110.0, 6.3),
    (6000.0, 55.0, 96.0, 4.9),
    (6000.0, 65.0, 104.0, 5.6),
    (6000.0, 75.0, 112.0, 6.3),
    (8000.0, 55.0, 97.0, 4.9),
    (8000.0, 65.0, 105.0, 5.6),
    (8000.0, 75.0, 114.0, 6.3),
    (10000.0, 55.0, 98.0, 4.9),
    (10000.0, 65.0, 107.0, 5.6),
];

/// Magnetic heading and deviation, both in degrees.
const C150_COMPASS_CARD: [(f32, f32); 12] = [
    (0.0, 1.0),
    (30.0, 2.0),
    (60.0, 2.0),
    (90.0, 0.0),
    (120.0, -1.0),
    (150.0, -2.0),
    (180.0, -2.0),
    (210.0, -1.0),
    (240.0, 0.0),
    (270.0, 1.0),
    (300.0, 2.0),
    (330.0, 1.0),
];

/// The Cessna 150 reference profile.
#[must_use]
pub fn c150() -> AircraftProfile {
    let climb = C150_CLIMB_OAT_FACTORS
        .iter()
        .flat_map(|&(oat, factor)| {
            C150_CLIMB.iter().map(move |&(altitude, minutes, gallons, nm)| CumulativeClimbEntry {
                pressure_altitude: Position::from_amsl_feet(altitude),
                oat:               Temp::from_celsius(oat),
                time:              Duration::from_secs_f32(minutes * factor * 60.0),
                fuel:              Fuel::from_gallons(gallons * factor),
                distance:          Length::from_nm(nm * factor),
            })
        })
        .collect();

    let takeoff = C150_TAKEOFF
        .iter()
        .map(|&(altitude, oat, ground_roll, over_50ft)| TakeoffEntry {
            altitude:    Position::from_amsl_feet(altitude),
            oat:         Temp::from_celsius(oat),
            ground_roll: Length::from_feet(ground_roll),
            over_50ft:   Length::from_feet(over_50ft),
        })
        .collect();

    let cruise = C150_CRUISE
        .iter()
        .map(|&(altitude, power_percent, tas, gph)| CruiseEntry {
            pressure_altitude: Position::from_amsl_feet(altitude),
            power_percent,
            tas: Speed::from_knots(tas),
            fuel_flow: FuelFlow::from_gph(gph),
        })
        .collect();

    let compass_card = C150_COMPASS_CARD
        .iter()
        .map(|&(heading, deviation)| DeviationEntry {
            magnetic_heading: Heading::from_degrees(heading),
            deviation:        Angle::from_degrees(deviation),
        })
        .collect();

    AircraftProfile {
        name: "Cessna 150".into(),
        weights: Weights {
            empty:     Mass::from_pounds(1111.0),
            standard:  Some(Mass::from_pounds(1500.0)),
            max_gross: Mass::from_pounds(1600.0),
        },
        speeds: SpeedLimits {
            vne: Some(Speed::from_knots(141.0)),
            vno: Some(Speed::from_knots(104.0)),
            va:  Some(Speed::from_knots(97.0)),
            vfe: Some(Speed::from_knots(85.0)),
            vs1: Some(Speed::from_knots(48.0)),
            vs0: Some(Speed::from_knots(42.0)),
        },
        climb: Some(ClimbTable::Cumulative(climb)),
        takeoff,
        cruise,
        compass_card,
    }
}
