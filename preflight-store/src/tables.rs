use std::time::Duration;

use math::interp::{Blend, TableRecord};
use math::{Angle, Fuel, FuelFlow, Heading, Length, Position, Speed, Temp};
use serde::{Deserialize, Serialize};

/// Published climb performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ClimbTable {
    /// Time, fuel and distance to climb from sea level,
    /// keyed by pressure altitude and OAT.
    Cumulative(Vec<CumulativeClimbEntry>),
    /// Climb rate, speed and fuel flow within altitude bands.
    Segmented(Vec<ClimbSegment>),
}

/// A row of a cumulative "time, fuel and distance to climb" table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CumulativeClimbEntry {
    /// Pressure altitude reached.
    pub pressure_altitude: Position<f32>,
    /// Outside air temperature the row applies to.
    pub oat:               Temp,
    /// Time from sea level, in minutes.
    #[serde(with = "crate::minutes")]
    #[cfg_attr(feature = "schema", schemars(with = "f32"))]
    pub time:              Duration,
    /// Fuel used from sea level.
    pub fuel:              Fuel,
    /// Horizontal distance covered from sea level, in nautical miles.
    #[serde(with = "crate::published::nm")]
    #[cfg_attr(feature = "schema", schemars(with = "f32"))]
    pub distance:          Length<f32>,
}

/// Time, fuel and distance accumulated over a climb.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClimbTotals {
    /// Time spent climbing.
    pub time:     Duration,
    /// Fuel used.
    pub fuel:     Fuel,
    /// Horizontal distance covered.
    pub distance: Length<f32>,
}

impl ClimbTotals {
    /// Per-field difference `self - earlier`, clamped to zero.
    #[must_use]
    pub fn since(self, earlier: Self) -> Self {
        Self {
            time:     self.time.saturating_sub(earlier.time),
            fuel:     (self.fuel - earlier.fuel).max(Fuel::ZERO),
            distance: (self.distance - earlier.distance).max(Length::ZERO),
        }
    }
}

impl Blend for ClimbTotals {
    fn blend(self, other: Self, s: f32) -> Self {
        Self {
            time:     self.time.blend(other.time, s),
            fuel:     self.fuel.blend(other.fuel, s),
            distance: self.distance.blend(other.distance, s),
        }
    }
}

impl TableRecord for CumulativeClimbEntry {
    type Value = ClimbTotals;

    fn keys(&self) -> [f32; 2] {
        [self.pressure_altitude.amsl().into_feet(), self.oat.into_celsius()]
    }

    fn value(&self) -> ClimbTotals {
        ClimbTotals { time: self.time, fuel: self.fuel, distance: self.distance }
    }
}

/// Climb performance within an altitude band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ClimbSegment {
    /// Lower bound of the band, inclusive.
    pub altitude_from: Position<f32>,
    /// Upper bound of the band, exclusive.
    pub altitude_to:   Position<f32>,
    /// Published rate of climb at the reference weight, in feet per minute.
    #[serde(with = "crate::published::fpm")]
    #[cfg_attr(feature = "schema", schemars(with = "f32"))]
    pub rate_of_climb: Speed<f32>,
    /// True airspeed during the climb, in knots.
    #[serde(with = "crate::published::knots")]
    #[cfg_attr(feature = "schema", schemars(with = "f32"))]
    pub climb_tas:     Speed<f32>,
    /// Fuel flow during the climb, in gallons per hour.
    #[serde(with = "crate::published::gph")]
    #[cfg_attr(feature = "schema", schemars(with = "f32"))]
    pub fuel_flow:     FuelFlow,
}

impl ClimbSegment {
    /// Whether `altitude` lies within `[altitude_from, altitude_to)`.
    #[must_use]
    pub fn contains(&self, altitude: Position<f32>) -> bool {
        self.altitude_from <= altitude && altitude < self.altitude_to
    }

    /// Vertical extent of the band.
    #[must_use]
    pub fn height(&self) -> Length<f32> { self.altitude_to - self.altitude_from }
}

/// A row of a takeoff distance table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct TakeoffEntry {
    /// Pressure altitude of the airfield.
    pub altitude:    Position<f32>,
    /// Outside air temperature.
    pub oat:         Temp,
    /// Ground roll on a paved, level, dry runway in calm wind.
    pub ground_roll: Length<f32>,
    /// Total distance to clear a 50 ft obstacle.
    pub over_50ft:   Length<f32>,
}

/// Published takeoff distances at one table point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TakeoffRun {
    /// Ground roll.
    pub ground_roll: Length<f32>,
    /// Total distance to clear a 50 ft obstacle.
    pub over_50ft:   Length<f32>,
}

impl Blend for TakeoffRun {
    fn blend(self, other: Self, s: f32) -> Self {
        Self {
            ground_roll: self.ground_roll.blend(other.ground_roll, s),
            over_50ft:   self.over_50ft.blend(other.over_50ft, s),
        }
    }
}

impl TableRecord for TakeoffEntry {
    type Value = TakeoffRun;

    fn keys(&self) -> [f32; 2] { [self.altitude.amsl().into_feet(), self.oat.into_celsius()] }

    fn value(&self) -> TakeoffRun {
        TakeoffRun { ground_roll: self.ground_roll, over_50ft: self.over_50ft }
    }
}

/// A row of a cruise performance table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CruiseEntry {
    /// Pressure altitude.
    pub pressure_altitude: Position<f32>,
    /// Engine power setting in percent of rated power.
    pub power_percent:     f32,
    /// True airspeed achieved, in knots.
    #[serde(with = "crate::published::knots")]
    #[cfg_attr(feature = "schema", schemars(with = "f32"))]
    pub tas:               Speed<f32>,
    /// Fuel flow at this power setting, in gallons per hour.
    #[serde(with = "crate::published::gph")]
    #[cfg_attr(feature = "schema", schemars(with = "f32"))]
    pub fuel_flow:         FuelFlow,
}

/// Cruise performance at one table point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CruisePoint {
    /// True airspeed.
    pub tas:       Speed<f32>,
    /// Fuel flow.
    pub fuel_flow: FuelFlow,
}

impl Blend for CruisePoint {
    fn blend(self, other: Self, s: f32) -> Self {
        Self {
            tas:       self.tas.blend(other.tas, s),
            fuel_flow: self.fuel_flow.blend(other.fuel_flow, s),
        }
    }
}

impl TableRecord for CruiseEntry {
    type Value = CruisePoint;

    fn keys(&self) -> [f32; 2] { [self.pressure_altitude.amsl().into_feet(), self.power_percent] }

    fn value(&self) -> CruisePoint { CruisePoint { tas: self.tas, fuel_flow: self.fuel_flow } }
}

/// A row of a compass deviation card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct DeviationEntry {
    /// Magnetic heading the deviation was measured on.
    pub magnetic_heading: Heading,
    /// Compass heading minus magnetic heading, positive when the compass reads high.
    #[serde(with = "crate::degrees")]
    #[cfg_attr(feature = "schema", schemars(with = "f32"))]
    pub deviation:        Angle,
}
