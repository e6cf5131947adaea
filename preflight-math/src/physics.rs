//! Algorithms and constants related to aviation physics.
//!
//! The airspeed and climb corrections here are the linear rules of thumb
//! used with light-aircraft flight manuals, not a full ISA model.

use bevy_math::Vec2;

use crate::units::Position;
use crate::{Accel, Angle, Heading, Length, Mass, Speed, Temp, TempDelta};

#[cfg(test)]
mod tests;

/// Standard sea level temperature.
pub const ISA_SEA_LEVEL_TEMPERATURE: Temp = Temp::from_kelvins(288.15);

/// Standard temperature lapse rate in flight manual units, in K per 1000 ft.
pub const ISA_LAPSE_PER_1000_FT: f32 = 1.98;

/// Density altitude gained for each degree above the standard temperature.
pub const DENSITY_ALTITUDE_PER_KELVIN: Length<f32> = Length::from_feet(120.0);

/// Standard gravity at Earth's surface.
pub const EARTH_SURFACE_GRAVITY: Accel<f32> = Accel::from_meters_per_sec2(9.80665);

/// Fractional increase of TAS over IAS per 1000 ft of density altitude.
pub const TAS_GAIN_PER_1000_FT: f32 = 0.02;

/// Fractional loss of rate of climb per 1000 ft of density altitude above pressure altitude.
pub const CLIMB_LOSS_PER_1000_FT: f32 = 0.08;

/// Rate of climb never degrades below this fraction of the published value.
pub const MIN_CLIMB_FACTOR: f32 = 0.30;

/// Computes the ISA temperature change over a given altitude gain.
///
/// The input and output have the same sign.
/// That is, if `distance` is positive, the output is positive,
/// indicating the temperature decrease when altitude increases by `distance`.
#[must_use]
pub fn isa_temp_lapse(distance: Length<f32>) -> TempDelta {
    TempDelta::from_kelvins(distance.into_feet() / 1000.0 * ISA_LAPSE_PER_1000_FT)
}

/// Standard temperature at the given pressure altitude.
#[must_use]
pub fn isa_temperature(pressure_altitude: Position<f32>) -> Temp {
    ISA_SEA_LEVEL_TEMPERATURE - isa_temp_lapse(pressure_altitude.amsl())
}

/// Density altitude from pressure altitude and outside air temperature,
/// using the 120 ft per degree approximation.
#[must_use]
pub fn density_altitude(pressure_altitude: Position<f32>, oat: Temp) -> Position<f32> {
    let deviation = oat - isa_temperature(pressure_altitude);
    pressure_altitude + DENSITY_ALTITUDE_PER_KELVIN * deviation.into_kelvins()
}

/// Converts indicated airspeed to true airspeed at the given density altitude.
///
/// The conversion is strictly increasing in density altitude
/// and is the identity at sea level.
#[must_use]
pub fn true_airspeed(indicated: Speed<f32>, density_altitude: Position<f32>) -> Speed<f32> {
    indicated * (1.0 + density_altitude.amsl().into_feet() / 1000.0 * TAS_GAIN_PER_1000_FT)
}

/// Degrades a published rate of climb for density altitude in excess of pressure altitude.
///
/// The reduction is floored at [`MIN_CLIMB_FACTOR`] of `base`.
#[must_use]
pub fn adjust_rate_of_climb(
    base: Speed<f32>,
    pressure_altitude: Position<f32>,
    density_altitude: Position<f32>,
) -> Speed<f32> {
    let excess = (density_altitude - pressure_altitude).into_feet();
    let factor = (1.0 - excess / 1000.0 * CLIMB_LOSS_PER_1000_FT).max(MIN_CLIMB_FACTOR);
    base * factor
}

/// Scales a stall speed published at `reference_weight` to `weight`.
///
/// Stall speed is proportional to the square root of weight.
/// Returns `reference` unchanged if `reference_weight` is not positive.
#[must_use]
pub fn weight_adjusted_stall_speed(
    reference: Speed<f32>,
    weight: Mass,
    reference_weight: Mass,
) -> Speed<f32> {
    if !reference_weight.is_positive() {
        return reference;
    }
    reference * (weight / reference_weight).max(0.0).sqrt()
}

/// An airspeed expressed both as indicated and true airspeed.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct AirspeedPair {
    /// Indicated airspeed.
    pub ias: Speed<f32>,
    /// True airspeed at the density altitude the pair was computed for.
    pub tas: Speed<f32>,
}

impl AirspeedPair {
    #[must_use]
    pub fn at(ias: Speed<f32>, density_altitude: Position<f32>) -> Self {
        Self { ias, tas: true_airspeed(ias, density_altitude) }
    }
}

/// Wind as reported: the direction it blows from and its speed.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Wind {
    /// True direction the wind blows from.
    pub from:  Heading,
    pub speed: Speed<f32>,
}

impl Wind {
    pub const CALM: Self = Self { from: Heading::NORTH, speed: Speed::ZERO };

    /// Returns the wind as a vector pointing towards where it blows from.
    #[must_use]
    pub fn source_vector(self) -> Speed<Vec2> { self.speed.with_heading(self.from) }

    /// Component of the wind blowing against `course`; negative for a tailwind.
    #[must_use]
    pub fn headwind(self, course: Heading) -> Speed<f32> {
        self.source_vector().project_onto_dir(course.into_dir2())
    }

    /// Component of the wind blowing from the right of `course`.
    #[must_use]
    pub fn crosswind(self, course: Heading) -> Speed<f32> {
        self.source_vector().project_onto_dir(course.right().into_dir2())
    }
}

/// Solution of the navigation wind triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindTriangle {
    /// Heading offset from the course into the wind, positive clockwise.
    pub correction:   Angle,
    /// Speed over the ground along the course. Never negative.
    pub ground_speed: Speed<f32>,
    /// The crosswind component exceeds the airspeed,
    /// so the course cannot be held and `correction` is saturated at 90 degrees.
    pub saturated:    bool,
}

/// Solves the wind correction angle and ground speed required to track `true_course`.
///
/// Uses the law of sines, `sin(wca) = crosswind / tas`,
/// then `gs = tas * cos(wca) - headwind`.
/// A calm wind yields a correction of exactly zero.
#[must_use]
pub fn solve_wind_triangle(
    true_course: Heading,
    true_airspeed: Speed<f32>,
    wind: Wind,
) -> WindTriangle {
    let crosswind = wind.crosswind(true_course);
    let headwind = wind.headwind(true_course);

    if !true_airspeed.is_positive() {
        return WindTriangle {
            correction:   Angle::ZERO,
            ground_speed: (-headwind).max(Speed::ZERO),
            saturated:    crosswind.abs().is_positive(),
        };
    }

    let ratio = crosswind / true_airspeed;
    let correction = Angle::asin(ratio);
    let ground_speed = (true_airspeed * correction.cos() - headwind).max(Speed::ZERO);

    WindTriangle { correction, ground_speed, saturated: ratio.abs() > 1.0 }
}
