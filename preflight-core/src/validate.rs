//! Range and consistency checks on calculation inputs.
//!
//! Checks never reject an input.
//! Each failed check yields an [`InputError`] that the calculators attach to their result,
//! together with the conservative substitute they used instead.

use math::{Length, Mass, Speed};
use store::Weights;

use crate::conditions::{Environment, Runway, Surface};

#[cfg(test)]
mod tests;

/// How far density altitude may fall below pressure altitude before it is considered invalid.
pub const DENSITY_ALTITUDE_TOLERANCE: Length<f32> = Length::from_feet(100.0);

/// An input outside the range a calculation is defined for.
#[derive(Debug, Clone, PartialEq, thiserror::Error, serde_with::SerializeDisplay)]
pub enum InputError {
    #[error(
        "weight {:.0} lb is outside the certified range {:.0} to {:.0} lb",
        .weight.into_pounds(), .empty.into_pounds(), .max_gross.into_pounds()
    )]
    WeightOutOfRange { weight: Mass, empty: Mass, max_gross: Mass },
    #[error("runway length {:.0} ft is not positive", .length.into_feet())]
    NonPositiveRunway { length: Length<f32> },
    #[error(
        "density altitude {:.0} ft is below pressure altitude {:.0} ft",
        .density_altitude.into_feet(), .pressure_altitude.into_feet()
    )]
    DensityBelowPressure { density_altitude: Length<f32>, pressure_altitude: Length<f32> },
    #[error("profile has no clean stall speed, assuming {:.0} kt", .substitute.into_knots())]
    MissingStallSpeed { substitute: Speed<f32> },
    #[error(
        "takeoff from water is not supported, applying the {} surface correction",
        Surface::MOST_CONSERVATIVE
    )]
    WaterSurface,
    #[error("rate of climb is not positive, assuming {:.0} fpm", .substitute.into_fpm())]
    NonPositiveClimbRate { substitute: Speed<f32> },
}

/// Checks that `weight` is within the certified range of the profile.
#[must_use]
pub fn check_weight(weights: &Weights, weight: Mass) -> Option<InputError> {
    if weight < weights.empty || weight > weights.max_gross || !weight.is_finite() {
        Some(InputError::WeightOutOfRange {
            weight,
            empty: weights.empty,
            max_gross: weights.max_gross,
        })
    } else {
        None
    }
}

/// Checks that density altitude is consistent with pressure altitude.
#[must_use]
pub fn check_environment(environment: &Environment) -> Option<InputError> {
    let pressure_altitude = environment.pressure_altitude.amsl();
    let density_altitude = environment.density_altitude.amsl();
    if density_altitude < pressure_altitude - DENSITY_ALTITUDE_TOLERANCE {
        Some(InputError::DensityBelowPressure { density_altitude, pressure_altitude })
    } else {
        None
    }
}

/// Checks that the runway has a positive length and a supported surface.
#[must_use]
pub fn check_runway(runway: &Runway) -> Vec<InputError> {
    let mut errors = Vec::new();
    if !runway.length.is_positive() {
        errors.push(InputError::NonPositiveRunway { length: runway.length });
    }
    if !runway.surface.is_supported() {
        errors.push(InputError::WaterSurface);
    }
    errors
}
