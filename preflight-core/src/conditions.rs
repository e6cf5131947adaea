//! Atmospheric and runway conditions of a calculation.

use math::{Length, Position, Speed, Temp, density_altitude};

#[cfg(test)]
mod tests;

/// Atmospheric conditions at the airfield.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Environment {
    /// Pressure altitude.
    pub pressure_altitude: Position<f32>,
    /// Density altitude.
    ///
    /// Should not be lower than `pressure_altitude` by more than
    /// [`DENSITY_ALTITUDE_TOLERANCE`](crate::validate::DENSITY_ALTITUDE_TOLERANCE).
    pub density_altitude:  Position<f32>,
    /// Outside air temperature.
    pub oat:               Temp,
}

impl Environment {
    /// Derives the density altitude from pressure altitude and OAT.
    #[must_use]
    pub fn from_oat(pressure_altitude: Position<f32>, oat: Temp) -> Self {
        Self { pressure_altitude, density_altitude: density_altitude(pressure_altitude, oat), oat }
    }
}

/// Runway surface type and condition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    PavedGood,
    PavedPoor,
    GrassGood,
    GrassFair,
    GrassPoor,
    Sand,
    /// Seaplane operations, which have no published correction.
    Water,
}

impl Surface {
    /// The most conservative land surface, substituted for unsupported surfaces.
    pub const MOST_CONSERVATIVE: Self = Self::Sand;

    /// Whether the ground roll can be corrected for this surface.
    #[must_use]
    pub fn is_supported(self) -> bool { self != Self::Water }

    /// Whether this is the surface the published tables assume.
    #[must_use]
    pub fn is_ideal(self) -> bool { self == Self::PavedGood }

    /// Ground roll multiplier relative to a dry paved runway in good condition.
    ///
    /// Unsupported surfaces use the factor of [`Self::MOST_CONSERVATIVE`].
    #[must_use]
    pub fn ground_roll_factor(self) -> f32 {
        match self {
            Self::PavedGood => 1.00,
            Self::PavedPoor => 1.05,
            Self::GrassGood => 1.20,
            Self::GrassFair => 1.38,
            Self::GrassPoor => 1.50,
            Self::Sand | Self::Water => 1.60,
        }
    }
}

/// Runway conditions for takeoff.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Runway {
    /// Available takeoff run.
    pub length:        Length<f32>,
    pub surface:       Surface,
    /// Runway gradient in percent, positive uphill.
    pub slope_percent: f32,
    /// Wind component along the runway, negative for a tailwind.
    pub headwind:      Speed<f32>,
}
