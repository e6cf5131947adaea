use math::{Mass, Speed};
use serde::{Deserialize, Serialize};

use crate::{ClimbTable, CruiseEntry, DeviationEntry, TakeoffEntry};

/// Performance data of an aircraft type, as published in its flight manual.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct AircraftProfile {
    /// Display name of the aircraft type.
    pub name:    String,
    /// Certified weights.
    pub weights: Weights,
    /// Airspeed limitations.
    #[serde(default)]
    pub speeds:  SpeedLimits,

    /// Climb performance, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climb:        Option<ClimbTable>,
    /// Takeoff distances keyed by pressure altitude and OAT.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub takeoff:      Vec<TakeoffEntry>,
    /// Cruise performance keyed by pressure altitude and percent power.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cruise:       Vec<CruiseEntry>,
    /// Deviation of the installed magnetic compass.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compass_card: Vec<DeviationEntry>,
}

impl AircraftProfile {
    /// The weight the published tables are computed for.
    ///
    /// This is the standard weight if given, otherwise the maximum gross weight.
    #[must_use]
    pub fn reference_weight(&self) -> Mass {
        self.weights.standard.unwrap_or(self.weights.max_gross)
    }

    /// The clean stall speed, falling back to the landing configuration stall speed.
    #[must_use]
    pub fn clean_stall_speed(&self) -> Option<Speed<f32>> { self.speeds.vs1.or(self.speeds.vs0) }
}

/// Certified weights of an aircraft.
///
/// A consistent profile has `empty <= standard <= max_gross`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Weights {
    /// Basic empty weight.
    pub empty:     Mass,
    /// Weight the performance tables are computed for, if different from the maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard:  Option<Mass>,
    /// Maximum certified takeoff weight.
    pub max_gross: Mass,
}

/// Indicated airspeed limitations, in knots.
///
/// Every field is optional since partial data is common for older types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct SpeedLimits {
    /// Never exceed speed.
    #[serde(with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vne: Option<Speed<f32>>,
    /// Maximum structural cruising speed.
    #[serde(with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vno: Option<Speed<f32>>,
    /// Maneuvering speed.
    #[serde(with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub va:  Option<Speed<f32>>,
    /// Maximum flap extended speed.
    #[serde(with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vfe: Option<Speed<f32>>,
    /// Stall speed in the clean configuration.
    #[serde(with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vs1: Option<Speed<f32>>,
    /// Stall speed in the landing configuration.
    #[serde(with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vs0: Option<Speed<f32>>,
}
