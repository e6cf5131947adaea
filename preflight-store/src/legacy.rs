use math::{Mass, Speed};
use serde::{Deserialize, Serialize};

use crate::{
    AircraftProfile, ClimbSegment, ClimbTable, CumulativeClimbEntry, SpeedLimits, TakeoffEntry,
    Weights,
};

/// The flat profile layout written by older versions.
///
/// Weights and speed limits are top-level fields,
/// and the two climb table shapes are stored side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LegacyProfile {
    /// Display name of the aircraft type.
    pub name:             String,
    /// Basic empty weight.
    pub empty_weight:     Mass,
    /// Weight the performance tables are computed for.
    #[serde(default)]
    pub standard_weight:  Option<Mass>,
    /// Maximum certified takeoff weight.
    pub max_gross_weight: Mass,

    /// Never exceed speed, in knots.
    #[serde(default, with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vne: Option<Speed<f32>>,
    /// Maximum structural cruising speed.
    #[serde(default, with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vno: Option<Speed<f32>>,
    /// Maneuvering speed.
    #[serde(default, with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub va:  Option<Speed<f32>>,
    /// Maximum flap extended speed.
    #[serde(default, with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vfe: Option<Speed<f32>>,
    /// Stall speed in the clean configuration.
    #[serde(default, with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vs1: Option<Speed<f32>>,
    /// Stall speed in the landing configuration.
    #[serde(default, with = "crate::published::option_knots")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<f32>"))]
    pub vs0: Option<Speed<f32>>,

    /// Cumulative climb table.
    #[serde(default)]
    pub climb_table:    Vec<CumulativeClimbEntry>,
    /// Altitude-banded climb table, used only if `climb_table` is empty.
    #[serde(default)]
    pub climb_segments: Vec<ClimbSegment>,
    /// Takeoff distance table.
    #[serde(default)]
    pub takeoff_table:  Vec<TakeoffEntry>,
}

impl From<LegacyProfile> for AircraftProfile {
    fn from(legacy: LegacyProfile) -> Self {
        let climb = if !legacy.climb_table.is_empty() {
            Some(ClimbTable::Cumulative(legacy.climb_table))
        } else if !legacy.climb_segments.is_empty() {
            Some(ClimbTable::Segmented(legacy.climb_segments))
        } else {
            None
        };

        AircraftProfile {
            name: legacy.name,
            weights: Weights {
                empty:     legacy.empty_weight,
                standard:  legacy.standard_weight,
                max_gross: legacy.max_gross_weight,
            },
            speeds: SpeedLimits {
                vne: legacy.vne,
                vno: legacy.vno,
                va:  legacy.va,
                vfe: legacy.vfe,
                vs1: legacy.vs1,
                vs0: legacy.vs0,
            },
            climb,
            takeoff: legacy.takeoff_table,
            cruise: Vec::new(),
            compass_card: Vec::new(),
        }
    }
}
