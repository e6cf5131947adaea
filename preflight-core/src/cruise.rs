//! Cruise performance lookup.

use math::interp::{Method, interpolate};
use math::{FuelFlow, Position, Speed};
use store::AircraftProfile;

#[cfg(test)]
mod tests;

/// True airspeed and fuel flow at a cruise power setting.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CruisePerformance {
    pub tas:       Speed<f32>,
    pub fuel_flow: FuelFlow,
    /// How the value was derived from the cruise table.
    pub method:    Method,
}

/// Interpolates the cruise table at a pressure altitude and percent power.
///
/// Returns `None` if the profile has no cruise table.
#[must_use]
pub fn cruise_performance(
    profile: &AircraftProfile,
    pressure_altitude: Position<f32>,
    power_percent: f32,
) -> Option<CruisePerformance> {
    let result =
        interpolate(&profile.cruise, pressure_altitude.amsl().into_feet(), power_percent)?;
    if result.method.is_fallback() {
        tracing::debug!(
            "Cruise table lookup at {pressure_altitude:?}, {power_percent}% used {}",
            result.method
        );
    }
    Some(CruisePerformance {
        tas:       result.value.tas,
        fuel_flow: result.value.fuel_flow,
        method:    result.method,
    })
}
