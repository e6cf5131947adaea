//! Climb performance from published climb tables.
//!
//! Cumulative tables are interpolated directly at both ends of the climb.
//! Segmented tables are walked band by band,
//! degrading each band's rate of climb for density altitude and weight.

use std::time::Duration;

use itertools::Itertools;
use math::interp::interpolate;
use math::{
    Fuel, Length, Mass, Position, Speed, Temp, adjust_rate_of_climb, density_altitude,
    isa_temp_lapse,
};
use ordered_float::OrderedFloat;
use store::{AircraftProfile, ClimbSegment, ClimbTable, ClimbTotals, CumulativeClimbEntry};


/// Parameters of a climb.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClimbRequest {
    /// Pressure altitude at the start of the climb.
    pub from:     Position<f32>,
    /// Target pressure altitude.
    pub to:       Position<f32>,
    /// Outside air temperature at the start of the climb.
    pub oat:      Temp,
    /// Aircraft weight.
    pub weight:   Mass,
    /// Mean wind component against the climb track, negative for a tailwind.
    pub headwind: Speed<f32>,
}

/// Why a climb was not computed over its full requested range.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error, serde_with::SerializeDisplay)]
pub enum Truncation {
    #[error("no climb table band contains {:.0} ft", .altitude.amsl().into_feet())]
    NoBand { altitude: Position<f32> },
    #[error("rate of climb is not positive at {:.0} ft", .altitude.amsl().into_feet())]
    NonPositiveRate { altitude: Position<f32> },
    #[error("climb table ends at {:.0} ft", .top.amsl().into_feet())]
    AboveTable { top: Position<f32> },
    #[error(
        "climb table starts at {:.0} ft, the climb below it is not counted",
        .bottom.amsl().into_feet()
    )]
    BelowTable { bottom: Position<f32> },
}

/// Time, fuel and distance of a climb.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ClimbPerformance {
    /// Time spent climbing.
    #[serde(serialize_with = "crate::serialize_minutes")]
    pub time:       Duration,
    /// Fuel used.
    pub fuel:       Fuel,
    /// Horizontal distance covered.
    pub distance:   Length<f32>,
    /// Altitude actually reached.
    pub reached:    Position<f32>,
    /// Set if the climb could not be computed up to the target.
    pub truncation: Option<Truncation>,
}

impl ClimbPerformance {
    /// A climb that does not happen.
    #[must_use]
    pub fn level(altitude: Position<f32>) -> Self {
        Self {
            time:       Duration::ZERO,
            fuel:       Fuel::ZERO,
            distance:   Length::ZERO,
            reached:    altitude,
            truncation: None,
        }
    }

    fn from_totals(totals: ClimbTotals, reached: Position<f32>) -> Self {
        Self {
            time: totals.time,
            fuel: totals.fuel,
            distance: totals.distance,
            reached,
            truncation: None,
        }
    }
}

/// Computes the time, fuel and distance to climb as requested.
///
/// Returns a zero climb if the request does not climb
/// or if the profile has no climb table.
#[must_use]
pub fn climb_performance(profile: &AircraftProfile, request: &ClimbRequest) -> ClimbPerformance {
    if request.to <= request.from {
        return ClimbPerformance::level(request.from);
    }

    match &profile.climb {
        None => {
            tracing::debug!("Profile {:?} has no climb table", profile.name);
            ClimbPerformance::level(request.from)
        }
        Some(ClimbTable::Cumulative(entries)) => cumulative_climb(entries, request),
        Some(ClimbTable::Segmented(segments)) => {
            let weight_ratio = weight_ratio(request.weight, profile.reference_weight());
            segmented_climb(segments, request, weight_ratio)
        }
    }
}

/// Ratio of `weight` to `reference`, or 1 if either is not positive.
pub(crate) fn weight_ratio(weight: Mass, reference: Mass) -> f32 {
    if weight.is_positive() && reference.is_positive() { weight / reference } else { 1.0 }
}

fn cumulative_climb(entries: &[CumulativeClimbEntry], request: &ClimbRequest) -> ClimbPerformance {
    let oat = request.oat.into_celsius();
    let at = |altitude: Position<f32>| {
        interpolate(entries, altitude.amsl().into_feet(), oat).map(|result| {
            if result.method.is_fallback() {
                tracing::debug!("Climb table lookup at {altitude:?} used {}", result.method);
            }
            result.value
        })
    };

    let Some((bottom, top)) = entries
        .iter()
        .map(|entry| entry.pressure_altitude)
        .minmax_by_key(|altitude| OrderedFloat(altitude.get()))
        .into_option()
    else {
        return ClimbPerformance::level(request.from);
    };

    // Lookups outside the table clamp to its edges, which must not count as climbing.
    let mut truncation = None;
    let mut from = request.from;
    if from < bottom {
        truncation = Some(Truncation::BelowTable { bottom });
        from = bottom;
    }
    let mut to = request.to;
    if to > top {
        truncation = Some(Truncation::AboveTable { top });
        to = top;
    }

    if let Some(truncation) = truncation {
        tracing::debug!("Climb truncated: {truncation}");
    }

    if to <= from {
        return ClimbPerformance { truncation, ..ClimbPerformance::level(request.from) };
    }

    match (at(from), at(to)) {
        (Some(start), Some(end)) => {
            ClimbPerformance { truncation, ..ClimbPerformance::from_totals(end.since(start), to) }
        }
        _ => ClimbPerformance::level(request.from),
    }
}

fn segmented_climb(
    segments: &[ClimbSegment],
    request: &ClimbRequest,
    weight_ratio: f32,
) -> ClimbPerformance {
    let mut totals = ClimbTotals::default();
    let mut altitude = request.from;
    let mut truncation = None;

    while altitude < request.to {
        let Some(band) = segments.iter().find(|segment| segment.contains(altitude)) else {
            truncation = Some(Truncation::NoBand { altitude });
            break;
        };

        let oat = request.oat - isa_temp_lapse(altitude - request.from);
        let da = density_altitude(altitude, oat);
        let rate = adjust_rate_of_climb(band.rate_of_climb, altitude, da) / weight_ratio;
        let top = band.altitude_to.min(request.to);
        let Some(time) = estimate_climb_time(top - altitude, rate) else {
            truncation = Some(Truncation::NonPositiveRate { altitude });
            break;
        };

        let ground_speed = (band.climb_tas - request.headwind).max(Speed::ZERO);
        totals.time += time;
        totals.distance += estimate_climb_distance(time, ground_speed);
        totals.fuel += band.fuel_flow * time;
        altitude = top;
    }

    if let Some(truncation) = truncation {
        tracing::debug!("Climb truncated: {truncation}");
    }

    ClimbPerformance { truncation, ..ClimbPerformance::from_totals(totals, altitude) }
}

/// Horizontal distance covered climbing for `time` at `climb_speed`.
#[must_use]
pub fn estimate_climb_distance(time: Duration, climb_speed: Speed<f32>) -> Length<f32> {
    climb_speed * time
}

/// Time to gain `gain` at rate of climb `rate`.
///
/// Returns `None` unless `rate` is positive and `gain` is not negative.
#[must_use]
pub fn estimate_climb_time(gain: Length<f32>, rate: Speed<f32>) -> Option<Duration> {
    if !rate.is_positive() {
        return None;
    }
    gain.try_div(rate)
}

/// Converts altitude bands into a cumulative table at a single OAT column.
///
/// The first row is the bottom of the lowest band with zero totals.
/// Conversion stops at the first band that does not climb or is not contiguous.
#[must_use]
pub fn segments_to_cumulative(segments: &[ClimbSegment], oat: Temp) -> Vec<CumulativeClimbEntry> {
    let sorted: Vec<&ClimbSegment> = segments
        .iter()
        .sorted_by_key(|segment| OrderedFloat(segment.altitude_from.get()))
        .collect();
    let Some(first) = sorted.first() else { return Vec::new() };

    let row = |altitude, totals: ClimbTotals| CumulativeClimbEntry {
        pressure_altitude: altitude,
        oat,
        time: totals.time,
        fuel: totals.fuel,
        distance: totals.distance,
    };

    let mut totals = ClimbTotals::default();
    let mut altitude = first.altitude_from;
    let mut entries = vec![row(altitude, totals)];

    for segment in sorted {
        if segment.altitude_from != altitude {
            tracing::debug!("Climb bands are not contiguous at {altitude:?}");
            break;
        }
        let Some(time) = estimate_climb_time(segment.height(), segment.rate_of_climb) else {
            break;
        };
        totals.time += time;
        totals.fuel += segment.fuel_flow * time;
        totals.distance += estimate_climb_distance(time, segment.climb_tas);
        altitude = segment.altitude_to;
        entries.push(row(altitude, totals));
    }

    entries
}

/// Converts a cumulative table into altitude bands,
/// using the OAT column of the table nearest to `oat`.
///
/// Rows that add no climb time are skipped.
#[must_use]
pub fn cumulative_to_segments(entries: &[CumulativeClimbEntry], oat: Temp) -> Vec<ClimbSegment> {
    let Some(column) = entries
        .iter()
        .map(|entry| entry.oat)
        .min_by_key(|column| OrderedFloat((*column - oat).abs().into_kelvins()))
    else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry.oat == column)
        .sorted_by_key(|entry| OrderedFloat(entry.pressure_altitude.get()))
        .tuple_windows()
        .filter_map(|(low, high)| {
            let time = high.time.checked_sub(low.time).filter(|time| !time.is_zero())?;
            Some(ClimbSegment {
                altitude_from: low.pressure_altitude,
                altitude_to:   high.pressure_altitude,
                rate_of_climb: (high.pressure_altitude - low.pressure_altitude) / time,
                climb_tas:     (high.distance - low.distance) / time,
                fuel_flow:     (high.fuel - low.fuel) / time,
            })
        })
        .collect()
}

/// Expresses any climb table as altitude bands at the given OAT.
#[must_use]
pub fn climb_bands(table: &ClimbTable, oat: Temp) -> Vec<ClimbSegment> {
    match table {
        ClimbTable::Cumulative(entries) => cumulative_to_segments(entries, oat),
        ClimbTable::Segmented(segments) => segments.clone(),
    }
}

/// Finds the band containing `altitude`,
/// or the band nearest to it if no band contains it.
#[must_use]
pub fn band_at(bands: &[ClimbSegment], altitude: Position<f32>) -> Option<&ClimbSegment> {
    bands.iter().find(|band| band.contains(altitude)).or_else(|| {
        bands.iter().min_by_key(|band| {
            let below = (band.altitude_from - altitude).max(Length::ZERO);
            let above = (altitude - band.altitude_to).max(Length::ZERO);
            OrderedFloat((below + above).into_feet())
        })
    })
}
