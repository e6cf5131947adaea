//! Headings and ground speeds from true course, airspeed and wind.
//!
//! Each phase of the leg solves its own wind triangle.
//! The resulting true heading is then converted to magnetic and compass references.

use std::iter;

use enum_map::EnumMap;
use itertools::Itertools;
use math::{Angle, Heading, Speed, Wind, solve_wind_triangle};
use ordered_float::OrderedFloat;
use store::{AircraftProfile, DeviationEntry};

use crate::FlightPhase;


/// Course and airspeed flown in one phase.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseInput {
    pub true_course:   Heading,
    pub true_airspeed: Speed<f32>,
    /// Wind for this phase.
    ///
    /// Climb and descent inherit the cruise wind if this is `None`.
    /// A cruise phase without wind is flown in calm air.
    pub wind:          Option<Wind>,
}

/// Parameters of a course calculation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CourseInput {
    /// Magnetic variation, positive east.
    pub variation: Angle,
    pub cruise:    PhaseInput,
    pub climb:     Option<PhaseInput>,
    pub descent:   Option<PhaseInput>,
}

impl CourseInput {
    /// The input of `phase` with the inherited wind resolved.
    #[must_use]
    pub fn phase(&self, phase: FlightPhase) -> Option<PhaseInput> {
        let input = match phase {
            FlightPhase::Climb => self.climb?,
            FlightPhase::Cruise => self.cruise,
            FlightPhase::Descent => self.descent?,
        };
        Some(PhaseInput { wind: input.wind.or(self.cruise.wind), ..input })
    }
}

/// Navigation solution of a single phase.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct NavigationPhase {
    /// Wind correction angle, positive to the right of the course.
    #[serde(serialize_with = "serialize_degrees")]
    pub wind_correction:   Angle,
    pub ground_speed:      Speed<f32>,
    pub true_heading:      Heading,
    pub magnetic_course:   Heading,
    pub magnetic_heading:  Heading,
    /// Compass deviation at the magnetic heading.
    #[serde(serialize_with = "serialize_degrees")]
    pub compass_deviation: Angle,
    /// Heading to fly by the compass.
    pub compass_course:    Heading,
    /// The crosswind exceeds the airspeed and the course cannot be held.
    pub saturated:         bool,
}

fn serialize_degrees<S: serde::Serializer>(angle: &Angle, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f32(angle.into_degrees())
}

/// Solves the navigation of every phase present in `input`.
#[must_use]
pub fn course_plan(
    profile: &AircraftProfile,
    input: &CourseInput,
) -> EnumMap<FlightPhase, Option<NavigationPhase>> {
    EnumMap::from_fn(|phase| {
        input
            .phase(phase)
            .map(|phase_input| navigate(&profile.compass_card, input.variation, phase_input))
    })
}

/// Solves the navigation of a single phase.
#[must_use]
pub fn navigate(card: &[DeviationEntry], variation: Angle, input: PhaseInput) -> NavigationPhase {
    let wind = input.wind.unwrap_or(Wind::CALM);
    let triangle = solve_wind_triangle(input.true_course, input.true_airspeed, wind);
    if triangle.saturated {
        tracing::debug!(
            "Crosswind exceeds {:?} on course {}",
            input.true_airspeed,
            input.true_course
        );
    }

    let magnetic_course = input.true_course - variation;
    let magnetic_heading = magnetic_course + triangle.correction;
    let compass_deviation = compass_deviation(card, magnetic_heading);

    NavigationPhase {
        wind_correction: triangle.correction,
        ground_speed: triangle.ground_speed,
        true_heading: input.true_course + triangle.correction,
        magnetic_course,
        magnetic_heading,
        compass_deviation,
        compass_course: magnetic_heading + compass_deviation,
        saturated: triangle.saturated,
    }
}

/// Interpolates the compass card at `magnetic_heading`,
/// wrapping between the last and first card entries through north.
///
/// Returns zero for an empty card.
#[must_use]
pub fn compass_deviation(card: &[DeviationEntry], magnetic_heading: Heading) -> Angle {
    let points: Vec<(f32, Angle)> = card
        .iter()
        .map(|entry| (entry.magnetic_heading.degrees(), entry.deviation))
        .sorted_by_key(|&(degrees, _)| OrderedFloat(degrees))
        .collect();
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Angle::ZERO;
    };

    let degrees = magnetic_heading.degrees();
    iter::once((last.0 - 360.0, last.1))
        .chain(points.iter().copied())
        .chain(iter::once((first.0 + 360.0, first.1)))
        .tuple_windows()
        .find(|&((low, _), (high, _))| low <= degrees && degrees < high)
        .map_or(first.1, |((low, low_deviation), (high, high_deviation))| {
            low_deviation.lerp(high_deviation, (degrees - low) / (high - low))
        })
}
