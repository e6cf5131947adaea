//! Performance and navigation calculators for light aircraft.
//!
//! Every calculator is a pure function from an [`AircraftProfile`](store::AircraftProfile)
//! and explicit conditions to a result value.
//! Problems with the inputs never abort a calculation:
//! they are reported in the result alongside a conservative substitute value.

#![warn(clippy::pedantic)]
#![allow(clippy::collapsible_else_if)] // this is usually intentional
#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]

pub mod climb;
pub mod conditions;
pub mod course;
pub mod cruise;
pub mod takeoff;
pub mod trip;
pub mod validate;

use std::time::Duration;

/// A phase of a flight leg.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    enum_map::Enum,
    strum::Display,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FlightPhase {
    Climb,
    Cruise,
    Descent,
}

pub(crate) fn serialize_minutes<S: serde::Serializer>(
    time: &Duration,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.serialize_f32(time.as_secs_f32() / math::SECONDS_PER_MINUTE)
}
