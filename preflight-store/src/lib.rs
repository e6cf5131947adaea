//! Schema for aircraft performance profiles.
//!
//! Quantities are stored in the units flight manuals publish them in:
//! feet for altitudes and takeoff distances, nautical miles for climb distances,
//! knots for airspeeds, feet per minute for rates of climb,
//! pounds for weights, US gallons for fuel and gallons per hour for fuel flow.
//! Temperatures are stored in degrees Celsius, table times in minutes
//! and compass card headings and deviations in degrees.

#![warn(clippy::pedantic, missing_docs)]
#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]

use serde::{Deserialize, Serialize};

mod profile;
pub use profile::*;

mod tables;
pub use tables::*;

mod legacy;
pub use legacy::*;

mod check;
pub use check::*;

mod builtin;
pub use builtin::*;

mod degrees;
mod minutes;
mod published;


/// Root structure of a profile file.
///
/// Older files use the flat legacy layout.
/// Both are resolved into an [`AircraftProfile`] once at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ProfileFile {
    /// The flat layout with separate climb table fields.
    Legacy(LegacyProfile),
    /// The current structured layout.
    Current(AircraftProfile),
}

impl ProfileFile {
    /// Migrates the file into the current profile structure if necessary.
    #[must_use]
    pub fn resolve(self) -> AircraftProfile {
        match self {
            Self::Legacy(legacy) => legacy.into(),
            Self::Current(profile) => profile,
        }
    }
}

impl From<AircraftProfile> for ProfileFile {
    fn from(profile: AircraftProfile) -> Self { Self::Current(profile) }
}
