//! Takeoff performance and go/no-go decision.
//!
//! The ground roll comes from the profile's takeoff table when available,
//! and from a constant-acceleration estimate otherwise.
//! It is then corrected for surface, wind and slope,
//! and the distance to climb over the obstacle is added
//! using the rate of climb of the climb table band at the field's density altitude.

use std::time::Duration;

use math::interp::interpolate;
use math::{
    AirspeedPair, EARTH_SURFACE_GRAVITY, Length, Mass, Position, Speed,
    weight_adjusted_stall_speed,
};
use store::AircraftProfile;

use crate::climb::{
    band_at, climb_bands, estimate_climb_distance, estimate_climb_time, weight_ratio,
};
use crate::conditions::{Environment, Runway, Surface};
use crate::validate::{self, InputError};

#[cfg(test)]
mod tests;

/// Obstacle height assumed by published takeoff tables.
pub const DEFAULT_OBSTACLE_HEIGHT: Length<f32> = Length::from_feet(50.0);

/// Stall speed assumed if the profile publishes none.
pub const PLACEHOLDER_STALL_SPEED: Speed<f32> = Speed::from_knots(50.0);

/// Rate of climb substituted if the climb table yields no positive rate.
pub const MIN_RATE_OF_CLIMB: Speed<f32> = Speed::from_fpm(100.0);

/// Safety margins below this fraction of the runway are marginal.
pub const MARGINAL_SAFETY_MARGIN: f32 = 0.20;

/// Exponent of the weight ratio applied to tabulated ground roll.
const GROUND_ROLL_WEIGHT_EXPONENT: f32 = 1.7;

/// Mean takeoff acceleration as a fraction of gravity, for the ground roll estimate.
const ESTIMATED_ACCEL_G: f32 = 0.17;

/// Density altitude at which the estimated acceleration has degraded completely.
const ESTIMATED_ACCEL_CEILING: Length<f32> = Length::from_feet(40000.0);

/// Ground roll change per knot of headwind, as a fraction.
const HEADWIND_FACTOR_PER_KNOT: f32 = 0.09;

/// Ground roll change per percent of uphill slope, as a fraction.
const SLOPE_FACTOR_PER_PERCENT: f32 = 0.10;

/// No correction factor reduces the ground roll below this fraction.
const MIN_CORRECTION_FACTOR: f32 = 0.10;

const HIGH_DENSITY_ALTITUDE: Position<f32> = Position::from_amsl_feet(6000.0);
const NEAR_MAX_GROSS_MARGIN: f32 = 0.05;
const STEEP_UPHILL_PERCENT: f32 = 1.0;
const LOW_OBSTACLE_CLIMB_RATE: Speed<f32> = Speed::from_fpm(300.0);
const HIGH_TAS_RATIO: f32 = 1.15;

/// Parameters of a takeoff.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TakeoffInput {
    /// Takeoff weight.
    pub weight:            Mass,
    /// Field conditions.
    ///
    /// A tabulated ground roll is looked up by pressure altitude and OAT only,
    /// so the density altitude affects it through those two values.
    /// The supplied density altitude still drives the V-speeds, the climb rate
    /// and the estimated ground roll of profiles without a takeoff table.
    pub environment:       Environment,
    pub runway:            Runway,
    /// Height of the obstacle to clear, usually [`DEFAULT_OBSTACLE_HEIGHT`].
    pub obstacle_height:   Length<f32>,
    /// Distance of the obstacle from the start of the takeoff run, if known.
    pub obstacle_distance: Option<Length<f32>>,
}

/// Indicated and true takeoff reference speeds.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct VSpeeds {
    /// Weight-adjusted clean stall speed.
    pub stall:      AirspeedPair,
    /// Rotation speed.
    pub rotation:   AirspeedPair,
    /// Best angle of climb speed, Vx.
    pub best_angle: AirspeedPair,
    /// Best rate of climb speed, Vy.
    pub best_rate:  AirspeedPair,
}

impl VSpeeds {
    /// Derives the reference speeds from the stall speed.
    #[must_use]
    pub fn from_stall(stall: Speed<f32>, density_altitude: Position<f32>) -> Self {
        Self {
            stall:      AirspeedPair::at(stall, density_altitude),
            rotation:   AirspeedPair::at(stall * 1.2, density_altitude),
            best_angle: AirspeedPair::at(stall * 1.3, density_altitude),
            best_rate:  AirspeedPair::at(stall * 1.4, density_altitude),
        }
    }
}

/// Takeoff distances after all corrections.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TakeoffDistances {
    /// Distance from brake release to liftoff.
    pub ground_roll:         Length<f32>,
    /// Horizontal distance from liftoff to the obstacle height.
    pub climb_to_obstacle:   Length<f32>,
    /// Total distance from brake release to clearing the obstacle.
    pub obstacle_clearance:  Length<f32>,
    /// Published distance over a 50 ft obstacle, corrected for weight only.
    pub published_over_50ft: Option<Length<f32>>,
}

/// Go/no-go decision, derived only from the safety margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, serde::Serialize)]
pub enum TakeoffDecision {
    #[strum(serialize = "GO")]
    #[serde(rename = "GO")]
    Go,
    #[strum(serialize = "MARGINAL")]
    #[serde(rename = "MARGINAL")]
    Marginal,
    #[strum(serialize = "NO-GO")]
    #[serde(rename = "NO-GO")]
    NoGo,
}

impl TakeoffDecision {
    /// Classifies a safety margin, the unused fraction of the runway.
    #[must_use]
    pub fn from_margin(margin: f32) -> Self {
        if margin >= MARGINAL_SAFETY_MARGIN {
            Self::Go
        } else if margin > 0.0 {
            Self::Marginal
        } else {
            Self::NoGo
        }
    }
}

/// A condition that degrades takeoff performance without invalidating the result.
#[derive(Debug, Clone, PartialEq, thiserror::Error, serde_with::SerializeDisplay)]
pub enum TakeoffWarning {
    #[error("no takeoff table, ground roll is estimated")]
    EstimatedGroundRoll,
    #[error("takeoff table has no data around this point, using the {method} value")]
    InterpolationFallback { method: math::interp::Method },
    #[error("density altitude {:.0} ft is high", .density_altitude.amsl().into_feet())]
    HighDensityAltitude { density_altitude: Position<f32> },
    #[error("weight is within {:.0}% of maximum gross weight", NEAR_MAX_GROSS_MARGIN * 100.0)]
    NearMaxGross,
    #[error("tailwind component of {:.0} kt", .headwind.into_knots().abs())]
    Tailwind { headwind: Speed<f32> },
    #[error("{surface} surface increases the ground roll")]
    NonIdealSurface { surface: Surface },
    #[error("uphill slope of {slope_percent:.1}%")]
    UphillSlope { slope_percent: f32 },
    #[error(
        "rate of climb {:.0} fpm is marginal for a {:.0} ft obstacle",
        .rate_of_climb.into_fpm(), .obstacle_height.into_feet()
    )]
    MarginalObstacleClimb { rate_of_climb: Speed<f32>, obstacle_height: Length<f32> },
    #[error(
        "rotation TAS {:.0} kt is well above IAS {:.0} kt",
        .rotation.tas.into_knots(), .rotation.ias.into_knots()
    )]
    HighTrueAirspeed { rotation: AirspeedPair },
    #[error(
        "obstacle is cleared after {:.0} ft but is {:.0} ft from the start of the run",
        .required.into_feet(), .available.into_feet()
    )]
    ObstacleNotCleared { required: Length<f32>, available: Length<f32> },
}

/// Result of a takeoff performance calculation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TakeoffPerformance {
    pub decision:      TakeoffDecision,
    pub v_speeds:      VSpeeds,
    pub distances:     TakeoffDistances,
    /// Unused fraction of the runway after clearing the obstacle, -1 for an invalid runway.
    pub safety_margin: f32,
    /// Rate of climb used to climb over the obstacle.
    pub rate_of_climb: Speed<f32>,
    pub warnings:      Vec<TakeoffWarning>,
    pub errors:        Vec<InputError>,
}

/// Ground roll and published obstacle distance before runway corrections.
struct BaseDistances {
    ground_roll: Length<f32>,
    over_50ft:   Option<Length<f32>>,
}

fn base_distances(
    profile: &AircraftProfile,
    input: &TakeoffInput,
    weight_ratio: f32,
    rotation: AirspeedPair,
    warnings: &mut Vec<TakeoffWarning>,
) -> BaseDistances {
    let environment = &input.environment;
    let lookup = interpolate(
        &profile.takeoff,
        environment.pressure_altitude.amsl().into_feet(),
        environment.oat.into_celsius(),
    );

    if let Some(result) = lookup {
        if result.method.is_fallback() {
            warnings.push(TakeoffWarning::InterpolationFallback { method: result.method });
        }
        let weight_factor = weight_ratio.powf(GROUND_ROLL_WEIGHT_EXPONENT);
        return BaseDistances {
            ground_roll: result.value.ground_roll * weight_factor,
            over_50ft:   Some(result.value.over_50ft * weight_factor),
        };
    }

    warnings.push(TakeoffWarning::EstimatedGroundRoll);
    let degradation =
        (1.0 - environment.density_altitude.amsl() / ESTIMATED_ACCEL_CEILING).max(0.5);
    let accel = EARTH_SURFACE_GRAVITY * (ESTIMATED_ACCEL_G * degradation);
    let speed = rotation.tas.into_feet_per_sec();
    let ground_roll = Length::from_feet(speed * speed / (2.0 * accel.into_feet_per_sec2()));
    tracing::debug!("Estimated ground roll {ground_roll:?} for {:?}", profile.name);
    BaseDistances { ground_roll, over_50ft: None }
}

/// Multiplier on the ground roll for runway surface, wind and slope.
fn runway_factor(runway: &Runway) -> f32 {
    let surface = runway.surface.ground_roll_factor().max(MIN_CORRECTION_FACTOR);
    let wind =
        (1.0 - runway.headwind.into_knots() * HEADWIND_FACTOR_PER_KNOT).max(MIN_CORRECTION_FACTOR);
    let slope =
        (1.0 + runway.slope_percent * SLOPE_FACTOR_PER_PERCENT).max(MIN_CORRECTION_FACTOR);
    surface * wind * slope
}

/// Computes takeoff performance and the go/no-go decision.
///
/// Never fails: invalid inputs are reported in [`TakeoffPerformance::errors`]
/// and replaced with conservative substitutes.
#[must_use]
pub fn takeoff_performance(profile: &AircraftProfile, input: &TakeoffInput) -> TakeoffPerformance {
    let environment = &input.environment;
    let runway = &input.runway;
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    errors.extend(validate::check_weight(&profile.weights, input.weight));
    errors.extend(validate::check_runway(runway));
    errors.extend(validate::check_environment(environment));

    let reference_weight = profile.reference_weight();
    let weight_ratio = weight_ratio(input.weight, reference_weight);

    let stall_reference = match (profile.speeds.vs1, profile.clean_stall_speed()) {
        (Some(vs1), _) => vs1,
        (None, substitute) => {
            let substitute = substitute.unwrap_or(PLACEHOLDER_STALL_SPEED);
            errors.push(InputError::MissingStallSpeed { substitute });
            substitute
        }
    };
    let stall = weight_adjusted_stall_speed(stall_reference, input.weight, reference_weight);
    let v_speeds = VSpeeds::from_stall(stall, environment.density_altitude);

    let base = base_distances(profile, input, weight_ratio, v_speeds.rotation, &mut warnings);
    let ground_roll = base.ground_roll * runway_factor(runway);

    let band_rate = profile
        .climb
        .as_ref()
        .and_then(|table| {
            let bands = climb_bands(table, environment.oat);
            band_at(&bands, environment.density_altitude).map(|band| band.rate_of_climb)
        })
        .unwrap_or(Speed::ZERO);
    let mut rate_of_climb = band_rate * (2.0 - weight_ratio);
    if !rate_of_climb.is_positive() {
        errors.push(InputError::NonPositiveClimbRate { substitute: MIN_RATE_OF_CLIMB });
        rate_of_climb = MIN_RATE_OF_CLIMB;
    }

    let time_to_obstacle =
        estimate_climb_time(input.obstacle_height, rate_of_climb).unwrap_or(Duration::ZERO);
    let climb_to_obstacle = estimate_climb_distance(time_to_obstacle, v_speeds.best_angle.tas);
    let obstacle_clearance = ground_roll + climb_to_obstacle;

    let safety_margin = if runway.length.is_positive() {
        (runway.length - obstacle_clearance) / runway.length
    } else {
        -1.0
    };
    let decision = TakeoffDecision::from_margin(safety_margin);

    if environment.density_altitude > HIGH_DENSITY_ALTITUDE {
        warnings.push(TakeoffWarning::HighDensityAltitude {
            density_altitude: environment.density_altitude,
        });
    }
    let max_gross = profile.weights.max_gross;
    if max_gross.is_positive() && (max_gross - input.weight) / max_gross < NEAR_MAX_GROSS_MARGIN {
        warnings.push(TakeoffWarning::NearMaxGross);
    }
    if runway.headwind.is_negative() {
        warnings.push(TakeoffWarning::Tailwind { headwind: runway.headwind });
    }
    if !runway.surface.is_ideal() {
        warnings.push(TakeoffWarning::NonIdealSurface { surface: runway.surface });
    }
    if runway.slope_percent > STEEP_UPHILL_PERCENT {
        warnings.push(TakeoffWarning::UphillSlope { slope_percent: runway.slope_percent });
    }
    if input.obstacle_height > DEFAULT_OBSTACLE_HEIGHT && rate_of_climb < LOW_OBSTACLE_CLIMB_RATE {
        warnings.push(TakeoffWarning::MarginalObstacleClimb {
            rate_of_climb,
            obstacle_height: input.obstacle_height,
        });
    }
    if v_speeds.rotation.tas > v_speeds.rotation.ias * HIGH_TAS_RATIO {
        warnings.push(TakeoffWarning::HighTrueAirspeed { rotation: v_speeds.rotation });
    }
    if let Some(available) = input.obstacle_distance
        && obstacle_clearance > available
    {
        warnings
            .push(TakeoffWarning::ObstacleNotCleared { required: obstacle_clearance, available });
    }

    TakeoffPerformance {
        decision,
        v_speeds,
        distances: TakeoffDistances {
            ground_roll,
            climb_to_obstacle,
            obstacle_clearance,
            published_over_50ft: base.over_50ft,
        },
        safety_margin,
        rate_of_climb,
        warnings,
        errors,
    }
}
