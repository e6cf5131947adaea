use anyhow::{Context, Result};
use enum_map::EnumMap;
use math::{Angle, Heading, Length, Mass, Position, Speed, Temp, Wind};
use preflight::FlightPhase;
use preflight::climb::{ClimbPerformance, ClimbRequest, climb_performance};
use preflight::conditions::{Environment, Runway, Surface};
use preflight::course::{CourseInput, NavigationPhase, PhaseInput, course_plan};
use preflight::cruise::{CruisePerformance, cruise_performance};
use preflight::takeoff::{TakeoffInput, TakeoffPerformance, takeoff_performance};
use preflight::trip::{Descent, TripInput, TripPlan, trip_plan};

use crate::profile::ProfileArg;

#[derive(clap::Args)]
pub struct TakeoffArgs {
    #[clap(flatten)]
    profile:           ProfileArg,
    /// Takeoff weight in pounds.
    #[clap(long)]
    weight:            f32,
    /// Field pressure altitude in feet.
    #[clap(long, default_value_t = 0.0)]
    pressure_altitude: f32,
    /// Outside air temperature in degrees Celsius.
    #[clap(long, default_value_t = 15.0, allow_negative_numbers = true)]
    oat:               f32,
    /// Density altitude in feet. Derived from pressure altitude and OAT if omitted.
    #[clap(long, allow_negative_numbers = true)]
    density_altitude:  Option<f32>,
    /// Available takeoff run in feet.
    #[clap(long)]
    runway_length:     f32,
    #[clap(long, default_value_t = Surface::PavedGood)]
    surface:           Surface,
    /// Runway slope in percent, positive uphill.
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    slope:             f32,
    /// Headwind component in knots, negative for a tailwind.
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    headwind:          f32,
    /// Obstacle height in feet.
    #[clap(long, default_value_t = 50.0)]
    obstacle_height:   f32,
    /// Distance of the obstacle from the start of the run in feet.
    #[clap(long)]
    obstacle_distance: Option<f32>,
}

pub fn takeoff(args: &TakeoffArgs) -> Result<TakeoffPerformance> {
    let profile = args.profile.load()?;
    let pressure_altitude = Position::from_amsl_feet(args.pressure_altitude);
    let oat = Temp::from_celsius(args.oat);
    let environment = match args.density_altitude {
        Some(density_altitude) => Environment {
            pressure_altitude,
            density_altitude: Position::from_amsl_feet(density_altitude),
            oat,
        },
        None => Environment::from_oat(pressure_altitude, oat),
    };

    Ok(takeoff_performance(
        &profile,
        &TakeoffInput {
            weight: Mass::from_pounds(args.weight),
            environment,
            runway: Runway {
                length:        Length::from_feet(args.runway_length),
                surface:       args.surface,
                slope_percent: args.slope,
                headwind:      Speed::from_knots(args.headwind),
            },
            obstacle_height: Length::from_feet(args.obstacle_height),
            obstacle_distance: args.obstacle_distance.map(Length::from_feet),
        },
    ))
}

#[derive(clap::Args)]
pub struct ClimbArgs {
    #[clap(flatten)]
    profile:  ProfileArg,
    /// Weight in pounds.
    #[clap(long)]
    weight:   f32,
    /// Pressure altitude at the start of the climb in feet.
    #[clap(long, default_value_t = 0.0)]
    from:     f32,
    /// Target pressure altitude in feet.
    #[clap(long)]
    to:       f32,
    /// Outside air temperature at the start of the climb in degrees Celsius.
    #[clap(long, default_value_t = 15.0, allow_negative_numbers = true)]
    oat:      f32,
    /// Mean headwind component in knots, negative for a tailwind.
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    headwind: f32,
}

impl ClimbArgs {
    fn request(&self) -> ClimbRequest {
        ClimbRequest {
            from:     Position::from_amsl_feet(self.from),
            to:       Position::from_amsl_feet(self.to),
            oat:      Temp::from_celsius(self.oat),
            weight:   Mass::from_pounds(self.weight),
            headwind: Speed::from_knots(self.headwind),
        }
    }
}

pub fn climb(args: &ClimbArgs) -> Result<ClimbPerformance> {
    let profile = args.profile.load()?;
    Ok(climb_performance(&profile, &args.request()))
}

/// Wind given as the true direction it blows from and its speed in knots.
#[derive(clap::Args)]
pub struct WindArgs {
    /// True direction the cruise wind blows from, in degrees.
    #[clap(long, requires = "wind_speed")]
    wind_from:  Option<f32>,
    /// Cruise wind speed in knots.
    #[clap(long, requires = "wind_from")]
    wind_speed: Option<f32>,
}

fn wind(from: Option<f32>, speed: Option<f32>) -> Option<Wind> {
    Some(Wind { from: Heading::from_degrees(from?), speed: Speed::from_knots(speed?) })
}

#[derive(clap::Args)]
pub struct CourseArgs {
    #[clap(flatten)]
    profile:            ProfileArg,
    /// True course in degrees.
    #[clap(long)]
    true_course:        f32,
    /// Cruise true airspeed in knots.
    #[clap(long)]
    tas:                f32,
    #[clap(flatten)]
    wind:               WindArgs,
    /// Magnetic variation in degrees, positive east.
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    variation:          f32,
    /// Climb true airspeed in knots. The climb phase is omitted if unset.
    #[clap(long)]
    climb_tas:          Option<f32>,
    /// Direction the climb wind blows from. Defaults to the cruise wind.
    #[clap(long, requires = "climb_wind_speed")]
    climb_wind_from:    Option<f32>,
    #[clap(long, requires = "climb_wind_from")]
    climb_wind_speed:   Option<f32>,
    /// Descent true airspeed in knots. The descent phase is omitted if unset.
    #[clap(long)]
    descent_tas:        Option<f32>,
    /// Direction the descent wind blows from. Defaults to the cruise wind.
    #[clap(long, requires = "descent_wind_speed")]
    descent_wind_from:  Option<f32>,
    #[clap(long, requires = "descent_wind_from")]
    descent_wind_speed: Option<f32>,
}

impl CourseArgs {
    fn input(&self) -> CourseInput {
        let true_course = Heading::from_degrees(self.true_course);
        let phase = |tas: f32, wind| PhaseInput {
            true_course,
            true_airspeed: Speed::from_knots(tas),
            wind,
        };
        CourseInput {
            variation: Angle::from_degrees(self.variation),
            cruise:    phase(self.tas, wind(self.wind.wind_from, self.wind.wind_speed)),
            climb:     self
                .climb_tas
                .map(|tas| phase(tas, wind(self.climb_wind_from, self.climb_wind_speed))),
            descent:   self
                .descent_tas
                .map(|tas| phase(tas, wind(self.descent_wind_from, self.descent_wind_speed))),
        }
    }
}

pub fn course(args: &CourseArgs) -> Result<EnumMap<FlightPhase, Option<NavigationPhase>>> {
    let profile = args.profile.load()?;
    Ok(course_plan(&profile, &args.input()))
}

#[derive(clap::Args)]
pub struct CruiseArgs {
    #[clap(flatten)]
    profile:           ProfileArg,
    /// Cruise pressure altitude in feet.
    #[clap(long)]
    pressure_altitude: f32,
    /// Power setting in percent.
    #[clap(long, default_value_t = 65.0)]
    power:             f32,
}

pub fn cruise(args: &CruiseArgs) -> Result<CruisePerformance> {
    let profile = args.profile.load()?;
    cruise_performance(&profile, Position::from_amsl_feet(args.pressure_altitude), args.power)
        .with_context(|| format!("profile {:?} has no cruise table", profile.name))
}

#[derive(clap::Args)]
pub struct TripArgs {
    #[clap(flatten)]
    profile:           ProfileArg,
    /// Weight at departure in pounds.
    #[clap(long)]
    weight:            f32,
    /// Departure pressure altitude in feet.
    #[clap(long, default_value_t = 0.0)]
    departure:         f32,
    /// Cruise pressure altitude in feet.
    #[clap(long)]
    cruise_altitude:   f32,
    /// Arrival pressure altitude in feet.
    #[clap(long, default_value_t = 0.0)]
    arrival:           f32,
    /// Outside air temperature at departure in degrees Celsius.
    #[clap(long, default_value_t = 15.0, allow_negative_numbers = true)]
    oat:               f32,
    /// Cruise power setting in percent.
    #[clap(long, default_value_t = 65.0)]
    power:             f32,
    /// Leg distance in nautical miles.
    #[clap(long)]
    distance:          f32,
    /// True course in degrees.
    #[clap(long)]
    true_course:       f32,
    #[clap(flatten)]
    wind:              WindArgs,
    /// Magnetic variation in degrees, positive east.
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    variation:         f32,
    /// Rate of descent in feet per minute.
    #[clap(long, default_value_t = 500.0)]
    descent_rate:      f32,
}

#[derive(serde::Serialize)]
pub struct TripReport {
    climb:      ClimbPerformance,
    cruise:     CruisePerformance,
    navigation: NavigationPhase,
    plan:       TripPlan,
}

pub fn trip(args: &TripArgs) -> Result<TripReport> {
    let profile = args.profile.load()?;
    let cruise_altitude = Position::from_amsl_feet(args.cruise_altitude);
    let cruise = cruise_performance(&profile, cruise_altitude, args.power)
        .with_context(|| format!("profile {:?} has no cruise table", profile.name))?;

    let course = CourseInput {
        variation: Angle::from_degrees(args.variation),
        cruise:    PhaseInput {
            true_course:   Heading::from_degrees(args.true_course),
            true_airspeed: cruise.tas,
            wind:          wind(args.wind.wind_from, args.wind.wind_speed),
        },
        climb:     None,
        descent:   None,
    };
    let navigation = course_plan(&profile, &course)[FlightPhase::Cruise]
        .context("cruise phase is always solved")?;
    let headwind = cruise.tas - navigation.ground_speed;

    let climb = climb_performance(
        &profile,
        &ClimbRequest {
            from: Position::from_amsl_feet(args.departure),
            to: cruise_altitude,
            oat: Temp::from_celsius(args.oat),
            weight: Mass::from_pounds(args.weight),
            headwind,
        },
    );
    if let Some(truncation) = climb.truncation {
        tracing::warn!("Climb stops short of cruise altitude: {truncation}");
    }

    let plan = trip_plan(&TripInput {
        leg_distance: Length::from_nm(args.distance),
        climb,
        cruise_ground_speed: navigation.ground_speed,
        cruise_fuel_flow: cruise.fuel_flow,
        descent: Descent {
            altitude_to_lose: (climb.reached - Position::from_amsl_feet(args.arrival))
                .max(Length::ZERO),
            rate:             Speed::from_fpm(args.descent_rate),
            ground_speed:     navigation.ground_speed,
            fuel_flow:        cruise.fuel_flow,
        },
    });
    for advisory in &plan.advisories {
        tracing::warn!("{advisory}");
    }

    Ok(TripReport { climb, cruise, navigation, plan })
}
