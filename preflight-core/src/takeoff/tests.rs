use math::interp::Method;
use math::{Length, Mass, Position, Speed, Temp};
use store::{AircraftProfile, c150};

use super::{
    DEFAULT_OBSTACLE_HEIGHT, MIN_RATE_OF_CLIMB, PLACEHOLDER_STALL_SPEED, TakeoffDecision,
    TakeoffInput, TakeoffWarning, takeoff_performance,
};
use crate::conditions::{Environment, Runway, Surface};
use crate::validate::InputError;

fn sea_level_input() -> TakeoffInput {
    TakeoffInput {
        weight:            Mass::from_pounds(1500.0),
        environment:       Environment::from_oat(Position::SEA_LEVEL, Temp::from_celsius(15.0)),
        runway:            Runway {
            length:        Length::from_feet(3000.0),
            surface:       Surface::PavedGood,
            slope_percent: 0.0,
            headwind:      Speed::ZERO,
        },
        obstacle_height:   DEFAULT_OBSTACLE_HEIGHT,
        obstacle_distance: None,
    }
}

#[test]
fn rotation_is_exactly_twelve_tenths_of_stall() {
    let result = takeoff_performance(&c150(), &sea_level_input());
    assert_eq!(result.v_speeds.rotation.ias, result.v_speeds.stall.ias * 1.2);
    assert_eq!(result.v_speeds.best_angle.ias, result.v_speeds.stall.ias * 1.3);
    assert_eq!(result.v_speeds.best_rate.ias, result.v_speeds.stall.ias * 1.4);
}

#[test]
fn stall_speed_at_reference_weight_is_published() {
    let result = takeoff_performance(&c150(), &sea_level_input());
    let stall = result.v_speeds.stall;
    stall.ias.assert_approx(Speed::from_knots(48.0), Speed::from_knots(1e-3)).unwrap();
    stall.tas.assert_approx(stall.ias, Speed::from_knots(0.01)).unwrap();
}

#[test]
fn stall_speed_scales_with_root_weight() {
    let light = takeoff_performance(&c150(), &sea_level_input());
    let heavy = takeoff_performance(
        &c150(),
        &TakeoffInput { weight: Mass::from_pounds(1600.0), ..sea_level_input() },
    );
    let ratio = heavy.v_speeds.stall.ias / light.v_speeds.stall.ias;
    assert!((ratio - (1600.0f32 / 1500.0).sqrt()).abs() < 1e-5);
}

#[test]
fn tabulated_ground_roll() {
    let result = takeoff_performance(&c150(), &sea_level_input());
    // 0.75 of the way from the 0 C to the 20 C column at sea level.
    result
        .distances
        .ground_roll
        .assert_approx(Length::from_feet(730.0), Length::from_feet(0.1))
        .unwrap();
    result
        .distances
        .published_over_50ft
        .unwrap()
        .assert_approx(Length::from_feet(1366.25), Length::from_feet(0.1))
        .unwrap();
    assert_eq!(
        result.distances.obstacle_clearance,
        result.distances.ground_roll + result.distances.climb_to_obstacle
    );
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
}

#[test]
fn supplied_density_altitude_drives_speeds_not_tabulated_roll() {
    let derived = takeoff_performance(&c150(), &sea_level_input());
    let mut input = sea_level_input();
    input.environment.density_altitude = Position::from_amsl_feet(3000.0);
    let supplied = takeoff_performance(&c150(), &input);

    assert_eq!(supplied.distances.ground_roll, derived.distances.ground_roll);
    assert!(supplied.v_speeds.rotation.tas > derived.v_speeds.rotation.tas);
    assert_eq!(supplied.v_speeds.rotation.ias, derived.v_speeds.rotation.ias);
}

#[test]
fn obstacle_climb_uses_band_at_density_altitude() {
    let result = takeoff_performance(&c150(), &sea_level_input());
    // First band of the 20 C column climbs 2000 ft in 3 minutes.
    result
        .rate_of_climb
        .assert_approx(Speed::from_fpm(2000.0 / 3.0), Speed::from_fpm(0.1))
        .unwrap();
    let time = 50.0 / result.rate_of_climb.into_feet_per_sec();
    let expected = result.v_speeds.best_angle.tas.into_feet_per_sec() * time;
    assert!((result.distances.climb_to_obstacle.into_feet() - expected).abs() < 0.1);
}

#[test]
fn decision_thresholds() {
    assert_eq!(TakeoffDecision::from_margin(-1.0), TakeoffDecision::NoGo);
    assert_eq!(TakeoffDecision::from_margin(0.0), TakeoffDecision::NoGo);
    assert_eq!(TakeoffDecision::from_margin(0.01), TakeoffDecision::Marginal);
    assert_eq!(TakeoffDecision::from_margin(0.199), TakeoffDecision::Marginal);
    assert_eq!(TakeoffDecision::from_margin(0.20), TakeoffDecision::Go);
    assert_eq!(TakeoffDecision::from_margin(0.9), TakeoffDecision::Go);
    assert_eq!(TakeoffDecision::NoGo.to_string(), "NO-GO");
}

#[test]
fn marginal_runway() {
    let result = takeoff_performance(
        &c150(),
        &TakeoffInput {
            runway: Runway { length: Length::from_feet(1400.0), ..sea_level_input().runway },
            ..sea_level_input()
        },
    );
    assert!(result.safety_margin > 0.0 && result.safety_margin < 0.2, "{}", result.safety_margin);
    assert_eq!(result.decision, TakeoffDecision::Marginal);
}

#[test]
fn non_positive_runway() {
    let result = takeoff_performance(
        &c150(),
        &TakeoffInput {
            runway: Runway { length: Length::ZERO, ..sea_level_input().runway },
            ..sea_level_input()
        },
    );
    assert_eq!(result.safety_margin, -1.0);
    assert_eq!(result.decision, TakeoffDecision::NoGo);
    assert!(result.errors.contains(&InputError::NonPositiveRunway { length: Length::ZERO }));
}

#[test]
fn water_surface_is_rejected_conservatively() {
    let water = takeoff_performance(
        &c150(),
        &TakeoffInput {
            runway: Runway { surface: Surface::Water, ..sea_level_input().runway },
            ..sea_level_input()
        },
    );
    let sand = takeoff_performance(
        &c150(),
        &TakeoffInput {
            runway: Runway { surface: Surface::Sand, ..sea_level_input().runway },
            ..sea_level_input()
        },
    );
    assert!(water.errors.iter().any(|error| error.to_string().contains("water")));
    assert!(sand.errors.is_empty());
    assert_eq!(water.distances.ground_roll, sand.distances.ground_roll);
}

#[test]
fn estimated_ground_roll_without_table() {
    let mut profile = c150();
    profile.takeoff.clear();
    let result = takeoff_performance(&profile, &sea_level_input());
    assert!(result.warnings.contains(&TakeoffWarning::EstimatedGroundRoll));
    assert_eq!(result.distances.published_over_50ft, None);

    let rotation = result.v_speeds.rotation.tas.into_feet_per_sec();
    let expected = rotation * rotation / (2.0 * 32.174 * 0.17);
    assert!((result.distances.ground_roll.into_feet() - expected).abs() < 1.0, "{result:?}");
}

#[test]
fn interpolation_fallback_is_reported() {
    let mut profile = c150();
    profile
        .takeoff
        .retain(|entry| entry.oat != Temp::from_celsius(20.0) || entry.altitude.get() != 0.0);
    let result = takeoff_performance(&profile, &sea_level_input());
    assert!(result.warnings.contains(&TakeoffWarning::InterpolationFallback {
        method: Method::CornerFallback
    }));
}

fn stall_fallback(profile: &AircraftProfile) -> (Speed<f32>, Vec<InputError>) {
    let result = takeoff_performance(profile, &sea_level_input());
    (result.v_speeds.stall.ias, result.errors)
}

#[test]
fn missing_clean_stall_speed() {
    let mut profile = c150();
    profile.speeds.vs1 = None;
    let (stall, errors) = stall_fallback(&profile);
    assert_eq!(stall, Speed::from_knots(42.0));
    assert_eq!(errors, vec![InputError::MissingStallSpeed { substitute: Speed::from_knots(42.0) }]);

    profile.speeds.vs0 = None;
    let (stall, errors) = stall_fallback(&profile);
    assert_eq!(stall, PLACEHOLDER_STALL_SPEED);
    assert_eq!(errors, vec![InputError::MissingStallSpeed { substitute: PLACEHOLDER_STALL_SPEED }]);
}

#[test]
fn missing_climb_table_uses_minimum_rate() {
    let mut profile = c150();
    profile.climb = None;
    let result = takeoff_performance(&profile, &sea_level_input());
    assert_eq!(result.rate_of_climb, MIN_RATE_OF_CLIMB);
    assert_eq!(
        result.errors,
        vec![InputError::NonPositiveClimbRate { substitute: MIN_RATE_OF_CLIMB }]
    );
}

#[test]
fn out_of_range_weight_still_computes() {
    let result = takeoff_performance(
        &c150(),
        &TakeoffInput { weight: Mass::from_pounds(1800.0), ..sea_level_input() },
    );
    assert!(matches!(result.errors.as_slice(), [InputError::WeightOutOfRange { .. }]));
    assert!(result.distances.ground_roll.is_positive());
}

#[test]
fn condition_warnings() {
    let result = takeoff_performance(
        &c150(),
        &TakeoffInput {
            weight:            Mass::from_pounds(1600.0),
            environment:       Environment::from_oat(
                Position::from_amsl_feet(5000.0),
                Temp::from_celsius(30.0),
            ),
            runway:            Runway {
                length:        Length::from_feet(2500.0),
                surface:       Surface::GrassGood,
                slope_percent: 1.5,
                headwind:      Speed::from_knots(-3.0),
            },
            obstacle_height:   Length::from_feet(80.0),
            obstacle_distance: Some(Length::from_feet(1000.0)),
        },
    );

    let has = |predicate: fn(&TakeoffWarning) -> bool| result.warnings.iter().any(predicate);
    assert!(has(|warning| matches!(warning, TakeoffWarning::HighDensityAltitude { .. })));
    assert!(has(|warning| matches!(warning, TakeoffWarning::NearMaxGross)));
    assert!(has(|warning| matches!(warning, TakeoffWarning::Tailwind { .. })));
    assert!(has(|warning| matches!(warning, TakeoffWarning::NonIdealSurface { .. })));
    assert!(has(|warning| matches!(warning, TakeoffWarning::UphillSlope { .. })));
    assert!(has(|warning| matches!(warning, TakeoffWarning::ObstacleNotCleared { .. })));
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let tailwind = TakeoffWarning::Tailwind { headwind: Speed::from_knots(-3.0) };
    assert_eq!(tailwind.to_string(), "tailwind component of 3 kt");
}

#[test]
fn high_true_airspeed_warning() {
    let result = takeoff_performance(
        &c150(),
        &TakeoffInput {
            environment: Environment {
                pressure_altitude: Position::from_amsl_feet(7500.0),
                density_altitude:  Position::from_amsl_feet(9000.0),
                oat:               Temp::from_celsius(15.0),
            },
            ..sea_level_input()
        },
    );
    assert!(
        result
            .warnings
            .iter()
            .any(|warning| matches!(warning, TakeoffWarning::HighTrueAirspeed { .. }))
    );
}

#[test]
fn marginal_obstacle_climb_warning() {
    let mut profile = c150();
    profile.climb = None;
    let result = takeoff_performance(
        &profile,
        &TakeoffInput { obstacle_height: Length::from_feet(100.0), ..sea_level_input() },
    );
    assert!(
        result
            .warnings
            .iter()
            .any(|warning| matches!(warning, TakeoffWarning::MarginalObstacleClimb { .. }))
    );
}

/// Generates a test asserting that the ground roll strictly increases
/// as the input is modified with each value in turn.
macro_rules! ground_roll_increases_with {
    ($($name:ident: |$input:ident, $value:ident| $modify:expr, [$($values:expr),+ $(,)?];)*) => {$(
        paste::paste! {
            #[test]
            fn [< ground_roll_increases_with_ $name >]() {
                let rolls: Vec<f32> = [$($values),+]
                    .into_iter()
                    .map(|$value| {
                        let mut $input = sea_level_input();
                        $modify;
                        takeoff_performance(&c150(), &$input).distances.ground_roll.into_feet()
                    })
                    .collect();
                assert!(rolls.windows(2).all(|pair| pair[0] < pair[1]), "{rolls:?}");
            }
        }
    )*}
}

ground_roll_increases_with! {
    tailwind: |input, knots| {
        input.runway.headwind = Speed::from_knots(knots);
    }, [10.0, 5.0, 0.0, -5.0];
    uphill_slope: |input, percent| input.runway.slope_percent = percent, [-1.0, 0.0, 1.0, 2.0];
    weight: |input, pounds| input.weight = Mass::from_pounds(pounds), [1200.0, 1400.0, 1600.0];
    temperature: |input, celsius| {
        input.environment = Environment::from_oat(Position::SEA_LEVEL, Temp::from_celsius(celsius));
    }, [-5.0, 10.0, 25.0, 40.0];
    pressure_altitude: |input, feet| {
        let altitude = Position::from_amsl_feet(feet);
        input.environment = Environment::from_oat(altitude, Temp::from_celsius(15.0));
    }, [0.0, 2000.0, 4000.0, 6000.0];
    surface: |input, surface| input.runway.surface = surface, [
        Surface::PavedGood,
        Surface::PavedPoor,
        Surface::GrassGood,
        Surface::GrassFair,
        Surface::Sand,
    ];
}
