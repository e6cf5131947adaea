use crate::units::Position;
use crate::{
    Angle, Heading, Mass, Speed, Temp, TempDelta, Wind, adjust_rate_of_climb, density_altitude,
    isa_temperature, solve_wind_triangle, true_airspeed, weight_adjusted_stall_speed,
};

#[test]
fn isa_temperature_at_sea_level() {
    isa_temperature(Position::SEA_LEVEL)
        .assert_approx(Temp::from_celsius(15.0), TempDelta::from_kelvins(1e-3))
        .unwrap();
}

#[test]
fn isa_temperature_lapses() {
    isa_temperature(Position::from_amsl_feet(5000.0))
        .assert_approx(Temp::from_celsius(5.1), TempDelta::from_kelvins(1e-3))
        .unwrap();
}

#[test]
fn density_altitude_at_standard_day() {
    let da = density_altitude(Position::from_amsl_feet(3000.0), Temp::from_celsius(9.06));
    assert!((da.amsl().into_feet() - 3000.0).abs() < 1.0, "{da:?}");
}

#[test]
fn density_altitude_hot_day() {
    // ISA at 2500 ft is 10.05 C, so 30 C is 19.95 above.
    let da = density_altitude(Position::from_amsl_feet(2500.0), Temp::from_celsius(30.0));
    assert!((da.amsl().into_feet() - 4894.0).abs() < 1.0, "{da:?}");
}

#[test]
fn true_airspeed_identity_at_sea_level() {
    let ias = Speed::from_knots(70.0);
    assert_eq!(true_airspeed(ias, Position::SEA_LEVEL), ias);
}

#[test]
fn true_airspeed_increases_with_density_altitude() {
    let ias = Speed::from_knots(70.0);
    let low = true_airspeed(ias, Position::from_amsl_feet(2000.0));
    let high = true_airspeed(ias, Position::from_amsl_feet(6000.0));
    assert!(low > ias);
    assert!(high > low);
    low.assert_approx(Speed::from_knots(72.8), Speed::from_knots(1e-3)).unwrap();
}

#[test]
fn rate_of_climb_unchanged_at_standard_day() {
    let base = Speed::from_fpm(670.0);
    let pa = Position::from_amsl_feet(2000.0);
    assert_eq!(adjust_rate_of_climb(base, pa, pa), base);
}

#[test]
fn rate_of_climb_degrades_with_excess_density_altitude() {
    let base = Speed::from_fpm(1000.0);
    let adjusted = adjust_rate_of_climb(
        base,
        Position::from_amsl_feet(2000.0),
        Position::from_amsl_feet(4500.0),
    );
    adjusted.assert_approx(Speed::from_fpm(800.0), Speed::from_fpm(1e-2)).unwrap();
}

#[test]
fn rate_of_climb_floored() {
    let base = Speed::from_fpm(1000.0);
    let adjusted = adjust_rate_of_climb(
        base,
        Position::SEA_LEVEL,
        Position::from_amsl_feet(20000.0),
    );
    adjusted.assert_approx(Speed::from_fpm(300.0), Speed::from_fpm(1e-2)).unwrap();
}

#[test]
fn stall_speed_scales_with_root_weight() {
    let vs = weight_adjusted_stall_speed(
        Speed::from_knots(48.0),
        Mass::from_pounds(1200.0),
        Mass::from_pounds(1600.0),
    );
    vs.assert_approx(Speed::from_knots(41.569), Speed::from_knots(1e-2)).unwrap();
}

#[test]
fn stall_speed_with_unknown_reference_weight() {
    let reference = Speed::from_knots(48.0);
    assert_eq!(
        weight_adjusted_stall_speed(reference, Mass::from_pounds(1200.0), Mass::ZERO),
        reference,
    );
}

#[test]
fn wind_triangle_calm() {
    let solution =
        solve_wind_triangle(Heading::from_degrees(73.0), Speed::from_knots(100.0), Wind::CALM);
    assert_eq!(solution.correction, Angle::ZERO);
    assert_eq!(solution.ground_speed, Speed::from_knots(100.0));
    assert!(!solution.saturated);
}

#[test]
fn wind_triangle_pure_crosswind_from_right() {
    let wind = Wind { from: Heading::EAST, speed: Speed::from_knots(20.0) };
    let solution = solve_wind_triangle(Heading::NORTH, Speed::from_knots(100.0), wind);
    assert!((solution.correction.into_degrees() - 11.537).abs() < 1e-2, "{solution:?}");
    solution.ground_speed.assert_approx(Speed::from_knots(97.98), Speed::from_knots(1e-2)).unwrap();
}

#[test]
fn wind_triangle_direct_headwind() {
    let wind = Wind { from: Heading::from_degrees(180.0), speed: Speed::from_knots(15.0) };
    let solution = solve_wind_triangle(Heading::SOUTH, Speed::from_knots(90.0), wind);
    assert!(solution.correction.abs().into_degrees() < 1e-3);
    solution.ground_speed.assert_approx(Speed::from_knots(75.0), Speed::from_knots(1e-2)).unwrap();
}

#[test]
fn wind_triangle_tailwind_from_left() {
    let wind = Wind { from: Heading::from_degrees(225.0), speed: Speed::from_knots(20.0) };
    let solution = solve_wind_triangle(Heading::NORTH, Speed::from_knots(100.0), wind);
    assert!(solution.correction.into_degrees() < 0.0);
    assert!(solution.ground_speed > Speed::from_knots(100.0));
}

#[test]
fn wind_triangle_saturates() {
    let wind = Wind { from: Heading::WEST, speed: Speed::from_knots(80.0) };
    let solution = solve_wind_triangle(Heading::NORTH, Speed::from_knots(50.0), wind);
    assert!(solution.saturated);
    assert!((solution.correction.into_degrees() + 90.0).abs() < 1e-3);
    assert!(!solution.ground_speed.is_negative());
}

#[test]
fn wind_triangle_stronger_headwind_floors_ground_speed() {
    let wind = Wind { from: Heading::NORTH, speed: Speed::from_knots(120.0) };
    let solution = solve_wind_triangle(Heading::NORTH, Speed::from_knots(100.0), wind);
    assert_eq!(solution.ground_speed, Speed::ZERO);
}
