use std::time::Duration;

use super::{Fuel, FuelFlow, Length, Mass, Position, Speed, Temp, TempDelta};

#[test]
fn speed_conversions() {
    Speed::from_knots(1.0)
        .assert_approx(Speed::from_feet_per_sec(1.687_81), Speed::from_feet_per_sec(1e-4))
        .unwrap();
    Speed::from_fpm(600.0)
        .assert_approx(Speed::from_feet_per_sec(10.0), Speed::from_feet_per_sec(1e-4))
        .unwrap();
    assert!((Speed::from_knots(100.0).into_knots() - 100.0).abs() < 1e-3);
}

#[test]
fn length_conversions() {
    let nm = Length::from_nm(1.0);
    nm.assert_approx(Length::from_feet(6076.12), Length::from_feet(1e-2)).unwrap();
    assert!((Length::from_feet(12152.24).into_nm() - 2.0).abs() < 1e-4);
}

#[test]
fn speed_times_duration_is_length() {
    let distance = Speed::from_knots(60.0) * Duration::from_secs(3600);
    distance.assert_approx(Length::from_nm(60.0), Length::from_feet(1.0)).unwrap();
}

#[test]
fn fuel_flow_times_duration_is_fuel() {
    let burnt = FuelFlow::from_gph(6.0) * Duration::from_secs(30 * 60);
    burnt.assert_approx(Fuel::from_gallons(3.0), Fuel::from_gallons(1e-4)).unwrap();
}

#[test]
fn length_over_duration_is_speed() {
    let rate = Length::from_feet(1000.0) / Duration::from_secs(120);
    rate.assert_approx(Speed::from_fpm(500.0), Speed::from_fpm(1e-2)).unwrap();
}

#[test]
fn try_div_rejects_zero_rate() {
    assert_eq!(Length::from_feet(1000.0).try_div(Speed::ZERO), None);
    assert_eq!(Length::from_feet(1000.0).try_div(Speed::from_fpm(-500.0)), None);
    let time = Length::from_feet(1000.0).try_div(Speed::from_fpm(500.0)).unwrap();
    assert!((time.as_secs_f32() - 120.0).abs() < 1e-2);
}

#[test]
fn mass_ratio() {
    let ratio = Mass::from_pounds(1600.0) / Mass::from_pounds(1500.0);
    assert!((ratio - 1.066_667).abs() < 1e-5);
}

#[test]
fn lerp_endpoints_exact() {
    let low = Length::from_feet(735.0);
    let high = Length::from_feet(905.3);
    assert_eq!(low.lerp(high, 0.0), low);
    assert_eq!(low.lerp(high, 1.0), high);
}

#[test]
fn temp_celsius_roundtrip() {
    Temp::from_celsius(15.0)
        .assert_approx(Temp::from_kelvins(288.15), TempDelta::from_kelvins(1e-3))
        .unwrap();
    assert!((Temp::from_kelvins(253.15).into_celsius() + 20.0).abs() < 1e-3);
    let delta = Temp::from_celsius(35.0) - Temp::from_celsius(15.0);
    assert!((delta.into_kelvins() - 20.0).abs() < 1e-3);
}

#[test]
fn position_difference() {
    let gain = Position::from_amsl_feet(8000.0) - Position::from_amsl_feet(2500.0);
    assert_eq!(gain, Length::from_feet(5500.0));
}
