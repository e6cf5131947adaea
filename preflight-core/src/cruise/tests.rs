use math::interp::Method;
use math::{FuelFlow, Position, Speed};
use store::c150;

use super::cruise_performance;

#[test]
fn exact_table_point() {
    let result = cruise_performance(&c150(), Position::from_amsl_feet(4000.0), 65.0).unwrap();
    assert_eq!(result.method, Method::Bilinear);
    result.tas.assert_approx(Speed::from_knots(102.0), Speed::from_knots(1e-3)).unwrap();
    result.fuel_flow.assert_approx(FuelFlow::from_gph(5.6), FuelFlow::from_gph(1e-4)).unwrap();
}

#[test]
fn interpolates_between_altitudes_and_power() {
    let result = cruise_performance(&c150(), Position::from_amsl_feet(5000.0), 70.0).unwrap();
    assert_eq!(result.method, Method::Bilinear);
    // Mean of 102, 110, 104 and 112 kt.
    result.tas.assert_approx(Speed::from_knots(107.0), Speed::from_knots(1e-2)).unwrap();
    result.fuel_flow.assert_approx(FuelFlow::from_gph(5.95), FuelFlow::from_gph(1e-3)).unwrap();
}

#[test]
fn missing_row_falls_back_to_corner() {
    let result = cruise_performance(&c150(), Position::from_amsl_feet(9000.0), 70.0).unwrap();
    assert_eq!(result.method, Method::CornerFallback);
    result.tas.assert_approx(Speed::from_knots(105.0), Speed::from_knots(1e-3)).unwrap();
}

#[test]
fn no_cruise_table() {
    let mut profile = c150();
    profile.cruise.clear();
    assert_eq!(cruise_performance(&profile, Position::from_amsl_feet(4000.0), 65.0), None);
}
