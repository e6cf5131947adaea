use std::str::FromStr;

use itertools::Itertools;
use math::{Position, Temp};
use strum::IntoEnumIterator;

use super::{Environment, Surface};

#[test]
fn land_surfaces_degrade_in_order() {
    let factors: Vec<f32> = Surface::iter()
        .filter(|surface| surface.is_supported())
        .map(Surface::ground_roll_factor)
        .collect();
    assert!(factors.iter().tuple_windows().all(|(a, b)| a < b), "{factors:?}");
}

#[test]
fn water_uses_most_conservative_factor() {
    assert!(!Surface::Water.is_supported());
    assert_eq!(
        Surface::Water.ground_roll_factor(),
        Surface::MOST_CONSERVATIVE.ground_roll_factor()
    );
}

#[test]
fn surface_names() {
    assert_eq!(Surface::from_str("grass-fair").unwrap(), Surface::GrassFair);
    assert_eq!(Surface::PavedGood.to_string(), "paved-good");
    assert!(Surface::from_str("ice").is_err());
}

#[test]
fn environment_from_oat() {
    let standard =
        Environment::from_oat(Position::from_amsl_feet(4000.0), Temp::from_celsius(7.08));
    assert!((standard.density_altitude.amsl().into_feet() - 4000.0).abs() < 1.0);

    let hot = Environment::from_oat(Position::from_amsl_feet(4000.0), Temp::from_celsius(27.08));
    assert!((hot.density_altitude.amsl().into_feet() - 6400.0).abs() < 1.0);
}
