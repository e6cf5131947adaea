use math::{Length, Mass, Position, Speed, Temp};
use store::c150;

use super::{InputError, check_environment, check_runway, check_weight};
use crate::conditions::{Environment, Runway, Surface};

fn runway(length: f32, surface: Surface) -> Runway {
    Runway {
        length: Length::from_feet(length),
        surface,
        slope_percent: 0.0,
        headwind: Speed::ZERO,
    }
}

#[test]
fn weight_within_range() {
    let weights = c150().weights;
    assert_eq!(check_weight(&weights, Mass::from_pounds(1600.0)), None);
    assert_eq!(check_weight(&weights, Mass::from_pounds(1111.0)), None);
}

#[test]
fn weight_over_max_gross() {
    let weights = c150().weights;
    let error = check_weight(&weights, Mass::from_pounds(1700.0)).unwrap();
    assert_eq!(error.to_string(), "weight 1700 lb is outside the certified range 1111 to 1600 lb");
}

#[test]
fn weight_below_empty() {
    let weights = c150().weights;
    assert!(matches!(
        check_weight(&weights, Mass::from_pounds(900.0)),
        Some(InputError::WeightOutOfRange { .. })
    ));
}

#[test]
fn density_altitude_tolerance() {
    let mut environment = Environment {
        pressure_altitude: Position::from_amsl_feet(3000.0),
        density_altitude:  Position::from_amsl_feet(2950.0),
        oat:               Temp::from_celsius(5.0),
    };
    assert_eq!(check_environment(&environment), None);

    environment.density_altitude = Position::from_amsl_feet(2800.0);
    assert!(matches!(
        check_environment(&environment),
        Some(InputError::DensityBelowPressure { .. })
    ));
}

#[test]
fn runway_checks() {
    assert!(check_runway(&runway(3000.0, Surface::GrassGood)).is_empty());
    assert_eq!(
        check_runway(&runway(0.0, Surface::Water)),
        vec![
            InputError::NonPositiveRunway { length: Length::ZERO },
            InputError::WaterSurface,
        ],
    );
}

#[test]
fn water_message_names_water() {
    let message = InputError::WaterSurface.to_string();
    assert!(message.contains("water"), "{message}");
    assert!(message.contains("sand"), "{message}");
}

#[test]
fn errors_serialize_as_messages() {
    let json = serde_json::to_string(&InputError::NonPositiveClimbRate {
        substitute: Speed::from_fpm(100.0),
    })
    .unwrap();
    assert_eq!(json, r#""rate of climb is not positive, assuming 100 fpm""#);
}
