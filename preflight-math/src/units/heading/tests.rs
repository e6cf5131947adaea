use super::Heading;
use crate::units::Angle;

fn assert_almost_eq(left: Heading, right: Heading, message: &str) {
    let delta = (left.0 - right.0).abs();
    assert!(
        delta.0 < 1e-4 || (Angle::FULL - delta).abs().0 < 1e-4,
        "{left:?} != {right:?}: {message}"
    );
}

#[test]
fn heading_from_degrees() {
    assert_almost_eq(Heading::from_degrees(-90.), Heading::WEST, "-90 degrees is westward");
    assert_almost_eq(Heading::from_degrees(-270.), Heading::EAST, "-270 degrees is eastward");
    assert_almost_eq(Heading::from_degrees(-360.), Heading::NORTH, "-360 degrees is northward");
    assert_almost_eq(Heading::from_degrees(90.), Heading::EAST, "90 degrees is eastward");
    assert_almost_eq(Heading::from_degrees(270.), Heading::WEST, "270 degrees is westward");
    assert_almost_eq(Heading::from_degrees(360.), Heading::NORTH, "360 degrees is northward");
    assert_almost_eq(Heading::from_degrees(180.), Heading::SOUTH, "180 degrees is southward");
    assert_almost_eq(Heading::from_degrees(720. + 45.), Heading::from_degrees(45.), "two turns");
}

#[test]
fn heading_degrees_nonnegative() {
    assert!((Heading::WEST.degrees() - 270.).abs() < 1e-3);
    assert!((Heading::from_degrees(-10.).degrees() - 350.).abs() < 1e-3);
    assert!(Heading::NORTH.degrees().abs() < 1e-6);
}

#[test]
fn heading_add_zero_is_exact() {
    for degrees in [0., 1., 89.5, 180., 181., 270., 359.9] {
        let heading = Heading::from_degrees(degrees);
        assert_eq!((heading + Angle::ZERO).degrees(), heading.degrees());
    }
}

#[test]
fn heading_add_wraps() {
    assert_almost_eq(
        Heading::from_degrees(350.) + Angle::from_degrees(20.),
        Heading::from_degrees(10.),
        "350 + 20 wraps to 10",
    );
    assert_almost_eq(
        Heading::from_degrees(10.) - Angle::from_degrees(20.),
        Heading::from_degrees(350.),
        "10 - 20 wraps to 350",
    );
}

#[test]
fn heading_display_three_digits() {
    assert_eq!(Heading::from_degrees(5.).to_string(), "005°");
    assert_eq!(Heading::from_degrees(359.8).to_string(), "000°");
    assert_eq!(Heading::SOUTH.to_string(), "180°");
}

#[test]
fn heading_serializes_as_degrees() {
    let json = serde_json::to_value(Heading::WEST).unwrap();
    assert!((json.as_f64().unwrap() - 270.0).abs() < 1e-3, "{json}");
    let heading: Heading = serde_json::from_str("-90").unwrap();
    assert_almost_eq(heading, Heading::WEST, "-90 degrees parses westward");
}
