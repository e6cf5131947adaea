use std::f32::consts::{FRAC_PI_2, PI};
use std::{fmt, ops};

use bevy_math::Dir2;

use super::Angle;

#[cfg(test)]
mod tests;

/// An absolute directional bearing, clockwise from north.
///
/// Whether the reference north is true or magnetic is up to the context;
/// this type only stores the bearing.
/// Serialized as degrees in the range 0..360.
#[derive(Clone, Copy, PartialEq)]
pub struct Heading(
    Angle, // always -PI < heading <= PI
);

impl Heading {
    /// Heading north.
    pub const NORTH: Self = Self(Angle::new(0.));
    /// Heading east.
    pub const EAST: Self = Self(Angle::new(FRAC_PI_2));
    /// Heading south.
    pub const SOUTH: Self = Self(Angle::new(PI));
    /// Heading west.
    pub const WEST: Self = Self(Angle::new(-FRAC_PI_2));

    /// Converts the heading into a direction vector.
    #[must_use]
    pub fn into_dir2(self) -> Dir2 {
        let (x, y) = self.0.0.sin_cos();
        Dir2::from_xy_unchecked(x, y)
    }

    /// Creates a heading from an absolute bearing.
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self { Self::from_radians(Angle::from_degrees(degrees)) }

    /// Returns the heading in degrees in the range 0..360.
    #[must_use]
    pub fn degrees(self) -> f32 {
        let degrees = self.0.into_degrees();
        if degrees < 0. { degrees + 360. } else { degrees }
    }

    /// Creates a heading from an absolute bearing in radians.
    #[must_use]
    pub fn from_radians(radians: Angle) -> Self { Self::NORTH + radians }

    /// Returns the heading in radians in the range `-STRAIGHT < value <= STRAIGHT`.
    #[must_use]
    pub fn radians(self) -> Angle { self.0 }

    /// Returns the heading perpendicular to the right of this heading.
    #[must_use]
    pub fn right(self) -> Self { self + Angle::RIGHT }
}

impl fmt::Debug for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heading")
            .field("radians", &self.radians().0)
            .field("degrees", &self.degrees())
            .finish()
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03.0}°", self.degrees().round() % 360.)
    }
}

impl serde::Serialize for Heading {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.degrees().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Heading {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let degrees = f32::deserialize(deserializer)?;
        if !degrees.is_finite() {
            return Err(<D::Error as serde::de::Error>::custom("non-finite heading"));
        }
        Ok(Self::from_degrees(degrees))
    }
}

impl ops::Add<Angle> for Heading {
    type Output = Self;
    /// Offsets `self` by `angle` clockwise.
    fn add(mut self, angle: Angle) -> Self {
        self.0 += angle;
        self.0 = Angle::new(self.0.0 % Angle::FULL.0);
        if self.0 > Angle::STRAIGHT {
            self.0 -= Angle::FULL;
        } else if self.0 <= -Angle::STRAIGHT {
            self.0 += Angle::FULL;
        }
        self
    }
}

impl ops::Sub<Angle> for Heading {
    type Output = Self;
    /// Offsets `self` by `angle` counter-clockwise.
    fn sub(self, angle: Angle) -> Self { self + (-angle) }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for Heading {
    fn schema_name() -> std::borrow::Cow<'static, str> { "Heading".into() }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <f32 as schemars::JsonSchema>::json_schema(generator)
    }
}
