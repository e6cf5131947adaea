use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::marker::PhantomData;
use std::time::Duration;
use std::{cmp, fmt, iter, ops};

use bevy_math::{Dir2, Vec2};

use crate::AssertApproxError;

mod heading;
pub use heading::Heading;
mod position;
pub use position::Position;
mod temp;
pub use temp::{Temp, TempBase, TempDelta};

#[cfg(test)]
mod tests;

/// Converts nautical miles to feet.
pub const FEET_PER_NM: f32 = 6076.12;
/// Converts meters to feet.
pub const FEET_PER_METER: f32 = 3.28084;
/// Converts minutes to seconds.
pub const SECONDS_PER_MINUTE: f32 = 60.;
/// Converts hours to seconds.
pub const SECONDS_PER_HOUR: f32 = 3600.;

pub struct Quantity<T, Base, Dt>(pub T, pub PhantomData<(Base, Dt)>);

impl<T, Base, Dt> Quantity<T, Base, Dt> {
    pub const fn new(value: T) -> Self { Self(value, PhantomData) }
}

impl<Base, Dt> Quantity<f32, Base, Dt> {
    pub const ZERO: Self = Self(0., PhantomData);

    /// Linear interpolation, computed as `self * (1 - s) + other * s`
    /// so that `s == 0` and `s == 1` return the endpoints exactly.
    #[must_use]
    pub fn lerp(self, other: Self, s: f32) -> Self {
        Self(self.0 * (1. - s) + other.0 * s, PhantomData)
    }
}

impl<T, Base, Dt> Default for Quantity<T, Base, Dt>
where
    T: Default,
{
    fn default() -> Self { Self(T::default(), PhantomData) }
}

impl<T, Base, Dt> Clone for Quantity<T, Base, Dt>
where
    T: Clone,
{
    fn clone(&self) -> Self { Self(self.0.clone(), PhantomData) }
}

impl<T, Base, Dt> Copy for Quantity<T, Base, Dt> where T: Copy {}

impl<T, Base, Dt> PartialEq for Quantity<T, Base, Dt>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl<T, Base, Dt> PartialOrd for Quantity<T, Base, Dt>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { self.0.partial_cmp(&other.0) }
}

impl<T, Base, Dt> ops::Add for Quantity<T, Base, Dt>
where
    T: ops::Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Self) -> Self { Self(self.0 + other.0, PhantomData) }
}

impl<T, Base, Dt> ops::AddAssign for Quantity<T, Base, Dt>
where
    T: ops::AddAssign,
{
    fn add_assign(&mut self, other: Self) { self.0 += other.0; }
}

impl<T, Base, Dt> ops::Sub for Quantity<T, Base, Dt>
where
    T: ops::Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self { Self(self.0 - other.0, PhantomData) }
}

impl<T, Base, Dt> ops::SubAssign for Quantity<T, Base, Dt>
where
    T: ops::SubAssign,
{
    fn sub_assign(&mut self, other: Self) { self.0 -= other.0; }
}

impl<T, Base, Dt> ops::Mul<f32> for Quantity<T, Base, Dt>
where
    T: ops::Mul<f32, Output = T>,
{
    type Output = Self;

    fn mul(self, other: f32) -> Self { Self(self.0 * other, PhantomData) }
}

impl<T, Base, Dt> ops::MulAssign<f32> for Quantity<T, Base, Dt>
where
    T: ops::MulAssign<f32>,
{
    fn mul_assign(&mut self, other: f32) { self.0 *= other; }
}

impl<T, Base, Dt> ops::Div<f32> for Quantity<T, Base, Dt>
where
    T: ops::Div<f32, Output = T>,
{
    type Output = Self;

    fn div(self, other: f32) -> Self { Self(self.0 / other, PhantomData) }
}

impl<T, Base, Dt> ops::Div for Quantity<T, Base, Dt>
where
    T: ops::Div,
{
    type Output = T::Output;

    fn div(self, other: Self) -> Self::Output { self.0 / other.0 }
}

impl<T, Base, Dt> ops::Neg for Quantity<T, Base, Dt>
where
    T: ops::Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self { Self(-self.0, PhantomData) }
}

impl<T: Default + ops::Add<Output = T>, Base, Dt> iter::Sum for Quantity<T, Base, Dt> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |sum, value| sum + value)
    }
}

/// Used as `Dt` in `Quantity` to indicate that the unit is not a rate of change.
pub struct DtZero;
/// Used as `Dt` in `Quantity` to indicate that the unit is the rate of change of `Quantity<Dt=Dt>`.
pub struct Ddt<Dt>(Dt);

pub type DtOne = Ddt<DtZero>;
pub type DtTwo = Ddt<DtOne>;

impl<T, Base, Dt> ops::Mul<Duration> for Quantity<T, Base, Ddt<Dt>>
where
    T: ops::Mul<f32, Output = T>,
{
    type Output = Quantity<T, Base, Dt>;

    fn mul(self, other: Duration) -> Self::Output {
        Quantity(self.0 * other.as_secs_f32(), PhantomData)
    }
}

impl<T, Base, Dt> ops::Div<Duration> for Quantity<T, Base, Dt>
where
    T: ops::Div<f32, Output = T>,
{
    type Output = Quantity<T, Base, Ddt<Dt>>;

    fn div(self, other: Duration) -> Self::Output {
        Quantity(self.0 / other.as_secs_f32(), PhantomData)
    }
}

/// (B / T^n) / (B / T^(n+1)) = T
impl<Base, Dt> Quantity<f32, Base, Dt> {
    /// Returns the time it takes to cover `self` at the rate `rhs`.
    ///
    /// Returns `None` if the result is negative, infinite or NaN,
    /// i.e. if `rhs` is zero or the operands have opposite signs.
    pub fn try_div(self, rhs: Quantity<f32, Base, Ddt<Dt>>) -> Option<Duration> {
        Duration::try_from_secs_f32(self.0 / rhs.0).ok()
    }
}

impl<Base, Dt> Quantity<f32, Base, Dt> {
    #[must_use]
    pub fn is_positive(self) -> bool { self.0 > 0. }

    #[must_use]
    pub fn is_negative(self) -> bool { self.0 < 0. }

    #[must_use]
    pub fn is_zero(self) -> bool { self.0 == 0. }

    #[must_use]
    pub fn is_finite(self) -> bool { self.0.is_finite() }

    #[must_use]
    pub fn abs(self) -> Self { Self(self.0.abs(), PhantomData) }

    #[must_use]
    pub fn min(self, other: Self) -> Self { Self(self.0.min(other.0), PhantomData) }

    #[must_use]
    pub fn max(self, other: Self) -> Self { Self(self.0.max(other.0), PhantomData) }

    /// Resolves this magnitude along `heading` into a 2D vector (x east, y north).
    #[must_use]
    pub fn with_heading(self, heading: Heading) -> Quantity<Vec2, Base, Dt> {
        Quantity(heading.into_dir2() * self.0, PhantomData)
    }

    /// Asserts that the quantity is within `epsilon` of `other`.
    ///
    /// # Errors
    /// If the absolute difference between `self` and `other` is greater than `epsilon`.
    pub fn assert_approx(
        self,
        other: Self,
        epsilon: Self,
    ) -> Result<(), AssertApproxError<Self, Self>>
    where
        Self: fmt::Debug,
    {
        if (self - other).abs() > epsilon {
            Err(AssertApproxError { actual: self, expect: other, epsilon })
        } else {
            Ok(())
        }
    }
}

impl<Base, Dt> Quantity<Vec2, Base, Dt> {
    /// Returns the vector component projected along `dir`.
    #[must_use]
    pub fn project_onto_dir(self, dir: Dir2) -> Quantity<f32, Base, Dt> {
        Quantity(self.0.dot(*dir), PhantomData)
    }
}

pub struct LengthBase;

/// A distance quantity. Internal representation is in feet.
pub type Length<T> = Quantity<T, LengthBase, DtZero>;

/// A linear speed (rate of [length](Length) change) quantity.
/// Internal representation is in feet per second.
pub type Speed<T> = Quantity<T, LengthBase, DtOne>;

/// A linear acceleration (rate of linear [speed](Speed) change) quantity.
pub type Accel<T> = Quantity<T, LengthBase, DtTwo>;

pub struct AngleBase;

/// A relative angle. Internal representation is in radians.
pub type Angle = Quantity<f32, AngleBase, DtZero>;

pub struct MassBase;

/// A weight quantity. Internal representation is in pounds.
pub type Mass = Quantity<f32, MassBase, DtZero>;

pub struct FuelBase;

/// A fuel volume. Internal representation is in US gallons.
pub type Fuel = Quantity<f32, FuelBase, DtZero>;

/// Fuel consumption rate. Internal representation is in US gallons per second.
pub type FuelFlow = Quantity<f32, FuelBase, DtOne>;

impl fmt::Debug for Length<f32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Length")
            .field("feet", &self.into_feet())
            .field("nm", &self.into_nm())
            .finish()
    }
}

impl fmt::Debug for Speed<f32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speed")
            .field("knots", &self.into_knots())
            .field("fpm", &self.into_fpm())
            .finish()
    }
}

impl fmt::Debug for Accel<f32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accel").field("ft/s2", &self.into_feet_per_sec2()).finish()
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Angle").field("degrees", &self.into_degrees()).finish()
    }
}

impl fmt::Debug for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mass").field("lb", &self.into_pounds()).finish()
    }
}

impl fmt::Debug for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fuel").field("gal", &self.into_gallons()).finish()
    }
}

impl fmt::Debug for FuelFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuelFlow").field("gph", &self.into_gph()).finish()
    }
}

impl Length<f32> {
    #[must_use]
    pub const fn into_feet(self) -> f32 { self.0 }

    #[must_use]
    pub const fn from_feet(feet: f32) -> Self { Self(feet, PhantomData) }

    #[must_use]
    pub const fn into_nm(self) -> f32 { self.0 / FEET_PER_NM }

    #[must_use]
    pub const fn from_nm(nm: f32) -> Self { Self(nm * FEET_PER_NM, PhantomData) }
}

impl Speed<f32> {
    #[must_use]
    pub const fn into_feet_per_sec(self) -> f32 { self.0 }

    #[must_use]
    pub const fn from_feet_per_sec(fps: f32) -> Self { Self(fps, PhantomData) }

    #[must_use]
    pub const fn into_knots(self) -> f32 { self.0 * SECONDS_PER_HOUR / FEET_PER_NM }

    #[must_use]
    pub const fn from_knots(knots: f32) -> Self {
        Self(knots * FEET_PER_NM / SECONDS_PER_HOUR, PhantomData)
    }

    #[must_use]
    pub const fn into_fpm(self) -> f32 { self.0 * SECONDS_PER_MINUTE }

    #[must_use]
    pub const fn from_fpm(fpm: f32) -> Self { Self(fpm / SECONDS_PER_MINUTE, PhantomData) }
}

impl Accel<f32> {
    #[must_use]
    pub const fn into_feet_per_sec2(self) -> f32 { self.0 }

    #[must_use]
    pub const fn from_feet_per_sec2(fps2: f32) -> Self { Self(fps2, PhantomData) }

    #[must_use]
    pub const fn from_meters_per_sec2(mps2: f32) -> Self {
        Self(mps2 * FEET_PER_METER, PhantomData)
    }
}

impl Angle {
    pub const RIGHT: Self = Self(FRAC_PI_2, PhantomData);
    pub const STRAIGHT: Self = Self(PI, PhantomData);
    pub const FULL: Self = Self(TAU, PhantomData);

    #[must_use]
    pub const fn from_degrees(degrees: f32) -> Self { Self(degrees.to_radians(), PhantomData) }

    #[must_use]
    pub fn into_degrees(self) -> f32 { self.0.to_degrees() }

    /// Arcsine of `ratio`, clamped into `-1.0..=1.0` first.
    #[must_use]
    pub fn asin(ratio: f32) -> Self { Self(ratio.clamp(-1., 1.).asin(), PhantomData) }

    #[must_use]
    pub fn cos(self) -> f32 { self.0.cos() }
}

impl Mass {
    #[must_use]
    pub const fn into_pounds(self) -> f32 { self.0 }

    #[must_use]
    pub const fn from_pounds(pounds: f32) -> Self { Self(pounds, PhantomData) }
}

impl Fuel {
    #[must_use]
    pub const fn into_gallons(self) -> f32 { self.0 }

    #[must_use]
    pub const fn from_gallons(gallons: f32) -> Self { Self(gallons, PhantomData) }
}

impl FuelFlow {
    #[must_use]
    pub const fn into_gph(self) -> f32 { self.0 * SECONDS_PER_HOUR }

    #[must_use]
    pub const fn from_gph(gph: f32) -> Self { Self(gph / SECONDS_PER_HOUR, PhantomData) }
}

pub trait IsFinite: Copy {
    fn is_finite(self) -> bool;
}

impl IsFinite for f32 {
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl IsFinite for Vec2 {
    fn is_finite(self) -> bool { Vec2::is_finite(self) }
}

impl<T, Base, Dt> serde::Serialize for Quantity<T, Base, Dt>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T, Base, Dt> serde::Deserialize<'de> for Quantity<T, Base, Dt>
where
    T: serde::Deserialize<'de> + IsFinite,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;

        if !value.is_finite() {
            return Err(<D::Error as serde::de::Error>::custom("non-finite quantity"));
        }

        Ok(Self(value, PhantomData))
    }
}

#[cfg(feature = "schema")]
impl<T, Base, Dt> schemars::JsonSchema for Quantity<T, Base, Dt>
where
    T: schemars::JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> { T::schema_name() }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(generator)
    }
}
