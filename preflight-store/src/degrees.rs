//! Serializes a relative [`Angle`] as degrees.

use math::Angle;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(angle: &Angle, serializer: S) -> Result<S::Ok, S::Error> {
    angle.into_degrees().serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Angle, D::Error> {
    let degrees = f32::deserialize(deserializer)?;
    if !degrees.is_finite() {
        return Err(<D::Error as serde::de::Error>::custom("non-finite angle"));
    }
    Ok(Angle::from_degrees(degrees))
}
