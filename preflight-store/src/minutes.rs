//! Serializes a [`Duration`] as a number of minutes.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    (duration.as_secs_f32() / 60.0).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let minutes = f32::deserialize(deserializer)?;
    Duration::try_from_secs_f32(minutes * 60.0).map_err(<D::Error as serde::de::Error>::custom)
}
