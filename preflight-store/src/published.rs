//! Serializes quantities in the units flight manuals publish them in.
//!
//! Each submodule is used as `#[serde(with = "crate::published::<unit>")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

fn finite<'de, D: Deserializer<'de>>(deserializer: D, what: &str) -> Result<f32, D::Error> {
    let value = f32::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(<D::Error as serde::de::Error>::custom(format_args!("non-finite {what}")));
    }
    Ok(value)
}

macro_rules! published_unit {
    ($module:ident, $ty:ty, $into:ident, $from:ident, $what:literal) => {
        pub mod $module {
            use serde::{Deserializer, Serialize, Serializer};

            pub fn serialize<S: Serializer>(value: &$ty, serializer: S) -> Result<S::Ok, S::Error> {
                value.$into().serialize(serializer)
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<$ty, D::Error> {
                super::finite(deserializer, $what).map(<$ty>::$from)
            }
        }
    };
}

published_unit!(knots, math::Speed<f32>, into_knots, from_knots, "airspeed");
published_unit!(fpm, math::Speed<f32>, into_fpm, from_fpm, "rate of climb");
published_unit!(gph, math::FuelFlow, into_gph, from_gph, "fuel flow");
published_unit!(nm, math::Length<f32>, into_nm, from_nm, "distance");

/// Optional airspeed limitations in knots.
pub mod option_knots {
    use math::Speed;

    use super::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::ref_option, reason = "signature required by serde(with)")]
    pub fn serialize<S: Serializer>(
        value: &Option<Speed<f32>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.map(Speed::into_knots).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Speed<f32>>, D::Error> {
        match Option::<f32>::deserialize(deserializer)? {
            Some(knots) if !knots.is_finite() => {
                Err(<D::Error as serde::de::Error>::custom("non-finite airspeed"))
            }
            knots => Ok(knots.map(Speed::from_knots)),
        }
    }
}
