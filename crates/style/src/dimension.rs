//! Defines the length primitive used by sizing and offset properties.
use crate::parsers::dimension_from_str;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A length that is either absolute, relative to the containing block, or
/// left to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    Points(f32),
    /// Percentage in the 0–100 range, as written (`"50%"` is `Percent(50.0)`).
    Percent(f32),
    #[default]
    Auto,
}

impl Dimension {
    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Dimension::Points(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Percent(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Auto => {
                2u8.hash(state);
            }
        }
    }
}

impl Eq for Dimension {}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Points(value)
    }
}

impl FromStr for Dimension {
    type Err = crate::StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        dimension_from_str(s)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Points(v) => write!(f, "{}", v),
            Dimension::Percent(v) => write!(f, "{}%", v),
            Dimension::Auto => f.write_str("auto"),
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Dimension::Points(v) => serializer.serialize_f32(*v),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DimensionVisitor;
        impl de::Visitor<'_> for DimensionVisitor {
            type Value = Dimension;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, a percentage like '50%', or 'auto'")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Dimension, E> {
                Ok(Dimension::Points(v as f32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Dimension, E> {
                Ok(Dimension::Points(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Dimension, E> {
                Ok(Dimension::Points(v as f32))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Dimension, E> {
                dimension_from_str(v).map_err(E::custom)
            }
        }
        deserializer.deserialize_any(DimensionVisitor)
    }
}

/// Reads an aspect ratio (width over height). `"auto"` or `null` means none.
///
/// For use with `#[serde(deserialize_with = "...")]` on an `Option<f32>` field.
pub fn deserialize_aspect_ratio<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RatioVisitor;
    impl de::Visitor<'_> for RatioVisitor {
        type Value = Option<f32>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or 'auto'")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Option<f32>, E> {
            Ok(Some(v as f32))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Option<f32>, E> {
            Ok(Some(v as f32))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Option<f32>, E> {
            Ok(Some(v as f32))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Option<f32>, E> {
            if v.trim().eq_ignore_ascii_case("auto") {
                Ok(None)
            } else {
                Err(E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<Option<f32>, E> {
            Ok(None)
        }
    }
    deserializer.deserialize_any(RatioVisitor)
}
