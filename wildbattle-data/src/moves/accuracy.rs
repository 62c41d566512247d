use std::fmt;

use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::Visitor,
};

/// The base accuracy of a move.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// The base chance, out of 100, for the move to hit.
    Chance(u8),
    /// The catalog has no accuracy for the move.
    #[default]
    Unavailable,
}

impl Accuracy {
    /// The accuracy used for hit checks.
    ///
    /// Unavailable accuracy always hits.
    pub fn effective(&self) -> u8 {
        match self {
            Self::Chance(n) => (*n).min(100),
            Self::Unavailable => 100,
        }
    }
}

impl From<u8> for Accuracy {
    fn from(value: u8) -> Self {
        Self::Chance(value)
    }
}

impl From<Option<u8>> for Accuracy {
    fn from(value: Option<u8>) -> Self {
        value.map(Self::Chance).unwrap_or_default()
    }
}

impl Serialize for Accuracy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Chance(n) => serializer.serialize_u8(*n),
            Self::Unavailable => serializer.serialize_none(),
        }
    }
}

struct AccuracyVisitor;

impl<'de> Visitor<'de> for AccuracyVisitor {
    type Value = Accuracy;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer between 0 and 100, or null")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u8::try_from(v)
            .ok()
            .filter(|v| *v <= 100)
            .map(Accuracy::Chance)
            .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u64::try_from(v)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(v), &self))
            .and_then(|v| self.visit_u64(v))
    }

    fn visit_str<E>(self, _: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        // Placeholder strings such as "N/A".
        Ok(Accuracy::Unavailable)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Accuracy::Unavailable)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Accuracy::Unavailable)
    }
}

impl<'de> Deserialize<'de> for Accuracy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(AccuracyVisitor)
    }
}

#[cfg(test)]
mod accuracy_test {
    use crate::{
        Accuracy,
        test_util::{
            test_deserialization,
            test_serialization,
        },
    };

    #[test]
    fn serializes_numbers_and_null() {
        test_serialization(Accuracy::Chance(100), 100);
        test_serialization(Accuracy::Chance(55), 55);
        test_serialization(Accuracy::Unavailable, "null");
    }

    #[test]
    fn deserializes_placeholder_as_unavailable() {
        test_deserialization("\"N/A\"", Accuracy::Unavailable);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(serde_json::from_str::<Accuracy>("101").is_err());
        assert!(serde_json::from_str::<Accuracy>("-5").is_err());
    }

    #[test]
    fn unavailable_accuracy_always_hits() {
        assert_eq!(Accuracy::Unavailable.effective(), 100);
        assert_eq!(Accuracy::Chance(0).effective(), 0);
        assert_eq!(Accuracy::Chance(70).effective(), 70);
    }
}
