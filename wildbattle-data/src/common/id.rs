use std::{
    fmt,
    fmt::Display,
    str::FromStr,
    sync::LazyLock,
};

use anyhow::Error;
use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};

/// An ID for a resource.
///
/// IDs are normalized names: lowercase ASCII alphanumeric characters only. Two names that differ
/// only in case, spacing, or punctuation ("Vine Whip", "vine-whip") produce the same ID.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    /// Returns true if the ID is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        normalize_id(&value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        normalize_id(value)
    }
}

impl FromStr for Id {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::from(s))
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(IdVisitor)
    }
}

/// A trait that provides a common way of identifying resources.
pub trait Identifiable {
    fn id(&self) -> Id;
}

static NON_ID_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]").expect("valid id pattern"));

fn normalize_id(id: &str) -> Id {
    Id(NON_ID_CHARACTERS
        .replace_all(&id.to_ascii_lowercase(), "")
        .into_owned())
}

#[cfg(test)]
mod id_test {
    use crate::{
        Id,
        test_util::test_string_deserialization,
    };

    fn assert_normalize_id(input: &str, output: &str) {
        assert_eq!(Id::from(input), Id::from(output));
        assert_eq!(Id::from(input).as_ref(), output);
    }

    #[test]
    fn removes_non_alphanumeric_characters() {
        assert_normalize_id("Bulbasaur", "bulbasaur");
        assert_normalize_id("VINE-WHIP", "vinewhip");
        assert_normalize_id("Vine Whip", "vinewhip");
        assert_normalize_id("mr-mime", "mrmime");
        assert_normalize_id("Nidoran♀", "nidoran");
        assert_normalize_id("red-blue", "redblue");
    }

    #[test]
    fn deserializes_normalized() {
        test_string_deserialization("Sand-Attack", Id::from("sandattack"));
    }
}
