use std::{
    fmt,
    fmt::Display,
    str::FromStr,
    sync::LazyLock,
};

use anyhow::Error;
use regex::Regex;

use crate::Id;

/// Number of creatures on the roster.
pub const ROSTER_SIZE: u16 = 151;

/// A reference to a creature on the roster, by number or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CreatureRef {
    Number(u16),
    Name(Id),
}

impl CreatureRef {
    /// Creates a reference by roster number, validating that the number is on the roster.
    pub fn number(number: u16) -> Result<Self, Error> {
        if number == 0 || number > ROSTER_SIZE {
            return Err(Error::msg(format!(
                "creature number {number} is not between 1 and {ROSTER_SIZE}"
            )));
        }
        Ok(Self::Number(number))
    }

    /// Creates a reference by name.
    pub fn name<S>(name: S) -> Self
    where
        S: AsRef<str>,
    {
        Self::Name(Id::from(name.as_ref()))
    }
}

impl Display for CreatureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "#{number}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

static OPTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.* \((\d+)\)$").expect("valid option label pattern"));

impl FromStr for CreatureRef {
    type Err = Error;

    /// Parses a plain number ("25"), an option label ("Pikachu (25)"), or a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = if s.chars().all(|c| c.is_ascii_digit()) && !s.is_empty() {
            Some(s)
        } else {
            OPTION_LABEL
                .captures(s)
                .and_then(|captures| captures.get(1))
                .map(|number| number.as_str())
        };
        match number {
            Some(number) => Self::number(
                number
                    .parse()
                    .map_err(|_| Error::msg(format!("invalid creature number \"{number}\"")))?,
            ),
            None => {
                let id = Id::from(s);
                if id.is_empty() {
                    return Err(Error::msg(format!("invalid creature reference \"{s}\"")));
                }
                Ok(Self::Name(id))
            }
        }
    }
}

/// Capitalizes a catalog name for display.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Builds selection labels ("Bulbasaur (1)") for roster names, which are in roster order.
pub fn roster_options<S>(names: &[S]) -> Vec<String>
where
    S: AsRef<str>,
{
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{} ({})", display_name(name.as_ref()), i + 1))
        .collect()
}
