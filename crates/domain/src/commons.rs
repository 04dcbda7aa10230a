// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The general section of the commons of saints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonGeneral {
    /// The observance has its own proper texts.
    Proper,
    /// Common of the Dedication of a Church.
    DedicationOfAChurch,
    /// Common of the Blessed Virgin Mary.
    BlessedVirginMary,
    /// Common of Martyrs.
    Martyrs,
    /// Common of Pastors.
    Pastors,
    /// Common of Doctors of the Church.
    Doctors,
    /// Common of Virgins.
    Virgins,
    /// Common of Holy Men and Women.
    HolyMenAndWomen,
}

impl CommonGeneral {
    /// Converts this section to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Proper => "Proper",
            Self::DedicationOfAChurch => "Dedication of a Church",
            Self::BlessedVirginMary => "Blessed Virgin Mary",
            Self::Martyrs => "Martyrs",
            Self::Pastors => "Pastors",
            Self::Doctors => "Doctors",
            Self::Virgins => "Virgins",
            Self::HolyMenAndWomen => "Holy Men and Women",
        }
    }
}

impl FromStr for CommonGeneral {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Proper" => Ok(Self::Proper),
            "Dedication of a Church" => Ok(Self::DedicationOfAChurch),
            "Blessed Virgin Mary" => Ok(Self::BlessedVirginMary),
            "Martyrs" => Ok(Self::Martyrs),
            "Pastors" => Ok(Self::Pastors),
            "Doctors" => Ok(Self::Doctors),
            "Virgins" => Ok(Self::Virgins),
            "Holy Men and Women" => Ok(Self::HolyMenAndWomen),
            other => Err(DomainError::InvalidCommons(format!(
                "Unknown common: {other}"
            ))),
        }
    }
}

/// One entry from the commons of saints, optionally narrowed to a
/// specific formulary (e.g. `Martyrs:For One Martyr`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Common {
    /// The general section.
    pub general: CommonGeneral,
    /// The specific formulary within the section.
    pub specific: Option<String>,
}

impl Common {
    /// Creates a common with no specific formulary.
    #[must_use]
    pub const fn general(general: CommonGeneral) -> Self {
        Self {
            general,
            specific: None,
        }
    }

    /// Returns the English display label.
    #[must_use]
    pub fn label(&self) -> String {
        match (&self.general, &self.specific) {
            (CommonGeneral::Proper, _) => String::from("Proper"),
            (general, None) => format!("Common of {}", general.as_str()),
            (general, Some(specific)) => {
                format!("Common of {}: {specific}", general.as_str())
            }
        }
    }
}

impl FromStr for Common {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (general, specific) = match s.split_once(':') {
            Some((general, specific)) => (general, Some(specific.trim())),
            None => (s, None),
        };
        let general: CommonGeneral = general.parse()?;
        let specific: Option<String> = match specific {
            Some("") => {
                return Err(DomainError::InvalidCommons(format!(
                    "Empty specific common in '{s}'"
                )));
            }
            Some(value) => Some(value.to_string()),
            None => None,
        };
        Ok(Self { general, specific })
    }
}

impl std::fmt::Display for Common {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.specific {
            Some(specific) => write!(f, "{}:{specific}", self.general.as_str()),
            None => write!(f, "{}", self.general.as_str()),
        }
    }
}

/// How an observance selects generic texts.
///
/// An observance uses either the commons of saints or the Masses for
/// Various Needs, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub enum Commons {
    /// Entries from the commons of saints.
    Saints(Vec<Common>),
    /// Raw Mass for Various Needs classifications.
    VariousNeeds(Vec<String>),
}

impl Commons {
    /// Classifies a raw list of commons.
    ///
    /// # Arguments
    ///
    /// * `values` - The raw commons as they appear in source data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCommons` if the list mixes commons of
    /// saints with Mass for Various Needs entries, or contains a blank entry.
    pub fn parse(values: &[String]) -> Result<Self, DomainError> {
        if values.iter().any(|value| value.trim().is_empty()) {
            return Err(DomainError::InvalidCommons(String::from(
                "Commons cannot contain blank entries",
            )));
        }

        let parsed: Vec<Result<Common, DomainError>> =
            values.iter().map(|value| value.parse()).collect();
        let saints_count: usize = parsed.iter().filter(|result| result.is_ok()).count();

        if saints_count == values.len() {
            Ok(Self::Saints(parsed.into_iter().flatten().collect()))
        } else if saints_count == 0 {
            Ok(Self::VariousNeeds(
                values.iter().map(|value| value.trim().to_string()).collect(),
            ))
        } else {
            Err(DomainError::InvalidCommons(format!(
                "Cannot mix commons of saints with Masses for Various Needs: {}",
                values.join(", ")
            )))
        }
    }

    /// Returns an empty commons-of-saints set.
    #[must_use]
    pub const fn none() -> Self {
        Self::Saints(Vec::new())
    }

    /// Returns whether no classification is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Saints(commons) => commons.is_empty(),
            Self::VariousNeeds(needs) => needs.is_empty(),
        }
    }

    /// Returns the wire representation of each entry.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Self::Saints(commons) => commons.iter().map(ToString::to_string).collect(),
            Self::VariousNeeds(needs) => needs.clone(),
        }
    }

    /// Returns the English display label for the whole set.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Saints(commons) => commons
                .iter()
                .map(Common::label)
                .collect::<Vec<String>>()
                .join("; or "),
            Self::VariousNeeds(needs) if needs.is_empty() => String::new(),
            Self::VariousNeeds(needs) => {
                format!("Mass for Various Needs: {}", needs.join("; or "))
            }
        }
    }
}

impl Default for Commons {
    fn default() -> Self {
        Self::none()
    }
}

impl TryFrom<Vec<String>> for Commons {
    type Error = DomainError;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(&values)
    }
}

impl From<Commons> for Vec<String> {
    fn from(commons: Commons) -> Self {
        commons.to_strings()
    }
}
