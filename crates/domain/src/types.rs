// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The data layer an action originates from.
///
/// Layers are listed in the order in which they are applied to a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// The base missal(s).
    Sanctorale,
    /// Historical amending decrees.
    Decree,
    /// A grouping of nations sharing calendar data.
    WiderRegion,
    /// A single nation's calendar.
    National,
    /// A single diocese's calendar.
    Diocesan,
}

impl Layer {
    /// Converts this layer to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sanctorale => "sanctorale",
            Self::Decree => "decree",
            Self::WiderRegion => "wider_region",
            Self::National => "national",
            Self::Diocesan => "diocesan",
        }
    }

    /// Returns whether a create action for an existing key is skipped
    /// instead of rejected in this layer.
    ///
    /// Only decrees skip; every other layer treats the collision as fatal.
    #[must_use]
    pub const fn skips_existing_on_create(&self) -> bool {
        matches!(self, Self::Decree)
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The precedence rank of an observance.
///
/// Grades are totally ordered; the numeric value is the wire representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    /// An ordinary weekday.
    #[default]
    Weekday,
    /// A commemoration.
    Commemoration,
    /// An optional memorial.
    OptionalMemorial,
    /// An obligatory memorial.
    Memorial,
    /// A feast.
    Feast,
    /// A feast of the Lord.
    FeastOfTheLord,
    /// A solemnity.
    Solemnity,
    /// A celebration with precedence over solemnities.
    HigherSolemnity,
}

impl Grade {
    /// Returns the numeric wire value of this grade.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Weekday => 0,
            Self::Commemoration => 1,
            Self::OptionalMemorial => 2,
            Self::Memorial => 3,
            Self::Feast => 4,
            Self::FeastOfTheLord => 5,
            Self::Solemnity => 6,
            Self::HigherSolemnity => 7,
        }
    }

    /// Returns the English display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::Commemoration => "Commemoration",
            Self::OptionalMemorial => "Optional memorial",
            Self::Memorial => "Memorial",
            Self::Feast => "FEAST",
            Self::FeastOfTheLord => "FEAST OF THE LORD",
            Self::Solemnity => "SOLEMNITY",
            Self::HigherSolemnity => "celebration with precedence over solemnities",
        }
    }

    /// Returns the short abbreviation used in compact listings.
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Weekday => "w",
            Self::Commemoration => "C",
            Self::OptionalMemorial => "m",
            Self::Memorial => "M",
            Self::Feast => "F",
            Self::FeastOfTheLord => "F✝",
            Self::Solemnity => "S",
            Self::HigherSolemnity => "S✝",
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Weekday),
            1 => Ok(Self::Commemoration),
            2 => Ok(Self::OptionalMemorial),
            3 => Ok(Self::Memorial),
            4 => Ok(Self::Feast),
            5 => Ok(Self::FeastOfTheLord),
            6 => Ok(Self::Solemnity),
            7 => Ok(Self::HigherSolemnity),
            _ => Err(DomainError::InvalidGrade(value)),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.value()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A liturgical color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// White.
    White,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Rose.
    Rose,
    /// Black.
    Black,
}

impl Color {
    /// Converts this color to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Rose => "rose",
            Self::Black => "black",
        }
    }

    /// Returns the English display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Purple => "Purple",
            Self::Rose => "Rose",
            Self::Black => "Black",
        }
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "white" => Ok(Self::White),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "purple" => Ok(Self::Purple),
            "rose" | "pink" => Ok(Self::Rose),
            "black" => Ok(Self::Black),
            _ => Err(DomainError::InvalidColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.as_str().to_string()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-empty, ordered set of liturgical colors.
///
/// The first color is the canonical display color; the rest are
/// permitted alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Colors {
    values: Vec<Color>,
}

impl Colors {
    /// Creates a new color set, dropping repeated values.
    ///
    /// # Arguments
    ///
    /// * `values` - The colors in display order
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyColors` if no color is given.
    pub fn new(values: Vec<Color>) -> Result<Self, DomainError> {
        let mut unique: Vec<Color> = Vec::with_capacity(values.len());
        for color in values {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }
        if unique.is_empty() {
            return Err(DomainError::EmptyColors);
        }
        Ok(Self { values: unique })
    }

    /// Creates a color set holding a single color.
    #[must_use]
    pub fn single(color: Color) -> Self {
        Self {
            values: vec![color],
        }
    }

    /// Returns the canonical display color.
    #[must_use]
    pub fn primary(&self) -> Color {
        self.values[0]
    }

    /// Returns every color in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.values
    }
}

impl TryFrom<Vec<Color>> for Colors {
    type Error = DomainError;

    fn try_from(values: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Colors> for Vec<Color> {
    fn from(colors: Colors) -> Self {
        colors.values
    }
}

/// A day of the week, used by relative-date descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    /// Converts this weekday to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" => Ok(Self::Sunday),
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            _ => Err(DomainError::InvalidWeekday(s.to_string())),
        }
    }
}

impl TryFrom<String> for Weekday {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Weekday> for String {
    fn from(weekday: Weekday) -> Self {
        weekday.as_str().to_string()
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
