//! Fielding position model.
//!
//! Positions carry a fixed importance weight used by the lineup
//! optimizer. Weights reflect how much a strong player matters at
//! that spot: the middle infield and pitcher dominate, catcher and
//! right field barely register in recreational play.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Conventional maximum strength rating for a player at a position.
pub const MAX_STRENGTH: f64 = 10.0;

/// A fielding position.
///
/// Serialized with the scorecard abbreviations (`"P"`, `"3B"`, `"LCF"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Pitcher.
    #[serde(rename = "P")]
    Pitcher,
    /// Shortstop.
    #[serde(rename = "SS")]
    Shortstop,
    /// Left field.
    #[serde(rename = "LF")]
    LeftField,
    /// Left-center field (ten-fielder format only).
    #[serde(rename = "LCF")]
    LeftCenterField,
    /// Center field (nine- and eight-fielder formats).
    #[serde(rename = "CF")]
    CenterField,
    /// Third base.
    #[serde(rename = "3B")]
    ThirdBase,
    /// First base.
    #[serde(rename = "1B")]
    FirstBase,
    /// Second base.
    #[serde(rename = "2B")]
    SecondBase,
    /// Right-center field (ten-fielder format only).
    #[serde(rename = "RCF")]
    RightCenterField,
    /// Right field.
    #[serde(rename = "RF")]
    RightField,
    /// Catcher.
    #[serde(rename = "C")]
    Catcher,
}

impl Position {
    /// Every position, in declaration order.
    pub const ALL: [Position; 11] = [
        Position::Pitcher,
        Position::Shortstop,
        Position::LeftField,
        Position::LeftCenterField,
        Position::CenterField,
        Position::ThirdBase,
        Position::FirstBase,
        Position::SecondBase,
        Position::RightCenterField,
        Position::RightField,
        Position::Catcher,
    ];

    /// Scorecard abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Position::Pitcher => "P",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::LeftCenterField => "LCF",
            Position::CenterField => "CF",
            Position::ThirdBase => "3B",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::RightCenterField => "RCF",
            Position::RightField => "RF",
            Position::Catcher => "C",
        }
    }

    /// Importance weight used when scoring a player at this position.
    pub fn weight(self) -> f64 {
        match self {
            Position::Shortstop | Position::Pitcher => 100.0,
            Position::ThirdBase => 95.0,
            Position::LeftField | Position::LeftCenterField => 90.0,
            Position::CenterField => 80.0,
            Position::FirstBase => 70.0,
            Position::SecondBase => 60.0,
            Position::RightCenterField => 25.0,
            Position::RightField => 15.0,
            Position::Catcher => 5.0,
        }
    }

    /// The general position a specialist outfield slot folds into when
    /// the format has fewer than ten fielders.
    pub fn general_equivalent(self) -> Option<Position> {
        match self {
            Position::LeftCenterField => Some(Position::CenterField),
            Position::RightCenterField => Some(Position::RightField),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Position {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.abbreviation().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScheduleError::UnknownPosition(s.to_string()))
    }
}
