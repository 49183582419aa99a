//! Fielding formats.
//!
//! The required fielder count selects one of three formats, each with a
//! fixed position list ordered by importance. The inning builder fills
//! positions in exactly this order.

use serde::{Deserialize, Serialize};

use super::Position;
use crate::error::ScheduleError;

/// Fewest fielders a format supports.
pub const MIN_FIELDERS: u32 = 8;
/// Most fielders a format supports.
pub const MAX_FIELDERS: u32 = 10;

const TEN: [Position; 10] = [
    Position::Pitcher,
    Position::Shortstop,
    Position::LeftField,
    Position::LeftCenterField,
    Position::ThirdBase,
    Position::FirstBase,
    Position::SecondBase,
    Position::RightCenterField,
    Position::RightField,
    Position::Catcher,
];

const NINE: [Position; 9] = [
    Position::Pitcher,
    Position::Shortstop,
    Position::LeftField,
    Position::CenterField,
    Position::ThirdBase,
    Position::FirstBase,
    Position::SecondBase,
    Position::RightField,
    Position::Catcher,
];

const EIGHT: [Position; 8] = [
    Position::Pitcher,
    Position::Shortstop,
    Position::LeftField,
    Position::CenterField,
    Position::ThirdBase,
    Position::FirstBase,
    Position::SecondBase,
    Position::RightField,
];

/// A fielding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formation {
    /// Ten fielders with split center field (LCF/RCF).
    Ten,
    /// Nine fielders with a single center fielder.
    Nine,
    /// Eight fielders; the catcher slot is covered by a filler.
    Eight,
}

impl Formation {
    /// Selects the format for a required fielder count.
    ///
    /// # Errors
    /// `UnsupportedFielderCount` for anything outside
    /// [`MIN_FIELDERS`]..=[`MAX_FIELDERS`].
    pub fn from_fielders(count: u32) -> Result<Self, ScheduleError> {
        match count {
            10 => Ok(Formation::Ten),
            9 => Ok(Formation::Nine),
            8 => Ok(Formation::Eight),
            _ => Err(ScheduleError::UnsupportedFielderCount {
                count,
                min: MIN_FIELDERS,
                max: MAX_FIELDERS,
            }),
        }
    }

    /// Number of roster players fielded per inning.
    pub fn fielders(self) -> u32 {
        match self {
            Formation::Ten => 10,
            Formation::Nine => 9,
            Formation::Eight => 8,
        }
    }

    /// Positions to fill, most important first.
    pub fn positions(self) -> &'static [Position] {
        match self {
            Formation::Ten => &TEN,
            Formation::Nine => &NINE,
            Formation::Eight => &EIGHT,
        }
    }

    /// A mandatory position this format leaves out, if any.
    pub fn omitted_position(self) -> Option<Position> {
        match self {
            Formation::Eight => Some(Position::Catcher),
            _ => None,
        }
    }

    /// Whether specialist outfield eligibility folds into CF/RF.
    pub fn merges_specialists(self) -> bool {
        self.fielders() < MAX_FIELDERS
    }
}
