//! Lineup domain models.
//!
//! | u-lineup | Meaning |
//! |----------|---------|
//! | Player | Team member with per-position strengths |
//! | Roster | Arena of players for one schedule run |
//! | Formation | Fielder count and its position list |
//! | Inning | Bench / field / late-hold partition |
//! | Schedule | All innings plus warnings |

mod formation;
mod inning;
mod player;
mod position;
mod schedule;

pub use formation::{Formation, MAX_FIELDERS, MIN_FIELDERS};
pub use inning::{Fielder, Inning, FILLER_NAME};
pub use player::{remap_for_roster_size, Player, PlayerId, Roster};
pub use position::{Position, MAX_STRENGTH};
pub use schedule::{Schedule, ScheduleConfig, ScheduleWarning};
