//! Fielding lineup scheduler.
//!
//! Assigns players to fielding positions across the innings of a
//! recreational game: equal playing time first, position strength second,
//! a best-effort female quota, and a per-inning weighted matching pass
//! that puts the chosen fielders where they are strongest.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Player`, `Roster`, `Position`,
//!   `Formation`, `Inning`, `Schedule`, `ScheduleConfig`
//! - **`dispatching`**: Fairness ranking rules and wildcard selection
//! - **`scheduler`**: Inning builder, position optimizer, orchestrator, KPIs
//! - **`validation`**: Roster checks and schedule warnings
//!
//! # Example
//!
//! ```
//! use u_lineup::models::{Formation, Player, ScheduleConfig};
//! use u_lineup::scheduler::LineupScheduler;
//!
//! let players: Vec<Player> = Formation::Nine
//!     .positions()
//!     .iter()
//!     .map(|&pos| Player::new(pos.to_string()).with_position(pos, 10.0))
//!     .collect();
//! let config = ScheduleConfig::new()
//!     .with_players_required(9)
//!     .with_females_required(0);
//!
//! let schedule = LineupScheduler::new(config).schedule_seeded(&players, 1).unwrap();
//! assert_eq!(schedule.innings().len(), 6);
//! assert!(schedule.is_clean());
//! ```
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian method for the assignment problem"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
