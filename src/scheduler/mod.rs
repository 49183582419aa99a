//! Inning construction, position optimization and schedule orchestration.
//!
//! # Algorithm
//!
//! `LineupScheduler` builds innings one after another. `InningBuilder`
//! fills each inning greedily by fairness, eligibility and the female
//! quota; `LineupOptimizer` then re-deals the chosen fielders across the
//! positions by weighted matching. Greedy per inning, so not a global
//! optimum across the game.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes average quality and playing-time balance.

mod inning;
mod kpi;
mod lineup;
mod optimizer;

pub use inning::{FillPath, InningBuilder};
pub use kpi::ScheduleKpi;
pub use lineup::LineupScheduler;
pub use optimizer::{LineupOptimizer, OptimizedLineup, FORBIDDEN};
