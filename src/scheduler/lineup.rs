//! Schedule orchestration.
//!
//! # Algorithm
//!
//! 1. Validate configuration and roster (fatal on failure).
//! 2. Snapshot the roster, folding LCF/RCF into CF/RF for formats below
//!    ten fielders.
//! 3. For innings 1..=N, strictly in order: greedy fill, cover an omitted
//!    mandatory position with the filler, optimize positions.
//! 4. One validation pass over all innings collects warnings.
//!
//! Innings cannot be built out of order or in parallel: each inning's
//! fairness ranking reads the play counts left by the previous ones.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::{InningBuilder, LineupOptimizer, ScheduleKpi};
use crate::error::ScheduleError;
use crate::models::{remap_for_roster_size, Player, Roster, Schedule, ScheduleConfig};
use crate::validation::{collect_warnings, validate_roster};

/// Builds game schedules from a roster and configuration.
///
/// # Example
///
/// ```
/// use u_lineup::models::{Player, Position, ScheduleConfig};
/// use u_lineup::scheduler::LineupScheduler;
///
/// let players = vec![
///     Player::new("Ace").with_position(Position::Pitcher, 9.0),
///     Player::new("Glove").with_position(Position::Shortstop, 8.0),
/// ];
/// let config = ScheduleConfig::new()
///     .with_innings(2)
///     .with_players_required(8)
///     .with_females_required(0);
///
/// let schedule = LineupScheduler::new(config).schedule_seeded(&players, 7).unwrap();
/// assert_eq!(schedule.innings().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LineupScheduler {
    config: ScheduleConfig,
    optimizer: LineupOptimizer,
}

impl LineupScheduler {
    /// Creates a scheduler. The configuration is checked when scheduling.
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            config,
            optimizer: LineupOptimizer::new(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Builds a schedule using the thread-local RNG for tie-breaks.
    ///
    /// # Errors
    /// Invalid configuration or roster; no partial schedule is returned.
    pub fn schedule(&self, players: &[Player]) -> Result<Schedule, ScheduleError> {
        self.schedule_with_rng(players, &mut rand::rng())
    }

    /// Builds a reproducible schedule from a seed.
    pub fn schedule_seeded(&self, players: &[Player], seed: u64) -> Result<Schedule, ScheduleError> {
        self.schedule_with_rng(players, &mut StdRng::seed_from_u64(seed))
    }

    /// Builds a schedule drawing random tie-breaks from `rng`.
    ///
    /// The caller's players are not modified; the returned schedule owns a
    /// roster snapshot carrying the final play counts.
    pub fn schedule_with_rng<R: Rng + ?Sized>(
        &self,
        players: &[Player],
        rng: &mut R,
    ) -> Result<Schedule, ScheduleError> {
        let formation = self.config.validate()?;
        validate_roster(players).map_err(ScheduleError::InvalidRoster)?;

        let mut roster = Roster::new(remap_for_roster_size(players, formation));
        let builder = InningBuilder::new(formation, self.config.females_required);

        let mut innings = Vec::with_capacity(self.config.number_innings as usize);
        for number in 1..=self.config.number_innings {
            let mut inning = builder.build(
                number,
                &mut roster,
                self.config.inning_of_late_arrivals,
                rng,
            );
            if let Some(omitted) = formation.omitted_position() {
                inning.place_filler(omitted);
            }
            self.optimizer.optimize(&mut inning, &roster);
            innings.push(inning);
        }

        let warnings = collect_warnings(&innings, &roster, &self.config);

        let mut schedule = Schedule::new(roster, self.config.clone(), formation);
        for inning in innings {
            schedule.push_inning(inning);
        }
        schedule.set_warnings(warnings);

        let kpi = ScheduleKpi::calculate(&schedule);
        info!(
            innings = schedule.innings().len(),
            fielders = formation.fielders(),
            average_score = kpi.average_score,
            play_spread = kpi.play_spread,
            warnings = schedule.warnings().len(),
            "schedule built"
        );
        Ok(schedule)
    }
}
