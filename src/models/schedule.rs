//! Schedule (solution) model.
//!
//! A schedule is the full sequence of innings for one game together with
//! the roster snapshot it was built from and the warnings found by the
//! validation pass.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::formation::{MAX_FIELDERS, MIN_FIELDERS};
use super::{Formation, Inning, Player, Position, Roster};
use crate::error::ScheduleError;

/// Game configuration consumed by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Innings to build (at least 1).
    pub number_innings: u32,
    /// Female fielders wanted on the field each inning.
    pub females_required: u32,
    /// Fielders per inning; selects the [`Formation`].
    pub players_required: u32,
    /// First inning late arrivals may play (at least 1).
    pub inning_of_late_arrivals: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            number_innings: 6,
            females_required: 3,
            players_required: 10,
            inning_of_late_arrivals: 3,
        }
    }
}

impl ScheduleConfig {
    /// Creates the default configuration (6 innings, 10 fielders, 3 females).
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives fielder and female counts from who is available.
    ///
    /// Ten fielders need at least three available females; otherwise the
    /// format drops to nine. The fielder count never exceeds the available
    /// players and never drops below the smallest format. Ten-fielder games
    /// ask for three females, smaller formats for two.
    pub fn automatic(
        players: &[Player],
        number_innings: u32,
        inning_of_late_arrivals: u32,
    ) -> Self {
        let available = players.iter().filter(|p| p.available).count() as u32;
        let females = players.iter().filter(|p| p.available && p.female).count() as u32;

        let max_players = if females > 2 { MAX_FIELDERS } else { MAX_FIELDERS - 1 };
        let players_required = available.min(max_players).max(MIN_FIELDERS);
        let females_required = if players_required > 9 { 3 } else { 2 };

        Self {
            number_innings,
            females_required,
            players_required,
            inning_of_late_arrivals: inning_of_late_arrivals.min(number_innings),
        }
    }

    /// Sets the number of innings.
    pub fn with_innings(mut self, number_innings: u32) -> Self {
        self.number_innings = number_innings;
        self
    }

    /// Sets the female quota.
    pub fn with_females_required(mut self, females_required: u32) -> Self {
        self.females_required = females_required;
        self
    }

    /// Sets the fielder count.
    pub fn with_players_required(mut self, players_required: u32) -> Self {
        self.players_required = players_required;
        self
    }

    /// Sets the inning late arrivals join.
    pub fn with_late_arrival_inning(mut self, inning: u32) -> Self {
        self.inning_of_late_arrivals = inning;
        self
    }

    /// Checks the configuration and returns its formation.
    ///
    /// # Errors
    /// `UnsupportedFielderCount` or `InvalidConfig`.
    pub fn validate(&self) -> Result<Formation, ScheduleError> {
        let formation = Formation::from_fielders(self.players_required)?;
        if self.number_innings == 0 {
            return Err(ScheduleError::InvalidConfig(
                "number_innings must be at least 1".into(),
            ));
        }
        if self.inning_of_late_arrivals == 0 {
            return Err(ScheduleError::InvalidConfig(
                "inning_of_late_arrivals must be at least 1".into(),
            ));
        }
        Ok(formation)
    }
}

/// A non-fatal problem found after building the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleWarning {
    /// A player holds a position they are not eligible for.
    OutOfPosition {
        /// Player name.
        player: String,
        /// Position held.
        position: Position,
        /// Inning number.
        inning: u32,
    },
    /// Innings below the female quota.
    NotEnoughFemales {
        /// Inning numbers, ascending.
        innings: Vec<u32>,
    },
    /// Innings with fewer fielders than required.
    NotEnoughPlayers {
        /// Inning numbers, ascending.
        innings: Vec<u32>,
    },
}

impl fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleWarning::OutOfPosition {
                player,
                position,
                inning,
            } => write!(f, "{player} is playing {position} at random in inning {inning}."),
            ScheduleWarning::NotEnoughFemales { innings } => {
                write!(f, "Not enough females in the following innings: {innings:?}")
            }
            ScheduleWarning::NotEnoughPlayers { innings } => {
                write!(f, "Not enough players in the following innings: {innings:?}")
            }
        }
    }
}

/// A complete game schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    innings: Vec<Inning>,
    roster: Roster,
    config: ScheduleConfig,
    formation: Formation,
    warnings: Vec<ScheduleWarning>,
}

impl Schedule {
    pub(crate) fn new(roster: Roster, config: ScheduleConfig, formation: Formation) -> Self {
        Self {
            innings: Vec::with_capacity(config.number_innings as usize),
            roster,
            config,
            formation,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn push_inning(&mut self, inning: Inning) {
        self.innings.push(inning);
    }

    pub(crate) fn set_warnings(&mut self, warnings: Vec<ScheduleWarning>) {
        self.warnings = warnings;
    }

    /// Innings in order.
    pub fn innings(&self) -> &[Inning] {
        &self.innings
    }

    /// Inning by 1-based number.
    pub fn inning(&self, number: u32) -> Option<&Inning> {
        self.innings.iter().find(|i| i.number() == number)
    }

    /// Roster snapshot with final play counts.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Player by name, with the play count from this schedule.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.roster.find(name).map(|id| self.roster.get(id))
    }

    /// Configuration used.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Formation used.
    pub fn formation(&self) -> Formation {
        self.formation
    }

    /// Warnings from the validation pass.
    pub fn warnings(&self) -> &[ScheduleWarning] {
        &self.warnings
    }

    /// Warnings rendered as sentences.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Whether the validation pass found nothing.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(total: usize, females: usize) -> Vec<Player> {
        (0..total)
            .map(|i| Player::new(format!("P{i}")).with_female(i < females))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let c = ScheduleConfig::new();
        assert_eq!(c.number_innings, 6);
        assert_eq!(c.females_required, 3);
        assert_eq!(c.players_required, 10);
        assert_eq!(c.inning_of_late_arrivals, 3);
        assert_eq!(c.validate().unwrap(), Formation::Ten);
    }

    #[test]
    fn test_config_validation() {
        let bad = ScheduleConfig::new().with_players_required(11);
        assert!(matches!(
            bad.validate(),
            Err(ScheduleError::UnsupportedFielderCount { count: 11, .. })
        ));

        let no_innings = ScheduleConfig::new().with_innings(0);
        assert!(matches!(
            no_innings.validate(),
            Err(ScheduleError::InvalidConfig(_))
        ));

        let no_late = ScheduleConfig::new().with_late_arrival_inning(0);
        assert!(matches!(no_late.validate(), Err(ScheduleError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_deserialize_with_defaults() {
        let c: ScheduleConfig = serde_json::from_str(r#"{"players_required": 9}"#).unwrap();
        assert_eq!(c.players_required, 9);
        assert_eq!(c.number_innings, 6);
        assert_eq!(c.validate().unwrap(), Formation::Nine);
    }

    #[test]
    fn test_automatic_counts() {
        let full = ScheduleConfig::automatic(&players(12, 4), 6, 3);
        assert_eq!(full.players_required, 10);
        assert_eq!(full.females_required, 3);

        let few_females = ScheduleConfig::automatic(&players(12, 2), 6, 3);
        assert_eq!(few_females.players_required, 9);
        assert_eq!(few_females.females_required, 2);

        let short = ScheduleConfig::automatic(&players(6, 3), 4, 5);
        assert_eq!(short.players_required, 8);
        assert_eq!(short.females_required, 2);
        assert_eq!(short.inning_of_late_arrivals, 4);
    }

    #[test]
    fn test_automatic_ignores_unavailable() {
        let mut roster = players(10, 3);
        roster[0].available = false;
        let c = ScheduleConfig::automatic(&roster, 6, 3);
        // 9 available, 2 available females.
        assert_eq!(c.players_required, 9);
        assert_eq!(c.females_required, 2);
    }

    #[test]
    fn test_warning_messages() {
        let w = ScheduleWarning::OutOfPosition {
            player: "Guy".into(),
            position: Position::Shortstop,
            inning: 2,
        };
        assert_eq!(w.to_string(), "Guy is playing SS at random in inning 2.");

        let f = ScheduleWarning::NotEnoughFemales { innings: vec![1, 3] };
        assert_eq!(
            f.to_string(),
            "Not enough females in the following innings: [1, 3]"
        );

        let p = ScheduleWarning::NotEnoughPlayers { innings: vec![4] };
        assert_eq!(
            p.to_string(),
            "Not enough players in the following innings: [4]"
        );
    }
}
