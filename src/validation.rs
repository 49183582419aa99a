//! Input and output validation.
//!
//! - [`validate_roster`] checks player records before scheduling:
//!   duplicate names, strengths outside `0..=MAX_STRENGTH`.
//! - [`collect_warnings`] inspects a finished set of innings for
//!   out-of-position players and missed quotas.

use std::collections::HashSet;

use tracing::warn;

use crate::models::{
    Fielder, Inning, Player, Roster, ScheduleConfig, ScheduleWarning, MAX_STRENGTH,
};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two players share a name.
    DuplicateName,
    /// A strength rating is NaN or outside `0..=MAX_STRENGTH`.
    InvalidStrength,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates player records.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_roster(players: &[Player]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for player in players {
        if !names.insert(player.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate player name: {}", player.name),
            ));
        }

        for (position, &strength) in &player.strengths {
            if !(0.0..=MAX_STRENGTH).contains(&strength) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidStrength,
                    format!(
                        "Player '{}' has invalid strength {strength} at {position}",
                        player.name
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Produces the schedule's warnings in one pass over all innings.
///
/// Out-of-position warnings come first (by inning, then position order),
/// followed by the female and fielder shortfall aggregates.
pub fn collect_warnings(
    innings: &[Inning],
    roster: &Roster,
    config: &ScheduleConfig,
) -> Vec<ScheduleWarning> {
    let mut warnings = Vec::new();
    let mut not_enough_females = Vec::new();
    let mut not_enough_players = Vec::new();

    for inning in innings {
        for (&position, fielder) in inning.fielded() {
            let Fielder::Player(id) = *fielder else {
                continue;
            };
            let player = roster.get(id);
            if !player.is_eligible(position) {
                warnings.push(ScheduleWarning::OutOfPosition {
                    player: player.name.clone(),
                    position,
                    inning: inning.number(),
                });
            }
        }

        if inning.playing_count() < config.players_required {
            not_enough_players.push(inning.number());
        }
        if inning.females_playing() < config.females_required {
            not_enough_females.push(inning.number());
        }
    }

    if !not_enough_females.is_empty() {
        warnings.push(ScheduleWarning::NotEnoughFemales {
            innings: not_enough_females,
        });
    }
    if !not_enough_players.is_empty() {
        warnings.push(ScheduleWarning::NotEnoughPlayers {
            innings: not_enough_players,
        });
    }

    for w in &warnings {
        warn!(warning = %w, "schedule warning");
    }
    warnings
}
