//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for players that should be picked first.

use super::{RuleScore, SelectionContext, SelectionRule};
use crate::models::Player;

/// Fewest innings played.
///
/// Equalizes playing time: a player who has sat more goes in first.
#[derive(Debug, Clone, Copy)]
pub struct FewestInnings;

impl SelectionRule for FewestInnings {
    fn name(&self) -> &'static str {
        "FEWEST"
    }

    fn evaluate(&self, player: &Player, _context: &SelectionContext) -> RuleScore {
        player.innings_played() as f64
    }
}

/// Strongest at the position being filled.
///
/// Ineligible players rank last.
#[derive(Debug, Clone, Copy)]
pub struct StrongestAtPosition;

impl SelectionRule for StrongestAtPosition {
    fn name(&self) -> &'static str {
        "STRONGEST"
    }

    fn evaluate(&self, player: &Player, context: &SelectionContext) -> RuleScore {
        player
            .strength(context.position)
            .map(|s| -s)
            .unwrap_or(f64::MAX)
    }
}
