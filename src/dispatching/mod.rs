//! Fairness-ranked player selection.
//!
//! Candidates for a position are ordered by composable selection rules:
//! fewest innings played first, then the strongest player at that
//! position. When nobody eligible is left, a wildcard pick chooses at
//! random among the least-played candidates.
//!
//! # Usage
//!
//! ```
//! use u_lineup::dispatching::{RuleEngine, SelectionContext};
//! use u_lineup::dispatching::rules;
//! use u_lineup::models::Position;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::FewestInnings)
//!     .with_tie_breaker(rules::StrongestAtPosition);
//!
//! let context = SelectionContext::for_position(Position::Shortstop);
//! // let best = engine.select_best(&bench, &roster, &context);
//! ```

mod context;
mod engine;
pub mod rules;
mod wildcard;

pub use context::SelectionContext;
pub use engine::RuleEngine;
pub use wildcard::{least_played, select_wildcard};

use crate::models::Player;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (selected first).
pub type RuleScore = f64;

/// A rule that ranks players for a position.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "FEWEST").
    fn name(&self) -> &'static str;

    /// Evaluates a player's priority for the context's position.
    fn evaluate(&self, player: &Player, context: &SelectionContext) -> RuleScore;
}
