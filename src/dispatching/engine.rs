//! Rule engine for multi-criteria player selection.
//!
//! Applies rules in sequence; a later rule is consulted only when every
//! earlier rule ties. Candidates tied on every rule keep their input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, SelectionContext, SelectionRule};
use crate::models::{Player, PlayerId, Roster};

/// A composable rule engine for player prioritization.
///
/// # Example
/// ```
/// use u_lineup::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::FewestInnings)
///     .with_tie_breaker(rules::StrongestAtPosition);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// The fairness ranking: fewest innings first, strongest at the
    /// position among equals.
    pub fn fairness() -> Self {
        Self::new()
            .with_rule(rules::FewestInnings)
            .with_tie_breaker(rules::StrongestAtPosition)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all earlier rules.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Returns the highest-priority candidate. The earliest wins a tie.
    pub fn select_best(
        &self,
        candidates: &[PlayerId],
        roster: &Roster,
        context: &SelectionContext,
    ) -> Option<PlayerId> {
        candidates.iter().copied().reduce(|best, next| {
            match self.compare(roster.get(next), roster.get(best), context) {
                Ordering::Less => next,
                _ => best,
            }
        })
    }

    fn compare(&self, a: &Player, b: &Player, context: &SelectionContext) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
