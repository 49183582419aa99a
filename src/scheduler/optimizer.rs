//! Position optimizer.
//!
//! Re-deals the fielded players of one inning across the same positions
//! to maximize total `strength × weight`, then scores the result.
//!
//! # Algorithm
//! Kuhn-Munkres (Hungarian) maximum-weight assignment on an n×n matrix.
//! Ineligible pairings carry a large negative weight: never chosen while
//! a legal alternative exists, but still usable to complete the bijection.
//! Values are scaled to integers since the solver needs a totally ordered
//! weight type.
//!
//! # Score
//! `100 × Σ(non-negative matched values) / Σ(10 × weight)`, rounded to one
//! decimal and capped at 100. Forbidden matches count as zero. A filler is
//! never matched: it stays on its position and adds only to the maximum.
//!
//! # Reference
//! Kuhn (1955), "The Hungarian method for the assignment problem"

use std::collections::BTreeMap;

use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;
use tracing::debug;

use crate::models::{Fielder, Inning, Position, Roster, MAX_STRENGTH};

/// Weight of a pairing the player is not eligible for.
pub const FORBIDDEN: f64 = -1e9;

const SCALE: f64 = 1000.0;

/// Result of optimizing one inning.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedLineup {
    /// Position → fielder after matching.
    pub lineup: BTreeMap<Position, Fielder>,
    /// Quality score, 0..=100.
    pub score: f64,
}

/// Weighted bipartite matcher for fielded players.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineupOptimizer;

impl LineupOptimizer {
    /// Creates an optimizer.
    pub fn new() -> Self {
        Self
    }

    /// Value of putting `fielder` at `position`.
    pub fn cell_value(fielder: &Fielder, roster: &Roster, position: Position) -> f64 {
        match fielder.strength(roster, position) {
            Some(strength) => strength * position.weight(),
            None => FORBIDDEN,
        }
    }

    /// Best score achievable for a set of positions.
    pub fn max_score<'a>(positions: impl IntoIterator<Item = &'a Position>) -> f64 {
        positions
            .into_iter()
            .map(|p| MAX_STRENGTH * p.weight())
            .sum()
    }

    /// Computes the optimal bijection without applying it.
    ///
    /// Only roster players are matched. A filler keeps the position it
    /// covers and contributes its weight to the maximum alone.
    pub fn solve(&self, fielded: &BTreeMap<Position, Fielder>, roster: &Roster) -> OptimizedLineup {
        let max_score = Self::max_score(fielded.keys());
        let mut lineup: BTreeMap<Position, Fielder> = fielded
            .iter()
            .filter(|(_, f)| matches!(f, Fielder::Filler(_)))
            .map(|(&pos, &f)| (pos, f))
            .collect();

        let (positions, players): (Vec<Position>, Vec<Fielder>) = fielded
            .iter()
            .filter(|(_, f)| matches!(f, Fielder::Player(_)))
            .map(|(&pos, &f)| (pos, f))
            .unzip();
        let n = positions.len();

        let mut matched = 0.0;
        if n > 0 {
            let values: Vec<Vec<f64>> = players
                .iter()
                .map(|f| {
                    positions
                        .iter()
                        .map(|&pos| Self::cell_value(f, roster, pos))
                        .collect()
                })
                .collect();

            let weights = Matrix::from_fn(n, n, |(row, col)| {
                (values[row][col] * SCALE).round() as i64
            });
            let (_, assignment) = kuhn_munkres(&weights);

            for (row, &col) in assignment.iter().enumerate() {
                lineup.insert(positions[col], players[row]);
                let value = values[row][col];
                if value >= 0.0 {
                    matched += value;
                }
            }
        }

        let score = if max_score > 0.0 {
            ((1000.0 * matched / max_score).round() / 10.0).min(100.0)
        } else {
            0.0
        };

        OptimizedLineup { lineup, score }
    }

    /// Optimizes an inning in place. Never changes who is fielded.
    pub fn optimize(&self, inning: &mut Inning, roster: &Roster) -> f64 {
        let OptimizedLineup { lineup, score } = self.solve(inning.fielded(), roster);
        debug!(inning = inning.number(), score, "lineup optimized");
        inning.apply_lineup(lineup, score);
        score
    }
}
