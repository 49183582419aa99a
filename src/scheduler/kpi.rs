//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Score | Mean inning quality score, 2 decimals |
//! | Lowest Score | Worst single inning |
//! | Innings Played | Per available player, fewest first |
//! | Play Spread | Max − min innings played among available players |

use crate::models::Schedule;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Mean inning score rounded to two decimals (0 with no innings).
    pub average_score: f64,
    /// Lowest inning score (0 with no innings).
    pub lowest_score: f64,
    /// `(name, innings played)` for available players, ascending by count.
    /// Ties keep roster order.
    pub innings_played: Vec<(String, u32)>,
    /// Difference between the most and least played available players.
    pub play_spread: u32,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let scores: Vec<f64> = schedule.innings().iter().map(|i| i.score()).collect();
        let average_score = if scores.is_empty() {
            0.0
        } else {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            (mean * 100.0).round() / 100.0
        };
        let lowest_score = scores.iter().copied().reduce(f64::min).unwrap_or(0.0);

        let mut innings_played: Vec<(String, u32)> = schedule
            .roster()
            .players()
            .iter()
            .filter(|p| p.available)
            .map(|p| (p.name.clone(), p.innings_played()))
            .collect();
        innings_played.sort_by_key(|&(_, n)| n);

        let play_spread = match (innings_played.first(), innings_played.last()) {
            (Some((_, min)), Some((_, max))) => max - min,
            _ => 0,
        };

        Self {
            average_score,
            lowest_score,
            innings_played,
            play_spread,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_average_score: f64, max_spread: u32) -> bool {
        self.average_score >= min_average_score && self.play_spread <= max_spread
    }
}
