//! Random fallback selection.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{PlayerId, Roster};

/// Candidates sharing the minimum innings-played count, in input order.
pub fn least_played(candidates: &[PlayerId], roster: &Roster) -> Vec<PlayerId> {
    let Some(fewest) = candidates
        .iter()
        .map(|&id| roster.get(id).innings_played())
        .min()
    else {
        return Vec::new();
    };
    candidates
        .iter()
        .copied()
        .filter(|&id| roster.get(id).innings_played() == fewest)
        .collect()
}

/// Picks uniformly at random among the least-played candidates,
/// ignoring eligibility. `None` only when there are no candidates.
pub fn select_wildcard<R: Rng + ?Sized>(
    candidates: &[PlayerId],
    roster: &Roster,
    rng: &mut R,
) -> Option<PlayerId> {
    least_played(candidates, roster).choose(rng).copied()
}
