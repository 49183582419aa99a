//! Inning model.
//!
//! Every available player sits in exactly one of three partitions:
//! bench, field, or late-hold. The counters always match the field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{PlayerId, Position, Roster};

/// Display name of the synthetic filler.
pub const FILLER_NAME: &str = "COURTESY";

/// Occupant of a fielded position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fielder {
    /// A roster player.
    Player(PlayerId),
    /// Synthetic zero-strength filler covering a position the format omits.
    /// Eligible only for the position it covers.
    Filler(Position),
}

impl Fielder {
    /// Name to show for this fielder.
    pub fn name<'a>(&self, roster: &'a Roster) -> &'a str {
        match *self {
            Fielder::Player(id) => &roster.get(id).name,
            Fielder::Filler(_) => FILLER_NAME,
        }
    }

    /// Strength at `position`, `None` when ineligible.
    pub fn strength(&self, roster: &Roster, position: Position) -> Option<f64> {
        match *self {
            Fielder::Player(id) => roster.get(id).strength(position),
            Fielder::Filler(covered) => (covered == position).then_some(0.0),
        }
    }

    /// The roster player, if this is not the filler.
    pub fn player_id(&self) -> Option<PlayerId> {
        match *self {
            Fielder::Player(id) => Some(id),
            Fielder::Filler(_) => None,
        }
    }
}

/// One inning of a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inning {
    number: u32,
    bench: Vec<PlayerId>,
    fielded: BTreeMap<Position, Fielder>,
    late: Vec<PlayerId>,
    playing_count: u32,
    females_playing: u32,
    score: f64,
}

impl Inning {
    /// Creates an inning with everyone on the bench or held late.
    pub fn new(number: u32, bench: Vec<PlayerId>, late: Vec<PlayerId>) -> Self {
        Self {
            number,
            bench,
            fielded: BTreeMap::new(),
            late,
            playing_count: 0,
            females_playing: 0,
            score: 0.0,
        }
    }

    /// 1-based inning number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Players sitting this inning, in roster order.
    pub fn bench(&self) -> &[PlayerId] {
        &self.bench
    }

    /// Players held out because they have not arrived yet.
    pub fn late(&self) -> &[PlayerId] {
        &self.late
    }

    /// Position → occupant. Unfilled positions are absent.
    pub fn fielded(&self) -> &BTreeMap<Position, Fielder> {
        &self.fielded
    }

    /// Occupant of a position.
    pub fn fielder_at(&self, position: Position) -> Option<Fielder> {
        self.fielded.get(&position).copied()
    }

    /// Roster players on the field with their positions.
    pub fn fielded_players(&self) -> impl Iterator<Item = (Position, PlayerId)> + '_ {
        self.fielded
            .iter()
            .filter_map(|(&pos, f)| f.player_id().map(|id| (pos, id)))
    }

    /// Position held by a roster player this inning.
    pub fn position_of(&self, id: PlayerId) -> Option<Position> {
        self.fielded_players()
            .find(|&(_, p)| p == id)
            .map(|(pos, _)| pos)
    }

    /// Roster players fielded (the filler is not counted).
    pub fn playing_count(&self) -> u32 {
        self.playing_count
    }

    /// Female roster players fielded.
    pub fn females_playing(&self) -> u32 {
        self.females_playing
    }

    /// Lineup quality, 0..=100.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Moves a bench player onto the field and credits the inning.
    ///
    /// This is the only path that increments a play count. Returns `false`
    /// without touching anything when the player is not on the bench or
    /// the position is already taken.
    pub(crate) fn move_to_field(
        &mut self,
        roster: &mut Roster,
        id: PlayerId,
        position: Position,
    ) -> bool {
        if self.fielded.contains_key(&position) {
            return false;
        }
        let Some(slot) = self.bench.iter().position(|&b| b == id) else {
            return false;
        };
        self.bench.remove(slot);
        self.fielded.insert(position, Fielder::Player(id));
        self.playing_count += 1;
        roster.record_inning(id);
        if roster.get(id).female {
            self.females_playing += 1;
        }
        true
    }

    /// Covers an empty position with the filler.
    pub(crate) fn place_filler(&mut self, position: Position) {
        self.fielded
            .entry(position)
            .or_insert(Fielder::Filler(position));
    }

    /// Replaces the position mapping with a permutation of the same
    /// fielders and records the score.
    pub(crate) fn apply_lineup(&mut self, lineup: BTreeMap<Position, Fielder>, score: f64) {
        debug_assert_eq!(lineup.len(), self.fielded.len());
        self.fielded = lineup;
        self.score = score;
    }
}
