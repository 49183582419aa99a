//! Player model and roster arena.
//!
//! A player's eligible positions are exactly the keys of its strength
//! map, so the two can never disagree. Players are held in a [`Roster`]
//! and referred to by [`PlayerId`] everywhere else; the roster is the
//! only place a play count changes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Formation, Position};
use crate::error::ScheduleError;

/// A player on the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within a roster.
    pub name: String,
    /// Strength rating per eligible position (conventionally 0..=10).
    pub strengths: BTreeMap<Position, f64>,
    /// Whether the player is at the game at all.
    pub available: bool,
    /// Arrives after the late-arrival inning.
    pub late: bool,
    /// Counts toward the female quota.
    pub female: bool,
    #[serde(default)]
    innings_played: u32,
}

impl Player {
    /// Creates an available player with no eligible positions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strengths: BTreeMap::new(),
            available: true,
            late: false,
            female: false,
            innings_played: 0,
        }
    }

    /// Builds a player from parallel position and strength lists.
    ///
    /// # Errors
    /// `MismatchedStrengths` when the lists differ in length.
    pub fn from_parts(
        name: impl Into<String>,
        positions: &[Position],
        strengths: &[f64],
    ) -> Result<Self, ScheduleError> {
        let name = name.into();
        if positions.len() != strengths.len() {
            return Err(ScheduleError::MismatchedStrengths {
                player: name,
                positions: positions.len(),
                strengths: strengths.len(),
            });
        }
        let mut player = Self::new(name);
        for (&position, &strength) in positions.iter().zip(strengths) {
            player.strengths.insert(position, strength);
        }
        Ok(player)
    }

    /// Adds an eligible position with its strength.
    pub fn with_position(mut self, position: Position, strength: f64) -> Self {
        self.strengths.insert(position, strength);
        self
    }

    /// Sets the female flag.
    pub fn with_female(mut self, female: bool) -> Self {
        self.female = female;
        self
    }

    /// Sets the late-arrival flag.
    pub fn with_late(mut self, late: bool) -> Self {
        self.late = late;
        self
    }

    /// Sets availability.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Whether the player may field this position.
    pub fn is_eligible(&self, position: Position) -> bool {
        self.strengths.contains_key(&position)
    }

    /// Strength at a position, `None` when ineligible.
    pub fn strength(&self, position: Position) -> Option<f64> {
        self.strengths.get(&position).copied()
    }

    /// Eligible positions in declaration order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.strengths.keys().copied()
    }

    /// Innings fielded so far in the current schedule.
    pub fn innings_played(&self) -> u32 {
        self.innings_played
    }

    /// Copy of this player with specialist outfield slots folded into
    /// their general positions. The specialist rating replaces any rating
    /// the player already holds at the general position.
    fn merged_specialists(&self) -> Self {
        let mut merged = self.clone();
        for specialist in [Position::RightCenterField, Position::LeftCenterField] {
            let Some(general) = specialist.general_equivalent() else {
                continue;
            };
            if let Some(strength) = merged.strengths.remove(&specialist) {
                merged.strengths.insert(general, strength);
            }
        }
        merged
    }
}

/// Returns the roster adjusted for a fielding format.
///
/// Formats below ten fielders have no LCF/RCF, so those entries merge into
/// CF/RF. Pure and idempotent: a second application finds no specialist
/// keys and returns an equal roster. Play counts are reset, since the
/// snapshot starts a new schedule.
pub fn remap_for_roster_size(players: &[Player], formation: Formation) -> Vec<Player> {
    players
        .iter()
        .map(|p| {
            let mut snapshot = if formation.merges_specialists() {
                p.merged_specialists()
            } else {
                p.clone()
            };
            snapshot.innings_played = 0;
            snapshot
        })
        .collect()
}

/// Stable handle to a player inside a [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(usize);

impl PlayerId {
    /// Position of the player in roster order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena of players for one schedule run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Wraps players in roster order.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Player by id.
    ///
    /// # Panics
    /// If `id` did not come from this roster.
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.0]
    }

    /// Looks a player up by name.
    pub fn find(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .map(PlayerId)
    }

    /// All ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len()).map(PlayerId)
    }

    /// `(id, player)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> + '_ {
        self.players.iter().enumerate().map(|(i, p)| (PlayerId(i), p))
    }

    /// Players in roster order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Credits one fielded inning. Only `Inning::move_to_field` calls this.
    pub(crate) fn record_inning(&mut self, id: PlayerId) {
        self.players[id.0].innings_played += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_builder() {
        let p = Player::new("Ruby")
            .with_position(Position::ThirdBase, 6.0)
            .with_position(Position::Catcher, 7.0)
            .with_female(true)
            .with_late(true);

        assert_eq!(p.name, "Ruby");
        assert!(p.available);
        assert!(p.female);
        assert!(p.late);
        assert!(p.is_eligible(Position::Catcher));
        assert!(!p.is_eligible(Position::Pitcher));
        assert_eq!(p.strength(Position::ThirdBase), Some(6.0));
        assert_eq!(p.strength(Position::Pitcher), None);
        assert_eq!(p.innings_played(), 0);
    }

    #[test]
    fn test_from_parts() {
        let p = Player::from_parts(
            "Jacob",
            &[Position::SecondBase, Position::FirstBase],
            &[9.0, 6.0],
        )
        .unwrap();
        assert_eq!(p.positions().count(), 2);
        assert_eq!(p.strength(Position::SecondBase), Some(9.0));
    }

    #[test]
    fn test_from_parts_mismatch() {
        let err = Player::from_parts("Jacob", &[Position::SecondBase], &[9.0, 6.0]).unwrap_err();
        match err {
            ScheduleError::MismatchedStrengths {
                player,
                positions,
                strengths,
            } => {
                assert_eq!(player, "Jacob");
                assert_eq!((positions, strengths), (1, 2));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_zero_positions_is_legal() {
        let p = Player::from_parts("Benchwarmer", &[], &[]).unwrap();
        assert_eq!(p.positions().count(), 0);
    }

    #[test]
    fn test_remap_merges_specialists() {
        let players = vec![
            Player::new("Frank")
                .with_position(Position::LeftField, 9.0)
                .with_position(Position::LeftCenterField, 8.0)
                .with_position(Position::RightCenterField, 7.0),
            Player::new("Joe")
                .with_position(Position::RightField, 8.0)
                .with_position(Position::RightCenterField, 6.0),
            Player::new("Jacob").with_position(Position::SecondBase, 9.0),
        ];

        let remapped = remap_for_roster_size(&players, Formation::Nine);

        let frank = &remapped[0];
        assert!(!frank.is_eligible(Position::LeftCenterField));
        assert!(!frank.is_eligible(Position::RightCenterField));
        assert_eq!(frank.strength(Position::CenterField), Some(8.0));
        assert_eq!(frank.strength(Position::RightField), Some(7.0));
        assert_eq!(frank.strength(Position::LeftField), Some(9.0));

        // Already held RF: the specialist rating wins even when lower.
        assert_eq!(remapped[1].strength(Position::RightField), Some(6.0));
        assert_eq!(remapped[1].positions().count(), 1);

        assert_eq!(remapped[2], players[2]);
        // Caller's records untouched.
        assert!(players[0].is_eligible(Position::LeftCenterField));
    }

    #[test]
    fn test_remap_is_idempotent() {
        let players = vec![Player::new("Nick")
            .with_position(Position::Shortstop, 7.0)
            .with_position(Position::LeftCenterField, 7.0)
            .with_position(Position::RightCenterField, 7.0)];

        let once = remap_for_roster_size(&players, Formation::Eight);
        let twice = remap_for_roster_size(&once, Formation::Eight);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remap_ten_keeps_specialists() {
        let players = vec![Player::new("Gary").with_position(Position::LeftCenterField, 7.0)];
        let remapped = remap_for_roster_size(&players, Formation::Ten);
        assert!(remapped[0].is_eligible(Position::LeftCenterField));
    }

    #[test]
    fn test_roster_lookup_and_record() {
        let mut roster = Roster::new(vec![Player::new("A"), Player::new("B")]);
        let b = roster.find("B").unwrap();
        assert_eq!(b.index(), 1);
        assert!(roster.find("Z").is_none());

        roster.record_inning(b);
        roster.record_inning(b);
        assert_eq!(roster.get(b).innings_played(), 2);
        assert_eq!(roster.ids().count(), 2);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_player_deserializes_without_play_count() {
        let json = r#"{
            "name": "Janelle",
            "strengths": {"2B": 9, "P": 5},
            "available": true,
            "late": false,
            "female": true
        }"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.strength(Position::SecondBase), Some(9.0));
        assert_eq!(p.innings_played(), 0);
    }
}
