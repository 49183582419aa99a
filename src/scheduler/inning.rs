//! Greedy per-inning fill.
//!
//! # Algorithm
//!
//! 1. Partition the roster: unavailable players are dropped, late players
//!    before the arrival inning are held, everyone else is benched.
//! 2. For each position in format priority order:
//!    - **Quota**: if every remaining slot must go to a female to meet
//!      the quota, take the best-ranked eligible female, else a random
//!      least-played female regardless of eligibility.
//!    - **Eligible**: best-ranked eligible bench player.
//!    - **Wildcard**: random least-played bench player, out of position.
//!    - Otherwise the position stays empty.
//!
//! # Complexity
//! O(p * b) rule evaluations per inning, p = positions, b = bench size.

use rand::Rng;
use tracing::debug;

use crate::dispatching::{select_wildcard, RuleEngine, SelectionContext};
use crate::models::{Formation, Inning, PlayerId, Position, Roster};

/// How a position was filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPath {
    /// Forced female pick to stay on track for the quota.
    Quota,
    /// Best eligible bench player.
    Eligible,
    /// Random least-played player, possibly out of position.
    Wildcard,
}

/// Builds one inning at a time over a shared roster.
#[derive(Debug, Clone)]
pub struct InningBuilder {
    formation: Formation,
    females_required: u32,
    engine: RuleEngine,
}

impl InningBuilder {
    /// Creates a builder with the fairness ranking.
    pub fn new(formation: Formation, females_required: u32) -> Self {
        Self {
            formation,
            females_required,
            engine: RuleEngine::fairness(),
        }
    }

    /// Splits the roster into bench and late-hold for inning `number`.
    /// Does not touch any player.
    pub fn partition(number: u32, roster: &Roster, late_arrival_inning: u32) -> Inning {
        let mut bench = Vec::new();
        let mut late = Vec::new();
        for (id, player) in roster.iter() {
            if !player.available {
                continue;
            }
            if player.late && number < late_arrival_inning {
                late.push(id);
            } else {
                bench.push(id);
            }
        }
        Inning::new(number, bench, late)
    }

    /// Partitions and greedily fills inning `number`.
    ///
    /// Increments play counts in `roster` for everyone fielded.
    pub fn build<R: Rng + ?Sized>(
        &self,
        number: u32,
        roster: &mut Roster,
        late_arrival_inning: u32,
        rng: &mut R,
    ) -> Inning {
        let mut inning = Self::partition(number, roster, late_arrival_inning);

        for &position in self.formation.positions() {
            match self.fill_position(&mut inning, roster, position, rng) {
                Some((id, path)) => debug!(
                    inning = number,
                    %position,
                    player = %roster.get(id).name,
                    ?path,
                    "position filled"
                ),
                None => debug!(inning = number, %position, "bench empty, position unfilled"),
            }
        }

        inning
    }

    fn fill_position<R: Rng + ?Sized>(
        &self,
        inning: &mut Inning,
        roster: &mut Roster,
        position: Position,
        rng: &mut R,
    ) -> Option<(PlayerId, FillPath)> {
        let ctx = SelectionContext::for_position(position);

        let pick = if self.must_be_female(inning) {
            self.find_female(inning, roster, &ctx, rng)
                .map(|id| (id, FillPath::Quota))
        } else {
            None
        };

        let pick = pick
            .or_else(|| {
                let eligible: Vec<PlayerId> = inning
                    .bench()
                    .iter()
                    .copied()
                    .filter(|&id| roster.get(id).is_eligible(position))
                    .collect();
                self.engine
                    .select_best(&eligible, roster, &ctx)
                    .map(|id| (id, FillPath::Eligible))
            })
            .or_else(|| {
                select_wildcard(inning.bench(), roster, rng).map(|id| (id, FillPath::Wildcard))
            })?;

        inning.move_to_field(roster, pick.0, position);
        Some(pick)
    }

    /// Every remaining slot is needed to reach the female quota.
    fn must_be_female(&self, inning: &Inning) -> bool {
        let slots_remaining =
            i64::from(self.formation.fielders()) - i64::from(inning.playing_count());
        let females_remaining =
            i64::from(self.females_required) - i64::from(inning.females_playing());
        slots_remaining == females_remaining
    }

    fn find_female<R: Rng + ?Sized>(
        &self,
        inning: &Inning,
        roster: &Roster,
        ctx: &SelectionContext,
        rng: &mut R,
    ) -> Option<PlayerId> {
        let females: Vec<PlayerId> = inning
            .bench()
            .iter()
            .copied()
            .filter(|&id| roster.get(id).female)
            .collect();

        let eligible: Vec<PlayerId> = females
            .iter()
            .copied()
            .filter(|&id| roster.get(id).is_eligible(ctx.position))
            .collect();

        self.engine
            .select_best(&eligible, roster, ctx)
            .or_else(|| select_wildcard(&females, roster, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const TEN: [Position; 10] = [
        Position::Pitcher,
        Position::Shortstop,
        Position::LeftField,
        Position::LeftCenterField,
        Position::ThirdBase,
        Position::FirstBase,
        Position::SecondBase,
        Position::RightCenterField,
        Position::RightField,
        Position::Catcher,
    ];

    fn specialists() -> Vec<Player> {
        TEN.iter()
            .map(|&pos| Player::new(format!("{pos}-guy")).with_position(pos, 10.0))
            .collect()
    }

    #[test]
    fn test_partition() {
        let roster = Roster::new(vec![
            Player::new("here"),
            Player::new("away").with_available(false),
            Player::new("late").with_late(true),
        ]);
        let early = InningBuilder::partition(1, &roster, 3);
        assert_eq!(early.bench().len(), 1);
        assert_eq!(early.late().len(), 1);

        let arrived = InningBuilder::partition(3, &roster, 3);
        assert_eq!(arrived.bench().len(), 2);
        assert!(arrived.late().is_empty());
    }

    #[test]
    fn test_each_specialist_gets_their_position() {
        let mut roster = Roster::new(specialists());
        let mut rng = SmallRng::seed_from_u64(1);
        let inning = InningBuilder::new(Formation::Ten, 0).build(1, &mut roster, 1, &mut rng);

        assert_eq!(inning.playing_count(), 10);
        for (pos, id) in inning.fielded_players() {
            assert!(roster.get(id).is_eligible(pos));
        }
        assert!(inning.bench().is_empty());
    }

    #[test]
    fn test_short_bench_leaves_positions_unfilled() {
        let mut roster = Roster::new(specialists().into_iter().take(6).collect());
        let mut rng = SmallRng::seed_from_u64(1);
        let inning = InningBuilder::new(Formation::Ten, 0).build(1, &mut roster, 1, &mut rng);

        assert_eq!(inning.playing_count(), 6);
        assert_eq!(inning.fielded().len(), 6);
    }

    #[test]
    fn test_wildcard_fills_when_nobody_eligible() {
        let mut roster = Roster::new(vec![Player::new("Nobody")]);
        let mut rng = SmallRng::seed_from_u64(3);
        let inning = InningBuilder::new(Formation::Eight, 0).build(1, &mut roster, 1, &mut rng);

        // First position in priority order goes to the only player.
        let id = roster.find("Nobody").unwrap();
        assert_eq!(inning.position_of(id), Some(Position::Pitcher));
        assert_eq!(roster.get(id).innings_played(), 1);
    }

    #[test]
    fn test_quota_forces_female() {
        // 9 males strong everywhere, 2 females: quota of 2 in an 8-fielder
        // format means the last two slots must go to the women.
        let mut players: Vec<Player> = (0..9)
            .map(|i| {
                Formation::Eight
                    .positions()
                    .iter()
                    .fold(Player::new(format!("M{i}")), |p, &pos| p.with_position(pos, 10.0))
            })
            .collect();
        players.push(Player::new("F1").with_female(true));
        players.push(
            Player::new("F2")
                .with_female(true)
                .with_position(Position::SecondBase, 3.0),
        );
        let mut roster = Roster::new(players);
        let mut rng = SmallRng::seed_from_u64(11);
        let inning = InningBuilder::new(Formation::Eight, 2).build(1, &mut roster, 1, &mut rng);

        assert_eq!(inning.playing_count(), 8);
        assert_eq!(inning.females_playing(), 2);
    }

    fn everywhere(name: &str, formation: Formation, strength: f64) -> Player {
        formation
            .positions()
            .iter()
            .fold(Player::new(name), |p, &pos| p.with_position(pos, strength))
    }

    #[test]
    fn test_quota_slot_goes_to_a_benched_female() {
        let mut forced_fills = 0;
        for seed in 0..8 {
            let mut players: Vec<Player> = (0..8)
                .map(|i| everywhere(&format!("M{i}"), Formation::Ten, 8.0))
                .collect();
            players.push(Player::new("F1").with_female(true).with_position(Position::SecondBase, 3.0));
            players.push(Player::new("F2").with_female(true).with_position(Position::RightField, 4.0));
            players.push(Player::new("F3").with_female(true));
            let mut roster = Roster::new(players);
            let builder = InningBuilder::new(Formation::Ten, 3);
            let mut rng = SmallRng::seed_from_u64(seed);

            for number in 1..=4 {
                let mut inning = InningBuilder::partition(number, &roster, 1);
                for &position in Formation::Ten.positions() {
                    let forced = builder.must_be_female(&inning)
                        && inning.bench().iter().any(|&id| roster.get(id).female);
                    let filled = builder.fill_position(&mut inning, &mut roster, position, &mut rng);
                    if forced {
                        forced_fills += 1;
                        let (id, path) = filled.unwrap();
                        assert!(roster.get(id).female, "seed {seed}, inning {number}, {position}");
                        assert_eq!(path, FillPath::Quota);
                    }
                }
                assert_eq!(inning.females_playing(), 3);
            }
        }
        assert!(forced_fills > 0);
    }

    #[test]
    fn test_quota_places_ineligible_female_when_no_female_qualifies() {
        let mut players: Vec<Player> = (0..8)
            .map(|i| everywhere(&format!("M{i}"), Formation::Eight, 10.0))
            .collect();
        players.push(Player::new("Rookie").with_female(true));
        let mut roster = Roster::new(players);
        let mut rng = SmallRng::seed_from_u64(2);

        let inning = InningBuilder::new(Formation::Eight, 1).build(1, &mut roster, 1, &mut rng);

        let rookie = roster.find("Rookie").unwrap();
        assert_eq!(inning.position_of(rookie), Some(Position::RightField));
        assert!(!roster.get(rookie).is_eligible(Position::RightField));
        assert_eq!(inning.females_playing(), 1);
        assert_eq!(inning.bench().len(), 1);
    }

    #[test]
    fn test_fairness_prefers_rested_players() {
        let players: Vec<Player> = (0..3)
            .map(|i| Player::new(format!("P{i}")).with_position(Position::Pitcher, 10.0 - i as f64))
            .collect();
        let mut roster = Roster::new(players);
        let p0 = roster.find("P0").unwrap();
        roster.record_inning(p0);

        let mut rng = SmallRng::seed_from_u64(5);
        let inning = InningBuilder::new(Formation::Eight, 0).build(2, &mut roster, 1, &mut rng);
        let p1 = roster.find("P1").unwrap();
        assert_eq!(inning.fielder_at(Position::Pitcher).and_then(|f| f.player_id()), Some(p1));
    }
}
