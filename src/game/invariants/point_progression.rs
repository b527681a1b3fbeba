//! Point progression invariant: snapshots advance one point at a time.

use super::super::repository::ScoreRepository;
use super::super::types::{Game, Player};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: along the chain of snapshots ending in the current game, each
/// step adds exactly one point for exactly one player and never takes a
/// point away.
pub struct PointProgressionInvariant;

fn advances_by_one_point(before: &Game, after: &Game) -> bool {
    if Player::iter().any(|p| after.score(p) < before.score(p)) {
        return false;
    }

    let gained: u32 = Player::iter()
        .map(|p| after.score(p) - before.score(p))
        .sum();
    gained == 1
}

impl Invariant<ScoreRepository> for PointProgressionInvariant {
    fn holds(repository: &ScoreRepository) -> bool {
        let mut chain: Vec<Game> = repository.history().clone();
        chain.push(*repository.game());

        chain
            .windows(2)
            .all(|pair| advances_by_one_point(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot differs from its successor by exactly one point for one player"
    }
}
