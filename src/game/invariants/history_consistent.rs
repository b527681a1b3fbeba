//! History consistency invariant: the undo stack mirrors the score.

use super::super::repository::ScoreRepository;
use super::Invariant;

/// Invariant: the history stack holds exactly one snapshot per point scored
/// since the last reset that has not been undone.
///
/// Each snapshot was taken immediately before a point, so snapshot totals
/// must form the chain 0, 1, ..., n-1 beneath the current game's total of n.
pub struct HistoryConsistentInvariant;

impl Invariant<ScoreRepository> for HistoryConsistentInvariant {
    fn holds(repository: &ScoreRepository) -> bool {
        let history = repository.history();
        let game = repository.game();

        if history.len() != game.total_score() as usize {
            return false;
        }

        history
            .iter()
            .enumerate()
            .all(|(i, snapshot)| snapshot.total_score() as usize == i)
    }

    fn description() -> &'static str {
        "History holds one snapshot per un-undone point, in scoring order"
    }
}
