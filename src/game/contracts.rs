//! Contract-based validation for score transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} action {Q}

use super::action::ScoreError;
use super::invariants::{InvariantSet, TableTennisInvariants};
use super::repository::ScoreRepository;
use super::types::Player;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} must hold before applying the action
/// - Postcondition: {Q(before, after)} must hold after applying the action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ScoreError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), ScoreError>;
}

// ─────────────────────────────────────────────────────────────
//  Scoring Precondition
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must not already have a winner.
///
/// A won game is terminal; the only way forward is a reset.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Validates that the current game is still open for scoring.
    #[instrument(skip(repository))]
    pub fn check(repository: &ScoreRepository) -> Result<(), ScoreError> {
        if repository.game().winner().is_some() {
            Err(ScoreError::GameOver)
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Score Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for scoring a point.
///
/// Preconditions:
/// - The game has no winner yet
///
/// Postconditions:
/// - History mirrors the points scored
/// - Snapshots advance one point at a time
/// - The winner derivation stays consistent
pub struct ScoreContract;

impl Contract<ScoreRepository, Player> for ScoreContract {
    fn pre(repository: &ScoreRepository, _action: &Player) -> Result<(), ScoreError> {
        NoWinnerYet::check(repository)
    }

    fn post(_before: &ScoreRepository, after: &ScoreRepository) -> Result<(), ScoreError> {
        TableTennisInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ScoreError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
