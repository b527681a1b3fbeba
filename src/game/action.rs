//! Scoring outcomes and errors.
//!
//! Scoring a point is the only transition with an interesting result:
//! presentation reacts differently to "point scored, game continues" and
//! "point scored, game won" (distinct haptic cues), so the outcome is a
//! first-class enum rather than a bare bool.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of scoring a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointOutcome {
    /// The point was scored and the game continues.
    Continues,
    /// The point was scored and ended the game.
    Won(Player),
}

impl PointOutcome {
    /// Returns the winner if this point ended the game.
    pub fn winner(&self) -> Option<Player> {
        match self {
            PointOutcome::Won(player) => Some(*player),
            PointOutcome::Continues => None,
        }
    }

    /// Returns true if this point ended the game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, PointOutcome::Won(_))
    }
}

impl std::fmt::Display for PointOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointOutcome::Continues => write!(f, "Game on"),
            PointOutcome::Won(player) => write!(f, "{} wins", player),
        }
    }
}

/// Error that can occur when mutating match state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScoreError {
    /// The game already has a winner; no further points may be scored.
    #[display("Game is already over")]
    GameOver,

    /// The serve-switch policy forbids changing the server now.
    #[display("Serve can no longer be changed in this game")]
    ServeChangeLocked,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ScoreError {}
