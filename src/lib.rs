//! Table-tennis score tracking.
//!
//! The core of a two-player scoreboard: a pure [`Game`] value type that
//! derives the serving player and the winner from the two scores, and a
//! [`ScoreRepository`] that owns the current snapshot plus the undo history.
//! Presentation layers read scores, serving player, and winner from the
//! repository's game, and react to the [`PointOutcome`] returned by
//! [`ScoreRepository::score_point`].
//!
//! # Architecture
//!
//! - **Game**: immutable per-value snapshot; serve rotation and the
//!   margin-of-2 win rule are pure functions of the scores
//! - **ScoreRepository**: single mutable owner; scoring pushes snapshots
//!   onto a stack, undo pops them, reset clears everything
//! - **PlayerNames**: default-or-override display names for both players
//!
//! # Example
//!
//! ```
//! use table_tennis_score::{Player, PointOutcome, ScoreRepository};
//!
//! # fn main() -> Result<(), table_tennis_score::ScoreError> {
//! let mut scores = ScoreRepository::new();
//! scores.set_initially_serving_player(Player::Two)?;
//!
//! let outcome = scores.score_point(Player::One)?;
//! assert_eq!(outcome, PointOutcome::Continues);
//! assert_eq!(scores.game().player1_score(), 1);
//! assert_eq!(scores.game().serving_player(), Player::Two);
//!
//! scores.undo_last_point();
//! assert_eq!(scores.game().total_score(), 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod players;

// Crate-level exports - Game types
pub use game::{Game, Player, PointOutcome, ScoreError, serving_player, winner};

// Crate-level exports - Repository
pub use game::{ScoreRepository, ServeSwitchPolicy};

// Crate-level exports - Contracts and invariants
pub use game::{
    Contract, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    NoWinnerYet, PointProgressionInvariant, ScoreContract, SingleWinnerInvariant,
    TableTennisInvariants,
};

// Crate-level exports - Player names
pub use players::PlayerNames;
