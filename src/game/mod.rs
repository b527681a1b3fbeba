mod action;
mod contracts;
mod repository;
mod rules;
mod types;

pub mod invariants;

pub use action::{PointOutcome, ScoreError};
pub use contracts::{Contract, NoWinnerYet, ScoreContract};
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    PointProgressionInvariant, SingleWinnerInvariant, TableTennisInvariants,
};
pub use repository::{ScoreRepository, ServeSwitchPolicy};
pub use rules::{serving_player, winner};
pub use types::{Game, Player};
