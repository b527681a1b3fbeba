//! Core domain types for table-tennis scoring.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One side of the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// The player on side one.
    One,
    /// The player on side two.
    Two,
}

impl Player {
    /// Returns the opposite player.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Default display name, used when no custom name is set.
    pub fn default_name(self) -> &'static str {
        match self {
            Player::One => "Player #1",
            Player::Two => "Player #2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.default_name())
    }
}

/// Snapshot of one game of table tennis.
///
/// `Game` is an immutable value: scoring a point produces a fresh snapshot
/// via [`Game::with_point`] rather than mutating in place. The serving
/// player and the winner are derived purely from the two scores, so a
/// snapshot carries no hidden state and the repository's undo stack reduces
/// to storing prior values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    player1_score: u32,
    player2_score: u32,
    initially_serving_player: Player,
}

impl Game {
    /// Points required to win, subject to the two-point margin.
    pub const WINNING_SCORE: u32 = 11;

    /// Creates a fresh game with zeroed scores.
    #[instrument]
    pub fn new(initially_serving_player: Player) -> Self {
        Self {
            player1_score: 0,
            player2_score: 0,
            initially_serving_player,
        }
    }

    /// Player one's score.
    pub fn player1_score(&self) -> u32 {
        self.player1_score
    }

    /// Player two's score.
    pub fn player2_score(&self) -> u32 {
        self.player2_score
    }

    /// Score for the given player.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_score,
            Player::Two => self.player2_score,
        }
    }

    /// The player who serves the first point of this game.
    pub fn initially_serving_player(&self) -> Player {
        self.initially_serving_player
    }

    /// Re-anchors the serve rotation. Only future serve computation changes;
    /// elapsed points keep their recorded scores.
    pub(crate) fn set_initially_serving_player(&mut self, player: Player) {
        self.initially_serving_player = player;
    }

    /// Total points played so far.
    pub fn total_score(&self) -> u32 {
        self.player1_score + self.player2_score
    }

    /// The player due to serve the next point.
    pub fn serving_player(&self) -> Player {
        super::rules::serving_player(self)
    }

    /// The winner, if this snapshot satisfies the margin-of-2 win rule.
    pub fn winner(&self) -> Option<Player> {
        super::rules::winner(self)
    }

    /// Returns a new snapshot with one more point for `player`.
    /// All other fields carry over unchanged.
    pub fn with_point(self, player: Player) -> Self {
        match player {
            Player::One => Self {
                player1_score: self.player1_score + 1,
                ..self
            },
            Player::Two => Self {
                player2_score: self.player2_score + 1,
                ..self
            },
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::One)
    }
}
