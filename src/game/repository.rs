//! The mutable owner of a match's state and its undo history.

use super::action::{PointOutcome, ScoreError};
use super::contracts::{Contract, ScoreContract};
use super::types::{Game, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Policy governing when the serving player may be changed.
///
/// Observed scoreboard behavior varies between "any time" and "only before
/// the first point", so the choice is a configuration knob rather than a
/// fixed rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServeSwitchPolicy {
    /// The server may be switched at any point, including mid-game.
    #[default]
    Always,
    /// The server may only be switched while no point has been scored.
    BeforeFirstPoint,
}

/// Owns the current [`Game`] snapshot and its undo history.
///
/// The repository is the single mutable holder of match state: every scored
/// point pushes the prior snapshot onto the history stack and replaces the
/// current game with a fresh one. All operations take `&mut self`, so
/// exclusive access is enforced by the borrow checker; callers sharing a
/// repository across threads must serialize access externally (for example
/// `Arc<Mutex<ScoreRepository>>`), since scoring and undo are compound
/// read-modify-write sequences.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ScoreRepository {
    /// The current snapshot, the one visible to presentation.
    pub(super) game: Game,
    /// Snapshots taken immediately before each scored point, oldest first.
    /// Cleared on reset; never persisted.
    pub(super) history: Vec<Game>,
    /// When the serving player may be changed.
    pub(super) serve_switch_policy: ServeSwitchPolicy,
}

impl ScoreRepository {
    /// Creates a repository with a fresh game and the default policy.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating score repository");
        Self {
            game: Game::default(),
            history: Vec::new(),
            serve_switch_policy: ServeSwitchPolicy::default(),
        }
    }

    /// Creates a repository with the given serve-switch policy.
    #[instrument]
    pub fn with_policy(serve_switch_policy: ServeSwitchPolicy) -> Self {
        Self {
            serve_switch_policy,
            ..Self::new()
        }
    }

    /// Scores a point for `player`.
    ///
    /// Pushes the current snapshot onto the history stack, then replaces the
    /// game with a copy carrying one more point for `player`. Returns
    /// [`PointOutcome::Won`] iff this point ended the game, so the caller
    /// can trigger its game-won feedback.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::GameOver`] if the game already has a winner;
    /// the state is left untouched.
    #[instrument(skip(self), fields(p1 = self.game.player1_score(), p2 = self.game.player2_score()))]
    pub fn score_point(&mut self, player: Player) -> Result<PointOutcome, ScoreError> {
        ScoreContract::pre(self, &player)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.history.push(self.game);
        self.game = self.game.with_point(player);

        #[cfg(debug_assertions)]
        ScoreContract::post(&before, self)?;

        match self.game.winner() {
            Some(winner) => {
                info!(%winner, "Point ended the game");
                Ok(PointOutcome::Won(winner))
            }
            None => {
                debug!(
                    p1 = self.game.player1_score(),
                    p2 = self.game.player2_score(),
                    serving = %self.game.serving_player(),
                    "Point scored"
                );
                Ok(PointOutcome::Continues)
            }
        }
    }

    /// Undoes the most recently scored point, restoring the snapshot taken
    /// just before it (scores and serve anchor alike).
    ///
    /// Returns `false` without changing anything if no point is left to
    /// undo. Serve switches never push history, so they are not undone as
    /// actions; a switch made after the last scored point is clobbered by
    /// the restored snapshot.
    #[instrument(skip(self))]
    pub fn undo_last_point(&mut self) -> bool {
        match self.history.pop() {
            Some(last) => {
                self.game = last;
                debug!(
                    p1 = self.game.player1_score(),
                    p2 = self.game.player2_score(),
                    "Undid last point"
                );
                true
            }
            None => {
                debug!("Nothing to undo");
                false
            }
        }
    }

    /// Starts a new game: clears the history and zeroes the scores.
    ///
    /// The serve anchor returns to [`Player::One`]; presentation sets it
    /// again before the first point when the players choose differently.
    /// This is the only way out of a won game. Calling it repeatedly yields
    /// the same fresh state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.history.clear();
        self.game = Game::default();
    }

    /// Flips the serving player to the other side.
    ///
    /// Only future serve computation changes; already-elapsed points keep
    /// their recorded scores, and no history entry is pushed.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::ServeChangeLocked`] under
    /// [`ServeSwitchPolicy::BeforeFirstPoint`] once a point has been scored.
    #[instrument(skip(self))]
    pub fn switch_serve(&mut self) -> Result<(), ScoreError> {
        let next = self.game.initially_serving_player().other();
        self.set_initially_serving_player(next)
    }

    /// Sets the player who serves first.
    ///
    /// This is the pre-game "who serves first?" choice, subject to the same
    /// policy as [`switch_serve`](Self::switch_serve).
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::ServeChangeLocked`] under
    /// [`ServeSwitchPolicy::BeforeFirstPoint`] once a point has been scored.
    #[instrument(skip(self))]
    pub fn set_initially_serving_player(&mut self, player: Player) -> Result<(), ScoreError> {
        if self.serve_switch_policy == ServeSwitchPolicy::BeforeFirstPoint
            && !self.history.is_empty()
        {
            warn!(%player, "Serve change rejected by policy");
            return Err(ScoreError::ServeChangeLocked);
        }

        debug!(%player, "Serve anchor set");
        self.game.set_initially_serving_player(player);
        Ok(())
    }
}

impl Default for ScoreRepository {
    fn default() -> Self {
        Self::new()
    }
}
