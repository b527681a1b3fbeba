//! Serve rotation and win detection for table tennis.
//!
//! This module contains pure functions for evaluating game state according
//! to standard table-tennis rules. Rules are separated from state ownership
//! to enable composition into contract systems.

use super::types::{Game, Player};
use tracing::instrument;

/// Both players at or past this score puts the game into deuce play.
const DEUCE_THRESHOLD: u32 = 10;

/// Returns the player due to serve the next point.
///
/// Service alternates every two points during normal play, anchored at the
/// initially serving player, and every single point once both players have
/// reached ten (deuce play).
#[instrument]
pub fn serving_player(game: &Game) -> Player {
    let initial = game.initially_serving_player();

    if game.player1_score() >= DEUCE_THRESHOLD && game.player2_score() >= DEUCE_THRESHOLD {
        return if game.total_score() % 2 == 0 {
            initial
        } else {
            initial.other()
        };
    }

    if game.total_score() % 4 < 2 {
        initial
    } else {
        initial.other()
    }
}

/// Returns the winner, if any.
///
/// A player wins on reaching [`Game::WINNING_SCORE`] while leading by at
/// least two points; otherwise play continues with no score cap. The two
/// conditions cannot hold for both players at once.
#[instrument]
pub fn winner(game: &Game) -> Option<Player> {
    let p1 = game.player1_score();
    let p2 = game.player2_score();

    if p1 < Game::WINNING_SCORE && p2 < Game::WINNING_SCORE {
        return None;
    }

    if p1 >= p2 + 2 {
        Some(Player::One)
    } else if p2 >= p1 + 2 {
        Some(Player::Two)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_at(p1: u32, p2: u32, initial: Player) -> Game {
        let mut game = Game::new(initial);
        for _ in 0..p1 {
            game = game.with_point(Player::One);
        }
        for _ in 0..p2 {
            game = game.with_point(Player::Two);
        }
        game
    }

    #[test]
    fn test_initial_player_serves_first_two_points() {
        assert_eq!(serving_player(&game_at(0, 0, Player::Two)), Player::Two);
        assert_eq!(serving_player(&game_at(1, 0, Player::Two)), Player::Two);
    }

    #[test]
    fn test_serve_rotates_after_two_points() {
        assert_eq!(serving_player(&game_at(2, 0, Player::One)), Player::Two);
        assert_eq!(serving_player(&game_at(2, 1, Player::One)), Player::Two);
        assert_eq!(serving_player(&game_at(2, 2, Player::One)), Player::One);
    }

    #[test]
    fn test_deuce_alternates_every_point() {
        // Total 20, even: back to the initial server.
        assert_eq!(serving_player(&game_at(10, 10, Player::One)), Player::One);
        assert_eq!(serving_player(&game_at(11, 10, Player::One)), Player::Two);
        assert_eq!(serving_player(&game_at(11, 11, Player::One)), Player::One);
    }

    #[test]
    fn test_no_winner_below_threshold() {
        assert_eq!(winner(&game_at(0, 0, Player::One)), None);
        assert_eq!(winner(&game_at(10, 0, Player::One)), None);
    }

    #[test]
    fn test_winner_at_eleven_with_margin() {
        assert_eq!(winner(&game_at(11, 0, Player::One)), Some(Player::One));
        assert_eq!(winner(&game_at(9, 11, Player::One)), Some(Player::Two));
    }

    #[test]
    fn test_no_winner_without_two_point_margin() {
        assert_eq!(winner(&game_at(11, 10, Player::One)), None);
        assert_eq!(winner(&game_at(12, 11, Player::One)), None);
        assert_eq!(winner(&game_at(12, 10, Player::One)), Some(Player::One));
    }
}
