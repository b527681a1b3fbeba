//! Winner consistency invariant.

use super::super::repository::ScoreRepository;
use super::super::types::{Game, Player};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: `winner` agrees with the margin-of-2 definition, and the two
/// players never satisfy the winning condition simultaneously.
pub struct SingleWinnerInvariant;

fn satisfies_win_condition(game: &Game, player: Player) -> bool {
    let own = game.score(player);
    let opponent = game.score(player.other());
    own >= Game::WINNING_SCORE && own >= opponent + 2
}

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        let winners: Vec<Player> = Player::iter()
            .filter(|player| satisfies_win_condition(game, *player))
            .collect();

        match game.winner() {
            Some(winner) => winners == vec![winner],
            None => winners.is_empty(),
        }
    }

    fn description() -> &'static str {
        "At most one player satisfies the win condition, and winner reflects it"
    }
}

impl Invariant<ScoreRepository> for SingleWinnerInvariant {
    fn holds(repository: &ScoreRepository) -> bool {
        <Self as Invariant<Game>>::holds(repository.game())
    }

    fn description() -> &'static str {
        <Self as Invariant<Game>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_at(p1: u32, p2: u32) -> Game {
        let mut game = Game::default();
        for _ in 0..p1 {
            game = game.with_point(Player::One);
        }
        for _ in 0..p2 {
            game = game.with_point(Player::Two);
        }
        game
    }

    #[test]
    fn test_holds_across_score_grid() {
        for p1 in 0..15 {
            for p2 in 0..15 {
                assert!(
                    SingleWinnerInvariant::holds(&game_at(p1, p2)),
                    "violated at {}-{}",
                    p1,
                    p2
                );
            }
        }
    }

    #[test]
    fn test_holds_for_repository() {
        let mut scores = ScoreRepository::new();
        for _ in 0..Game::WINNING_SCORE {
            scores.score_point(Player::Two).expect("open game");
        }
        assert!(<SingleWinnerInvariant as Invariant<ScoreRepository>>::holds(
            &scores
        ));
    }
}
