//! Property coverage for serve rotation and the win rule.

use strum::IntoEnumIterator;
use table_tennis_score::{Game, Player};

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
fn test_serve_cycle_is_anchored_at_zero() {
    let mut game = Game::new(Player::One);
    let expected = [
        Player::One,
        Player::One,
        Player::Two,
        Player::Two,
        Player::One,
        Player::One,
    ];

    for (total, want) in expected.iter().enumerate() {
        assert_eq!(game.serving_player(), *want, "total {}", total);
        game = game.with_point(Player::One.other());
    }
}

#[test]
fn test_serve_rotates_every_two_points_below_deuce() {
    for initial in Player::iter() {
        for p1 in 0..10u32 {
            for p2 in 0..10u32 {
                let game = game_at(p1, p2, initial);
                let expected = match (p1 + p2) % 4 {
                    0 | 1 => initial,
                    _ => initial.other(),
                };
                assert_eq!(
                    game.serving_player(),
                    expected,
                    "initial {:?}, scores {}-{}",
                    initial,
                    p1,
                    p2
                );
            }
        }
    }
}

#[test]
fn test_serve_alternates_every_point_at_deuce() {
    for initial in Player::iter() {
        for extra1 in 0..6u32 {
            for extra2 in 0..6u32 {
                let (p1, p2) = (10 + extra1, 10 + extra2);
                let game = game_at(p1, p2, initial);
                let expected = if (p1 + p2) % 2 == 0 {
                    initial
                } else {
                    initial.other()
                };
                assert_eq!(
                    game.serving_player(),
                    expected,
                    "initial {:?}, scores {}-{}",
                    initial,
                    p1,
                    p2
                );
            }
        }
    }
}

#[test]
fn test_winner_requires_eleven_and_a_two_point_margin() {
    for p1 in 0..16u32 {
        for p2 in 0..16u32 {
            let game = game_at(p1, p2, Player::One);
            let expected = if p1 >= Game::WINNING_SCORE && p1 >= p2 + 2 {
                Some(Player::One)
            } else if p2 >= Game::WINNING_SCORE && p2 >= p1 + 2 {
                Some(Player::Two)
            } else {
                None
            };
            assert_eq!(game.winner(), expected, "scores {}-{}", p1, p2);
        }
    }
}

#[test]
fn test_win_rule_boundaries() {
    assert_eq!(game_at(11, 9, Player::One).winner(), Some(Player::One));
    assert_eq!(game_at(11, 10, Player::One).winner(), None);
    assert_eq!(game_at(12, 10, Player::One).winner(), Some(Player::One));
    assert_eq!(game_at(10, 12, Player::One).winner(), Some(Player::Two));
    assert_eq!(game_at(10, 0, Player::One).winner(), None);
    // No score cap in extended play
    assert_eq!(game_at(19, 17, Player::One).winner(), Some(Player::One));
    assert_eq!(game_at(18, 17, Player::One).winner(), None);
}
