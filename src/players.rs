//! Player display names with default-or-override lookup.

use crate::game::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Stores optional custom display names for both players.
///
/// Names are trimmed on set; an empty (or whitespace-only) name means "use
/// the default". Lookup never fails, and no validation beyond trimming is
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Custom name for player one; empty means use the default.
    player1_name: String,
    /// Custom name for player two; empty means use the default.
    player2_name: String,
}

impl PlayerNames {
    /// Creates an empty name store, with both players on their defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom name for `player`, trimming surrounding whitespace.
    ///
    /// An empty-after-trim name clears the override.
    #[instrument(skip(self, name))]
    pub fn set_name(&mut self, player: Player, name: &str) {
        let trimmed = name.trim().to_string();
        debug!(%player, name = %trimmed, "Setting player name");

        match player {
            Player::One => self.player1_name = trimmed,
            Player::Two => self.player2_name = trimmed,
        }
    }

    /// Returns the display name for `player`: the custom name if one is
    /// set, the default label otherwise.
    pub fn name_for(&self, player: Player) -> &str {
        let custom = match player {
            Player::One => &self.player1_name,
            Player::Two => &self.player2_name,
        };

        if custom.is_empty() {
            player.default_name()
        } else {
            custom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let names = PlayerNames::new();
        assert_eq!(names.name_for(Player::One), "Player #1");
        assert_eq!(names.name_for(Player::Two), "Player #2");
    }

    #[test]
    fn test_custom_name_overrides_default() {
        let mut names = PlayerNames::new();
        names.set_name(Player::One, "Toni");
        assert_eq!(names.name_for(Player::One), "Toni");
        assert_eq!(names.name_for(Player::Two), "Player #2");
    }

    #[test]
    fn test_whitespace_is_trimmed_on_set() {
        let mut names = PlayerNames::new();
        names.set_name(Player::Two, "  Anna  ");
        assert_eq!(names.name_for(Player::Two), "Anna");
    }

    #[test]
    fn test_empty_after_trim_restores_default() {
        let mut names = PlayerNames::new();
        names.set_name(Player::One, "Toni");
        names.set_name(Player::One, "   ");
        assert_eq!(names.name_for(Player::One), "Player #1");
    }
}
