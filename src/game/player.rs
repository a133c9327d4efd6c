use serde::{Deserialize, Serialize};

use super::board::Cell;
use crate::error::PlayerError;

/// One of the two sides. Serialized as its signed cell value (`1` / `-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Signed cell value: +1 for Black, -1 for White.
    pub fn value(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    pub fn from_value(value: i8) -> Result<Player, PlayerError> {
        match value {
            1 => Ok(Player::Black),
            -1 => Ok(Player::White),
            other => Err(PlayerError::InvalidValue(other)),
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

impl TryFrom<i8> for Player {
    type Error = PlayerError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Player::from_value(value)
    }
}

impl From<Player> for i8 {
    fn from(player: Player) -> i8 {
        player.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Black.other(), Player::White);
        assert_eq!(Player::White.other(), Player::Black);
    }

    #[test]
    fn test_player_values() {
        assert_eq!(Player::Black.value(), 1);
        assert_eq!(Player::White.value(), -1);
        assert_eq!(Player::Black.other().value(), -Player::Black.value());
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Player::from_value(1), Ok(Player::Black));
        assert_eq!(Player::from_value(-1), Ok(Player::White));
        assert_eq!(Player::from_value(0), Err(PlayerError::InvalidValue(0)));
        assert_eq!(Player::try_from(2), Err(PlayerError::InvalidValue(2)));
    }

    #[test]
    fn test_to_cell_matches_value() {
        for player in [Player::Black, Player::White] {
            assert_eq!(player.to_cell().value(), player.value());
        }
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Black.name(), "Black");
        assert_eq!(Player::White.name(), "White");
    }
}
