use std::path::PathBuf;

/// Errors raised when a move cannot be attempted at all.
///
/// A full column is *not* represented here: it is an ordinary game outcome
/// reported through [`MoveOutcome::couldnt_locate`](crate::game::MoveOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column ({width}, {depth}) is outside a board of size {grid_size}")]
    OutOfBounds {
        width: usize,
        depth: usize,
        grid_size: usize,
    },

    #[error("action {action} is out of range (expected 0..{action_count})")]
    ActionOutOfRange { action: usize, action_count: usize },

    #[error("game is already over")]
    GameOver,
}

/// Errors converting a raw cell value into a player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("invalid player value {0} (expected 1 or -1)")]
    InvalidValue(i8),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = MoveError::OutOfBounds {
            width: 4,
            depth: 1,
            grid_size: 4,
        };
        assert_eq!(
            err.to_string(),
            "column (4, 1) is outside a board of size 4"
        );
    }

    #[test]
    fn test_action_out_of_range_display() {
        let err = MoveError::ActionOutOfRange {
            action: 16,
            action_count: 16,
        };
        assert_eq!(
            err.to_string(),
            "action 16 is out of range (expected 0..16)"
        );
    }

    #[test]
    fn test_player_error_display() {
        assert_eq!(
            PlayerError::InvalidValue(0).to_string(),
            "invalid player value 0 (expected 1 or -1)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.grid_size must be >= 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.grid_size must be >= 2"
        );
    }
}
