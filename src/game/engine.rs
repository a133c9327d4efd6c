use serde::{Deserialize, Serialize};

use super::win::find_winner;
use super::{Board, BoardSnapshot, Placement, Player};
use crate::error::{ConfigError, MoveError};

/// Reward magnitudes. All are non-negative; the engine applies the signs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Total reward of a winning move.
    pub win_reward: f32,
    /// Magnitude of the (negative) total reward of a draw-completing move.
    pub draw_penalty: f32,
    /// Reward of any other successful placement.
    pub could_locate_reward: f32,
    /// Magnitude of the (negative) reward for choosing a full column.
    pub couldnt_locate_penalty: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        RewardConfig {
            win_reward: 10.0,
            draw_penalty: 5.0,
            could_locate_reward: 0.1,
            couldnt_locate_penalty: 0.1,
        }
    }
}

impl RewardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("win_reward", self.win_reward),
            ("draw_penalty", self.draw_penalty),
            ("could_locate_reward", self.could_locate_reward),
            ("couldnt_locate_penalty", self.couldnt_locate_penalty),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "game.rewards.{name} must be a finite value >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Immutable rules of one game: board size, line length, rewards, opener.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: usize,
    pub win_length: usize,
    pub first_player: Player,
    pub rewards: RewardConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: 4,
            win_length: 4,
            first_player: Player::Black,
            rewards: RewardConfig::default(),
        }
    }
}

impl GameConfig {
    /// Validate configuration values.
    ///
    /// A `win_length` larger than `grid_size` is accepted: no line can fit, so
    /// every game ends in a draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::Validation(
                "game.grid_size must be >= 2".into(),
            ));
        }
        if self.win_length == 0 {
            return Err(ConfigError::Validation(
                "game.win_length must be >= 1".into(),
            ));
        }
        if self.win_length > self.grid_size {
            log::warn!(
                "win_length {} exceeds grid_size {}; no line can ever be completed",
                self.win_length,
                self.grid_size
            );
        }
        self.rewards.validate()
    }

    /// Number of distinct column actions, G^2.
    pub fn action_count(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// What happened on one call to [`GameEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    pub acting_player: Player,
    pub winner: Option<Player>,
    /// The chosen column was full; nothing was placed.
    pub couldnt_locate: bool,
    /// Landing height of the piece, `None` when the column was full.
    pub height: Option<usize>,
    pub reward: f32,
    pub terminal: bool,
}

/// Turn and reward bookkeeping around a [`Board`].
///
/// Terminal states are absorbing: once a move wins or fills the board, every
/// further `apply_move` returns [`MoveError::GameOver`] until `reset`.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    current_player: Player,
    status: GameStatus,
    move_count: usize,
}

impl GameEngine {
    /// Validate `config` and start a fresh game.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GameEngine {
            board: Board::new(config.grid_size),
            current_player: config.first_player,
            status: GameStatus::InProgress,
            move_count: 0,
            config,
        })
    }

    /// Clear the board and hand the move back to the first player.
    pub fn reset(&mut self) -> BoardSnapshot {
        self.board = Board::new(self.config.grid_size);
        self.current_player = self.config.first_player;
        self.status = GameStatus::InProgress;
        self.move_count = 0;
        log::debug!("game reset; {} to move", self.current_player.name());
        self.board.snapshot()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Successful placements since the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns that can still take a piece, as (width, depth) pairs.
    pub fn legal_columns(&self) -> Vec<(usize, usize)> {
        if self.is_terminal() {
            return Vec::new();
        }
        let g = self.config.grid_size;
        (0..g)
            .flat_map(|w| (0..g).map(move |d| (w, d)))
            .filter(|&(w, d)| !self.board.is_column_full(w, d))
            .collect()
    }

    /// Drop the active player's piece into column (width, depth).
    pub fn apply_move(&mut self, width: usize, depth: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let rewards = self.config.rewards;

        let height = match self.board.place(width, depth, player)? {
            Placement::Placed { height } => height,
            Placement::ColumnFull => {
                log::debug!(
                    "{} chose full column ({width}, {depth})",
                    player.name()
                );
                return Ok(MoveOutcome {
                    acting_player: player,
                    winner: None,
                    couldnt_locate: true,
                    height: None,
                    reward: -rewards.couldnt_locate_penalty,
                    terminal: false,
                });
            }
        };

        self.move_count += 1;
        self.current_player = player.other();

        let winner = find_winner(&self.board, self.config.win_length);
        let (status, reward) = if let Some(winner) = winner {
            (GameStatus::Won(winner), rewards.win_reward)
        } else if self.board.is_full() {
            (GameStatus::Draw, -rewards.draw_penalty)
        } else {
            (GameStatus::InProgress, rewards.could_locate_reward)
        };
        self.status = status;

        log::debug!(
            "{} placed at (h={height}, w={width}, d={depth}); reward {reward}",
            player.name()
        );
        match status {
            GameStatus::Won(winner) => {
                log::info!("{} wins after {} moves", winner.name(), self.move_count)
            }
            GameStatus::Draw => log::info!("draw after {} moves", self.move_count),
            GameStatus::InProgress => {}
        }

        Ok(MoveOutcome {
            acting_player: player,
            winner: status.winner(),
            couldnt_locate: false,
            height: Some(height),
            reward,
            terminal: status.is_terminal(),
        })
    }
}
