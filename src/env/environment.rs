use serde::{Deserialize, Serialize};

use super::action::decode_action;
use crate::error::{ConfigError, MoveError};
use crate::game::{BoardSnapshot, GameConfig, GameEngine, MoveOutcome, Player};

/// Adapter-level options that do not affect the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Report observations as [1, G, G, G] for Conv3d-style consumers.
    pub channel_first: bool,
    /// Keep a snapshot of the board after every successful placement.
    pub record_history: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            channel_first: false,
            record_history: true,
        }
    }
}

/// Bounded box of observation values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxSpace {
    pub low: i8,
    pub high: i8,
    pub shape: Vec<usize>,
}

/// Per-step metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    /// The player who made this step.
    pub turn: Player,
    pub winner: Option<Player>,
    pub couldnt_locate: bool,
}

impl StepInfo {
    /// Winner as a cell value, 0 when nobody has won.
    pub fn winner_value(&self) -> i8 {
        self.winner.map_or(0, Player::value)
    }
}

/// Result of [`Environment::step`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub observation: BoardSnapshot,
    pub reward: f32,
    pub done: bool,
    pub info: StepInfo,
}

/// Reset/step interface over integer column actions.
#[derive(Debug, Clone)]
pub struct Environment {
    engine: GameEngine,
    options: EnvConfig,
    step_number: usize,
    history: Vec<BoardSnapshot>,
}

impl Environment {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_options(config, EnvConfig::default())
    }

    pub fn with_options(config: GameConfig, options: EnvConfig) -> Result<Self, ConfigError> {
        Ok(Environment {
            engine: GameEngine::new(config)?,
            options,
            step_number: 0,
            history: Vec::new(),
        })
    }

    /// Start a new episode and return the empty board.
    pub fn reset(&mut self) -> BoardSnapshot {
        self.step_number = 0;
        self.history.clear();
        self.engine.reset()
    }

    /// Decode `action` into a column and play it for the active player.
    pub fn step(&mut self, action: usize) -> Result<Step, MoveError> {
        let (width, depth) = decode_action(action, self.engine.config().grid_size)?;
        let outcome = self.engine.apply_move(width, depth)?;
        let observation = self.engine.snapshot();

        if !outcome.couldnt_locate {
            self.step_number += 1;
            if self.options.record_history {
                self.history.push(observation.clone());
            }
        }

        Ok(Self::build_step(observation, outcome))
    }

    fn build_step(observation: BoardSnapshot, outcome: MoveOutcome) -> Step {
        Step {
            observation,
            reward: outcome.reward,
            done: outcome.terminal,
            info: StepInfo {
                turn: outcome.acting_player,
                winner: outcome.winner,
                couldnt_locate: outcome.couldnt_locate,
            },
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn options(&self) -> &EnvConfig {
        &self.options
    }

    /// Number of actions, G^2.
    pub fn action_space_size(&self) -> usize {
        self.engine.config().action_count()
    }

    pub fn observation_space(&self) -> BoxSpace {
        let g = self.engine.config().grid_size;
        let shape = if self.options.channel_first {
            vec![1, g, g, g]
        } else {
            vec![g, g, g]
        };
        BoxSpace {
            low: -1,
            high: 1,
            shape,
        }
    }

    /// Player to move next.
    pub fn player(&self) -> Player {
        self.engine.active_player()
    }

    /// Successful placements this episode.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Board snapshots after each successful placement, oldest first.
    pub fn history(&self) -> &[BoardSnapshot] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RewardConfig;

    fn env(grid_size: usize, win_length: usize) -> Environment {
        Environment::new(GameConfig {
            grid_size,
            win_length,
            first_player: Player::Black,
            rewards: RewardConfig {
                win_reward: 100.0,
                draw_penalty: 50.0,
                could_locate_reward: 10.0,
                couldnt_locate_penalty: 10.0,
            },
        })
        .unwrap()
    }

    #[test]
    fn test_spaces() {
        let env = env(4, 4);
        assert_eq!(env.action_space_size(), 16);
        assert_eq!(
            env.observation_space(),
            BoxSpace {
                low: -1,
                high: 1,
                shape: vec![4, 4, 4]
            }
        );

        let conv = Environment::with_options(
            GameConfig::default(),
            EnvConfig {
                channel_first: true,
                ..EnvConfig::default()
            },
        )
        .unwrap();
        assert_eq!(conv.observation_space().shape, vec![1, 4, 4, 4]);
    }

    #[test]
    fn test_step_decodes_action() {
        let mut env = env(4, 4);
        let step = env.step(6).unwrap(); // (w=1, d=2)
        assert_eq!(step.observation.get(0, 1, 2), 1);
        assert_eq!(step.info.turn, Player::Black);
        assert_eq!(step.info.winner_value(), 0);
        assert_eq!(step.reward, 10.0);
        assert!(!step.done);
        assert_eq!(env.player(), Player::White);
    }

    #[test]
    fn test_invalid_action_is_rejected_before_play() {
        let mut env = env(3, 3);
        assert_eq!(
            env.step(9).unwrap_err(),
            MoveError::ActionOutOfRange {
                action: 9,
                action_count: 9
            }
        );
        assert_eq!(env.step_number(), 0);
        assert_eq!(env.player(), Player::Black);
    }

    #[test]
    fn test_history_records_successful_steps_only() {
        let mut env = env(2, 3);
        env.step(0).unwrap();
        env.step(0).unwrap();
        let rejected = env.step(0).unwrap();
        assert!(rejected.info.couldnt_locate);
        env.step(1).unwrap();

        assert_eq!(env.step_number(), 3);
        let history = env.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].get(1, 0, 0), 0);
        assert_eq!(history[1].get(1, 0, 0), -1);
        assert_eq!(history[2].get(0, 0, 1), 1);
    }

    #[test]
    fn test_history_can_be_disabled() {
        let mut env = Environment::with_options(
            GameConfig::default(),
            EnvConfig {
                record_history: false,
                ..EnvConfig::default()
            },
        )
        .unwrap();
        env.step(0).unwrap();
        assert!(env.history().is_empty());
        assert_eq!(env.step_number(), 1);
    }

    #[test]
    fn test_reset_clears_episode() {
        let mut env = env(3, 2);
        env.step(0).unwrap();
        env.step(8).unwrap();
        assert!(env.step(1).unwrap().done);
        assert_eq!(env.step(2).unwrap_err(), MoveError::GameOver);

        let obs = env.reset();
        assert_eq!(obs.values(), &[0i8; 27][..]);
        assert_eq!(env.step_number(), 0);
        assert!(env.history().is_empty());
        assert_eq!(env.player(), Player::Black);
        assert!(!env.step(2).unwrap().done);
    }

    #[test]
    fn test_step_serializes_with_signed_players() {
        let mut env = env(2, 2);
        let step = env.step(3).unwrap();
        let json = serde_json::to_value(&step.info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"turn": 1, "winner": null, "couldnt_locate": false})
        );
    }
}
