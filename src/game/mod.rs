//! Core 3-D K-in-a-row logic: gravity board, win detection, and the turn /
//! reward state machine.

mod board;
mod engine;
mod player;
pub mod win;

pub use board::{Board, BoardSnapshot, Cell, Placement};
pub use engine::{GameConfig, GameEngine, GameStatus, MoveOutcome, RewardConfig};
pub use player::Player;
pub use win::{find_winner, has_line, DIRECTIONS};
