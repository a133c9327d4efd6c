//! Episode adapter for simulation and training loops: flat integer actions,
//! observation shapes, and per-episode board history.

mod action;
mod environment;

pub use action::{decode_action, encode_action};
pub use environment::{BoxSpace, EnvConfig, Environment, Step, StepInfo};
