//! # Connect-N 3D
//!
//! Rules engine for gravity-driven "K in a row" on a G x G x G board. Pieces
//! drop to the lowest free cell of a (width, depth) column; a player wins with
//! K of their pieces along any axis, face diagonal, or space diagonal.
//!
//! ## Modules
//!
//! - [`game`] — Core logic: board, players, win detection, turn/reward engine
//! - [`env`] — Reset/step adapter over integer actions, with episode history
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod env;
pub mod error;
pub mod game;
