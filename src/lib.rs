//! # Connect N
//!
//! Connect Four with a configurable win length. The board grows with the
//! number of pieces needed in a row, so larger targets stay winnable.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, rules, state machine
//! - [`ui`] — Terminal frontends: full-screen game view and plain line mode
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
