//! # Connect Four
//!
//! Two-player Connect Four on a 6 x 7 board with two front ends sharing one
//! engine: a blocking line-based console and a frame-paced terminal canvas
//! driven by mouse clicks.
//!
//! ## Modules
//!
//! - [`game`] — Board engine: drops, win/draw detection, turn counter
//! - [`session`] — Turn protocol shared by both front ends
//! - [`console`] — Text prompt front end
//! - [`ui`] — Terminal canvas front end built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed tracing setup
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod logging;
pub mod session;
pub mod ui;
