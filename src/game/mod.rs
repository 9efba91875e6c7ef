//! Core Connect Four game logic: the board engine, player identity, and the
//! turn counter with its derived outcome.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DropError, Window, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError, TurnPhase};

/// Alternating-play column order that fills the board without anyone
/// connecting four.
#[cfg(test)]
pub(crate) const DRAW_SEQUENCE: [usize; ROWS * COLS] = [
    0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, //
    2, 3, 2, 3, 3, 2, 3, 2, 2, 3, 2, 3, //
    4, 5, 4, 5, 5, 4, 5, 4, 4, 5, 4, 5, //
    6, 6, 6, 6, 6, 6,
];
