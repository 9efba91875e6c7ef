//! The turn protocol shared by both front ends.
//!
//! A [`Session`] owns the game for its whole lifetime and asks a
//! [`MoveSource`] for columns. The console source blocks until it has a
//! legal column; the pointer source drains whatever events are queued and
//! may come back with nothing. Everything after that (validation, the drop,
//! the win/draw check, the turn counter) is the same for both.

use std::io;

use tracing::{debug, error, info};

use crate::game::{Board, GameState, MoveError, Player, TurnPhase};

/// What a move source produced on one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRequest {
    /// Candidate column for the active player
    Drop(usize),
    /// No qualifying input yet
    Pending,
    /// The player closed the game
    Quit,
}

/// Anything that can produce moves for the active player.
pub trait MoveSource {
    fn next_move(&mut self, board: &Board, player: Player) -> io::Result<MoveRequest>;
}

/// Result of one [`Session::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Applied { column: usize, phase: TurnPhase },
    Rejected(MoveError),
    /// A move arrived after the game was decided
    Ignored,
    Pending,
    Quit,
}

pub struct Session<S> {
    state: GameState,
    source: S,
}

impl<S: MoveSource> Session<S> {
    pub fn new(source: S) -> Self {
        Session {
            state: GameState::initial(),
            source,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Poll the source once and apply at most one move.
    pub fn step(&mut self) -> io::Result<Step> {
        let player = self.state.current_player();
        let request = self.source.next_move(self.state.board(), player)?;

        let column = match request {
            MoveRequest::Drop(column) => column,
            MoveRequest::Pending => return Ok(Step::Pending),
            MoveRequest::Quit => {
                info!(turn = self.state.turn(), "session closed by player");
                return Ok(Step::Quit);
            }
        };

        if self.state.is_terminal() {
            debug!(column, "move after game end ignored");
            return Ok(Step::Ignored);
        }

        match self.state.apply_move_mut(column) {
            Ok(phase) => {
                info!(player = %player, column, turn = self.state.turn(), ?phase, "move applied");
                Ok(Step::Applied { column, phase })
            }
            Err(err @ MoveError::Structural(_)) => {
                error!(column, error = %err, "board refused a validated move");
                Ok(Step::Rejected(err))
            }
            Err(err) => {
                debug!(column, error = %err, "move rejected");
                Ok(Step::Rejected(err))
            }
        }
    }
}
