use super::board::{Board, DropError};
use super::Player;

/// Result of the game so far, recomputed from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

/// Where the turn protocol stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingMove(Player),
    Won(Player),
    Drawn,
}

impl TurnPhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, TurnPhase::AwaitingMove(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("column {0} is not on the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("drop failed after validation: {0}")]
    Structural(DropError),
}

/// Board plus turn counter for one game session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    turn: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            turn: 0,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves applied so far
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Player to move, from turn parity
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn)
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.board.check_winner(Player::X) {
            GameOutcome::Win(Player::X)
        } else if self.board.check_winner(Player::O) {
            GameOutcome::Win(Player::O)
        } else if self.board.is_draw() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn phase(&self) -> TurnPhase {
        match self.outcome() {
            GameOutcome::InProgress => TurnPhase::AwaitingMove(self.current_player()),
            GameOutcome::Win(player) => TurnPhase::Won(player),
            GameOutcome::Draw => TurnPhase::Drawn,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase().is_terminal()
    }

    /// Validate and apply a move for the current player, returning the phase
    /// the game moved into. Nothing changes on error.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<TurnPhase, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_valid_column(column) {
            return Err(if column < super::COLS {
                MoveError::ColumnFull(column)
            } else {
                MoveError::InvalidColumn(column)
            });
        }

        let player = self.current_player();
        self.board
            .drop_piece(column, player)
            .map_err(MoveError::Structural)?;
        self.turn += 1;

        // Win first: a full board with four in a row is a win, not a draw
        let phase = if self.board.check_winner(player) {
            TurnPhase::Won(player)
        } else if self.board.is_draw() {
            TurnPhase::Drawn
        } else {
            TurnPhase::AwaitingMove(self.current_player())
        };
        Ok(phase)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
