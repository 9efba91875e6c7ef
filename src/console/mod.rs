//! Line-based console front end: prompts each player in turn and prints the
//! board after every move.

mod prompt;

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::game::{Board, Cell, GameOutcome, COLS};
use crate::session::{Session, Step};

pub use prompt::{parse_column, PromptMoves};

/// Play one game on the given reader/writer pair. Blocks on every turn.
///
/// Returns [`GameOutcome::InProgress`] if the input ends before the game does.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> io::Result<GameOutcome> {
    let mut session = Session::new(PromptMoves::new(input, output));
    info!("console session started");

    {
        let out = session.source_mut().output();
        writeln!(out, "Welcome to 4 in a Row!")?;
        write!(out, "{}", render_board(&Board::new()))?;
    }

    loop {
        match session.step()? {
            Step::Applied { .. } => {
                let state = *session.state();
                let out = session.source_mut().output();
                write!(out, "{}", render_board(state.board()))?;

                match state.outcome() {
                    GameOutcome::Win(player) => writeln!(out, "Player {player} wins!")?,
                    GameOutcome::Draw => writeln!(out, "It's a draw!")?,
                    GameOutcome::InProgress => continue,
                }
                out.flush()?;
                info!(outcome = ?state.outcome(), "console session finished");
                return Ok(state.outcome());
            }
            Step::Quit => {
                writeln!(session.source_mut().output(), "Goodbye.")?;
                return Ok(GameOutcome::InProgress);
            }
            // The prompt only hands back legal columns
            Step::Rejected(_) | Step::Ignored | Step::Pending => {}
        }
    }
}

/// Rows as `|X|O| | | | | |`, then the column legend.
pub fn render_board(board: &Board) -> String {
    let mut text = String::new();
    for row in 0..crate::game::ROWS {
        let cells: Vec<&str> = (0..COLS)
            .map(|col| match board.get(row, col) {
                Cell::Empty => " ",
                Cell::X => "X",
                Cell::O => "O",
            })
            .collect();
        text.push('|');
        text.push_str(&cells.join("|"));
        text.push_str("|\n");
    }
    let legend: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
    text.push(' ');
    text.push_str(&legend.join(" "));
    text.push('\n');
    text
}
