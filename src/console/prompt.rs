use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::InputError;
use crate::game::{Board, Player};
use crate::session::{MoveRequest, MoveSource};

/// Blocking move source: asks the active player on `output` and reads one
/// line at a time from `input` until it gets a legal column.
pub struct PromptMoves<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptMoves<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptMoves { input, output }
    }

    /// Where prompts go; the console loop prints the board here too.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MoveSource for PromptMoves<R, W> {
    fn next_move(&mut self, board: &Board, player: Player) -> io::Result<MoveRequest> {
        loop {
            write!(self.output, "Player {player}, choose a column (0-6): ")?;
            self.output.flush()?;

            // Undecodable bytes are just another unparseable reply
            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Ok(MoveRequest::Quit);
            }
            let line = String::from_utf8_lossy(&raw);

            match parse_column(&line, board) {
                Ok(column) => return Ok(MoveRequest::Drop(column)),
                Err(err) => {
                    debug!(input = line.trim(), ?err, "prompt reply rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }
}

/// Parse one reply into a column that `board` will accept.
pub fn parse_column(line: &str, board: &Board) -> Result<usize, InputError> {
    let trimmed = line.trim();
    let n: i64 = match trimmed.parse() {
        Ok(n) => n,
        // Well-formed but too wide for i64: still an integer, just not a column
        Err(_) if is_integer_literal(trimmed) => {
            return Err(InputError::InvalidColumn(if trimmed.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }))
        }
        Err(_) => return Err(InputError::NotAnInteger(trimmed.to_string())),
    };

    usize::try_from(n)
        .ok()
        .filter(|&col| board.is_valid_column(col))
        .ok_or(InputError::InvalidColumn(n))
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
