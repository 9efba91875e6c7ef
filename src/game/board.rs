use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning run.
const RUN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

/// Four board positions `(row, col)` tested together for a win.
pub type Window = [(usize, usize); RUN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {0} is out of range")]
    OutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// A move into `col` is legal iff the column exists and its top cell is empty.
    pub fn is_valid_column(&self, col: usize) -> bool {
        !self.is_column_full(col)
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// The board is left untouched on error.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, DropError> {
        if col >= COLS {
            return Err(DropError::OutOfRange(col));
        }

        // Find the lowest empty row in this column
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(DropError::ColumnFull(col))?;

        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// True once every column is full. Only meaningful after the win check
    /// for the piece just placed came back negative.
    pub fn is_draw(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if `player` has four in a row anywhere on the board
    pub fn check_winner(&self, player: Player) -> bool {
        self.winning_window(player).is_some()
    }

    /// First window (horizontal, vertical, descending, ascending) entirely
    /// held by `player`.
    pub fn winning_window(&self, player: Player) -> Option<Window> {
        let cell = player.to_cell();
        windows().find(|window| window.iter().all(|&(r, c)| self.cells[r][c] == cell))
    }

    #[cfg(test)]
    pub(crate) fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Every scan window on the board.
fn windows() -> impl Iterator<Item = Window> {
    let anchors = |rows: std::ops::Range<usize>, cols: std::ops::Range<usize>| {
        rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
    };
    let span = |(dr, dc): (isize, isize)| {
        move |(r, c): (usize, usize)| -> Window {
            std::array::from_fn(|i| {
                let i = i as isize;
                ((r as isize + dr * i) as usize, (c as isize + dc * i) as usize)
            })
        }
    };

    let horizontal = anchors(0..ROWS, 0..COLS - RUN + 1).map(span((0, 1)));
    let vertical = anchors(0..ROWS - RUN + 1, 0..COLS).map(span((1, 0)));
    let descending = anchors(0..ROWS - RUN + 1, 0..COLS - RUN + 1).map(span((1, 1)));
    // Anchored on the lower rows, extending up and to the right
    let ascending = anchors(RUN - 1..ROWS, 0..COLS - RUN + 1).map(span((-1, 1)));

    horizontal.chain(vertical).chain(descending).chain(ascending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DRAW_SEQUENCE;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(!board.check_winner(Player::X));
        assert!(!board.check_winner(Player::O));
        assert!(!board.is_draw());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Player::X).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::X);

        // Drop second piece in same column
        let row = board.drop_piece(3, Player::O).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::O);
    }

    #[test]
    fn test_every_column_takes_six_pieces() {
        for col in 0..COLS {
            let mut board = Board::new();
            for expected_row in (0..ROWS).rev() {
                assert!(board.is_valid_column(col));
                assert_eq!(board.drop_piece(col, Player::X), Ok(expected_row));
            }

            let before = board;
            assert!(!board.is_valid_column(col));
            assert_eq!(board.drop_piece(col, Player::O), Err(DropError::ColumnFull(col)));
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_empty_cells_stay_contiguous_from_top() {
        let mut board = Board::new();
        for (i, &col) in DRAW_SEQUENCE.iter().enumerate() {
            board.drop_piece(col, Player::for_turn(i)).unwrap();
            for c in 0..COLS {
                let filled: Vec<bool> = (0..ROWS).map(|r| board.get(r, c) != Cell::Empty).collect();
                let first = filled.iter().position(|&f| f).unwrap_or(ROWS);
                assert!(filled[first..].iter().all(|&f| f), "gap in column {c}");
            }
        }
    }

    #[test]
    fn test_out_of_range_column() {
        let mut board = Board::new();
        assert!(!board.is_valid_column(7));
        assert!(!board.is_valid_column(usize::MAX));
        assert_eq!(board.drop_piece(7, Player::X), Err(DropError::OutOfRange(7)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_window_count() {
        let all: Vec<Window> = windows().collect();
        assert_eq!(all.len(), 24 + 21 + 12 + 12);
        assert!(all
            .iter()
            .flatten()
            .all(|&(r, c)| r < ROWS && c < COLS));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(0, Player::X).unwrap();
        }
        assert!(board.check_winner(Player::X));
        assert!(!board.check_winner(Player::O));
        for row in 2..ROWS {
            assert_eq!(board.get(row, 0), Cell::X);
        }
        assert_eq!(
            board.winning_window(Player::X),
            Some([(2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Player::X).unwrap();
        }
        assert!(board.check_winner(Player::X));
        assert_eq!(
            board.winning_window(Player::X),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut board = Board::new();
        for col in 3..COLS {
            board.drop_piece(col, Player::O).unwrap();
        }
        assert!(board.check_winner(Player::O));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Player::X).unwrap();

        board.drop_piece(1, Player::O).unwrap();
        board.drop_piece(1, Player::X).unwrap();

        board.drop_piece(2, Player::O).unwrap();
        board.drop_piece(2, Player::O).unwrap();
        board.drop_piece(2, Player::X).unwrap();

        board.drop_piece(3, Player::O).unwrap();
        board.drop_piece(3, Player::O).unwrap();
        board.drop_piece(3, Player::O).unwrap();
        assert!(!board.check_winner(Player::X));
        board.drop_piece(3, Player::X).unwrap();

        assert!(board.check_winner(Player::X));
        assert_eq!(
            board.winning_window(Player::X),
            Some([(5, 0), (4, 1), (3, 2), (2, 3)])
        );
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Player::X).unwrap();

        board.drop_piece(5, Player::O).unwrap();
        board.drop_piece(5, Player::X).unwrap();

        board.drop_piece(4, Player::O).unwrap();
        board.drop_piece(4, Player::O).unwrap();
        board.drop_piece(4, Player::X).unwrap();

        board.drop_piece(3, Player::O).unwrap();
        board.drop_piece(3, Player::O).unwrap();
        board.drop_piece(3, Player::O).unwrap();
        board.drop_piece(3, Player::X).unwrap();

        assert!(board.check_winner(Player::X));
        assert_eq!(
            board.winning_window(Player::X),
            Some([(2, 3), (3, 4), (4, 5), (5, 6)])
        );
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::X).unwrap();
        }
        board.drop_piece(3, Player::O).unwrap();
        assert!(!board.check_winner(Player::X));
    }

    #[test]
    fn test_full_board_without_four_is_draw() {
        let mut board = Board::new();
        for (i, &col) in DRAW_SEQUENCE.iter().enumerate() {
            assert!(!board.is_draw());
            board.drop_piece(col, Player::for_turn(i)).unwrap();
            assert!(!board.check_winner(Player::X), "X won after move {i}");
            assert!(!board.check_winner(Player::O), "O won after move {i}");
        }
        assert_eq!(board.piece_count(), ROWS * COLS);
        assert!(board.is_draw());
    }

    #[test]
    fn test_one_empty_cell_is_not_draw() {
        let mut board = Board::new();
        for (i, &col) in DRAW_SEQUENCE[..41].iter().enumerate() {
            board.drop_piece(col, Player::for_turn(i)).unwrap();
        }
        assert_eq!(board.piece_count(), 41);
        assert!(!board.is_draw());
    }
}
