use std::io;

use tracing::debug;

use crate::game::{Board, Player};
use crate::session::{MoveRequest, MoveSource};

use super::events::{EventQueue, PointerButton, UiEvent};
use super::layout;

/// Move source fed by pointer presses.
///
/// Each call drains the queue once and yields at most one column, so a burst
/// of clicks inside one frame can never drop more than one piece.
pub struct PointerMoves<Q> {
    queue: Q,
    quit_pending: bool,
}

impl<Q: EventQueue> PointerMoves<Q> {
    pub fn new(queue: Q) -> Self {
        PointerMoves {
            queue,
            quit_pending: false,
        }
    }

    pub fn queue_mut(&mut self) -> &mut Q {
        &mut self.queue
    }
}

impl<Q: EventQueue> MoveSource for PointerMoves<Q> {
    fn next_move(&mut self, board: &Board, player: Player) -> io::Result<MoveRequest> {
        if self.quit_pending {
            return Ok(MoveRequest::Quit);
        }

        let mut chosen = None;
        for event in self.queue.drain()? {
            match event {
                UiEvent::Quit if chosen.is_some() => {
                    // Let the accepted move land before closing
                    self.quit_pending = true;
                    break;
                }
                UiEvent::Quit => return Ok(MoveRequest::Quit),
                UiEvent::PointerPress {
                    button: PointerButton::Primary,
                    x,
                    ..
                } => match layout::column_at(x).filter(|&col| board.is_valid_column(col)) {
                    Some(col) if chosen.is_none() => chosen = Some(col),
                    Some(col) => debug!(col, %player, "extra click in the same frame dropped"),
                    None => debug!(x, %player, "click outside a playable column"),
                },
                UiEvent::PointerPress { .. } | UiEvent::KeyPress(_) => {}
            }
        }

        Ok(chosen.map_or(MoveRequest::Pending, MoveRequest::Drop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::events::scripted::{click, ScriptedEvents};

    fn source(frames: Vec<Vec<UiEvent>>) -> PointerMoves<ScriptedEvents> {
        PointerMoves::new(ScriptedEvents::new(frames))
    }

    #[test]
    fn test_empty_frame_is_pending() {
        let mut moves = source(vec![vec![]]);
        assert_eq!(
            moves.next_move(&Board::new(), Player::X).unwrap(),
            MoveRequest::Pending
        );
    }

    #[test]
    fn test_click_maps_to_column() {
        let mut moves = source(vec![vec![click(4)]]);
        assert_eq!(
            moves.next_move(&Board::new(), Player::X).unwrap(),
            MoveRequest::Drop(4)
        );
    }

    #[test]
    fn test_only_first_valid_click_per_frame() {
        let mut moves = source(vec![vec![click(1), click(2), click(3)], vec![]]);
        let board = Board::new();
        assert_eq!(moves.next_move(&board, Player::X).unwrap(), MoveRequest::Drop(1));
        assert_eq!(moves.next_move(&board, Player::O).unwrap(), MoveRequest::Pending);
    }

    #[test]
    fn test_full_column_click_skipped() {
        let mut board = Board::new();
        for _ in 0..6 {
            board.drop_piece(3, Player::X).unwrap();
        }
        let mut moves = source(vec![vec![click(3)], vec![click(3), click(5)]]);
        assert_eq!(moves.next_move(&board, Player::X).unwrap(), MoveRequest::Pending);
        assert_eq!(moves.next_move(&board, Player::X).unwrap(), MoveRequest::Drop(5));
    }

    #[test]
    fn test_secondary_button_and_keys_ignored() {
        let (x, y) = layout::cell_center(0, 2);
        let mut moves = source(vec![vec![
            UiEvent::PointerPress {
                button: PointerButton::Secondary,
                x,
                y,
            },
            UiEvent::KeyPress('2'),
            UiEvent::PointerPress {
                button: PointerButton::Primary,
                x: 20.0,
                y,
            },
        ]]);
        assert_eq!(
            moves.next_move(&Board::new(), Player::X).unwrap(),
            MoveRequest::Pending
        );
    }

    #[test]
    fn test_quit_after_click_is_deferred() {
        let mut moves = source(vec![vec![click(0), UiEvent::Quit, click(1)]]);
        let board = Board::new();
        assert_eq!(moves.next_move(&board, Player::X).unwrap(), MoveRequest::Drop(0));
        assert_eq!(moves.next_move(&board, Player::O).unwrap(), MoveRequest::Quit);
    }

    #[test]
    fn test_quit_before_click_wins() {
        let mut moves = source(vec![vec![UiEvent::Quit, click(1)]]);
        assert_eq!(
            moves.next_move(&Board::new(), Player::X).unwrap(),
            MoveRequest::Quit
        );
    }
}
