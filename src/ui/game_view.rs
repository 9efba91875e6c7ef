use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as Segment},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::game::{Board, Cell, GameOutcome, GameState, Player, Window, COLS, ROWS};

use super::context::RenderContext;
use super::layout::{self, flip_y};

/// Draw one frame. Returns the terminal area the surface was stretched
/// over, which pointer mapping needs.
pub fn render(frame: &mut Frame, ctx: &RenderContext, game_state: &GameState) -> Rect {
    let [board_area, footer_area] =
        Layout::vertical([Constraint::Min(8), Constraint::Length(1)]).areas(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Connect Four ");
    let surface = block.inner(board_area);

    let winning = match game_state.outcome() {
        GameOutcome::Win(player) if ctx.highlight_winner => {
            game_state.board().winning_window(player)
        }
        _ => None,
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(ctx.marker)
        .x_bounds([0.0, layout::SURFACE_WIDTH])
        .y_bounds([0.0, layout::SURFACE_HEIGHT])
        .paint(|painter| {
            draw_grid(painter, ctx.palette.grid);
            draw_pieces(painter, ctx, game_state.board(), winning.as_ref());
            let next = game_state.current_player();
            draw_glyph(painter, next, layout::INDICATOR, true, ctx.palette.piece(next));
        });
    frame.render_widget(canvas, board_area);

    render_footer(frame, game_state, footer_area);

    if game_state.is_terminal() {
        render_banner(frame, game_state.outcome(), surface);
    }

    surface
}

fn draw_grid(painter: &mut Context, color: Color) {
    for ((x1, y1), (x2, y2)) in layout::grid_segments() {
        painter.draw(&Segment {
            x1,
            y1: flip_y(y1),
            x2,
            y2: flip_y(y2),
            color,
        });
    }
}

fn draw_pieces(painter: &mut Context, ctx: &RenderContext, board: &Board, winning: Option<&Window>) {
    for row in 0..ROWS {
        for col in 0..COLS {
            let player = match board.get(row, col) {
                Cell::Empty => continue,
                Cell::X => Player::X,
                Cell::O => Player::O,
            };
            let color = if winning.is_some_and(|w| w.contains(&(row, col))) {
                ctx.palette.highlight
            } else {
                ctx.palette.piece(player)
            };
            draw_glyph(painter, player, layout::cell_center(row, col), false, color);
        }
    }
}

/// Ring for O, cross for X, centered on surface point `(x, y)`.
fn draw_glyph(painter: &mut Context, player: Player, (x, y): (f64, f64), small: bool, color: Color) {
    let y = flip_y(y);
    match player {
        Player::O => {
            let radius = if small {
                layout::SMALL_RING_RADIUS
            } else {
                layout::RING_RADIUS
            };
            painter.draw(&Circle {
                x,
                y,
                radius,
                color,
            });
        }
        Player::X => {
            let h = if small {
                layout::SMALL_CROSS_HALF
            } else {
                layout::CROSS_HALF
            };
            painter.draw(&Segment {
                x1: x - h,
                y1: y - h,
                x2: x + h,
                y2: y + h,
                color,
            });
            painter.draw(&Segment {
                x1: x - h,
                y1: y + h,
                x2: x + h,
                y2: y - h,
                color,
            });
        }
    }
}

fn render_footer(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let status = if game_state.is_terminal() {
        Span::styled("Game over", Style::default().add_modifier(Modifier::BOLD))
    } else {
        Span::styled(
            format!("Player {} to move", game_state.current_player()),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };
    let line = Line::from(vec![status, Span::raw("  |  Click a column  |  Q: Quit")]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn banner_text(outcome: GameOutcome) -> Option<String> {
    match outcome {
        GameOutcome::Win(player) => Some(format!("{player} won")),
        GameOutcome::Draw => Some("Draw".to_string()),
        GameOutcome::InProgress => None,
    }
}

fn render_banner(frame: &mut Frame, outcome: GameOutcome, surface: Rect) {
    let Some(text) = banner_text(outcome) else {
        return;
    };

    let width = text.len() as u16 + 8;
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(surface);
    let [area] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(column);

    let banner = Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(banner, area);
}
