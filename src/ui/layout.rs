//! Fixed linear mapping between board positions and the logical drawing
//! surface (800 x 600, origin top-left, y growing downward).
//!
//! Rendering and click handling both go through this module so a press on a
//! drawn column always lands in that column.

use ratatui::layout::Rect;

use crate::game::COLS;

pub const SURFACE_WIDTH: f64 = 800.0;
pub const SURFACE_HEIGHT: f64 = 600.0;

pub const GRID_LEFT: f64 = 50.0;
pub const GRID_TOP: f64 = 40.0;
pub const BASELINE_Y: f64 = 550.0;
pub const COLUMN_WIDTH: f64 = 100.0;
pub const ROW_PITCH: f64 = 85.0;
const FIRST_ROW_Y: f64 = 80.0;

/// Where the next-piece glyph sits.
pub const INDICATOR: (f64, f64) = (25.0, 25.0);

/// Glyph sizes for a placed piece and for the next-piece indicator.
pub const RING_RADIUS: f64 = 30.0;
pub const CROSS_HALF: f64 = 20.0;
pub const SMALL_RING_RADIUS: f64 = 15.0;
pub const SMALL_CROSS_HALF: f64 = 15.0;

/// Center of the cell at `(row, col)` on the surface.
pub fn cell_center(row: usize, col: usize) -> (f64, f64) {
    (
        GRID_LEFT + COLUMN_WIDTH / 2.0 + COLUMN_WIDTH * col as f64,
        FIRST_ROW_Y + ROW_PITCH * row as f64,
    )
}

/// Column under surface x-coordinate `x`, or `None` left of the grid.
///
/// Values right of the grid map to `COLS` and beyond; the board rejects them.
pub fn column_at(x: f64) -> Option<usize> {
    let col = ((x - GRID_LEFT) / COLUMN_WIDTH).floor();
    if col < 0.0 || !col.is_finite() {
        None
    } else {
        Some(col as usize)
    }
}

/// Separator segments `((x1, y1), (x2, y2))`: one per column edge plus the baseline.
pub fn grid_segments() -> impl Iterator<Item = ((f64, f64), (f64, f64))> {
    let separators = (0..=COLS).map(|i| {
        let x = GRID_LEFT + COLUMN_WIDTH * i as f64;
        ((x, GRID_TOP), (x, BASELINE_Y))
    });
    let baseline = std::iter::once((
        (GRID_LEFT, BASELINE_Y),
        (GRID_LEFT + COLUMN_WIDTH * COLS as f64, BASELINE_Y),
    ));
    separators.chain(baseline)
}

/// Surface point under terminal cell `(column, row)` when the surface is
/// stretched over `area`. `None` outside the area.
pub fn terminal_to_surface(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
        return None;
    }
    // Sample the middle of the terminal cell
    let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
    let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
    Some((fx * SURFACE_WIDTH, fy * SURFACE_HEIGHT))
}

/// Surface y to canvas y (the canvas grows upward).
pub fn flip_y(y: f64) -> f64 {
    SURFACE_HEIGHT - y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ROWS;

    #[test]
    fn test_cell_centers() {
        assert_eq!(cell_center(0, 0), (100.0, 80.0));
        assert_eq!(cell_center(5, 6), (700.0, 505.0));
        // Bottom-row rings clear the baseline
        assert!(cell_center(ROWS - 1, 0).1 + RING_RADIUS < BASELINE_Y);
    }

    #[test]
    fn test_column_at_inverts_cell_center() {
        for col in 0..COLS {
            for row in 0..ROWS {
                let (x, _) = cell_center(row, col);
                assert_eq!(column_at(x), Some(col));
                assert_eq!(column_at(x - 49.0), Some(col));
                assert_eq!(column_at(x + 49.0), Some(col));
            }
        }
    }

    #[test]
    fn test_column_at_outside_grid() {
        assert_eq!(column_at(10.0), None);
        assert_eq!(column_at(49.9), None);
        assert_eq!(column_at(50.0), Some(0));
        assert_eq!(column_at(760.0), Some(7));
        assert_eq!(column_at(f64::NAN), None);
    }

    #[test]
    fn test_grid_segments() {
        let segments: Vec<_> = grid_segments().collect();
        assert_eq!(segments.len(), COLS + 2);
        assert_eq!(segments[0], ((50.0, 40.0), (50.0, 550.0)));
        assert_eq!(segments[COLS], ((750.0, 40.0), (750.0, 550.0)));
        assert_eq!(segments[COLS + 1], ((50.0, 550.0), (750.0, 550.0)));
    }

    #[test]
    fn test_terminal_to_surface() {
        let area = Rect::new(2, 1, 80, 30);
        assert_eq!(terminal_to_surface(area, 0, 5), None);
        assert_eq!(terminal_to_surface(area, 82, 5), None);
        assert_eq!(terminal_to_surface(area, 10, 31), None);

        let (x, y) = terminal_to_surface(area, 2, 1).unwrap();
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);

        // Terminal column 42 is the middle of the surface
        let (x, _) = terminal_to_surface(area, 42, 1).unwrap();
        assert_eq!(column_at(x), Some(3));
    }
}
