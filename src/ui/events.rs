use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use super::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Discrete input the frame loop reacts to. Pointer positions are in
/// surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Quit,
    PointerPress {
        button: PointerButton,
        x: f64,
        y: f64,
    },
    KeyPress(char),
}

/// Non-blocking event source polled once per frame.
pub trait EventQueue {
    /// Everything queued since the last call, in arrival order.
    fn drain(&mut self) -> io::Result<Vec<UiEvent>>;

    /// Terminal area the surface was last drawn into.
    fn set_viewport(&mut self, _area: Rect) {}
}

/// Reads the crossterm event stream without waiting.
#[derive(Debug, Default)]
pub struct CrosstermEvents {
    viewport: Rect,
}

impl CrosstermEvents {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventQueue for CrosstermEvents {
    fn drain(&mut self) -> io::Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = translate(event::read()?, self.viewport) {
                events.push(ev);
            }
        }
        Ok(events)
    }

    fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }
}

/// Map a terminal event onto the game's event model. `q`, `Esc` and
/// `Ctrl-C` close the window.
pub fn translate(event: Event, viewport: Rect) -> Option<UiEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, viewport),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(UiEvent::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char(c) => Some(UiEvent::KeyPress(c)),
        _ => None,
    }
}

fn translate_mouse(mouse: MouseEvent, viewport: Rect) -> Option<UiEvent> {
    let MouseEventKind::Down(button) = mouse.kind else {
        return None;
    };
    let button = match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    };
    let (x, y) = layout::terminal_to_surface(viewport, mouse.column, mouse.row)?;
    Some(UiEvent::PointerPress { button, x, y })
}
