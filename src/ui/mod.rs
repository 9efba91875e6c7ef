//! Terminal canvas front end: a fixed-rate loop that reacts to mouse clicks
//! and keeps drawing the board, with an outcome banner once decided.

mod app;
mod context;
pub mod events;
mod game_view;
pub mod layout;
mod pointer;

pub use app::App;
pub use context::{DisplayConfig, Palette, RenderContext};
pub use events::{CrosstermEvents, EventQueue, PointerButton, UiEvent};
pub use pointer::PointerMoves;
