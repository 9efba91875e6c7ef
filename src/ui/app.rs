use std::io;
use std::time::Instant;

use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use crate::game::{GameOutcome, GameState, TurnPhase};
use crate::session::{Session, Step};

use super::context::RenderContext;
use super::events::EventQueue;
use super::game_view;
use super::pointer::PointerMoves;

/// Frame-scheduled game: polls input, applies at most one move, redraws,
/// then sleeps out the rest of the frame. Keeps drawing after the game is
/// decided until the window is closed.
pub struct App<Q> {
    session: Session<PointerMoves<Q>>,
    frames: u64,
}

impl<Q: EventQueue> App<Q> {
    pub fn new(events: Q) -> Self {
        App {
            session: Session::new(PointerMoves::new(events)),
            frames: 0,
        }
    }

    pub fn game_state(&self) -> &GameState {
        self.session.state()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Main application loop. Returns the outcome when the window closes.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        ctx: &RenderContext,
    ) -> io::Result<GameOutcome> {
        info!(budget = ?ctx.frame_budget, "graphical session started");
        self.draw(terminal, ctx)?;

        loop {
            let started = Instant::now();

            match self.session.step()? {
                Step::Quit => break,
                Step::Applied { column, phase } => self.announce(column, phase),
                Step::Rejected(err) => debug!(error = %err, "click rejected"),
                Step::Ignored | Step::Pending => {}
            }

            self.draw(terminal, ctx)?;

            if let Some(rest) = ctx.frame_budget.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        let outcome = self.session.state().outcome();
        info!(?outcome, frames = self.frames, "graphical session finished");
        Ok(outcome)
    }

    fn announce(&self, column: usize, phase: TurnPhase) {
        match phase {
            TurnPhase::Won(player) => info!(%player, column, "game won"),
            TurnPhase::Drawn => info!(column, "game drawn"),
            TurnPhase::AwaitingMove(_) => {}
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>, ctx: &RenderContext) -> io::Result<()> {
        let state = *self.session.state();
        let mut surface = ratatui::layout::Rect::default();
        terminal
            .draw(|f| surface = game_view::render(f, ctx, &state))
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        self.session.source_mut().queue_mut().set_viewport(surface);
        self.frames += 1;
        Ok(())
    }
}
