use std::time::Instant;

use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for TUI applications driven by [`Runtime::run`].
pub trait App {
    /// Called once before the first event. Use this to set the tick interval and render mode.
    fn init(&mut self, runtime: &mut Runtime);

    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the current state.
    fn draw(&self, frame: &mut Frame);

    /// Advances time-driven state. `now` is when the tick fired.
    fn update(&mut self, runtime: &mut Runtime, now: Instant);
}
