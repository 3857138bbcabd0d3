use std::time::Instant;

use crossterm::event::Event as CrosstermEvent;

/// Events produced by the event loop.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// Simulation step, stamped with the time it was emitted.
    Tick(Instant),
    /// Time to redraw the terminal.
    Render,
    /// Key input, resize and other terminal events.
    Crossterm(CrosstermEvent),
}
