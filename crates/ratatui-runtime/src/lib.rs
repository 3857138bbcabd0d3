//! Minimal event-loop runtime for ratatui applications.
//!
//! [`Runtime`] owns the terminal session and turns wall-clock time and terminal
//! input into three kinds of calls on an [`App`]: timestamped updates, draws
//! and event handling. [`ScreenHost`] is an [`App`] that delegates to one
//! [`Screen`] at a time and switches screens on [`ScreenTransition`]s.

pub use self::{
    app::App,
    event_loop::RenderMode,
    runtime::Runtime,
    screen::{Screen, ScreenHost, ScreenTransition},
};

mod app;
mod event;
mod event_loop;
mod runtime;
mod screen;
