use std::{fmt, time::Instant};

use crossterm::event::Event;
use ratatui::Frame;

use crate::{App, Runtime};

/// One screen of the application.
///
/// # Lifecycle
///
/// 1. **Created** - Screen is constructed
/// 2. **[`on_enter`]** - Screen becomes the current screen
/// 3. **Current** - Screen handles events, updates, and draws
/// 4. **[`on_leave`]** - Screen is replaced or the application exits
/// 5. **Dropped** - Screen is destroyed
///
/// # Runtime Configuration
///
/// Screens configure [`Runtime`] settings (tick interval, render mode) in
/// [`on_enter`], so each screen runs with its own pacing.
///
/// ```rust
/// use std::time::Instant;
///
/// use crossterm::event::Event;
/// use ratatui::Frame;
/// use ratatui_runtime::{RenderMode, Runtime, Screen, ScreenTransition};
///
/// #[derive(Debug)]
/// struct MyScreen {}
///
/// impl Screen for MyScreen {
///     fn on_enter(&mut self, runtime: &mut Runtime) {
///         runtime.set_tick_rate(Some(60.0));
///         runtime.set_render_mode(RenderMode::throttled_from_rate(60.0));
///     }
///
///     fn on_leave(&mut self, _runtime: &mut Runtime) {}
///
///     fn handle_event(&mut self, _runtime: &mut Runtime, _event: &Event) -> ScreenTransition {
///         ScreenTransition::Stay
///     }
///     fn update(&mut self, _runtime: &mut Runtime, _now: Instant) -> ScreenTransition {
///         ScreenTransition::Stay
///     }
///     fn draw(&self, _frame: &mut Frame) {}
/// }
/// ```
///
/// [`on_enter`]: Self::on_enter
/// [`on_leave`]: Self::on_leave
pub trait Screen: fmt::Debug {
    /// Called when this screen becomes current, including at startup.
    fn on_enter(&mut self, runtime: &mut Runtime);

    /// Called when this screen stops being current, before it is dropped.
    fn on_leave(&mut self, runtime: &mut Runtime);

    /// Handles a terminal event and returns the transition to apply.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> ScreenTransition;

    /// Advances time-driven state (called on each tick) and returns the transition to apply.
    fn update(&mut self, runtime: &mut Runtime, now: Instant) -> ScreenTransition;

    fn draw(&self, frame: &mut Frame);
}

/// Screen transition returned from event handling and updates.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,

    /// Replace the current screen.
    ///
    /// The current screen's `on_leave` is called, then the new screen's `on_enter`.
    Replace(Box<dyn Screen>),

    /// Exit the application after the current screen's `on_leave`.
    Exit,
}

/// [`App`] that delegates to a single current [`Screen`].
#[derive(Debug)]
pub struct ScreenHost {
    current: Option<Box<dyn Screen>>,
}

impl ScreenHost {
    #[must_use]
    pub fn new(initial: Box<dyn Screen>) -> Self {
        Self {
            current: Some(initial),
        }
    }

    fn apply_transition(&mut self, runtime: &mut Runtime, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::Replace(mut new_screen) => {
                if let Some(mut old_screen) = self.current.take() {
                    old_screen.on_leave(runtime);
                }
                new_screen.on_enter(runtime);
                self.current = Some(new_screen);
            }

            ScreenTransition::Exit => {
                if let Some(mut screen) = self.current.take() {
                    screen.on_leave(runtime);
                }
            }
        }
    }
}

impl App for ScreenHost {
    fn init(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = &mut self.current {
            screen.on_enter(runtime);
        }
    }

    fn should_exit(&self) -> bool {
        self.current.is_none()
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        if let Some(current) = &mut self.current {
            let transition = current.handle_event(runtime, &event);
            self.apply_transition(runtime, transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(current) = &self.current {
            current.draw(frame);
        }
    }

    fn update(&mut self, runtime: &mut Runtime, now: Instant) {
        if let Some(current) = &mut self.current {
            let transition = current.update(runtime, now);
            self.apply_transition(runtime, transition);
        }
    }
}
