use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::event::TuiEvent;

/// When the event loop asks the application to redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Render after every state change (tick or terminal event).
    #[default]
    OnDirty,
    /// Render after state changes, at most once per interval.
    ///
    /// Changes arriving faster than the interval are batched into one render.
    Throttled(Duration),
}

impl RenderMode {
    /// Creates `Throttled` mode from a frame rate (FPS).
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Schedules ticks and renders between terminal events.
///
/// Without a tick interval no ticks are generated, and the loop only wakes up
/// for terminal events and pending renders.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl EventLoop {
    /// Creates an event loop whose first tick and render are due immediately.
    pub(super) fn new(now: Instant) -> Self {
        let past_time = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            tick_interval: None,
            render_mode: RenderMode::default(),
            last_tick: past_time,
            last_render: past_time,
            dirty: true,
        }
    }

    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Blocks until a tick or render is due or a terminal event arrives.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(event) = self.scheduled_event(now) {
                return Ok(event);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    /// Returns the tick or render due at `now`, if any, and records it.
    ///
    /// Ticks take priority over renders.
    fn scheduled_event(&mut self, now: Instant) -> Option<TuiEvent> {
        if let Some(tick_interval) = self.tick_interval
            && now.saturating_duration_since(self.last_tick) >= tick_interval
        {
            self.last_tick = now;
            self.dirty = true;
            return Some(TuiEvent::Tick(now));
        }

        let do_render = match self.render_mode {
            RenderMode::OnDirty => self.dirty,
            RenderMode::Throttled(interval) => {
                self.dirty && now.saturating_duration_since(self.last_render) >= interval
            }
        };
        if do_render {
            self.last_render = now;
            self.dirty = false;
            return Some(TuiEvent::Render);
        }
        None
    }

    /// How long to wait for terminal input before the next scheduled event.
    ///
    /// `None` means nothing is scheduled and the loop may block indefinitely.
    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = match self.render_mode {
            RenderMode::OnDirty => self.dirty.then_some(now),
            RenderMode::Throttled(interval) => self.dirty.then(|| self.last_render + interval),
        };
        let next_timeout_at = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_timeout_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_initial_render_without_ticks() {
        let start = Instant::now();
        let mut events = EventLoop::new(start);

        assert!(matches!(events.scheduled_event(start), Some(TuiEvent::Render)));
        assert!(events.scheduled_event(start).is_none());
        assert_eq!(events.compute_timeout(start), None);
    }

    #[test]
    fn test_tick_carries_its_timestamp() {
        let start = Instant::now();
        let mut events = EventLoop::new(start);
        events.set_tick_interval(Some(16 * MS));

        let Some(TuiEvent::Tick(at)) = events.scheduled_event(start) else {
            panic!("expected a tick");
        };
        assert_eq!(at, start);

        // The tick marks the state dirty, so a render follows.
        assert!(matches!(events.scheduled_event(start), Some(TuiEvent::Render)));
        assert!(events.scheduled_event(start + 15 * MS).is_none());
        assert!(events.scheduled_event(start + 16 * MS).is_some_and(|e| e.is_tick()));
    }

    #[test]
    fn test_timeout_waits_for_next_tick() {
        let start = Instant::now();
        let mut events = EventLoop::new(start);
        events.set_tick_interval(Some(20 * MS));

        assert!(events.scheduled_event(start).is_some_and(|e| e.is_tick()));
        assert!(events.scheduled_event(start).is_some_and(|e| e.is_render()));
        assert_eq!(events.compute_timeout(start + 5 * MS), Some(15 * MS));
    }

    #[test]
    fn test_throttled_render_batches_changes() {
        let start = Instant::now();
        let mut events = EventLoop::new(start);
        events.set_render_mode(RenderMode::Throttled(10 * MS));

        assert!(events.scheduled_event(start).is_some_and(|e| e.is_render()));

        events.dirty = true;
        assert!(events.scheduled_event(start + 4 * MS).is_none());
        assert_eq!(events.compute_timeout(start + 4 * MS), Some(6 * MS));
        assert!(events.scheduled_event(start + 10 * MS).is_some_and(|e| e.is_render()));
    }

    #[test]
    fn test_throttled_from_rate() {
        assert_eq!(
            RenderMode::throttled_from_rate(4.0),
            RenderMode::Throttled(250 * MS)
        );
    }
}
