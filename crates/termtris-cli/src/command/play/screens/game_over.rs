use std::{cell::Cell, rc::Rc, time::Instant};

use crossterm::event::Event;
use ratatui::Frame;
use ratatui_runtime::{RenderMode, Runtime, Screen, ScreenTransition};
use termtris_engine::GameSession;

use super::is_interrupt;
use crate::{
    command::play::{GameSummary, PlayOutcome},
    view::widgets::SessionDisplay,
};

/// Final board with the game-over card, waiting for any key.
#[derive(Debug)]
pub struct GameOverScreen {
    session: GameSession,
    outcome: Rc<Cell<PlayOutcome>>,
}

impl GameOverScreen {
    pub fn new(session: GameSession, outcome: Rc<Cell<PlayOutcome>>) -> Self {
        Self { session, outcome }
    }
}

impl Screen for GameOverScreen {
    fn on_enter(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(None);
        runtime.set_render_mode(RenderMode::OnDirty);
    }

    fn on_leave(&mut self, _runtime: &mut Runtime) {}

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_press_event() else {
            return ScreenTransition::Stay;
        };
        if !is_interrupt(&key) {
            self.outcome
                .set(PlayOutcome::Finished(GameSummary::new(&self.session)));
        }
        ScreenTransition::Exit
    }

    fn update(&mut self, _runtime: &mut Runtime, _now: Instant) -> ScreenTransition {
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(SessionDisplay::new(&self.session), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use termtris_engine::{GameAction, PieceSeed};

    use super::*;

    fn screen() -> (GameOverScreen, Rc<Cell<PlayOutcome>>) {
        let mut session = GameSession::with_seed(PieceSeed::from_bytes([9; 16]));
        session.apply_action(GameAction::Quit);
        let outcome = Rc::new(Cell::new(PlayOutcome::default()));
        (GameOverScreen::new(session, Rc::clone(&outcome)), outcome)
    }

    #[test]
    fn test_any_key_finishes() {
        let (mut screen, outcome) = screen();
        let mut runtime = Runtime::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let transition = screen.handle_event(&mut runtime, &event);

        assert!(matches!(transition, ScreenTransition::Exit));
        assert_eq!(
            outcome.get(),
            PlayOutcome::Finished(GameSummary::new(&screen.session))
        );
    }

    #[test]
    fn test_ctrl_c_exits_without_summary() {
        let (mut screen, outcome) = screen();
        let mut runtime = Runtime::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        let transition = screen.handle_event(&mut runtime, &event);

        assert!(matches!(transition, ScreenTransition::Exit));
        assert_eq!(outcome.get(), PlayOutcome::Interrupted);
    }

    #[test]
    fn test_non_key_events_and_ticks_stay() {
        let (mut screen, outcome) = screen();
        let mut runtime = Runtime::new();

        assert!(matches!(
            screen.handle_event(&mut runtime, &Event::FocusGained),
            ScreenTransition::Stay
        ));
        assert!(matches!(
            screen.update(&mut runtime, Instant::now()),
            ScreenTransition::Stay
        ));
        assert_eq!(outcome.get(), PlayOutcome::Interrupted);
    }
}
