use std::{cell::Cell, rc::Rc, time::Instant};

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::Frame;
use ratatui_runtime::{RenderMode, Runtime, Screen, ScreenTransition};
use termtris_engine::{GameAction, GameSession};

use super::{GameOverScreen, is_interrupt};
use crate::{command::play::PlayOutcome, view::widgets::SessionDisplay};

/// Screen for a game in progress, including the paused state.
#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    fps: f64,
    outcome: Rc<Cell<PlayOutcome>>,
}

impl PlayScreen {
    pub fn new(session: GameSession, fps: f64, outcome: Rc<Cell<PlayOutcome>>) -> Self {
        Self {
            session,
            fps,
            outcome,
        }
    }

    fn next_transition(&self) -> ScreenTransition {
        if self.session.session_state().is_game_over() {
            let screen = GameOverScreen::new(self.session.clone(), Rc::clone(&self.outcome));
            ScreenTransition::Replace(Box::new(screen))
        } else {
            ScreenTransition::Stay
        }
    }
}

impl Screen for PlayScreen {
    fn on_enter(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(self.fps));
        runtime.set_render_mode(RenderMode::throttled_from_rate(self.fps));
    }

    fn on_leave(&mut self, _runtime: &mut Runtime) {}

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_press_event() else {
            return ScreenTransition::Stay;
        };
        if is_interrupt(&key) {
            return ScreenTransition::Exit;
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return ScreenTransition::Stay;
        }
        if let KeyCode::Char(c) = key.code
            && let Some(action) = GameAction::from_char(c)
        {
            self.session.apply_action(action);
        }
        self.next_transition()
    }

    fn update(&mut self, _runtime: &mut Runtime, now: Instant) -> ScreenTransition {
        self.session.update(now);
        self.next_transition()
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(SessionDisplay::new(&self.session), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyEvent;
    use termtris_engine::{PieceSeed, SessionState};

    use super::*;

    fn screen() -> (PlayScreen, Rc<Cell<PlayOutcome>>) {
        let outcome = Rc::new(Cell::new(PlayOutcome::default()));
        let session = GameSession::with_seed(PieceSeed::from_bytes([5; 16]));
        (PlayScreen::new(session, 60.0, Rc::clone(&outcome)), outcome)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn char_key(c: char) -> Event {
        key(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_keys_drive_the_session() {
        let (mut screen, _) = screen();
        let mut runtime = Runtime::new();
        let start = *screen.session.falling_piece().unwrap();

        let transition = screen.handle_event(&mut runtime, &char_key('a'));
        assert!(matches!(transition, ScreenTransition::Stay));
        assert_eq!(*screen.session.falling_piece().unwrap(), start.shifted(-1, 0));

        screen.handle_event(&mut runtime, &char_key('p'));
        assert_eq!(screen.session.session_state(), SessionState::Paused);
        screen.handle_event(&mut runtime, &char_key('p'));
        assert_eq!(screen.session.session_state(), SessionState::Running);
    }

    #[test]
    fn test_unmapped_and_modified_keys_are_ignored() {
        let (mut screen, _) = screen();
        let mut runtime = Runtime::new();
        let start = *screen.session.falling_piece().unwrap();

        screen.handle_event(&mut runtime, &char_key('x'));
        screen.handle_event(&mut runtime, &char_key('A'));
        screen.handle_event(&mut runtime, &key(KeyCode::Char('a'), KeyModifiers::ALT));
        screen.handle_event(&mut runtime, &key(KeyCode::Left, KeyModifiers::NONE));

        assert_eq!(*screen.session.falling_piece().unwrap(), start);
    }

    #[test]
    fn test_ctrl_c_exits_without_outcome() {
        let (mut screen, outcome) = screen();
        let mut runtime = Runtime::new();

        let transition =
            screen.handle_event(&mut runtime, &key(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(matches!(transition, ScreenTransition::Exit));
        assert_eq!(outcome.get(), PlayOutcome::Interrupted);
    }

    #[test]
    fn test_quit_switches_to_game_over_screen() {
        let (mut screen, _) = screen();
        let mut runtime = Runtime::new();

        let transition = screen.handle_event(&mut runtime, &char_key('q'));

        assert!(matches!(transition, ScreenTransition::Replace(_)));
    }

    #[test]
    fn test_tick_top_out_switches_to_game_over_screen() {
        let (mut screen, _) = screen();
        let mut runtime = Runtime::new();
        let mut now = Instant::now();

        // Pieces only ever land in the middle columns, so no row clears and the stack tops out.
        let mut replaced = false;
        for _ in 0..2000 {
            now += Duration::from_secs(1);
            match screen.update(&mut runtime, now) {
                ScreenTransition::Stay => {}
                ScreenTransition::Replace(_) => {
                    replaced = true;
                    break;
                }
                ScreenTransition::Exit => panic!("unexpected exit"),
            }
        }

        assert!(replaced);
        assert!(screen.session.session_state().is_game_over());
        assert_eq!(screen.session.falling_piece(), None);
    }

    #[test]
    fn test_hard_drop_top_out_switches_to_game_over_screen() {
        let (mut screen, _) = screen();
        let mut runtime = Runtime::new();

        let mut replaced = false;
        for _ in 0..100 {
            let transition = screen.handle_event(&mut runtime, &char_key(' '));
            if matches!(transition, ScreenTransition::Replace(_)) {
                replaced = true;
                break;
            }
        }

        assert!(replaced);
        assert!(screen.session.session_state().is_game_over());
        assert_eq!(screen.session.falling_piece(), None);
    }

    #[test]
    fn test_update_advances_the_fall() {
        let (mut screen, _) = screen();
        let mut runtime = Runtime::new();
        let start = *screen.session.falling_piece().unwrap();

        let transition = screen.update(&mut runtime, Instant::now());

        assert!(matches!(transition, ScreenTransition::Stay));
        assert_eq!(*screen.session.falling_piece().unwrap(), start.shifted(0, 1));
    }
}
