use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) use self::{game_over::GameOverScreen, play::PlayScreen};

mod game_over;
mod play;

/// Ctrl-C ends the program immediately, on every screen.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
