use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, BorderType, Clear, Padding, Widget},
};
use termtris_engine::{GameSession, SessionState};

use crate::view::widgets::{
    BoardDisplay, GameOverDisplay, KeyBinding, KeyBindingDisplay, PieceDisplay,
    SessionStatsDisplay, color,
};

const TITLE: &str = "T E T R I S";

const CONTROLS: &[KeyBinding<'static>] = &[
    ("A", "Move left"),
    ("D", "Move right"),
    ("S", "Soft drop"),
    ("W", "Rotate"),
    ("Space", "Hard drop"),
    ("G", "Toggle ghost"),
    ("C", "Toggle color"),
    ("T", "Toggle dots"),
    ("P", "Pause"),
    ("Q", "Quit"),
];

/// Full game view: the board in the middle, next piece and statistics on the
/// left, the control legend on the right, plus the pause and game-over panels.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    horizontal_padding: u16,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            horizontal_padding: 1,
        }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let options = self.session.display_options();
        let state = self.session.session_state();
        let block_padding = Padding::horizontal(self.horizontal_padding);
        let border_style = match state {
            SessionState::Running => color::WHITE,
            SessionState::Paused => color::YELLOW,
            SessionState::GameOver => color::RED,
        };
        let panel = |title: &'static str| {
            Block::bordered()
                .title(Line::from(title).centered())
                .padding(block_padding)
                .border_style(border_style)
        };

        let game_board = {
            let mut widget = BoardDisplay::new(self.session.board(), options).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(Line::from(TITLE).centered())
                    .border_style(border_style),
            );
            if let Some(piece) = self.session.falling_piece() {
                widget = widget.falling_piece(*piece);
            }
            if options.show_ghost
                && let Some(ghost) = self.session.simulate_drop_position()
            {
                widget = widget.ghost(ghost);
            }
            widget
        };
        let next_panel = PieceDisplay::new(options)
            .piece(self.session.next_piece())
            .block(panel("NEXT"));
        let stats_panel = SessionStatsDisplay::new(self.session.stats()).block(panel("STATS"));
        let controls_panel = KeyBindingDisplay::new(CONTROLS).block(panel("CONTROLS"));

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(u16::max(next_panel.width(), stats_panel.width())),
            Constraint::Length(game_board.width()),
            Constraint::Length(controls_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [next_area, stats_area] = Layout::vertical([
            Constraint::Length(next_panel.height()),
            Constraint::Length(stats_panel.height()),
        ])
        .areas(left_column);
        let next_area = next_area.layout::<1>(
            &Layout::horizontal([Constraint::Length(next_panel.width())]).flex(Flex::End),
        )[0];

        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(center_column);
        let [controls_area] =
            Layout::vertical([Constraint::Length(controls_panel.height())]).areas(right_column);

        next_panel.render(next_area, buf);
        stats_panel.render(stats_area, buf);
        game_board.render(board_area, buf);
        controls_panel.render(controls_area, buf);

        match state {
            SessionState::Running => {}
            SessionState::Paused => {
                // The board stays hidden while paused.
                let style = Style::new().fg(color::BLACK).bg(color::YELLOW);
                let block = Block::bordered().style(style);
                let inner = block.inner(board_area);
                Clear.render(board_area, buf);
                block.render(board_area, buf);
                Text::from_iter([
                    Line::from("GAME PAUSED"),
                    Line::default(),
                    Line::from("Press 'p' to"),
                    Line::from("resume the game"),
                ])
                .style(style)
                .centered()
                .render(inner.centered_vertically(Constraint::Length(4)), buf);
            }
            SessionState::GameOver => {
                let style = Style::new().fg(color::WHITE).bg(color::RED);
                let popup = GameOverDisplay::new(self.session.stats())
                    .block(Block::bordered().style(style));
                // The card is wider than the board; center it on the board and let it overhang.
                let popup_area = Rect {
                    x: (board_area.x + board_area.width / 2).saturating_sub(popup.width() / 2),
                    width: popup.width(),
                    ..board_area.centered_vertically(Constraint::Length(popup.height()))
                }
                .intersection(area);
                Clear.render(popup_area, buf);
                popup.render(popup_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use termtris_engine::{GameAction, PieceSeed};

    use super::*;
    use crate::view::widgets::test_util::buffer_lines;

    fn render(session: &GameSession) -> String {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        SessionDisplay::new(session).render(area, &mut buf);
        buffer_lines(&buf).join("\n")
    }

    fn session() -> GameSession {
        GameSession::with_seed(PieceSeed::from_bytes([3; 16]))
    }

    #[test]
    fn test_running_layout() {
        let text = render(&session());
        for expected in [TITLE, "NEXT", "STATS", "CONTROLS", "Score:", "Space: Hard drop"] {
            assert!(text.contains(expected), "missing {expected:?}");
        }
        assert!(!text.contains("GAME PAUSED"));
    }

    #[test]
    fn test_paused_panel() {
        let mut session = session();
        session.apply_action(GameAction::TogglePause);
        let text = render(&session);
        assert!(text.contains("GAME PAUSED"));
        assert!(text.contains("resume the game"));
    }

    #[test]
    fn test_game_over_panel() {
        let mut session = session();
        session.apply_action(GameAction::Quit);
        let text = render(&session);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Score: 000000"));
        assert!(text.contains("Press any key to exit"));
    }
}
