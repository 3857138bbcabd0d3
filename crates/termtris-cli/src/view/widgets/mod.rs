use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    block_display::*, board_display::*, game_over_display::*, key_binding_display::*,
    piece_display::*, session_display::*, session_stats_display::*,
};

mod block_display;
mod board_display;
mod game_over_display;
mod key_binding_display;
mod piece_display;
mod session_display;
mod session_stats_display;

mod color {
    use ratatui::style::Color;

    pub const I: Color = Color::White;
    pub const J: Color = Color::Red;
    pub const L: Color = Color::Green;
    pub const O: Color = Color::Yellow;
    pub const S: Color = Color::Blue;
    pub const T: Color = Color::Magenta;
    pub const Z: Color = Color::Cyan;
    pub const INVERTED_L: Color = Color::Green;
    pub const GHOST: Color = Color::DarkGray;

    pub const WHITE: Color = Color::White;
    pub const BLACK: Color = Color::Black;
    pub const YELLOW: Color = Color::Yellow;
    pub const RED: Color = Color::Red;
    pub const GRAY: Color = Color::Gray;
}

pub mod style {
    use ratatui::style::{Color, Style};
    use termtris_engine::PieceKind;

    use crate::view::widgets::color;

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = Style::new();
    pub const EMPTY: Style = Style::new();
    pub const EMPTY_DOT: Style = Style::new().fg(color::GRAY);
    pub const MONOCHROME: Style = Style::new();
    pub const GHOST: Style = bg_only(color::GHOST);

    #[must_use]
    pub const fn piece(kind: PieceKind) -> Style {
        bg_only(match kind {
            PieceKind::I => color::I,
            PieceKind::J => color::J,
            PieceKind::L => color::L,
            PieceKind::O => color::O,
            PieceKind::S => color::S,
            PieceKind::T => color::T,
            PieceKind::Z => color::Z,
            PieceKind::InvertedL => color::INVERTED_L,
        })
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::buffer::Buffer;

    /// Returns the buffer's symbols, one string per row.
    pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }
}
