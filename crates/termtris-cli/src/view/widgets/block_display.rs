use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};
use termtris_engine::{DisplayOptions, PieceKind};

use crate::view::widgets::style;

/// What a single board cell shows, after overlaying the active piece and its ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Piece(PieceKind),
    Ghost,
}

#[derive(Debug)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        1
    }

    pub fn height() -> u16 {
        1
    }

    /// Chooses glyph and style for a cell.
    ///
    /// In color mode pieces are solid color blocks; in monochrome mode pieces
    /// are `#` and the ghost is `*`. Empty cells are blank, or `.` with dots on.
    pub fn from_cell(cell: CellView, options: DisplayOptions) -> Self {
        match cell {
            CellView::Empty if options.show_dots => Self::new(style::EMPTY_DOT, "."),
            CellView::Empty => Self::new(style::EMPTY, " "),
            CellView::Piece(kind) if options.use_color => Self::new(style::piece(kind), " "),
            CellView::Piece(_) => Self::new(style::MONOCHROME, "#"),
            CellView::Ghost if options.use_color => Self::new(style::GHOST, " "),
            CellView::Ghost => Self::new(style::MONOCHROME, "*"),
        }
    }
}

impl Widget for BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR: DisplayOptions = DisplayOptions {
        show_ghost: true,
        use_color: true,
        show_dots: false,
    };
    const MONO_DOTS: DisplayOptions = DisplayOptions {
        show_ghost: true,
        use_color: false,
        show_dots: true,
    };

    #[test]
    fn test_color_mode() {
        let piece = BlockDisplay::from_cell(CellView::Piece(PieceKind::S), COLOR);
        assert_eq!(piece.symbol, " ");
        assert_eq!(piece.style, style::piece(PieceKind::S));

        let ghost = BlockDisplay::from_cell(CellView::Ghost, COLOR);
        assert_eq!(ghost.style, style::GHOST);

        assert_eq!(BlockDisplay::from_cell(CellView::Empty, COLOR).symbol, " ");
    }

    #[test]
    fn test_monochrome_mode_with_dots() {
        for kind in PieceKind::ALL {
            let piece = BlockDisplay::from_cell(CellView::Piece(kind), MONO_DOTS);
            assert_eq!(piece.symbol, "#");
        }
        assert_eq!(BlockDisplay::from_cell(CellView::Ghost, MONO_DOTS).symbol, "*");
        assert_eq!(BlockDisplay::from_cell(CellView::Empty, MONO_DOTS).symbol, ".");
    }

    #[test]
    fn test_render_fills_area() {
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        BlockDisplay::from_cell(CellView::Piece(PieceKind::T), MONO_DOTS).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "#");
    }
}
