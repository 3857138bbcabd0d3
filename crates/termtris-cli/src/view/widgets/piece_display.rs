use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use termtris_engine::{DisplayOptions, PieceKind, PieceRotation};

use crate::view::widgets::{BlockDisplay, CellView};

/// Preview of a piece identity in its spawn orientation, drawn on its 4×4 layout grid.
#[derive(Debug)]
pub struct PieceDisplay<'a> {
    piece: Option<PieceKind>,
    options: DisplayOptions,
    block: Option<BlockWidget<'a>>,
}

const GRID_SIZE: u16 = 4;

impl<'a> PieceDisplay<'a> {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            piece: None,
            // Blank cells in the preview never show dots.
            options: DisplayOptions {
                show_dots: false,
                ..options
            },
            block: None,
        }
    }

    pub fn piece(self, piece: PieceKind) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        GRID_SIZE * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        GRID_SIZE * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..GRID_SIZE).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints = (0..GRID_SIZE).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = area
            .layout::<4>(&vertical)
            .into_iter()
            .map(|row| row.layout::<4>(&horizontal));

        let layout = self
            .piece
            .map(|piece| (piece, piece.layout(PieceRotation::default())));

        for (y, grid_row) in grid_rows.enumerate() {
            for (x, grid_cell) in grid_row.into_iter().enumerate() {
                let cell = match layout {
                    Some((piece, layout)) if layout[y][x] => CellView::Piece(piece),
                    _ => CellView::Empty,
                };
                BlockDisplay::from_cell(cell, self.options).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::widgets::test_util::buffer_lines;

    #[test]
    fn test_preview_uses_spawn_layout() {
        let options = DisplayOptions {
            show_ghost: true,
            use_color: false,
            show_dots: true,
        };
        let display = PieceDisplay::new(options).piece(PieceKind::InvertedL);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        assert_eq!(buffer_lines(&buf), ["    ", "    ", "### ", "  # "]);
    }

    #[test]
    fn test_empty_preview() {
        let display = PieceDisplay::new(DisplayOptions::default());
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        assert!(buffer_lines(&buf).iter().all(|line| line.trim().is_empty()));
    }
}
