use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use termtris_engine::{Block, Board, DisplayOptions, Piece};

use crate::view::widgets::{BlockDisplay, CellView};

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    options: DisplayOptions,
    ghost: Option<Piece>,
    falling_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board, options: DisplayOptions) -> Self {
        Self {
            board,
            options,
            ghost: None,
            falling_piece: None,
            block: None,
        }
    }

    pub fn ghost(self, piece: Piece) -> Self {
        Self {
            ghost: Some(piece),
            ..self
        }
    }

    pub fn falling_piece(self, piece: Piece) -> Self {
        Self {
            falling_piece: Some(piece),
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
        u16::try_from(Board::WIDTH).unwrap() * BlockDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(Board::HEIGHT).unwrap() * BlockDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// The active piece wins over its ghost, and both over the settled board.
    fn cell_view(&self, x: i32, y: i32) -> CellView {
        if let Some(piece) = self.falling_piece
            && piece.contains(x, y)
        {
            return CellView::Piece(piece.kind());
        }
        if let Some(ghost) = self.ghost
            && ghost.contains(x, y)
        {
            return CellView::Ghost;
        }
        self.board
            .cell(x, y)
            .and_then(Block::piece_kind)
            .map_or(CellView::Empty, CellView::Piece)
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..Board::WIDTH).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints =
            (0..Board::HEIGHT).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<{ Board::HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Board::WIDTH }>(&horizontal));

        for (y, grid_row) in iter::zip(0_i32.., grid_cells) {
            for (x, grid_cell) in iter::zip(0_i32.., grid_row) {
                BlockDisplay::from_cell(self.cell_view(x, y), self.options).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use termtris_engine::{PieceKind, Point};

    use super::*;
    use crate::view::widgets::test_util::buffer_lines;

    const MONO: DisplayOptions = DisplayOptions {
        show_ghost: true,
        use_color: false,
        show_dots: true,
    };

    fn render(display: &BoardDisplay<'_>) -> Vec<String> {
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_size_includes_border() {
        let board = Board::EMPTY;
        let display = BoardDisplay::new(&board, MONO).block(BlockWidget::bordered());
        assert_eq!(display.width(), 22);
        assert_eq!(display.height(), 23);
    }

    #[test]
    fn test_empty_board_draws_dots() {
        let board = Board::EMPTY;
        let lines = render(&BoardDisplay::new(&board, MONO));
        assert_eq!(lines.len(), 21);
        assert!(lines.iter().all(|line| line == &".".repeat(20)));
    }

    #[test]
    fn test_piece_and_ghost_overlay() {
        let mut board = Board::EMPTY;
        board.occupy(Point::new(0, 20), PieceKind::Z);
        let piece = Piece::spawn(PieceKind::I);
        let ghost = piece.simulate_drop_position(&board);

        let display = BoardDisplay::new(&board, MONO)
            .falling_piece(piece)
            .ghost(ghost);
        let lines = render(&display);

        assert_eq!(&lines[1][8..12], "####");
        assert_eq!(&lines[20][8..12], "****");
        assert_eq!(&lines[20][0..1], "#");
        assert_eq!(&lines[0], &".".repeat(20));
    }
}
