use super::piece::{Piece, PieceKind};

/// Number of columns on the board.
pub const BOARD_WIDTH: usize = 20;
/// Number of rows on the board.
pub const BOARD_HEIGHT: usize = 21;

/// Absolute board coordinate.
///
/// Coordinates are signed because rotation and kick candidates may fall
/// outside the board; only [`Board`] decides whether a point is usable.
///
/// - (0, 0) is the top-left cell
/// - X increases rightward (columns)
/// - Y increases downward (rows)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A single board cell.
///
/// Settled cells store only the identity of the piece that locked there.
/// How that identity is drawn (color, monochrome glyph) is decided at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Block {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a settled piece of the given kind.
    Piece(PieceKind),
}

impl Block {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }

    #[must_use]
    pub fn piece_kind(self) -> Option<PieceKind> {
        match self {
            Block::Empty => None,
            Block::Piece(kind) => Some(kind),
        }
    }
}

type BoardRow = [Block; BOARD_WIDTH];

const EMPTY_ROW: BoardRow = [Block::Empty; BOARD_WIDTH];

/// Fixed-size playfield of settled blocks.
///
/// The board never changes size. Every access goes through a bounds check,
/// so an out-of-range coordinate reads as "not empty" and is never written.
///
/// # Example
///
/// ```
/// use termtris_engine::{Board, PieceKind, Point};
///
/// let mut board = Board::EMPTY;
/// assert!(board.is_empty(0, 0));
/// assert!(!board.is_empty(-1, 0));
///
/// board.occupy(Point::new(0, 20), PieceKind::T);
/// assert!(!board.is_empty(0, 20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BoardRow; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [EMPTY_ROW; BOARD_HEIGHT],
    };

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < BOARD_WIDTH && y < BOARD_HEIGHT).then_some((x, y))
    }

    /// Returns the cell at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Block> {
        let (x, y) = Self::index(x, y)?;
        Some(self.rows[y][x])
    }

    /// Returns `true` iff `(x, y)` is inside the board and the cell is empty.
    #[must_use]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_some_and(Block::is_empty)
    }

    /// Writes a settled block for `kind` at `pos`.
    ///
    /// Positions outside the board are ignored; callers only pass cells that
    /// already passed the placement check.
    pub fn occupy(&mut self, pos: Point, kind: PieceKind) {
        if let Some((x, y)) = Self::index(pos.x, pos.y) {
            self.rows[y][x] = Block::Piece(kind);
        }
    }

    /// Returns `true` if every cell in the candidate set is inside the board and empty.
    #[must_use]
    pub fn can_place(&self, cells: &[Point]) -> bool {
        cells.iter().all(|p| self.is_empty(p.x, p.y))
    }

    #[must_use]
    pub fn is_colliding(&self, piece: &Piece) -> bool {
        !self.can_place(piece.cells())
    }

    /// Locks the piece's cells into the board with the piece's identity.
    pub fn fill_piece(&mut self, piece: &Piece) {
        for &pos in piece.cells() {
            self.occupy(pos, piece.kind());
        }
    }

    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|b| !b.is_empty()))
    }

    /// Removes row `y`, shifts every row above it down by one and empties the top row.
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT {
            return;
        }
        self.rows.copy_within(0..y, 1);
        self.rows[0] = EMPTY_ROW;
    }

    /// Clears every full row in a single top-to-bottom pass and returns how many were removed.
    ///
    /// Rows above a cleared row have already been checked when the shift moves
    /// them down, so the scan never needs to revisit an index.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut count = 0;
        for y in 0..BOARD_HEIGHT {
            if self.is_row_full(y) {
                self.clear_row(y);
                count += 1;
            }
        }
        count
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Block; BOARD_WIDTH]> {
        self.rows.iter()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|b| !b.is_empty()).count()
    }
}
