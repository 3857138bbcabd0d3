use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::board::{BOARD_WIDTH, Board, Point};

/// Occupancy of a piece within its 4×4 bounding box, indexed `[y][x]`.
pub type Layout = [[bool; 4]; 4];

/// Horizontal offsets tried, in order, after rotating about the pivot.
pub const KICK_OFFSETS: [i32; 5] = [0, 1, -1, 2, -2];

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const SPAWN_OFFSET_X: i32 = (BOARD_WIDTH / 2 - 2) as i32;

/// Identity of a piece.
///
/// Seven standard identities plus [`PieceKind::InvertedL`]. The identity selects
/// the layouts from the shape catalog, the rotation pivot and the render color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// J-piece.
    J = 1,
    /// L-piece.
    L = 2,
    /// O-piece (square). Never rotates.
    O = 3,
    /// S-piece.
    S = 4,
    /// T-piece.
    T = 5,
    /// Z-piece.
    Z = 6,
    /// Non-standard inverted-L variant.
    #[display("InvL")]
    InvertedL = 7,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece identities (8).
    pub const LEN: usize = 8;

    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::InvertedL,
    ];

    /// Returns every rotation-state layout of this identity, in catalog order.
    #[must_use]
    pub const fn layouts(self) -> &'static [Layout] {
        match self {
            PieceKind::I => &I_LAYOUTS,
            PieceKind::J => &J_LAYOUTS,
            PieceKind::L => &L_LAYOUTS,
            PieceKind::O => &O_LAYOUTS,
            PieceKind::S => &S_LAYOUTS,
            PieceKind::T => &T_LAYOUTS,
            PieceKind::Z => &Z_LAYOUTS,
            PieceKind::InvertedL => &INVERTED_L_LAYOUTS,
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn layout_count(self) -> u8 {
        self.layouts().len() as u8
    }

    /// Returns the 4×4 layout for the given rotation state.
    ///
    /// The rotation index is wrapped by this identity's layout count, so a
    /// rotation taken from another identity can never index out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_engine::{PieceKind, PieceRotation};
    ///
    /// let layout = PieceKind::I.layout(PieceRotation::default());
    /// assert_eq!(layout[1], [true, true, true, true]);
    /// ```
    #[must_use]
    pub fn layout(self, rotation: PieceRotation) -> &'static Layout {
        let layouts = self.layouts();
        &layouts[rotation.index() % layouts.len()]
    }

    /// Index (in layout order) of the cell the piece rotates about.
    ///
    /// `None` for the square piece, which does not rotate.
    #[must_use]
    pub const fn pivot_index(self) -> Option<usize> {
        match self {
            PieceKind::I | PieceKind::J | PieceKind::L | PieceKind::T => Some(1),
            PieceKind::S | PieceKind::Z => Some(0),
            PieceKind::InvertedL => Some(2),
            PieceKind::O => None,
        }
    }

    /// Returns the occupied cells of a layout as `(x, y)` offsets in row-major order.
    pub fn layout_cells(self, rotation: PieceRotation) -> impl Iterator<Item = Point> {
        (0_i32..)
            .zip(self.layout(rotation))
            .flat_map(|(y, row)| {
                (0_i32..)
                    .zip(row)
                    .filter(|(_, occupied)| **occupied)
                    .map(move |(x, _)| Point::new(x, y))
            })
    }
}

/// Rotation state of a piece, an index into its identity's layouts.
///
/// Only [`PieceRotation::next`] advances it, always modulo the identity's
/// layout count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRotation(u8);

impl PieceRotation {
    #[must_use]
    pub fn next(self, kind: PieceKind) -> Self {
        PieceRotation((self.0 + 1) % kind.layout_count())
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The active (falling) piece.
///
/// The four absolute cells are the only record of where the piece is; the
/// catalog layout is consulted at spawn time only. Pieces are immutable:
/// movement and rotation return new `Piece` values.
///
/// # Example
///
/// ```
/// use termtris_engine::{Board, Piece, PieceKind};
///
/// let board = Board::EMPTY;
/// let piece = Piece::spawn(PieceKind::T);
/// let moved = piece.moved(&board, 1, 0).unwrap();
/// let rotated = moved.rotated(&board).unwrap();
/// assert_eq!(rotated.kind(), PieceKind::T);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotation: PieceRotation,
    cells: [Point; 4],
}

impl Piece {
    /// Places rotation state 0 of `kind` horizontally centered at the top of the board.
    ///
    /// Legality is not checked here.
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        let rotation = PieceRotation::default();
        let mut cells = [Point::default(); 4];
        for (cell, offset) in cells.iter_mut().zip(kind.layout_cells(rotation)) {
            *cell = offset.offset(SPAWN_OFFSET_X, 0);
        }
        Self {
            kind,
            rotation,
            cells,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub fn cells(&self) -> &[Point; 4] {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&Point::new(x, y))
    }

    /// Returns the piece translated by `(dx, dy)` without any legality check.
    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            cells: self.cells.map(|p| p.offset(dx, dy)),
            ..*self
        }
    }

    /// Returns the piece translated by `(dx, dy)` if every resulting cell is in bounds and empty.
    #[must_use]
    pub fn moved(&self, board: &Board, dx: i32, dy: i32) -> Option<Self> {
        Some(self.shifted(dx, dy)).filter(|piece| !board.is_colliding(piece))
    }

    /// Rotates every non-pivot cell 90° clockwise about the pivot cell.
    ///
    /// The rotation index advances to the next catalog layout. Returns `None`
    /// for the square piece. The result is not checked against the board.
    #[must_use]
    pub fn rotated_about_pivot(&self) -> Option<Self> {
        let pivot = self.cells[self.kind.pivot_index()?];
        let cells = self.cells.map(|p| {
            let (x, y) = (p.x - pivot.x, p.y - pivot.y);
            Point::new(pivot.x - y, pivot.y + x)
        });
        Some(Self {
            kind: self.kind,
            rotation: self.rotation.next(self.kind),
            cells,
        })
    }

    /// Returns the rotated piece shifted by each of [`KICK_OFFSETS`], in search order.
    ///
    /// Empty for the square piece.
    #[must_use]
    pub fn kick_candidates(&self) -> ArrayVec<Self, 5> {
        let Some(rotated) = self.rotated_about_pivot() else {
            return ArrayVec::new();
        };
        KICK_OFFSETS
            .iter()
            .map(|&dx| rotated.shifted(dx, 0))
            .collect()
    }

    /// Rotates the piece, resolving collisions with the first legal kick offset.
    ///
    /// The square piece is returned unchanged. `None` means every kick offset
    /// collided and the rotation is abandoned.
    #[must_use]
    pub fn rotated(&self, board: &Board) -> Option<Self> {
        if self.kind.pivot_index().is_none() {
            return Some(*self);
        }
        self.kick_candidates()
            .into_iter()
            .find(|piece| !board.is_colliding(piece))
    }

    /// Drops the piece straight down until the next row would collide.
    ///
    /// Used for hard drop and for the ghost preview.
    #[must_use]
    pub fn simulate_drop_position(&self, board: &Board) -> Self {
        let mut dropped = *self;
        while let Some(piece) = dropped.moved(board, 0, 1) {
            dropped = piece;
        }
        dropped
    }
}

const fn layout(rows: [&[u8; 4]; 4]) -> Layout {
    let mut grid = [[false; 4]; 4];
    let mut y = 0;
    while y < 4 {
        let mut x = 0;
        while x < 4 {
            grid[y][x] = rows[y][x] == b'#';
            x += 1;
        }
        y += 1;
    }
    grid
}

const I_LAYOUTS: [Layout; 2] = [
    layout([b"....", b"####", b"....", b"...."]),
    layout([b"..#.", b"..#.", b"..#.", b"..#."]),
];

const J_LAYOUTS: [Layout; 4] = [
    layout([b"....", b".###", b"..#.", b"...."]),
    layout([b"..#.", b".##.", b"..#.", b"...."]),
    layout([b"....", b".#..", b"###.", b"...."]),
    layout([b".#..", b"##..", b".#..", b"...."]),
];

const L_LAYOUTS: [Layout; 4] = [
    layout([b"....", b"###.", b"#...", b"...."]),
    layout([b"#...", b"#...", b"##..", b"...."]),
    layout([b"#...", b"###.", b"....", b"...."]),
    layout([b".##.", b"..#.", b"..#.", b"...."]),
];

const O_LAYOUTS: [Layout; 1] = [layout([b"....", b"##..", b"##..", b"...."])];

const S_LAYOUTS: [Layout; 2] = [
    layout([b"....", b".##.", b"##..", b"...."]),
    layout([b"....", b".#..", b".##.", b"..#."]),
];

const T_LAYOUTS: [Layout; 2] = [
    layout([b"....", b"##..", b".##.", b"...."]),
    layout([b"....", b"..#.", b".##.", b".#.."]),
];

const Z_LAYOUTS: [Layout; 4] = [
    layout([b"....", b"###.", b"#...", b"...."]),
    layout([b"#...", b"##..", b"#...", b"...."]),
    layout([b"....", b"#...", b"###.", b"...."]),
    layout([b".#..", b".##.", b".#..", b"...."]),
];

const INVERTED_L_LAYOUTS: [Layout; 4] = [
    layout([b"....", b"....", b"###.", b"..#."]),
    layout([b"....", b"..#.", b".##.", b"..#."]),
    layout([b"....", b"....", b".#..", b"###."]),
    layout([b"....", b".#..", b"##..", b".#.."]),
];
