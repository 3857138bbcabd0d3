use std::{mem, time::Instant};

use crate::{
    PieceCollisionError,
    core::{
        board::Board,
        piece::{Piece, PieceKind},
    },
};

use super::{FallClock, GameStats, PieceGenerator, PieceSeed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Running,
    Paused,
    GameOver,
}

/// Cosmetic toggles.
///
/// These only change how the session is drawn; they never reach the board
/// or influence any game rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Draw the landing projection of the active piece.
    pub show_ghost: bool,
    /// Draw pieces in per-identity colors instead of monochrome glyphs.
    pub use_color: bool,
    /// Draw empty cells as dots.
    pub show_dots: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_ghost: true,
            use_color: true,
            show_dots: false,
        }
    }
}

/// A single player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Quit,
    TogglePause,
    ToggleGhost,
    ToggleColor,
    ToggleDots,
}

impl GameAction {
    /// Maps an input character to an action.
    ///
    /// Keys are lowercase only; anything else is not an action.
    ///
    /// ```
    /// use termtris_engine::GameAction;
    ///
    /// assert_eq!(GameAction::from_char('a'), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_char(' '), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_char('A'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let action = match c {
            'a' => Self::MoveLeft,
            'd' => Self::MoveRight,
            's' => Self::SoftDrop,
            'w' => Self::Rotate,
            ' ' => Self::HardDrop,
            'q' => Self::Quit,
            'p' => Self::TogglePause,
            'g' => Self::ToggleGhost,
            'c' => Self::ToggleColor,
            't' => Self::ToggleDots,
            _ => return None,
        };
        Some(action)
    }
}

/// One game, from the first spawn to game over.
///
/// The session owns every piece of mutable game state. The front-end drives
/// it with [`GameSession::apply_action`] for input and
/// [`GameSession::update`] once per frame, and reads the rest back through
/// accessors.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    falling_piece: Option<Piece>,
    next_piece: PieceKind,
    generator: PieceGenerator,
    stats: GameStats,
    clock: FallClock,
    session_state: SessionState,
    display_options: DisplayOptions,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Starts a session with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::from_generator(PieceGenerator::new())
    }

    /// Starts a session whose piece sequence is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::from_generator(PieceGenerator::with_seed(seed))
    }

    fn from_generator(mut generator: PieceGenerator) -> Self {
        let next_piece = generator.draw();
        let mut this = Self {
            board: Board::EMPTY,
            falling_piece: None,
            next_piece,
            generator,
            stats: GameStats::new(),
            clock: FallClock::new(),
            session_state: SessionState::Running,
            display_options: DisplayOptions::default(),
        };
        this.spawn_next();
        this
    }

    #[must_use]
    pub fn with_display_options(mut self, display_options: DisplayOptions) -> Self {
        self.display_options = display_options;
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active piece, or `None` between a lock and the next spawn and after a top-out.
    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling_piece.as_ref()
    }

    #[must_use]
    pub fn next_piece(&self) -> PieceKind {
        self.next_piece
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        self.display_options
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.generator.seed()
    }

    /// Where the active piece would land if dropped straight down.
    #[must_use]
    pub fn simulate_drop_position(&self) -> Option<Piece> {
        self.falling_piece
            .map(|piece| piece.simulate_drop_position(&self.board))
    }

    /// Moves the active piece by `(dx, dy)` if the destination is legal.
    ///
    /// On failure the piece is left exactly where it was.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> Result<(), PieceCollisionError> {
        let piece = self
            .falling_piece
            .and_then(|piece| piece.moved(&self.board, dx, dy))
            .ok_or(PieceCollisionError)?;
        self.falling_piece = Some(piece);
        Ok(())
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        self.try_move(-1, 0)
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        self.try_move(1, 0)
    }

    pub fn try_soft_drop(&mut self) -> Result<(), PieceCollisionError> {
        self.try_move(0, 1)
    }

    /// Rotates the active piece clockwise, trying each kick offset in turn.
    ///
    /// The square piece always succeeds without changing.
    pub fn try_rotate(&mut self) -> Result<(), PieceCollisionError> {
        let piece = self
            .falling_piece
            .and_then(|piece| piece.rotated(&self.board))
            .ok_or(PieceCollisionError)?;
        self.falling_piece = Some(piece);
        Ok(())
    }

    /// Writes the active piece into the board and returns it.
    ///
    /// The session has no active piece afterwards until the next spawn.
    pub fn lock(&mut self) -> Option<Piece> {
        let piece = self.falling_piece.take()?;
        self.board.fill_piece(&piece);
        Some(piece)
    }

    /// Drops the active piece as far as it goes and completes the turn.
    pub fn hard_drop_and_complete(&mut self) {
        if !self.session_state.is_running() {
            return;
        }
        while self.try_soft_drop().is_ok() {}
        self.complete_piece_drop();
    }

    /// Advances the simulation to `now`.
    ///
    /// Only a running session advances. When a fall is due the piece moves
    /// down one row; if it cannot, the turn completes: lock, clear full rows,
    /// score, spawn the next piece, and check the spawn for game over.
    pub fn update(&mut self, now: Instant) {
        if !self.session_state.is_running() {
            return;
        }
        if !self.clock.poll(now, self.stats.level()) {
            return;
        }
        if self.try_soft_drop().is_err() {
            self.complete_piece_drop();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.session_state = match self.session_state {
            SessionState::Running => SessionState::Paused,
            SessionState::Paused => SessionState::Running,
            SessionState::GameOver => SessionState::GameOver,
        };
    }

    /// Ends the session. The active piece stays for the final render.
    pub fn quit(&mut self) {
        self.session_state = SessionState::GameOver;
    }

    pub fn toggle_ghost(&mut self) {
        self.display_options.show_ghost = !self.display_options.show_ghost;
    }

    pub fn toggle_color(&mut self) {
        self.display_options.use_color = !self.display_options.use_color;
    }

    pub fn toggle_dots(&mut self) {
        self.display_options.show_dots = !self.display_options.show_dots;
    }

    /// Applies one player input.
    ///
    /// While paused only [`GameAction::TogglePause`] has an effect; after game
    /// over nothing does. Illegal moves and rotations are silently ignored.
    pub fn apply_action(&mut self, action: GameAction) {
        match self.session_state {
            SessionState::Running => {}
            SessionState::Paused => {
                if action == GameAction::TogglePause {
                    self.toggle_pause();
                }
                return;
            }
            SessionState::GameOver => return,
        }

        match action {
            GameAction::MoveLeft => _ = self.try_move_left(),
            GameAction::MoveRight => _ = self.try_move_right(),
            GameAction::SoftDrop => _ = self.try_soft_drop(),
            GameAction::Rotate => _ = self.try_rotate(),
            GameAction::HardDrop => self.hard_drop_and_complete(),
            GameAction::Quit => self.quit(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::ToggleGhost => self.toggle_ghost(),
            GameAction::ToggleColor => self.toggle_color(),
            GameAction::ToggleDots => self.toggle_dots(),
        }
    }

    fn complete_piece_drop(&mut self) {
        if self.lock().is_some() {
            let cleared_lines = self.board.clear_full_rows();
            self.stats.complete_piece_drop(cleared_lines);
        }
        self.spawn_next();
    }

    /// Promotes the next identity to the active piece and draws a fresh next identity.
    ///
    /// A spawn that collides ends the session and is never kept as the active piece.
    fn spawn_next(&mut self) {
        let kind = mem::replace(&mut self.next_piece, self.generator.draw());
        let piece = Piece::spawn(kind);
        if self.board.is_colliding(&piece) {
            self.falling_piece = None;
            self.session_state = SessionState::GameOver;
        } else {
            self.falling_piece = Some(piece);
        }
    }
}
