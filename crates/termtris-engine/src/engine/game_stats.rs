/// Base score values for line clears.
///
/// Index corresponds to number of rows cleared simultaneously:
/// - 0 rows: 0 points
/// - 1 row: 100 points
/// - 2 rows: 300 points
/// - 3 rows: 500 points
/// - 4 rows: 800 points
const SCORE_TABLE: [u64; 5] = [0, 100, 300, 500, 800];

/// Number of cleared rows needed per level.
const LINES_PER_LEVEL: u64 = 10;

/// Points awarded for clearing `cleared_lines` rows at `level`.
///
/// `(base + (n - 1) * 100) * level`, so every extra row in one clear is worth
/// a flat 100-point bonus on top of the base table.
///
/// # Example
///
/// ```
/// use termtris_engine::line_clear_score;
///
/// assert_eq!(line_clear_score(1, 1), 100);
/// assert_eq!(line_clear_score(2, 3), 1200);
/// assert_eq!(line_clear_score(0, 5), 0);
/// ```
#[must_use]
pub fn line_clear_score(cleared_lines: usize, level: u64) -> u64 {
    let Some(&base) = SCORE_TABLE.get(cleared_lines).filter(|&&base| base > 0) else {
        return 0;
    };
    let bonus = (cleared_lines as u64 - 1) * 100;
    (base + bonus) * level
}

/// Score, level and line counters of one game.
///
/// - **Score**: points from line clears, scaled by the level at the time of the clear
/// - **Level**: starts at 1 and advances by exactly one per qualifying clear
/// - **Lines cleared**: total rows removed
/// - **Completed pieces**: total pieces locked
/// - **Line clear distribution**: count of single, double, triple and quadruple clears
///
/// # Example
///
/// ```
/// use termtris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(1);
///
/// assert_eq!(stats.score(), 100);
/// assert_eq!(stats.level(), 1);
/// assert_eq!(stats.lines_cleared(), 1);
/// assert_eq!(stats.line_cleared_counter()[1], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: u64,
    level: u64,
    lines_cleared: u64,
    completed_pieces: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines_cleared: 0,
            completed_pieces: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn level(&self) -> u64 {
        self.level
    }

    #[must_use]
    pub const fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    /// Returns the total number of pieces that have been locked into place.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    /// Returns a histogram of line clears by count.
    ///
    /// Index `n` is the number of locks that cleared exactly `n` rows.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Updates the counters after a piece locks and `cleared_lines` rows were removed.
    ///
    /// The score uses the level in effect before this clear. Afterwards the
    /// level advances once if the line total reached `level * 10`, even when
    /// the clear crossed more than one threshold.
    pub fn complete_piece_drop(&mut self, cleared_lines: usize) {
        self.completed_pieces += 1;
        if let Some(count) = self.line_cleared_counter.get_mut(cleared_lines) {
            *count += 1;
        }
        if cleared_lines == 0 {
            return;
        }

        self.score += line_clear_score(cleared_lines, self.level);
        self.lines_cleared += cleared_lines as u64;
        if self.lines_cleared >= self.level * LINES_PER_LEVEL {
            self.level += 1;
        }
    }
}
