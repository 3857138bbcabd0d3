use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use termtris_engine::GameStats;

/// Final score card: score, level and lines in fixed-width fields.
#[derive(Debug)]
pub struct GameOverDisplay<'a> {
    stats: &'a GameStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GameOverDisplay<'a> {
    pub fn new(stats: &'a GameStats) -> Self {
        Self { stats, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        21 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        7 + super::block_vertical_margin(self.block.as_ref())
    }

    fn lines(&self) -> [Line<'static>; 7] {
        [
            Line::from("GAME OVER").centered(),
            Line::default(),
            Line::from(format!("Score: {:06}", self.stats.score())).centered(),
            Line::from(format!("Level: {:02}    ", self.stats.level())).centered(),
            Line::from(format!("Lines: {:02}    ", self.stats.lines_cleared())).centered(),
            Line::default(),
            Line::from("Press any key to exit").centered(),
        ]
    }
}

impl Widget for GameOverDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        Text::from_iter(self.lines()).render(area, buf);
    }
}
