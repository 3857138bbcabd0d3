use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use termtris_engine::GameStats;

use crate::view::widgets::style;

pub struct SessionStatsDisplay<'a> {
    stats: &'a GameStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SessionStatsDisplay<'a> {
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
        16 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap() + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    LabelValue(&'static str, &'static dyn Fn(&GameStats) -> String),
}

const ROWS: &[Row] = &[
    Row::LabelValue("Score:", &|stats| stats.score().to_string()),
    Row::LabelValue("Level:", &|stats| stats.level().to_string()),
    Row::LabelValue("Lines:", &|stats| stats.lines_cleared().to_string()),
    Row::Empty,
    Row::LabelValue("Pieces:", &|stats| stats.completed_pieces().to_string()),
    Row::LabelValue("Singles:", &|stats| {
        stats.line_cleared_counter()[1].to_string()
    }),
    Row::LabelValue("Doubles:", &|stats| {
        stats.line_cleared_counter()[2].to_string()
    }),
    Row::LabelValue("Triples:", &|stats| {
        stats.line_cleared_counter()[3].to_string()
    }),
    Row::LabelValue("Quads:", &|stats| {
        stats.line_cleared_counter()[4].to_string()
    }),
];

impl Widget for SessionStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.stats), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::widgets::test_util::buffer_lines;

    #[test]
    fn test_rows_show_stats() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop(0);
        stats.complete_piece_drop(2);

        let display = SessionStatsDisplay::new(&stats);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        let lines = buffer_lines(&buf);

        assert_eq!(lines[0], "Score:       400");
        assert_eq!(lines[1], "Level:         1");
        assert_eq!(lines[2], "Lines:         2");
        assert_eq!(lines[3].trim(), "");
        assert_eq!(lines[4], "Pieces:        2");
        assert_eq!(lines[6], "Doubles:       1");
    }
}
