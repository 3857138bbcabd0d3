use std::iter;

use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

/// A key label and what it does.
pub type KeyBinding<'a> = (&'a str, &'a str);

/// Control legend, one binding per row.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
    block: Option<BlockWidget<'a>>,
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self {
            bindings,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let content = self
            .bindings
            .iter()
            .map(|(key, desc)| key.len() + KEY_SEPARATOR.len() + desc.len())
            .max()
            .unwrap_or(0);
        u16::try_from(content).unwrap_or(u16::MAX)
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.bindings.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

const KEY_SEPARATOR: &str = ": ";

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const KEY_SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let row_areas =
            Layout::vertical(self.bindings.iter().map(|_| Constraint::Length(1))).split(area);

        for ((key, desc), row_area) in iter::zip(self.bindings, row_areas.iter()) {
            Line::from(vec![
                Span::styled(*key, KEY_STYLE),
                Span::styled(KEY_SEPARATOR, KEY_SEPARATOR_STYLE),
                Span::styled(*desc, DESCRIPTION_STYLE),
            ])
            .render(*row_area, buf);
        }
    }
}
