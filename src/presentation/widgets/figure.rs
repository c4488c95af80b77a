use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::core::display::DigitPair;

pub const CELL_WIDTH: u16 = 5;
pub const CELL_HEIGHT: u16 = 3;
pub const FIGURE_WIDTH: u16 = CELL_WIDTH * 2 + 1;
pub const FIGURE_HEIGHT: u16 = CELL_HEIGHT + 1;

/// One time container: the unit's label slot above a tens cell and a units cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FigureWidget<'a> {
    label: Option<&'a str>,
    digits: DigitPair,
    label_style: Style,
    digit_style: Style,
    border_style: Style,
}

impl<'a> FigureWidget<'a> {
    pub fn new(digits: DigitPair) -> Self {
        Self {
            digits,
            ..Default::default()
        }
    }

    pub fn label(mut self, label: Option<&'a str>) -> Self {
        self.label = label;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn digit_style(mut self, style: Style) -> Self {
        self.digit_style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    fn cell(&self, digit: i64) -> Paragraph<'static> {
        Paragraph::new(digit.to_string())
            .style(self.digit_style)
            .centered()
            .block(Block::bordered().border_style(self.border_style))
    }
}

impl Widget for FigureWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [label_area, digits_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(CELL_HEIGHT)])
                .areas(area);

        if let Some(label) = self.label {
            Line::from(label)
                .style(self.label_style)
                .centered()
                .render(label_area, buf);
        }

        Clear.render(digits_area, buf);
        let [tens_area, units_area] = Layout::horizontal([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(CELL_WIDTH),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(digits_area);

        self.cell(self.digits.tens).render(tens_area, buf);
        self.cell(self.digits.units).render(units_area, buf);
    }
}
