use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::Widget;

use crate::core::{countdown::Countdown, display};
use crate::presentation::config::{SlideSlots, Styles};
use crate::presentation::widgets::figure::{FigureWidget, FIGURE_HEIGHT, FIGURE_WIDTH};

pub const COUNTDOWN_HEIGHT: u16 = FIGURE_HEIGHT;

const GAP: u16 = 3;

/// The three visible figures of a countdown, side by side.
pub struct CountdownWidget<'a> {
    countdown: &'a Countdown,
    slots: &'a SlideSlots,
    styles: &'a Styles,
}

impl<'a> CountdownWidget<'a> {
    pub fn new(countdown: &'a Countdown, slots: &'a SlideSlots, styles: &'a Styles) -> Self {
        Self {
            countdown,
            slots,
            styles,
        }
    }
}

impl Widget for CountdownWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let figure_style = if self.countdown.is_finished() {
            self.styles.style("expired")
        } else {
            self.styles.style("figure")
        };

        let areas = Layout::horizontal([Constraint::Length(FIGURE_WIDTH); 3])
            .flex(Flex::Center)
            .spacing(GAP)
            .split(area);

        for (figure, area) in display::visible_figures(self.countdown)
            .into_iter()
            .zip(areas.iter())
        {
            FigureWidget::new(figure.digits)
                .label(self.slots.label(figure.unit))
                .label_style(self.styles.style("label"))
                .digit_style(figure_style)
                .border_style(self.styles.style("figure_border"))
                .render(*area, buf);
        }
    }
}
