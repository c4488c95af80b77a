use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::core::countdown::Countdown;
use crate::presentation::config::{SlideSlots, Styles};
use crate::presentation::widgets::countdown::{CountdownWidget, COUNTDOWN_HEIGHT};

/// Full countdown slide: header, title, figures, notes, actions and footer
/// drawn over the background slot.
pub struct SlideWidget<'a> {
    countdown: &'a Countdown,
    slots: &'a SlideSlots,
    styles: &'a Styles,
}

impl<'a> SlideWidget<'a> {
    pub fn new(countdown: &'a Countdown, slots: &'a SlideSlots, styles: &'a Styles) -> Self {
        Self {
            countdown,
            slots,
            styles,
        }
    }

    fn text(&self, slot: &Option<String>, style_key: &str) -> Paragraph<'a> {
        Paragraph::new(slot.clone().unwrap_or_default())
            .style(self.styles.style(style_key))
            .centered()
            .wrap(Wrap { trim: true })
    }

    fn height_of(slot: &Option<String>) -> u16 {
        slot.as_deref()
            .map(|s| s.lines().count().max(1) as u16)
            .unwrap_or(0)
    }
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if let Some(background) = &self.slots.background {
            Paragraph::new(background.as_str())
                .style(self.styles.style("background"))
                .wrap(Wrap { trim: false })
                .render(area, buf);
        }

        let [header, _, title, _, countdown, _, notes, actions, _, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(COUNTDOWN_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(Self::height_of(&self.slots.notes)),
            Constraint::Length(Self::height_of(&self.slots.actions)),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.text(&self.slots.header, "header").render(header, buf);
        self.text(&self.slots.title, "title").render(title, buf);
        CountdownWidget::new(self.countdown, self.slots, self.styles).render(countdown, buf);
        self.text(&self.slots.notes, "notes").render(notes, buf);
        self.text(&self.slots.actions, "actions").render(actions, buf);
        self.text(&self.slots.footer, "footer").render(footer, buf);
    }
}
