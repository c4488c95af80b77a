use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

/// Last status or error message, one row high
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    is_error: bool,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, is_error: bool) -> Self {
        Self { message, is_error }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray).italic()
        };
        Paragraph::new(self.message.unwrap_or_default())
            .style(style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_message() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buffer = Buffer::empty(area);
        StatusBarWidget::new(Some("Time is up"), false).render(area, &mut buffer);
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.starts_with("Time is up"));
        assert_eq!(buffer[(0, 0)].fg, Color::Gray);
    }

    #[test]
    fn test_render_error() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buffer = Buffer::empty(area);
        StatusBarWidget::new(Some("boom"), true).render(area, &mut buffer);
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
    }

    #[test]
    fn test_render_none() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buffer = Buffer::empty(area);
        StatusBarWidget::default().render(area, &mut buffer);
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert_eq!(content.trim(), "");
    }
}
