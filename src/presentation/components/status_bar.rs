use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::action::Action;
use crate::infrastructure::tui::Frame;
use crate::presentation::components::Component;
use crate::presentation::widgets::StatusBarWidget;

/// Bottom row showing the latest system message or error
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    message: Option<String>,
    is_error: bool,
}

impl StatusBar {
    pub fn new(message: Option<String>) -> Self {
        Self {
            message,
            is_error: false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SystemMessage(message) => {
                self.message = Some(message);
                self.is_error = false;
            }
            Action::Error(message) => {
                self.message = Some(message);
                self.is_error = true;
            }
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [_, line] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        f.render_widget(Clear, line);
        f.render_widget(StatusBarWidget::new(self.message(), self.is_error), line);

        Ok(())
    }
}
