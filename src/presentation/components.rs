//! Stateful UI components
//!
//! Components receive terminal events and actions from the app loop, may
//! answer with follow-up actions, and draw themselves into a frame.

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    infrastructure::{
        config::Config,
        tui::{Event, Frame},
    },
};

pub mod countdown_slide;
pub mod status_bar;

pub use countdown_slide::CountdownSlide;
pub use status_bar::StatusBar;

pub trait Component {
    /// Give the component a channel to emit actions on.
    fn register_action_handler(&mut self, _tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn register_config_handler(&mut self, _config: Config) -> Result<()> {
        Ok(())
    }

    /// Called once the component is on screen.
    fn init(&mut self, _area: Rect) -> Result<()> {
        Ok(())
    }

    /// Called before the component goes away.
    fn unmount(&mut self) -> Result<()> {
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        let r = match event {
            Some(Event::Key(key_event)) => self.handle_key_events(key_event)?,
            Some(Event::Mouse(mouse_event)) => self.handle_mouse_events(mouse_event)?,
            _ => None,
        };
        Ok(r)
    }

    fn handle_key_events(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}
