//! Terminal abstraction
//!
//! The app loop only talks to [`TuiLike`], so it runs the same against the
//! crossterm terminal ([`real::RealTui`]) and the headless one used in tests
//! ([`test::TestTui`]).

pub mod real;

use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::{Rect, Size};
use serde::{Deserialize, Serialize};

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

/// Future returned by [`TuiLike::next`]
pub type NextEvent<'a> = Pin<Box<dyn Future<Output = Option<Event>> + Send + 'a>>;

/// Terminal input plus the tick and render beats of the event loop
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    /// The input stream ended
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;

    fn exit(&mut self) -> Result<()>;

    /// Hand the terminal back to the shell until the process is resumed.
    fn suspend(&mut self) -> Result<()> {
        self.exit()
    }

    fn resume(&mut self) -> Result<()> {
        self.enter()
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;

    fn size(&self) -> Result<Size>;

    fn resize(&mut self, area: Rect) -> Result<()>;

    /// Next event, or `None` once no more will arrive.
    fn next(&mut self) -> NextEvent<'_>;
}
