//! Reusable UI widgets
//!
//! Stateless renderers for the countdown slide and its chrome.

pub mod countdown;
pub mod figure;
pub mod slide;
pub mod status_bar;

pub use countdown::CountdownWidget;
pub use figure::FigureWidget;
pub use slide::SlideWidget;
pub use status_bar::StatusBarWidget;
