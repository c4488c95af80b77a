//! Countdown domain
//!
//! - Countdown model and its tick rules
//! - Figure formatting
//! - The lifecycle surface a deck drives slides through

pub mod countdown;
pub mod display;
pub mod slide;

pub use countdown::{Countdown, CountdownConfig, TickOutcome};
pub use display::{format_digit_pair, select_visible_units, DigitPair, TimeUnit};
pub use slide::Slide;
