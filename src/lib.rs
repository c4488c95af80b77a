//! # slide-countdown
//!
//! A countdown slide for terminal presentations, built with Rust and Ratatui.
//!
//! The slide shows the time left until a fixed moment (or for a fixed
//! duration) as three two-digit figures, surrounded by title, notes, actions,
//! header and footer text. A one-second timer drives the countdown and stops
//! itself once zero is reached.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use slide_countdown::core::{display, Countdown, CountdownConfig};
//!
//! let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
//! let config = CountdownConfig::new(0, 0, 0, 0).until("2030-01-01T01:30:00Z");
//! let countdown = Countdown::initialize(&config, now);
//!
//! assert_eq!((countdown.hours(), countdown.minutes()), (1, 30));
//! let figures = display::visible_figures(&countdown);
//! assert_eq!(figures[1].digits.to_string(), "30");
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Countdown arithmetic, digit formatting and the slide lifecycle
//! - [`infrastructure`] - Timer, terminal, CLI and configuration loading
//! - [`presentation`] - Components, widgets and their configuration
//! - [`app`] - The event loop hosting the slide

pub mod action;
pub mod app;
pub mod core;
pub mod infrastructure;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
