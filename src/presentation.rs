//! Presentation layer
//!
//! This module contains the UI side of the slide:
//! - Components driven by the app loop
//! - Reusable widgets
//! - Configuration (slots, styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
