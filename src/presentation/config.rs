//! Slide configuration
//!
//! Text slots, colours and key bindings, all read from the `slots`, `styles`
//! and `keybindings` sections of the config file.

pub mod keybindings;
pub mod slots;
pub mod styles;

pub use keybindings::KeyBindings;
pub use slots::SlideSlots;
pub use styles::Styles;
