use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::countdown::CountdownConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    Key(KeyEvent),
    SystemMessage(String),
    /// One-second firing of the countdown timer with the given generation
    TimerTick(u64),
    Start,
    Stop,
    Restart,
    Configure(CountdownConfig),
    NavigateAway,
    SlideDidLoad,
    CountdownExpired,
}

impl Action {
    /// Actions fired on every tick or frame, kept out of debug logs
    pub fn is_frequent(&self) -> bool {
        matches!(self, Action::Tick | Action::Render | Action::TimerTick(_))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_frequent_detection() {
        assert!(Action::Tick.is_frequent());
        assert!(Action::Render.is_frequent());
        assert!(Action::TimerTick(3).is_frequent());
        assert!(!Action::Start.is_frequent());
        assert!(!Action::SlideDidLoad.is_frequent());
    }

    #[test]
    fn test_deserialize_from_keybinding_value() {
        let action: Action = json5::from_str(r#""Restart""#).unwrap_or(Action::Quit);
        assert_eq!(action, Action::Restart);
    }
}
