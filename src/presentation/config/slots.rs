//! Content placed into the slide's named insertion points

use serde::Deserialize;

use crate::core::display::TimeUnit;

/// Text for each insertion point of the countdown slide.
///
/// Empty slots take no room except `title`, `header` and `footer`, which
/// keep their row so the figures stay put when text is edited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SlideSlots {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub actions: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub days: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub minutes: Option<String>,
    #[serde(default)]
    pub seconds: Option<String>,
}

impl SlideSlots {
    /// Label slot shown above the figure of `unit`
    pub fn label(&self, unit: TimeUnit) -> Option<&str> {
        match unit {
            TimeUnit::Days => self.days.as_deref(),
            TimeUnit::Hours => self.hours.as_deref(),
            TimeUnit::Minutes => self.minutes.as_deref(),
            TimeUnit::Seconds => self.seconds.as_deref(),
        }
    }

    /// Fill every unset slot from `defaults`.
    pub fn merge(&mut self, defaults: &SlideSlots) {
        let pairs = [
            (&mut self.title, &defaults.title),
            (&mut self.notes, &defaults.notes),
            (&mut self.actions, &defaults.actions),
            (&mut self.background, &defaults.background),
            (&mut self.header, &defaults.header),
            (&mut self.footer, &defaults.footer),
            (&mut self.days, &defaults.days),
            (&mut self.hours, &defaults.hours),
            (&mut self.minutes, &defaults.minutes),
            (&mut self.seconds, &defaults.seconds),
        ];
        for (slot, default) in pairs {
            if slot.is_none() {
                slot.clone_from(default);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_label() {
        let slots = SlideSlots {
            hours: Some("Hours".to_owned()),
            ..Default::default()
        };
        assert_eq!(slots.label(TimeUnit::Hours), Some("Hours"));
        assert_eq!(slots.label(TimeUnit::Days), None);
    }

    #[test]
    fn test_merge_keeps_user_values() {
        let mut slots = SlideSlots {
            title: Some("Talk starts soon".to_owned()),
            ..Default::default()
        };
        let defaults = SlideSlots {
            title: Some("Countdown".to_owned()),
            footer: Some("footer".to_owned()),
            ..Default::default()
        };
        slots.merge(&defaults);
        assert_eq!(slots.title.as_deref(), Some("Talk starts soon"));
        assert_eq!(slots.footer.as_deref(), Some("footer"));
        assert_eq!(slots.notes, None);
    }
}
