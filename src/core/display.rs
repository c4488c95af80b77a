//! Figure formatting for the countdown display

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::countdown::Countdown;

/// One countdown unit, also the name of its label slot
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub fn value_of(&self, countdown: &Countdown) -> i64 {
        match self {
            TimeUnit::Days => countdown.days(),
            TimeUnit::Hours => countdown.hours(),
            TimeUnit::Minutes => countdown.minutes(),
            TimeUnit::Seconds => countdown.seconds(),
        }
    }
}

/// Tens and units digit of a two-digit figure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitPair {
    pub tens: i64,
    pub units: i64,
}

impl From<(i64, i64)> for DigitPair {
    fn from((tens, units): (i64, i64)) -> Self {
        Self { tens, units }
    }
}

impl fmt::Display for DigitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tens, self.units)
    }
}

/// Split `value` into its tens and units digits.
///
/// Values of 100 or more keep only their last two digits. Negative values
/// are passed through remainder arithmetic unchanged, e.g. `-1` gives
/// `(0, -1)`.
pub fn format_digit_pair(value: i64) -> DigitPair {
    let tens = if value >= 10 { (value / 10) % 10 } else { 0 };
    DigitPair {
        tens,
        units: value % 10,
    }
}

/// Units shown for the given number of remaining days.
///
/// Seconds are hidden while at least one full day remains.
pub fn select_visible_units(days: i64) -> [TimeUnit; 3] {
    if days >= 1 {
        [TimeUnit::Days, TimeUnit::Hours, TimeUnit::Minutes]
    } else {
        [TimeUnit::Hours, TimeUnit::Minutes, TimeUnit::Seconds]
    }
}

/// A visible unit together with its digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub unit: TimeUnit,
    pub digits: DigitPair,
}

/// Figures to draw for `countdown`, in display order.
pub fn visible_figures(countdown: &Countdown) -> [Figure; 3] {
    select_visible_units(countdown.days()).map(|unit| Figure {
        unit,
        digits: format_digit_pair(unit.value_of(countdown)),
    })
}
